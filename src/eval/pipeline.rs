use rayon::prelude::*;

use crate::{
    eval::evaluator::{EvaluatedFrame, PreparedDiagram},
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{FlowframeError, FlowframeResult},
    scene::model::Diagram,
};

/// Threading controls for multi-frame evaluation.
#[derive(Clone, Debug, Default)]
pub struct FrameThreading {
    /// Evaluate frames on a rayon pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

/// Evaluate a frame range (inclusive start, exclusive end), ordered by frame.
///
/// Sequential and parallel evaluation produce identical output.
pub fn eval_frames(
    diagram: &Diagram,
    range: FrameRange,
    threading: &FrameThreading,
) -> FlowframeResult<Vec<EvaluatedFrame>> {
    let prepared = PreparedDiagram::new(diagram.clone())?;
    eval_prepared_frames(&prepared, range, threading)
}

/// [`eval_frames`] for an already prepared diagram.
pub fn eval_prepared_frames(
    prepared: &PreparedDiagram,
    range: FrameRange,
    threading: &FrameThreading,
) -> FlowframeResult<Vec<EvaluatedFrame>> {
    if range.is_empty() {
        return Err(FlowframeError::validation("eval range must be non-empty"));
    }
    let duration = prepared.diagram().duration;
    if range.end.0 > duration.0 {
        return Err(FlowframeError::evaluation(format!(
            "eval range end {} exceeds diagram duration {}",
            range.end.0, duration.0
        )));
    }

    if !threading.parallel {
        return range.frames().map(|f| prepared.eval_frame(f)).collect();
    }

    let pool = build_thread_pool(threading.threads)?;
    tracing::debug!(
        frames = range.len_frames(),
        threads = pool.current_num_threads(),
        "parallel frame evaluation"
    );
    pool.install(|| {
        (range.start.0..range.end.0)
            .into_par_iter()
            .map(|f| prepared.eval_frame(FrameIndex(f)))
            .collect()
    })
}

fn build_thread_pool(threads: Option<usize>) -> FlowframeResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(FlowframeError::validation(
            "eval_frames 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| FlowframeError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/eval/pipeline.rs"]
mod tests;
