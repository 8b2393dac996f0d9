use serde::{Deserialize, Serialize};

use crate::{
    animation::{anim::Lerp, ease::Ease},
    foundation::core::{FrameIndex, Point},
    foundation::error::{FlowframeError, FlowframeResult},
    foundation::math::clamp01,
};

/// X coordinates for plotted series.
///
/// A flat JSON array is shared by every y-series; an array of arrays gives one x-sequence
/// per y-series, matched by index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum XValues {
    /// One x-sequence shared by all series.
    Shared(Vec<f64>),
    /// One x-sequence per series.
    PerSeries(Vec<Vec<f64>>),
}

impl Default for XValues {
    fn default() -> Self {
        Self::Shared(Vec::new())
    }
}

impl XValues {
    /// Check that per-series x data lines up with `series_count` y-series.
    pub fn validate(&self, series_count: usize) -> FlowframeResult<()> {
        if let Self::PerSeries(xs) = self
            && xs.len() != series_count
        {
            return Err(FlowframeError::domain(format!(
                "x has {} sequences but there are {series_count} y series",
                xs.len()
            )));
        }
        Ok(())
    }

    /// The x-sequence for series `index`.
    pub fn for_series(&self, index: usize) -> Option<&[f64]> {
        match self {
            Self::Shared(xs) => Some(xs),
            Self::PerSeries(xs) => xs.get(index).map(Vec::as_slice),
        }
    }
}

/// Pair up `xs` and `ys` into world-space points, truncating to the shorter input.
pub fn zip_series(xs: &[f64], ys: &[f64]) -> Vec<Point> {
    xs.iter()
        .zip(ys)
        .map(|(&x, &y)| Point::new(x, y))
        .collect()
}

/// Progressive drawing of a polyline over a frame window.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealSpec {
    /// Frame at which only the first point is visible.
    pub start_frame: FrameIndex,
    /// Frame from which the whole polyline is visible.
    pub end_frame: FrameIndex,
    /// Progress curve.
    #[serde(default)]
    pub ease: Ease,
}

impl RevealSpec {
    /// Reject windows that end before they start.
    pub fn validate(&self) -> FlowframeResult<()> {
        if self.start_frame > self.end_frame {
            return Err(FlowframeError::domain(
                "reveal start_frame must be <= end_frame",
            ));
        }
        Ok(())
    }

    /// Eased reveal progress in `[0, 1]` at `frame`.
    pub fn progress(&self, frame: FrameIndex) -> f64 {
        if self.end_frame == self.start_frame {
            return if frame < self.start_frame { 0.0 } else { 1.0 };
        }
        let span = self.end_frame.offset_from(self.start_frame);
        self.ease.apply(clamp01(frame.offset_from(self.start_frame) / span))
    }
}

/// Prefix of `points` visible at `progress`, with the last segment cut at the fractional point.
///
/// Always returns a fresh vector; `progress` is clamped to `[0, 1]`.
pub fn reveal_polyline(points: &[Point], progress: f64) -> Vec<Point> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let pos = clamp01(progress) * (points.len() - 1) as f64;
    let whole = (pos.floor() as usize).min(points.len() - 1);
    let frac = pos - whole as f64;

    let mut out = points[..=whole].to_vec();
    if frac > 0.0 && whole + 1 < points.len() {
        out.push(<Point as Lerp>::lerp(&points[whole], &points[whole + 1], frac));
    }
    out
}

/// Polyline visible at `frame`: the whole of `points` when `reveal` is `None`.
pub fn series_up_to_frame(
    points: &[Point],
    reveal: Option<&RevealSpec>,
    frame: FrameIndex,
) -> Vec<Point> {
    match reveal {
        Some(r) => reveal_polyline(points, r.progress(frame)),
        None => points.to_vec(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plane/series.rs"]
mod tests;
