use serde::{Deserialize, Serialize};

use crate::{
    animation::{anim::Lerp, ease::Ease},
    camera::viewport::Viewport,
    foundation::core::{Canvas, FrameIndex},
    foundation::error::{DegenerateInput, FlowframeError, FlowframeResult},
    foundation::math::clamp01,
};

/// Camera move from `initial` to `target` over `[start_frame, end_frame]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraTransition {
    /// Frame at which the camera is at `initial`.
    pub start_frame: FrameIndex,
    /// Frame at which the camera reaches `target`.
    pub end_frame: FrameIndex,
    /// Viewport at `start_frame`.
    pub initial: Viewport,
    /// Viewport at `end_frame`.
    pub target: Viewport,
    /// Progress curve.
    #[serde(default)]
    pub ease: Ease,
    /// Derive height from width and the scene aspect ratio.
    #[serde(default)]
    pub maintain_aspect_ratio: bool,
    /// Lower bound on the interpolated width.
    #[serde(default)]
    pub min_width: Option<f64>,
    /// Upper bound on the interpolated width.
    #[serde(default)]
    pub max_width: Option<f64>,
    /// Lower bound on the interpolated height.
    #[serde(default)]
    pub min_height: Option<f64>,
    /// Upper bound on the interpolated height.
    #[serde(default)]
    pub max_height: Option<f64>,
    /// Zoom factor; values above 1 shrink the visible world box.
    #[serde(default = "unit_zoom")]
    pub zoom_multiplier: f64,
    /// Hold the end states outside the frame range instead of extrapolating.
    #[serde(default = "clamp_by_default")]
    pub clamp_frames: bool,
}

fn unit_zoom() -> f64 {
    1.0
}

fn clamp_by_default() -> bool {
    true
}

impl CameraTransition {
    /// Transition with default options: in/out quad ease, no constraints, zoom 1, clamped.
    pub fn new(
        start_frame: FrameIndex,
        end_frame: FrameIndex,
        initial: Viewport,
        target: Viewport,
    ) -> Self {
        Self {
            start_frame,
            end_frame,
            initial,
            target,
            ease: Ease::default(),
            maintain_aspect_ratio: false,
            min_width: None,
            max_width: None,
            min_height: None,
            max_height: None,
            zoom_multiplier: unit_zoom(),
            clamp_frames: clamp_by_default(),
        }
    }

    /// Check frame ordering, viewport sizes, zoom and size bounds.
    pub fn validate(&self) -> FlowframeResult<()> {
        if self.start_frame > self.end_frame {
            return Err(FlowframeError::domain(
                "camera transition start_frame must be <= end_frame",
            ));
        }
        self.initial.validate("camera transition initial viewport")?;
        self.target.validate("camera transition target viewport")?;
        if !self.zoom_multiplier.is_finite() || self.zoom_multiplier <= 0.0 {
            return Err(FlowframeError::domain(
                "camera transition zoom_multiplier must be a finite value > 0",
            ));
        }
        check_bounds("width", self.min_width, self.max_width)?;
        check_bounds("height", self.min_height, self.max_height)?;
        Ok(())
    }

    /// Eased progress `u` at `frame`.
    ///
    /// With `clamp_frames` the result stays in `[0, 1]`; otherwise frames outside the range
    /// extrapolate linearly. A zero-length range jumps from `initial` to `target` at
    /// `start_frame`.
    pub fn progress(&self, frame: FrameIndex) -> f64 {
        if self.end_frame == self.start_frame {
            return if frame < self.start_frame { 0.0 } else { 1.0 };
        }
        let raw = frame.offset_from(self.start_frame) / self.end_frame.offset_from(self.start_frame);
        if self.clamp_frames {
            self.ease.apply(clamp01(raw))
        } else {
            self.ease.apply_extrapolated(raw)
        }
    }

    /// Viewport at `frame` after size clamping, zoom and aspect lock, plus any fallback taken.
    ///
    /// An unclamped move extrapolated to a non-positive size takes the nearer boundary
    /// state's size instead.
    pub(crate) fn resolve(
        &self,
        frame: FrameIndex,
        canvas: Canvas,
    ) -> (Viewport, Option<DegenerateInput>) {
        let u = self.progress(frame);
        let lerped = Viewport::lerp(&self.initial, &self.target, u);

        let (mut width, mut height, mut degenerate) =
            self.adjust_size(lerped.width, lerped.height, canvas);
        if !(width > 0.0 && height > 0.0) {
            let nearer = if u < 0.5 { &self.initial } else { &self.target };
            (width, height, _) = self.adjust_size(nearer.width, nearer.height, canvas);
            degenerate = Some(DegenerateInput::NonPositiveViewport);
        }

        let viewport = Viewport {
            center_x: lerped.center_x,
            center_y: lerped.center_y,
            width,
            height,
        };
        (viewport, degenerate)
    }

    fn adjust_size(
        &self,
        width: f64,
        height: f64,
        canvas: Canvas,
    ) -> (f64, f64, Option<DegenerateInput>) {
        let width = clamp_opt(width, self.min_width, self.max_width) / self.zoom_multiplier;
        let mut height = clamp_opt(height, self.min_height, self.max_height) / self.zoom_multiplier;

        let mut degenerate = None;
        if self.maintain_aspect_ratio {
            match canvas.aspect() {
                Some(aspect) if aspect > 0.0 => height = width / aspect,
                Some(_) => degenerate = Some(DegenerateInput::ZeroSceneWidth),
                None => degenerate = Some(DegenerateInput::ZeroSceneHeight),
            }
        }
        (width, height, degenerate)
    }
}

fn clamp_opt(v: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    let v = min.map_or(v, |m| v.max(m));
    max.map_or(v, |m| v.min(m))
}

fn check_bounds(axis: &str, min: Option<f64>, max: Option<f64>) -> FlowframeResult<()> {
    for (name, bound) in [("min", min), ("max", max)] {
        if let Some(b) = bound
            && (!b.is_finite() || b <= 0.0)
        {
            return Err(FlowframeError::domain(format!(
                "camera transition {name}_{axis} must be a finite value > 0"
            )));
        }
    }
    if let (Some(lo), Some(hi)) = (min, max)
        && lo > hi
    {
        return Err(FlowframeError::domain(format!(
            "camera transition min_{axis} must be <= max_{axis}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/camera/transition.rs"]
mod tests;
