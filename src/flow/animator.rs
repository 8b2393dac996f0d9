//! Markers that travel along a flow path at a speed proportional to a signed flow value.

use serde::{Deserialize, Serialize};

use crate::{
    color::rgb::Rgb8,
    foundation::core::{FrameIndex, Point},
    foundation::error::{FlowframeError, FlowframeResult},
    foundation::math::wrap01,
    path::sampler::PathSampler,
};

/// Path cycles per frame at full flow (`|flow| == max_flow`).
pub const SPEED_CONSTANT: f64 = 0.02;

/// Flows with an absolute value below this draw no markers.
pub const FLOW_EPSILON: f64 = 1e-3;

/// Marker layout and styling for one flow line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowStyle {
    /// Markers spread evenly along the path.
    pub dot_count: usize,
    /// Path cycles per frame at full flow.
    pub speed: f64,
    /// Dead band around zero flow.
    pub epsilon: f64,
    /// Marker radius in pixels.
    pub dot_radius: f64,
    /// Marker fill color.
    pub color: Rgb8,
}

impl Default for FlowStyle {
    fn default() -> Self {
        Self {
            dot_count: 8,
            speed: SPEED_CONSTANT,
            epsilon: FLOW_EPSILON,
            dot_radius: 4.0,
            color: Rgb8::new(0x29, 0xab, 0xca),
        }
    }
}

impl FlowStyle {
    /// Reject non-finite or negative style parameters.
    pub fn validate(&self) -> FlowframeResult<()> {
        if !self.speed.is_finite() {
            return Err(FlowframeError::domain("flow speed must be finite"));
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(FlowframeError::domain("flow epsilon must be a finite value >= 0"));
        }
        if !self.dot_radius.is_finite() || self.dot_radius < 0.0 {
            return Err(FlowframeError::domain(
                "flow dot_radius must be a finite value >= 0",
            ));
        }
        Ok(())
    }
}

/// One marker on a flow path.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FlowMarker {
    /// Marker slot in `0..dot_count`.
    pub index: usize,
    /// Normalized arc length in `[0, 1)`.
    pub t: f64,
    /// Screen position.
    pub position: Point,
}

/// `flow / max_flow` clamped to `[-1, 1]`; zero when either input is unusable.
pub fn normalized_flow(flow: f64, max_flow: f64) -> f64 {
    if flow.is_nan() || max_flow.is_nan() || max_flow <= 0.0 {
        return 0.0;
    }
    (flow / max_flow).clamp(-1.0, 1.0)
}

fn markers_with(
    frame: FrameIndex,
    path: &PathSampler,
    flow: f64,
    max_flow: f64,
    dot_count: usize,
    speed: f64,
    epsilon: f64,
) -> Vec<FlowMarker> {
    let no_scale = max_flow.is_nan() || max_flow <= 0.0;
    if dot_count == 0 || no_scale || flow.is_nan() || flow.abs() < epsilon {
        return Vec::new();
    }

    let phase = frame.0 as f64 * normalized_flow(flow, max_flow) * speed;
    let count = dot_count as f64;
    (0..dot_count)
        .map(|index| {
            let t = wrap01(phase + index as f64 / count);
            FlowMarker {
                index,
                t,
                position: path.point_at(t),
            }
        })
        .collect()
}

/// Marker positions at `frame` using [`SPEED_CONSTANT`] and [`FLOW_EPSILON`].
///
/// Positive flow moves markers from the first path point toward the last, negative flow the
/// other way. No markers are produced for near-zero flow or a non-positive `max_flow`.
pub fn marker_positions(
    frame: FrameIndex,
    path: &PathSampler,
    flow: f64,
    max_flow: f64,
    dot_count: usize,
) -> Vec<Point> {
    markers_with(
        frame,
        path,
        flow,
        max_flow,
        dot_count,
        SPEED_CONSTANT,
        FLOW_EPSILON,
    )
    .into_iter()
    .map(|m| m.position)
    .collect()
}

/// A flow path with its scale and styling, ready to place markers for any frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowAnimator {
    sampler: PathSampler,
    max_flow: f64,
    style: FlowStyle,
}

impl FlowAnimator {
    /// Validate `max_flow` and `style` and precompute the path parametrization.
    pub fn new(points: Vec<Point>, max_flow: f64, style: FlowStyle) -> FlowframeResult<Self> {
        if !max_flow.is_finite() || max_flow <= 0.0 {
            return Err(FlowframeError::domain("max_flow must be a finite value > 0"));
        }
        style.validate()?;
        Ok(Self {
            sampler: PathSampler::new(points),
            max_flow,
            style,
        })
    }

    /// Path parametrization.
    pub fn sampler(&self) -> &PathSampler {
        &self.sampler
    }

    /// Flow magnitude that moves markers at full speed.
    pub fn max_flow(&self) -> f64 {
        self.max_flow
    }

    /// Marker styling.
    pub fn style(&self) -> &FlowStyle {
        &self.style
    }

    /// Markers at `frame` for the given `flow`.
    pub fn markers(&self, frame: FrameIndex, flow: f64) -> Vec<FlowMarker> {
        markers_with(
            frame,
            &self.sampler,
            flow,
            self.max_flow,
            self.style.dot_count,
            self.style.speed,
            self.style.epsilon,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/flow/animator.rs"]
mod tests;
