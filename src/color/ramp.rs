//! Scalar-to-color mapping through piecewise-linear gradient stops.

use serde::{Deserialize, Serialize};

use crate::{
    animation::anim::Lerp,
    color::rgb::Rgb8,
    foundation::error::{FlowframeError, FlowframeResult},
};

/// One gradient stop: a color pinned at a normalized offset.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    /// Position in `[0, 1]`.
    pub offset: f64,
    /// Color at `offset`.
    pub color: Rgb8,
}

impl ColorStop {
    /// Build a stop.
    pub const fn new(offset: f64, color: Rgb8) -> Self {
        Self { offset, color }
    }
}

/// Validated gradient: at least two stops, strictly increasing offsets from `0` to `1`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ColorStop>", into = "Vec<ColorStop>")]
pub struct ColorRamp {
    stops: Vec<ColorStop>,
}

impl ColorRamp {
    /// Validate `stops` and build a ramp.
    pub fn new(stops: Vec<ColorStop>) -> FlowframeResult<Self> {
        let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
            return Err(FlowframeError::domain("color stops must not be empty"));
        };
        if stops.len() < 2 {
            return Err(FlowframeError::domain(
                "color stops must contain at least two stops",
            ));
        }
        if stops.iter().any(|s| !s.offset.is_finite()) {
            return Err(FlowframeError::domain("color stop offsets must be finite"));
        }
        if first.offset != 0.0 {
            return Err(FlowframeError::domain("first color stop offset must be 0"));
        }
        if last.offset != 1.0 {
            return Err(FlowframeError::domain("last color stop offset must be 1"));
        }
        if !stops.windows(2).all(|w| w[0].offset < w[1].offset) {
            return Err(FlowframeError::domain(
                "color stop offsets must be strictly increasing",
            ));
        }
        Ok(Self { stops })
    }

    /// The validated stops in offset order.
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Color for `value` normalized against `max`.
    ///
    /// `value` is clamped to `[0, max]`; a non-positive `max` maps everything to the first stop.
    pub fn color_at(&self, value: f64, max: f64) -> Rgb8 {
        self.color_at_offset(normalize(value, max))
    }

    /// Color at normalized offset `t`, clamped to the end stops.
    pub fn color_at_offset(&self, t: f64) -> Rgb8 {
        let first = self.stops[0];
        let last = self.stops[self.stops.len() - 1];
        if t.is_nan() || t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }

        for w in self.stops.windows(2) {
            let (a, b) = (w[0], w[1]);
            if a.offset <= t && t <= b.offset {
                let local = (t - a.offset) / (b.offset - a.offset);
                return Rgb8::lerp(&a.color, &b.color, local);
            }
        }
        last.color
    }
}

impl Default for ColorRamp {
    /// Blue, green, yellow, red at `0`, `0.33`, `0.66`, `1`.
    fn default() -> Self {
        Self {
            stops: vec![
                ColorStop::new(0.0, Rgb8::new(0, 0, 255)),
                ColorStop::new(0.33, Rgb8::new(0, 255, 0)),
                ColorStop::new(0.66, Rgb8::new(255, 255, 0)),
                ColorStop::new(1.0, Rgb8::new(255, 0, 0)),
            ],
        }
    }
}

impl TryFrom<Vec<ColorStop>> for ColorRamp {
    type Error = FlowframeError;

    fn try_from(stops: Vec<ColorStop>) -> Result<Self, Self::Error> {
        Self::new(stops)
    }
}

impl From<ColorRamp> for Vec<ColorStop> {
    fn from(ramp: ColorRamp) -> Self {
        ramp.stops
    }
}

/// Map `value` in `[0, max]` through `ramp`.
pub fn color_at(value: f64, max: f64, ramp: &ColorRamp) -> Rgb8 {
    ramp.color_at(value, max)
}

fn normalize(value: f64, max: f64) -> f64 {
    if max <= 0.0 || max.is_nan() || value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, max) / max
}

#[cfg(test)]
#[path = "../../tests/unit/color/ramp.rs"]
mod tests;
