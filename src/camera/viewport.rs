use serde::{Deserialize, Serialize};

use crate::{
    animation::anim::Lerp,
    foundation::core::{Canvas, Point, Rect},
    foundation::error::{FlowframeError, FlowframeResult},
    foundation::math::lerp,
};

/// Visible window into world space: a center and a size in world units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// World x at the screen center.
    pub center_x: f64,
    /// World y at the screen center.
    pub center_y: f64,
    /// Visible world width.
    pub width: f64,
    /// Visible world height.
    pub height: f64,
}

impl Viewport {
    /// Build a validated viewport.
    pub fn new(center_x: f64, center_y: f64, width: f64, height: f64) -> FlowframeResult<Self> {
        let v = Self {
            center_x,
            center_y,
            width,
            height,
        };
        v.validate("viewport")?;
        Ok(v)
    }

    /// Viewport covering `canvas` one-to-one (identity camera).
    pub fn covering(canvas: Canvas) -> Self {
        let c = canvas.center();
        Self {
            center_x: c.x,
            center_y: c.y,
            width: f64::from(canvas.width),
            height: f64::from(canvas.height),
        }
    }

    /// Check finiteness and `width > 0`, `height > 0`; `label` names the value in errors.
    pub fn validate(&self, label: &str) -> FlowframeResult<()> {
        let all_finite = [self.center_x, self.center_y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(FlowframeError::domain(format!(
                "{label} values must be finite"
            )));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(FlowframeError::domain(format!(
                "{label} width and height must be > 0"
            )));
        }
        Ok(())
    }

    /// Center point.
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// World-space rectangle covered by the viewport.
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.center(), (self.width, self.height))
    }
}

impl Lerp for Viewport {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            center_x: lerp(a.center_x, b.center_x, t),
            center_y: lerp(a.center_y, b.center_y, t),
            width: lerp(a.width, b.width, t),
            height: lerp(a.height, b.height, t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/viewport.rs"]
mod tests;
