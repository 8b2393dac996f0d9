use crate::{
    animation::ease::Ease,
    foundation::core::{FrameIndex, Point},
    foundation::error::{FlowframeError, FlowframeResult},
};

/// Linear interpolation between two values of the same type.
pub trait Lerp: Sized {
    /// Interpolate from `a` (at `t = 0`) to `b` (at `t = 1`). `t` is not clamped.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// Keyframed value track sampled by absolute frame index.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframes<T> {
    /// Keys sorted by frame.
    pub keys: Vec<Keyframe<T>>,
    /// Interpolation between neighbouring keys.
    #[serde(default)]
    pub mode: InterpMode,
    /// Value used when no keys exist.
    #[serde(default)]
    pub default: Option<T>,
}

/// Single key of a [`Keyframes`] track.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    /// Frame at which the key's value is reached.
    pub frame: FrameIndex,
    /// Value at `frame`.
    pub value: T,
    /// Ease applied toward the next key.
    #[serde(default = "linear")]
    pub ease: Ease,
}

fn linear() -> Ease {
    Ease::Linear
}

/// Interpolation mode between keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum InterpMode {
    /// Keep the previous key's value until the next key.
    Hold,
    /// Interpolate between keys using the previous key's ease.
    #[default]
    Linear,
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    /// Track that yields `value` for every frame.
    pub fn constant(value: T) -> Self {
        Self {
            keys: vec![Keyframe {
                frame: FrameIndex(0),
                value,
                ease: Ease::Linear,
            }],
            mode: InterpMode::Hold,
            default: None,
        }
    }

    /// Check the key ordering invariants.
    pub fn validate(&self) -> FlowframeResult<()> {
        if self.keys.is_empty() && self.default.is_none() {
            return Err(FlowframeError::validation(
                "Keyframes must have at least one key or a default value",
            ));
        }
        if !self.keys.windows(2).all(|w| w[0].frame.0 <= w[1].frame.0) {
            return Err(FlowframeError::validation(
                "Keyframes keys must be sorted by frame",
            ));
        }
        Ok(())
    }

    /// Sample the track at `frame`, holding the first/last key outside the keyed range.
    pub fn sample(&self, frame: FrameIndex) -> FlowframeResult<T> {
        if self.keys.is_empty() {
            return self
                .default
                .clone()
                .ok_or_else(|| FlowframeError::evaluation("Keyframes has no keys and no default"));
        }

        let f = frame.0;
        let idx = self.keys.partition_point(|k| k.frame.0 <= f);

        if idx == 0 {
            return Ok(self.keys[0].value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(self.keys[self.keys.len() - 1].value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.frame.0.saturating_sub(a.frame.0);
        if denom == 0 {
            return Ok(a.value.clone());
        }

        let t = ((f - a.frame.0) as f64) / (denom as f64);
        match self.mode {
            InterpMode::Hold => Ok(a.value.clone()),
            InterpMode::Linear => Ok(T::lerp(&a.value, &b.value, a.ease.apply(t))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
