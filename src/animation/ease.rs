/// Easing curves used to reshape normalized animation progress.
///
/// All curves are quadratic (or linear) and map `0 -> 0`, `1 -> 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out (smoothstep-like, two mirrored parabolas).
    #[default]
    InOutQuad,
}

impl Ease {
    /// Apply this easing function to normalized progress `t`, clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
        }
    }

    /// Apply the curve inside `[0, 1]` and pass progress through unchanged outside it.
    ///
    /// Used when a camera transition is allowed to extrapolate past its frame range.
    pub fn apply_extrapolated(self, t: f64) -> f64 {
        if (0.0..=1.0).contains(&t) {
            self.apply(t)
        } else {
            t
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
