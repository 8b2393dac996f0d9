use serde::{Deserialize, Serialize};

use crate::foundation::error::{FlowframeError, FlowframeResult};

/// Closed numeric interval `[min, max]` with `min < max` once validated.
///
/// Deserializes from either `{"min": a, "max": b}` or `[a, b]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DataRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl DataRange {
    /// Build a validated range.
    pub fn new(min: f64, max: f64) -> FlowframeResult<Self> {
        let r = Self { min, max };
        r.validate("range")?;
        Ok(r)
    }

    /// Check `min < max` (both finite); `label` names the range in the error message.
    pub fn validate(&self, label: &str) -> FlowframeResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(FlowframeError::domain(format!(
                "{label} bounds must be finite"
            )));
        }
        if self.min >= self.max {
            return Err(FlowframeError::domain(format!(
                "{label} min must be less than max"
            )));
        }
        Ok(())
    }

    /// `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Clamp `v` into the range.
    pub fn clamp(&self, v: f64) -> f64 {
        v.clamp(self.min, self.max)
    }

    /// Position of `v` relative to the range: `0` at `min`, `1` at `max`.
    pub fn normalize(&self, v: f64) -> f64 {
        (v - self.min) / self.span()
    }
}

impl<'de> Deserialize<'de> for DataRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Obj { min: f64, max: f64 },
            Pair([f64; 2]),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Obj { min, max } => Self { min, max },
            Repr::Pair([min, max]) => Self { min, max },
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plane/range.rs"]
mod tests;
