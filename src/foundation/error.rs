/// Convenience result type used across flowframe.
pub type FlowframeResult<T> = Result<T, FlowframeError>;

/// Top-level error taxonomy used by the engine APIs.
///
/// Every variant is fatal to the call that produced it. Recoverable per-frame conditions are
/// reported as [`DegenerateInput`] instead.
#[derive(thiserror::Error, Debug)]
pub enum FlowframeError {
    /// A numeric configuration value violates its invariant (ranges, steps, color stops).
    #[error("domain error: {0}")]
    Domain(String),

    /// Structurally invalid diagram data (unknown ids, overlapping tracks, bad frames).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while evaluating a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlowframeError {
    /// Build a [`FlowframeError::Domain`] value.
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    /// Build a [`FlowframeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FlowframeError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`FlowframeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FlowframeError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

/// Degenerate input that was replaced by a defined fallback value.
///
/// These never abort frame evaluation; they are exposed so callers can surface them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateInput {
    /// Path with fewer than two points.
    TooFewPoints,
    /// Path whose points all coincide.
    ZeroLengthPath,
    /// Aspect-ratio correction against a zero scene height.
    ZeroSceneHeight,
    /// Transform derivation against a zero scene or viewport width.
    ZeroSceneWidth,
    /// Unclamped camera extrapolation reaching a zero or negative viewport size.
    NonPositiveViewport,
}

impl std::fmt::Display for DegenerateInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::TooFewPoints => "path has fewer than two points",
            Self::ZeroLengthPath => "path has zero length",
            Self::ZeroSceneHeight => "scene height is zero, aspect lock skipped",
            Self::ZeroSceneWidth => "scene or viewport width is zero, identity scale used",
            Self::NonPositiveViewport => {
                "extrapolated viewport size is not positive, nearer boundary size used"
            }
        };
        f.write_str(msg)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
