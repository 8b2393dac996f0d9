use crate::foundation::error::{FlowframeError, FlowframeResult};

/// Human-friendly tick spacing for a range of length `range` split into about `target_ticks`.
///
/// The result is always `1`, `2`, `5` or `10` times a power of ten.
pub fn nice_step(range: f64, target_ticks: usize) -> FlowframeResult<f64> {
    if !range.is_finite() || range <= 0.0 {
        return Err(FlowframeError::domain(format!(
            "nice step range must be a finite value > 0 (got {range})"
        )));
    }
    if target_ticks == 0 {
        return Err(FlowframeError::domain("nice step target tick count must be > 0"));
    }

    let raw = range / target_ticks as f64;
    let exponent = raw.log10().floor() as i32;
    let magnitude = 10f64.powi(exponent);
    let normalized = raw / magnitude;

    let snapped = if normalized < 1.5 {
        1.0
    } else if normalized < 3.5 {
        2.0
    } else if normalized < 7.5 {
        5.0
    } else {
        10.0
    };
    Ok(snapped * magnitude)
}

#[cfg(test)]
#[path = "../../tests/unit/plane/nice.rs"]
mod tests;
