use crate::foundation::error::{FlowframeError, FlowframeResult};

/// Tolerance, in units of `step`, used when deciding whether a boundary value is a tick.
pub const TICK_EPSILON: f64 = 1e-9;

const MAX_TICKS: f64 = 100_000.0;

/// All multiples of `step` inside `[min, max]`, ascending and without duplicates.
///
/// Values are computed as `k * step` for integer `k`, never by repeated addition.
pub fn ticks(min: f64, max: f64, step: f64) -> FlowframeResult<Vec<f64>> {
    if !step.is_finite() || step <= 0.0 {
        return Err(FlowframeError::domain(format!(
            "tick step must be a finite value > 0 (got {step})"
        )));
    }
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(FlowframeError::domain(format!(
            "tick range must be finite with min <= max (got [{min}, {max}])"
        )));
    }

    let k_start = (min / step - TICK_EPSILON).ceil();
    let k_end = (max / step + TICK_EPSILON).floor();
    if k_end - k_start + 1.0 > MAX_TICKS {
        return Err(FlowframeError::domain(format!(
            "tick step {step} is too small for range [{min}, {max}]"
        )));
    }

    if k_end < k_start {
        return Ok(Vec::new());
    }

    // Integer counter: past 2^53 `k += 1.0` would not advance.
    let count = (k_end - k_start) as u64 + 1;
    let mut out: Vec<f64> = Vec::with_capacity(count as usize);
    for i in 0..count {
        // `+ 0.0` folds negative zero into positive zero.
        let v = (k_start + i as f64) * step + 0.0;
        if out.last().is_none_or(|&last| v > last) {
            out.push(v);
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/plane/ticks.rs"]
mod tests;
