/// Clamp scalar value to normalized range `[0, 1]`.
#[inline]
pub(crate) fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Map any finite real into `[0, 1)`.
///
/// Negative inputs wrap from the top, so `-0.25` becomes `0.75`.
#[inline]
pub(crate) fn wrap01(x: f64) -> f64 {
    let w = x.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs.
    if w >= 1.0 { 0.0 } else { w }
}

/// Linear interpolation that returns `a` at `t = 0` and `b` at `t = 1` bit-exactly.
#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
