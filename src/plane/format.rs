/// Format a tick label: integral values without decimals, others at `precision` digits.
pub fn format_tick(value: f64, precision: usize) -> String {
    let rounded = value.round();
    if (value - rounded).abs() < 1e-9 {
        // `+ 0.0` keeps "-0" out of labels.
        return format!("{:.0}", rounded + 0.0);
    }
    format!("{value:.precision$}")
}

/// Compact decimal for serialized geometry: fixed precision, trailing zeros trimmed.
pub(crate) fn format_coord(value: f64, precision: usize) -> String {
    let s = format!("{value:.precision$}");
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        s
    };
    if s == "-0" { "0".to_owned() } else { s }
}

#[cfg(test)]
#[path = "../../tests/unit/plane/format.rs"]
mod tests;
