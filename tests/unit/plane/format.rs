use super::*;

#[test]
fn integers_render_without_decimals() {
    assert_eq!(format_tick(3.0, 2), "3");
    assert_eq!(format_tick(-12.0, 4), "-12");
    assert_eq!(format_tick(-0.0, 1), "0");
    assert_eq!(format_tick(0.30000000000000004 * 10.0, 2), "3");
}

#[test]
fn fractions_honor_precision() {
    assert_eq!(format_tick(0.5, 1), "0.5");
    assert_eq!(format_tick(0.5, 3), "0.500");
    assert_eq!(format_tick(0.30000000000000004, 2), "0.30");
    assert_eq!(format_tick(-2.26, 1), "-2.3");
}

#[test]
fn coords_trim_trailing_zeros() {
    assert_eq!(format_coord(40.0, 3), "40");
    assert_eq!(format_coord(12.5, 3), "12.5");
    assert_eq!(format_coord(1.0 / 3.0, 3), "0.333");
    assert_eq!(format_coord(-0.0001, 3), "0");
    assert_eq!(format_coord(250.0, 0), "250");
}
