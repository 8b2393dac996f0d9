use super::*;
use kurbo::PathEl;

#[test]
fn writes_move_then_line_commands() {
    let pts = [
        Point::new(40.0, 460.0),
        Point::new(400.0, 250.0),
        Point::new(760.0, 40.0),
    ];
    assert_eq!(
        polyline_to_svg_path(&pts, SVG_PATH_PRECISION),
        "M40,460 L400,250 L760,40"
    );
}

#[test]
fn respects_precision_and_trims_zeros() {
    let pts = [Point::new(1.0 / 3.0, -2.5), Point::new(0.12345, 7.0)];
    assert_eq!(polyline_to_svg_path(&pts, 2), "M0.33,-2.5 L0.12,7");
}

#[test]
fn empty_and_single_point_paths() {
    assert_eq!(polyline_to_svg_path(&[], 3), "");
    assert_eq!(polyline_to_svg_path(&[Point::new(1.0, 2.0)], 3), "M1,2");
    assert!(polyline_to_bez_path(&[]).elements().is_empty());
}

#[test]
fn bez_path_has_one_element_per_point() {
    let pts = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)];
    let path = polyline_to_bez_path(&pts);
    assert_eq!(
        path.elements(),
        &[
            PathEl::MoveTo(pts[0]),
            PathEl::LineTo(pts[1]),
            PathEl::LineTo(pts[2]),
        ]
    );
}
