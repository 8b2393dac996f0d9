//! Serialization of polylines for the rendering boundary.

use crate::{
    foundation::core::{BezPath, Point},
    plane::format::format_coord,
};

/// Default number of decimals written by [`polyline_to_svg_path`].
pub const SVG_PATH_PRECISION: usize = 3;

/// SVG path data `M x,y L x,y ...` for an open polyline.
///
/// Coordinates are written with at most `precision` decimals, trailing zeros trimmed.
/// An empty polyline yields an empty string.
pub fn polyline_to_svg_path(points: &[Point], precision: usize) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(if i == 0 { 'M' } else { 'L' });
        out.push_str(&format_coord(p.x, precision));
        out.push(',');
        out.push_str(&format_coord(p.y, precision));
    }
    out
}

/// Open [`BezPath`] made of straight segments through `points`.
pub fn polyline_to_bez_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    if let Some(&first) = iter.next() {
        path.move_to(first);
        for &p in iter {
            path.line_to(p);
        }
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/path/svg.rs"]
mod tests;
