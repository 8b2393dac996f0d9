//! Arc-length parametrization of point polylines.

use crate::{
    foundation::core::Point,
    foundation::error::DegenerateInput,
    foundation::math::{clamp01, lerp},
};

/// Polyline with cached cumulative segment lengths.
///
/// Construction never fails: degenerate paths are recorded and sampled with a fixed fallback.
#[derive(Clone, Debug, PartialEq)]
pub struct PathSampler {
    points: Vec<Point>,
    // cumulative[i] = length from points[0] to points[i]
    cumulative: Vec<f64>,
    degenerate: Option<DegenerateInput>,
}

impl PathSampler {
    /// Precompute segment lengths for `points`.
    pub fn new(points: Vec<Point>) -> Self {
        let mut cumulative = Vec::with_capacity(points.len());
        let mut acc = 0.0;
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                acc += p.distance(points[i - 1]);
            }
            cumulative.push(acc);
        }

        let degenerate = if points.len() < 2 {
            Some(DegenerateInput::TooFewPoints)
        } else if acc == 0.0 {
            Some(DegenerateInput::ZeroLengthPath)
        } else {
            None
        };
        if let Some(kind) = degenerate {
            tracing::warn!(points = points.len(), %kind, "degenerate flow path");
        }

        Self {
            points,
            cumulative,
            degenerate,
        }
    }

    /// The polyline points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Total polyline length.
    pub fn total_length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Why this path samples a fallback point, if it does.
    pub fn degenerate(&self) -> Option<DegenerateInput> {
        self.degenerate
    }

    /// Point at normalized arc length `t`; `t` is clamped to `[0, 1]`.
    ///
    /// Degenerate paths return their first point (or the origin when empty).
    pub fn point_at(&self, t: f64) -> Point {
        let Some(&first) = self.points.first() else {
            return Point::ORIGIN;
        };
        if self.degenerate.is_some() {
            return first;
        }

        let target = clamp01(t) * self.total_length();
        // First vertex at or past `target`; the segment ending there is the earliest match.
        let end = self
            .cumulative
            .partition_point(|&c| c < target)
            .clamp(1, self.points.len() - 1);
        let start = end - 1;

        let seg_len = self.cumulative[end] - self.cumulative[start];
        let (a, b) = (self.points[start], self.points[end]);
        if seg_len == 0.0 {
            return a;
        }
        let local = (target - self.cumulative[start]) / seg_len;
        Point::new(lerp(a.x, b.x, local), lerp(a.y, b.y, local))
    }
}

/// One-shot form of [`PathSampler::point_at`].
pub fn point_at(path: &[Point], t: f64) -> Point {
    PathSampler::new(path.to_vec()).point_at(t)
}

#[cfg(test)]
#[path = "../../tests/unit/path/sampler.rs"]
mod tests;
