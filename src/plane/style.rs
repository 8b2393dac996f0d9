//! Declarative axis and grid styling.
//!
//! Each struct carries its own `Default`, so JSON configuration only needs the fields it
//! overrides.

use serde::{Deserialize, Serialize};

use crate::color::rgb::Rgb8;

/// Tick spacing and styling for one axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisSpec {
    /// Explicit tick step in data units; `None` picks a nice step from `target_ticks`.
    pub step: Option<f64>,
    /// Approximate tick count used when `step` is `None`.
    pub target_ticks: usize,
    /// Decimal places for non-integral tick labels.
    pub label_precision: usize,
    /// Axis line and tick color.
    pub color: Rgb8,
    /// Axis line width in pixels.
    pub stroke_width: f64,
    /// Full length of a tick mark in pixels, centered on the axis line.
    pub tick_size: f64,
    /// Emit tick marks.
    pub include_ticks: bool,
    /// Emit tick labels.
    pub include_labels: bool,
}

impl Default for AxisSpec {
    fn default() -> Self {
        Self {
            step: None,
            target_ticks: 10,
            label_precision: 1,
            color: Rgb8::new(0xff, 0xff, 0xff),
            stroke_width: 2.0,
            tick_size: 8.0,
            include_ticks: true,
            include_labels: true,
        }
    }
}

/// Background grid styling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    /// Emit grid lines.
    pub visible: bool,
    /// Grid line color.
    pub color: Rgb8,
    /// Grid line width in pixels.
    pub stroke_width: f64,
    /// Grid line opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            visible: true,
            color: Rgb8::new(0x29, 0xab, 0xca),
            stroke_width: 1.0,
            opacity: 0.4,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plane/style.rs"]
mod tests;
