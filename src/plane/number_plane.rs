//! Data-space to screen-space mapping for coordinate plots.
//!
//! World Y grows upward and screen Y grows downward, so `map_y` is decreasing in world Y.
//! The plot area is the screen rectangle shrunk by `padding` on every side.

use serde::{Deserialize, Serialize};

use crate::{
    foundation::core::{Line, Point, Rect},
    foundation::error::{FlowframeError, FlowframeResult},
    plane::format::format_tick,
    plane::nice::nice_step,
    plane::range::DataRange,
    plane::series::{XValues, zip_series},
    plane::style::{AxisSpec, GridSpec},
    plane::ticks::ticks,
};

/// Static configuration of a [`NumberPlane`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumberPlaneConfig {
    /// Data interval shown horizontally.
    pub x_range: DataRange,
    /// Data interval shown vertically.
    pub y_range: DataRange,
    /// Screen rectangle in raster coordinates (top-left origin).
    pub screen: Rect,
    /// Inset from every edge of `screen` to the plot area, in pixels.
    #[serde(default)]
    pub padding: f64,
    /// Horizontal axis styling and tick spacing.
    #[serde(default)]
    pub x_axis: AxisSpec,
    /// Vertical axis styling and tick spacing.
    #[serde(default)]
    pub y_axis: AxisSpec,
    /// Background grid styling.
    #[serde(default)]
    pub grid: GridSpec,
}

/// A tick on one axis.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TickMark {
    /// Tick value in data units.
    pub value: f64,
    /// Where the tick crosses its axis line, in screen space.
    pub position: Point,
    /// Tick mark segment, perpendicular to the axis.
    pub mark: Line,
    /// Formatted label, empty when labels are disabled.
    pub label: String,
}

/// Axis line plus its ticks.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisGeometry {
    /// Axis line across the plot area.
    pub line: Line,
    /// Tick step in data units.
    pub step: f64,
    /// Ticks in ascending value order.
    pub ticks: Vec<TickMark>,
}

/// Grid lines through every tick.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GridLines {
    /// Lines at constant x, top to bottom of the plot area.
    pub vertical: Vec<Line>,
    /// Lines at constant y, left to right of the plot area.
    pub horizontal: Vec<Line>,
}

/// Validated coordinate mapper from a data rectangle to a screen rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct NumberPlane {
    config: NumberPlaneConfig,
    plot_area: Rect,
    x_step: f64,
    y_step: f64,
    x_ticks: Vec<f64>,
    y_ticks: Vec<f64>,
}

impl NumberPlane {
    /// Validate `config` and precompute the plot area and tick steps.
    pub fn new(config: NumberPlaneConfig) -> FlowframeResult<Self> {
        config.x_range.validate("x_range")?;
        config.y_range.validate("y_range")?;

        let screen = config.screen.abs();
        if !(screen.width() > 0.0 && screen.height() > 0.0) {
            return Err(FlowframeError::domain(
                "screen rect must have positive width and height",
            ));
        }
        if !config.padding.is_finite() || config.padding < 0.0 {
            return Err(FlowframeError::domain("padding must be a finite value >= 0"));
        }
        let plot_area = screen.inset(-config.padding);
        if !(plot_area.width() > 0.0 && plot_area.height() > 0.0) {
            return Err(FlowframeError::domain(
                "padding must leave a non-empty plot area",
            ));
        }

        let x_step = axis_step(&config.x_axis, &config.x_range, "x_axis")?;
        let y_step = axis_step(&config.y_axis, &config.y_range, "y_axis")?;
        let x_ticks = ticks(config.x_range.min, config.x_range.max, x_step)?;
        let y_ticks = ticks(config.y_range.min, config.y_range.max, y_step)?;

        Ok(Self {
            config: NumberPlaneConfig {
                screen,
                ..config
            },
            plot_area,
            x_step,
            y_step,
            x_ticks,
            y_ticks,
        })
    }

    /// The configuration this plane was built from (with a normalized screen rect).
    pub fn config(&self) -> &NumberPlaneConfig {
        &self.config
    }

    /// Screen rectangle minus padding.
    pub fn plot_area(&self) -> Rect {
        self.plot_area
    }

    /// Horizontal tick step in data units.
    pub fn x_step(&self) -> f64 {
        self.x_step
    }

    /// Vertical tick step in data units.
    pub fn y_step(&self) -> f64 {
        self.y_step
    }

    /// Data x to screen x (increasing).
    pub fn map_x(&self, x: f64) -> f64 {
        self.plot_area.x0 + self.config.x_range.normalize(x) * self.plot_area.width()
    }

    /// Data y to screen y (decreasing: larger data y is higher on screen).
    pub fn map_y(&self, y: f64) -> f64 {
        self.plot_area.y1 - self.config.y_range.normalize(y) * self.plot_area.height()
    }

    /// Data point to screen point.
    pub fn map_point(&self, p: Point) -> Point {
        Point::new(self.map_x(p.x), self.map_y(p.y))
    }

    /// Screen point back to data space (inverse of [`NumberPlane::map_point`]).
    pub fn unmap_point(&self, p: Point) -> Point {
        let x_range = &self.config.x_range;
        let y_range = &self.config.y_range;
        let nx = (p.x - self.plot_area.x0) / self.plot_area.width();
        let ny = (self.plot_area.y1 - p.y) / self.plot_area.height();
        Point::new(
            x_range.min + nx * x_range.span(),
            y_range.min + ny * y_range.span(),
        )
    }

    /// Tick values along x, ascending.
    pub fn x_ticks(&self) -> &[f64] {
        &self.x_ticks
    }

    /// Tick values along y, ascending.
    pub fn y_ticks(&self) -> &[f64] {
        &self.y_ticks
    }

    /// Screen y of the horizontal axis: data `y = 0`, clamped into the y range.
    ///
    /// When zero lies outside the data the axis sits on the nearest plot edge instead of
    /// leaving the canvas.
    pub fn x_axis_screen_y(&self) -> f64 {
        self.map_y(self.config.y_range.clamp(0.0))
    }

    /// Screen x of the vertical axis: data `x = 0`, clamped into the x range.
    pub fn y_axis_screen_x(&self) -> f64 {
        self.map_x(self.config.x_range.clamp(0.0))
    }

    /// Horizontal axis line and its ticks.
    pub fn x_axis(&self) -> AxisGeometry {
        let spec = &self.config.x_axis;
        let y = self.x_axis_screen_y();
        let half = spec.tick_size / 2.0;
        let ticks = if spec.include_ticks {
            self.x_ticks
                .iter()
                .map(|&value| {
                    let x = self.map_x(value);
                    TickMark {
                        value,
                        position: Point::new(x, y),
                        mark: Line::new((x, y - half), (x, y + half)),
                        label: label_for(spec, value),
                    }
                })
                .collect()
        } else {
            Vec::new()
        };
        AxisGeometry {
            line: Line::new((self.plot_area.x0, y), (self.plot_area.x1, y)),
            step: self.x_step,
            ticks,
        }
    }

    /// Vertical axis line and its ticks.
    pub fn y_axis(&self) -> AxisGeometry {
        let spec = &self.config.y_axis;
        let x = self.y_axis_screen_x();
        let half = spec.tick_size / 2.0;
        let ticks = if spec.include_ticks {
            self.y_ticks
                .iter()
                .map(|&value| {
                    let y = self.map_y(value);
                    TickMark {
                        value,
                        position: Point::new(x, y),
                        mark: Line::new((x - half, y), (x + half, y)),
                        label: label_for(spec, value),
                    }
                })
                .collect()
        } else {
            Vec::new()
        };
        AxisGeometry {
            line: Line::new((x, self.plot_area.y1), (x, self.plot_area.y0)),
            step: self.y_step,
            ticks,
        }
    }

    /// Grid lines through every tick; empty when the grid is hidden.
    pub fn grid_lines(&self) -> GridLines {
        if !self.config.grid.visible {
            return GridLines::default();
        }
        let area = self.plot_area;
        GridLines {
            vertical: self
                .x_ticks
                .iter()
                .map(|&v| {
                    let x = self.map_x(v);
                    Line::new((x, area.y0), (x, area.y1))
                })
                .collect(),
            horizontal: self
                .y_ticks
                .iter()
                .map(|&v| {
                    let y = self.map_y(v);
                    Line::new((area.x0, y), (area.x1, y))
                })
                .collect(),
        }
    }

    /// Map one `(x, y)` series to a screen polyline of length `min(xs.len(), ys.len())`.
    pub fn map_pairs(&self, xs: &[f64], ys: &[f64]) -> Vec<Point> {
        zip_series(xs, ys)
            .into_iter()
            .map(|p| self.map_point(p))
            .collect()
    }

    /// Map every y-series against shared or per-series x values.
    pub fn map_series(&self, x: &XValues, ys: &[Vec<f64>]) -> FlowframeResult<Vec<Vec<Point>>> {
        x.validate(ys.len())?;
        Ok(ys
            .iter()
            .enumerate()
            .map(|(i, y)| self.map_pairs(x.for_series(i).unwrap_or_default(), y))
            .collect())
    }
}

fn axis_step(spec: &AxisSpec, range: &DataRange, label: &str) -> FlowframeResult<f64> {
    match spec.step {
        Some(step) if step.is_finite() && step > 0.0 => Ok(step),
        Some(step) => Err(FlowframeError::domain(format!(
            "{label} step must be a finite value > 0 (got {step})"
        ))),
        None if spec.target_ticks == 0 => Err(FlowframeError::domain(format!(
            "{label} target_ticks must be > 0"
        ))),
        None => nice_step(range.span(), spec.target_ticks),
    }
}

fn label_for(spec: &AxisSpec, value: f64) -> String {
    if spec.include_labels {
        format_tick(value, spec.label_precision)
    } else {
        String::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plane/number_plane.rs"]
mod tests;
