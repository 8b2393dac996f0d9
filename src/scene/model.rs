//! JSON-facing diagram model.
//!
//! Geometry in a diagram is given in scene coordinates (pixels of an untransformed canvas).
//! The camera transform maps scene coordinates to the final screen.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    animation::anim::Keyframes,
    camera::controller::CameraTrack,
    color::ramp::ColorRamp,
    color::rgb::Rgb8,
    flow::animator::{FlowAnimator, FlowStyle},
    foundation::core::{Canvas, FrameIndex, Point},
    foundation::error::{FlowframeError, FlowframeResult},
    plane::number_plane::{NumberPlane, NumberPlaneConfig},
    plane::series::{RevealSpec, XValues},
};

/// A complete frame-deterministic diagram.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagram {
    /// Output scene size in pixels.
    pub canvas: Canvas,
    /// Number of frames; valid frames are `0..duration`.
    pub duration: FrameIndex,
    /// Camera moves over the scene.
    #[serde(default)]
    pub camera: CameraTrack,
    /// Optional coordinate plot.
    #[serde(default)]
    pub plot: Option<PlotSpec>,
    /// Animated flow paths.
    #[serde(default)]
    pub flows: Vec<FlowLineSpec>,
    /// Pressure-colored gauges.
    #[serde(default)]
    pub gauges: Vec<GaugeSpec>,
}

/// A number plane with the series drawn on it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlotSpec {
    /// Ranges, screen rectangle and styling.
    pub plane: NumberPlaneConfig,
    /// X values shared by all series, or one sequence per series.
    #[serde(default)]
    pub x: XValues,
    /// Y-series drawn as polylines.
    #[serde(default)]
    pub series: Vec<SeriesSpec>,
}

/// One plotted y-series.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeriesSpec {
    /// Unique element id.
    pub id: String,
    /// Y values, paired by index with the series' x values.
    pub y: Vec<f64>,
    /// Stroke color.
    #[serde(default = "default_series_color")]
    pub color: Rgb8,
    /// Progressive drawing window; the full series is shown when absent.
    #[serde(default)]
    pub reveal: Option<RevealSpec>,
}

fn default_series_color() -> Rgb8 {
    Rgb8::new(0xfc, 0x62, 0x55)
}

/// A polyline with markers moving at a speed set by a keyframed flow value.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FlowLineSpec {
    /// Unique element id.
    pub id: String,
    /// Path waypoints in scene coordinates.
    pub path: Vec<Point>,
    /// Signed flow over time; positive flow runs from the first waypoint to the last.
    pub flow: Keyframes<f64>,
    /// Flow magnitude that moves markers at full speed.
    pub max_flow: f64,
    /// Marker layout and styling.
    #[serde(default)]
    pub style: FlowStyle,
}

/// A scalar pressure reading shown as a color.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GaugeSpec {
    /// Unique element id.
    pub id: String,
    /// Pressure over time.
    pub pressure: Keyframes<f64>,
    /// Pressure mapped to the last color stop.
    pub max: f64,
    /// Color stops; the default blue-to-red ramp when absent.
    #[serde(default)]
    pub ramp: Option<ColorRamp>,
}

impl Diagram {
    /// Parse a diagram from a JSON reader. The result is not yet validated.
    pub fn from_reader<R: std::io::Read>(r: R) -> FlowframeResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FlowframeError::serde(format!("parse diagram JSON: {e}")))
    }

    /// Parse a diagram from a JSON file on disk. The result is not yet validated.
    pub fn from_path(path: impl AsRef<Path>) -> FlowframeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FlowframeError::validation(format!("open diagram JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Run every configuration check. Frame evaluation of a valid diagram cannot fail for
    /// frames inside `0..duration`.
    pub fn validate(&self) -> FlowframeResult<()> {
        self.canvas.validate()?;
        if self.duration.0 == 0 {
            return Err(FlowframeError::validation("duration must be > 0 frames"));
        }
        self.camera.validate()?;

        let mut ids = BTreeSet::new();
        let mut claim = |id: &str| -> FlowframeResult<()> {
            if id.trim().is_empty() {
                return Err(FlowframeError::validation("element id must be non-empty"));
            }
            if !ids.insert(id.to_owned()) {
                return Err(FlowframeError::validation(format!(
                    "duplicate element id '{id}'"
                )));
            }
            Ok(())
        };

        if let Some(plot) = &self.plot {
            plot.validate()?;
            for s in &plot.series {
                claim(&s.id)?;
            }
        }

        for flow in &self.flows {
            claim(&flow.id)?;
            flow.validate()?;
        }

        for gauge in &self.gauges {
            claim(&gauge.id)?;
            gauge.validate()?;
        }

        Ok(())
    }
}

impl PlotSpec {
    /// Check ranges, steps and series shapes.
    pub fn validate(&self) -> FlowframeResult<()> {
        NumberPlane::new(self.plane.clone())?;
        self.x.validate(self.series.len())?;
        for s in &self.series {
            if let Some(reveal) = &s.reveal {
                reveal.validate()?;
            }
        }
        Ok(())
    }
}

impl FlowLineSpec {
    /// Check the flow track, scale and style.
    pub fn validate(&self) -> FlowframeResult<()> {
        self.flow.validate()?;
        if !self.max_flow.is_finite() || self.max_flow <= 0.0 {
            return Err(FlowframeError::domain(format!(
                "flow '{}' max_flow must be a finite value > 0",
                self.id
            )));
        }
        self.style.validate()
    }

    pub(crate) fn animator(&self) -> FlowframeResult<FlowAnimator> {
        FlowAnimator::new(self.path.clone(), self.max_flow, self.style.clone())
    }
}

impl GaugeSpec {
    /// Check the pressure track and scale.
    pub fn validate(&self) -> FlowframeResult<()> {
        self.pressure.validate()?;
        if !self.max.is_finite() {
            return Err(FlowframeError::domain(format!(
                "gauge '{}' max must be finite",
                self.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
