//! Per-frame evaluation of a [`Diagram`] into serializable geometry.
//!
//! All output geometry is in scene coordinates; apply [`EvaluatedFrame::camera`]'s transform
//! to reach the final screen.

use serde::Serialize;

use crate::{
    camera::controller::CameraFrame,
    color::ramp::ColorRamp,
    color::rgb::Rgb8,
    flow::animator::{FlowAnimator, FlowMarker},
    foundation::core::{FrameIndex, Point, Rect},
    foundation::error::{DegenerateInput, FlowframeError, FlowframeResult},
    path::svg::{SVG_PATH_PRECISION, polyline_to_svg_path},
    plane::number_plane::{AxisGeometry, GridLines, NumberPlane},
    plane::series::series_up_to_frame,
    scene::model::Diagram,
};

/// Everything visible on one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EvaluatedFrame {
    /// Evaluated frame.
    pub frame: FrameIndex,
    /// Camera viewport and scene-to-screen transform.
    pub camera: CameraFrame,
    /// Plot geometry, when the diagram has a plot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot: Option<PlotGeometry>,
    /// Flow markers, in diagram order.
    pub flows: Vec<FlowFrame>,
    /// Gauge readings, in diagram order.
    pub gauges: Vec<GaugeReading>,
    /// Fallbacks taken on this frame.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<FrameWarning>,
}

/// Number plane and series polylines.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlotGeometry {
    /// Padded screen rectangle the data range maps onto.
    pub plot_area: Rect,
    /// Horizontal axis.
    pub x_axis: AxisGeometry,
    /// Vertical axis.
    pub y_axis: AxisGeometry,
    /// Grid lines, empty when the grid is hidden.
    pub grid: GridLines,
    /// Series polylines, in diagram order.
    pub series: Vec<SeriesPolyline>,
}

/// One series as drawn on this frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesPolyline {
    /// Series id.
    pub id: String,
    /// Stroke color.
    pub color: Rgb8,
    /// Visible points in scene coordinates.
    pub points: Vec<Point>,
    /// `points` as SVG path data.
    pub svg_path: String,
}

/// Markers of one flow line.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FlowFrame {
    /// Flow line id.
    pub id: String,
    /// Sampled flow value.
    pub flow: f64,
    /// Marker fill color.
    pub color: Rgb8,
    /// Marker radius in pixels.
    pub dot_radius: f64,
    /// Markers, empty when the flow is near zero.
    pub markers: Vec<FlowMarker>,
}

/// Color of one gauge.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GaugeReading {
    /// Gauge id.
    pub id: String,
    /// Sampled pressure.
    pub value: f64,
    /// Ramp color for `value`.
    pub color: Rgb8,
}

/// A degenerate input met while evaluating a frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FrameWarning {
    /// Element id, or `"camera"`.
    pub element: String,
    /// What was degenerate.
    pub kind: DegenerateInput,
}

/// A validated diagram with its frame-invariant parts precomputed.
///
/// Holds only immutable data, so one instance can serve many threads.
#[derive(Clone, Debug)]
pub struct PreparedDiagram {
    diagram: Diagram,
    plot: Option<PreparedPlot>,
    flows: Vec<FlowAnimator>,
    ramps: Vec<ColorRamp>,
}

#[derive(Clone, Debug)]
struct PreparedPlot {
    plane: NumberPlane,
    x_axis: AxisGeometry,
    y_axis: AxisGeometry,
    grid: GridLines,
    // Full series in scene coordinates, before reveal.
    series: Vec<Vec<Point>>,
}

impl PreparedDiagram {
    /// Validate `diagram` and precompute planes, axes, samplers and ramps.
    pub fn new(diagram: Diagram) -> FlowframeResult<Self> {
        diagram.validate()?;

        let plot = match &diagram.plot {
            Some(spec) => {
                let plane = NumberPlane::new(spec.plane.clone())?;
                let ys: Vec<Vec<f64>> = spec.series.iter().map(|s| s.y.clone()).collect();
                let series = plane.map_series(&spec.x, &ys)?;
                Some(PreparedPlot {
                    x_axis: plane.x_axis(),
                    y_axis: plane.y_axis(),
                    grid: plane.grid_lines(),
                    plane,
                    series,
                })
            }
            None => None,
        };

        let flows = diagram
            .flows
            .iter()
            .map(|f| f.animator())
            .collect::<FlowframeResult<Vec<_>>>()?;

        let ramps = diagram
            .gauges
            .iter()
            .map(|g| g.ramp.clone().unwrap_or_default())
            .collect();

        Ok(Self {
            diagram,
            plot,
            flows,
            ramps,
        })
    }

    /// The validated diagram.
    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    /// Coordinate mapper of the plot, if any.
    pub fn number_plane(&self) -> Option<&NumberPlane> {
        self.plot.as_ref().map(|p| &p.plane)
    }

    /// Evaluate `frame`. Frames outside `0..duration` are an evaluation error.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn eval_frame(&self, frame: FrameIndex) -> FlowframeResult<EvaluatedFrame> {
        let d = &self.diagram;
        if frame.0 >= d.duration.0 {
            return Err(FlowframeError::evaluation(format!(
                "frame {} is out of bounds (duration {})",
                frame.0, d.duration.0
            )));
        }

        let mut warnings = Vec::new();

        let camera = d.camera.frame_at(frame, d.canvas);
        if let Some(kind) = camera.degenerate {
            warnings.push(FrameWarning {
                element: "camera".to_owned(),
                kind,
            });
        }

        let plot = match (&self.plot, &d.plot) {
            (Some(prepared), Some(spec)) => {
                let series = spec
                    .series
                    .iter()
                    .zip(&prepared.series)
                    .map(|(s, full)| {
                        let points = series_up_to_frame(full, s.reveal.as_ref(), frame);
                        SeriesPolyline {
                            id: s.id.clone(),
                            color: s.color,
                            svg_path: polyline_to_svg_path(&points, SVG_PATH_PRECISION),
                            points,
                        }
                    })
                    .collect();
                Some(PlotGeometry {
                    plot_area: prepared.plane.plot_area(),
                    x_axis: prepared.x_axis.clone(),
                    y_axis: prepared.y_axis.clone(),
                    grid: prepared.grid.clone(),
                    series,
                })
            }
            _ => None,
        };

        let mut flows = Vec::with_capacity(self.flows.len());
        for (spec, animator) in d.flows.iter().zip(&self.flows) {
            if let Some(kind) = animator.sampler().degenerate() {
                warnings.push(FrameWarning {
                    element: spec.id.clone(),
                    kind,
                });
            }
            let flow = spec.flow.sample(frame)?;
            flows.push(FlowFrame {
                id: spec.id.clone(),
                flow,
                color: spec.style.color,
                dot_radius: spec.style.dot_radius,
                markers: animator.markers(frame, flow),
            });
        }

        let mut gauges = Vec::with_capacity(d.gauges.len());
        for (spec, ramp) in d.gauges.iter().zip(&self.ramps) {
            let value = spec.pressure.sample(frame)?;
            gauges.push(GaugeReading {
                id: spec.id.clone(),
                value,
                color: ramp.color_at(value, spec.max),
            });
        }

        Ok(EvaluatedFrame {
            frame,
            camera,
            plot,
            flows,
            gauges,
            warnings,
        })
    }
}

/// Entry points for one-shot frame evaluation.
#[derive(Debug)]
pub struct Evaluator;

impl Evaluator {
    /// Validate `diagram` and precompute its frame-invariant parts.
    pub fn prepare(diagram: &Diagram) -> FlowframeResult<PreparedDiagram> {
        PreparedDiagram::new(diagram.clone())
    }

    /// Validate `diagram` and evaluate a single frame.
    ///
    /// For many frames, [`Evaluator::prepare`] once and call [`PreparedDiagram::eval_frame`].
    #[tracing::instrument(skip(diagram))]
    pub fn eval_frame(diagram: &Diagram, frame: FrameIndex) -> FlowframeResult<EvaluatedFrame> {
        Self::prepare(diagram)?.eval_frame(frame)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
