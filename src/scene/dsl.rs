use crate::{
    camera::controller::CameraTrack,
    camera::transition::CameraTransition,
    camera::viewport::Viewport,
    foundation::core::{Canvas, FrameIndex},
    foundation::error::FlowframeResult,
    scene::model::{Diagram, FlowLineSpec, GaugeSpec, PlotSpec},
};

/// Programmatic construction of a [`Diagram`], validated in [`DiagramBuilder::build`].
#[derive(Clone, Debug)]
pub struct DiagramBuilder {
    canvas: Canvas,
    duration: FrameIndex,
    camera: CameraTrack,
    plot: Option<PlotSpec>,
    flows: Vec<FlowLineSpec>,
    gauges: Vec<GaugeSpec>,
}

impl DiagramBuilder {
    /// Start an empty diagram with an identity camera.
    pub fn new(canvas: Canvas, duration: FrameIndex) -> Self {
        Self {
            canvas,
            duration,
            camera: CameraTrack::default(),
            plot: None,
            flows: Vec::new(),
            gauges: Vec::new(),
        }
    }

    /// Viewport used when the camera has no transitions.
    pub fn rest_viewport(mut self, viewport: Viewport) -> Self {
        self.camera.rest = Some(viewport);
        self
    }

    /// Append a camera move. Moves must be added in time order.
    pub fn camera_transition(mut self, transition: CameraTransition) -> Self {
        self.camera.transitions.push(transition);
        self
    }

    /// Set the coordinate plot.
    pub fn plot(mut self, plot: PlotSpec) -> Self {
        self.plot = Some(plot);
        self
    }

    /// Add a flow line.
    pub fn flow(mut self, flow: FlowLineSpec) -> Self {
        self.flows.push(flow);
        self
    }

    /// Add a pressure gauge.
    pub fn gauge(mut self, gauge: GaugeSpec) -> Self {
        self.gauges.push(gauge);
        self
    }

    /// Assemble and validate the diagram.
    pub fn build(self) -> FlowframeResult<Diagram> {
        let diagram = Diagram {
            canvas: self.canvas,
            duration: self.duration,
            camera: self.camera,
            plot: self.plot,
            flows: self.flows,
            gauges: self.gauges,
        };
        diagram.validate()?;
        Ok(diagram)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/dsl.rs"]
mod tests;
