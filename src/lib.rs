//! flowframe turns frame indices into diagram geometry.
//!
//! Every output is a pure function of `(frame, configuration)`:
//!
//! - [`CameraTrack`] / [`CameraController`] interpolate a world viewport and derive the
//!   scene-to-screen [`CameraTransform`]
//! - [`NumberPlane`] maps data ranges and series onto a padded screen rectangle, with
//!   [`nice_step`] ticks and grid lines
//! - [`PathSampler`] and [`FlowAnimator`] move markers along polylines at a flow-driven speed
//! - [`ColorRamp`] maps scalars such as pressure to colors
//!
//! A [`Diagram`] bundles all of these as JSON-friendly configuration; [`Evaluator`] and
//! [`eval_frames`] turn it into serializable [`EvaluatedFrame`]s.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod camera;
mod color;
mod eval;
mod flow;
mod foundation;
mod path;
mod plane;
mod scene;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, FrameIndex, FrameRange, Line, Point, Rect, Vec2,
};
pub use crate::foundation::error::{DegenerateInput, FlowframeError, FlowframeResult};

pub use crate::animation::anim::{InterpMode, Keyframe, Keyframes, Lerp};
pub use crate::animation::ease::Ease;

pub use crate::color::ramp::{ColorRamp, ColorStop, color_at};
pub use crate::color::rgb::Rgb8;

pub use crate::plane::format::format_tick;
pub use crate::plane::nice::nice_step;
pub use crate::plane::number_plane::{
    AxisGeometry, GridLines, NumberPlane, NumberPlaneConfig, TickMark,
};
pub use crate::plane::range::DataRange;
pub use crate::plane::series::{
    RevealSpec, XValues, reveal_polyline, series_up_to_frame, zip_series,
};
pub use crate::plane::style::{AxisSpec, GridSpec};
pub use crate::plane::ticks::{TICK_EPSILON, ticks};

pub use crate::path::sampler::{PathSampler, point_at};
pub use crate::path::svg::{SVG_PATH_PRECISION, polyline_to_bez_path, polyline_to_svg_path};

pub use crate::camera::controller::{
    CameraController, CameraFrame, CameraTrack, CameraTransform, ViewportObserver,
    transform_of, viewport_at,
};
pub use crate::camera::transition::CameraTransition;
pub use crate::camera::viewport::Viewport;

pub use crate::flow::animator::{
    FLOW_EPSILON, FlowAnimator, FlowMarker, FlowStyle, SPEED_CONSTANT, marker_positions,
    normalized_flow,
};

pub use crate::scene::dsl::DiagramBuilder;
pub use crate::scene::model::{Diagram, FlowLineSpec, GaugeSpec, PlotSpec, SeriesSpec};

pub use crate::eval::evaluator::{
    EvaluatedFrame, Evaluator, FlowFrame, FrameWarning, GaugeReading, PlotGeometry,
    PreparedDiagram, SeriesPolyline,
};
pub use crate::eval::pipeline::{FrameThreading, eval_frames, eval_prepared_frames};
