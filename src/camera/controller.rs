//! Camera evaluation: one pure path from `(track, frame)` to viewport and transform.
//!
//! The evaluator, the controller and any screen-to-world readout all go through
//! [`CameraTrack::frame_at`], so the interpolation exists in exactly one place.

use serde::{Deserialize, Serialize};

use crate::{
    camera::transition::CameraTransition,
    camera::viewport::Viewport,
    foundation::core::{Affine, Canvas, FrameIndex, Point, Vec2},
    foundation::error::{DegenerateInput, FlowframeError, FlowframeResult},
};

/// Uniform scale followed by a translation: `screen = world * scale + translate`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraTransform {
    /// World-to-screen scale factor.
    pub scale: f64,
    /// Horizontal translation in screen pixels, applied after scaling.
    pub translate_x: f64,
    /// Vertical translation in screen pixels, applied after scaling.
    pub translate_y: f64,
}

impl CameraTransform {
    /// The transform that leaves points unchanged.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// World point to screen point.
    pub fn apply(&self, world: Point) -> Point {
        Point::new(
            world.x * self.scale + self.translate_x,
            world.y * self.scale + self.translate_y,
        )
    }

    /// Screen point to world point.
    pub fn invert(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.translate_x) / self.scale,
            (screen.y - self.translate_y) / self.scale,
        )
    }

    /// Equivalent [`Affine`] (scale about the origin, then translate).
    pub fn to_affine(&self) -> Affine {
        Affine::translate(Vec2::new(self.translate_x, self.translate_y)) * Affine::scale(self.scale)
    }
}

/// Viewport of `transition` at `frame` for a scene of size `canvas`.
pub fn viewport_at(frame: FrameIndex, transition: &CameraTransition, canvas: Canvas) -> Viewport {
    let (viewport, degenerate) = transition.resolve(frame, canvas);
    if let Some(kind) = degenerate {
        tracing::warn!(frame = frame.0, %kind, "camera aspect lock skipped");
    }
    viewport
}

/// Transform that puts `viewport`'s center at the scene center and fits its width to the scene.
pub fn transform_of(viewport: &Viewport, canvas: Canvas) -> CameraTransform {
    let (transform, degenerate) = transform_with_fallback(viewport, canvas);
    if let Some(kind) = degenerate {
        tracing::warn!(%kind, "camera transform fell back to unit scale");
    }
    transform
}

fn transform_with_fallback(
    viewport: &Viewport,
    canvas: Canvas,
) -> (CameraTransform, Option<DegenerateInput>) {
    let scene_w = f64::from(canvas.width);
    let scene_h = f64::from(canvas.height);

    let (scale, degenerate) = if canvas.width > 0 && viewport.width > 0.0 {
        (scene_w / viewport.width, None)
    } else {
        (1.0, Some(DegenerateInput::ZeroSceneWidth))
    };

    let transform = CameraTransform {
        scale,
        translate_x: scene_w / 2.0 - viewport.center_x * scale,
        translate_y: scene_h / 2.0 - viewport.center_y * scale,
    };
    (transform, degenerate)
}

/// Camera state for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CameraFrame {
    /// Evaluated frame.
    pub frame: FrameIndex,
    /// Final viewport (after constraints, zoom and aspect lock).
    pub viewport: Viewport,
    /// World-to-screen transform derived from `viewport`.
    pub transform: CameraTransform,
    /// Fallback taken while evaluating, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degenerate: Option<DegenerateInput>,
}

/// Ordered camera moves plus the resting viewport used when there are none.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraTrack {
    /// Viewport when no transitions exist; defaults to the whole scene.
    #[serde(default)]
    pub rest: Option<Viewport>,
    /// Transitions sorted by `start_frame`, non-overlapping.
    #[serde(default)]
    pub transitions: Vec<CameraTransition>,
}

impl CameraTrack {
    /// Validate every transition and their ordering.
    pub fn validate(&self) -> FlowframeResult<()> {
        if let Some(rest) = &self.rest {
            rest.validate("camera rest viewport")?;
        }
        for t in &self.transitions {
            t.validate()?;
        }
        for w in self.transitions.windows(2) {
            if w[0].start_frame > w[1].start_frame {
                return Err(FlowframeError::validation(
                    "camera transitions must be sorted by start_frame",
                ));
            }
            if w[0].end_frame > w[1].start_frame {
                return Err(FlowframeError::validation(format!(
                    "camera transition ending at frame {} overlaps the one starting at frame {}",
                    w[0].end_frame.0, w[1].start_frame.0
                )));
            }
        }
        Ok(())
    }

    /// Transition governing `frame`: the last one started at or before it, else the first.
    pub fn active_transition(&self, frame: FrameIndex) -> Option<&CameraTransition> {
        let idx = self
            .transitions
            .partition_point(|t| t.start_frame <= frame);
        let active = self.transitions.get(idx.saturating_sub(1));
        if let Some(t) = active {
            tracing::debug!(
                frame = frame.0,
                start = t.start_frame.0,
                end = t.end_frame.0,
                "active camera transition"
            );
        }
        active
    }

    /// Viewport at `frame`.
    pub fn viewport_at(&self, frame: FrameIndex, canvas: Canvas) -> Viewport {
        self.frame_at(frame, canvas).viewport
    }

    /// Viewport and transform at `frame`. Pure: same inputs, same bits.
    pub fn frame_at(&self, frame: FrameIndex, canvas: Canvas) -> CameraFrame {
        let (viewport, from_viewport) = match self.active_transition(frame) {
            Some(t) => t.resolve(frame, canvas),
            None => (self.rest.unwrap_or_else(|| Viewport::covering(canvas)), None),
        };
        let (transform, from_transform) = transform_with_fallback(&viewport, canvas);
        let degenerate = from_viewport.or(from_transform);
        if let Some(kind) = degenerate {
            tracing::warn!(frame = frame.0, %kind, "camera fallback");
        }
        CameraFrame {
            frame,
            viewport,
            transform,
            degenerate,
        }
    }
}

/// Callback receiving each frame's final viewport.
pub type ViewportObserver = Box<dyn Fn(FrameIndex, &Viewport) + Send + Sync>;

/// Camera track bound to a scene size, with an optional per-frame observer.
pub struct CameraController {
    track: CameraTrack,
    canvas: Canvas,
    observer: Option<ViewportObserver>,
}

impl CameraController {
    /// Validate the track and scene and build a controller.
    pub fn new(track: CameraTrack, canvas: Canvas) -> FlowframeResult<Self> {
        canvas.validate()?;
        track.validate()?;
        Ok(Self {
            track,
            canvas,
            observer: None,
        })
    }

    /// Install an observer called once per [`CameraController::evaluate`], after the viewport
    /// is final.
    pub fn with_observer(
        mut self,
        observer: impl Fn(FrameIndex, &Viewport) + Send + Sync + 'static,
    ) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// The camera track.
    pub fn track(&self) -> &CameraTrack {
        &self.track
    }

    /// The scene size.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Viewport at `frame` without notifying the observer.
    pub fn viewport_at(&self, frame: FrameIndex) -> Viewport {
        self.track.viewport_at(frame, self.canvas)
    }

    /// Evaluate `frame` and notify the observer with the same viewport that is returned.
    pub fn evaluate(&self, frame: FrameIndex) -> CameraFrame {
        let out = self.track.frame_at(frame, self.canvas);
        if let Some(observer) = &self.observer {
            observer(frame, &out.viewport);
        }
        out
    }

    /// World point visible at screen position `screen` on `frame` (cursor readout).
    pub fn screen_to_world(&self, frame: FrameIndex, screen: Point) -> Point {
        self.track
            .frame_at(frame, self.canvas)
            .transform
            .invert(screen)
    }

    /// Screen position of world point `world` on `frame`.
    pub fn world_to_screen(&self, frame: FrameIndex, world: Point) -> Point {
        self.track
            .frame_at(frame, self.canvas)
            .transform
            .apply(world)
    }
}

impl std::fmt::Debug for CameraController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraController")
            .field("track", &self.track)
            .field("canvas", &self.canvas)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/controller.rs"]
mod tests;
