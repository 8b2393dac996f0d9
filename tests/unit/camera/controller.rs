use std::sync::{Arc, Mutex};

use super::*;
use crate::animation::ease::Ease;

const HD: Canvas = Canvas {
    width: 1920,
    height: 1080,
};

fn vp(cx: f64, cy: f64, w: f64, h: f64) -> Viewport {
    Viewport {
        center_x: cx,
        center_y: cy,
        width: w,
        height: h,
    }
}

fn move_right(start: u64, end: u64) -> CameraTransition {
    let mut t = CameraTransition::new(
        FrameIndex(start),
        FrameIndex(end),
        vp(960.0, 540.0, 1920.0, 1080.0),
        vp(1200.0, 300.0, 960.0, 540.0),
    );
    t.ease = Ease::Linear;
    t
}

#[test]
fn viewport_center_maps_to_scene_center() {
    for v in [
        vp(0.0, 0.0, 100.0, 50.0),
        vp(-37.25, 812.5, 3.0, 1.0),
        vp(1e4, -1e4, 12345.0, 678.0),
    ] {
        let tr = transform_of(&v, HD);
        let p = tr.apply(v.center());
        assert!((p.x - 960.0).abs() < 1e-6);
        assert!((p.y - 540.0).abs() < 1e-6);
    }
}

#[test]
fn transform_scale_fits_width() {
    let tr = transform_of(&vp(0.0, 0.0, 960.0, 540.0), HD);
    assert_eq!(tr.scale, 2.0);
    assert_eq!(tr.translate_x, 960.0);
    assert_eq!(tr.translate_y, 540.0);
}

#[test]
fn zero_width_viewport_falls_back_to_unit_scale() {
    let (tr, degenerate) = transform_with_fallback(&vp(10.0, 20.0, 0.0, 5.0), HD);
    assert_eq!(tr.scale, 1.0);
    assert_eq!(tr.apply(Point::new(10.0, 20.0)), Point::new(960.0, 540.0));
    assert_eq!(degenerate, Some(DegenerateInput::ZeroSceneWidth));
}

#[test]
fn invert_and_affine_agree_with_apply() {
    let tr = transform_of(&vp(100.0, -40.0, 480.0, 270.0), HD);
    let world = Point::new(123.0, 45.0);
    let screen = tr.apply(world);
    let back = tr.invert(screen);
    assert!((back.x - world.x).abs() < 1e-9);
    assert!((back.y - world.y).abs() < 1e-9);

    let via_affine = tr.to_affine() * world;
    assert!((via_affine.x - screen.x).abs() < 1e-9);
    assert!((via_affine.y - screen.y).abs() < 1e-9);
}

#[test]
fn free_viewport_at_matches_track() {
    let t = move_right(0, 10);
    let track = CameraTrack {
        rest: None,
        transitions: vec![t.clone()],
    };
    for f in 0..=12 {
        assert_eq!(
            viewport_at(FrameIndex(f), &t, HD),
            track.viewport_at(FrameIndex(f), HD)
        );
    }
}

#[test]
fn empty_track_uses_rest_or_whole_scene() {
    let track = CameraTrack::default();
    assert_eq!(track.viewport_at(FrameIndex(3), HD), Viewport::covering(HD));
    let f = track.frame_at(FrameIndex(3), HD);
    assert_eq!(f.transform, CameraTransform::IDENTITY);

    let rest = vp(0.0, 0.0, 10.0, 10.0);
    let track = CameraTrack {
        rest: Some(rest),
        transitions: Vec::new(),
    };
    assert_eq!(track.viewport_at(FrameIndex(0), HD), rest);
}

#[test]
fn active_transition_selection() {
    let a = move_right(10, 20);
    let mut b = move_right(30, 40);
    b.initial = a.target;
    b.target = vp(0.0, 0.0, 100.0, 100.0);
    let track = CameraTrack {
        rest: None,
        transitions: vec![a.clone(), b.clone()],
    };

    assert_eq!(track.active_transition(FrameIndex(0)), Some(&a));
    assert_eq!(track.active_transition(FrameIndex(25)), Some(&a));
    assert_eq!(track.active_transition(FrameIndex(30)), Some(&b));
    assert_eq!(track.active_transition(FrameIndex(99)), Some(&b));

    assert_eq!(track.viewport_at(FrameIndex(0), HD), a.initial);
    assert_eq!(track.viewport_at(FrameIndex(25), HD), a.target);
    assert_eq!(track.viewport_at(FrameIndex(99), HD), b.target);
}

#[test]
fn track_validation_rejects_overlap_and_disorder() {
    let a = move_right(10, 20);
    let b = move_right(15, 25);
    let overlapping = CameraTrack {
        rest: None,
        transitions: vec![a.clone(), b.clone()],
    };
    assert!(
        overlapping
            .validate()
            .unwrap_err()
            .to_string()
            .contains("overlaps")
    );

    let unsorted = CameraTrack {
        rest: None,
        transitions: vec![b, a.clone()],
    };
    assert!(unsorted.validate().unwrap_err().to_string().contains("sorted"));

    let touching = CameraTrack {
        rest: None,
        transitions: vec![a, move_right(20, 30)],
    };
    assert!(touching.validate().is_ok());
}

#[test]
fn controller_rejects_empty_canvas() {
    let err = CameraController::new(
        CameraTrack::default(),
        Canvas {
            width: 0,
            height: 10,
        },
    )
    .unwrap_err();
    assert!(err.to_string().contains("canvas"));
}

#[test]
fn observer_sees_the_returned_viewport_once() {
    let seen: Arc<Mutex<Vec<(FrameIndex, Viewport)>>> = Arc::default();
    let sink = Arc::clone(&seen);
    let track = CameraTrack {
        rest: None,
        transitions: vec![move_right(0, 10)],
    };
    let cam = CameraController::new(track.clone(), HD)
        .unwrap()
        .with_observer(move |f, v| sink.lock().unwrap().push((f, *v)));

    let out = cam.evaluate(FrameIndex(4));
    assert_eq!(out.viewport, track.viewport_at(FrameIndex(4), HD));
    assert_eq!(cam.viewport_at(FrameIndex(4)), out.viewport);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.as_slice(), &[(FrameIndex(4), out.viewport)]);
}

#[test]
fn evaluation_is_repeatable() {
    let cam = CameraController::new(
        CameraTrack {
            rest: None,
            transitions: vec![move_right(0, 7)],
        },
        HD,
    )
    .unwrap();
    for f in 0..10 {
        let a = cam.evaluate(FrameIndex(f));
        let b = cam.evaluate(FrameIndex(f));
        assert_eq!(a.viewport.width.to_bits(), b.viewport.width.to_bits());
        assert_eq!(a.transform, b.transform);
    }
}

#[test]
fn screen_to_world_reads_viewport_center_at_scene_center() {
    let cam = CameraController::new(
        CameraTrack {
            rest: None,
            transitions: vec![move_right(0, 10)],
        },
        HD,
    )
    .unwrap();
    let world = cam.screen_to_world(FrameIndex(10), Point::new(960.0, 540.0));
    assert!((world.x - 1200.0).abs() < 1e-9);
    assert!((world.y - 300.0).abs() < 1e-9);

    let screen = cam.world_to_screen(FrameIndex(10), world);
    assert!((screen.x - 960.0).abs() < 1e-9);
    assert!((screen.y - 540.0).abs() < 1e-9);
}

#[test]
fn unclamped_overshoot_reports_fallback_and_keeps_scale_positive() {
    let mut t = CameraTransition::new(
        FrameIndex(0),
        FrameIndex(10),
        vp(50.0, 50.0, 100.0, 100.0),
        vp(50.0, 50.0, 10.0, 10.0),
    );
    t.ease = Ease::Linear;
    t.clamp_frames = false;
    let track = CameraTrack {
        rest: None,
        transitions: vec![t],
    };
    let f = track.frame_at(FrameIndex(20), HD);
    assert_eq!(f.degenerate, Some(DegenerateInput::NonPositiveViewport));
    assert!(f.viewport.width > 0.0 && f.viewport.height > 0.0);
    assert_eq!(f.transform.scale, 192.0);
}
