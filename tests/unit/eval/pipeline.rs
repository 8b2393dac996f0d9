use super::*;
use crate::{
    animation::anim::Keyframes, camera::transition::CameraTransition,
    camera::viewport::Viewport, foundation::core::{Canvas, Point}, scene::dsl::DiagramBuilder,
    scene::model::FlowLineSpec,
};

fn diagram() -> Diagram {
    let canvas = Canvas {
        width: 320,
        height: 180,
    };
    DiagramBuilder::new(canvas, FrameIndex(24))
        .camera_transition(CameraTransition::new(
            FrameIndex(2),
            FrameIndex(20),
            Viewport::covering(canvas),
            Viewport {
                center_x: 100.0,
                center_y: 60.0,
                width: 80.0,
                height: 45.0,
            },
        ))
        .flow(FlowLineSpec {
            id: "loop".to_owned(),
            path: vec![
                Point::new(0.0, 0.0),
                Point::new(50.0, 0.0),
                Point::new(50.0, 30.0),
            ],
            flow: Keyframes::constant(-1.5),
            max_flow: 3.0,
            style: Default::default(),
        })
        .build()
        .unwrap()
}

fn full_range() -> FrameRange {
    FrameRange::new(FrameIndex(0), FrameIndex(24)).unwrap()
}

#[test]
fn sequential_frames_are_in_order() {
    let frames = eval_frames(&diagram(), full_range(), &FrameThreading::default()).unwrap();
    assert_eq!(frames.len(), 24);
    for (i, f) in frames.iter().enumerate() {
        assert_eq!(f.frame, FrameIndex(i as u64));
    }
}

#[test]
fn parallel_matches_sequential() {
    let d = diagram();
    let seq = eval_frames(&d, full_range(), &FrameThreading::default()).unwrap();
    let par = eval_frames(
        &d,
        full_range(),
        &FrameThreading {
            parallel: true,
            threads: Some(3),
        },
    )
    .unwrap();
    assert_eq!(seq, par);
}

#[test]
fn empty_range_is_rejected() {
    let r = FrameRange::new(FrameIndex(4), FrameIndex(4)).unwrap();
    assert!(eval_frames(&diagram(), r, &FrameThreading::default()).is_err());
}

#[test]
fn range_past_duration_is_rejected() {
    let r = FrameRange::new(FrameIndex(10), FrameIndex(25)).unwrap();
    let err = eval_frames(&diagram(), r, &FrameThreading::default()).unwrap_err();
    assert!(err.to_string().contains("exceeds diagram duration"));
}

#[test]
fn zero_threads_is_rejected() {
    let err = eval_frames(
        &diagram(),
        full_range(),
        &FrameThreading {
            parallel: true,
            threads: Some(0),
        },
    )
    .unwrap_err();
    assert!(err.to_string().contains("threads"));
}
