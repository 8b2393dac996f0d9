use serde_json::json;

use super::*;

fn diagram() -> Diagram {
    serde_json::from_value(json!({
        "canvas": {"width": 800, "height": 500},
        "duration": 60,
        "plot": {
            "plane": {
                "x_range": [0, 10],
                "y_range": [0, 1],
                "screen": {"x0": 0, "y0": 0, "x1": 800, "y1": 500},
                "padding": 40
            },
            "x": [0, 5, 10],
            "series": [
                {"id": "full", "y": [0, 0.5, 1]},
                {"id": "drawn", "y": [0, 0.5, 1], "reveal": {"start_frame": 10, "end_frame": 20, "ease": "Linear"}}
            ]
        },
        "flows": [
            {
                "id": "supply",
                "path": [{"x": 0, "y": 0}, {"x": 100, "y": 0}],
                "flow": {"keys": [{"frame": 0, "value": 2.0}]},
                "max_flow": 4.0
            },
            {
                "id": "stub",
                "path": [{"x": 5, "y": 5}],
                "flow": {"keys": [{"frame": 0, "value": 1.0}]},
                "max_flow": 1.0
            }
        ],
        "gauges": [{
            "id": "p1",
            "pressure": {"keys": [{"frame": 0, "value": 0}, {"frame": 59, "value": 200}]},
            "max": 200
        }]
    }))
    .unwrap()
}

#[test]
fn plot_series_lands_on_padded_area() {
    let out = Evaluator::eval_frame(&diagram(), FrameIndex(0)).unwrap();
    let plot = out.plot.unwrap();
    assert_eq!(plot.plot_area, Rect::new(40.0, 40.0, 760.0, 460.0));
    let full = &plot.series[0];
    assert_eq!(full.id, "full");
    assert_eq!(
        full.points,
        vec![
            Point::new(40.0, 460.0),
            Point::new(400.0, 250.0),
            Point::new(760.0, 40.0)
        ]
    );
    assert_eq!(full.svg_path, "M40,460 L400,250 L760,40");
}

#[test]
fn reveal_grows_with_frames() {
    let prepared = Evaluator::prepare(&diagram()).unwrap();
    let drawn = |f: u64| {
        prepared.eval_frame(FrameIndex(f)).unwrap().plot.unwrap().series[1]
            .points
            .clone()
    };
    assert_eq!(drawn(0).len(), 1);
    assert_eq!(drawn(15).len(), 2);
    let mid = drawn(15);
    assert_eq!(mid[1], Point::new(400.0, 250.0));
    assert_eq!(drawn(20).len(), 3);
    assert_eq!(drawn(59).len(), 3);
}

#[test]
fn identity_camera_without_transitions() {
    let out = Evaluator::eval_frame(&diagram(), FrameIndex(3)).unwrap();
    assert_eq!(
        out.camera.viewport,
        crate::camera::viewport::Viewport::covering(diagram().canvas)
    );
    assert_eq!(
        out.camera.transform,
        crate::camera::controller::CameraTransform::IDENTITY
    );
}

#[test]
fn gauges_follow_the_ramp() {
    let prepared = Evaluator::prepare(&diagram()).unwrap();
    let first = prepared.eval_frame(FrameIndex(0)).unwrap();
    assert_eq!(first.gauges[0].value, 0.0);
    assert_eq!(first.gauges[0].color, Rgb8::new(0, 0, 255));
    let last = prepared.eval_frame(FrameIndex(59)).unwrap();
    assert_eq!(last.gauges[0].value, 200.0);
    assert_eq!(last.gauges[0].color, Rgb8::new(255, 0, 0));
}

#[test]
fn flows_report_markers_and_degenerate_paths() {
    let out = Evaluator::eval_frame(&diagram(), FrameIndex(5)).unwrap();
    assert_eq!(out.flows.len(), 2);
    assert_eq!(out.flows[0].flow, 2.0);
    assert_eq!(out.flows[0].markers.len(), 8);
    assert!(out.flows[1].markers.iter().all(|m| m.position == Point::new(5.0, 5.0)));
    assert_eq!(
        out.warnings,
        vec![FrameWarning {
            element: "stub".to_owned(),
            kind: DegenerateInput::TooFewPoints,
        }]
    );
}

#[test]
fn out_of_range_frame_is_an_error() {
    let err = Evaluator::eval_frame(&diagram(), FrameIndex(60)).unwrap_err();
    assert!(matches!(err, FlowframeError::Evaluation(_)));
    assert!(err.to_string().contains("out of bounds"));
}

#[test]
fn invalid_diagram_is_rejected_before_evaluation() {
    let mut d = diagram();
    d.duration = FrameIndex(0);
    assert!(Evaluator::prepare(&d).is_err());
}

#[test]
fn serialized_frame_uses_hex_colors_and_omits_empty_parts() {
    let mut d = diagram();
    d.flows.truncate(1);
    d.plot = None;
    let out = Evaluator::eval_frame(&d, FrameIndex(0)).unwrap();
    let v = serde_json::to_value(&out).unwrap();
    assert_eq!(v["gauges"][0]["color"], json!("#0000ff"));
    assert!(v.get("plot").is_none());
    assert!(v.get("warnings").is_none());
    assert_eq!(v["camera"]["transform"]["scale"], json!(1.0));
}
