use flowframe::{
    AxisSpec, CameraController, CameraTransition, Canvas, DataRange, DiagramBuilder, Ease,
    FlowLineSpec, FlowStyle, FrameIndex, FrameRange, FrameThreading, GaugeSpec, GridSpec,
    InterpMode, Keyframe, Keyframes, NumberPlaneConfig, PlotSpec, Point, Rect, RevealSpec,
    Rgb8, SeriesSpec, Viewport, XValues, eval_frames,
};

fn supply_flow() -> Keyframes<f64> {
    Keyframes {
        keys: vec![
            Keyframe {
                frame: FrameIndex(0),
                value: 0.0,
                ease: Ease::OutQuad,
            },
            Keyframe {
                frame: FrameIndex(40),
                value: 8.0,
                ease: Ease::InOutQuad,
            },
            Keyframe {
                frame: FrameIndex(100),
                value: -4.0,
                ease: Ease::Linear,
            },
        ],
        mode: InterpMode::Linear,
        default: None,
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let canvas = Canvas {
        width: 1280,
        height: 720,
    };
    let duration = FrameIndex(120); // 4s @ 30fps

    let mut zoom_in = CameraTransition::new(
        FrameIndex(10),
        FrameIndex(60),
        Viewport::covering(canvas),
        Viewport::new(420.0, 360.0, 640.0, 360.0)?,
    );
    zoom_in.maintain_aspect_ratio = true;

    let xs: Vec<f64> = (0..=20).map(|i| f64::from(i) * 0.5).collect();
    let ys: Vec<f64> = xs.iter().map(|x| (x * 0.6).sin()).collect();

    let diagram = DiagramBuilder::new(canvas, duration)
        .camera_transition(zoom_in)
        .plot(PlotSpec {
            plane: NumberPlaneConfig {
                x_range: DataRange::new(0.0, 10.0)?,
                y_range: DataRange::new(-1.0, 1.0)?,
                screen: Rect::new(680.0, 80.0, 1240.0, 400.0),
                padding: 32.0,
                x_axis: AxisSpec::default(),
                y_axis: AxisSpec {
                    label_precision: 2,
                    ..AxisSpec::default()
                },
                grid: GridSpec::default(),
            },
            x: XValues::Shared(xs),
            series: vec![SeriesSpec {
                id: "trace".to_owned(),
                y: ys,
                color: Rgb8::new(0xfc, 0x62, 0x55),
                reveal: Some(RevealSpec {
                    start_frame: FrameIndex(0),
                    end_frame: FrameIndex(90),
                    ease: Ease::Linear,
                }),
            }],
        })
        .flow(FlowLineSpec {
            id: "supply".to_owned(),
            path: vec![
                Point::new(80.0, 600.0),
                Point::new(360.0, 600.0),
                Point::new(360.0, 320.0),
                Point::new(600.0, 320.0),
            ],
            flow: supply_flow(),
            max_flow: 8.0,
            style: FlowStyle::default(),
        })
        .gauge(GaugeSpec {
            id: "cylinder".to_owned(),
            pressure: Keyframes {
                keys: vec![
                    Keyframe {
                        frame: FrameIndex(0),
                        value: 10.0,
                        ease: Ease::InOutQuad,
                    },
                    Keyframe {
                        frame: FrameIndex(119),
                        value: 190.0,
                        ease: Ease::Linear,
                    },
                ],
                mode: InterpMode::Linear,
                default: None,
            },
            max: 200.0,
            ramp: None,
        })
        .build()?;

    let frames = eval_frames(
        &diagram,
        FrameRange::new(FrameIndex(0), duration)?,
        &FrameThreading {
            parallel: true,
            threads: None,
        },
    )?;

    for f in frames.iter().step_by(30) {
        let markers = f.flows.first().map_or(0, |fl| fl.markers.len());
        let gauge = f.gauges.first().map(|g| g.color.to_hex()).unwrap_or_default();
        println!(
            "frame {:>3}: camera scale {:.3}, {markers} markers, gauge {gauge}",
            f.frame.0, f.camera.transform.scale
        );
    }

    let camera = CameraController::new(diagram.camera.clone(), canvas)?.with_observer(
        |frame, viewport| {
            tracing::info!(frame = frame.0, width = viewport.width, "camera viewport");
        },
    );
    let cursor = camera.screen_to_world(FrameIndex(60), Point::new(640.0, 360.0));
    println!("scene point under the screen center at frame 60: {cursor:?}");
    let at_60 = camera.evaluate(FrameIndex(60));
    println!("viewport at frame 60: {:?}", at_60.viewport);

    Ok(())
}
