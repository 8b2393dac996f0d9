use super::*;

fn two_stop() -> ColorRamp {
    ColorRamp::new(vec![
        ColorStop::new(0.0, Rgb8::new(0, 0, 0)),
        ColorStop::new(0.5, Rgb8::new(200, 100, 0)),
        ColorStop::new(1.0, Rgb8::new(200, 100, 250)),
    ])
    .unwrap()
}

#[test]
fn endpoints_map_to_first_and_last_stop() {
    let ramp = ColorRamp::default();
    for max in [0.5, 1.0, 250.0] {
        assert_eq!(ramp.color_at(0.0, max), Rgb8::new(0, 0, 255));
        assert_eq!(ramp.color_at(max, max), Rgb8::new(255, 0, 0));
    }
}

#[test]
fn default_ramp_hits_inner_stops() {
    let ramp = ColorRamp::default();
    assert_eq!(ramp.color_at(0.33, 1.0), Rgb8::new(0, 255, 0));
    assert_eq!(ramp.color_at(0.66, 1.0), Rgb8::new(255, 255, 0));
}

#[test]
fn interpolates_each_channel_independently() {
    let ramp = two_stop();
    assert_eq!(ramp.color_at(25.0, 100.0), Rgb8::new(100, 50, 0));
    assert_eq!(ramp.color_at(75.0, 100.0), Rgb8::new(200, 100, 125));
}

#[test]
fn out_of_range_values_clamp() {
    let ramp = ColorRamp::default();
    assert_eq!(ramp.color_at(-5.0, 10.0), ramp.color_at(0.0, 10.0));
    assert_eq!(ramp.color_at(50.0, 10.0), ramp.color_at(10.0, 10.0));
    assert_eq!(ramp.color_at(f64::NAN, 10.0), Rgb8::new(0, 0, 255));
}

#[test]
fn non_positive_max_maps_to_first_stop() {
    let ramp = ColorRamp::default();
    assert_eq!(ramp.color_at(3.0, 0.0), Rgb8::new(0, 0, 255));
    assert_eq!(color_at(3.0, -1.0, &ramp), Rgb8::new(0, 0, 255));
}

#[test]
fn interpolation_never_overshoots_bracketing_stops() {
    let ramp = ColorRamp::default();
    let stops = ramp.stops();
    for i in 0..=1000 {
        let t = f64::from(i) / 1000.0;
        let c = ramp.color_at(t, 1.0);
        let seg = stops
            .windows(2)
            .find(|w| w[0].offset <= t && t <= w[1].offset)
            .unwrap();
        let (a, b) = (seg[0].color, seg[1].color);
        for (v, lo, hi) in [(c.r, a.r, b.r), (c.g, a.g, b.g), (c.b, a.b, b.b)] {
            assert!(v >= lo.min(hi) && v <= lo.max(hi), "t={t} channel {v}");
        }
    }
}

#[test]
fn invalid_stop_lists_are_domain_errors() {
    let c = Rgb8::new(0, 0, 0);
    assert!(ColorRamp::new(vec![]).is_err());
    assert!(ColorRamp::new(vec![ColorStop::new(0.0, c)]).is_err());
    assert!(ColorRamp::new(vec![ColorStop::new(0.1, c), ColorStop::new(1.0, c)]).is_err());
    assert!(ColorRamp::new(vec![ColorStop::new(0.0, c), ColorStop::new(0.9, c)]).is_err());
    let err = ColorRamp::new(vec![
        ColorStop::new(0.0, c),
        ColorStop::new(0.5, c),
        ColorStop::new(0.5, c),
        ColorStop::new(1.0, c),
    ])
    .unwrap_err();
    assert!(err.to_string().contains("strictly increasing"));
}

#[test]
fn deserialization_validates_stops() {
    let ok: ColorRamp = serde_json::from_value(serde_json::json!([
        {"offset": 0.0, "color": "#000000"},
        {"offset": 1.0, "color": "#ffffff"}
    ]))
    .unwrap();
    assert_eq!(ok.color_at(1.0, 2.0), Rgb8::new(128, 128, 128));

    let bad = serde_json::from_value::<ColorRamp>(serde_json::json!([
        {"offset": 0.0, "color": "#000000"},
        {"offset": 0.7, "color": "#ffffff"}
    ]));
    assert!(bad.is_err());
}
