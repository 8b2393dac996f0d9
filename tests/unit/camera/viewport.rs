use super::*;

#[test]
fn rejects_non_positive_size() {
    assert!(Viewport::new(0.0, 0.0, 10.0, 5.0).is_ok());
    assert!(Viewport::new(0.0, 0.0, 0.0, 5.0).is_err());
    assert!(Viewport::new(0.0, 0.0, 10.0, -1.0).is_err());
    let err = Viewport::new(f64::NAN, 0.0, 10.0, 5.0).unwrap_err();
    assert!(err.to_string().contains("finite"));
}

#[test]
fn covering_matches_canvas() {
    let v = Viewport::covering(Canvas {
        width: 1920,
        height: 1080,
    });
    assert_eq!(v.center(), Point::new(960.0, 540.0));
    assert_eq!(v.rect(), Rect::new(0.0, 0.0, 1920.0, 1080.0));
}

#[test]
fn lerp_moves_every_field_independently() {
    let a = Viewport::new(0.0, 0.0, 100.0, 50.0).unwrap();
    let b = Viewport::new(10.0, -20.0, 300.0, 10.0).unwrap();
    let m = Viewport::lerp(&a, &b, 0.5);
    assert_eq!(m, Viewport::new(5.0, -10.0, 200.0, 30.0).unwrap());
}
