use super::*;

#[test]
fn rejects_degenerate_and_reversed_ranges() {
    assert!(DataRange::new(0.0, 1.0).is_ok());
    let err = DataRange::new(1.0, 1.0).unwrap_err();
    assert!(err.to_string().contains("min must be less than max"));
    assert!(DataRange::new(2.0, 1.0).is_err());
    assert!(DataRange::new(f64::NAN, 1.0).is_err());
}

#[test]
fn validate_names_the_offending_range() {
    let r = DataRange { min: 3.0, max: 3.0 };
    let err = r.validate("y_range").unwrap_err();
    assert!(err.to_string().contains("y_range min must be less than max"));
}

#[test]
fn deserializes_from_object_or_pair() {
    let a: DataRange = serde_json::from_value(serde_json::json!({"min": -1.0, "max": 4.0})).unwrap();
    let b: DataRange = serde_json::from_value(serde_json::json!([-1.0, 4.0])).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.span(), 5.0);
    assert_eq!(a.normalize(1.5), 0.5);
    assert_eq!(a.clamp(9.0), 4.0);
}
