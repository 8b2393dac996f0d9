use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FlowframeError::domain("x")
            .to_string()
            .contains("domain error:")
    );
    assert!(
        FlowframeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FlowframeError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        FlowframeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FlowframeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: FlowframeError = serde_json::from_str::<f64>("nope").unwrap_err().into();
    assert!(matches!(err, FlowframeError::Serde(_)));
}

#[test]
fn degenerate_input_messages_name_the_condition() {
    assert!(DegenerateInput::TooFewPoints.to_string().contains("fewer than two"));
    assert!(
        DegenerateInput::NonPositiveViewport
            .to_string()
            .contains("not positive")
    );
    assert!(DegenerateInput::ZeroSceneHeight.to_string().contains("height"));
}
