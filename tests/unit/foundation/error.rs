use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ColoranimError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ColoranimError::generation("x")
            .to_string()
            .contains("generation error:")
    );
    assert!(
        ColoranimError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        ColoranimError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ColoranimError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
