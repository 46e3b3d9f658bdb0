use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BrushError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BrushError::access("x")
            .to_string()
            .contains("access error:")
    );
    assert!(BrushError::state("x").to_string().contains("state error:"));
    assert!(
        BrushError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BrushError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
