use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ShapewatchError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ShapewatchError::geometry("x")
            .to_string()
            .contains("geometry error:")
    );
    assert!(
        ShapewatchError::surface("x")
            .to_string()
            .contains("surface error:")
    );
    assert!(
        ShapewatchError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(ShapewatchError::io("x").to_string().contains("io error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ShapewatchError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
