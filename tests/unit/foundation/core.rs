use super::*;
use serde_json::json;

#[test]
fn parses_uppercase_object() {
    let c: Rgba8 = serde_json::from_value(json!({"R": 255, "G": 0, "B": 0, "A": 255})).unwrap();
    assert_eq!(c, Rgba8::rgba(255, 0, 0, 255));
}

#[test]
fn parses_lowercase_object_with_default_alpha() {
    let c: Rgba8 = serde_json::from_value(json!({"r": 1, "g": 2, "b": 3})).unwrap();
    assert_eq!(c, Rgba8::rgba(1, 2, 3, 255));
}

#[test]
fn parses_arrays_and_hex() {
    let c: Rgba8 = serde_json::from_value(json!([10, 20, 30])).unwrap();
    assert_eq!(c, Rgba8::rgba(10, 20, 30, 255));

    let c: Rgba8 = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert_eq!(c, Rgba8::rgba(0, 0, 255, 128));

    assert!(serde_json::from_value::<Rgba8>(json!([1, 2])).is_err());
    assert!(serde_json::from_value::<Rgba8>(json!("#12345")).is_err());
    assert!(serde_json::from_value::<Rgba8>(json!({"r": 300, "g": 0, "b": 0})).is_err());
}

#[test]
fn from_str_accepts_hex_without_hash() {
    assert_eq!("ffffff".parse::<Rgba8>().unwrap(), Rgba8::WHITE);
    assert!("nope".parse::<Rgba8>().is_err());
}

#[test]
fn premultiply_scales_color_channels() {
    let p = Rgba8::rgba(255, 128, 0, 128).premultiply();
    assert_eq!(p.a, 128);
    assert_eq!(p.r, 128);
    assert_eq!(p.g, 64);
    assert_eq!(p.b, 0);

    assert_eq!(Rgba8::rgba(9, 9, 9, 0).premultiply(), Rgba8Premul::transparent());
}

#[test]
fn opaque_colors_survive_premultiply_and_back() {
    let c = Rgba8::rgba(12, 34, 56, 255);
    assert_eq!(c.premultiply().to_straight(), c);
    assert_eq!(Rgba8Premul::transparent().to_straight(), Rgba8::TRANSPARENT);
}
