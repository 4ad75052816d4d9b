use std::path::PathBuf;

use super::*;
use crate::foundation::core::Rgba8;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_load").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

const TWO_SHAPES: &str = r##"
[
  {"left": 0, "top": 0, "height": 50, "width": 50, "borderWidth": 0,
   "borderColor": {"R": 0, "G": 0, "B": 0, "A": 0}, "borderRadius": 0,
   "fillColor": {"R": 255, "G": 0, "B": 0, "A": 255}},
  {"left": 25, "top": 25, "height": 50, "width": 50, "borderRadius": 10,
   "fillColor": "#0000ff"}
]
"##;

#[test]
fn parse_scene_reads_shape_array() {
    let scene = parse_scene(TWO_SHAPES).unwrap();
    assert_eq!(scene.len(), 2);
    assert_eq!(scene.shapes()[0].fill_color, Rgba8::rgba(255, 0, 0, 255));
    assert_eq!(scene.shapes()[1].border_radius, 10);
}

#[test]
fn parse_scene_rejects_garbage() {
    let err = parse_scene("{not json").unwrap_err();
    assert!(matches!(err, ShapewatchError::Serde(_)));
    assert!(parse_scene(r#"[{"left": 1}]"#).is_err());
}

#[test]
fn load_scene_reports_missing_file_as_io() {
    let err = load_scene(Path::new("target/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, ShapewatchError::Io(_)));
}

#[test]
fn reload_keeps_previous_scene_on_failure() {
    let dir = scratch_dir("reload_keeps_previous");
    let path = dir.join("shapes.json");
    std::fs::write(&path, TWO_SHAPES).unwrap();

    let store = SceneStore::new();
    let snap = reload_scene(&store, &path).unwrap();
    assert_eq!(snap.len(), 2);

    std::fs::write(&path, "[{\"left\": ").unwrap();
    assert!(reload_scene(&store, &path).is_err());
    assert_eq!(store.snapshot().len(), 2);

    std::fs::remove_file(&path).unwrap();
    assert!(reload_scene(&store, &path).is_err());
    assert_eq!(store.snapshot().len(), 2);
}
