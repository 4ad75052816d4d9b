use std::{fs::File, io::BufReader, path::Path, sync::Arc};

use crate::{
    foundation::error::{ShapewatchError, ShapewatchResult},
    scene::{model::Scene, store::SceneStore},
};

pub fn parse_scene(json: &str) -> ShapewatchResult<Scene> {
    serde_json::from_str(json).map_err(|e| ShapewatchError::serde(format!("parse shapes: {e}")))
}

#[tracing::instrument]
pub fn load_scene(path: &Path) -> ShapewatchResult<Scene> {
    let f = File::open(path)
        .map_err(|e| ShapewatchError::io(format!("open shapes '{}': {e}", path.display())))?;
    let r = BufReader::new(f);
    serde_json::from_reader(r).map_err(|e| {
        ShapewatchError::serde(format!("parse shapes '{}': {e}", path.display()))
    })
}

/// One reload attempt: on success the store gets the new scene, on failure it keeps
/// whatever it held before.
pub fn reload_scene(store: &SceneStore, path: &Path) -> ShapewatchResult<Arc<Scene>> {
    match load_scene(path) {
        Ok(scene) => {
            tracing::info!(path = %path.display(), shapes = scene.len(), "loaded shapes");
            store.set(scene);
            Ok(store.snapshot())
        }
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "reload failed; keeping previous scene"
            );
            Err(err)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/load.rs"]
mod tests;
