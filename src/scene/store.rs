use std::sync::Arc;

use parking_lot::RwLock;

use crate::scene::model::Scene;

/// Latest complete scene, swapped wholesale by the reload path.
///
/// Readers get an `Arc` snapshot and release the lock before doing any pixel work, so
/// a frame never sees a half-replaced shape list and a reload never waits on a render.
/// Clones share the same underlying slot.
#[derive(Clone, Debug, Default)]
pub struct SceneStore {
    current: Arc<RwLock<Arc<Scene>>>,
}

impl SceneStore {
    /// Starts out holding an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scene(scene: Scene) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(scene))),
        }
    }

    /// Replace the scene. Returns the previous snapshot.
    pub fn set(&self, scene: Scene) -> Arc<Scene> {
        let next = Arc::new(scene);
        std::mem::replace(&mut *self.current.write(), next)
    }

    pub fn snapshot(&self) -> Arc<Scene> {
        Arc::clone(&self.current.read())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/store.rs"]
mod tests;
