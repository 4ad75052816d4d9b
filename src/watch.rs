use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
    sync::mpsc,
    thread::JoinHandle,
};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::{
    foundation::error::{ShapewatchError, ShapewatchResult},
    scene::{load::reload_scene, store::SceneStore},
};

enum Msg {
    Changed,
    Stop,
}

/// Reload activity: keeps a [`SceneStore`] in sync with a shape-list file.
///
/// The file's parent directory is watched rather than the file itself so editors that
/// save by renaming a temp file over the original are still picked up. Bursts of events
/// collapse into a single reload. Dropping the watcher stops it.
pub struct SceneWatcher {
    path: PathBuf,
    watcher: Option<RecommendedWatcher>,
    tx: mpsc::Sender<Msg>,
    worker: Option<JoinHandle<()>>,
}

impl SceneWatcher {
    /// Load the file once, then start watching it.
    ///
    /// A failed initial load is logged and leaves the store untouched; the watcher
    /// still starts so a later fix to the file gets picked up.
    pub fn spawn(path: impl Into<PathBuf>, store: SceneStore) -> ShapewatchResult<Self> {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_os_string())
            .ok_or_else(|| {
                ShapewatchError::validation(format!(
                    "shape path '{}' does not name a file",
                    path.display()
                ))
            })?;
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        reload_scene(&store, &path).ok();

        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();
        let handler = move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if is_reload_event(&event, &file_name) {
                    tracing::debug!(kind = ?event.kind, "shape file event");
                    event_tx.send(Msg::Changed).ok();
                }
            }
            Err(err) => tracing::warn!(error = %err, "file watch error"),
        };
        let mut watcher = notify::recommended_watcher(handler)
            .map_err(|e| ShapewatchError::io(format!("create file watcher: {e}")))?;

        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(|e| ShapewatchError::io(format!("watch '{}': {e}", dir.display())))?;

        let worker_path = path.clone();
        let worker = std::thread::Builder::new()
            .name("shapewatch-reload".to_owned())
            .spawn(move || reload_loop(&rx, &store, &worker_path))
            .map_err(|e| ShapewatchError::io(format!("spawn reload thread: {e}")))?;

        tracing::info!(path = %path.display(), "file watch started");
        Ok(Self {
            path,
            watcher: Some(watcher),
            tx,
            worker: Some(worker),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        drop(self.watcher.take());
        self.tx.send(Msg::Stop).ok();
        if let Some(worker) = self.worker.take()
            && worker.join().is_err()
        {
            tracing::warn!("reload thread panicked");
        }
    }
}

impl Drop for SceneWatcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn reload_loop(rx: &mpsc::Receiver<Msg>, store: &SceneStore, path: &Path) {
    while let Ok(Msg::Changed) = rx.recv() {
        let mut stop = false;
        for msg in rx.try_iter() {
            if let Msg::Stop = msg {
                stop = true;
            }
        }
        if stop {
            break;
        }
        // Failures are logged inside; the previous scene stays in effect.
        reload_scene(store, path).ok();
    }
}

fn is_reload_event(event: &Event, file_name: &OsStr) -> bool {
    matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_))
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(file_name))
}

#[cfg(test)]
#[path = "../tests/unit/watch.rs"]
mod tests;
