use crate::{
    foundation::core::Rgba8,
    foundation::error::ShapewatchResult,
    render::{shape::ShapeRenderer, surface::Surface},
    scene::{model::Scene, store::SceneStore},
};

/// Destination surface configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    /// Fill applied before any shape is drawn; `None` leaves the surface transparent.
    pub clear_rgba: Option<Rgba8>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            clear_rgba: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneRenderStats {
    pub shapes_total: u64,
    pub shapes_drawn: u64,
    pub shapes_skipped: u64,
}

/// Draw every shape of `scene` onto `dst` in scene order.
///
/// A shape that fails to render is skipped with a warning; the rest of the scene still
/// draws. Corner masks for radii the scene no longer uses are evicted afterwards.
#[tracing::instrument(skip_all, fields(shapes = scene.len()))]
pub fn draw_scene(
    renderer: &mut ShapeRenderer,
    dst: &mut Surface,
    scene: &Scene,
) -> SceneRenderStats {
    let mut stats = SceneRenderStats::default();
    for (idx, shape) in scene.iter().enumerate() {
        stats.shapes_total += 1;
        match renderer.draw_shape(dst, shape) {
            Ok(()) => stats.shapes_drawn += 1,
            Err(err) => {
                stats.shapes_skipped += 1;
                tracing::warn!(index = idx, error = %err, "skipping shape");
            }
        }
    }
    renderer.retain_corner_masks(scene);
    stats
}

/// Render the store's current scene onto a fresh surface.
///
/// The snapshot is taken up front, so a reload landing mid-frame only shows up in the
/// next frame.
pub fn render_frame(
    store: &SceneStore,
    renderer: &mut ShapeRenderer,
    settings: &RenderSettings,
) -> ShapewatchResult<(Surface, SceneRenderStats)> {
    let scene = store.snapshot();
    render_scene(renderer, &scene, settings)
}

/// Clear a new surface per `settings` and draw `scene` onto it.
pub fn render_scene(
    renderer: &mut ShapeRenderer,
    scene: &Scene,
    settings: &RenderSettings,
) -> ShapewatchResult<(Surface, SceneRenderStats)> {
    let mut surface = Surface::new(settings.width, settings.height)?;
    if let Some(bg) = settings.clear_rgba {
        surface.fill(bg.premultiply());
    }
    let stats = draw_scene(renderer, &mut surface, scene);
    Ok((surface, stats))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
