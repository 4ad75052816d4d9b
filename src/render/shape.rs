use std::collections::HashSet;

use crate::{
    foundation::core::Rgba8,
    foundation::error::{ShapewatchError, ShapewatchResult},
    geometry::corner::{CornerMaskCache, CornerMaskCacheStats},
    render::{
        composite::CompositeMode,
        mask,
        surface::{AlphaMask, Surface},
    },
    scene::model::{Scene, Shape},
};

/// Turns shapes into composited pixels.
///
/// Owns the corner-mask cache, so a renderer should live as long as the frame loop
/// that drives it. It holds no scene state of its own.
#[derive(Debug, Default)]
pub struct ShapeRenderer {
    corners: CornerMaskCache,
}

impl ShapeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn corner_cache_stats(&self) -> CornerMaskCacheStats {
        self.corners.stats()
    }

    pub fn build_mask(&mut self, shape: &Shape) -> ShapewatchResult<AlphaMask> {
        let corner = self.corners.get(shape.effective_radius())?;
        mask::build_mask(shape, &corner)
    }

    /// Evict cached corner masks that no drawable shape in `scene` uses.
    pub fn retain_corner_masks(&mut self, scene: &Scene) {
        let radii: HashSet<u32> = scene
            .iter()
            .filter(|s| s.size().is_some())
            .map(Shape::effective_radius)
            .collect();
        self.corners.retain_radii(&radii);
    }

    /// Fill color shaped by the rounded-rectangle stencil, transparent outside it.
    ///
    /// 1. solid fill the size of the bounding box
    /// 2. alpha stencil
    /// 3. stencil copied over an opaque white canvas (`Copy`)
    /// 4. fill drawn onto that canvas with `SourceIn`
    pub fn render_shape(&mut self, shape: &Shape) -> ShapewatchResult<Surface> {
        let (w, h) = shape.size().ok_or_else(|| {
            ShapewatchError::surface(format!(
                "cannot allocate {}x{} shape surface",
                shape.width, shape.height
            ))
        })?;

        let fill = Surface::filled(w, h, shape.fill_color.premultiply())?;
        let stencil = self.build_mask(shape)?;
        apply_stencil(&fill, &stencil)
    }

    /// Render `shape` and blend it onto `dst` at `(left, top)`.
    pub fn draw_shape(&mut self, dst: &mut Surface, shape: &Shape) -> ShapewatchResult<()> {
        let img = self.render_shape(shape)?;
        dst.draw(&img, shape.left, shape.top, CompositeMode::SourceOver);
        Ok(())
    }
}

/// Steps 3 and 4 of [`ShapeRenderer::render_shape`]: keep `fill` only where `stencil` is set.
pub(crate) fn apply_stencil(fill: &Surface, stencil: &AlphaMask) -> ShapewatchResult<Surface> {
    if (fill.width(), fill.height()) != stencil.dimensions() {
        return Err(ShapewatchError::surface(format!(
            "stencil is {}x{}, fill is {}x{}",
            stencil.width(),
            stencil.height(),
            fill.width(),
            fill.height()
        )));
    }
    let stencil = Surface::from_alpha_mask(stencil)?;
    let mut out = Surface::filled(fill.width(), fill.height(), Rgba8::WHITE.premultiply())?;
    out.draw(&stencil, 0, 0, CompositeMode::Copy);
    out.draw(fill, 0, 0, CompositeMode::SourceIn);
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/shape.rs"]
mod tests;
