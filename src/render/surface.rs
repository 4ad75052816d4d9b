use std::path::Path;

use crate::{
    foundation::alloc::try_vec,
    foundation::core::Rgba8Premul,
    foundation::error::{ShapewatchError, ShapewatchResult},
    render::composite::{CompositeMode, composite_span},
};

/// Single-channel stencil; the luma channel is read as alpha.
pub type AlphaMask = image::GrayImage;

/// Row-major premultiplied RGBA8 pixel buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Surface {
    /// Transparent surface. Fails for empty or overflowing sizes.
    pub fn new(width: u32, height: u32) -> ShapewatchResult<Self> {
        let len = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: try_vec(len, 0, "surface pixels")?,
        })
    }

    pub fn filled(width: u32, height: u32, color: Rgba8Premul) -> ShapewatchResult<Self> {
        let mut s = Self::new(width, height)?;
        s.fill(color);
        Ok(s)
    }

    /// White surface carrying the stencil's alpha, i.e. `(a, a, a, a)` premultiplied.
    pub fn from_alpha_mask(mask: &AlphaMask) -> ShapewatchResult<Self> {
        let mut s = Self::new(mask.width(), mask.height())?;
        for (px, a) in s.data.chunks_exact_mut(4).zip(mask.as_raw().iter().copied()) {
            px.copy_from_slice(&[a, a, a, a]);
        }
        Ok(s)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn fill(&mut self, color: Rgba8Premul) {
        let px = color.to_array();
        for chunk in self.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8Premul> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let p = &self.data[idx..idx + 4];
        Some(Rgba8Premul::from_array([p[0], p[1], p[2], p[3]]))
    }

    /// Composite `src` with its top-left corner at `(left, top)`.
    ///
    /// Only the overlap with this surface is touched; anything outside is clipped.
    pub fn draw(&mut self, src: &Surface, left: i32, top: i32, mode: CompositeMode) {
        let x0 = i64::from(left).max(0);
        let y0 = i64::from(top).max(0);
        let x1 = (i64::from(left) + i64::from(src.width)).min(i64::from(self.width));
        let y1 = (i64::from(top) + i64::from(src.height)).min(i64::from(self.height));
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let span = ((x1 - x0) as usize) * 4;
        let sx = (x0 - i64::from(left)) as usize;
        for y in y0..y1 {
            let sy = (y - i64::from(top)) as usize;
            let s_off = (sy * (src.width as usize) + sx) * 4;
            let d_off = ((y as usize) * (self.width as usize) + (x0 as usize)) * 4;
            composite_span(
                &mut self.data[d_off..d_off + span],
                &src.data[s_off..s_off + span],
                mode,
            );
        }
    }

    /// Straight-alpha copy suitable for encoding.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        let mut out = Vec::with_capacity(self.data.len());
        for p in self.data.chunks_exact(4) {
            let c = Rgba8Premul::from_array([p[0], p[1], p[2], p[3]]).to_straight();
            out.extend_from_slice(&[c.r, c.g, c.b, c.a]);
        }
        image::RgbaImage::from_raw(self.width, self.height, out)
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }

    pub fn save_png(&self, path: &Path) -> ShapewatchResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                ShapewatchError::io(format!("create output dir '{}': {e}", parent.display()))
            })?;
        }
        self.to_rgba_image()
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| ShapewatchError::io(format!("write png '{}': {e}", path.display())))
    }
}

fn byte_len(width: u32, height: u32) -> ShapewatchResult<usize> {
    if width == 0 || height == 0 {
        return Err(ShapewatchError::surface(format!(
            "surface must be non-empty, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| ShapewatchError::surface(format!("surface {width}x{height} overflows")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
