use crate::{
    foundation::alloc::try_vec,
    foundation::error::{ShapewatchError, ShapewatchResult},
    geometry::{corner::CornerMask, inclusion::Inclusion},
    render::surface::AlphaMask,
    scene::model::Shape,
};

const OPAQUE: image::Luma<u8> = image::Luma([0xFF]);

/// Rasterize the shape's inclusion test over its whole bounding box.
///
/// Inside pixels are fully opaque, everything else stays fully transparent. `corner`
/// must have been computed for `shape.effective_radius()`.
pub fn build_mask(shape: &Shape, corner: &CornerMask) -> ShapewatchResult<AlphaMask> {
    let inc = Inclusion::new(shape, corner)?;
    let len = (inc.width() as usize)
        .checked_mul(inc.height() as usize)
        .ok_or_else(|| ShapewatchError::surface("alpha mask size overflows"))?;
    let buf = try_vec(len, 0, "alpha mask")?;
    let mut alphas = AlphaMask::from_raw(inc.width(), inc.height(), buf)
        .ok_or_else(|| ShapewatchError::surface("alpha mask buffer does not match its size"))?;
    for y in 0..inc.height() {
        for x in 0..inc.width() {
            if inc.contains(x, y) {
                alphas.put_pixel(x, y, OPAQUE);
            }
        }
    }
    Ok(alphas)
}

#[cfg(test)]
#[path = "../../tests/unit/render/mask.rs"]
mod tests;
