use crate::{
    foundation::error::{ShapewatchError, ShapewatchResult},
    geometry::corner::CornerMask,
    scene::model::Shape,
};

/// Per-shape inclusion test bound to a precomputed corner mask.
///
/// Coordinates are local to the shape's bounding box. Corner regions are found by
/// reflecting `(x, y)` onto the top-left quadrant (distance to the nearest vertical and
/// horizontal edge), so the four corners are exact mirror images and a lookup never
/// leaves the `(radius + 1)^2` grid.
#[derive(Clone, Copy, Debug)]
pub struct Inclusion<'a> {
    width: u32,
    height: u32,
    radius: u32,
    mask: &'a CornerMask,
}

impl<'a> Inclusion<'a> {
    pub fn new(shape: &Shape, mask: &'a CornerMask) -> ShapewatchResult<Self> {
        let (width, height) = shape.size().ok_or_else(|| {
            ShapewatchError::geometry(format!(
                "shape bounding box must be positive, got {}x{}",
                shape.width, shape.height
            ))
        })?;
        let radius = shape.effective_radius();
        if mask.radius() != radius {
            return Err(ShapewatchError::geometry(format!(
                "corner mask radius {} does not match shape radius {radius}",
                mask.radius()
            )));
        }
        Ok(Self {
            width,
            height,
            radius,
            mask,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        if self.radius == 0 {
            return true;
        }
        if x >= self.width || y >= self.height {
            return false;
        }

        let ix = x.min(self.width - 1 - x);
        let iy = y.min(self.height - 1 - y);
        if ix <= self.radius && iy <= self.radius {
            // In range by construction; a miss would mean the mask and radius disagree.
            return self.mask.get(ix, iy).unwrap_or(false);
        }

        // Straight edges and interior.
        true
    }
}

/// One-off inclusion test that computes the corner mask on the spot.
///
/// Returns `true` for any coordinate when the radius is zero or negative. Shapes whose
/// bounding box is empty contain nothing else.
pub fn is_inside(shape: &Shape, x: u32, y: u32) -> bool {
    if shape.border_radius <= 0 {
        return true;
    }
    let Ok(mask) = CornerMask::compute(shape.effective_radius()) else {
        return false;
    };
    Inclusion::new(shape, &mask).is_ok_and(|inc| inc.contains(x, y))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/inclusion.rs"]
mod tests;
