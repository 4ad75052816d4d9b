use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgba8;

/// One rounded-rectangle draw instruction.
///
/// Geometry is kept exactly as read from the shape list. Nothing here is clamped or
/// validated; [`Shape::effective_radius`] and [`Shape::size`] give the values the
/// renderer actually uses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    pub left: i32,
    pub top: i32,
    pub height: i32,
    pub width: i32,
    #[serde(default)]
    pub border_width: i32,
    #[serde(default)]
    pub border_color: Rgba8,
    #[serde(default)]
    pub border_radius: i32,
    pub fill_color: Rgba8,
}

impl Shape {
    /// A plain rectangle: no radius, no border.
    pub fn rect(left: i32, top: i32, width: i32, height: i32, fill_color: Rgba8) -> Self {
        Self {
            left,
            top,
            height,
            width,
            border_width: 0,
            border_color: Rgba8::TRANSPARENT,
            border_radius: 0,
            fill_color,
        }
    }

    pub fn with_radius(mut self, radius: i32) -> Self {
        self.border_radius = radius;
        self
    }

    /// Bounding box size, or `None` when either side is not positive.
    pub fn size(&self) -> Option<(u32, u32)> {
        let w = u32::try_from(self.width).ok().filter(|w| *w > 0)?;
        let h = u32::try_from(self.height).ok().filter(|h| *h > 0)?;
        Some((w, h))
    }

    /// Corner radius clamped to `[0, min(width, height) / 2]`.
    pub fn effective_radius(&self) -> u32 {
        let Some((w, h)) = self.size() else {
            return 0;
        };
        let r = u32::try_from(self.border_radius).unwrap_or(0);
        r.min(w.min(h) / 2)
    }
}

/// Ordered list of shapes; later entries draw on top of earlier ones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }
}

impl From<Vec<Shape>> for Scene {
    fn from(shapes: Vec<Shape>) -> Self {
        Self::new(shapes)
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
