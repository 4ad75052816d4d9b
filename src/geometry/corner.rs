use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use crate::foundation::{
    alloc::try_vec,
    error::{ShapewatchError, ShapewatchResult},
};

/// Quarter-disk classification grid for one rounded corner.
///
/// The grid is `(radius + 1) x (radius + 1)`. Cell `(0, 0)` is the outer corner of the
/// bounding box and cell `(radius, radius)` is the center of the corner circle, so a
/// cell is inside iff its distance to `(radius, radius)` is at most `radius`. All four
/// corners of a shape share one grid through coordinate reflection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CornerMask {
    radius: u32,
    cells: Vec<bool>,
}

impl CornerMask {
    /// O(radius^2); integer arithmetic only. Fails when the grid cannot be allocated.
    pub fn compute(radius: u32) -> ShapewatchResult<Self> {
        let side = radius as usize + 1;
        let r = i64::from(radius);
        let r2 = r * r;

        let len = side.checked_mul(side).ok_or_else(|| {
            ShapewatchError::surface(format!("corner mask for radius {radius} overflows"))
        })?;
        let mut cells = try_vec(len, false, "corner mask")?;
        for x in 0..=r {
            for y in 0..=r {
                let dx = r - x;
                let dy = r - y;
                cells[(x as usize) * side + (y as usize)] = dx * dx + dy * dy <= r2;
            }
        }
        Ok(Self { radius, cells })
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Grid side length, `radius + 1`.
    pub fn side(&self) -> u32 {
        self.radius + 1
    }

    /// `None` when `(x, y)` lies outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<bool> {
        if x > self.radius || y > self.radius {
            return None;
        }
        let side = self.side() as usize;
        Some(self.cells[(x as usize) * side + (y as usize)])
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CornerMaskCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub retained: usize,
    pub evicted: u64,
}

/// Corner masks keyed by radius, computed on first use.
///
/// A mask depends on nothing but its radius, so one entry serves every shape that
/// shares that radius, across frames.
#[derive(Debug, Default)]
pub struct CornerMaskCache {
    by_radius: HashMap<u32, Arc<CornerMask>>,
    stats: CornerMaskCacheStats,
}

impl CornerMaskCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, radius: u32) -> ShapewatchResult<Arc<CornerMask>> {
        if let Some(mask) = self.by_radius.get(&radius) {
            self.stats.hits = self.stats.hits.saturating_add(1);
            return Ok(Arc::clone(mask));
        }

        tracing::debug!(radius, "corner mask cache miss");
        self.stats.misses = self.stats.misses.saturating_add(1);
        let mask = Arc::new(CornerMask::compute(radius)?);
        self.by_radius.insert(radius, Arc::clone(&mask));
        self.stats.retained = self.by_radius.len();
        Ok(mask)
    }

    /// Drop every mask whose radius is not in `radii`.
    pub fn retain_radii(&mut self, radii: &HashSet<u32>) {
        let before = self.by_radius.len();
        self.by_radius.retain(|r, _| radii.contains(r));
        let evicted = before - self.by_radius.len();
        if evicted > 0 {
            tracing::debug!(evicted, "corner masks evicted");
        }
        self.stats.evicted = self.stats.evicted.saturating_add(evicted as u64);
        self.stats.retained = self.by_radius.len();
    }

    pub fn stats(&self) -> CornerMaskCacheStats {
        self.stats
    }

    pub fn clear(&mut self) {
        self.by_radius.clear();
        self.stats.retained = 0;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/corner.rs"]
mod tests;
