//! Rounded-corner geometry: the per-radius corner grid and the per-pixel inclusion test.

pub(crate) mod corner;
pub(crate) mod inclusion;
