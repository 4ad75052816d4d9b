//! CPU rasterization and compositing.
//!
//! Every surface is premultiplied RGBA8. A shape goes through three full-surface passes:
//! stencil copied over white, fill drawn `SourceIn`, result drawn `SourceOver` onto the
//! destination at the shape's offset.

pub(crate) mod composite;
pub(crate) mod mask;
pub(crate) mod pipeline;
pub(crate) mod shape;
pub(crate) mod surface;
