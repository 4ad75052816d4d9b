//! shapewatch renders a live-reloadable list of rounded rectangles onto a CPU surface.
//!
//! # Pipeline overview
//!
//! 1. **Load**: a JSON shape list becomes a [`Scene`]; [`SceneWatcher`] reloads it whenever
//!    the file changes and swaps it into a [`SceneStore`].
//! 2. **Snapshot**: each frame takes an `Arc<Scene>` from the store and releases the lock.
//! 3. **Mask**: per shape, a [`CornerMask`] (cached by radius) feeds the [`Inclusion`] test,
//!    which is rasterized into a binary [`AlphaMask`].
//! 4. **Composite**: the mask shapes a solid fill, and the result is blended onto the
//!    destination [`Surface`] at the shape's offset, in scene order.
//!
//! Invalid geometry is tolerated rather than rejected: radii are clamped to half the short
//! side, and shapes without a positive bounding box are skipped with a warning.
#![forbid(unsafe_code)]

mod foundation;
mod geometry;
mod render;
mod scene;
mod watch;

pub use foundation::core::{Rgba8, Rgba8Premul};
pub use foundation::error::{ShapewatchError, ShapewatchResult};
pub use geometry::corner::{CornerMask, CornerMaskCache, CornerMaskCacheStats};
pub use geometry::inclusion::{Inclusion, is_inside};
pub use render::composite::{CompositeMode, PremulRgba8, over, source_in};
pub use render::mask::build_mask;
pub use render::pipeline::{
    RenderSettings, SceneRenderStats, draw_scene, render_frame, render_scene,
};
pub use render::shape::ShapeRenderer;
pub use render::surface::{AlphaMask, Surface};
pub use scene::load::{load_scene, parse_scene, reload_scene};
pub use scene::model::{Scene, Shape};
pub use scene::store::SceneStore;
pub use watch::SceneWatcher;
