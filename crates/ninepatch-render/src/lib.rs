//! ninepatch-render - Compositing and content fitting for nine-patches
//!
//! Builds on `ninepatch-core`: [`Ninepatch`] decodes and slices a source
//! bitmap once, then renders it at arbitrary sizes by stretching only the
//! marked tiles. Also provides payload fitting ([`Ninepatch::render_fit`],
//! [`Ninepatch::render_wrap`]), tile export and an optional [`RenderCache`].

mod cache;
mod compose;
mod error;
mod export;
mod patch;

pub use cache::RenderCache;
pub use error::{NinepatchError, NinepatchResult};
pub use export::compress_tile;
pub use patch::Ninepatch;
