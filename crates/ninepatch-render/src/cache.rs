//! Render memoization
//!
//! Optional collaborator that caches rendered bitmaps by requested size.
//! The cache is owned and invalidated by the caller; nothing here is
//! global, and a cache must be cleared (or dropped) when its source
//! nine-patch changes.

use std::collections::HashMap;

use image::RgbaImage;

use crate::error::NinepatchResult;
use crate::patch::Ninepatch;

/// Cache of rendered outputs keyed by `(width, height)`.
///
/// Rendering is deterministic for a given `Ninepatch`, so a hit is
/// byte-identical to a fresh render.
#[derive(Debug, Default)]
pub struct RenderCache {
    rendered: HashMap<(u32, u32), RgbaImage>,
}

impl RenderCache {
    pub fn new() -> RenderCache {
        RenderCache::default()
    }

    /// Render `patch` at `width` x `height` through the cache.
    ///
    /// A hit returns a copy of the stored bitmap; a miss renders, stores
    /// and returns. Errors are not cached.
    pub fn render(
        &mut self,
        patch: &Ninepatch,
        width: u32,
        height: u32,
    ) -> NinepatchResult<RgbaImage> {
        if let Some(hit) = self.rendered.get(&(width, height)) {
            return Ok(hit.clone());
        }
        let bitmap = patch.render(width, height)?;
        self.rendered.insert((width, height), bitmap.clone());
        Ok(bitmap)
    }

    /// Drop every cached render. Call when the source image changes.
    pub fn clear(&mut self) {
        self.rendered.clear();
    }

    /// Number of cached renders.
    pub fn len(&self) -> usize {
        self.rendered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }
}
