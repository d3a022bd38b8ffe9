//! Tile export
//!
//! Writes each tile of a sliced nine-patch as an individual PNG, after
//! collapsing axes that carry no information: a tile whose columns (or
//! rows) are all byte-identical is stored one pixel wide (or tall).
//! Collapsing is pure redundancy elimination and has no effect on renders.

use std::path::Path;

use image::RgbaImage;

use crate::error::{NinepatchError, NinepatchResult};
use crate::patch::Ninepatch;

/// Collapse `tile` to one pixel along any axis where every column or row
/// is identical. Returns an unmodified copy when nothing collapses.
pub fn compress_tile(tile: &RgbaImage) -> RgbaImage {
    let (w, h) = tile.dimensions();
    if w == 0 || h == 0 {
        return tile.clone();
    }

    let uniform_x = (1..w).all(|x| (0..h).all(|y| tile.get_pixel(x, y) == tile.get_pixel(0, y)));
    let uniform_y = (1..h).all(|y| (0..w).all(|x| tile.get_pixel(x, y) == tile.get_pixel(x, 0)));
    if !uniform_x && !uniform_y {
        return tile.clone();
    }

    let out_w = if uniform_x { 1 } else { w };
    let out_h = if uniform_y { 1 } else { h };
    let mut out = RgbaImage::new(out_w, out_h);
    for y in 0..out_h {
        for x in 0..out_w {
            out.put_pixel(x, y, *tile.get_pixel(x, y));
        }
    }
    out
}

impl Ninepatch {
    /// Write every tile as `tile_<col>_<row>.png` under `dir`, compressed
    /// with [`compress_tile`]. The directory is created if needed.
    pub fn export_tiles<P: AsRef<Path>>(&self, dir: P) -> NinepatchResult<()> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        for (cx, column) in self.grid().columns().iter().enumerate() {
            for (cy, tile) in column.iter().enumerate() {
                let path = dir.join(format!("tile_{cx}_{cy}.png"));
                compress_tile(tile)
                    .save(&path)
                    .map_err(|e| NinepatchError::Encode(e.to_string()))?;
            }
        }
        Ok(())
    }
}
