//! Tile compositor
//!
//! Walks the tile grid column by column, resizes the stretchable tiles to
//! their planned sizes and pastes everything onto a fresh canvas at a
//! running cursor. Fixed tiles are pasted untouched, so they stay
//! byte-identical to the source across any render size.

use image::RgbaImage;
use image::imageops::{self, FilterType};
use ninepatch_core::{Distributor, ScalePlan, TileGrid, is_stretchable};

/// Assemble the output bitmap for `plan`.
///
/// The caller guarantees the plan was made for `(width, height)`; lane
/// sizes then sum to the canvas size exactly, so the cursor never runs
/// past the edge.
///
/// Resizing allocates a scaled copy per tile and never touches the tiles
/// stored in the grid, so concurrent renders off one grid are safe.
pub(crate) fn compose(
    grid: &TileGrid,
    width: u32,
    height: u32,
    plan: &ScalePlan,
    filter: FilterType,
) -> RgbaImage {
    let mut canvas = RgbaImage::new(width, height);

    // one bonus draw per stretchable column, in traversal order
    let mut extra_x = Distributor::new(plan.extra.x);
    let mut x_cursor: i64 = 0;

    for (cx, column) in grid.columns().iter().enumerate() {
        let bonus_x = if is_stretchable(cx) { extra_x.take() } else { 0 };
        // the remainder restarts for every column's vertical pass
        let mut extra_y = Distributor::new(plan.extra.y);
        let mut y_cursor: i64 = 0;
        let mut column_width = 0;

        for (cy, tile) in column.iter().enumerate() {
            let bonus_y = if is_stretchable(cy) { extra_y.take() } else { 0 };

            let out_w = if is_stretchable(cx) {
                plan.unit.x + bonus_x
            } else {
                tile.width()
            };
            let out_h = if is_stretchable(cy) {
                plan.unit.y + bonus_y
            } else {
                tile.height()
            };

            if (out_w, out_h) == tile.dimensions() {
                imageops::replace(&mut canvas, tile, x_cursor, y_cursor);
            } else {
                let scaled = imageops::resize(tile, out_w, out_h, filter);
                imageops::replace(&mut canvas, &scaled, x_cursor, y_cursor);
            }

            y_cursor += out_h as i64;
            column_width = out_w;
        }

        // every tile in a column shares the column width
        x_cursor += column_width as i64;
    }

    canvas
}
