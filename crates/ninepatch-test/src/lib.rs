//! ninepatch-test - Test helpers for the ninepatch crates
//!
//! Builds nine-patch bitmaps in memory so the test suites carry no binary
//! image assets. A test describes its content and marker runs; the helpers
//! add the one-pixel marker border around it.

use image::{Rgba, RgbaImage};

/// The nine-patch marker color.
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
/// Opaque white, the usual "not a marker" filler.
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
pub const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
pub const YELLOW: Rgba<u8> = Rgba([255, 255, 0, 255]);

/// A solid-color bitmap.
pub fn solid(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(width, height, color)
}

/// Fill a rectangle of `image` with `color`.
pub fn paint(image: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, color: Rgba<u8>) {
    for py in y..y + h {
        for px in x..x + w {
            image.put_pixel(px, py, color);
        }
    }
}

/// Wrap `content` in a one-pixel marker border.
///
/// Marker runs are given in content coordinates (0-based inside `content`)
/// as inclusive `(start, end)` spans and are drawn shifted by the border
/// pixel. `stretch_x` runs go on the top row, `stretch_y` on the left
/// column, `fill_x` on the bottom row, `fill_y` on the right column. The
/// border is transparent outside the marker runs.
pub fn with_border(
    content: &RgbaImage,
    stretch_x: &[(u32, u32)],
    stretch_y: &[(u32, u32)],
    fill_x: Option<(u32, u32)>,
    fill_y: Option<(u32, u32)>,
) -> RgbaImage {
    let (cw, ch) = content.dimensions();
    let mut out = RgbaImage::new(cw + 2, ch + 2);
    image::imageops::replace(&mut out, content, 1, 1);

    for &(s, e) in stretch_x {
        for x in s + 1..=e + 1 {
            out.put_pixel(x, 0, BLACK);
        }
    }
    for &(s, e) in stretch_y {
        for y in s + 1..=e + 1 {
            out.put_pixel(0, y, BLACK);
        }
    }
    if let Some((s, e)) = fill_x {
        for x in s + 1..=e + 1 {
            out.put_pixel(x, ch + 1, BLACK);
        }
    }
    if let Some((s, e)) = fill_y {
        for y in s + 1..=e + 1 {
            out.put_pixel(cw + 1, y, BLACK);
        }
    }

    out
}

/// The canonical 3x3 test patch: 10x10 corners in four distinct colors, a
/// white cross of stretchable edges of span `stretch` and a white center.
///
/// Corner colors, clockwise from top-left: red, green, blue, yellow.
pub fn three_by_three(stretch: u32) -> RgbaImage {
    let side = 20 + stretch;
    let mut content = solid(side, side, WHITE);
    paint(&mut content, 0, 0, 10, 10, RED);
    paint(&mut content, side - 10, 0, 10, 10, GREEN);
    paint(&mut content, 0, side - 10, 10, 10, YELLOW);
    paint(&mut content, side - 10, side - 10, 10, 10, BLUE);
    with_border(
        &content,
        &[(10, 9 + stretch)],
        &[(10, 9 + stretch)],
        None,
        None,
    )
}
