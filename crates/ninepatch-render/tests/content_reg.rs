//! Content-area fitting and wrapping regression tests.

use image::imageops::crop_imm;
use ninepatch_render::Ninepatch;
use ninepatch_test::{RED, WHITE, solid, with_border};

/// A 3x3 patch with fill marks on both axes: content margins (3, 3) from
/// the top-left and (4, 4) from the bottom-right.
fn patch_with_content_area() -> Ninepatch {
    let content = solid(24, 24, WHITE);
    let src = with_border(
        &content,
        &[(10, 13)],
        &[(10, 13)],
        Some((2, 21)),
        Some((2, 21)),
    );
    Ninepatch::from_image(src).unwrap()
}

#[test]
fn test_content_area_margins() {
    let patch = patch_with_content_area();
    let area = patch.content_area().unwrap();
    assert_eq!((area.left, area.top), (3, 3));
    assert_eq!((area.right, area.bottom), (4, 4));
}

#[test]
fn test_fit_covers_payload_plus_margins() {
    let patch = patch_with_content_area();
    let out = patch.render_fit(30, 20).unwrap();
    assert_eq!(out.dimensions(), (30 + 3 + 4, 20 + 3 + 4));
}

#[test]
fn test_fit_never_goes_below_minimum() {
    let patch = patch_with_content_area();
    let (min_w, min_h) = patch.min_size();
    let out = patch.render_fit(1, 1).unwrap();
    assert_eq!(out.dimensions(), (min_w, min_h));
}

#[test]
fn test_wrap_round_trips_the_payload() {
    let patch = patch_with_content_area();
    let payload = solid(30, 20, RED);
    let out = patch.render_wrap(&payload).unwrap();

    let area = patch.content_area().unwrap();
    let read_back = crop_imm(&out, area.left, area.top, 30, 20).to_image();
    assert_eq!(read_back, payload);
}

#[test]
fn test_fill_on_one_axis_yields_no_content_area() {
    let content = solid(24, 24, WHITE);
    let src = with_border(&content, &[(10, 13)], &[(10, 13)], Some((2, 21)), None);
    let patch = Ninepatch::from_image(src).unwrap();
    assert_eq!(patch.content_area(), None);
}

#[test]
fn test_wrap_without_content_area_pastes_at_origin() {
    let content = solid(24, 24, WHITE);
    let src = with_border(&content, &[(10, 13)], &[(10, 13)], None, None);
    let patch = Ninepatch::from_image(src).unwrap();

    let payload = solid(30, 25, RED);
    let out = patch.render_wrap(&payload).unwrap();
    assert_eq!(out.dimensions(), (30, 25));
    assert_eq!(crop_imm(&out, 0, 0, 30, 25).to_image(), payload);
}
