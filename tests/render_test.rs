use tui_sandbox::core::{GridStore, Unit};
use tui_sandbox::engine::{draw_map, draw_units, PixelBuffer, FULL_LIGHT};
use tui_sandbox::types::{CellCode, Race, Rgba, UnitKind, MARKER_CENTER};

#[test]
fn map_blit_respects_pixel_density() {
    let grid = GridStore::from_ascii(&[
        ".I", //
        "WR", //
    ])
    .unwrap();
    let mut pixels = PixelBuffer::new(2, 2, 3);
    draw_map(&grid, &mut pixels);

    assert_eq!(pixels.physical_width(), 6);
    assert_eq!(pixels.data().len(), 6 * 6 * 4);
    for py in 0..6 {
        for px in 0..6 {
            let expected = match (px / 3, py / 3) {
                (0, 0) => CellCode::Empty,
                (1, 0) => CellCode::Iron,
                (0, 1) => CellCode::Water,
                _ => CellCode::Rock,
            };
            assert_eq!(pixels.physical(px, py), Some(expected.color()), "({}, {})", px, py);
        }
    }
}

#[test]
fn units_draw_over_the_map() {
    let grid = GridStore::from_ascii(&[
        "RRR", //
        "R.R", //
        "RRR", //
    ])
    .unwrap();
    let mut pixels = PixelBuffer::new(3, 3, 1);
    draw_map(&grid, &mut pixels);
    draw_units(&[Unit::new(1, 1, Race::Ant, UnitKind::Worker)], &mut pixels);

    assert_eq!(pixels.get(1, 1), Some(MARKER_CENTER));
    assert_eq!(pixels.get(1, 0), Some(Race::Ant.color()));
    assert_eq!(pixels.get(0, 0), Some(CellCode::Rock.color()));
}

#[test]
fn pixel_bytes_are_rgba_row_major() {
    let mut pixels = PixelBuffer::new(2, 1, 1);
    pixels.set_pixel(Rgba::rgb(9, 8, 7), 1, 0, FULL_LIGHT);
    assert_eq!(&pixels.data()[4..8], &[9, 8, 7, 255]);
}

#[test]
fn writes_past_any_edge_are_ignored() {
    let mut pixels = PixelBuffer::new(4, 4, 2);
    let before = pixels.clone();
    for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 4), (i32::MAX, i32::MIN)] {
        pixels.set_pixel(Rgba::rgb(255, 255, 255), x, y, FULL_LIGHT);
    }
    assert_eq!(pixels, before);
}
