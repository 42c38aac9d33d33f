//! Map and unit blitting into a [`PixelBuffer`].

use tui_sandbox_core::{GridStore, Unit};

use crate::pixels::PixelBuffer;

/// Full brightness for `set_pixel`.
pub const FULL_LIGHT: u8 = 255;

/// Blit every grid cell as its fixed color.
pub fn draw_map(grid: &GridStore, pixels: &mut PixelBuffer) {
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            if let Some(code) = grid.get(x, y) {
                pixels.set_pixel(code.color(), x, y, FULL_LIGHT);
            }
        }
    }
}

/// Plus-shaped marker centered on the unit.
pub fn draw_unit(unit: &Unit, pixels: &mut PixelBuffer) {
    for (x, y, color) in unit.marker() {
        pixels.set_pixel(color, x, y, FULL_LIGHT);
    }
}

pub fn draw_units(units: &[Unit], pixels: &mut PixelBuffer) {
    for unit in units {
        draw_unit(unit, pixels);
    }
}
