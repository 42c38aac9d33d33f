//! RGBA pixel buffer with a pixel-density factor.
//!
//! Drawing happens in logical pixels; each logical pixel covers a
//! `density` x `density` block of physical pixels. Storage is RGBA bytes,
//! row-major over the physical surface.

use tui_sandbox_types::{Rgba, MAX_PIXEL_DENSITY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    density: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// `width`/`height` are logical. `density` is clamped to 1..=MAX_PIXEL_DENSITY.
    pub fn new(width: u32, height: u32, density: u32) -> Self {
        let density = density.clamp(1, MAX_PIXEL_DENSITY);
        let len = 4 * (width * density) as usize * (height * density) as usize;
        Self {
            width,
            height,
            density,
            data: vec![0; len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn density(&self) -> u32 {
        self.density
    }

    pub fn physical_width(&self) -> u32 {
        self.width * self.density
    }

    pub fn physical_height(&self) -> u32 {
        self.height * self.density
    }

    /// Raw RGBA bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline(always)]
    fn byte_index(&self, px: u32, py: u32) -> Option<usize> {
        if px >= self.physical_width() || py >= self.physical_height() {
            return None;
        }
        Some(4 * (py as usize * self.physical_width() as usize + px as usize))
    }

    /// Fill every physical pixel with `color`.
    pub fn clear(&mut self, color: Rgba) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    /// Write `color`, scaled by `light / 255`, into the density block of
    /// logical pixel (x, y). Pixels outside the buffer are dropped.
    pub fn set_pixel(&mut self, color: Rgba, x: i32, y: i32, light: u8) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let c = color.lit(light);
        let d = self.density;
        for j in 0..d {
            for i in 0..d {
                let px = x as u32 * d + i;
                let py = y as u32 * d + j;
                if let Some(idx) = self.byte_index(px, py) {
                    self.data[idx..idx + 4].copy_from_slice(&[c.r, c.g, c.b, c.a]);
                }
            }
        }
    }

    /// Color of physical pixel (px, py).
    pub fn physical(&self, px: u32, py: u32) -> Option<Rgba> {
        self.byte_index(px, py).map(|i| {
            let d = &self.data[i..i + 4];
            Rgba::new(d[0], d[1], d[2], d[3])
        })
    }

    /// Color of logical pixel (x, y), read from the top-left of its block.
    pub fn get(&self, x: i32, y: i32) -> Option<Rgba> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        self.physical(x as u32 * self.density, y as u32 * self.density)
    }
}
