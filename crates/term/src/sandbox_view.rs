//! SandboxView: maps the engine's pixel buffer into a terminal framebuffer.
//!
//! Each terminal cell shows two physical pixels stacked vertically with an
//! upper half block: foreground is the top pixel, background the bottom one.
//! Row 0 is a status line; the rest is a camera window that follows the
//! player. This module is pure (no I/O).

use std::fmt::Write as _;

use crate::engine::{GameLoop, PixelBuffer, PLAYER};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::BACKGROUND;

/// Upper half block.
pub const HALF_BLOCK: char = '\u{2580}';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Top-left physical pixel of the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Camera {
    pub x: u32,
    pub y: u32,
}

impl Camera {
    /// Center a `view_w` x `view_h` window on (`focus_x`, `focus_y`),
    /// clamped so it never scrolls past the canvas edges.
    pub fn follow(
        focus_x: u32,
        focus_y: u32,
        view_w: u32,
        view_h: u32,
        canvas_w: u32,
        canvas_h: u32,
    ) -> Self {
        let axis = |focus: u32, view: u32, canvas: u32| {
            let max = canvas.saturating_sub(view);
            focus.saturating_sub(view / 2).min(max)
        };
        Self {
            x: axis(focus_x, view_w, canvas_w),
            y: axis(focus_y, view_h, canvas_h),
        }
    }
}

pub struct SandboxView {
    status: CellStyle,
    status_alert: CellStyle,
    outside: Rgb,
}

impl Default for SandboxView {
    fn default() -> Self {
        Self {
            status: CellStyle::colors(Rgb::new(200, 200, 200), Rgb::new(30, 30, 40)),
            status_alert: CellStyle {
                fg: Rgb::new(255, 220, 120),
                bg: Rgb::new(30, 30, 40),
                bold: true,
                dim: false,
            },
            outside: Rgb::from(BACKGROUND),
        }
    }
}

impl SandboxView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Camera for `viewport`, following the player (or the canvas origin
    /// when there is no player).
    pub fn camera(&self, game: &GameLoop, viewport: Viewport) -> Camera {
        let pixels = game.pixels();
        let d = pixels.density();
        let (fx, fy) = game
            .world()
            .unit(PLAYER)
            .map(|u| {
                (
                    u.x().max(0) as u32 * d + d / 2,
                    u.y().max(0) as u32 * d + d / 2,
                )
            })
            .unwrap_or((0, 0));
        let view_w = viewport.width as u32;
        let view_h = viewport.height.saturating_sub(1) as u32 * 2;
        Camera::follow(
            fx,
            fy,
            view_w,
            view_h,
            pixels.physical_width(),
            pixels.physical_height(),
        )
    }

    /// Render the current frame into an existing framebuffer.
    ///
    /// Callers reuse one framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, game: &GameLoop, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(self.status.into_cell(' '));
        if viewport.height == 0 {
            return;
        }

        let camera = self.camera(game, viewport);
        self.draw_pixels(game.pixels(), camera, fb);
        self.draw_status(game, fb);
    }

    pub fn render(&self, game: &GameLoop, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn draw_pixels(&self, pixels: &PixelBuffer, camera: Camera, fb: &mut FrameBuffer) {
        let sample = |px: u32, py: u32| pixels.physical(px, py).map(Rgb::from).unwrap_or(self.outside);
        for row in 1..fb.height() {
            let py = camera.y + (row as u32 - 1) * 2;
            for col in 0..fb.width() {
                let px = camera.x + col as u32;
                let style = CellStyle::colors(sample(px, py), sample(px, py + 1));
                fb.put_char(col, row, HALF_BLOCK, style);
            }
        }
    }

    fn draw_status(&self, game: &GameLoop, fb: &mut FrameBuffer) {
        let world = game.world();
        let mut line = String::with_capacity(96);
        let _ = write!(
            line,
            " seed {} | {} | {}",
            world.seed(),
            world.ruleset().name,
            game.mode().as_str()
        );
        if let Some(player) = world.unit(PLAYER) {
            let under = world
                .cell_under(PLAYER)
                .map(|c| c.as_str())
                .unwrap_or("-");
            let _ = write!(line, " | ({},{}) {}", player.x(), player.y(), under);
        }

        let end = fb.put_str(0, 0, &line, self.status);
        if game.is_paused() {
            fb.put_str(end + 1, 0, "PAUSED", self.status_alert);
        }
    }
}
