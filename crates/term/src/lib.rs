//! Terminal presentation for the sandbox.
//!
//! Renders the engine's RGBA pixel buffer into a framebuffer of half-block
//! cells and flushes it to the terminal with diffed redraws. Avoids widget
//! libraries and keeps full control over colors and layout.
//!
//! - [`fb`]: styled character framebuffer
//! - [`sandbox_view`]: pixels to half blocks, camera, status line (pure)
//! - [`renderer`]: crossterm output with changed-run diffs
//! - [`render_throttle`]: skip redraws while nothing changes

pub mod fb;
pub mod render_throttle;
pub mod renderer;
pub mod sandbox_view;

pub use tui_sandbox_core as core;
pub use tui_sandbox_engine as engine;
pub use tui_sandbox_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sandbox_view::{Camera, SandboxView, Viewport, HALF_BLOCK};
