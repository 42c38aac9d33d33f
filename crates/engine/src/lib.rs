//! Sandbox engine - frame loop, pixel buffer, configuration and event log
//!
//! Sits between the pure world model in `tui-sandbox-core` and whatever
//! presents the pixels. Nothing here touches the terminal.
//!
//! # Module Structure
//!
//! - [`pixels`]: RGBA buffer with a pixel-density factor
//! - [`render`]: map and unit-marker blitting
//! - [`game_loop`]: clear, redraw map, update units, draw units
//! - [`config`]: `SANDBOX_*` environment variables and command-line args
//! - [`log`]: JSONL event log
//!
//! # Example
//!
//! ```
//! use tui_sandbox_engine::{GameLoop, SandboxConfig};
//!
//! let config = SandboxConfig {
//!     width: 32,
//!     height: 24,
//!     ..SandboxConfig::default()
//! };
//! let mut game = config.build_loop();
//! let report = game.frame(16);
//! assert_eq!(report.frame, 1);
//! assert_eq!(game.pixels().width(), 32);
//! ```

pub mod config;
pub mod game_loop;
pub mod log;
pub mod pixels;
pub mod render;

pub use config::{Command, SandboxConfig, MAX_CANVAS_SIDE, MAX_PHYSICAL_PIXELS};
pub use game_loop::{ActionOutcome, FrameReport, GameLoop, PLAYER};
pub use log::{EventLog, LogEvent};
pub use pixels::PixelBuffer;
pub use render::{draw_map, draw_unit, draw_units, FULL_LIGHT};
