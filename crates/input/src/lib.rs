//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and provides
//! a held-key repeat handler that works in terminals without key-release
//! events.

pub mod handler;
pub mod map;

pub use tui_sandbox_types as types;

pub use handler::InputHandler;
pub use map::{direction_for_key, handle_key_event, should_quit};
