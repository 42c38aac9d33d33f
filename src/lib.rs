//! TUI Sandbox (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_sandbox::{core,engine,input,term,types}`
//! so the binary, integration tests and benches share one import path.

pub use tui_sandbox_core as core;
pub use tui_sandbox_engine as engine;
pub use tui_sandbox_input as input;
pub use tui_sandbox_term as term;
pub use tui_sandbox_types as types;
