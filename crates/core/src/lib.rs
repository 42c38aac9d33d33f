//! Core sandbox logic - pure, deterministic, and testable
//!
//! This crate holds the world model and terrain generation. It has **no
//! dependencies** on terminal I/O or rendering, making it:
//!
//! - **Deterministic**: the same seed and ruleset produce the same grid
//! - **Testable**: every rule is a plain function over a [`GridStore`]
//! - **Portable**: usable headless (ASCII dump, JSON snapshot) or on screen
//!
//! # Module Structure
//!
//! - [`grid`]: flat row-major cell store with bounds-checked access
//! - [`mineral`]: mineral enum, comparators and built-in rulesets
//! - [`field`]: seeded multi-octave Perlin field
//! - [`terrain`]: layer-by-layer generation (last write wins)
//! - [`unit`]: units, blocked four-way moves, random walk, marker shape
//! - [`rng`]: small LCG used for noise seeds and wandering
//! - [`world`]: grid + units + RNG bundled as one explicit state
//! - [`snapshot`]: serializable world summary
//!
//! # Example
//!
//! ```
//! use tui_sandbox_core::{Ruleset, WorldState};
//! use tui_sandbox_types::Direction;
//!
//! let mut world = WorldState::new(64, 48, 12345, Ruleset::classic());
//! world.spawn_default_units();
//!
//! // The player spawns in a dug-out clearing, so the first step always works.
//! assert_eq!(world.move_unit(0, Direction::Right), Some(true));
//!
//! // Same seed, same terrain.
//! let mut again = WorldState::new(64, 48, 12345, Ruleset::classic());
//! again.spawn_default_units();
//! assert_eq!(world.snapshot().grid_hash, again.snapshot().grid_hash);
//! ```

pub mod field;
pub mod grid;
pub mod mineral;
pub mod rng;
pub mod snapshot;
pub mod terrain;
pub mod unit;
pub mod world;

pub use tui_sandbox_types as types;

// Re-export commonly used types for convenience
pub use field::NoiseField;
pub use grid::{fnv1a64, GridStore};
pub use mineral::{Mineral, MineralLayer, Ruleset, Threshold};
pub use rng::SimpleRng;
pub use snapshot::{CellCounts, UnitSnapshot, WorldSnapshot};
pub use terrain::{GenerationReport, LayerReport, TerrainGenerator};
pub use unit::{Position, Unit};
pub use world::{WorldState, SPAWN_CLEARING_RADIUS};
