//! GameLoop: one frame = clear, redraw map, update units, draw units.
//!
//! The loop owns the world and the pixel buffer. It is driven from outside
//! with [`GameLoop::frame`] once per tick and [`GameLoop::apply_action`] for
//! every input action; nothing here touches the terminal.

use tui_sandbox_core::WorldState;
use tui_sandbox_types::{ControlMode, GameAction, BACKGROUND};

use crate::pixels::PixelBuffer;
use crate::render::{draw_map, draw_units};

/// Index of the keyboard-driven unit.
pub const PLAYER: usize = 0;

/// What an action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Moved,
    Blocked,
    Regenerated { seed: u32 },
    ModeChanged(ControlMode),
    PauseChanged(bool),
    /// Not applicable in the current state (paused, wander mode, no player).
    Ignored,
}

impl ActionOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionOutcome::Moved => "moved",
            ActionOutcome::Blocked => "blocked",
            ActionOutcome::Regenerated { .. } => "regenerated",
            ActionOutcome::ModeChanged(_) => "modeChanged",
            ActionOutcome::PauseChanged(_) => "pauseChanged",
            ActionOutcome::Ignored => "ignored",
        }
    }
}

/// Per-frame summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub frame: u64,
    pub wander_steps: u32,
}

pub struct GameLoop {
    world: WorldState,
    pixels: PixelBuffer,
    mode: ControlMode,
    paused: bool,
}

impl GameLoop {
    pub fn new(world: WorldState, density: u32, mode: ControlMode) -> Self {
        let pixels = PixelBuffer::new(world.grid().width(), world.grid().height(), density);
        Self {
            world,
            pixels,
            mode,
            paused: false,
        }
    }

    pub fn apply_action(&mut self, action: GameAction) -> ActionOutcome {
        match action {
            GameAction::Pause => {
                self.paused = !self.paused;
                ActionOutcome::PauseChanged(self.paused)
            }
            GameAction::ToggleMode => {
                self.mode = self.mode.toggled();
                ActionOutcome::ModeChanged(self.mode)
            }
            GameAction::Regenerate => {
                let seed = self.world.regenerate();
                ActionOutcome::Regenerated { seed }
            }
            GameAction::Move(dir) => {
                if self.paused || self.mode != ControlMode::Keyboard {
                    return ActionOutcome::Ignored;
                }
                match self.world.move_unit(PLAYER, dir) {
                    Some(true) => ActionOutcome::Moved,
                    Some(false) => ActionOutcome::Blocked,
                    None => ActionOutcome::Ignored,
                }
            }
        }
    }

    /// Run one frame of `elapsed_ms`.
    ///
    /// The map is redrawn every frame even though it rarely changes; the
    /// clear is overwritten by it wherever the grid covers the canvas.
    pub fn frame(&mut self, elapsed_ms: u32) -> FrameReport {
        self.pixels.clear(BACKGROUND);
        draw_map(self.world.grid(), &mut self.pixels);

        let wander_steps = if self.paused {
            0
        } else {
            let skip = match self.mode {
                ControlMode::Keyboard => Some(PLAYER),
                ControlMode::Wander => None,
            };
            self.world.wander(elapsed_ms, skip)
        };

        draw_units(self.world.units(), &mut self.pixels);
        self.world.advance_frame();

        FrameReport {
            frame: self.world.frame(),
            wander_steps,
        }
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Fingerprint of what the next frame will show.
    pub fn fingerprint(&self) -> u64 {
        self.world.fingerprint() ^ (self.paused as u64) ^ ((self.mode as u64) << 1)
    }
}
