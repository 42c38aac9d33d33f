//! Held-key repeat for player movement.
//!
//! The first press moves once. While the key stays held the move repeats
//! after `repeat_delay` ms, then every `repeat_rate` ms. Terminals that do
//! not emit key release events are handled with a timeout.

use std::time::Instant;

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::map::direction_for_key;
use crate::types::{Direction, GameAction, DEFAULT_REPEAT_DELAY_MS, DEFAULT_REPEAT_RATE_MS};

/// Upper bound on repeats emitted by one `update`.
pub const MAX_REPEATS_PER_UPDATE: usize = 32;

// A short timeout keeps a single tap from becoming a sustained hold.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

#[derive(Debug, Clone)]
pub struct InputHandler {
    held: Option<Direction>,
    last_key_time: Instant,
    delay_timer: u32,
    repeat_accumulator: u32,
    repeat_delay: u32,
    repeat_rate: u32,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_REPEAT_DELAY_MS, DEFAULT_REPEAT_RATE_MS)
    }

    /// A zero `repeat_rate` is treated as 1 ms.
    pub fn with_config(repeat_delay: u32, repeat_rate: u32) -> Self {
        Self {
            held: None,
            last_key_time: Instant::now(),
            delay_timer: 0,
            repeat_accumulator: 0,
            repeat_delay,
            repeat_rate: repeat_rate.max(1),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn held(&self) -> Option<Direction> {
        self.held
    }

    /// Returns the immediate move for a newly pressed direction key.
    ///
    /// Auto-repeat presses from the terminal for the held key only refresh
    /// the release timeout; the handler generates its own repeats.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        let dir = direction_for_key(code)?;
        self.last_key_time = Instant::now();
        if self.held == Some(dir) {
            return None;
        }
        self.held = Some(dir);
        self.delay_timer = 0;
        self.repeat_accumulator = 0;
        Some(GameAction::Move(dir))
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if direction_for_key(code).is_some_and(|dir| self.held == Some(dir)) {
            self.release();
        }
    }

    /// Advance timers by `elapsed_ms` and return the repeats that fell due.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, MAX_REPEATS_PER_UPDATE> {
        let mut actions = ArrayVec::new();

        let since_last_key = self.last_key_time.elapsed().as_millis() as u32;
        if since_last_key > self.key_release_timeout_ms {
            self.release();
        }

        let Some(dir) = self.held else {
            return actions;
        };

        let prev = self.delay_timer;
        self.delay_timer = self.delay_timer.saturating_add(elapsed_ms);
        if self.delay_timer >= self.repeat_delay {
            let excess = if prev < self.repeat_delay {
                self.delay_timer - self.repeat_delay
            } else {
                elapsed_ms
            };
            self.repeat_accumulator += excess;
            while self.repeat_accumulator >= self.repeat_rate {
                if actions.try_push(GameAction::Move(dir)).is_err() {
                    self.repeat_accumulator = 0;
                    break;
                }
                self.repeat_accumulator -= self.repeat_rate;
            }
        }

        actions
    }

    pub fn reset(&mut self) {
        self.release();
        self.last_key_time = Instant::now();
    }

    fn release(&mut self) {
        self.held = None;
        self.delay_timer = 0;
        self.repeat_accumulator = 0;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
