//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the sandbox.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (terrain generation, pixel rendering, terminal output).
//!
//! # Canvas Dimensions
//!
//! - **Width**: 640 logical pixels (indexed 0-639)
//! - **Height**: 480 logical pixels (indexed 0-479)
//! - **Player spawn**: canvas center (320, 240)
//!
//! One logical pixel is one grid cell. The pixel density multiplies both axes
//! when blitting into the RGBA buffer.
//!
//! # Cell Codes
//!
//! | Code | Cell | Color |
//! |------|------|-------|
//! | 0 | empty | black |
//! | 1 | iron | tan (220, 210, 180) |
//! | 2 | gold | gold (220, 180, 30) |
//! | 3 | water | blue (30, 50, 210) |
//! | 4 | rock | brown (98, 40, 30) |
//!
//! # Noise Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `NOISE_LEVEL` | 255 | Multiplier applied to the [0, 1] noise sample |
//! | `NOISE_OCTAVES` | 2 | Octaves summed per sample |
//! | `NOISE_FALLOFF` | 1.1 | Amplitude factor between octaves |
//!
//! # Examples
//!
//! ```
//! use tui_sandbox_types::{CellCode, Direction, GameAction, CANVAS_WIDTH};
//!
//! assert_eq!(CellCode::from_u8(3), Some(CellCode::Water));
//! assert_eq!(CellCode::from_u8(9), None);
//!
//! assert_eq!(Direction::Up.delta(), (0, -1));
//! assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::Move(Direction::Left)));
//!
//! assert_eq!(CANVAS_WIDTH, 640);
//! ```

/// Canvas width in logical pixels (640)
pub const CANVAS_WIDTH: u32 = 640;

/// Canvas height in logical pixels (480)
pub const CANVAS_HEIGHT: u32 = 480;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Multiplier applied to the normalized noise sample before comparing with rarity.
pub const NOISE_LEVEL: f64 = 255.0;

/// Octaves summed per noise sample.
pub const NOISE_OCTAVES: u32 = 2;

/// Amplitude factor applied between octaves.
pub const NOISE_FALLOFF: f64 = 1.1;

/// Default physical pixels per logical pixel.
pub const DEFAULT_PIXEL_DENSITY: u32 = 1;

/// Upper bound for the pixel density factor.
pub const MAX_PIXEL_DENSITY: u32 = 4;

/// Delay before a held movement key starts repeating.
pub const DEFAULT_REPEAT_DELAY_MS: u32 = 150;

/// Interval between repeats of a held movement key.
pub const DEFAULT_REPEAT_RATE_MS: u32 = 50;

/// Frame clear color.
pub const BACKGROUND: Rgba = Rgba::new(20, 16, 28, 255);

/// Center pixel of every unit marker.
pub const MARKER_CENTER: Rgba = Rgba::new(255, 255, 255, 255);

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Scale every channel, alpha included, by `light / 255`.
    ///
    /// ```
    /// use tui_sandbox_types::Rgba;
    ///
    /// let c = Rgba::rgb(200, 100, 50);
    /// assert_eq!(c.lit(255), c);
    /// assert_eq!(c.lit(0), Rgba::new(0, 0, 0, 0));
    /// ```
    pub fn lit(self, light: u8) -> Self {
        let scale = |v: u8| ((v as u16 * light as u16) / 255) as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: scale(self.a),
        }
    }
}

/// Terrain/resource tag stored in every grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CellCode {
    #[default]
    Empty = 0,
    Iron = 1,
    Gold = 2,
    Water = 3,
    Rock = 4,
}

impl CellCode {
    pub const ALL: [CellCode; 5] = [
        CellCode::Empty,
        CellCode::Iron,
        CellCode::Gold,
        CellCode::Water,
        CellCode::Rock,
    ];

    /// Convert a raw code, rejecting anything outside 0..=4.
    pub fn from_u8(code: u8) -> Option<Self> {
        match code {
            0 => Some(CellCode::Empty),
            1 => Some(CellCode::Iron),
            2 => Some(CellCode::Gold),
            3 => Some(CellCode::Water),
            4 => Some(CellCode::Rock),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn is_empty(self) -> bool {
        self == CellCode::Empty
    }

    /// Fixed render color for this code.
    pub fn color(self) -> Rgba {
        match self {
            CellCode::Empty => Rgba::rgb(0, 0, 0),
            CellCode::Iron => Rgba::rgb(220, 210, 180),
            CellCode::Gold => Rgba::rgb(220, 180, 30),
            CellCode::Water => Rgba::rgb(30, 50, 210),
            CellCode::Rock => Rgba::rgb(98, 40, 30),
        }
    }

    /// Single character used by the ASCII dump.
    pub fn ascii(self) -> char {
        match self {
            CellCode::Empty => '.',
            CellCode::Iron => 'I',
            CellCode::Gold => 'G',
            CellCode::Water => 'W',
            CellCode::Rock => 'R',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CellCode::Empty => "empty",
            CellCode::Iron => "iron",
            CellCode::Gold => "gold",
            CellCode::Water => "water",
            CellCode::Rock => "rock",
        }
    }
}

/// Four-directional movement. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Offset of the neighbouring cell in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Unit race. Drives marker color and wander speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Race {
    Human,
    Ant,
    Alien,
}

impl Race {
    pub fn as_str(self) -> &'static str {
        match self {
            Race::Human => "human",
            Race::Ant => "ant",
            Race::Alien => "alien",
        }
    }

    /// Color of the four marker arms.
    pub fn color(self) -> Rgba {
        match self {
            Race::Human => Rgba::rgb(35, 206, 235),
            Race::Ant => Rgba::rgb(255, 0, 0),
            Race::Alien => Rgba::rgb(0, 255, 0),
        }
    }

    /// Milliseconds between two wander steps. Lower moves faster.
    pub fn move_interval_ms(self) -> u32 {
        match self {
            Race::Human => 100,
            Race::Ant => 200,
            Race::Alien => 100,
        }
    }
}

/// Unit role label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Warrior,
    Worker,
    Explorer,
}

impl UnitKind {
    pub fn as_str(self) -> &'static str {
        match self {
            UnitKind::Warrior => "warrior",
            UnitKind::Worker => "worker",
            UnitKind::Explorer => "explorer",
        }
    }
}

/// Who drives the player unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControlMode {
    /// Arrow keys move the player; everyone else wanders.
    #[default]
    Keyboard,
    /// Every unit random-walks.
    Wander,
}

impl ControlMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "keyboard" | "keys" => Some(ControlMode::Keyboard),
            "wander" | "random" => Some(ControlMode::Wander),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ControlMode::Keyboard => "keyboard",
            ControlMode::Wander => "wander",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ControlMode::Keyboard => ControlMode::Wander,
            ControlMode::Wander => ControlMode::Keyboard,
        }
    }
}

/// Actions that can be applied to the running sandbox
///
/// Produced by keyboard input and consumed by the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the player one cell
    Move(Direction),
    /// Reseed and regenerate the terrain
    Regenerate,
    /// Switch between keyboard and wander control
    ToggleMode,
    /// Toggle pause state
    Pause,
}

impl GameAction {
    /// Parse action from its camelCase name
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_sandbox_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveUp"), Some(GameAction::Move(Direction::Up)));
    /// assert_eq!(GameAction::from_str("regenerate"), Some(GameAction::Regenerate));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(GameAction::Move(Direction::Up)),
            "movedown" => Some(GameAction::Move(Direction::Down)),
            "moveleft" => Some(GameAction::Move(Direction::Left)),
            "moveright" => Some(GameAction::Move(Direction::Right)),
            "regenerate" => Some(GameAction::Regenerate),
            "togglemode" => Some(GameAction::ToggleMode),
            "pause" => Some(GameAction::Pause),
            _ => None,
        }
    }

    /// Convert to camelCase string (used by the event log)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Regenerate => "regenerate",
            GameAction::ToggleMode => "toggleMode",
            GameAction::Pause => "pause",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_codes_round_trip_through_u8() {
        for code in CellCode::ALL {
            assert_eq!(CellCode::from_u8(code.as_u8()), Some(code));
        }
        assert_eq!(CellCode::from_u8(5), None);
        assert_eq!(CellCode::from_u8(255), None);
    }

    #[test]
    fn cell_colors_match_palette() {
        assert_eq!(CellCode::Empty.color(), Rgba::new(0, 0, 0, 255));
        assert_eq!(CellCode::Iron.color(), Rgba::rgb(220, 210, 180));
        assert_eq!(CellCode::Gold.color(), Rgba::rgb(220, 180, 30));
        assert_eq!(CellCode::Water.color(), Rgba::rgb(30, 50, 210));
        assert_eq!(CellCode::Rock.color(), Rgba::rgb(98, 40, 30));
    }

    #[test]
    fn directions_are_unit_steps() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1, "{:?}", dir);
            let (ox, oy) = dir.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn action_names_round_trip() {
        for action in [
            GameAction::Move(Direction::Up),
            GameAction::Move(Direction::Down),
            GameAction::Move(Direction::Left),
            GameAction::Move(Direction::Right),
            GameAction::Regenerate,
            GameAction::ToggleMode,
            GameAction::Pause,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn light_scales_alpha_too() {
        let c = Rgba::new(255, 255, 255, 255).lit(51);
        assert_eq!(c, Rgba::new(51, 51, 51, 51));
    }

    #[test]
    fn control_mode_toggles() {
        assert_eq!(ControlMode::Keyboard.toggled(), ControlMode::Wander);
        assert_eq!(ControlMode::Wander.toggled(), ControlMode::Keyboard);
        assert_eq!(ControlMode::from_str("RANDOM"), Some(ControlMode::Wander));
    }
}
