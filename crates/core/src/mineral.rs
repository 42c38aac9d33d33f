//! Mineral definitions and generation rulesets
//!
//! A [`Ruleset`] is an ordered list of mineral layers plus the noise scale and
//! the comparator used to decide whether a sample marks a cell. Layers are
//! applied in order and later layers overwrite earlier ones.

use arrayvec::ArrayVec;

use tui_sandbox_types::CellCode;

/// Maximum number of layers in one ruleset.
pub const MAX_LAYERS: usize = 8;

/// Resource kinds that terrain generation can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mineral {
    Iron,
    Gold,
    Water,
    Rock,
}

impl Mineral {
    /// Cell code stamped by this mineral.
    pub fn code(self) -> CellCode {
        match self {
            Mineral::Iron => CellCode::Iron,
            Mineral::Gold => CellCode::Gold,
            Mineral::Water => CellCode::Water,
            Mineral::Rock => CellCode::Rock,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.code().as_str()
    }
}

/// One generation pass: a mineral and its rarity threshold (0..=255 scale).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MineralLayer {
    pub mineral: Mineral,
    pub rarity: f64,
}

impl MineralLayer {
    pub const fn new(mineral: Mineral, rarity: f64) -> Self {
        Self { mineral, rarity }
    }

    /// Noise-space offset that decorrelates this layer from the others.
    ///
    /// Derived from the rarity alone, so two layers with the same rarity share
    /// a pattern.
    pub fn noise_offset(&self) -> (f64, f64) {
        let ox = 10_000.000_001 * (self.rarity - 10_000.0);
        let oy = 1_000.000_001 * (100.0 * self.rarity - 100.0);
        (ox, oy)
    }
}

/// Comparator between a noise sample and a layer's rarity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    /// Mark when `sample <= rarity`.
    AtMost,
    /// Mark when `sample >= rarity`.
    AtLeast,
    /// Clear cells within `margin` of the rarity, mark cells above it.
    Contour { margin: f64 },
}

impl Threshold {
    /// Code to write for `sample`, or `None` to leave the cell untouched.
    ///
    /// ```
    /// use tui_sandbox_core::Threshold;
    /// use tui_sandbox_types::CellCode;
    ///
    /// let t = Threshold::Contour { margin: 3.0 };
    /// assert_eq!(t.classify(150.0, 151.0, CellCode::Gold), Some(CellCode::Empty));
    /// assert_eq!(t.classify(200.0, 151.0, CellCode::Gold), Some(CellCode::Gold));
    /// assert_eq!(t.classify(100.0, 151.0, CellCode::Gold), None);
    /// ```
    pub fn classify(self, sample: f64, rarity: f64, code: CellCode) -> Option<CellCode> {
        match self {
            Threshold::AtMost => (sample <= rarity).then_some(code),
            Threshold::AtLeast => (sample >= rarity).then_some(code),
            Threshold::Contour { margin } => {
                if sample + margin > rarity && sample - margin < rarity {
                    Some(CellCode::Empty)
                } else if sample >= rarity {
                    Some(code)
                } else {
                    None
                }
            }
        }
    }
}

/// Noise scale, comparator and ordered layers for one terrain style.
#[derive(Debug, Clone, PartialEq)]
pub struct Ruleset {
    pub name: &'static str,
    pub scale: f64,
    pub threshold: Threshold,
    pub layers: ArrayVec<MineralLayer, MAX_LAYERS>,
}

impl Ruleset {
    pub const NAMES: [&'static str; 3] = ["classic", "contour", "veins"];

    pub fn new(name: &'static str, scale: f64, threshold: Threshold) -> Self {
        Self {
            name,
            scale,
            threshold,
            layers: ArrayVec::new(),
        }
    }

    /// Append a layer. Layers past [`MAX_LAYERS`] are dropped.
    pub fn with_layer(mut self, mineral: Mineral, rarity: f64) -> Self {
        let _ = self.layers.try_push(MineralLayer::new(mineral, rarity));
        self
    }

    /// Sparse deposits: water, rock, iron, gold marked where noise is low.
    pub fn classic() -> Self {
        Self::new("classic", 0.035, Threshold::AtMost)
            .with_layer(Mineral::Water, 140.0)
            .with_layer(Mineral::Rock, 186.0)
            .with_layer(Mineral::Iron, 50.0)
            .with_layer(Mineral::Gold, 25.0)
    }

    /// Outlined deposits on a coarser field.
    pub fn contour() -> Self {
        Self::new("contour", 0.02, Threshold::Contour { margin: 3.0 })
            .with_layer(Mineral::Iron, 166.0)
            .with_layer(Mineral::Gold, 151.0)
            .with_layer(Mineral::Water, 171.0)
            .with_layer(Mineral::Rock, 186.0)
    }

    /// Peaks of the field become deposits.
    pub fn veins() -> Self {
        Self::new("veins", 0.035, Threshold::AtLeast)
            .with_layer(Mineral::Iron, 166.0)
            .with_layer(Mineral::Gold, 151.0)
            .with_layer(Mineral::Water, 171.0)
            .with_layer(Mineral::Rock, 186.0)
    }

    /// Look up a built-in ruleset (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "classic" => Some(Self::classic()),
            "contour" => Some(Self::contour()),
            "veins" => Some(Self::veins()),
            _ => None,
        }
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::classic()
    }
}
