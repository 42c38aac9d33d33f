use serde::{Deserialize, Serialize};

use crate::unit::Unit;

/// Number of cells per code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct CellCounts {
    pub empty: usize,
    pub iron: usize,
    pub gold: usize,
    pub water: usize,
    pub rock: usize,
}

impl CellCounts {
    pub fn total(&self) -> usize {
        self.empty + self.iron + self.gold + self.water + self.rock
    }
}

impl From<[usize; 5]> for CellCounts {
    fn from(value: [usize; 5]) -> Self {
        Self {
            empty: value[0],
            iron: value[1],
            gold: value[2],
            water: value[3],
            rock: value[4],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitSnapshot {
    pub race: String,
    pub kind: String,
    pub x: i32,
    pub y: i32,
}

impl From<&Unit> for UnitSnapshot {
    fn from(value: &Unit) -> Self {
        Self {
            race: value.race.as_str().to_string(),
            kind: value.kind.as_str().to_string(),
            x: value.x(),
            y: value.y(),
        }
    }
}

/// Serializable summary of a world at one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldSnapshot {
    pub seed: u32,
    pub width: u32,
    pub height: u32,
    pub ruleset: String,
    pub frame: u64,
    pub counts: CellCounts,
    /// FNV-1a over the row-major cell codes.
    pub grid_hash: u64,
    pub units: Vec<UnitSnapshot>,
}
