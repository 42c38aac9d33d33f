//! World state - the grid, the units and the RNG, passed around explicitly.

use tui_sandbox_types::{CellCode, Direction, Race, UnitKind};

use crate::grid::{fnv1a64, GridStore};
use crate::mineral::Ruleset;
use crate::rng::SimpleRng;
use crate::snapshot::{CellCounts, UnitSnapshot, WorldSnapshot};
use crate::terrain::{GenerationReport, TerrainGenerator};
use crate::unit::Unit;

/// Radius of the clearing dug around every spawned unit.
pub const SPAWN_CLEARING_RADIUS: u32 = 3;

#[derive(Debug, Clone)]
pub struct WorldState {
    seed: u32,
    rng: SimpleRng,
    grid: GridStore,
    generator: TerrainGenerator,
    report: GenerationReport,
    grid_hash: u64,
    units: Vec<Unit>,
    frame: u64,
}

impl WorldState {
    /// Generate a `width` x `height` world from `seed` using `ruleset`.
    ///
    /// The world starts without units; see [`spawn`](Self::spawn) and
    /// [`spawn_default_units`](Self::spawn_default_units).
    pub fn new(width: u32, height: u32, seed: u32, ruleset: Ruleset) -> Self {
        let mut world = Self {
            seed,
            rng: SimpleRng::new(seed),
            grid: GridStore::new(width, height),
            generator: TerrainGenerator::new(ruleset),
            report: GenerationReport::default(),
            grid_hash: 0,
            units: Vec::new(),
            frame: 0,
        };
        world.generate();
        world
    }

    /// Wrap an existing grid (no generation). Used by tests and tools.
    pub fn from_grid(grid: GridStore, seed: u32) -> Self {
        let grid_hash = grid.hash();
        Self {
            seed,
            rng: SimpleRng::new(seed),
            grid,
            generator: TerrainGenerator::default(),
            report: GenerationReport::default(),
            grid_hash,
            units: Vec::new(),
            frame: 0,
        }
    }

    fn generate(&mut self) {
        self.rng = SimpleRng::new(self.seed);
        self.report = self.generator.generate(&mut self.grid, &mut self.rng);
        for unit in &self.units {
            self.grid
                .dig_radius(unit.x(), unit.y(), SPAWN_CLEARING_RADIUS);
        }
        self.grid_hash = self.grid.hash();
    }

    /// Draw a fresh seed from the world RNG and rebuild the terrain.
    ///
    /// Units keep their positions; a clearing is dug around each of them.
    /// Returns the new seed.
    pub fn regenerate(&mut self) -> u32 {
        self.seed = self.rng.next_u32();
        self.generate();
        self.seed
    }

    /// Add a unit, digging a clearing so it starts on an empty cell.
    /// Returns the unit index.
    pub fn spawn(&mut self, unit: Unit) -> usize {
        self.grid
            .dig_radius(unit.x(), unit.y(), SPAWN_CLEARING_RADIUS);
        self.grid_hash = self.grid.hash();
        self.units.push(unit);
        self.units.len() - 1
    }

    /// The player (human warrior at the center) plus an ant worker and an
    /// alien explorer placed an eighth of the canvas away.
    pub fn spawn_default_units(&mut self) {
        let (w, h) = (self.grid.width() as i32, self.grid.height() as i32);
        let (cx, cy) = (w / 2, h / 2);
        self.spawn(Unit::new(cx, cy, Race::Human, UnitKind::Warrior));
        self.spawn(Unit::new(cx - w / 8, cy + h / 8, Race::Ant, UnitKind::Worker));
        self.spawn(Unit::new(cx + w / 8, cy - h / 8, Race::Alien, UnitKind::Explorer));
    }

    /// Overwrite one cell. Returns false if (x, y) is outside the grid.
    pub fn set_cell(&mut self, x: i32, y: i32, code: CellCode) -> bool {
        let ok = self.grid.set(x, y, code);
        if ok {
            self.grid_hash = self.grid.hash();
        }
        ok
    }

    /// Move unit `index` one cell. `None` if there is no such unit.
    pub fn move_unit(&mut self, index: usize, dir: Direction) -> Option<bool> {
        let grid = &self.grid;
        self.units.get_mut(index).map(|unit| unit.try_move(dir, grid))
    }

    /// Advance every unit's random walk except `skip`.
    /// Returns the number of successful steps.
    pub fn wander(&mut self, elapsed_ms: u32, skip: Option<usize>) -> u32 {
        let mut moved = 0;
        for (i, unit) in self.units.iter_mut().enumerate() {
            if Some(i) == skip {
                continue;
            }
            moved += unit.wander(&self.grid, &mut self.rng, elapsed_ms);
        }
        moved
    }

    pub fn advance_frame(&mut self) {
        self.frame += 1;
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn grid(&self) -> &GridStore {
        &self.grid
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn unit(&self, index: usize) -> Option<&Unit> {
        self.units.get(index)
    }

    pub fn ruleset(&self) -> &Ruleset {
        self.generator.ruleset()
    }

    pub fn last_generation(&self) -> &GenerationReport {
        &self.report
    }

    /// Cell code under unit `index`.
    pub fn cell_under(&self, index: usize) -> Option<CellCode> {
        let unit = self.units.get(index)?;
        self.grid.get(unit.x(), unit.y())
    }

    /// Cheap hash of everything visible: grid content and unit positions.
    pub fn fingerprint(&self) -> u64 {
        let grid = self.grid_hash.to_le_bytes();
        let units = self
            .units
            .iter()
            .flat_map(|u| u.x().to_le_bytes().into_iter().chain(u.y().to_le_bytes()));
        fnv1a64(grid.into_iter().chain(units))
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            seed: self.seed,
            width: self.grid.width(),
            height: self.grid.height(),
            ruleset: self.ruleset().name.to_string(),
            frame: self.frame,
            counts: CellCounts::from(self.grid.counts()),
            grid_hash: self.grid_hash,
            units: self.units.iter().map(UnitSnapshot::from).collect(),
        }
    }
}
