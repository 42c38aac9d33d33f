//! Units - positioned actors that walk on empty cells
//!
//! A move checks exactly one neighbouring cell. If it is inside the grid and
//! empty the unit steps onto it, otherwise nothing happens. Collisions are
//! not errors.

use tui_sandbox_types::{Direction, Race, Rgba, UnitKind, MARKER_CENTER};

use crate::grid::GridStore;
use crate::rng::SimpleRng;

/// Integer grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbouring position one step in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub position: Position,
    pub race: Race,
    pub kind: UnitKind,
    /// Time accumulated towards the next wander step.
    wander_ms: u32,
}

impl Unit {
    pub fn new(x: i32, y: i32, race: Race, kind: UnitKind) -> Self {
        Self {
            position: Position::new(x, y),
            race,
            kind,
            wander_ms: 0,
        }
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    /// Step one cell in `dir` if that cell is in bounds and empty.
    /// Returns whether the unit moved.
    pub fn try_move(&mut self, dir: Direction, grid: &GridStore) -> bool {
        let next = self.position.step(dir);
        if grid.is_open(next.x, next.y) {
            self.position = next;
            true
        } else {
            false
        }
    }

    /// Advance the random walk by `elapsed_ms`.
    ///
    /// Every [`Race::move_interval_ms`] the unit picks a uniformly random
    /// direction and tries to move. Returns the number of successful steps.
    pub fn wander(&mut self, grid: &GridStore, rng: &mut SimpleRng, elapsed_ms: u32) -> u32 {
        let interval = self.race.move_interval_ms().max(1);
        self.wander_ms = self.wander_ms.saturating_add(elapsed_ms);
        let mut moved = 0;
        while self.wander_ms >= interval {
            self.wander_ms -= interval;
            if self.try_move(rng.next_direction(), grid) {
                moved += 1;
            }
        }
        moved
    }

    /// The five marker pixels: center first, then up, right, down, left.
    ///
    /// Positions are not clipped; the pixel buffer drops what falls outside.
    pub fn marker(&self) -> [(i32, i32, Rgba); 5] {
        let (x, y) = (self.position.x, self.position.y);
        let arm = self.race.color();
        [
            (x, y, MARKER_CENTER),
            (x, y - 1, arm),
            (x + 1, y, arm),
            (x, y + 1, arm),
            (x - 1, y, arm),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_sandbox_types::CellCode;

    fn open_grid() -> GridStore {
        GridStore::new(5, 5)
    }

    #[test]
    fn moves_into_empty_cell() {
        let grid = open_grid();
        let mut unit = Unit::new(2, 2, Race::Human, UnitKind::Warrior);
        assert!(unit.try_move(Direction::Up, &grid));
        assert_eq!(unit.position, Position::new(2, 1));
        assert!(unit.try_move(Direction::Right, &grid));
        assert_eq!(unit.position, Position::new(3, 1));
    }

    #[test]
    fn blocked_by_mineral() {
        let mut grid = open_grid();
        grid.set(2, 3, CellCode::Rock);
        let mut unit = Unit::new(2, 2, Race::Ant, UnitKind::Worker);
        assert!(!unit.try_move(Direction::Down, &grid));
        assert_eq!(unit.position, Position::new(2, 2));
    }

    #[test]
    fn blocked_by_edge() {
        let grid = open_grid();
        let mut unit = Unit::new(0, 0, Race::Alien, UnitKind::Explorer);
        assert!(!unit.try_move(Direction::Left, &grid));
        assert!(!unit.try_move(Direction::Up, &grid));
        assert_eq!(unit.position, Position::new(0, 0));
    }

    #[test]
    fn wander_waits_for_interval() {
        let grid = open_grid();
        let mut rng = SimpleRng::new(3);
        let mut unit = Unit::new(2, 2, Race::Ant, UnitKind::Worker);
        assert_eq!(unit.wander(&grid, &mut rng, 199), 0);
        assert_eq!(unit.position, Position::new(2, 2));
        assert_eq!(rng, SimpleRng::new(3), "no step should draw from the rng");
    }

    #[test]
    fn wander_stays_on_empty_cells() {
        let grid = GridStore::from_ascii(&[
            "RRRRR", //
            "R...R", //
            "R.R.R", //
            "R...R", //
            "RRRRR",
        ])
        .unwrap();
        let mut rng = SimpleRng::new(17);
        let mut unit = Unit::new(1, 1, Race::Human, UnitKind::Warrior);
        for _ in 0..200 {
            let before = unit.position;
            unit.wander(&grid, &mut rng, 100);
            let (dx, dy) = (unit.x() - before.x, unit.y() - before.y);
            assert!(dx.abs() + dy.abs() <= 1);
            assert!(grid.is_open(unit.x(), unit.y()));
        }
    }

    #[test]
    fn marker_is_a_plus() {
        let unit = Unit::new(10, 10, Race::Human, UnitKind::Warrior);
        let marker = unit.marker();
        assert_eq!(marker[0], (10, 10, MARKER_CENTER));
        let arms: Vec<(i32, i32)> = marker[1..].iter().map(|(x, y, _)| (*x, *y)).collect();
        assert_eq!(arms, vec![(10, 9), (11, 10), (10, 11), (9, 10)]);
        assert!(marker[1..].iter().all(|(_, _, c)| *c == Race::Human.color()));
    }
}
