//! Grid module - the terrain cell store
//!
//! The grid maps every logical pixel (x, y) to exactly one [`CellCode`].
//! Uses a flat row-major array (`y * width + x`), so a cell can never hold
//! anything but a valid code and lookups are a single multiply-add.
//! Coordinates are signed so callers can probe neighbours past the edges;
//! anything outside the grid reads as `None`.

use tui_sandbox_types::CellCode;

/// FNV-1a 64-bit hash over a byte stream.
pub fn fnv1a64(bytes: impl IntoIterator<Item = u8>) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}

/// Fixed-size 2D store of cell codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridStore {
    width: u32,
    height: u32,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<CellCode>,
}

impl GridStore {
    /// Create an all-empty grid
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![CellCode::Empty; len],
        }
    }

    /// Build a grid from ASCII rows using the dump alphabet (`.IGWR`).
    ///
    /// Returns `None` for ragged rows or unknown characters.
    ///
    /// ```
    /// use tui_sandbox_core::GridStore;
    /// use tui_sandbox_types::CellCode;
    ///
    /// let grid = GridStore::from_ascii(&["..R", "W.G"]).unwrap();
    /// assert_eq!(grid.get(2, 0), Some(CellCode::Rock));
    /// assert_eq!(grid.get(0, 1), Some(CellCode::Water));
    /// ```
    pub fn from_ascii(rows: &[&str]) -> Option<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0) as u32;
        let mut grid = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() as u32 != width {
                return None;
            }
            for (x, ch) in row.chars().enumerate() {
                let code = CellCode::ALL.into_iter().find(|c| c.ascii() == ch)?;
                grid.set(x as i32, y as i32, code);
            }
        }
        Some(grid)
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<CellCode> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, code: CellCode) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = code;
                true
            }
            None => false,
        }
    }

    /// True when (x, y) is inside the grid and holds code 0
    pub fn is_open(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(CellCode::Empty))
    }

    pub fn fill(&mut self, code: CellCode) {
        self.cells.fill(code);
    }

    pub fn clear(&mut self) {
        self.fill(CellCode::Empty);
    }

    /// Row-major view of all cells
    pub fn cells(&self) -> &[CellCode] {
        &self.cells
    }

    /// Number of cells holding `code`
    pub fn count(&self, code: CellCode) -> usize {
        self.cells.iter().filter(|c| **c == code).count()
    }

    /// Per-code cell counts, indexed by code
    pub fn counts(&self) -> [usize; 5] {
        let mut counts = [0usize; 5];
        for cell in &self.cells {
            counts[cell.as_u8() as usize] += 1;
        }
        counts
    }

    /// Clear every in-bounds cell within euclidean `radius` of the center.
    /// Returns the number of cells that were not already empty.
    pub fn dig_radius(&mut self, cx: i32, cy: i32, radius: u32) -> usize {
        let r = radius as i32;
        let r2 = r * r;
        let mut dug = 0;
        for y in (cy - r)..=(cy + r) {
            for x in (cx - r)..=(cx + r) {
                let (dx, dy) = (x - cx, y - cy);
                if dx * dx + dy * dy > r2 {
                    continue;
                }
                if let Some(idx) = self.index(x, y) {
                    if !self.cells[idx].is_empty() {
                        self.cells[idx] = CellCode::Empty;
                        dug += 1;
                    }
                }
            }
        }
        dug
    }

    /// FNV-1a hash of the raw codes in row-major order
    pub fn hash(&self) -> u64 {
        fnv1a64(self.cells.iter().map(|c| c.as_u8()))
    }

    /// One line per row using the dump alphabet
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for row in self.cells.chunks(self.width.max(1) as usize) {
            out.extend(row.iter().map(|c| c.ascii()));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_empty() {
        let grid = GridStore::new(8, 4);
        assert_eq!(grid.cells().len(), 32);
        assert_eq!(grid.count(CellCode::Empty), 32);
    }

    #[test]
    fn out_of_bounds_reads_none_and_writes_fail() {
        let mut grid = GridStore::new(3, 3);
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert!(!grid.set(3, 0, CellCode::Gold));
        assert!(!grid.is_open(-1, -1));
    }

    #[test]
    fn index_is_row_major() {
        let mut grid = GridStore::new(4, 2);
        grid.set(1, 1, CellCode::Rock);
        assert_eq!(grid.cells()[5], CellCode::Rock);
    }

    #[test]
    fn dig_radius_clears_disc_only() {
        let mut grid = GridStore::new(7, 7);
        grid.fill(CellCode::Rock);
        let dug = grid.dig_radius(3, 3, 1);
        assert_eq!(dug, 5);
        assert!(grid.is_open(3, 3));
        assert!(grid.is_open(2, 3));
        assert!(!grid.is_open(2, 2), "corner lies outside radius 1");
    }

    #[test]
    fn dig_radius_at_corner_ignores_outside_cells() {
        let mut grid = GridStore::new(3, 3);
        grid.fill(CellCode::Iron);
        assert_eq!(grid.dig_radius(0, 0, 1), 3);
    }

    #[test]
    fn ascii_round_trip() {
        let rows = [".IG", "WR."];
        let grid = GridStore::from_ascii(&rows).unwrap();
        assert_eq!(grid.to_ascii(), ".IG\nWR.\n");
        assert!(GridStore::from_ascii(&["..", "..."]).is_none());
        assert!(GridStore::from_ascii(&["x"]).is_none());
    }

    #[test]
    fn hash_changes_with_content() {
        let mut grid = GridStore::new(4, 4);
        let before = grid.hash();
        grid.set(0, 0, CellCode::Water);
        assert_ne!(before, grid.hash());
    }
}
