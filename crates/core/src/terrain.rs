//! Terrain generation - noise sampling mapped to discrete cell codes
//!
//! Each layer of a [`Ruleset`] samples its own seeded [`NoiseField`] over the
//! whole grid and stamps its mineral wherever the comparator accepts the
//! sample. Layers run in ruleset order and overwrite whatever was there, so
//! the last layer wins where deposits overlap.

use arrayvec::ArrayVec;

use tui_sandbox_types::NOISE_LEVEL;

use crate::field::NoiseField;
use crate::grid::GridStore;
use crate::mineral::{Mineral, MineralLayer, Ruleset, MAX_LAYERS};
use crate::rng::SimpleRng;

/// Outcome of one layer pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerReport {
    pub mineral: Mineral,
    pub noise_seed: u32,
    /// Cells the pass wrote to (mineral or contour clear).
    pub written: usize,
}

/// Outcome of a full generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub layers: ArrayVec<LayerReport, MAX_LAYERS>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TerrainGenerator {
    ruleset: Ruleset,
}

impl TerrainGenerator {
    pub fn new(ruleset: Ruleset) -> Self {
        Self { ruleset }
    }

    pub fn ruleset(&self) -> &Ruleset {
        &self.ruleset
    }

    /// Noise sample for `layer` at cell (x, y), on the 0..=255 rarity scale.
    pub fn sample(&self, field: &NoiseField, layer: &MineralLayer, x: u32, y: u32) -> f64 {
        let (ox, oy) = layer.noise_offset();
        let nx = self.ruleset.scale * x as f64;
        let ny = self.ruleset.scale * y as f64;
        NOISE_LEVEL * field.sample(nx + ox, ny + oy)
    }

    /// Run a single layer over the grid without clearing it first.
    /// Returns the number of cells written.
    pub fn apply_layer(&self, grid: &mut GridStore, layer: &MineralLayer, field: &NoiseField) -> usize {
        let code = layer.mineral.code();
        let threshold = self.ruleset.threshold;
        let mut written = 0;
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let c = self.sample(field, layer, x, y);
                if let Some(out) = threshold.classify(c, layer.rarity, code) {
                    grid.set(x as i32, y as i32, out);
                    written += 1;
                }
            }
        }
        written
    }

    /// Clear the grid and apply every layer in order.
    ///
    /// Each pass draws its noise seed from `rng`, so the result depends only
    /// on the generator state going in.
    pub fn generate(&self, grid: &mut GridStore, rng: &mut SimpleRng) -> GenerationReport {
        grid.clear();
        let mut report = GenerationReport::default();
        for layer in &self.ruleset.layers {
            let field = NoiseField::new(rng.next_u32());
            let written = self.apply_layer(grid, layer, &field);
            report.layers.push(LayerReport {
                mineral: layer.mineral,
                noise_seed: field.seed(),
                written,
            });
        }
        report
    }
}

impl Default for TerrainGenerator {
    fn default() -> Self {
        Self::new(Ruleset::default())
    }
}
