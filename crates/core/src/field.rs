//! Coherent noise field used by terrain generation.
//!
//! Wraps a seeded Perlin source and sums octaves. The first octave has
//! amplitude 0.5; each further one multiplies the amplitude by the falloff and
//! doubles the frequency. Every octave is remapped from [-1, 1] to [0, 1]
//! before summing.

use noise::{NoiseFn, Perlin};

use tui_sandbox_types::{NOISE_FALLOFF, NOISE_OCTAVES};

#[derive(Clone)]
pub struct NoiseField {
    perlin: Perlin,
    seed: u32,
    octaves: u32,
    falloff: f64,
}

impl NoiseField {
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
            seed,
            octaves: NOISE_OCTAVES,
            falloff: NOISE_FALLOFF,
        }
    }

    pub fn with_detail(mut self, octaves: u32, falloff: f64) -> Self {
        self.octaves = octaves.max(1);
        self.falloff = falloff;
        self
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Upper bound of [`sample`](Self::sample) for the configured detail.
    pub fn max_value(&self) -> f64 {
        let mut amp = 0.5;
        let mut total = 0.0;
        for _ in 0..self.octaves {
            total += amp;
            amp *= self.falloff;
        }
        total
    }

    /// Sample the field at (x, y). Result lies in `[0, max_value()]`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let mut amp = 0.5;
        let mut freq = 1.0;
        let mut total = 0.0;
        for _ in 0..self.octaves {
            let v = self.perlin.get([x * freq, y * freq]);
            let unit = (v * 0.5 + 0.5).clamp(0.0, 1.0);
            total += amp * unit;
            amp *= self.falloff;
            freq *= 2.0;
        }
        total
    }
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField")
            .field("seed", &self.seed)
            .field("octaves", &self.octaves)
            .field("falloff", &self.falloff)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_samples() {
        let a = NoiseField::new(42);
        let b = NoiseField::new(42);
        for i in 0..50 {
            let (x, y) = (i as f64 * 0.37, i as f64 * 0.11);
            assert_eq!(a.sample(x, y), b.sample(x, y));
        }
    }

    #[test]
    fn samples_stay_in_range() {
        let field = NoiseField::new(3);
        let max = field.max_value();
        assert!((max - 1.05).abs() < 1e-9);
        for i in 0..500 {
            let v = field.sample(i as f64 * 0.035, (i * 7) as f64 * 0.035);
            assert!((0.0..=max).contains(&v), "sample {} out of range", v);
        }
    }

    #[test]
    fn single_octave_caps_at_half() {
        let field = NoiseField::new(9).with_detail(1, 1.1);
        assert_eq!(field.max_value(), 0.5);
        for i in 0..100 {
            assert!(field.sample(i as f64 * 0.13, 0.5) <= 0.5);
        }
    }
}
