//! Smooth noise used to modulate wave parameters over time.
//!
//! Using Perlin noise sampled along a single axis so neighbouring time values
//! give neighbouring offsets (no frame-to-frame popping).

use noise::{NoiseFn, Perlin};

/// Second coordinate of every sample. Perlin is zero on integer lattice lines,
/// so stay off them.
const SAMPLE_ROW: f64 = 0.5;

/// Time-varying scalar noise source
#[derive(Clone)]
pub struct ModulationNoise {
    perlin: Perlin,
}

impl ModulationNoise {
    /// Create new noise source with seed
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }

    /// Sample smooth noise at `t`
    ///
    /// Returns value in range [0, 1]
    pub fn sample(&self, t: f64) -> f64 {
        let raw = self.perlin.get([t, SAMPLE_ROW]);
        ((raw + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

impl std::fmt::Debug for ModulationNoise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModulationNoise").finish_non_exhaustive()
    }
}
