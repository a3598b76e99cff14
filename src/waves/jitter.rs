//! Position-keyed random jitter for wave parameters.
//!
//! Draws are a pure function of `(seed, x, y, time, component, displacement)`,
//! so any two evaluations with the same inputs agree regardless of call order
//! or thread. Shared chunk edges therefore receive identical jitter.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Which sample a jitter draw belongs to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitterKey {
    pub x: f64,
    pub y: f64,
    pub time: f64,
    pub component: usize,
    pub displacement: usize,
}

/// Three symmetric unit draws in [-1, 1): amplitude, frequency, phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitterDraw {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
}

/// Stateless jitter source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JitterSource {
    seed: u64,
}

impl JitterSource {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn draw(&self, key: JitterKey) -> JitterDraw {
        let mut rng = ChaCha8Rng::seed_from_u64(self.hash(key));
        JitterDraw {
            amplitude: rng.gen_range(-1.0..1.0),
            frequency: rng.gen_range(-1.0..1.0),
            phase: rng.gen_range(-1.0..1.0),
        }
    }

    fn hash(&self, key: JitterKey) -> u64 {
        // `+ 0.0` folds -0.0 into 0.0 so both signs hash alike
        let mut h = splitmix64(self.seed);
        for word in [
            (key.x + 0.0).to_bits(),
            (key.y + 0.0).to_bits(),
            (key.time + 0.0).to_bits(),
            key.component as u64,
            key.displacement as u64,
        ] {
            h = splitmix64(h ^ word);
        }
        h
    }
}

fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
