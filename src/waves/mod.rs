//! Wave component model, displacement evaluation and strategies.

mod component;
mod evaluator;
mod jitter;
pub mod strategy;

pub use component::{WaveComponent, WaveDisplacement};
pub use evaluator::{Displacement, ResolvedWave, WaveEvaluator};
pub use jitter::{JitterDraw, JitterKey, JitterSource};
pub use strategy::{DisplacementStrategy, GerstnerStrategy, SpectralStrategy, TrochoidalStrategy};
