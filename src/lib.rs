//! Swellsmith library - Chunked procedural ocean surface synthesis
//!
//! Builds a tiled surface mesh once, then re-displaces its vertices every frame
//! from superposed wave components (trochoidal, Gerstner or FFT-synthesized).

pub mod cli;
pub mod error;
pub mod export;
pub mod noise;
pub mod params;
pub mod spectral;
pub mod surface;
pub mod waves;

pub use error::{Result, SynthError};
