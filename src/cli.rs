//! Command-line argument parsing.

use clap::Parser;

use crate::params::{StrategyKind, SurfaceParams};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Swellsmith")]
#[command(about = "Headless chunked ocean surface synthesizer", long_about = None)]
pub struct Args {
    /// Surface size per side in cells
    #[arg(long, value_name = "CELLS", default_value_t = 64)]
    pub resolution: u32,

    /// Chunk size per side in cells (must divide resolution)
    #[arg(long, value_name = "CELLS", default_value_t = 16)]
    pub chunk_size: u32,

    /// Displacement strategy: gerstner (default), trochoidal, spectral
    #[arg(long, value_name = "STRATEGY", default_value = "gerstner")]
    pub strategy: String,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 120)]
    pub frames: u32,

    /// Frame time step (seconds)
    #[arg(long, value_name = "SECONDS", default_value_t = 1.0 / 60.0)]
    pub dt: f64,

    /// Enable horizontal displacement (always on for trochoidal)
    #[arg(long)]
    pub horizontal: bool,

    /// Horizontal offset per unit of height
    #[arg(long, default_value_t = 1.0)]
    pub squish: f64,

    /// Seed for noise and jitter
    #[arg(long, default_value_t = 42)]
    pub seed: u32,

    /// Spectral tile size (power of two)
    #[arg(long, value_name = "SAMPLES", default_value_t = 64)]
    pub spectral_size: usize,

    /// Write the final height field as a grayscale PNG
    #[arg(long, value_name = "PATH")]
    pub output: Option<String>,
}

impl Args {
    /// Parse strategy from command-line arguments
    pub fn parse_strategy(&self) -> StrategyKind {
        match self.strategy.to_lowercase().as_str() {
            "gerstner" => StrategyKind::Gerstner,
            "trochoidal" => StrategyKind::Trochoidal,
            "spectral" | "fft" => StrategyKind::Spectral,
            other => {
                log::warn!("Unknown strategy '{}', using gerstner", other);
                StrategyKind::Gerstner
            }
        }
    }

    /// Build surface parameters (not yet validated)
    pub fn surface_params(&self) -> SurfaceParams {
        let strategy = self.parse_strategy();
        let base = match strategy {
            StrategyKind::Trochoidal => SurfaceParams::trochoidal(),
            StrategyKind::Gerstner => SurfaceParams::default(),
            StrategyKind::Spectral => SurfaceParams::spectral(),
        };

        SurfaceParams {
            resolution: self.resolution,
            chunk_size: self.chunk_size,
            horizontal_displacement: base.horizontal_displacement || self.horizontal,
            horizontal_squish_factor: self.squish,
            noise_seed: self.seed,
            jitter_seed: self.seed as u64,
            spectral_size: self.spectral_size,
            ..base
        }
    }
}
