//! Swellsmith - headless ocean surface synthesizer
//!
//! Builds the chunked surface, runs a fixed-step frame loop and reports
//! height statistics, optionally saving the final height field.

use std::time::Instant;

use clap::Parser;

use swellsmith::cli::Args;
use swellsmith::export::heightmap_image;
use swellsmith::params::{waves, StrategyKind};
use swellsmith::surface::OceanSurface;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let params = args.surface_params();
    let components = match params.strategy {
        StrategyKind::Trochoidal => waves::trochoidal_swell(),
        StrategyKind::Gerstner | StrategyKind::Spectral => waves::open_ocean(),
    };

    println!("Swellsmith - procedural ocean surface");
    println!("  Strategy: {}", params.strategy.name());
    println!(
        "  Grid: {}x{} cells in {}x{} chunks",
        params.resolution,
        params.resolution,
        params.chunk_size,
        params.chunk_size
    );

    let bound: f64 = components.iter().map(|c| c.max_height()).sum();
    println!("  Waves: {} components, |height| <= {:.3}", components.len(), bound);

    let mut ocean = OceanSurface::new(params, components)?;
    println!(
        "  Buffers: {} vertices, {} indices",
        ocean.grid.vertex_count(),
        ocean.grid.index_count()
    );

    let start = Instant::now();
    let mut lowest = f32::INFINITY;
    let mut highest = f32::NEG_INFINITY;
    for _ in 0..args.frames {
        let stats = ocean.update(args.dt);
        lowest = lowest.min(stats.min_height);
        highest = highest.max(stats.max_height);
    }
    let elapsed = start.elapsed();

    println!("  Frames: {} (t = {:.2}s)", args.frames, ocean.elapsed_s());
    println!("  Height range: {:.3} .. {:.3}", lowest, highest);
    if args.frames > 0 {
        println!(
            "  Time: {:.2}ms/frame",
            elapsed.as_secs_f64() * 1000.0 / args.frames as f64
        );
    }

    if let Some(path) = &args.output {
        heightmap_image(&ocean.grid).save(path)?;
        println!("  Output: {}", path);
    }

    Ok(())
}
