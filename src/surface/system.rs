//! High-level ocean surface owning topology, waves and the displacement strategy.

use super::mesh::SurfaceGrid;
use crate::error::Result;
use crate::params::{StrategyKind, SurfaceParams};
use crate::waves::{strategy, DisplacementStrategy, WaveComponent};

/// Summary of one update pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    /// Surface time the pass was evaluated at (seconds)
    pub time_s: f64,
    pub min_height: f32,
    pub max_height: f32,
}

/// Ocean surface with its wave set and configured strategy
pub struct OceanSurface {
    pub grid: SurfaceGrid,
    params: SurfaceParams,
    components: Vec<WaveComponent>,
    strategy: Box<dyn DisplacementStrategy>,
    elapsed_s: f64,
}

impl OceanSurface {
    /// Validate parameters, build topology and select the strategy
    pub fn new(params: SurfaceParams, components: Vec<WaveComponent>) -> Result<Self> {
        let strategy = strategy::from_params(&params)?;
        let grid = SurfaceGrid::build_topology(params.resolution, params.chunk_size)?;

        log::info!(
            "Ocean surface: {}x{} cells, {} chunks, {} wave components",
            params.resolution,
            params.resolution,
            grid.chunks().len(),
            components.len()
        );

        Ok(Self {
            grid,
            params,
            components,
            strategy,
            elapsed_s: 0.0,
        })
    }

    /// Advance the internal clock by `delta_time_s` and refresh the mesh
    pub fn update(&mut self, delta_time_s: f64) -> FrameStats {
        let time_s = self.elapsed_s + delta_time_s;
        self.update_at(time_s, delta_time_s)
    }

    /// Refresh the mesh for a host-supplied clock
    pub fn update_at(&mut self, time_s: f64, delta_time_s: f64) -> FrameStats {
        self.elapsed_s = time_s;
        self.grid.update_heights(
            time_s,
            delta_time_s,
            &self.components,
            self.strategy.as_mut(),
        );

        let (min_height, max_height) = self.grid.height_range();
        FrameStats {
            time_s,
            min_height,
            max_height,
        }
    }

    pub fn elapsed_s(&self) -> f64 {
        self.elapsed_s
    }

    pub fn params(&self) -> &SurfaceParams {
        &self.params
    }

    pub fn strategy_kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    pub fn components(&self) -> &[WaveComponent] {
        &self.components
    }

    /// Replace the wave set; topology is untouched
    pub fn set_components(&mut self, components: Vec<WaveComponent>) {
        log::debug!(
            "Replacing {} wave components with {}",
            self.components.len(),
            components.len()
        );
        self.components = components;
    }
}
