//! Surface tessellation and displacement strategy parameters.

use crate::error::{Result, SynthError};

/// Which displacement model drives the mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    /// Per-component running phase, horizontal squish on by default
    Trochoidal,
    /// Time-based phase with noise-modulated parameters
    #[default]
    Gerstner,
    /// Periodic FFT-synthesized height field
    Spectral,
}

impl StrategyKind {
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Trochoidal => "trochoidal",
            StrategyKind::Gerstner => "gerstner",
            StrategyKind::Spectral => "spectral",
        }
    }
}

/// Ocean surface parameters
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceParams {
    /// Logical grid size per side in world units (vertices per side = resolution + 1)
    pub resolution: u32,

    /// Chunk size in cells; must divide `resolution`
    pub chunk_size: u32,

    /// Displacement model, fixed at construction
    pub strategy: StrategyKind,

    /// Shift vertices along x by `height * horizontal_squish_factor`
    pub horizontal_displacement: bool,

    /// Horizontal offset per unit of height (dimensionless)
    pub horizontal_squish_factor: f64,

    /// Seed for the smooth modulation noise
    pub noise_seed: u32,

    /// Seed for per-sample parameter jitter
    pub jitter_seed: u64,

    /// Spectral tile size per side (power of two; spectral strategy only)
    pub spectral_size: usize,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            resolution: 64,
            chunk_size: 16,
            strategy: StrategyKind::Gerstner,
            horizontal_displacement: false,
            horizontal_squish_factor: 1.0,
            noise_seed: 42,
            jitter_seed: 12345,
            spectral_size: 64,
        }
    }
}

impl SurfaceParams {
    /// Running-phase waves with horizontal squish enabled
    pub fn trochoidal() -> Self {
        Self {
            strategy: StrategyKind::Trochoidal,
            horizontal_displacement: true,
            ..Self::default()
        }
    }

    /// FFT height field tiled over the surface
    pub fn spectral() -> Self {
        Self {
            strategy: StrategyKind::Spectral,
            ..Self::default()
        }
    }

    /// Horizontal squish factor if horizontal displacement is enabled
    pub fn horizontal_squish(&self) -> Option<f64> {
        self.horizontal_displacement
            .then_some(self.horizontal_squish_factor)
    }

    /// Chunks along one side of the surface (valid after `validate`)
    pub fn chunks_per_side(&self) -> u32 {
        if self.chunk_size == 0 {
            0
        } else {
            self.resolution / self.chunk_size
        }
    }

    /// Validate tiling and strategy settings
    pub fn validate(&self) -> Result<()> {
        validate_tiling(self.resolution, self.chunk_size)?;
        if self.strategy == StrategyKind::Spectral
            && (self.spectral_size < 2 || !self.spectral_size.is_power_of_two())
        {
            return Err(SynthError::NonPowerOfTwo {
                len: self.spectral_size,
            });
        }
        Ok(())
    }
}

/// Reject grids that do not tile into whole chunks with `u32` indices
pub fn validate_tiling(resolution: u32, chunk_size: u32) -> Result<()> {
    if chunk_size == 0 {
        return Err(SynthError::ZeroChunkSize);
    }
    if resolution == 0 {
        return Err(SynthError::ZeroResolution);
    }
    if resolution % chunk_size != 0 {
        return Err(SynthError::ResolutionNotDivisible {
            resolution,
            chunk_size,
        });
    }
    // Vertex indices and the per-chunk index buffer length must both fit u32
    let cells = chunk_size as u64 * chunk_size as u64;
    let stride = chunk_size as u64 + 1;
    if stride * stride > u32::MAX as u64 || cells * 6 > u32::MAX as u64 {
        return Err(SynthError::ChunkTooLarge { chunk_size });
    }
    Ok(())
}
