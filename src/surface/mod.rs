//! Chunked ocean surface mesh and the system that drives it.

mod mesh;
mod system;

// Re-export public types
pub use mesh::{generate_grid_indices, SurfaceChunk, SurfaceGrid, Vertex};
pub use system::{FrameStats, OceanSurface};
