//! Chunked surface mesh: static topology, per-frame vertex displacement.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use rayon::prelude::*;

use crate::error::Result;
use crate::params::validate_tiling;
use crate::waves::{DisplacementStrategy, WaveComponent};

/// Vertex data for chunk meshes (position + normal)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// One square tile of the surface with its own vertex and index buffers
#[derive(Debug, Clone)]
pub struct SurfaceChunk {
    origin_x: u32,
    origin_y: u32,
    size: u32,
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    /// Displaced positions of the chunk plus a one-vertex ring around it,
    /// row-major with side `size + 3`. Reused across updates.
    apron: Vec<Vec3>,
}

impl SurfaceChunk {
    fn new(origin_x: u32, origin_y: u32, size: u32) -> Self {
        let stride = size as usize + 1;
        let mut vertices = Vec::with_capacity(stride * stride);

        // Flat XZ plane; world y of the grid maps to mesh z
        for y in 0..=size {
            for x in 0..=size {
                vertices.push(Vertex {
                    position: [(origin_x + x) as f32, 0.0, (origin_y + y) as f32],
                    normal: [0.0, 1.0, 0.0],
                });
            }
        }

        let apron_side = stride + 2;
        Self {
            origin_x,
            origin_y,
            size,
            vertices,
            indices: generate_grid_indices(size),
            apron: vec![Vec3::ZERO; apron_side * apron_side],
        }
    }

    pub fn origin(&self) -> (u32, u32) {
        (self.origin_x, self.origin_y)
    }

    /// Cells per side
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Vertex at local grid coordinate (0..=size on both axes)
    pub fn vertex(&self, local_x: u32, local_y: u32) -> Option<&Vertex> {
        if local_x > self.size || local_y > self.size {
            return None;
        }
        let stride = self.size as usize + 1;
        self.vertices.get(local_y as usize * stride + local_x as usize)
    }

    /// Evaluate every apron position at its world coordinate
    fn displace(
        &mut self,
        time: f64,
        strategy: &dyn DisplacementStrategy,
        components: &[WaveComponent],
    ) {
        let side = self.size as usize + 3;
        let left = self.origin_x as f64 - 1.0;
        let top = self.origin_y as f64 - 1.0;

        for (idx, position) in self.apron.iter_mut().enumerate() {
            let world_x = left + (idx % side) as f64;
            let world_y = top + (idx / side) as f64;

            let d = strategy.evaluate(world_x, world_y, time, components);
            *position = Vec3::new(
                (world_x + d.horizontal) as f32,
                d.height as f32,
                world_y as f32,
            );
        }
    }

    /// Copy positions out of the apron and set each normal to the
    /// area-weighted average of the six faces around the vertex.
    ///
    /// Edge vertices take their outer faces from the ring, so a vertex shared
    /// by two chunks gets the same normal in both.
    fn write_vertices(&mut self) {
        let stride = self.size as usize + 1;
        let side = stride + 2;
        let apron = &self.apron;
        let at = |x: usize, y: usize| apron[y * side + x];
        let face = |a: Vec3, b: Vec3, c: Vec3| (b - a).cross(c - a);

        for (idx, vertex) in self.vertices.iter_mut().enumerate() {
            // Apron coordinates; always at least 1 away from the ring edge
            let (x, y) = (idx % stride + 1, idx / stride + 1);
            let p = at(x, y);

            // Same winding as generate_grid_indices
            let normal = face(p, at(x, y + 1), at(x + 1, y))
                + face(at(x - 1, y), at(x - 1, y + 1), p)
                + face(p, at(x - 1, y + 1), at(x, y + 1))
                + face(at(x, y - 1), p, at(x + 1, y - 1))
                + face(at(x + 1, y - 1), p, at(x + 1, y))
                + face(at(x, y - 1), at(x - 1, y), p);

            vertex.position = p.to_array();
            vertex.normal = normal.try_normalize().unwrap_or(Vec3::Y).to_array();
        }
    }
}

/// Triangle indices for a `chunk_size × chunk_size` cell grid.
///
/// Per cell at `v = y * stride + x`: `{v, v+stride, v+1}` and
/// `{v+1, v+stride, v+stride+1}`, both facing +y.
pub fn generate_grid_indices(chunk_size: u32) -> Vec<u32> {
    let stride = chunk_size + 1;
    let cells = chunk_size as usize * chunk_size as usize;
    let mut indices = Vec::with_capacity(cells * 6);

    for y in 0..chunk_size {
        for x in 0..chunk_size {
            let top_left = y * stride + x;
            let top_right = top_left + 1;
            let bottom_left = top_left + stride;
            let bottom_right = bottom_left + 1;

            indices.extend_from_slice(&[
                top_left,
                bottom_left,
                top_right,
                top_right,
                bottom_left,
                bottom_right,
            ]);
        }
    }

    indices
}

/// Full surface: `resolution × resolution` cells tiled by square chunks
#[derive(Debug, Clone)]
pub struct SurfaceGrid {
    resolution: u32,
    chunk_size: u32,
    chunks: Vec<SurfaceChunk>,
}

impl SurfaceGrid {
    /// Allocate every chunk's vertex grid and index buffer.
    ///
    /// Chunks are stored row-major (y outer, x inner). Fails if `chunk_size`
    /// is zero or does not divide `resolution`.
    pub fn build_topology(resolution: u32, chunk_size: u32) -> Result<Self> {
        validate_tiling(resolution, chunk_size)?;

        let mut chunks = Vec::new();
        for origin_y in (0..resolution).step_by(chunk_size as usize) {
            for origin_x in (0..resolution).step_by(chunk_size as usize) {
                chunks.push(SurfaceChunk::new(origin_x, origin_y, chunk_size));
            }
        }

        log::debug!(
            "Built surface topology: {} chunks of {}x{} cells ({} vertices)",
            chunks.len(),
            chunk_size,
            chunk_size,
            chunks.iter().map(|c| c.vertices.len()).sum::<usize>()
        );

        Ok(Self {
            resolution,
            chunk_size,
            chunks,
        })
    }

    /// Re-displace every vertex for `time` and refresh normals.
    ///
    /// Calls `strategy.begin_pass` once, then evaluates chunks in parallel.
    /// Topology never changes.
    pub fn update_heights(
        &mut self,
        time: f64,
        delta_time: f64,
        components: &[WaveComponent],
        strategy: &mut dyn DisplacementStrategy,
    ) {
        strategy.begin_pass(time, delta_time, components);
        let strategy: &dyn DisplacementStrategy = strategy;

        self.chunks.par_iter_mut().for_each(|chunk| {
            chunk.displace(time, strategy, components);
            chunk.write_vertices();
        });

        log::trace!(
            "Updated {} chunks at t={:.3}s ({} strategy)",
            self.chunks.len(),
            time,
            strategy.kind().name()
        );
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn chunk_size(&self) -> u32 {
        self.chunk_size
    }

    pub fn chunks(&self) -> &[SurfaceChunk] {
        &self.chunks
    }

    pub fn chunks_per_side(&self) -> u32 {
        self.resolution / self.chunk_size
    }

    /// Chunk at chunk coordinate `(cx, cy)`
    pub fn chunk(&self, cx: u32, cy: u32) -> Option<&SurfaceChunk> {
        let per_side = self.chunks_per_side();
        if cx >= per_side || cy >= per_side {
            return None;
        }
        self.chunks.get((cy * per_side + cx) as usize)
    }

    /// Total vertices across all chunks (shared edges counted per chunk)
    pub fn vertex_count(&self) -> usize {
        self.chunks.iter().map(|c| c.vertices.len()).sum()
    }

    pub fn index_count(&self) -> usize {
        self.chunks.iter().map(|c| c.indices.len()).sum()
    }

    /// Current height at integer world coordinate (0..=resolution)
    pub fn height_at(&self, x: u32, y: u32) -> Option<f32> {
        if x > self.resolution || y > self.resolution {
            return None;
        }
        let last = self.chunks_per_side() - 1;
        let cx = (x / self.chunk_size).min(last);
        let cy = (y / self.chunk_size).min(last);
        let chunk = self.chunk(cx, cy)?;
        chunk
            .vertex(x - cx * self.chunk_size, y - cy * self.chunk_size)
            .map(|v| v.position[1])
    }

    /// (min, max) vertex height over the whole surface
    pub fn height_range(&self) -> (f32, f32) {
        self.chunks
            .iter()
            .flat_map(|c| c.vertices.iter())
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v.position[1]), hi.max(v.position[1]))
            })
    }
}
