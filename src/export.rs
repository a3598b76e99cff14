//! Grayscale heightmap export of the current surface.

use image::{GrayImage, Luma};

use crate::surface::SurfaceGrid;

/// Render heights to an 8-bit image, one pixel per grid vertex.
///
/// Maps the lowest vertex to 0 and the highest to 255; a flat surface comes
/// out mid-gray.
pub fn heightmap_image(grid: &SurfaceGrid) -> GrayImage {
    let side = grid.resolution() + 1;
    let (lo, hi) = grid.height_range();
    let span = hi - lo;

    let mut img = GrayImage::new(side, side);
    for y in 0..side {
        for x in 0..side {
            let h = grid.height_at(x, y).unwrap_or(lo);
            let gray = if span > f32::EPSILON {
                ((h - lo) / span * 255.0).round().clamp(0.0, 255.0) as u8
            } else {
                128
            };
            img.put_pixel(x, y, Luma([gray]));
        }
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waves::{GerstnerStrategy, WaveComponent, WaveDisplacement, WaveEvaluator};
    use glam::DVec2;

    #[test]
    fn test_flat_surface_is_mid_gray() {
        let grid = SurfaceGrid::build_topology(8, 4).unwrap();
        let img = heightmap_image(&grid);
        assert_eq!(img.dimensions(), (9, 9));
        assert!(img.pixels().all(|p| p.0[0] == 128));
    }

    #[test]
    fn test_full_range_used() {
        let mut grid = SurfaceGrid::build_topology(8, 8).unwrap();
        let components = vec![WaveComponent::new("w")
            .with_displacement(WaveDisplacement::new(1.0, 0.4, 0.0, DVec2::X))];
        let mut strategy = GerstnerStrategy::new(WaveEvaluator::new(0, 0));
        grid.update_heights(0.0, 0.0, &components, &mut strategy);

        let img = heightmap_image(&grid);
        let values: Vec<u8> = img.pixels().map(|p| p.0[0]).collect();
        assert_eq!(values.iter().copied().min(), Some(0));
        assert_eq!(values.iter().copied().max(), Some(255));
        // Columns are constant for a wave along +x
        assert_eq!(img.get_pixel(3, 0), img.get_pixel(3, 8));
    }
}
