use bevy::prelude::*;
use noise::{NoiseFn, Perlin};

/// Read-only height-sample grid the movement pass snaps grounded
/// entities onto. Row index is z, column index is x, one sample per
/// world unit.
#[derive(Default, Resource)]
pub struct Terrain {
    heights: Vec<Vec<f32>>,
}

impl Terrain {
    pub fn new(heights: Vec<Vec<f32>>) -> Self {
        Terrain { heights }
    }

    /// Perlin-noise hills covering `width` x `depth` world units.
    pub fn generate(width: usize, depth: usize, scale: f64, seed: u32) -> Self {
        let perlin = Perlin::new(seed);
        let heights = (0..=depth)
            .map(|z| {
                (0..=width)
                    .map(|x| {
                        let sample = perlin.get([x as f64 * scale, z as f64 * scale]);
                        (sample * 30.0) as f32
                    })
                    .collect()
            })
            .collect();
        Terrain { heights }
    }

    /// Uniform height everywhere; mostly useful in tests.
    pub fn flat(width: usize, depth: usize, height: f32) -> Self {
        Terrain {
            heights: vec![vec![height; width + 1]; depth + 1],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty() || self.heights[0].is_empty()
    }

    /// Bilinear interpolation of the grid at (x, z). Coordinates
    /// outside the grid clamp to the nearest valid sample.
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        let rows = self.heights.len() as isize;
        let cols = self.heights[0].len() as isize;

        let x0 = (x.floor() as isize).clamp(0, cols - 1);
        let z0 = (z.floor() as isize).clamp(0, rows - 1);
        let x1 = (x0 + 1).min(cols - 1);
        let z1 = (z0 + 1).min(rows - 1);

        let h00 = self.heights[z0 as usize][x0 as usize];
        let h10 = self.heights[z0 as usize][x1 as usize];
        let h01 = self.heights[z1 as usize][x0 as usize];
        let h11 = self.heights[z1 as usize][x1 as usize];

        let t = (x - x0 as f32).clamp(0.0, 1.0);
        let u = (z - z0 as f32).clamp(0.0, 1.0);

        (1.0 - t) * (1.0 - u) * h00 + t * (1.0 - u) * h10 + (1.0 - t) * u * h01 + t * u * h11
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_grid_is_flat_everywhere() {
        let terrain = Terrain::flat(10, 10, 4.0);
        assert_eq!(terrain.height_at(0.0, 0.0), 4.0);
        assert_eq!(terrain.height_at(5.3, 7.8), 4.0);
        assert_eq!(terrain.height_at(10.0, 10.0), 4.0);
    }

    #[test]
    fn test_bilinear_interpolates_between_samples() {
        // one cell ramping from 0 at x=0 to 2 at x=1
        let terrain = Terrain::new(vec![vec![0.0, 2.0], vec![0.0, 2.0]]);
        assert!((terrain.height_at(0.5, 0.0) - 1.0).abs() < 1e-6);
        assert!((terrain.height_at(0.25, 0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_grid_clamps_to_edge_samples() {
        let terrain = Terrain::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(terrain.height_at(-50.0, -50.0), 1.0);
        assert_eq!(terrain.height_at(50.0, 50.0), 4.0);
        assert_eq!(terrain.height_at(50.0, -50.0), 2.0);
    }

    #[test]
    fn test_generate_dimensions_and_bounds() {
        let terrain = Terrain::generate(8, 4, 0.05, 7);
        assert!(!terrain.is_empty());
        for z in 0..=4 {
            for x in 0..=8 {
                let h = terrain.height_at(x as f32, z as f32);
                assert!(h.abs() <= 30.0, "height {} out of amplitude", h);
            }
        }
    }

    #[test]
    fn test_empty_grid_reports_empty() {
        assert!(Terrain::default().is_empty());
        assert!(Terrain::new(vec![vec![]]).is_empty());
    }
}
