//! Cellular (Voronoi / Worley F1) noise.

use glam::Vec2;

use super::{DEFAULT_SEED, NoiseGenerator};

/// Starting value for the nearest-point search.
const INIT_DISTANCE: f32 = 10_000.0;

/// Voronoi noise: distance from the sample to the nearest jittered cell point.
///
/// Each integer cell holds one feature point placed by a sine hash of the cell
/// coordinates. The distance is rescaled from `[0, sqrt(2)]` to `[-1, 1]`.
#[derive(Clone, Debug)]
pub struct VoronoiNoise {
    seed: u32,
}

impl VoronoiNoise {
    /// Create a generator for `seed`.
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Pseudo-random value in `[0, 1)` for a 2D coordinate.
    ///
    /// `libm` keeps the sine bit-identical across platforms.
    #[inline]
    fn hash2d(&self, x: f32, y: f32) -> f32 {
        let n = libm::sinf(x * 12.9898 + y * 78.233 + self.seed as f32 * 0.001) * 43_758.547;
        n - n.floor()
    }

    /// Jittered feature point of cell `(ix, iy)`.
    #[inline]
    fn cell_point(&self, ix: i32, iy: i32) -> Vec2 {
        let fx = ix as f32;
        let fy = iy as f32;
        Vec2::new(
            fx + self.hash2d(fx, fy),
            fy + self.hash2d(fx + 1.0, fy + 1.0),
        )
    }
}

impl Default for VoronoiNoise {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl NoiseGenerator for VoronoiNoise {
    fn seed(&self) -> u32 {
        self.seed
    }

    fn generate(&self, x: f32, y: f32) -> f32 {
        let ix = x.floor() as i32;
        let iy = y.floor() as i32;
        let sample = Vec2::new(x, y);

        let mut min_dist = INIT_DISTANCE;
        for dy in -1..=1 {
            for dx in -1..=1 {
                let point = self.cell_point(ix + dx, iy + dy);
                min_dist = min_dist.min(sample.distance(point));
            }
        }

        (min_dist / std::f32::consts::SQRT_2) * 2.0 - 1.0
    }
}
