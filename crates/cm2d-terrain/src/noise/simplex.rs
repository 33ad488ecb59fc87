//! 2D simplex noise.
//!
//! Samples on a skewed triangular lattice, so each point only blends three
//! corners instead of Perlin's four.

use glam::Vec2;

use super::{DEFAULT_SEED, NoiseGenerator, PermutationTable};

/// Skew factor `(sqrt(3) - 1) / 2`.
const F2: f32 = 0.366_025_42;
/// Unskew factor `(3 - sqrt(3)) / 6`.
const G2: f32 = 0.211_324_87;
/// Empirical scale bringing the summed corner contributions to roughly `[-1, 1]`.
pub const SIMPLEX_SCALE: f32 = 70.0;

const GRADIENTS: [Vec2; 8] = [
    Vec2::new(1.0, 1.0),
    Vec2::new(-1.0, 1.0),
    Vec2::new(1.0, -1.0),
    Vec2::new(-1.0, -1.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(-1.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(0.0, -1.0),
];

/// Simplex noise over a seeded permutation table.
#[derive(Clone, Debug)]
pub struct SimplexNoise {
    seed: u32,
    permutation: PermutationTable,
}

impl SimplexNoise {
    /// Create a generator for `seed`.
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            permutation: PermutationTable::new(seed),
        }
    }

    /// Radially attenuated contribution of one corner.
    #[inline]
    fn corner(gradient: usize, offset: Vec2) -> f32 {
        let t = 0.5 - offset.x * offset.x - offset.y * offset.y;
        if t < 0.0 {
            return 0.0;
        }
        let t2 = t * t;
        t2 * t2 * GRADIENTS[gradient].dot(offset)
    }
}

impl Default for SimplexNoise {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl NoiseGenerator for SimplexNoise {
    fn seed(&self) -> u32 {
        self.seed
    }

    fn generate(&self, x: f32, y: f32) -> f32 {
        let p = &self.permutation;

        let s = (x + y) * F2;
        let i = (x + s).floor() as i32;
        let j = (y + s).floor() as i32;

        let t = (i + j) as f32 * G2;
        let x0 = x - (i as f32 - t);
        let y0 = y - (j as f32 - t);

        // Lower or upper triangle of the skewed cell.
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f32 + G2;
        let y1 = y0 - j1 as f32 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        let gi0 = p.get(ii + p.get(jj)) % 8;
        let gi1 = p.get(ii + i1 + p.get(jj + j1)) % 8;
        let gi2 = p.get(ii + 1 + p.get(jj + 1)) % 8;

        let n0 = Self::corner(gi0, Vec2::new(x0, y0));
        let n1 = Self::corner(gi1, Vec2::new(x1, y1));
        let n2 = Self::corner(gi2, Vec2::new(x2, y2));

        SIMPLEX_SCALE * (n0 + n1 + n2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_skew_constants() {
        let f2 = 0.5 * (3.0f32.sqrt() - 1.0);
        let g2 = (3.0 - 3.0f32.sqrt()) / 6.0;
        assert!((F2 - f2).abs() < 1e-6);
        assert!((G2 - g2).abs() < 1e-6);
    }

    #[test]
    fn test_deterministic() {
        let a = SimplexNoise::new(42);
        let b = SimplexNoise::new(42);
        for (x, y) in [(0.1, 0.2), (55.5, -12.25), (-7.75, -7.75)] {
            assert_eq!(a.generate(x, y).to_bits(), b.generate(x, y).to_bits());
        }
    }

    #[test]
    fn test_output_near_unit_range() {
        let noise = SimplexNoise::new(9);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..10_000 {
            let x: f32 = rng.random_range(-300.0..300.0);
            let y: f32 = rng.random_range(-300.0..300.0);
            let v = noise.generate(x, y);
            assert!(v.abs() <= 1.05, "({x}, {y}) gave {v}");
        }
    }

    #[test]
    fn test_continuity() {
        let noise = SimplexNoise::new(3);
        let step = 0.001;
        for i in 0..5_000 {
            let y = i as f32 * step - 2.5;
            let delta = (noise.generate(1.3, y + step) - noise.generate(1.3, y)).abs();
            assert!(delta < 0.05, "jump of {delta} at y={y}");
        }
    }

    #[test]
    fn test_origin_is_zero() {
        // Every corner offset at the origin is either zero or outside the kernel radius.
        assert_eq!(SimplexNoise::new(1).generate(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_seeds_decorrelate() {
        let a = SimplexNoise::new(100);
        let b = SimplexNoise::new(101);
        let differs = (0..50).any(|i| {
            let x = i as f32 * 0.61 + 0.3;
            a.generate(x, 1.7) != b.generate(x, 1.7)
        });
        assert!(differs);
    }
}
