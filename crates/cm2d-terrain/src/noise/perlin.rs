//! Classic 2D Perlin gradient noise.

use super::{DEFAULT_SEED, NoiseGenerator, PermutationTable};

/// Classic Perlin noise over a seeded permutation table.
///
/// Output is exactly zero at every integer lattice point.
#[derive(Clone, Debug)]
pub struct PerlinNoise {
    seed: u32,
    permutation: PermutationTable,
}

impl PerlinNoise {
    /// Create a generator for `seed`.
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            permutation: PermutationTable::new(seed),
        }
    }

    /// Quintic smoothstep `6t^5 - 15t^4 + 10t^3`.
    #[inline]
    fn fade(t: f32) -> f32 {
        t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
    }

    #[inline]
    fn lerp(t: f32, a: f32, b: f32) -> f32 {
        a + t * (b - a)
    }

    /// Dot product of the offset with one of 16 pseudo-gradients picked by `hash`.
    #[inline]
    fn grad(hash: usize, x: f32, y: f32) -> f32 {
        let h = hash & 15;
        let u = if h < 8 { x } else { y };
        let v = if h < 4 {
            y
        } else if h == 12 || h == 14 {
            x
        } else {
            0.0
        };
        (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
    }
}

impl Default for PerlinNoise {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl NoiseGenerator for PerlinNoise {
    fn seed(&self) -> u32 {
        self.seed
    }

    fn generate(&self, x: f32, y: f32) -> f32 {
        let p = &self.permutation;

        let fx = x.floor();
        let fy = y.floor();
        let xi = (fx as i32 & 255) as usize;
        let yi = (fy as i32 & 255) as usize;

        let x = x - fx;
        let y = y - fy;

        let u = Self::fade(x);
        let v = Self::fade(y);

        let a = p.get(xi) + yi;
        let aa = p.get(a);
        let ab = p.get(a + 1);
        let b = p.get(xi + 1) + yi;
        let ba = p.get(b);
        let bb = p.get(b + 1);

        Self::lerp(
            v,
            Self::lerp(
                u,
                Self::grad(p.get(aa), x, y),
                Self::grad(p.get(ba), x - 1.0, y),
            ),
            Self::lerp(
                u,
                Self::grad(p.get(ab), x, y - 1.0),
                Self::grad(p.get(bb), x - 1.0, y - 1.0),
            ),
        )
    }
}
