//! Seedable 2D noise generators and the fractal (fBm) compositor.
//!
//! Every generator implements [`NoiseGenerator`]: a pure function of its seed
//! and the sample coordinate, returning values approximately in `[-1, 1]`.
//! [`BasisNoise`] is the closed set of concrete algorithms, selected at runtime
//! through [`NoiseKind`].

mod fractal;
mod interop;
mod permutation;
mod perlin;
mod simplex;
mod voronoi;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use fractal::{FractalNoise, FractalParams};
pub use permutation::PermutationTable;
pub use perlin::PerlinNoise;
pub use simplex::SimplexNoise;
pub use voronoi::VoronoiNoise;

/// Seed used by the `Default` impls of the concrete generators.
pub const DEFAULT_SEED: u32 = 12345;

/// A seeded, deterministic 2D scalar field.
pub trait NoiseGenerator {
    /// The seed this generator was built from.
    fn seed(&self) -> u32;

    /// Sample the field at `(x, y)`.
    ///
    /// Returns a value approximately in `[-1, 1]`. The result depends only on
    /// the seed and the coordinate.
    fn generate(&self, x: f32, y: f32) -> f32;
}

impl<N: NoiseGenerator + ?Sized> NoiseGenerator for &N {
    #[inline]
    fn seed(&self) -> u32 {
        (**self).seed()
    }

    #[inline]
    fn generate(&self, x: f32, y: f32) -> f32 {
        (**self).generate(x, y)
    }
}

impl<N: NoiseGenerator + ?Sized> NoiseGenerator for Box<N> {
    #[inline]
    fn seed(&self) -> u32 {
        (**self).seed()
    }

    #[inline]
    fn generate(&self, x: f32, y: f32) -> f32 {
        (**self).generate(x, y)
    }
}

/// Selects one of the basis noise algorithms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoiseKind {
    /// Classic gradient noise.
    #[default]
    Perlin,
    /// Skewed-triangle gradient noise.
    Simplex,
    /// Cellular distance-to-nearest-point noise.
    Voronoi,
}

impl NoiseKind {
    /// All kinds, in declaration order.
    pub const ALL: [NoiseKind; 3] = [NoiseKind::Perlin, NoiseKind::Simplex, NoiseKind::Voronoi];

    /// Build a generator of this kind.
    pub fn build(self, seed: u32) -> BasisNoise {
        match self {
            NoiseKind::Perlin => BasisNoise::Perlin(PerlinNoise::new(seed)),
            NoiseKind::Simplex => BasisNoise::Simplex(SimplexNoise::new(seed)),
            NoiseKind::Voronoi => BasisNoise::Voronoi(VoronoiNoise::new(seed)),
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            NoiseKind::Perlin => "perlin",
            NoiseKind::Simplex => "simplex",
            NoiseKind::Voronoi => "voronoi",
        }
    }
}

impl fmt::Display for NoiseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown noise kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown noise kind: {0} (expected perlin, simplex or voronoi)")]
pub struct ParseNoiseKindError(pub String);

impl FromStr for NoiseKind {
    type Err = ParseNoiseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoiseKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseNoiseKindError(s.to_string()))
    }
}

/// One of the concrete basis generators.
#[derive(Clone, Debug)]
pub enum BasisNoise {
    Perlin(PerlinNoise),
    Simplex(SimplexNoise),
    Voronoi(VoronoiNoise),
}

impl BasisNoise {
    /// Which algorithm this is.
    pub fn kind(&self) -> NoiseKind {
        match self {
            BasisNoise::Perlin(_) => NoiseKind::Perlin,
            BasisNoise::Simplex(_) => NoiseKind::Simplex,
            BasisNoise::Voronoi(_) => NoiseKind::Voronoi,
        }
    }
}

impl NoiseGenerator for BasisNoise {
    fn seed(&self) -> u32 {
        match self {
            BasisNoise::Perlin(n) => n.seed(),
            BasisNoise::Simplex(n) => n.seed(),
            BasisNoise::Voronoi(n) => n.seed(),
        }
    }

    #[inline]
    fn generate(&self, x: f32, y: f32) -> f32 {
        match self {
            BasisNoise::Perlin(n) => n.generate(x, y),
            BasisNoise::Simplex(n) => n.generate(x, y),
            BasisNoise::Voronoi(n) => n.generate(x, y),
        }
    }
}
