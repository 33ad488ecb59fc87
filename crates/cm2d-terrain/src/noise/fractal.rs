//! Fractal Brownian motion (fBm) compositor.
//!
//! Sums several octaves of a base generator, each at a higher frequency and a
//! lower amplitude than the last, and divides by the total amplitude so the
//! result stays in roughly the same `[-1, 1]` range as the base.

use serde::{Deserialize, Serialize};

use super::NoiseGenerator;

/// Octave layout for [`FractalNoise`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FractalParams {
    /// Number of octaves to sum. Values below 1 are treated as 1.
    pub octaves: u32,
    /// Frequency multiplier between successive octaves. Default: 2.0.
    pub lacunarity: f32,
    /// Amplitude multiplier between successive octaves. Default: 0.5.
    pub persistence: f32,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            octaves: 6,
            lacunarity: 2.0,
            persistence: 0.5,
        }
    }
}

/// fBm over a base generator `N`.
///
/// The compositor owns `N`. To share a generator instead, instantiate with a
/// reference: `FractalNoise<&PerlinNoise>` borrows the base for its lifetime.
#[derive(Clone, Debug)]
pub struct FractalNoise<N> {
    base: N,
    params: FractalParams,
}

impl<N: NoiseGenerator> FractalNoise<N> {
    /// Wrap `base` with the given octave layout.
    pub fn new(base: N, params: FractalParams) -> Self {
        let params = FractalParams {
            octaves: params.octaves.max(1),
            ..params
        };
        Self { base, params }
    }

    /// Wrap `base` with `octaves` octaves and the default lacunarity and persistence.
    pub fn with_octaves(base: N, octaves: u32) -> Self {
        Self::new(
            base,
            FractalParams {
                octaves,
                ..FractalParams::default()
            },
        )
    }

    /// Sum of the per-octave amplitudes, used as the divisor in
    /// [`generate`](NoiseGenerator::generate).
    pub fn max_amplitude(&self) -> f32 {
        let mut sum = 0.0;
        let mut amp = 1.0;
        for _ in 0..self.params.octaves {
            sum += amp;
            amp *= self.params.persistence;
        }
        sum
    }

    /// The base generator.
    pub fn base(&self) -> &N {
        &self.base
    }

    /// Unwrap into the base generator.
    pub fn into_base(self) -> N {
        self.base
    }

    /// Current octave layout.
    pub fn params(&self) -> &FractalParams {
        &self.params
    }

    pub fn octaves(&self) -> u32 {
        self.params.octaves
    }

    pub fn lacunarity(&self) -> f32 {
        self.params.lacunarity
    }

    pub fn persistence(&self) -> f32 {
        self.params.persistence
    }

    pub fn set_octaves(&mut self, octaves: u32) {
        self.params.octaves = octaves.max(1);
    }

    pub fn set_lacunarity(&mut self, lacunarity: f32) {
        self.params.lacunarity = lacunarity;
    }

    pub fn set_persistence(&mut self, persistence: f32) {
        self.params.persistence = persistence;
    }
}

impl<N: NoiseGenerator> NoiseGenerator for FractalNoise<N> {
    fn seed(&self) -> u32 {
        self.base.seed()
    }

    fn generate(&self, x: f32, y: f32) -> f32 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_value = 0.0;

        for _ in 0..self.params.octaves {
            total += self.base.generate(x * frequency, y * frequency) * amplitude;

            max_value += amplitude;
            amplitude *= self.params.persistence;
            frequency *= self.params.lacunarity;
        }

        total / max_value
    }
}
