//! Bridges to the `noise` crate so these generators can feed its combinators.

use ::noise::NoiseFn;

use super::{BasisNoise, FractalNoise, NoiseGenerator, PerlinNoise, SimplexNoise, VoronoiNoise};

macro_rules! impl_noise_fn {
    ($($ty:ty),* $(,)?) => {
        $(
            impl NoiseFn<f64, 2> for $ty {
                fn get(&self, point: [f64; 2]) -> f64 {
                    self.generate(point[0] as f32, point[1] as f32) as f64
                }
            }
        )*
    };
}

impl_noise_fn!(PerlinNoise, SimplexNoise, VoronoiNoise, BasisNoise);

impl<N: NoiseGenerator> NoiseFn<f64, 2> for FractalNoise<N> {
    fn get(&self, point: [f64; 2]) -> f64 {
        self.generate(point[0] as f32, point[1] as f32) as f64
    }
}

#[cfg(test)]
mod tests {
    use ::noise::ScaleBias;

    use super::*;
    use crate::noise::NoiseKind;

    #[test]
    fn test_noise_fn_matches_generate() {
        let perlin = PerlinNoise::new(21);
        let via_trait = NoiseFn::<f64, 2>::get(&perlin, [1.25, 7.5]);
        assert_eq!(via_trait, perlin.generate(1.25, 7.5) as f64);
    }

    #[test]
    fn test_feeds_noise_combinators() {
        let basis = NoiseKind::Simplex.build(3);
        let expected = basis.generate(0.4, 0.8) as f64 * 0.5 + 0.5;
        let remapped: ScaleBias<f64, BasisNoise, 2> =
            ScaleBias::new(basis).set_scale(0.5).set_bias(0.5);
        assert!((remapped.get([0.4, 0.8]) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_fractal_noise_fn() {
        let fbm = FractalNoise::with_octaves(VoronoiNoise::new(2), 3);
        assert_eq!(fbm.get([2.0, 3.0]), fbm.generate(2.0, 3.0) as f64);
    }
}
