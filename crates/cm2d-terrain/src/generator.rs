//! High-level terrain pipeline.
//!
//! [`TerrainGenerator`] holds only a seed, a size, and tuning parameters. Every
//! call rebuilds its noise generators from the seed, so repeated calls with the
//! same arguments produce bit-identical grids.

use std::time::Instant;

use crate::biome::{BiomeGrid, BiomeThresholds};
use crate::elevation::ElevationGrid;
use crate::erosion::ErosionParams;
use crate::error::TerrainError;
use crate::noise::{FractalNoise, FractalParams, NoiseKind, PerlinNoise};
use crate::seed::{MOISTURE_SEED_SALT, TEMPERATURE_SEED_SALT, derive_seed};

/// Octaves used for the temperature and moisture fields.
pub const CLIMATE_OCTAVES: u32 = 4;

/// Temperature and moisture fields, each normalized to `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ClimateMaps {
    pub temperature: ElevationGrid,
    pub moisture: ElevationGrid,
}

/// Seeded generator for elevation, climate, and biome grids of a fixed size.
#[derive(Clone, Debug)]
pub struct TerrainGenerator {
    width: u32,
    height: u32,
    seed: u32,
    basis: NoiseKind,
    lacunarity: f32,
    persistence: f32,
    erosion: ErosionParams,
    thresholds: BiomeThresholds,
}

impl TerrainGenerator {
    /// A Perlin-based generator with default tuning.
    pub fn new(width: u32, height: u32, seed: u32) -> Self {
        let fractal = FractalParams::default();
        Self {
            width,
            height,
            seed,
            basis: NoiseKind::default(),
            lacunarity: fractal.lacunarity,
            persistence: fractal.persistence,
            erosion: ErosionParams::default(),
            thresholds: BiomeThresholds::default(),
        }
    }

    /// Use `basis` for the elevation field.
    pub fn with_basis(mut self, basis: NoiseKind) -> Self {
        self.basis = basis;
        self
    }

    /// Octave frequency and amplitude multipliers for the elevation field.
    pub fn with_fractal(mut self, lacunarity: f32, persistence: f32) -> Self {
        self.lacunarity = lacunarity;
        self.persistence = persistence;
        self
    }

    pub fn with_erosion(mut self, erosion: ErosionParams) -> Self {
        self.erosion = erosion;
        self
    }

    pub fn with_thresholds(mut self, thresholds: BiomeThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn set_seed(&mut self, seed: u32) {
        self.seed = seed;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn basis(&self) -> NoiseKind {
        self.basis
    }

    pub fn erosion(&self) -> &ErosionParams {
        &self.erosion
    }

    pub fn thresholds(&self) -> &BiomeThresholds {
        &self.thresholds
    }

    fn blank_field(&self) -> Result<ElevationGrid, TerrainError> {
        ElevationGrid::new(self.width, self.height).ok_or(TerrainError::EmptyGrid {
            width: self.width,
            height: self.height,
        })
    }

    /// fBm elevation over the configured basis, normalized to `[0, 1]`.
    ///
    /// `scale` is the number of base-frequency noise units across the grid
    /// width, so the same value gives the same features at any resolution.
    ///
    /// # Errors
    ///
    /// [`TerrainError::EmptyGrid`] if either dimension is zero.
    pub fn generate_quick(&self, scale: f32, octaves: u32) -> Result<ElevationGrid, TerrainError> {
        let _span =
            tracing::debug_span!("generate_quick", seed = self.seed, basis = %self.basis).entered();
        let start = Instant::now();

        let mut elevation = self.blank_field()?;
        let fbm = FractalNoise::new(
            self.basis.build(self.seed),
            FractalParams {
                octaves,
                lacunarity: self.lacunarity,
                persistence: self.persistence,
            },
        );
        elevation.generate_from_noise(&fbm, scale / self.width as f32, 0.0, 0.0);

        if let Some((min, max)) = elevation.min_max() {
            tracing::debug!(min, max, "raw elevation range");
        }
        elevation.normalize(0.0, 1.0);

        tracing::debug!(
            width = self.width,
            height = self.height,
            octaves = fbm.octaves(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "elevation generated"
        );
        Ok(elevation)
    }

    /// [`generate_quick`](Self::generate_quick) followed by erosion.
    ///
    /// Half of `erosion_iterations` go to thermal erosion and half to hydraulic
    /// erosion, in that order, after which the grid is normalized again.
    pub fn generate_detailed(
        &self,
        scale: f32,
        octaves: u32,
        erosion_iterations: u32,
    ) -> Result<ElevationGrid, TerrainError> {
        let mut elevation = self.generate_quick(scale, octaves)?;
        if erosion_iterations == 0 {
            return Ok(elevation);
        }

        let _span = tracing::debug_span!("erosion", seed = self.seed, erosion_iterations).entered();
        let start = Instant::now();

        let half = erosion_iterations / 2;
        self.erosion.apply(&mut elevation, half, half);
        elevation.normalize(0.0, 1.0);

        tracing::debug!(
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "erosion finished"
        );
        Ok(elevation)
    }

    /// Temperature and moisture fields for this seed.
    ///
    /// Each is 4-octave Perlin fBm seeded from [`derive_seed`] with its own
    /// salt, then normalized to `[0, 1]`.
    pub fn generate_climate(
        &self,
        temperature_scale: f32,
        moisture_scale: f32,
    ) -> Result<ClimateMaps, TerrainError> {
        let _span = tracing::debug_span!("generate_climate", seed = self.seed).entered();

        let temperature = self.climate_field(TEMPERATURE_SEED_SALT, temperature_scale)?;
        let moisture = self.climate_field(MOISTURE_SEED_SALT, moisture_scale)?;
        Ok(ClimateMaps {
            temperature,
            moisture,
        })
    }

    fn climate_field(&self, salt: u32, scale: f32) -> Result<ElevationGrid, TerrainError> {
        let mut field = self.blank_field()?;
        let fbm = FractalNoise::with_octaves(
            PerlinNoise::new(derive_seed(self.seed, salt)),
            CLIMATE_OCTAVES,
        );
        field.generate_from_noise(&fbm, scale / self.width as f32, 0.0, 0.0);
        field.normalize(0.0, 1.0);
        Ok(field)
    }

    /// Classify `elevation` against freshly generated climate fields.
    ///
    /// # Errors
    ///
    /// [`TerrainError::DimensionMismatch`] if `elevation` is not this
    /// generator's size, and [`TerrainError::EmptyGrid`] if that size is empty.
    pub fn generate_biomes(
        &self,
        elevation: &ElevationGrid,
        temperature_scale: f32,
        moisture_scale: f32,
    ) -> Result<BiomeGrid, TerrainError> {
        if elevation.dimensions() != self.dimensions() {
            return Err(TerrainError::DimensionMismatch {
                expected: self.dimensions(),
                found: elevation.dimensions(),
            });
        }

        let climate = self.generate_climate(temperature_scale, moisture_scale)?;

        let _span = tracing::debug_span!("classify_biomes", seed = self.seed).entered();
        let biomes = BiomeGrid::classify_with(
            &self.thresholds,
            elevation,
            Some(&climate.temperature),
            Some(&climate.moisture),
        )?;

        if tracing::enabled!(tracing::Level::DEBUG) {
            let mut histogram: Vec<_> = biomes.histogram().into_iter().collect();
            histogram.sort_unstable();
            tracing::debug!(?histogram, "biomes classified");
        }
        Ok(biomes)
    }
}
