//! Procedural 2D terrain synthesis: seedable noise, fractal composition,
//! elevation grids with erosion, and rule-based biome classification.

mod elevation;
mod erosion;
mod error;
mod generator;
mod seed;

pub mod biome;
pub mod debug_viz;
pub mod noise;

pub use biome::{BiomeGrid, BiomeThresholds, BiomeType, UnknownBiomeCode, classify_biome};
pub use cm2d_grid::Grid;
pub use elevation::{ElevationGrid, MIN_NORMALIZE_RANGE};
pub use erosion::{
    DEFAULT_HYDRAULIC_STRENGTH, DEFAULT_TALUS_ANGLE, EROSION_TRANSFER_FACTOR, ErosionParams,
    ErosionSweep,
};
pub use error::TerrainError;
pub use generator::{CLIMATE_OCTAVES, ClimateMaps, TerrainGenerator};
pub use self::noise::{
    BasisNoise, FractalNoise, FractalParams, NoiseGenerator, NoiseKind, PerlinNoise,
    SimplexNoise, VoronoiNoise,
};
pub use seed::{
    MOISTURE_SEED_SALT, TEMPERATURE_SEED_SALT, derive_seed, hash_biomes, hash_elevation,
};
