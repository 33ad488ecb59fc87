//! Terrain, erosion, biome and output settings persisted as `config.ron`.

use std::path::{Path, PathBuf};

use cm2d_terrain::{
    BiomeThresholds, DEFAULT_HYDRAULIC_STRENGTH, DEFAULT_TALUS_ANGLE, ErosionParams, ErosionSweep,
    NoiseKind, TerrainGenerator,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Platform config directory for the terrain tools, e.g. `~/.config/cm2d`.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cm2d"))
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Grid size, seed, and elevation noise settings.
    pub terrain: TerrainConfig,
    /// Erosion settings for detailed generation.
    pub erosion: ErosionConfig,
    /// Climate sampling and biome classification settings.
    pub biome: BiomeConfig,
    /// Where generated previews are written.
    pub output: OutputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Elevation generation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    pub seed: u32,
    /// Base-frequency noise units across the grid width for the generator.
    pub scale: f32,
    /// Per-cell sampling step for raw single-basis previews.
    pub noise_scale: f32,
    /// fBm octave count.
    pub octaves: u32,
    pub lacunarity: f32,
    pub persistence: f32,
    /// Basis noise for the elevation field.
    pub basis: NoiseKind,
}

/// Erosion settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ErosionConfig {
    /// Total passes, split evenly between thermal and hydraulic erosion.
    pub iterations: u32,
    pub talus_angle: f32,
    /// Hydraulic erosion strength.
    pub strength: f32,
    pub sweep: ErosionSweep,
}

/// Climate and biome settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BiomeConfig {
    pub temperature_scale: f32,
    pub moisture_scale: f32,
    /// Cut points of the classification table.
    pub thresholds: BiomeThresholds,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for generated images, created on demand.
    pub directory: PathBuf,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            seed: 12345,
            scale: 1.0,
            noise_scale: 0.005,
            octaves: 6,
            lacunarity: 2.0,
            persistence: 0.5,
            basis: NoiseKind::Perlin,
        }
    }
}

impl Default for ErosionConfig {
    fn default() -> Self {
        Self {
            iterations: 50,
            talus_angle: DEFAULT_TALUS_ANGLE,
            strength: DEFAULT_HYDRAULIC_STRENGTH,
            sweep: ErosionSweep::InPlace,
        }
    }
}

impl Default for BiomeConfig {
    fn default() -> Self {
        Self {
            temperature_scale: 0.5,
            moisture_scale: 0.5,
            thresholds: BiomeThresholds::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("terrain_output"),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl ErosionConfig {
    /// The erosion parameters these settings describe.
    pub fn params(&self) -> ErosionParams {
        ErosionParams {
            talus_angle: self.talus_angle,
            hydraulic_strength: self.strength,
            sweep: self.sweep,
        }
    }
}

impl Config {
    /// A generator carrying this config's size, seed, and tuning.
    pub fn terrain_generator(&self) -> TerrainGenerator {
        let terrain = &self.terrain;
        TerrainGenerator::new(terrain.width, terrain.height, terrain.seed)
            .with_basis(terrain.basis)
            .with_fractal(terrain.lacunarity, terrain.persistence)
            .with_erosion(self.erosion.params())
            .with_thresholds(self.biome.thresholds)
    }
}

// --- Load / Save / Reload ---

fn read_config(config_path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(config_path).map_err(|source| ConfigError::ReadError {
        path: config_path.to_path_buf(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| ConfigError::ParseError {
        path: config_path.to_path_buf(),
        source,
    })
}

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let config = read_config(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::WriteError {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::WriteError {
            path: config_path.clone(),
            source,
        })?;
        Ok(())
    }

    /// Re-read the file: returns `Some(new_config)` if it differs from `self`, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = read_config(&config_dir.join(CONFIG_FILE_NAME))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
