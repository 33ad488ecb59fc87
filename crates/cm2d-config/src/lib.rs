//! Configuration for the terrain tools.
//!
//! Settings persist to disk as a RON file and can be overridden from the
//! command line via clap. Missing fields fall back to their defaults, so old
//! config files keep loading as new settings are added.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    BiomeConfig, CONFIG_FILE_NAME, Config, DebugConfig, ErosionConfig, OutputConfig,
    TerrainConfig, default_config_dir,
};
pub use error::ConfigError;
