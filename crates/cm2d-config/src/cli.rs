//! Command-line argument parsing for the terrain tools.

use std::path::PathBuf;

use clap::Parser;
use cm2d_terrain::NoiseKind;

use crate::Config;

/// Terrain generator command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "cm2d", about = "Procedural 2D terrain generator")]
pub struct CliArgs {
    /// Grid width in cells.
    #[arg(long)]
    pub width: Option<u32>,

    /// Grid height in cells.
    #[arg(long)]
    pub height: Option<u32>,

    /// Terrain seed.
    #[arg(long)]
    pub seed: Option<u32>,

    /// Noise units across the grid width.
    #[arg(long)]
    pub scale: Option<f32>,

    /// fBm octave count.
    #[arg(long)]
    pub octaves: Option<u32>,

    /// Basis noise (perlin, simplex, voronoi).
    #[arg(long)]
    pub basis: Option<NoiseKind>,

    /// Total erosion passes for detailed terrain.
    #[arg(long)]
    pub erosion_iterations: Option<u32>,

    /// Directory for generated images.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.terrain.width = w;
        }
        if let Some(h) = args.height {
            self.terrain.height = h;
        }
        if let Some(seed) = args.seed {
            self.terrain.seed = seed;
        }
        if let Some(scale) = args.scale {
            self.terrain.scale = scale;
        }
        if let Some(octaves) = args.octaves {
            self.terrain.octaves = octaves;
        }
        if let Some(basis) = args.basis {
            self.terrain.basis = basis;
        }
        if let Some(iterations) = args.erosion_iterations {
            self.erosion.iterations = iterations;
        }
        if let Some(ref dir) = args.output {
            self.output.directory = dir.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(256),
            seed: Some(42),
            basis: Some(NoiseKind::Simplex),
            output: Some(PathBuf::from("out")),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.terrain.width, 256);
        assert_eq!(config.terrain.seed, 42);
        assert_eq!(config.terrain.basis, NoiseKind::Simplex);
        assert_eq!(config.output.directory, PathBuf::from("out"));
        // Non-overridden fields retain defaults
        assert_eq!(config.terrain.height, 512);
        assert_eq!(config.erosion.iterations, 50);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::try_parse_from([
            "cm2d",
            "--width",
            "64",
            "--basis",
            "voronoi",
            "--erosion-iterations",
            "10",
            "--scale",
            "2.5",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.width, Some(64));
        assert_eq!(args.basis, Some(NoiseKind::Voronoi));
        assert_eq!(args.erosion_iterations, Some(10));
        assert_eq!(args.scale, Some(2.5));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.seed, None);
    }

    #[test]
    fn test_unknown_basis_rejected() {
        let result = CliArgs::try_parse_from(["cm2d", "--basis", "worley"]);
        assert!(result.is_err());
    }
}
