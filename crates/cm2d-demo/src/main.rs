//! Demo binary that renders every terrain generation stage to PNG previews.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p cm2d-demo` to write the previews.
//! Run with `cargo run -p cm2d-demo -- --seed 42 --basis simplex --output previews` to vary them.

mod previews;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use cm2d_config::{CliArgs, Config, default_config_dir};
use tracing::{error, info};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args
        .config
        .clone()
        .or_else(default_config_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    if let Some(log_file) =
        cm2d_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config))
    {
        info!("Writing JSON log to {}", log_file.display());
    }

    info!(
        width = config.terrain.width,
        height = config.terrain.height,
        seed = config.terrain.seed,
        basis = %config.terrain.basis,
        "Generating terrain previews"
    );

    match previews::render_all(&config) {
        Ok(written) => {
            info!(
                "Wrote {} previews to {}",
                written.len(),
                config.output.directory.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Preview generation failed: {e}");
            ExitCode::FAILURE
        }
    }
}
