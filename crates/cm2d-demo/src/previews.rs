//! Preview scenarios: one PNG per generation stage.

use std::path::{Path, PathBuf};

use cm2d_config::Config;
use cm2d_terrain::debug_viz::{DebugImage, render_biome_map, render_grayscale};
use cm2d_terrain::{
    BiomeType, ElevationGrid, FractalNoise, FractalParams, NoiseGenerator, PerlinNoise,
    SimplexNoise, TerrainError, VoronoiNoise,
};
use tracing::{debug, info};

/// Voronoi cells are sampled this many times coarser than the other bases.
const VORONOI_SCALE_FACTOR: f32 = 10.0;

/// Errors raised while producing preview images.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error(transparent)]
    Terrain(#[from] TerrainError),

    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("pixel buffer does not match {width}x{height}")]
    Buffer { width: u32, height: u32 },

    #[error("failed to write {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Render all previews into `config.output.directory`, returning the written paths.
pub fn render_all(config: &Config) -> Result<Vec<PathBuf>, DemoError> {
    let out_dir = config.output.directory.as_path();
    std::fs::create_dir_all(out_dir).map_err(|source| DemoError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let terrain = &config.terrain;
    let seed = terrain.seed;
    let generator = config.terrain_generator();
    let mut written = Vec::new();

    info!("1. Perlin noise");
    let perlin = sample_basis(config, &PerlinNoise::new(seed), terrain.noise_scale)?;
    written.push(save(out_dir, "terrain_perlin.png", render_grayscale(&perlin))?);

    info!("2. Simplex noise");
    let simplex = sample_basis(config, &SimplexNoise::new(seed), terrain.noise_scale)?;
    written.push(save(out_dir, "terrain_simplex.png", render_grayscale(&simplex))?);

    info!("3. Voronoi noise");
    let voronoi = sample_basis(
        config,
        &VoronoiNoise::new(seed),
        terrain.noise_scale * VORONOI_SCALE_FACTOR,
    )?;
    written.push(save(out_dir, "terrain_voronoi.png", render_grayscale(&voronoi))?);

    info!("4. Fractal Brownian motion ({} octaves)", terrain.octaves);
    let fbm = FractalNoise::new(
        PerlinNoise::new(seed),
        FractalParams {
            octaves: terrain.octaves,
            lacunarity: terrain.lacunarity,
            persistence: terrain.persistence,
        },
    );
    let fbm_field = sample_basis(config, &fbm, terrain.noise_scale)?;
    written.push(save(out_dir, "terrain_fbm.png", render_grayscale(&fbm_field))?);

    info!("5. Detailed terrain ({} erosion passes)", config.erosion.iterations);
    let eroded =
        generator.generate_detailed(terrain.scale, terrain.octaves, config.erosion.iterations)?;
    written.push(save(out_dir, "terrain_eroded.png", render_grayscale(&eroded))?);

    info!("6. Biome map");
    let elevation = generator.generate_quick(terrain.scale, terrain.octaves)?;
    let biomes = generator.generate_biomes(
        &elevation,
        config.biome.temperature_scale,
        config.biome.moisture_scale,
    )?;
    for biome in BiomeType::ALL {
        let coverage = biomes.coverage(biome);
        if coverage > 0.0 {
            debug!("{biome}: {:.1}%", coverage * 100.0);
        }
    }
    written.push(save(out_dir, "terrain_biomes.png", render_biome_map(&biomes))?);

    info!("7. Slope map");
    let slope = fbm_field.calculate_slope_map();
    written.push(save(out_dir, "terrain_slope.png", render_grayscale(&slope))?);

    Ok(written)
}

/// Sample `noise` over the configured grid with a per-cell step and normalize to `[0, 1]`.
fn sample_basis<N: NoiseGenerator>(
    config: &Config,
    noise: &N,
    step: f32,
) -> Result<ElevationGrid, DemoError> {
    let (width, height) = (config.terrain.width, config.terrain.height);
    let mut grid =
        ElevationGrid::new(width, height).ok_or(TerrainError::EmptyGrid { width, height })?;
    grid.generate_from_noise(noise, step, 0.0, 0.0);
    grid.normalize(0.0, 1.0);
    Ok(grid)
}

fn save(out_dir: &Path, file_name: &str, preview: DebugImage) -> Result<PathBuf, DemoError> {
    let path = out_dir.join(file_name);
    let (width, height) = preview.dimensions();
    let buffer = image::RgbaImage::from_raw(width, height, preview.into_raw())
        .ok_or(DemoError::Buffer { width, height })?;
    buffer.save(&path).map_err(|source| DemoError::Image {
        path: path.clone(),
        source,
    })?;
    info!("   Saved: {}", path.display());
    Ok(path)
}
