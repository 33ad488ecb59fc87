//! Renderers from terrain grids to [`DebugImage`]s.

use super::image::DebugImage;
use crate::biome::{BiomeGrid, BiomeType};
use crate::elevation::ElevationGrid;

/// Map a height in `[0, 1]` to a gray level by truncating `value * 255`.
///
/// Out-of-range values saturate at 0 or 255.
#[inline]
pub fn height_to_gray(value: f32) -> u8 {
    (value * 255.0) as u8
}

/// Render an elevation, slope, or climate grid as an opaque grayscale image.
pub fn render_grayscale(grid: &ElevationGrid) -> DebugImage {
    let (width, height) = grid.dimensions();
    let mut image = DebugImage::new(width, height);

    for (y, row) in grid.as_grid().rows().enumerate() {
        for (x, &value) in row.iter().enumerate() {
            let g = height_to_gray(value);
            image.set_pixel(x as u32, y as u32, [g, g, g, 255]);
        }
    }

    image
}

/// Preview color for each biome.
pub fn biome_color(biome: BiomeType) -> [u8; 3] {
    match biome {
        // Dark blue
        BiomeType::Ocean => [0, 0, 139],
        // Sandy
        BiomeType::Beach => [238, 214, 175],
        // Lawn green
        BiomeType::Plains => [124, 252, 0],
        // Forest green
        BiomeType::Forest => [34, 139, 34],
        // Tan
        BiomeType::Desert => [210, 180, 140],
        // Slate gray
        BiomeType::Tundra => [112, 128, 144],
        BiomeType::Snow => [255, 250, 250],
        BiomeType::Mountain => [139, 137, 137],
        // Dodger blue
        BiomeType::River => [30, 144, 255],
    }
}

/// Render a biome grid using [`biome_color`].
pub fn render_biome_map(biomes: &BiomeGrid) -> DebugImage {
    let (width, height) = biomes.dimensions();
    let mut image = DebugImage::new(width, height);

    for (idx, biome) in biomes.iter().enumerate() {
        let x = idx as u32 % width;
        let y = idx as u32 / width;
        let [r, g, b] = biome_color(biome);
        image.set_pixel(x, y, [r, g, b, 255]);
    }

    image
}
