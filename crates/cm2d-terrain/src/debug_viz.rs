//! Debug raster output for terrain grids.
//!
//! Provides [`DebugImage`] and renderers that turn elevation, slope, and biome
//! grids into RGBA previews. The demo binary writes these out as PNG files.

mod image;
mod renderers;

pub use self::image::DebugImage;
pub use renderers::{biome_color, height_to_gray, render_biome_map, render_grayscale};
