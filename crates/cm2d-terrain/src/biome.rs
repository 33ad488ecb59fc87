//! Biome system: the biome catalogue, threshold-table classification, and the
//! per-cell biome grid.
//!
//! Classification is a pure function of `(height, temperature, moisture)`, all
//! expected in `[0, 1]`; see [`BiomeThresholds`] for the decision table.

mod grid;
mod kind;
mod thresholds;

pub use grid::BiomeGrid;
pub use kind::{BiomeType, UnknownBiomeCode};
pub use thresholds::{BiomeThresholds, classify_biome};
