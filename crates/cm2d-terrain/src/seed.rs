//! Seed derivation and determinism fingerprints.
//!
//! The auxiliary climate fields reuse the terrain seed XOR-ed with a fixed
//! salt, so a single `u32` reproduces the whole pipeline.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::biome::BiomeGrid;
use crate::elevation::ElevationGrid;

// ---------------------------------------------------------------------------
// Seed derivation
// ---------------------------------------------------------------------------

/// Salt for the temperature field: the high half of the 64-bit golden ratio.
pub const TEMPERATURE_SEED_SALT: u32 = 0x9E37_79B9;

/// Salt for the moisture field: the low half of the 64-bit golden ratio.
pub const MOISTURE_SEED_SALT: u32 = 0x7F4A_7C15;

/// Derive an auxiliary seed from the terrain seed.
///
/// Distinct salts give unrelated permutation tables even for adjacent seeds,
/// which `seed + 1` would not.
#[inline]
pub fn derive_seed(seed: u32, salt: u32) -> u32 {
    seed ^ salt
}

// ---------------------------------------------------------------------------
// Fingerprints
// ---------------------------------------------------------------------------

/// Hash the dimensions and exact bit patterns of an elevation grid.
///
/// Two grids hash equal only if every cell is bit-identical, so `-0.0` and
/// `0.0` are distinguished.
pub fn hash_elevation(grid: &ElevationGrid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.dimensions().hash(&mut hasher);
    for v in grid.data() {
        v.to_bits().hash(&mut hasher);
    }
    hasher.finish()
}

/// Hash the dimensions and biome codes of a biome grid.
pub fn hash_biomes(grid: &BiomeGrid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.dimensions().hash(&mut hasher);
    grid.as_grid().data().hash(&mut hasher);
    hasher.finish()
}
