//! Biome catalogue.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorical terrain classification stored as one byte per cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum BiomeType {
    #[default]
    Ocean = 0,
    Beach = 1,
    Plains = 2,
    Forest = 3,
    Desert = 4,
    Tundra = 5,
    Snow = 6,
    Mountain = 7,
    /// Reserved for a hydrology pass; never produced by classification.
    River = 8,
}

/// A byte that does not name a [`BiomeType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown biome code: {0}")]
pub struct UnknownBiomeCode(pub u8);

impl BiomeType {
    /// Every variant in code order.
    pub const ALL: [BiomeType; 9] = [
        BiomeType::Ocean,
        BiomeType::Beach,
        BiomeType::Plains,
        BiomeType::Forest,
        BiomeType::Desert,
        BiomeType::Tundra,
        BiomeType::Snow,
        BiomeType::Mountain,
        BiomeType::River,
    ];

    /// The byte stored in a [`super::BiomeGrid`] cell.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            BiomeType::Ocean => "ocean",
            BiomeType::Beach => "beach",
            BiomeType::Plains => "plains",
            BiomeType::Forest => "forest",
            BiomeType::Desert => "desert",
            BiomeType::Tundra => "tundra",
            BiomeType::Snow => "snow",
            BiomeType::Mountain => "mountain",
            BiomeType::River => "river",
        }
    }

    /// Whether the biome is open water.
    pub fn is_water(self) -> bool {
        matches!(self, BiomeType::Ocean | BiomeType::River)
    }
}

impl TryFrom<u8> for BiomeType {
    type Error = UnknownBiomeCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        BiomeType::ALL
            .get(code as usize)
            .copied()
            .ok_or(UnknownBiomeCode(code))
    }
}

impl From<BiomeType> for u8 {
    fn from(biome: BiomeType) -> Self {
        biome.code()
    }
}

impl fmt::Display for BiomeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
