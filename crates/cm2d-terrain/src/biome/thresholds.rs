//! Threshold-table biome classification.

use serde::{Deserialize, Serialize};

use super::BiomeType;

/// Cut points of the biome decision table.
///
/// Evaluated top to bottom, first match wins:
///
/// | condition                                    | biome                 |
/// |----------------------------------------------|-----------------------|
/// | `h < ocean_max`                              | Ocean                 |
/// | `h < beach_max`                              | Beach                 |
/// | `h > mountain_min`                           | Mountain              |
/// | `h > highland_min`                           | Tundra if `t > highland_warm_min`, else Snow |
/// | `t < cold_max`                               | Tundra                |
/// | `t > hot_min`                                | Forest if `m > hot_wet_min`, else Desert |
/// | `m > forest_moisture_min`                    | Forest                |
/// | otherwise                                    | Plains                |
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiomeThresholds {
    pub ocean_max: f32,
    pub beach_max: f32,
    pub mountain_min: f32,
    pub highland_min: f32,
    /// Highland temperature above which the cap is Tundra rather than Snow.
    pub highland_warm_min: f32,
    pub cold_max: f32,
    pub hot_min: f32,
    /// Moisture above which hot lowland is Forest rather than Desert.
    pub hot_wet_min: f32,
    /// Moisture above which temperate lowland is Forest rather than Plains.
    pub forest_moisture_min: f32,
}

impl Default for BiomeThresholds {
    fn default() -> Self {
        Self {
            ocean_max: 0.3,
            beach_max: 0.35,
            mountain_min: 0.75,
            highland_min: 0.7,
            highland_warm_min: 0.5,
            cold_max: 0.3,
            hot_min: 0.7,
            hot_wet_min: 0.5,
            forest_moisture_min: 0.6,
        }
    }
}

impl BiomeThresholds {
    /// Classify one cell.
    pub fn classify(&self, height: f32, temperature: f32, moisture: f32) -> BiomeType {
        if height < self.ocean_max {
            BiomeType::Ocean
        } else if height < self.beach_max {
            BiomeType::Beach
        } else if height > self.mountain_min {
            BiomeType::Mountain
        } else if height > self.highland_min {
            if temperature > self.highland_warm_min {
                BiomeType::Tundra
            } else {
                BiomeType::Snow
            }
        } else if temperature < self.cold_max {
            BiomeType::Tundra
        } else if temperature > self.hot_min {
            if moisture > self.hot_wet_min {
                BiomeType::Forest
            } else {
                BiomeType::Desert
            }
        } else if moisture > self.forest_moisture_min {
            BiomeType::Forest
        } else {
            BiomeType::Plains
        }
    }
}

/// Classify one cell with the default [`BiomeThresholds`].
pub fn classify_biome(height: f32, temperature: f32, moisture: f32) -> BiomeType {
    BiomeThresholds::default().classify(height, temperature, moisture)
}
