//! Per-cell biome grid.

use cm2d_grid::Grid;
use hashbrown::HashMap;

use super::{BiomeThresholds, BiomeType};
use crate::elevation::ElevationGrid;
use crate::error::TerrainError;

/// Climate value assumed where no temperature or moisture field is supplied.
const NEUTRAL_CLIMATE: f32 = 0.5;

/// A row-major grid of [`BiomeType`] codes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BiomeGrid {
    grid: Grid<u8>,
}

impl BiomeGrid {
    /// An uncreated grid.
    pub fn empty() -> Self {
        Self { grid: Grid::empty() }
    }

    /// An all-Ocean grid, or `None` if a dimension is zero.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Grid::filled(width, height, BiomeType::Ocean.code()).map(|grid| Self { grid })
    }

    /// (Re)allocate as an all-Ocean `width x height` grid.
    pub fn create(&mut self, width: u32, height: u32) -> bool {
        self.grid.create(width, height)
    }

    /// Classify every cell of `elevation` with the default thresholds.
    ///
    /// Missing temperature or moisture fields read as `0.5` everywhere.
    ///
    /// # Errors
    ///
    /// [`TerrainError::EmptyGrid`] if `elevation` is uncreated, and
    /// [`TerrainError::DimensionMismatch`] if a supplied climate field has a
    /// different shape.
    pub fn classify(
        elevation: &ElevationGrid,
        temperature: Option<&ElevationGrid>,
        moisture: Option<&ElevationGrid>,
    ) -> Result<Self, TerrainError> {
        Self::classify_with(&BiomeThresholds::default(), elevation, temperature, moisture)
    }

    /// [`classify`](Self::classify) with a custom threshold table.
    pub fn classify_with(
        thresholds: &BiomeThresholds,
        elevation: &ElevationGrid,
        temperature: Option<&ElevationGrid>,
        moisture: Option<&ElevationGrid>,
    ) -> Result<Self, TerrainError> {
        let (width, height) = elevation.dimensions();
        let mut biomes =
            Self::new(width, height).ok_or(TerrainError::EmptyGrid { width, height })?;

        for field in [temperature, moisture].into_iter().flatten() {
            if !field.as_grid().same_shape(elevation.as_grid()) {
                return Err(TerrainError::DimensionMismatch {
                    expected: (width, height),
                    found: field.dimensions(),
                });
            }
        }

        let climate = |field: Option<&ElevationGrid>, idx: usize| {
            field.map_or(NEUTRAL_CLIMATE, |f| f.data()[idx])
        };
        for (idx, (cell, &h)) in biomes
            .grid
            .data_mut()
            .iter_mut()
            .zip(elevation.data())
            .enumerate()
        {
            let t = climate(temperature, idx);
            let m = climate(moisture, idx);
            *cell = thresholds.classify(h, t, m).code();
        }

        Ok(biomes)
    }

    /// The underlying code grid, for rendering and export layers.
    pub fn as_grid(&self) -> &Grid<u8> {
        &self.grid
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.grid.dimensions()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Biome at `(x, y)`, or `None` when out of range.
    pub fn get_biome(&self, x: u32, y: u32) -> Option<BiomeType> {
        self.grid
            .get(x, y)
            .and_then(|code| BiomeType::try_from(code).ok())
    }

    /// Set the biome at `(x, y)`. Returns `false` when out of range.
    pub fn set_biome(&mut self, x: u32, y: u32, biome: BiomeType) -> bool {
        self.grid.set(x, y, biome.code())
    }

    /// Biomes in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = BiomeType> + '_ {
        self.grid
            .data()
            .iter()
            .filter_map(|&code| BiomeType::try_from(code).ok())
    }

    /// Number of cells per biome. Biomes that do not occur are absent.
    pub fn histogram(&self) -> HashMap<BiomeType, usize> {
        let mut counts = HashMap::new();
        for biome in self.iter() {
            *counts.entry(biome).or_insert(0) += 1;
        }
        counts
    }

    /// Fraction of cells holding `biome`, or `0.0` for an empty grid.
    pub fn coverage(&self, biome: BiomeType) -> f32 {
        if self.grid.is_empty() {
            return 0.0;
        }
        let count = self.iter().filter(|&b| b == biome).count();
        count as f32 / self.grid.len() as f32
    }
}
