//! Float elevation grid: noise sampling, normalization, and slope derivation.
//!
//! [`ElevationGrid`] also carries the auxiliary temperature and moisture
//! fields and slope maps, since all of them are plain float grids.
//! Erosion passes live in [`crate::erosion`].

use cm2d_grid::Grid;

use crate::noise::NoiseGenerator;

/// Ranges narrower than this are treated as flat by [`ElevationGrid::normalize`].
pub const MIN_NORMALIZE_RANGE: f32 = 0.0001;

/// A row-major grid of `f32` heights.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElevationGrid {
    grid: Grid<f32>,
}

impl ElevationGrid {
    /// An uncreated grid. Every operation on it is a no-op.
    pub fn empty() -> Self {
        Self { grid: Grid::empty() }
    }

    /// A zero-filled grid, or `None` if a dimension is zero.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Grid::with_size(width, height).map(Self::from_grid)
    }

    /// A grid with every cell set to `value`, or `None` if a dimension is zero.
    pub fn filled(width: u32, height: u32, value: f32) -> Option<Self> {
        Grid::filled(width, height, value).map(Self::from_grid)
    }

    /// Wrap an existing float grid.
    pub fn from_grid(grid: Grid<f32>) -> Self {
        Self { grid }
    }

    /// (Re)allocate as a zero-filled `width x height` grid.
    ///
    /// Returns `false` and leaves the grid empty if a dimension is zero.
    pub fn create(&mut self, width: u32, height: u32) -> bool {
        self.grid.create(width, height)
    }

    /// The underlying grid, for rendering and export layers.
    pub fn as_grid(&self) -> &Grid<f32> {
        &self.grid
    }

    pub fn as_grid_mut(&mut self) -> &mut Grid<f32> {
        &mut self.grid
    }

    pub fn into_grid(self) -> Grid<f32> {
        self.grid
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

    /// Height at `(x, y)`, or `None` when out of range.
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        self.grid.get(x, y)
    }

    /// Set the height at `(x, y)`. Returns `false` when out of range.
    pub fn set(&mut self, x: u32, y: u32, value: f32) -> bool {
        self.grid.set(x, y, value)
    }

    /// Row-major heights.
    pub fn data(&self) -> &[f32] {
        self.grid.data()
    }

    /// Smallest and largest cell values, or `None` for an empty grid.
    pub fn min_max(&self) -> Option<(f32, f32)> {
        let first = *self.grid.data().first()?;
        Some(
            self.grid
                .data()
                .iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        )
    }

    /// Sum of all cells, accumulated in `f64`.
    pub fn total(&self) -> f64 {
        self.grid.data().iter().map(|&v| v as f64).sum()
    }

    /// Largest absolute height difference between 4-adjacent cells.
    pub fn max_adjacent_difference(&self) -> f32 {
        let (w, h) = (self.width() as usize, self.height() as usize);
        let data = self.grid.data();
        let mut max_diff = 0.0f32;
        for y in 0..h {
            for x in 0..w {
                let v = data[y * w + x];
                if x + 1 < w {
                    max_diff = max_diff.max((v - data[y * w + x + 1]).abs());
                }
                if y + 1 < h {
                    max_diff = max_diff.max((v - data[(y + 1) * w + x]).abs());
                }
            }
        }
        max_diff
    }

    /// Fill every cell with `noise.generate((x + offset_x) * scale, (y + offset_y) * scale)`.
    ///
    /// Cells are independent of each other. No-op on an empty grid.
    pub fn generate_from_noise<N: NoiseGenerator + ?Sized>(
        &mut self,
        noise: &N,
        scale: f32,
        offset_x: f32,
        offset_y: f32,
    ) {
        if self.grid.is_empty() {
            return;
        }

        let width = self.grid.width() as usize;
        for (idx, cell) in self.grid.data_mut().iter_mut().enumerate() {
            let x = (idx % width) as f32;
            let y = (idx / width) as f32;
            *cell = noise.generate((x + offset_x) * scale, (y + offset_y) * scale);
        }
    }

    /// Linearly remap every cell from the current `[min, max]` into `[min_value, max_value]`.
    ///
    /// A current range below [`MIN_NORMALIZE_RANGE`] is replaced by `1.0`, so a
    /// flat grid collapses onto `min_value` instead of dividing by zero.
    /// No-op on an empty grid.
    pub fn normalize(&mut self, min_value: f32, max_value: f32) {
        let Some((current_min, current_max)) = self.min_max() else {
            return;
        };

        let mut range = current_max - current_min;
        if range < MIN_NORMALIZE_RANGE {
            tracing::debug!(range, "normalizing a flat grid, substituting unit range");
            range = 1.0;
        }

        let target_range = max_value - min_value;
        for v in self.grid.data_mut() {
            *v = min_value + (*v - current_min) / range * target_range;
        }
    }

    /// Per-cell slope magnitude, normalized to `[0, 1]`.
    ///
    /// Uses central differences; the x term is zero on the first and last
    /// columns and the y term on the first and last rows. Returns an empty
    /// grid when this one is empty.
    pub fn calculate_slope_map(&self) -> ElevationGrid {
        let (w, h) = (self.width() as usize, self.height() as usize);
        let Some(mut slope) = ElevationGrid::new(self.width(), self.height()) else {
            return ElevationGrid::empty();
        };

        let data = self.grid.data();
        let out = slope.grid.data_mut();
        for y in 0..h {
            for x in 0..w {
                let dx = if x > 0 && x + 1 < w {
                    (data[y * w + x + 1] - data[y * w + x - 1]) * 0.5
                } else {
                    0.0
                };
                let dy = if y > 0 && y + 1 < h {
                    (data[(y + 1) * w + x] - data[(y - 1) * w + x]) * 0.5
                } else {
                    0.0
                };
                out[y * w + x] = (dx * dx + dy * dy).sqrt();
            }
        }

        slope.normalize(0.0, 1.0);
        slope
    }
}

impl From<Grid<f32>> for ElevationGrid {
    fn from(grid: Grid<f32>) -> Self {
        Self::from_grid(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{FractalNoise, PerlinNoise, SimplexNoise};

    const EPSILON: f32 = 1e-5;

    fn ramp(width: u32, height: u32, step: f32) -> ElevationGrid {
        let mut grid = ElevationGrid::new(width, height).unwrap();
        for y in 0..height {
            for x in 0..width {
                grid.set(x, y, x as f32 * step);
            }
        }
        grid
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(ElevationGrid::new(0, 5).is_none());
        let mut grid = ElevationGrid::empty();
        assert!(!grid.create(5, 0));
        assert!(grid.create(5, 4));
        assert_eq!(grid.dimensions(), (5, 4));
        assert_eq!(grid.data().len(), 20);
    }

    #[test]
    fn test_generate_from_noise_samples_scaled_coordinates() {
        let noise = SimplexNoise::new(3);
        let mut grid = ElevationGrid::new(8, 6).unwrap();
        grid.generate_from_noise(&noise, 0.1, 2.0, -1.0);

        for y in 0..6 {
            for x in 0..8 {
                let expected = noise.generate((x as f32 + 2.0) * 0.1, (y as f32 - 1.0) * 0.1);
                assert_eq!(grid.get(x, y), Some(expected));
            }
        }
    }

    #[test]
    fn test_generate_on_empty_grid_is_noop() {
        let mut grid = ElevationGrid::empty();
        grid.generate_from_noise(&PerlinNoise::new(1), 1.0, 0.0, 0.0);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_normalize_hits_target_range() {
        let fbm = FractalNoise::with_octaves(PerlinNoise::new(42), 6);
        let mut grid = ElevationGrid::new(64, 64).unwrap();
        grid.generate_from_noise(&fbm, 0.05, 0.0, 0.0);
        grid.normalize(0.0, 1.0);

        let (lo, hi) = grid.min_max().unwrap();
        assert!(lo.abs() < EPSILON, "min was {lo}");
        assert!((hi - 1.0).abs() < EPSILON, "max was {hi}");
    }

    #[test]
    fn test_normalize_to_arbitrary_range() {
        let mut grid = ramp(5, 1, 1.0);
        grid.normalize(-1.0, 3.0);
        let values: Vec<f32> = grid.data().to_vec();
        assert_eq!(values, vec![-1.0, 0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_normalize_flat_grid_uses_unit_range() {
        let mut grid = ElevationGrid::filled(4, 4, 0.2).unwrap();
        grid.normalize(0.0, 1.0);
        assert!(grid.data().iter().all(|&v| v == 0.0));

        let mut grid = ElevationGrid::filled(4, 4, 5.0).unwrap();
        grid.normalize(0.25, 0.75);
        assert!(grid.data().iter().all(|&v| v == 0.25));
    }

    #[test]
    fn test_normalize_empty_is_noop() {
        let mut grid = ElevationGrid::empty();
        grid.normalize(0.0, 1.0);
        assert!(grid.min_max().is_none());
    }

    #[test]
    fn test_slope_of_ramp() {
        let slope = ramp(5, 5, 0.1).calculate_slope_map();
        for y in 0..5 {
            assert_eq!(slope.get(0, y), Some(0.0));
            assert_eq!(slope.get(4, y), Some(0.0));
            for x in 1..4 {
                let v = slope.get(x, y).unwrap();
                assert!((v - 1.0).abs() < EPSILON, "slope at ({x}, {y}) was {v}");
            }
        }
    }

    #[test]
    fn test_slope_of_flat_grid_is_zero() {
        let slope = ElevationGrid::filled(6, 6, 0.5).unwrap().calculate_slope_map();
        assert!(slope.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_slope_of_empty_grid_is_empty() {
        assert!(ElevationGrid::empty().calculate_slope_map().is_empty());
    }

    #[test]
    fn test_max_adjacent_difference() {
        let mut grid = ElevationGrid::new(3, 3).unwrap();
        grid.set(1, 1, 2.0);
        grid.set(2, 2, -1.0);
        assert_eq!(grid.max_adjacent_difference(), 2.0);
    }
}
