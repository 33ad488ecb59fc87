//! Thermal and hydraulic erosion over an [`ElevationGrid`].
//!
//! Both models visit interior cells in raster order and move material from a
//! cell to one chosen neighbour, so the sum of all cells is preserved. Border
//! cells are never sources but can receive material.
//!
//! With [`ErosionSweep::InPlace`] later cells see the transfers made earlier in
//! the same pass. [`ErosionSweep::Buffered`] instead decides every transfer from
//! a snapshot taken at the start of the iteration.

use serde::{Deserialize, Serialize};

use crate::elevation::ElevationGrid;

/// Height difference a slope may hold before thermal erosion moves material.
pub const DEFAULT_TALUS_ANGLE: f32 = 0.7;
/// Fraction of the drop to the lowest neighbour carried per hydraulic step.
pub const DEFAULT_HYDRAULIC_STRENGTH: f32 = 0.1;
/// Share of the excess actually transferred by either model.
pub const EROSION_TRANSFER_FACTOR: f32 = 0.5;

/// How an erosion pass reads the cells it is updating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErosionSweep {
    /// Mutate the grid while sweeping; results depend on visit order.
    #[default]
    InPlace,
    /// Read from a per-iteration snapshot and apply all transfers at the end.
    Buffered,
}

/// Erosion settings used by [`crate::TerrainGenerator::generate_detailed`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErosionParams {
    pub talus_angle: f32,
    pub hydraulic_strength: f32,
    pub sweep: ErosionSweep,
}

impl Default for ErosionParams {
    fn default() -> Self {
        Self {
            talus_angle: DEFAULT_TALUS_ANGLE,
            hydraulic_strength: DEFAULT_HYDRAULIC_STRENGTH,
            sweep: ErosionSweep::default(),
        }
    }
}

impl ErosionParams {
    /// Run `thermal_iterations` thermal passes followed by `hydraulic_iterations`
    /// hydraulic passes.
    pub fn apply(
        &self,
        grid: &mut ElevationGrid,
        thermal_iterations: u32,
        hydraulic_iterations: u32,
    ) {
        tracing::debug!(
            thermal_iterations,
            hydraulic_iterations,
            sweep = ?self.sweep,
            "applying erosion"
        );
        grid.apply_thermal_erosion_with(thermal_iterations, self.talus_angle, self.sweep);
        grid.apply_hydraulic_erosion_with(
            hydraulic_iterations,
            self.hydraulic_strength,
            self.sweep,
        );
    }
}

/// A single material transfer: `amount` leaves `from` and lands on `to`.
#[derive(Clone, Copy, Debug)]
struct Transfer {
    from: usize,
    to: usize,
    amount: f32,
}

/// Steepest-drop rule over the 4-neighbours, checked up, down, left, right.
fn thermal_transfer(
    heights: &[f32],
    idx: usize,
    width: usize,
    talus_angle: f32,
) -> Option<Transfer> {
    let h = heights[idx];
    let mut max_diff = 0.0;
    let mut target = idx;

    for n in [idx - width, idx + width, idx - 1, idx + 1] {
        let diff = h - heights[n];
        if diff > max_diff {
            max_diff = diff;
            target = n;
        }
    }

    (max_diff > talus_angle).then(|| Transfer {
        from: idx,
        to: target,
        amount: EROSION_TRANSFER_FACTOR * (max_diff - talus_angle),
    })
}

/// Lowest-neighbour rule over the 8-neighbours, checked row by row.
fn hydraulic_transfer(
    heights: &[f32],
    idx: usize,
    width: usize,
    strength: f32,
) -> Option<Transfer> {
    let h = heights[idx];
    let mut min_height = h;
    let mut target = idx;

    for row in [idx - width, idx, idx + width] {
        for n in [row - 1, row, row + 1] {
            if n == idx {
                continue;
            }
            if heights[n] < min_height {
                min_height = heights[n];
                target = n;
            }
        }
    }

    (target != idx).then(|| Transfer {
        from: idx,
        to: target,
        amount: (h - min_height) * strength * EROSION_TRANSFER_FACTOR,
    })
}

impl ElevationGrid {
    /// Thermal erosion with an in-place sweep.
    pub fn apply_thermal_erosion(&mut self, iterations: u32, talus_angle: f32) {
        self.apply_thermal_erosion_with(iterations, talus_angle, ErosionSweep::InPlace);
    }

    /// Hydraulic erosion with an in-place sweep.
    pub fn apply_hydraulic_erosion(&mut self, iterations: u32, strength: f32) {
        self.apply_hydraulic_erosion_with(iterations, strength, ErosionSweep::InPlace);
    }

    /// Thermal erosion: each interior cell sheds
    /// `0.5 * (drop - talus_angle)` onto its steepest-downhill 4-neighbour
    /// when that drop exceeds `talus_angle`.
    pub fn apply_thermal_erosion_with(
        &mut self,
        iterations: u32,
        talus_angle: f32,
        sweep: ErosionSweep,
    ) {
        self.erode(iterations, sweep, |heights, idx, width| {
            thermal_transfer(heights, idx, width, talus_angle)
        });
    }

    /// Hydraulic erosion: each interior cell sends
    /// `0.5 * strength * (h - lowest)` to its lowest 8-neighbour, if any is lower.
    pub fn apply_hydraulic_erosion_with(
        &mut self,
        iterations: u32,
        strength: f32,
        sweep: ErosionSweep,
    ) {
        self.erode(iterations, sweep, |heights, idx, width| {
            hydraulic_transfer(heights, idx, width, strength)
        });
    }

    fn erode<F>(&mut self, iterations: u32, sweep: ErosionSweep, rule: F)
    where
        F: Fn(&[f32], usize, usize) -> Option<Transfer>,
    {
        let (w, h) = (self.width() as usize, self.height() as usize);
        if w < 3 || h < 3 {
            return;
        }

        let data = self.as_grid_mut().data_mut();
        let mut snapshot = match sweep {
            ErosionSweep::InPlace => Vec::new(),
            ErosionSweep::Buffered => vec![0.0; data.len()],
        };

        for _ in 0..iterations {
            match sweep {
                ErosionSweep::InPlace => {
                    for y in 1..h - 1 {
                        for x in 1..w - 1 {
                            if let Some(t) = rule(data, y * w + x, w) {
                                data[t.from] -= t.amount;
                                data[t.to] += t.amount;
                            }
                        }
                    }
                }
                ErosionSweep::Buffered => {
                    snapshot.copy_from_slice(data);
                    for y in 1..h - 1 {
                        for x in 1..w - 1 {
                            if let Some(t) = rule(&snapshot, y * w + x, w) {
                                data[t.from] -= t.amount;
                                data[t.to] += t.amount;
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{FractalNoise, PerlinNoise};

    const EPSILON: f32 = 1e-5;

    fn spike() -> ElevationGrid {
        let mut grid = ElevationGrid::new(5, 5).unwrap();
        grid.set(2, 2, 10.0);
        grid
    }

    /// 5x3 grid whose middle row climbs 0, 2, 4, 6, 8 between walls of 100.
    fn staircase() -> ElevationGrid {
        let mut grid = ElevationGrid::filled(5, 3, 100.0).unwrap();
        for x in 0..5 {
            grid.set(x, 1, x as f32 * 2.0);
        }
        grid
    }

    fn rough_terrain() -> ElevationGrid {
        let fbm = FractalNoise::with_octaves(PerlinNoise::new(7), 6);
        let mut grid = ElevationGrid::new(32, 32).unwrap();
        grid.generate_from_noise(&fbm, 0.2, 0.0, 0.0);
        grid.normalize(0.0, 4.0);
        grid
    }

    fn assert_close(actual: Option<f32>, expected: f32) {
        let actual = actual.unwrap();
        assert!((actual - expected).abs() < EPSILON, "expected {expected}, got {actual}");
    }

    #[test]
    fn test_thermal_spike_sheds_to_first_steepest_neighbour() {
        let mut grid = spike();
        grid.apply_thermal_erosion(1, DEFAULT_TALUS_ANGLE);

        // All four drops are equal, so "up" wins.
        assert_close(grid.get(2, 2), 5.35);
        assert_close(grid.get(2, 1), 4.65);
        assert_eq!(grid.get(2, 3), Some(0.0));
        assert!((grid.total() - 10.0).abs() < 1e-4);
        assert!(grid.max_adjacent_difference() <= 10.0);
    }

    #[test]
    fn test_thermal_below_talus_is_noop() {
        let mut grid = ElevationGrid::new(6, 6).unwrap();
        for y in 0..6 {
            for x in 0..6 {
                grid.set(x, y, (x + y) as f32 * 0.5);
            }
        }
        let before = grid.clone();
        grid.apply_thermal_erosion(10, DEFAULT_TALUS_ANGLE);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_hydraulic_picks_first_lowest_neighbour() {
        let mut grid = ElevationGrid::filled(3, 3, 0.5).unwrap();
        grid.set(1, 1, 1.0);
        grid.set(0, 0, 0.2);
        grid.set(2, 2, 0.2);
        grid.apply_hydraulic_erosion(1, DEFAULT_HYDRAULIC_STRENGTH);

        assert_close(grid.get(1, 1), 0.96);
        assert_close(grid.get(0, 0), 0.24);
        assert_eq!(grid.get(2, 2), Some(0.2));
    }

    #[test]
    fn test_flat_grid_is_stable() {
        let mut grid = ElevationGrid::filled(8, 8, 0.4).unwrap();
        let before = grid.clone();
        grid.apply_thermal_erosion(5, DEFAULT_TALUS_ANGLE);
        grid.apply_hydraulic_erosion(5, DEFAULT_HYDRAULIC_STRENGTH);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_small_grids_are_untouched() {
        let mut grid = ElevationGrid::new(2, 9).unwrap();
        grid.set(0, 4, 50.0);
        let before = grid.clone();
        grid.apply_thermal_erosion(3, 0.0);
        grid.apply_hydraulic_erosion(3, 1.0);
        assert_eq!(grid, before);

        let mut empty = ElevationGrid::empty();
        empty.apply_thermal_erosion(3, 0.0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_mass_conservation() {
        for sweep in [ErosionSweep::InPlace, ErosionSweep::Buffered] {
            let mut grid = rough_terrain();
            let before = grid.total();
            grid.apply_thermal_erosion_with(20, 0.05, sweep);
            grid.apply_hydraulic_erosion_with(20, 0.5, sweep);
            let after = grid.total();
            assert!(
                (after - before).abs() < 1e-2,
                "{sweep:?}: total drifted from {before} to {after}"
            );
        }
    }

    #[test]
    fn test_buffered_sweep_reads_snapshot() {
        let mut buffered = staircase();
        buffered.apply_thermal_erosion_with(1, DEFAULT_TALUS_ANGLE, ErosionSweep::Buffered);
        assert_close(buffered.get(0, 1), 0.65);
        assert_close(buffered.get(1, 1), 2.0);
        assert_close(buffered.get(2, 1), 4.0);
        assert_close(buffered.get(3, 1), 5.35);
        assert_eq!(buffered.get(4, 1), Some(8.0));

        // In place, cell 1 has already been lowered when cell 2 is visited.
        let mut in_place = staircase();
        in_place.apply_thermal_erosion(1, DEFAULT_TALUS_ANGLE);
        assert_close(in_place.get(1, 1), 2.325);
        assert_close(in_place.get(2, 1), 4.1625);
        assert_close(in_place.get(3, 1), 4.8625);
    }

    #[test]
    fn test_params_apply_uses_configured_sweep() {
        let params = ErosionParams {
            sweep: ErosionSweep::Buffered,
            ..ErosionParams::default()
        };
        let mut via_params = rough_terrain();
        params.apply(&mut via_params, 3, 4);

        let mut direct = rough_terrain();
        direct.apply_thermal_erosion_with(3, DEFAULT_TALUS_ANGLE, ErosionSweep::Buffered);
        direct.apply_hydraulic_erosion_with(4, DEFAULT_HYDRAULIC_STRENGTH, ErosionSweep::Buffered);
        assert_eq!(via_params, direct);
    }

    #[test]
    fn test_zero_iterations_is_noop() {
        let mut grid = rough_terrain();
        let before = grid.clone();
        ErosionParams::default().apply(&mut grid, 0, 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_default_params() {
        let params = ErosionParams::default();
        assert_eq!(params.talus_angle, 0.7);
        assert_eq!(params.hydraulic_strength, 0.1);
        assert_eq!(params.sweep, ErosionSweep::InPlace);
    }
}
