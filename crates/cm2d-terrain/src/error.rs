//! Terrain generation error types.

/// Precondition failures reported by the terrain pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TerrainError {
    /// A grid with a zero dimension was requested or supplied.
    #[error("grid has a zero dimension: {width}x{height}")]
    EmptyGrid {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// Two grids that must line up cell for cell have different shapes.
    #[error("grid dimensions {found:?} do not match expected {expected:?}")]
    DimensionMismatch {
        /// `(width, height)` the operation requires.
        expected: (u32, u32),
        /// `(width, height)` that was supplied.
        found: (u32, u32),
    },
}
