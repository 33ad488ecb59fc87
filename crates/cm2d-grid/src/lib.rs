//! Generic 2D grid storage shared by the bitmap and terrain layers.
//!
//! [`Grid`] is a flat, row-major buffer with bounds-checked cell access.
//! Out-of-range reads return `None` and out-of-range writes are ignored, so
//! callers never panic on a bad coordinate.

/// A row-major 2D grid of `T` cells.
///
/// A grid with either dimension equal to zero is *uncreated*: it holds no
/// cells and every accessor reports out-of-range.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    width: u32,
    height: u32,
    data: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    /// Creates an uncreated (empty) grid.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            data: Vec::new(),
        }
    }

    /// Creates a grid of `T::default()` cells, or `None` if a dimension is zero.
    pub fn with_size(width: u32, height: u32) -> Option<Self> {
        Self::filled(width, height, T::default())
    }

    /// Creates a grid with every cell set to `value`, or `None` if a dimension is zero.
    pub fn filled(width: u32, height: u32, value: T) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self {
            width,
            height,
            data: vec![value; width as usize * height as usize],
        })
    }

    /// Builds a grid from an existing row-major buffer.
    ///
    /// Returns `None` if a dimension is zero or `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<T>) -> Option<Self> {
        if width == 0 || height == 0 || data.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// (Re)allocates the grid with `width * height` default cells.
    ///
    /// Returns `false` and leaves the grid empty if a dimension is zero.
    pub fn create(&mut self, width: u32, height: u32) -> bool {
        match Self::with_size(width, height) {
            Some(grid) => {
                *self = grid;
                true
            }
            None => {
                *self = Self::empty();
                false
            }
        }
    }

    /// Returns the cell at `(x, y)`, or `None` when out of range.
    pub fn get(&self, x: u32, y: u32) -> Option<T> {
        self.index_of(x, y).map(|idx| self.data[idx])
    }

    /// Sets the cell at `(x, y)`. Returns `false` when out of range.
    pub fn set(&mut self, x: u32, y: u32, value: T) -> bool {
        match self.get_mut(x, y) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Sets every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

impl<T> Grid<T> {
    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` for an uncreated grid.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat index of `(x, y)`, or `None` when out of range.
    #[inline]
    pub fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            tracing::trace!(
                "Grid access out of bounds: ({x}, {y}) in {}x{}",
                self.width,
                self.height
            );
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Mutable reference to the cell at `(x, y)`, or `None` when out of range.
    pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut T> {
        let idx = self.index_of(x, y)?;
        Some(&mut self.data[idx])
    }

    /// Row-major cell buffer.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable row-major cell buffer.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // `chunks_exact(0)` panics, and an empty grid has no rows anyway.
        let width = (self.width as usize).max(1);
        self.data.chunks_exact(width)
    }

    /// Returns `true` if both grids have the same dimensions.
    pub fn same_shape<U>(&self, other: &Grid<U>) -> bool {
        self.dimensions() == other.dimensions()
    }
}

impl<T: Copy + Default> Default for Grid<T> {
    fn default() -> Self {
        Self::empty()
    }
}
