//! A 2D debug image represented as a flat array of RGBA pixels.

use hashbrown::HashSet;

/// A debug raster stored as row-major RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DebugImage {
    width: u32,
    height: u32,
    /// Length = `width * height * 4`.
    pixels: Vec<u8>,
}

impl DebugImage {
    /// Create a transparent black image with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| (y as usize * self.width as usize + x as usize) * 4)
    }

    /// Set a pixel's RGBA value. Returns `false` when out of range.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) -> bool {
        match self.offset(x, y) {
            Some(idx) => {
                self.pixels[idx..idx + 4].copy_from_slice(&rgba);
                true
            }
            None => false,
        }
    }

    /// A pixel's RGBA value, or `None` when out of range.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let idx = self.offset(x, y)?;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(rgba)
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw RGBA bytes, suitable for `image::save_buffer` with `Rgba8`.
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// Count the number of unique colors (ignoring alpha) in the image.
    pub fn unique_color_count(&self) -> usize {
        self.pixels
            .chunks_exact(4)
            .map(|px| (px[0], px[1], px[2]))
            .collect::<HashSet<_>>()
            .len()
    }
}
