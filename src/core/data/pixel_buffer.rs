use crate::core::data::colour::Colour;
use crate::core::data::surface::SurfaceSize;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} surface",
                    x, y, width, height
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

/// Flat RGBA buffer laid out as `(y * width + x) * 4`, matching the
/// presentation surface. Allocated once and overwritten in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    surface: SurfaceSize,
    buffer: Vec<u8>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(surface: SurfaceSize) -> Self {
        Self {
            surface,
            buffer: vec![0; surface.pixel_count() * BYTES_PER_PIXEL],
        }
    }

    #[must_use]
    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// Fills the `step × step` block whose top-left corner is `(x, y)`,
    /// clipped at the right and bottom edges of the surface.
    pub fn fill_block(
        &mut self,
        x: u32,
        y: u32,
        step: u32,
        colour: Colour,
    ) -> Result<(), PixelBufferError> {
        if !self.surface.contains(x, y) {
            return Err(PixelBufferError::PixelOutsideBounds {
                x,
                y,
                width: self.surface.width(),
                height: self.surface.height(),
            });
        }

        let width = self.surface.width() as usize;
        let x_start = x as usize;
        let x_end = x.saturating_add(step).min(self.surface.width()) as usize;
        let y_end = y.saturating_add(step).min(self.surface.height());
        let rgba = colour.to_rgba();

        for row in y..y_end {
            let row_offset = row as usize * width;
            let start = (row_offset + x_start) * BYTES_PER_PIXEL;
            let end = (row_offset + x_end) * BYTES_PER_PIXEL;

            for pixel in self.buffer[start..end].chunks_exact_mut(BYTES_PER_PIXEL) {
                pixel.copy_from_slice(&rgba);
            }
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if !self.surface.contains(x, y) {
            return None;
        }

        let index = (y as usize * self.surface.width() as usize + x as usize) * BYTES_PER_PIXEL;
        let mut rgba = [0; BYTES_PER_PIXEL];
        rgba.copy_from_slice(&self.buffer[index..index + BYTES_PER_PIXEL]);

        Some(rgba)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_buffer(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::new(SurfaceSize::new(width, height).unwrap())
    }

    #[test]
    fn test_new_creates_zeroed_rgba_buffer() {
        let buffer = create_buffer(10, 10);

        assert_eq!(buffer.buffer_size(), 400); // 10 * 10 * 4
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_single_pixel_block_uses_row_major_rgba_layout() {
        let mut buffer = create_buffer(3, 3);
        buffer.fill_block(1, 1, 1, Colour::grey(200)).unwrap();

        // (1 * 3 + 1) * 4 = 16
        assert_eq!(&buffer.buffer()[16..20], &[200, 200, 200, 255]);
        assert_eq!(buffer.pixel(1, 1), Some([200, 200, 200, 255]));
        assert_eq!(buffer.pixel(0, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_block_outside_bounds() {
        let mut buffer = create_buffer(3, 3);
        let result = buffer.fill_block(3, 1, 1, Colour::BLACK);

        assert_eq!(
            result,
            Err(PixelBufferError::PixelOutsideBounds {
                x: 3,
                y: 1,
                width: 3,
                height: 3
            })
        );
    }

    #[test]
    fn test_fill_block_covers_whole_block() {
        let mut buffer = create_buffer(8, 8);
        buffer.fill_block(4, 4, 4, Colour::grey(9)).unwrap();

        for y in 0..8 {
            for x in 0..8 {
                let expected = if x >= 4 && y >= 4 {
                    [9, 9, 9, 255]
                } else {
                    [0, 0, 0, 0]
                };
                assert_eq!(buffer.pixel(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_fill_block_clips_at_surface_edges() {
        let mut buffer = create_buffer(6, 5);
        buffer.fill_block(4, 4, 4, Colour::grey(50)).unwrap();

        assert_eq!(buffer.pixel(4, 4), Some([50, 50, 50, 255]));
        assert_eq!(buffer.pixel(5, 4), Some([50, 50, 50, 255]));
        assert_eq!(buffer.pixel(3, 4), Some([0, 0, 0, 0]));
        assert_eq!(buffer.pixel(5, 3), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_pixel_outside_bounds_is_none() {
        let buffer = create_buffer(2, 2);

        assert_eq!(buffer.pixel(2, 0), None);
        assert_eq!(buffer.pixel(0, 2), None);
    }
}
