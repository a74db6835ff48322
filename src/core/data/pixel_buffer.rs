use crate::core::data::colour::Colour;
use crate::core::data::grid_size::GridSize;

/// Row-major RGB byte buffer at compute-grid resolution.
///
/// Kept in step with [`crate::core::data::iteration_grid::IterationGrid`]:
/// whenever the grid reallocates on a dimension change, this buffer must be
/// resized through the same handle so a reader never observes a shape
/// mismatch between the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    size: GridSize,
    bytes: Vec<u8>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            bytes: vec![0; size.pixel_count() * 3],
        }
    }

    /// Reallocates if `size` differs from the current dimensions.
    pub fn resize_if_needed(&mut self, size: GridSize) -> bool {
        if self.size == size {
            return false;
        }

        self.size = size;
        self.bytes = vec![0; size.pixel_count() * 3];
        true
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) {
        let index = ((y as usize) * (self.size.width() as usize) + (x as usize)) * 3;
        self.bytes[index] = colour.r;
        self.bytes[index + 1] = colour.g;
        self.bytes[index + 2] = colour.b;
    }

    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Colour {
        let index = ((y as usize) * (self.size.width() as usize) + (x as usize)) * 3;
        Colour {
            r: self.bytes[index],
            g: self.bytes[index + 1],
            b: self.bytes[index + 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed_rgb() {
        let buffer = PixelBuffer::new(GridSize::new(60, 50));

        assert_eq!(buffer.bytes().len(), 60 * 50 * 3);
        assert!(buffer.bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_set_and_get_pixel() {
        let mut buffer = PixelBuffer::new(GridSize::new(60, 50));
        let colour = Colour {
            r: 10,
            g: 20,
            b: 30,
        };

        buffer.set_pixel(3, 2, colour);

        assert_eq!(buffer.get_pixel(3, 2), colour);
        let index = (2 * 60 + 3) * 3;
        assert_eq!(&buffer.bytes()[index..index + 3], &[10, 20, 30]);
    }

    #[test]
    fn test_resize_if_needed_tracks_grid_shape() {
        let mut buffer = PixelBuffer::new(GridSize::new(60, 50));

        assert!(!buffer.resize_if_needed(GridSize::new(60, 50)));
        assert!(buffer.resize_if_needed(GridSize::new(100, 80)));
        assert_eq!(buffer.bytes().len(), 100 * 80 * 3);
    }
}
