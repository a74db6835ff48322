use crate::core::data::grid_size::GridSize;

/// Float grid receiving the output of the convolution filters, same shape
/// discipline as the iteration grid it is derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeGrid {
    size: GridSize,
    values: Vec<f32>,
}

impl EdgeGrid {
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            values: vec![0.0; size.pixel_count()],
        }
    }

    pub fn resize_if_needed(&mut self, size: GridSize) -> bool {
        if self.size == size {
            return false;
        }

        self.size = size;
        self.values = vec![0.0; size.pixel_count()];
        true
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }

    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.values[(y as usize) * (self.size.width() as usize) + (x as usize)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let grid = EdgeGrid::new(GridSize::new(60, 50));

        assert_eq!(grid.values().len(), 3000);
        assert!(grid.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_resize_if_needed() {
        let mut grid = EdgeGrid::new(GridSize::new(60, 50));

        assert!(!grid.resize_if_needed(GridSize::new(60, 50)));
        assert!(grid.resize_if_needed(GridSize::new(50, 60)));
        assert_eq!(grid.values().len(), 3000);
    }
}
