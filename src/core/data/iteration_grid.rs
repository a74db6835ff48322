use crate::core::data::grid_size::GridSize;

/// Owned grid of per-pixel escape-time counts, row-major.
///
/// The backing storage is reallocated only when the grid dimensions change;
/// successive renders at the same size overwrite it in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationGrid {
    size: GridSize,
    counts: Vec<u32>,
}

impl IterationGrid {
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            counts: vec![0; size.pixel_count()],
        }
    }

    /// Reallocates the backing storage if `size` differs from the current
    /// dimensions. Returns true when a reallocation happened, so callers can
    /// keep companion buffers in step.
    pub fn resize_if_needed(&mut self, size: GridSize) -> bool {
        if self.size == size {
            return false;
        }

        self.size = size;
        self.counts = vec![0; size.pixel_count()];
        true
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn counts_mut(&mut self) -> &mut [u32] {
        &mut self.counts
    }

    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.counts[(y as usize) * (self.size.width() as usize) + (x as usize)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let grid = IterationGrid::new(GridSize::new(60, 50));

        assert_eq!(grid.counts().len(), 3000);
        assert!(grid.counts().iter().all(|&n| n == 0));
    }

    #[test]
    fn test_resize_if_needed_same_size_keeps_contents() {
        let size = GridSize::new(60, 50);
        let mut grid = IterationGrid::new(size);
        grid.counts_mut()[0] = 42;

        let reallocated = grid.resize_if_needed(size);

        assert!(!reallocated);
        assert_eq!(grid.counts()[0], 42);
    }

    #[test]
    fn test_resize_if_needed_new_size_reallocates() {
        let mut grid = IterationGrid::new(GridSize::new(60, 50));
        grid.counts_mut()[0] = 42;

        let reallocated = grid.resize_if_needed(GridSize::new(80, 50));

        assert!(reallocated);
        assert_eq!(grid.counts().len(), 4000);
        assert_eq!(grid.counts()[0], 0);
    }

    #[test]
    fn test_get_indexes_row_major() {
        let mut grid = IterationGrid::new(GridSize::new(60, 50));
        grid.counts_mut()[60 + 2] = 7; // row 1, column 2

        assert_eq!(grid.get(2, 1), 7);
    }
}
