use crate::core::data::edge_grid::EdgeGrid;
use crate::core::data::iteration_grid::IterationGrid;

/// The two fixed 3×3 kernels that can replace the raw iteration grid as the
/// coloring source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeFilter {
    /// Gradient magnitude from the standard horizontal/vertical Sobel pair.
    Sobel,
    /// Weighted sum with the fixed asymmetric kernel
    /// `[[-2,-1,0],[-1,1,1],[0,1,2]]`.
    Emboss,
}

/// Resolves the neon/emboss toggle pair to at most one filter.
///
/// When both toggles are set, Sobel takes precedence and emboss is ignored;
/// the two are never blended.
#[must_use]
pub fn select_edge_filter(neon_edges: bool, emboss: bool) -> Option<EdgeFilter> {
    if neon_edges {
        Some(EdgeFilter::Sobel)
    } else if emboss {
        Some(EdgeFilter::Emboss)
    } else {
        None
    }
}

/// Convolves the iteration grid into `output`, resizing it to match first.
/// The 1-pixel border is copied from the input unprocessed.
pub fn apply_edge_filter(input: &IterationGrid, output: &mut EdgeGrid, filter: EdgeFilter) {
    output.resize_if_needed(input.size());

    let width = input.size().width() as usize;
    let height = input.size().height() as usize;
    let counts = input.counts();
    let values = output.values_mut();

    // Closure over the row-major input, f64 for the kernel arithmetic.
    let at = |x: usize, y: usize| counts[y * width + x] as f64;

    for y in 0..height {
        for x in 0..width {
            let on_border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
            values[y * width + x] = if on_border {
                at(x, y) as f32
            } else {
                match filter {
                    EdgeFilter::Sobel => {
                        let gx = (at(x + 1, y - 1) + 2.0 * at(x + 1, y) + at(x + 1, y + 1))
                            - (at(x - 1, y - 1) + 2.0 * at(x - 1, y) + at(x - 1, y + 1));
                        let gy = (at(x - 1, y - 1) + 2.0 * at(x, y - 1) + at(x + 1, y - 1))
                            - (at(x - 1, y + 1) + 2.0 * at(x, y + 1) + at(x + 1, y + 1));
                        (gx * gx + gy * gy).sqrt() as f32
                    }
                    EdgeFilter::Emboss => {
                        (-2.0 * at(x - 1, y - 1) - at(x, y - 1) - at(x - 1, y)
                            + at(x, y)
                            + at(x + 1, y)
                            + at(x, y + 1)
                            + 2.0 * at(x + 1, y + 1)) as f32
                    }
                }
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::grid_size::GridSize;

    fn uniform_grid(value: u32) -> IterationGrid {
        let mut grid = IterationGrid::new(GridSize::new(50, 50));
        grid.counts_mut().fill(value);
        grid
    }

    #[test]
    fn test_sobel_wins_when_both_toggles_set() {
        assert_eq!(select_edge_filter(true, true), Some(EdgeFilter::Sobel));
        assert_eq!(select_edge_filter(false, true), Some(EdgeFilter::Emboss));
        assert_eq!(select_edge_filter(true, false), Some(EdgeFilter::Sobel));
        assert_eq!(select_edge_filter(false, false), None);
    }

    #[test]
    fn test_sobel_of_uniform_field_is_zero_inside() {
        let grid = uniform_grid(7);
        let mut edges = EdgeGrid::new(GridSize::new(50, 50));
        apply_edge_filter(&grid, &mut edges, EdgeFilter::Sobel);

        assert_eq!(edges.get(10, 10), 0.0);
        assert_eq!(edges.get(25, 40), 0.0);
    }

    #[test]
    fn test_emboss_of_uniform_field_is_input_inside() {
        // Kernel weights sum to 1, so a flat field maps to itself.
        let grid = uniform_grid(9);
        let mut edges = EdgeGrid::new(GridSize::new(50, 50));
        apply_edge_filter(&grid, &mut edges, EdgeFilter::Emboss);

        assert_eq!(edges.get(10, 10), 9.0);
    }

    #[test]
    fn test_border_copied_from_input() {
        let grid = uniform_grid(5);
        let mut edges = EdgeGrid::new(GridSize::new(50, 50));
        apply_edge_filter(&grid, &mut edges, EdgeFilter::Sobel);

        assert_eq!(edges.get(0, 0), 5.0);
        assert_eq!(edges.get(49, 49), 5.0);
        assert_eq!(edges.get(0, 25), 5.0);
    }

    #[test]
    fn test_sobel_detects_vertical_step() {
        let size = GridSize::new(50, 50);
        let mut grid = IterationGrid::new(size);
        for y in 0..50usize {
            for x in 0..50usize {
                grid.counts_mut()[y * 50 + x] = if x < 25 { 0 } else { 10 };
            }
        }

        let mut edges = EdgeGrid::new(size);
        apply_edge_filter(&grid, &mut edges, EdgeFilter::Sobel);

        // Strong response at the step, none in the flat regions.
        assert!(edges.get(25, 25) > 0.0);
        assert_eq!(edges.get(10, 25), 0.0);
        assert_eq!(edges.get(40, 25), 0.0);
    }

    #[test]
    fn test_output_resized_to_input_shape() {
        let grid = uniform_grid(1);
        let mut edges = EdgeGrid::new(GridSize::new(80, 60));
        apply_edge_filter(&grid, &mut edges, EdgeFilter::Emboss);

        assert_eq!(edges.size(), grid.size());
    }
}
