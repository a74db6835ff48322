use rayon::prelude::*;

use crate::core::data::complex::Complex;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::fractals::family::FractalFamily;
use crate::core::mapping::viewport_mapper::PlaneBounds;

/// Squared escape radius: a point has escaped once `|z|² > 4`.
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates `z ← z² + c` from `z = 0` with `c` the pixel coordinate.
#[must_use]
pub fn mandelbrot_iterations(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
        z = z * z + c;
    }

    max_iterations
}

/// Iterates `z ← z² + c` with a fixed `c` and `z` starting at the pixel
/// coordinate.
#[must_use]
pub fn julia_iterations(z0: Complex, c: Complex, max_iterations: u32) -> u32 {
    let mut z = z0;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
        z = z * z + c;
    }

    max_iterations
}

/// Iterates `z ← (|Re z| + i|Im z|)² + c` with `c` the pixel coordinate.
#[must_use]
pub fn burning_ship_iterations(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
        let a = z.abs_components();
        z = a * a + c;
    }

    max_iterations
}

/// Fills `grid` with escape-time counts for `family` over `bounds`.
///
/// Rows are independent work items; rayon shards them across the thread
/// pool. Counts depend only on the pixel coordinate, never on execution
/// order, so parallel and sequential runs agree bit for bit.
pub fn compute_escape_grid(
    grid: &mut IterationGrid,
    bounds: PlaneBounds,
    family: FractalFamily,
    max_iterations: u32,
) {
    match family {
        FractalFamily::Mandelbrot => {
            fill_rows(grid, bounds, |c| mandelbrot_iterations(c, max_iterations));
        }
        FractalFamily::Julia { c } => {
            fill_rows(grid, bounds, |z0| julia_iterations(z0, c, max_iterations));
        }
        FractalFamily::BurningShip => {
            fill_rows(grid, bounds, |c| burning_ship_iterations(c, max_iterations));
        }
    }
}

fn fill_rows<F>(grid: &mut IterationGrid, bounds: PlaneBounds, iterate: F)
where
    F: Fn(Complex) -> u32 + Sync,
{
    let width = grid.size().width() as usize;

    grid.counts_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, count) in row.iter_mut().enumerate() {
                let point = bounds.complex_at(x as f64, y as f64);
                *count = iterate(point);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::grid_size::GridSize;
    use crate::core::data::viewport::Viewport;

    fn whole_set_bounds(size: GridSize) -> PlaneBounds {
        let viewport = Viewport::new(3.5, -0.5, 0.0).unwrap();
        PlaneBounds::new(viewport, size)
    }

    #[test]
    fn test_origin_is_interior() {
        assert_eq!(mandelbrot_iterations(Complex::ZERO, 500), 500);
    }

    #[test]
    fn test_far_point_escapes_immediately() {
        let c = Complex {
            real: 10.0,
            imag: 10.0,
        };
        // z = 0 passes the test once, z = c fails on the next check.
        assert_eq!(mandelbrot_iterations(c, 500), 1);
    }

    #[test]
    fn test_counts_bounded_by_budget() {
        let size = GridSize::new(60, 60);
        let mut grid = IterationGrid::new(size);
        compute_escape_grid(&mut grid, whole_set_bounds(size), FractalFamily::Mandelbrot, 50);

        assert!(grid.counts().iter().all(|&n| n <= 50));
    }

    #[test]
    fn test_cardioid_pixel_reaches_max_and_corner_escapes() {
        let size = GridSize::new(100, 100);
        let mut grid = IterationGrid::new(size);
        compute_escape_grid(&mut grid, whole_set_bounds(size), FractalFamily::Mandelbrot, 50);

        // Pixel (50, 50) maps to c = -0.5, inside the main cardioid.
        assert_eq!(grid.get(50, 50), 50);
        // Pixel (0, 0) maps to c ≈ (-2.25, -1.75), far outside.
        assert!(grid.get(0, 0) < 5);
    }

    #[test]
    fn test_julia_escaped_start_point_counts_zero() {
        let z0 = Complex {
            real: 3.0,
            imag: 0.0,
        };
        assert_eq!(julia_iterations(z0, Complex::ZERO, 100), 0);
    }

    #[test]
    fn test_julia_uses_fixed_constant() {
        let c = Complex {
            real: -0.7,
            imag: 0.27015,
        };
        let size = GridSize::new(60, 60);
        let viewport = Viewport::new(3.0, 0.0, 0.0).unwrap();
        let bounds = PlaneBounds::new(viewport, size);

        let mut julia_grid = IterationGrid::new(size);
        compute_escape_grid(&mut julia_grid, bounds, FractalFamily::Julia { c }, 60);

        let mut mandelbrot_grid = IterationGrid::new(size);
        compute_escape_grid(&mut mandelbrot_grid, bounds, FractalFamily::Mandelbrot, 60);

        assert_ne!(julia_grid.counts(), mandelbrot_grid.counts());
    }

    #[test]
    fn test_burning_ship_differs_from_mandelbrot() {
        let size = GridSize::new(80, 80);
        let bounds = whole_set_bounds(size);

        let mut ship_grid = IterationGrid::new(size);
        compute_escape_grid(&mut ship_grid, bounds, FractalFamily::BurningShip, 50);

        let mut mandelbrot_grid = IterationGrid::new(size);
        compute_escape_grid(&mut mandelbrot_grid, bounds, FractalFamily::Mandelbrot, 50);

        assert_ne!(ship_grid.counts(), mandelbrot_grid.counts());
    }

    #[test]
    fn test_burning_ship_asymmetric_about_real_axis() {
        // The absolute-value fold breaks the Mandelbrot mirror symmetry.
        let above = Complex {
            real: -0.5,
            imag: 0.6,
        };
        let below = Complex {
            real: -0.5,
            imag: -0.6,
        };
        let max = 200;
        assert_ne!(
            burning_ship_iterations(above, max),
            burning_ship_iterations(below, max)
        );
    }

    #[test]
    fn test_deterministic_across_runs() {
        let size = GridSize::new(64, 50);
        let bounds = whole_set_bounds(size);

        let mut first = IterationGrid::new(size);
        compute_escape_grid(&mut first, bounds, FractalFamily::BurningShip, 80);

        let mut second = IterationGrid::new(size);
        compute_escape_grid(&mut second, bounds, FractalFamily::BurningShip, 80);

        assert_eq!(first.counts(), second.counts());
    }
}
