pub mod colour;
pub mod complex;
pub mod edge_grid;
pub mod grid_size;
pub mod iteration_grid;
pub mod pixel_buffer;
pub mod viewport;
