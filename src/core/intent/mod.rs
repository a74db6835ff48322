pub mod generator;
pub mod view_params;
