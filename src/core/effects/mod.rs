pub mod params;
pub mod state;
