pub mod write_ppm;
