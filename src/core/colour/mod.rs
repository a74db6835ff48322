pub mod colourize;
pub mod palette;
pub mod psychedelic;
