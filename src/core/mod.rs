pub mod animation;
pub mod colour;
pub mod data;
pub mod effects;
pub mod filters;
pub mod fractals;
pub mod intent;
pub mod mapping;
pub mod oracle;
pub mod render;
