pub mod controllers;
pub mod core;
pub mod storage;

pub use crate::controllers::render_intent::{export_intent_controller, render_intent_controller};
pub use crate::core::fractals::family::FractalKind;
pub use crate::core::oracle::oracle_value;
pub use crate::core::render::session::RenderSession;
