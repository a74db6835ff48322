pub mod render_intent;
