use std::path::Path;
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::fractals::family::FractalKind;
use crate::core::render::session::RenderSession;
use crate::storage::write_ppm::write_ppm;

/// Headless render: derive a view from the intent phrase and write one
/// frame as a PPM.
pub fn render_intent_controller(
    intent: &str,
    kind: FractalKind,
    filepath: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let width: i32 = 800;
    let height: i32 = 600;

    let now = Instant::now();
    let mut session = RenderSession::new(width, height, now, StdRng::from_entropy());
    // Headless output is the full display resolution, not the interactive
    // preview grid.
    session.set_render_scale(1.0);
    session.regenerate_from_intent(intent, kind, now);

    println!("Rendering {} view...", kind.display_name());
    println!("Intent: {:?}", intent);
    println!("Image size: {}x{}", width, height);
    println!("Max iterations: {}", session.max_iterations());

    let start = Instant::now();
    session.render_frame(now);
    println!("Duration:   {:?}", start.elapsed());

    write_ppm(session.frame(), &filepath)?;
    println!("Saved to {}", filepath.as_ref().display());
    Ok(())
}

/// Like [`render_intent_controller`], but renders the high-resolution
/// snapshot variant: doubled iteration budget and a randomly rolled palette.
pub fn export_intent_controller(
    intent: &str,
    kind: FractalKind,
    filepath: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let now = Instant::now();
    let mut session = RenderSession::new(800, 600, now, StdRng::from_entropy());
    session.regenerate_from_intent(intent, kind, now);

    println!("Exporting {} snapshot...", kind.display_name());
    let start = Instant::now();
    let snapshot = session.export_snapshot();
    println!("Duration:   {:?}", start.elapsed());

    write_ppm(&snapshot, &filepath)?;
    println!("Saved to {}", filepath.as_ref().display());
    Ok(())
}
