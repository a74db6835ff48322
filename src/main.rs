use chaos_engine::FractalKind;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let intent = args.first().map(String::as_str).unwrap_or("");
    let kind = match args.get(1).map(String::as_str) {
        Some("julia") => FractalKind::Julia,
        Some("burning-ship") => FractalKind::BurningShip,
        _ => FractalKind::Mandelbrot,
    };
    let export = args.iter().any(|arg| arg == "--export");

    std::fs::create_dir_all("output")?;
    if export {
        chaos_engine::export_intent_controller(intent, kind, "output/fractal.ppm")?;
    } else {
        chaos_engine::render_intent_controller(intent, kind, "output/fractal.ppm")?;
    }

    Ok(())
}
