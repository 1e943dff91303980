//! Tagged Shooter entry point
//!
//! Runs the game headless: a seeded autopilot script plays a fixed number of
//! frames, then quits. Pass a JSON settings file as the first argument to
//! override the defaults.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;

    use tagged_shooter::platform::{ScriptedSurface, autopilot};
    use tagged_shooter::renderer::RecordingRenderer;
    use tagged_shooter::{Game, Settings};

    env_logger::init();
    log::info!("Tagged Shooter (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(Path::new(&path)) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => {
            log::info!("Using default settings");
            Settings::default()
        }
    };

    let script = autopilot(&settings);
    let surface = ScriptedSurface::new(script, settings.frame_dt, settings.seed);
    log::info!("Autopilot seed {}, {} frames", settings.seed, settings.max_frames);

    let game = match Game::new(settings, surface, RecordingRenderer::new()) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Failed to initialize: {}", e);
            std::process::exit(1);
        }
    };

    let summary = game.run();
    log::info!(
        "Run finished: {} frames, {} shots, {} enemies destroyed, {} remaining",
        summary.frames,
        summary.shots_fired,
        summary.enemies_killed,
        summary.enemies_remaining
    );
    match serde_json::to_string(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::warn!("Could not serialize run summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless runner on wasm; embedders drive `Game::step` themselves
}
