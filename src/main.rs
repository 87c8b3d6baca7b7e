//! Blast Yard entry point
//!
//! Without a graphics backend linked in, the binary plays the scripted demo
//! headlessly and reports what the simulation did.
//!
//! Usage: `blast-yard [settings.json]`

use blast_yard::Game;
use blast_yard::assets::{HeadlessLoader, SceneAssets};
use blast_yard::game::{DEMO_DT, ScriptedInput, demo_script};
use blast_yard::renderer::RecordingTarget;
use blast_yard::settings::Settings;
use blast_yard::sim::ManualClock;

fn main() {
    env_logger::init();
    log::info!("Blast Yard (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };

    let assets = SceneAssets::load(&mut HeadlessLoader::new("."));
    if assets.missing() > 0 {
        log::warn!("{} assets missing, drawing with empty handles", assets.missing());
    }

    let clock = ManualClock::new(0.0);
    let mut game = Game::new(&clock, settings, assets);
    let mut target = RecordingTarget::default();
    let mut input = ScriptedInput::new(&clock, DEMO_DT, demo_script());

    let summary = game.run(&mut input, &mut target);

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize run summary: {e}"),
    }
}
