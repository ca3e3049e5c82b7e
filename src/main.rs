//! Infinite Runner entry point
//!
//! Loads settings and sprites, then runs the game loop in the terminal.
//! Logs go to stderr; redirect it (`2>runner.log`) to keep the screen clean.

use std::path::PathBuf;

use anyhow::Context;

use infinite_runner::game::{Game, run};
use infinite_runner::platform::{FramePacer, TerminalInput, TerminalSession, TerminalSurface};
use infinite_runner::renderer::Canvas;
use infinite_runner::settings::{DEFAULT_CONFIG_PATH, Settings};
use infinite_runner::SpriteSet;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Infinite Runner starting...");

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let settings = Settings::load_or_default(&config_path);

    // Missing art is fatal before the terminal is touched
    let sprites = SpriteSet::load(&settings.asset_dir).context("loading sprites")?;

    let seed = settings.seed.unwrap_or_else(rand::random);
    let mut game = Game::from_settings(&settings, seed);

    let session = TerminalSession::enter().context("entering terminal mode")?;
    let mut input = TerminalInput::new(&session);
    let mut surface = TerminalSurface::new(Canvas::new(sprites));
    let mut pacer = FramePacer::new(settings.effective_tick_rate());

    let result = run(&mut game, &mut input, &mut surface, &mut pacer);
    drop(session);

    let frames = result.context("game loop failed")?;
    log::info!(
        "Exited after {} frames, last score {}",
        frames,
        game.state.score
    );
    Ok(())
}
