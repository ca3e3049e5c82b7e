//! Game loop orchestration
//!
//! One iteration: poll input → quit check → phase dispatch → draw → pace.

use std::io;

use crate::platform::{FramePacer, InputFrame, InputSource};
use crate::renderer::{Surface, draw_frame};
use crate::settings::Settings;
use crate::sim::{GameState, PcgSpawner, SpawnRng, tick};
use crate::tuning::Tuning;

/// A game session: simulation state, spawn randomness and view toggles
pub struct Game<R: SpawnRng = PcgSpawner> {
    pub state: GameState,
    rng: R,
    /// Draw hitbox outlines
    pub show_hitboxes: bool,
}

impl Game<PcgSpawner> {
    /// Build a session from settings, seeding the spawner
    pub fn from_settings(settings: &Settings, seed: u64) -> Self {
        log::info!("Spawn seed: {}", seed);
        Self::new(
            settings.tuning.clone(),
            PcgSpawner::new(seed),
            settings.show_hitboxes,
        )
    }
}

impl<R: SpawnRng> Game<R> {
    pub fn new(tuning: Tuning, rng: R, show_hitboxes: bool) -> Self {
        Self {
            state: GameState::new(tuning),
            rng,
            show_hitboxes,
        }
    }

    /// Apply one iteration of input and advance the simulation.
    ///
    /// Returns false once quit was requested; the state is left untouched on
    /// that iteration.
    pub fn step(&mut self, input: &InputFrame, dt: f32) -> bool {
        if input.quit {
            log::info!("Quit requested");
            return false;
        }

        if input.toggle_hitboxes {
            self.show_hitboxes = !self.show_hitboxes;
            log::debug!("Hitboxes {}", if self.show_hitboxes { "on" } else { "off" });
        }

        let before = self.state.phase;
        tick(&mut self.state, &input.tick_input(), &mut self.rng, dt);
        if self.state.phase != before {
            log::info!(
                "Phase {:?} -> {:?} (score {})",
                before,
                self.state.phase,
                self.state.score
            );
        }
        true
    }

    /// Draw and present the current state
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> io::Result<()> {
        draw_frame(surface, &self.state, self.show_hitboxes);
        surface.present()
    }
}

/// Drive the loop until quit. Returns the number of frames drawn.
pub fn run<R, I, S>(
    game: &mut Game<R>,
    input: &mut I,
    surface: &mut S,
    pacer: &mut FramePacer,
) -> io::Result<u64>
where
    R: SpawnRng,
    I: InputSource + ?Sized,
    S: Surface + ?Sized,
{
    let mut frames = 0;
    // The first iteration gets no time credit
    let mut dt = 0.0;

    loop {
        let frame = input.poll()?;
        if !game.step(&frame, dt) {
            return Ok(frames);
        }
        game.draw(surface)?;
        frames += 1;
        dt = pacer.wait();
    }
}
