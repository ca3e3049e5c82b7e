//! Fixed timestep simulation tick
//!
//! Core game loop step: dispatches on the current phase and advances the
//! simulation deterministically.

use super::collision::{CollisionKind, find_collision};
use super::spawn::{SpawnRng, spawn_hazard_wave, spawn_obstacle};
use super::state::{GamePhase, GameState};

/// Countdown steps fire this close to a full second to absorb float drift
const COUNTDOWN_EPSILON: f32 = 1e-3;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held: move left (wins over right)
    pub left: bool,
    /// Held: move right
    pub right: bool,
    /// Held: jump when grounded
    pub jump: bool,
    /// One-shot: restart after game over
    pub restart: bool,
}

/// Advance the game state by one tick.
///
/// `dt` is the real time in seconds since the previous tick. Only the
/// countdown consumes it; running physics is per-tick.
pub fn tick<R: SpawnRng + ?Sized>(state: &mut GameState, input: &TickInput, rng: &mut R, dt: f32) {
    match state.phase {
        GamePhase::Countdown => advance_countdown(state, dt),
        GamePhase::Running => run_tick(state, input, rng),
        GamePhase::GameOver => {
            if input.restart {
                log::info!("Restarting after final score {}", state.score);
                state.reset();
            }
        }
    }
}

/// Count down whole seconds of accumulated time; start the run at zero
fn advance_countdown(state: &mut GameState, dt: f32) {
    state.countdown_elapsed += dt.max(0.0);
    while state.countdown > 0 && state.countdown_elapsed + COUNTDOWN_EPSILON >= 1.0 {
        state.countdown_elapsed -= 1.0;
        state.countdown -= 1;
    }

    if state.countdown == 0 {
        state.phase = GamePhase::Running;
        state.countdown = state.tuning.countdown_seconds;
        state.countdown_elapsed = 0.0;
    }
}

fn run_tick<R: SpawnRng + ?Sized>(state: &mut GameState, input: &TickInput, rng: &mut R) {
    state.time_ticks += 1;

    // Difficulty is a pure function of score
    state.difficulty = state.tuning.tier_for_score(state.score);
    let tier = state.difficulty;

    // Character
    let dx = if input.left {
        -tier.move_speed
    } else if input.right {
        tier.move_speed
    } else {
        0.0
    };
    state.character.walk(dx);
    if input.jump {
        state.character.try_jump(state.tuning.jump_impulse);
    }
    state
        .character
        .fall(tier.gravity, state.tuning.reset_velocity_on_landing);

    // Obstacles scroll left, drop once off screen, then refill
    for obstacle in &mut state.obstacles {
        obstacle.pos.x -= tier.obstacle_speed;
    }
    state.obstacles.retain(|o| !o.is_offscreen());
    spawn_obstacle(state, rng);

    // Hazards fall and leave play on reaching the ground
    let fall_speed = state.tuning.hazard_fall_speed;
    for hazard in &mut state.hazards {
        hazard.pos.y += fall_speed;
    }
    state.hazards.retain(|h| !h.has_landed());
    spawn_hazard_wave(state, rng);

    if let Some(hit) = find_collision(state) {
        state.phase = GamePhase::GameOver;
        match hit {
            CollisionKind::Obstacle { id } => {
                log::info!(
                    "Hit obstacle {} after {} ticks - final score {}",
                    id,
                    state.time_ticks,
                    state.score
                )
            }
            CollisionKind::Hazard { id } => {
                log::info!(
                    "Hit nuke {} after {} ticks - final score {}",
                    id,
                    state.time_ticks,
                    state.score
                )
            }
        }
        return;
    }

    state.score += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::spawn::{PcgSpawner, SequenceRng};
    use crate::sim::state::{Hazard, Obstacle};
    use crate::tuning::SpeedTier;
    use glam::Vec2;

    fn running_state() -> GameState {
        let mut state = GameState::default();
        state.phase = GamePhase::Running;
        state
    }

    #[test]
    fn test_countdown_to_running() {
        let mut state = GameState::default();
        let mut rng = SequenceRng::new([1100]);
        let input = TickInput::default();

        tick(&mut state, &input, &mut rng, 1.0);
        assert_eq!(state.phase, GamePhase::Countdown);
        assert_eq!(state.countdown, 2);

        tick(&mut state, &input, &mut rng, 1.0);
        tick(&mut state, &input, &mut rng, 1.0);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.character.pos, Vec2::new(100.0, 300.0));
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_countdown_at_tick_rate() {
        let mut state = GameState::default();
        let mut rng = SequenceRng::new([1100]);
        let input = TickInput::default();

        for _ in 0..(3 * TICK_RATE - 1) {
            tick(&mut state, &input, &mut rng, TICK_DT);
        }
        assert_eq!(state.phase, GamePhase::Countdown);
        assert_eq!(state.countdown, 1);

        tick(&mut state, &input, &mut rng, TICK_DT);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_countdown_freezes_simulation() {
        let mut state = GameState::default();
        let mut rng = SequenceRng::new([1100]);
        let input = TickInput {
            right: true,
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &input, &mut rng, 0.5);
        assert_eq!(state.character.pos, Vec2::new(100.0, 300.0));
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_left_wins_over_right() {
        let mut state = running_state();
        let mut rng = SequenceRng::new([1100]);
        let input = TickInput {
            left: true,
            right: true,
            ..Default::default()
        };
        tick(&mut state, &input, &mut rng, TICK_DT);
        assert_eq!(state.character.pos.x, 93.0);
    }

    #[test]
    fn test_jump_arc_lands() {
        let mut state = running_state();
        let mut rng = SequenceRng::new([1100]);
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };

        tick(&mut state, &jump, &mut rng, TICK_DT);
        assert!(state.character.airborne);
        assert!((state.character.vel_y - (-10.0 + 0.7)).abs() < 1e-5);
        assert!(state.character.pos.y < GROUND_LINE);

        let idle = TickInput::default();
        let mut ticks = 0;
        while state.character.airborne {
            tick(&mut state, &idle, &mut rng, TICK_DT);
            ticks += 1;
            assert!(state.character.pos.y >= 0.0);
            assert!(ticks < 100, "character never landed");
        }
        assert_eq!(state.character.pos.y, GROUND_LINE);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_collision_ends_run_without_scoring() {
        let mut state = running_state();
        state.score = 10;
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            pos: state.character.pos,
        });
        let mut rng = SequenceRng::new([1100]);

        tick(&mut state, &TickInput::default(), &mut rng, TICK_DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score, 10);

        // Frozen until restart
        let before = state.obstacles.clone();
        tick(&mut state, &TickInput::default(), &mut rng, TICK_DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.obstacles, before);
    }

    #[test]
    fn test_hazard_hit_ends_run_without_scoring() {
        let mut state = running_state();
        state.score = 42;
        // Lands on the character's box after this tick's fall step
        let id = state.next_entity_id();
        state.hazards.push(Hazard {
            id,
            pos: Vec2::new(110.0, 260.0),
        });
        let mut rng = SequenceRng::new([1100]);

        tick(&mut state, &TickInput::default(), &mut rng, TICK_DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score, 42);
        assert_eq!(state.time_ticks, 1);
        assert_eq!(state.hazards[0].pos.y, 265.0);
    }

    #[test]
    fn test_restart_only_from_game_over() {
        let mut state = running_state();
        state.score = 77;
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        let mut rng = SequenceRng::new([1100]);
        tick(&mut state, &restart, &mut rng, TICK_DT);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 78);

        state.phase = GamePhase::GameOver;
        tick(&mut state, &restart, &mut rng, TICK_DT);
        assert_eq!(state.phase, GamePhase::Countdown);
        assert_eq!(state.countdown, 3);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert!(state.hazards.is_empty());
    }

    #[test]
    fn test_obstacles_scroll_and_cull() {
        let mut state = running_state();
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            pos: Vec2::new(-45.0, GROUND_LINE),
        });
        let mut rng = SequenceRng::new([1000]);
        tick(&mut state, &TickInput::default(), &mut rng, TICK_DT);

        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].pos.x, 1000.0);
    }

    #[test]
    fn test_hard_tier_after_threshold() {
        let mut state = running_state();
        state.score = 1000;
        // Hazard waves are live past 500, so the draws after the obstacle must differ
        let mut rng = SequenceRng::new([1100, 200, 600]);
        tick(&mut state, &TickInput::default(), &mut rng, TICK_DT);
        assert_eq!(state.difficulty, SpeedTier::BASELINE);

        tick(&mut state, &TickInput::default(), &mut rng, TICK_DT);
        assert_eq!(state.difficulty, SpeedTier::HARD);
    }

    #[test]
    fn test_hazards_land_and_refire() {
        let mut state = running_state();
        state.score = 600;
        // Keep the character well away from the drop zone
        state.character.pos.x = 0.0;
        let mut rng = SequenceRng::new([1100, 400, 600]);
        let idle = TickInput {
            left: true,
            ..Default::default()
        };

        tick(&mut state, &idle, &mut rng, TICK_DT);
        assert_eq!(state.hazards.len(), 2);
        assert_eq!(state.waves, 1);

        // 300 / 5 = 60 ticks to land, the next wave drops on the landing tick
        for _ in 0..59 {
            tick(&mut state, &idle, &mut rng, TICK_DT);
        }
        assert_eq!(state.waves, 1);
        assert!(state.hazards.iter().all(|h| h.pos.y == 295.0));

        tick(&mut state, &idle, &mut rng, TICK_DT);
        assert_eq!(state.waves, 2);
        assert!(state.hazards.iter().all(|h| h.pos.y == 0.0));
    }

    #[test]
    fn test_determinism() {
        // Two runs with the same seed and inputs must match exactly
        let mut state1 = running_state();
        let mut state2 = running_state();
        let mut rng1 = PcgSpawner::new(99999);
        let mut rng2 = PcgSpawner::new(99999);

        for i in 0..400 {
            let input = TickInput {
                jump: i % 17 == 0,
                right: i % 5 == 0,
                ..Default::default()
            };
            tick(&mut state1, &input, &mut rng1, TICK_DT);
            tick(&mut state2, &input, &mut rng2, TICK_DT);
        }

        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.obstacles, state2.obstacles);
        assert_eq!(state1.hazards, state2.hazards);
        assert_eq!(state1.character, state2.character);
    }
}
