//! Game state and core simulation types
//!
//! A single `GameState` value owns everything the simulation touches. Update
//! functions borrow it mutably; the renderer only ever sees `&GameState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;
use crate::tuning::{SpeedTier, Tuning};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Frozen pre-run countdown
    Countdown,
    /// Active gameplay
    Running,
    /// Run ended, waiting for restart
    GameOver,
}

/// The player-controlled runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Top-left corner
    pub pos: Vec2,
    pub vel_y: f32,
    /// Set on jump, cleared on landing
    pub airborne: bool,
}

impl Default for Character {
    fn default() -> Self {
        Self {
            pos: Vec2::new(CHARACTER_START_X, GROUND_LINE),
            vel_y: 0.0,
            airborne: false,
        }
    }
}

impl Character {
    pub fn rect(&self) -> Rect {
        Rect::sprite(self.pos)
    }

    /// Shift horizontally and clamp inside the canvas
    pub fn walk(&mut self, dx: f32) {
        self.pos.x = (self.pos.x + dx).clamp(0.0, SCREEN_WIDTH - SPRITE_SIZE);
    }

    /// Start a jump if standing on the ground
    pub fn try_jump(&mut self, impulse: f32) {
        if !self.airborne {
            self.vel_y = impulse;
            self.airborne = true;
        }
    }

    /// Integrate gravity and land on the ground line
    pub fn fall(&mut self, gravity: f32, reset_velocity_on_landing: bool) {
        self.vel_y += gravity;
        self.pos.y += self.vel_y;

        if self.pos.y >= GROUND_LINE {
            self.pos.y = GROUND_LINE;
            self.airborne = false;
            if reset_velocity_on_landing {
                self.vel_y = 0.0;
            }
        }
    }
}

/// A ground obstacle scrolling in from the right
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub pos: Vec2,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect::sprite(self.pos)
    }

    /// Fully past the left edge
    pub fn is_offscreen(&self) -> bool {
        self.pos.x <= -SPRITE_SIZE
    }
}

/// A falling nuke
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub id: u32,
    pub pos: Vec2,
}

impl Hazard {
    pub fn rect(&self) -> Rect {
        Rect::sprite(self.pos)
    }

    pub fn has_landed(&self) -> bool {
        self.pos.y >= GROUND_LINE
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Balance values (survive resets)
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Whole seconds left in the countdown
    pub countdown: u32,
    /// Seconds accumulated toward the next countdown step
    pub countdown_elapsed: f32,
    pub character: Character,
    /// Ordered oldest (leftmost) to newest
    pub obstacles: Vec<Obstacle>,
    /// Current wave, empty between waves
    pub hazards: Vec<Hazard>,
    pub score: u64,
    /// Active difficulty tier
    pub difficulty: SpeedTier,
    /// Running ticks simulated this run
    pub time_ticks: u64,
    /// Hazard waves dropped this run
    pub waves: u32,
    /// Next entity ID
    next_id: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    /// Create a fresh game waiting on its first countdown
    pub fn new(tuning: Tuning) -> Self {
        Self {
            phase: GamePhase::Countdown,
            countdown: tuning.countdown_seconds,
            countdown_elapsed: 0.0,
            character: Character::default(),
            obstacles: Vec::new(),
            hazards: Vec::new(),
            score: 0,
            difficulty: tuning.baseline,
            time_ticks: 0,
            waves: 0,
            next_id: 1,
            tuning,
        }
    }

    /// Restore initial values and restart the countdown
    pub fn reset(&mut self) {
        let tuning = std::mem::take(&mut self.tuning);
        *self = Self::new(tuning);
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Newest obstacle in the stream
    pub fn last_obstacle(&self) -> Option<&Obstacle> {
        self.obstacles.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::default();
        assert_eq!(state.phase, GamePhase::Countdown);
        assert_eq!(state.countdown, 3);
        assert_eq!(state.character.pos, Vec2::new(100.0, 300.0));
        assert!(!state.character.airborne);
        assert_eq!(state.difficulty, SpeedTier::BASELINE);
    }

    #[test]
    fn test_walk_clamps_to_canvas() {
        let mut character = Character::default();
        character.walk(-500.0);
        assert_eq!(character.pos.x, 0.0);
        character.walk(5000.0);
        assert_eq!(character.pos.x, 750.0);
    }

    #[test]
    fn test_jump_only_from_ground() {
        let mut character = Character::default();
        character.try_jump(-10.0);
        assert_eq!(character.vel_y, -10.0);
        assert!(character.airborne);

        character.vel_y = -3.0;
        character.try_jump(-10.0);
        assert_eq!(character.vel_y, -3.0);
    }

    #[test]
    fn test_landing_keeps_velocity_by_default() {
        let mut character = Character::default();
        character.fall(0.7, false);
        assert_eq!(character.pos.y, GROUND_LINE);
        assert!((character.vel_y - 0.7).abs() < 1e-6);

        character.fall(0.7, false);
        assert!((character.vel_y - 1.4).abs() < 1e-6);

        character.fall(0.7, true);
        assert_eq!(character.vel_y, 0.0);
    }

    #[test]
    fn test_reset_keeps_tuning() {
        let tuning = Tuning {
            countdown_seconds: 5,
            ..Default::default()
        };
        let mut state = GameState::new(tuning.clone());
        state.score = 42;
        state.phase = GamePhase::GameOver;
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            pos: Vec2::new(10.0, GROUND_LINE),
        });

        state.reset();
        assert_eq!(state.tuning, tuning);
        assert_eq!(state.countdown, 5);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.phase, GamePhase::Countdown);
    }
}
