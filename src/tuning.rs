//! Data-driven game balance
//!
//! Every gameplay scalar lives here so a config file can override any subset
//! without recompiling. Defaults reproduce the classic game feel.

use serde::{Deserialize, Serialize};

/// The three parameters the difficulty controller swaps between tiers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedTier {
    /// Pixels per tick obstacles scroll left
    pub obstacle_speed: f32,
    /// Added to vertical velocity every tick
    pub gravity: f32,
    /// Pixels per tick of horizontal character movement
    pub move_speed: f32,
}

impl SpeedTier {
    pub const BASELINE: SpeedTier = SpeedTier {
        obstacle_speed: 10.0,
        gravity: 0.7,
        move_speed: 7.0,
    };

    /// Post-threshold tier. These are the values the classic game switches to;
    /// note the obstacle speed actually drops.
    pub const HARD: SpeedTier = SpeedTier {
        obstacle_speed: 7.0,
        gravity: 0.7,
        move_speed: 7.0,
    };
}

/// Game balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub baseline: SpeedTier,
    pub hard: SpeedTier,
    /// Vertical velocity set on jump (negative is up)
    pub jump_impulse: f32,
    /// Pixels per tick a hazard falls
    pub hazard_fall_speed: f32,
    /// Hazard waves start once score exceeds this
    pub hazard_score_threshold: u64,
    /// Hard tier applies once score exceeds this
    pub difficulty_score_threshold: u64,
    /// Seconds counted down before each run
    pub countdown_seconds: u32,
    /// Zero vertical velocity when the character lands.
    ///
    /// Off by default: the classic game only snaps position, so velocity keeps
    /// accumulating gravity while grounded.
    pub reset_velocity_on_landing: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            baseline: SpeedTier::BASELINE,
            hard: SpeedTier::HARD,
            jump_impulse: -10.0,
            hazard_fall_speed: 5.0,
            hazard_score_threshold: 500,
            difficulty_score_threshold: 1000,
            countdown_seconds: 3,
            reset_velocity_on_landing: false,
        }
    }
}

impl Tuning {
    /// Difficulty tier for a given score
    pub fn tier_for_score(&self, score: u64) -> SpeedTier {
        if score > self.difficulty_score_threshold {
            self.hard
        } else {
            self.baseline
        }
    }

    /// Whether a new hazard wave may drop at this score
    pub fn hazards_enabled(&self, score: u64) -> bool {
        score > self.hazard_score_threshold
    }
}
