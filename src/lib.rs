//! Infinite Runner - a side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, phases)
//! - `renderer`: Draw-command surface and frame composition
//! - `platform`: Terminal backend (presenter, input, frame pacing)
//! - `tuning`: Data-driven game balance
//! - `settings`: Runtime configuration

pub mod assets;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use assets::{AssetError, SpriteSet};
pub use game::Game;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical canvas size
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 400.0;

    /// Fixed tick rate (iterations per second)
    pub const TICK_RATE: u32 = 30;
    /// Nominal duration of one tick in seconds
    pub const TICK_DT: f32 = 1.0 / TICK_RATE as f32;

    /// All sprites share one square hitbox size
    pub const SPRITE_SIZE: f32 = 50.0;

    /// Top edge of a grounded sprite (screen_height - 100)
    pub const GROUND_LINE: f32 = SCREEN_HEIGHT - 100.0;
    /// Top edge of the ground strip
    pub const GROUND_STRIP_Y: f32 = SCREEN_HEIGHT - 50.0;
    pub const GROUND_STRIP_HEIGHT: f32 = 50.0;

    /// Character spawn point
    pub const CHARACTER_START_X: f32 = 100.0;

    /// Obstacles enter between these offsets past the right edge
    pub const OBSTACLE_SPAWN_MIN_OFFSET: i32 = 100;
    pub const OBSTACLE_SPAWN_MAX_OFFSET: i32 = 300;
    /// A new obstacle is queued once the newest one is left of this x
    pub const OBSTACLE_SPAWN_GAP: f32 = SCREEN_WIDTH - 300.0;

    /// Hazards drop anywhere this far from the side edges
    pub const HAZARD_EDGE_MARGIN: i32 = 100;
}
