//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time enters only as an explicit `dt`
//! - Randomness only through an injected `SpawnRng`
//! - Stable iteration order (creation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionKind, Rect, find_collision};
pub use spawn::{PcgSpawner, SequenceRng, SpawnRng, spawn_hazard_wave, spawn_obstacle};
pub use state::{Character, GamePhase, GameState, Hazard, Obstacle};
pub use tick::{TickInput, tick};
