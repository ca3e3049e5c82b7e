//! Procedural spawning of obstacles and hazard waves
//!
//! Randomness comes in through `SpawnRng` so runs can be replayed from a
//! seed and tests can script exact positions.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{GameState, Hazard, Obstacle};
use crate::consts::*;

/// Source of spawn positions
pub trait SpawnRng {
    /// Uniform integer in `lo..=hi`
    fn next_in_range(&mut self, lo: i32, hi: i32) -> i32;
}

/// Seeded PCG spawner used by the real game
#[derive(Debug, Clone)]
pub struct PcgSpawner {
    rng: Pcg32,
}

impl PcgSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl SpawnRng for PcgSpawner {
    fn next_in_range(&mut self, lo: i32, hi: i32) -> i32 {
        self.rng.random_range(lo..=hi)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Meant for tests and scripted replays. Values outside the requested range
/// are clamped into it; an empty list walks the range upward from its low end.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<i32>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(values: impl Into<Vec<i32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl SpawnRng for SequenceRng {
    fn next_in_range(&mut self, lo: i32, hi: i32) -> i32 {
        let value = if self.values.is_empty() {
            let span = (hi - lo).max(0) as usize + 1;
            lo + (self.cursor % span) as i32
        } else {
            self.values[self.cursor % self.values.len()].clamp(lo, hi)
        };
        self.cursor += 1;
        value
    }
}

/// Queue a new obstacle past the right edge if the stream has room.
///
/// Returns true if one was added.
pub fn spawn_obstacle<R: SpawnRng + ?Sized>(state: &mut GameState, rng: &mut R) -> bool {
    let has_room = match state.last_obstacle() {
        None => true,
        Some(last) => last.pos.x < OBSTACLE_SPAWN_GAP,
    };
    if !has_room {
        return false;
    }

    let right_edge = SCREEN_WIDTH as i32;
    let x = rng.next_in_range(
        right_edge + OBSTACLE_SPAWN_MIN_OFFSET,
        right_edge + OBSTACLE_SPAWN_MAX_OFFSET,
    );
    let id = state.next_entity_id();
    state.obstacles.push(Obstacle {
        id,
        pos: Vec2::new(x as f32, GROUND_LINE),
    });
    true
}

/// Drop a pair of hazards at distinct x positions if a wave is due.
///
/// A wave is due once the score passes the hazard threshold and the previous
/// wave has fully landed. Returns true if a wave was dropped.
pub fn spawn_hazard_wave<R: SpawnRng + ?Sized>(state: &mut GameState, rng: &mut R) -> bool {
    if !state.hazards.is_empty() || !state.tuning.hazards_enabled(state.score) {
        return false;
    }

    let lo = HAZARD_EDGE_MARGIN;
    let hi = SCREEN_WIDTH as i32 - HAZARD_EDGE_MARGIN;
    debug_assert!(lo < hi, "hazard range must hold two distinct positions");
    let first = rng.next_in_range(lo, hi);
    let mut second = rng.next_in_range(lo, hi);
    while second == first {
        second = rng.next_in_range(lo, hi);
    }

    for x in [first, second] {
        let id = state.next_entity_id();
        state.hazards.push(Hazard {
            id,
            pos: Vec2::new(x as f32, 0.0),
        });
    }
    state.waves += 1;
    log::debug!("Hazard wave {} at x={} and x={}", state.waves, first, second);
    true
}
