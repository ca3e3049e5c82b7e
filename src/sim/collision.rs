//! Axis-aligned collision detection
//!
//! Every entity is a 50x50 box anchored at its top-left corner. Touching
//! edges do not count as contact; boxes must share interior area.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::GameState;
use crate::consts::SPRITE_SIZE;

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Standard sprite-sized box at `pos`
    #[inline]
    pub fn sprite(pos: Vec2) -> Self {
        Self {
            min: pos,
            size: Vec2::splat(SPRITE_SIZE),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap test
    pub fn overlaps(&self, other: &Rect) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

/// What the character ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    Obstacle { id: u32 },
    Hazard { id: u32 },
}

/// Find the first entity overlapping the character.
///
/// Obstacles are checked before hazards; the scan stops at the first hit.
pub fn find_collision(state: &GameState) -> Option<CollisionKind> {
    let player = state.character.rect();

    if let Some(obstacle) = state.obstacles.iter().find(|o| player.overlaps(&o.rect())) {
        return Some(CollisionKind::Obstacle { id: obstacle.id });
    }

    state
        .hazards
        .iter()
        .find(|h| player.overlaps(&h.rect()))
        .map(|h| CollisionKind::Hazard { id: h.id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::GROUND_LINE;
    use crate::sim::state::{Hazard, Obstacle};

    #[test]
    fn test_overlap_identical() {
        let a = Rect::sprite(Vec2::new(100.0, 300.0));
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::sprite(Vec2::new(100.0, 300.0));
        let right = Rect::sprite(Vec2::new(150.0, 300.0));
        let below = Rect::sprite(Vec2::new(100.0, 350.0));
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_partial_overlap_is_symmetric() {
        let a = Rect::sprite(Vec2::new(100.0, 300.0));
        let b = Rect::new(149.0, 260.0, 10.0, 41.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_find_collision_prefers_obstacles() {
        let mut state = GameState::default();
        state.obstacles.push(Obstacle {
            id: 7,
            pos: Vec2::new(120.0, GROUND_LINE),
        });
        state.hazards.push(Hazard {
            id: 9,
            pos: Vec2::new(100.0, 280.0),
        });
        assert_eq!(find_collision(&state), Some(CollisionKind::Obstacle { id: 7 }));

        state.obstacles.clear();
        assert_eq!(find_collision(&state), Some(CollisionKind::Hazard { id: 9 }));

        state.hazards.clear();
        assert_eq!(find_collision(&state), None);
    }
}
