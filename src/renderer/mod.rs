//! Rendering module
//!
//! A `Surface` accepts per-frame draw commands; `draw_frame` turns a read-only
//! `GameState` into those commands. Backends decide how pixels reach a screen.

pub mod canvas;
pub mod recording;

pub use canvas::{Canvas, TextLabel};
pub use recording::{DrawCommand, RecordingSurface};

use glam::Vec2;

use crate::assets::SpriteId;
use crate::consts::*;
use crate::sim::{GamePhase, GameState, Rect};

/// 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const GREEN: Rgb = Rgb(0, 255, 0);
}

/// Background fill
pub const BACKGROUND: Rgb = Rgb::WHITE;
pub const TEXT_COLOR: Rgb = Rgb::BLACK;
/// Hitbox outline colours
pub const HAZARD_HITBOX: Rgb = Rgb::RED;
pub const CHARACTER_HITBOX: Rgb = Rgb::GREEN;
pub const HITBOX_WIDTH: u32 = 2;

/// Draw-command sink for one frame
pub trait Surface {
    fn clear(&mut self, color: Rgb);
    /// Draw a sprite with its top-left corner at `pos`
    fn blit(&mut self, sprite: SpriteId, pos: Vec2);
    /// Rectangle border drawn inside `rect`
    fn outline(&mut self, rect: Rect, color: Rgb, width: u32);
    fn text(&mut self, text: &str, x: i32, y: i32, color: Rgb);
    /// Show the finished frame
    fn present(&mut self) -> std::io::Result<()>;
}

/// Compose one frame for the current phase (does not present)
pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, state: &GameState, show_hitboxes: bool) {
    surface.clear(BACKGROUND);
    surface.blit(SpriteId::Ground, Vec2::new(0.0, GROUND_STRIP_Y));

    match state.phase {
        GamePhase::Countdown => {
            let x = (SCREEN_WIDTH / 2.0) as i32 - 10;
            let y = (SCREEN_HEIGHT / 2.0) as i32 - 60;
            surface.text(&state.countdown.to_string(), x, y, TEXT_COLOR);
        }
        GamePhase::Running => {
            surface.text(&format!("Score: {}", state.score), 10, 10, TEXT_COLOR);
            surface.blit(SpriteId::Character, state.character.pos);

            for obstacle in &state.obstacles {
                surface.blit(SpriteId::Obstacle, obstacle.pos);
                if show_hitboxes {
                    surface.outline(obstacle.rect(), HAZARD_HITBOX, HITBOX_WIDTH);
                }
            }

            for hazard in &state.hazards {
                surface.blit(SpriteId::Hazard, hazard.pos);
                if show_hitboxes {
                    surface.outline(hazard.rect(), HAZARD_HITBOX, HITBOX_WIDTH);
                }
            }

            if show_hitboxes {
                surface.outline(state.character.rect(), CHARACTER_HITBOX, HITBOX_WIDTH);
            }
        }
        GamePhase::GameOver => {
            let x = (SCREEN_WIDTH / 2.0) as i32 - 100;
            let y = (SCREEN_HEIGHT / 2.0) as i32;
            surface.text("GAME OVER", x, y - 100, TEXT_COLOR);
            surface.text(&format!("Final Score: {}", state.score), x, y - 60, TEXT_COLOR);
            surface.text("Press 'R' to Restart", x, y - 30, TEXT_COLOR);
        }
    }
}
