//! Surface that records draw commands instead of drawing them

use glam::Vec2;

use super::{Rgb, Surface};
use crate::assets::SpriteId;
use crate::sim::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rgb),
    Blit {
        sprite: SpriteId,
        pos: Vec2,
    },
    Outline {
        rect: Rect,
        color: Rgb,
        width: u32,
    },
    Text {
        text: String,
        x: i32,
        y: i32,
        color: Rgb,
    },
    Present,
}

/// Records every command of every frame
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// All text drawn so far, in order
    pub fn texts(&self) -> Vec<String> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of times `sprite` was drawn
    pub fn blits(&self, sprite: SpriteId) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Blit { sprite: s, .. } if *s == sprite))
            .count()
    }

    pub fn frames_presented(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Present))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn blit(&mut self, sprite: SpriteId, pos: Vec2) {
        self.commands.push(DrawCommand::Blit { sprite, pos });
    }

    fn outline(&mut self, rect: Rect, color: Rgb, width: u32) {
        self.commands.push(DrawCommand::Outline { rect, color, width });
    }

    fn text(&mut self, text: &str, x: i32, y: i32, color: Rgb) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            color,
        });
    }

    fn present(&mut self) -> std::io::Result<()> {
        self.commands.push(DrawCommand::Present);
        Ok(())
    }
}
