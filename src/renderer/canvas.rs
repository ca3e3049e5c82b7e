//! Software framebuffer
//!
//! Fixed 800x400 RGB canvas. Sprites are blitted with an alpha cut-out; text
//! is kept as a label overlay because glyph rasterizing is left to whatever
//! presents the canvas.

use glam::Vec2;

use super::{Rgb, Surface};
use crate::assets::{SpriteId, SpriteSet};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::Rect;

/// Pixels with alpha below this are skipped when blitting
const ALPHA_CUTOFF: u8 = 128;

/// Text queued for the presenter
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub color: Rgb,
}

pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
    labels: Vec<TextLabel>,
    sprites: SpriteSet,
}

impl Canvas {
    pub fn new(sprites: SpriteSet) -> Self {
        let width = SCREEN_WIDTH as usize;
        let height = SCREEN_HEIGHT as usize;
        Self {
            width,
            height,
            pixels: vec![Rgb::WHITE; width * height],
            labels: Vec::new(),
            sprites,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at canvas coordinates (must be in bounds)
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        self.pixels[y * self.width + x]
    }

    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    #[inline]
    fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.pixels[y as usize * self.width + x as usize] = c;
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, c);
            }
        }
    }
}

impl Surface for Canvas {
    fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
        self.labels.clear();
    }

    fn blit(&mut self, sprite: SpriteId, pos: Vec2) {
        // Truncate like integer screen coordinates
        let ox = pos.x as i32;
        let oy = pos.y as i32;

        let Canvas {
            width,
            height,
            pixels,
            sprites,
            ..
        } = self;
        let sprite = sprites.get(sprite);
        for sy in 0..sprite.height {
            for sx in 0..sprite.width {
                let [r, g, b, a] = sprite.get(sx, sy);
                if a < ALPHA_CUTOFF {
                    continue;
                }
                let x = ox + sx as i32;
                let y = oy + sy as i32;
                if x >= 0 && y >= 0 && (x as usize) < *width && (y as usize) < *height {
                    pixels[y as usize * *width + x as usize] = Rgb(r, g, b);
                }
            }
        }
    }

    fn outline(&mut self, rect: Rect, color: Rgb, width: u32) {
        let x = rect.min.x as i32;
        let y = rect.min.y as i32;
        let w = rect.size.x as i32;
        let h = rect.size.y as i32;
        let t = (width as i32).min(w / 2).min(h / 2).max(1);

        self.fill_rect(x, y, w, t, color);
        self.fill_rect(x, y + h - t, w, t, color);
        self.fill_rect(x, y, t, h, color);
        self.fill_rect(x + w - t, y, t, h, color);
    }

    fn text(&mut self, text: &str, x: i32, y: i32, color: Rgb) {
        self.labels.push(TextLabel {
            text: text.to_string(),
            x,
            y,
            color,
        });
    }

    fn present(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
