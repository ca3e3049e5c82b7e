//! Sprite loading
//!
//! Four fixed sprites are decoded and scaled once at startup. Any failure is
//! fatal; there is no in-game fallback art.

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use thiserror::Error;

use crate::consts::{GROUND_STRIP_HEIGHT, SCREEN_WIDTH, SPRITE_SIZE};

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load sprite {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Which sprite to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Character,
    Obstacle,
    Ground,
    Hazard,
}

impl SpriteId {
    pub const ALL: [SpriteId; 4] = [
        SpriteId::Character,
        SpriteId::Obstacle,
        SpriteId::Ground,
        SpriteId::Hazard,
    ];

    /// File name inside the asset directory
    pub fn file_name(&self) -> &'static str {
        match self {
            SpriteId::Character => "character.png",
            SpriteId::Obstacle => "obstacle.png",
            SpriteId::Ground => "ground.png",
            SpriteId::Hazard => "nuke.png",
        }
    }

    /// Size the sprite is scaled to on load
    pub fn size(&self) -> (u32, u32) {
        match self {
            SpriteId::Ground => (SCREEN_WIDTH as u32, GROUND_STRIP_HEIGHT as u32),
            _ => (SPRITE_SIZE as u32, SPRITE_SIZE as u32),
        }
    }
}

/// Decoded RGBA pixels
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 4]>,
}

impl Sprite {
    /// Single-colour opaque sprite
    pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        Self {
            width,
            height,
            pixels: vec![[rgb[0], rgb[1], rgb[2], 255]; (width * height) as usize],
        }
    }

    /// Decode a file and scale it to `width` x `height`
    pub fn load(path: &Path, width: u32, height: u32) -> Result<Self, AssetError> {
        let decoded = image::open(path).map_err(|source| AssetError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        let scaled = imageops::resize(&decoded.to_rgba8(), width, height, FilterType::Nearest);

        Ok(Self {
            width,
            height,
            pixels: scaled.pixels().map(|p| p.0).collect(),
        })
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels[(y * self.width + x) as usize]
    }
}

/// The full sprite set
#[derive(Debug, Clone)]
pub struct SpriteSet {
    pub character: Sprite,
    pub obstacle: Sprite,
    pub ground: Sprite,
    pub hazard: Sprite,
}

impl SpriteSet {
    /// Load every sprite from `dir`
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        let load = |id: SpriteId| {
            let (w, h) = id.size();
            Sprite::load(&dir.join(id.file_name()), w, h)
        };

        let set = Self {
            character: load(SpriteId::Character)?,
            obstacle: load(SpriteId::Obstacle)?,
            ground: load(SpriteId::Ground)?,
            hazard: load(SpriteId::Hazard)?,
        };
        log::info!("Loaded sprites from {}", dir.display());
        Ok(set)
    }

    /// Flat-colour stand-ins, sized like the real sprites
    pub fn placeholder() -> Self {
        let solid = |id: SpriteId, rgb| {
            let (w, h) = id.size();
            Sprite::solid(w, h, rgb)
        };
        Self {
            character: solid(SpriteId::Character, [40, 90, 220]),
            obstacle: solid(SpriteId::Obstacle, [120, 70, 30]),
            ground: solid(SpriteId::Ground, [60, 160, 60]),
            hazard: solid(SpriteId::Hazard, [230, 180, 20]),
        }
    }

    pub fn get(&self, id: SpriteId) -> &Sprite {
        match id {
            SpriteId::Character => &self.character,
            SpriteId::Obstacle => &self.obstacle,
            SpriteId::Ground => &self.ground,
            SpriteId::Hazard => &self.hazard,
        }
    }
}
