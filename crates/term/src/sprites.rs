//! Built-in sprite sheet: character art for every [`SpriteId`].
//!
//! Every sprite is laid out on one tile of [`TILE_CELLS_W`] × [`TILE_CELLS_H`]
//! terminal cells. Entity sprites are drawn at pixel positions that include
//! their per-kind render offset; `anchor_dy` cancels that offset so the art
//! lands on the tile the entity occupies.

use crate::fb::Rgb;
use crate::types::{SpriteId, COLLECTABLE_RENDER_OFFSET_Y, ENEMY_RENDER_OFFSET_Y};

/// Terminal columns per tile
pub const TILE_CELLS_W: i32 = 8;
/// Terminal rows per tile
pub const TILE_CELLS_H: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteArt {
    pub rows: [&'static str; TILE_CELLS_H as usize],
    pub fg: Rgb,
    /// `Some` for opaque tiles; sprites without a background are transparent
    /// wherever their art has a space.
    pub bg: Option<Rgb>,
    pub bold: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteEntry {
    pub art: SpriteArt,
    /// Pixels added to the draw position's y before mapping to a cell row
    pub anchor_dy: f32,
}

/// Lookup table from sprite id to art; total over [`SpriteId`].
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    entries: [SpriteEntry; SpriteId::ALL.len()],
}

impl SpriteSheet {
    pub fn builtin() -> Self {
        Self {
            entries: SpriteId::ALL.map(builtin_entry),
        }
    }

    pub fn get(&self, sprite: SpriteId) -> &SpriteEntry {
        &self.entries[sprite.index()]
    }
}

impl Default for SpriteSheet {
    fn default() -> Self {
        Self::builtin()
    }
}

fn tile(rows: [&'static str; 3], fg: Rgb, bg: Rgb) -> SpriteEntry {
    SpriteEntry {
        art: SpriteArt {
            rows,
            fg,
            bg: Some(bg),
            bold: false,
        },
        anchor_dy: 0.0,
    }
}

fn sprite(rows: [&'static str; 3], fg: Rgb, anchor_dy: f32) -> SpriteEntry {
    SpriteEntry {
        art: SpriteArt {
            rows,
            fg,
            bg: None,
            bold: true,
        },
        anchor_dy,
    }
}

fn builtin_entry(id: SpriteId) -> SpriteEntry {
    const GEM: [&str; 3] = ["        ", "   ◆◆   ", "        "];

    match id {
        SpriteId::WaterBlock => tile(
            ["~  ~   ~", "  ~   ~ ", "~   ~  ~"],
            Rgb::new(150, 200, 255),
            Rgb::new(30, 80, 190),
        ),
        SpriteId::StoneBlock => tile(
            ["▪     . ", "   .    ", " .    ▪ "],
            Rgb::new(140, 140, 150),
            Rgb::new(95, 95, 105),
        ),
        SpriteId::GrassBlock => tile(
            ["\"  '  \" ", "  '  \"  ", "'  \"   '"],
            Rgb::new(120, 200, 90),
            Rgb::new(50, 130, 50),
        ),
        SpriteId::EnemyBug => sprite(
            ["  ▄▄▄   ", " ████●▶ ", "  ╨ ╨   "],
            Rgb::new(220, 60, 50),
            -ENEMY_RENDER_OFFSET_Y,
        ),
        SpriteId::CharBoy => sprite(
            ["   O    ", "  /█\\   ", "  / \\   "],
            Rgb::new(250, 230, 200),
            0.0,
        ),
        SpriteId::GemBlue => sprite(GEM, Rgb::new(90, 150, 255), -COLLECTABLE_RENDER_OFFSET_Y),
        SpriteId::GemGreen => sprite(GEM, Rgb::new(90, 230, 130), -COLLECTABLE_RENDER_OFFSET_Y),
        SpriteId::Star => sprite(
            ["   .    ", "  -*-   ", "   '    "],
            Rgb::new(255, 215, 0),
            -COLLECTABLE_RENDER_OFFSET_Y,
        ),
    }
}
