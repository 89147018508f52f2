//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data with no external dependencies, so they can be used
//! by the simulation, the terminal renderer, and the input layer alike.
//!
//! # Field Geometry
//!
//! The playfield is a grid of tiles. Logical positions are `(col, row)` grid
//! indices; pixel positions are derived from them using the tile size.
//!
//! | Row(s) | Lane | Background |
//! |--------|------|------------|
//! | 0 | Goal | water |
//! | 1..=3 | Obstacle | stone |
//! | 4..=5 | Safe (start) | grass |
//!
//! The number of columns, obstacle lanes and safe rows is configurable; the
//! table above shows the defaults.
//!
//! # Timing
//!
//! Entity motion is expressed in pixels per second and scaled by the wall-clock
//! delta between frames. The host paces frames at roughly [`FRAME_MS`].
//!
//! # Examples
//!
//! ```
//! use tui_crossing_types::{Direction, CollectableKind, TILE_WIDTH};
//!
//! assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
//! assert_eq!(Direction::from_str("jump"), None);
//!
//! assert_eq!(CollectableKind::Star.points(), 10);
//! assert_eq!(TILE_WIDTH, 101.0);
//! ```

/// Tile width in pixels
pub const TILE_WIDTH: f32 = 101.0;

/// Tile height in pixels
pub const TILE_HEIGHT: f32 = 83.0;

/// Default number of columns
pub const DEFAULT_COLS: u8 = 5;

/// Default number of obstacle lanes (rows directly below the goal lane)
pub const DEFAULT_OBSTACLE_LANES: u8 = 3;

/// Default number of safe rows at the bottom of the field
pub const DEFAULT_SAFE_ROWS: u8 = 2;

/// Default number of enemies roaming the obstacle lanes
pub const DEFAULT_ENEMY_COUNT: u8 = 3;

/// Host frame pacing interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Enemy speed range in pixels per second
pub const ENEMY_MIN_SPEED: f32 = 250.0;
pub const ENEMY_MAX_SPEED: f32 = 400.0;

/// Range of the off-screen lead-in, in seconds of travel, applied on respawn
pub const ENEMY_MIN_ENTRY_DELAY: f32 = 0.5;
pub const ENEMY_MAX_ENTRY_DELAY: f32 = 1.5;

/// Horizontal collision margins (pixels shaved off each side of the tile)
pub const ENEMY_COLLISION_MARGIN: f32 = 3.0;
pub const PLAYER_COLLISION_MARGIN: f32 = 16.0;

/// Vertical sprite offsets used when converting rows to pixel positions
pub const ENEMY_RENDER_OFFSET_Y: f32 = -20.0;
pub const COLLECTABLE_RENDER_OFFSET_Y: f32 = -32.0;

/// Points awarded for reaching the goal lane
pub const GOAL_BONUS: u32 = 5;

/// Lifetime of a floating feedback label, in seconds
pub const FEEDBACK_DURATION_SECS: f32 = 0.5;

/// Upward drift of a floating feedback label, in pixels per second
pub const FEEDBACK_DRIFT_SPEED: f32 = 50.0;

/// Offset from a feedback label's anchor to where its text is drawn
pub const FEEDBACK_TEXT_OFFSET_X: f32 = 30.0;
pub const FEEDBACK_TEXT_OFFSET_Y: f32 = 120.0;

/// HUD text anchors
pub const SCORE_TEXT_POS: (f32, f32) = (0.0, 40.0);
pub const HIGH_SCORE_TEXT_POS: (f32, f32) = (270.0, 40.0);

/// Font used for the HUD and feedback labels
pub const HUD_FONT: Font = Font { size_px: 30 };

/// Discrete movement input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Parse a direction name (case-insensitive)
    ///
    /// Unrecognised names yield `None`; callers treat that as a no-op.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Grid step `(dcol, drow)` for this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

/// Identifier of a drawable sprite
///
/// The renderer resolves these through its sprite sheet; the simulation only
/// ever refers to sprites by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    WaterBlock,
    StoneBlock,
    GrassBlock,
    EnemyBug,
    CharBoy,
    GemBlue,
    GemGreen,
    Star,
}

impl SpriteId {
    /// Every sprite, in a stable order (useful for preloading)
    pub const ALL: [SpriteId; 8] = [
        SpriteId::WaterBlock,
        SpriteId::StoneBlock,
        SpriteId::GrassBlock,
        SpriteId::EnemyBug,
        SpriteId::CharBoy,
        SpriteId::GemBlue,
        SpriteId::GemGreen,
        SpriteId::Star,
    ];

    /// Asset name of the sprite
    pub fn as_str(&self) -> &'static str {
        match self {
            SpriteId::WaterBlock => "images/water-block.png",
            SpriteId::StoneBlock => "images/stone-block.png",
            SpriteId::GrassBlock => "images/grass-block.png",
            SpriteId::EnemyBug => "images/enemy-bug.png",
            SpriteId::CharBoy => "images/char-boy.png",
            SpriteId::GemBlue => "images/Gem Blue.png",
            SpriteId::GemGreen => "images/Gem Green.png",
            SpriteId::Star => "images/Star.png",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            SpriteId::WaterBlock => 0,
            SpriteId::StoneBlock => 1,
            SpriteId::GrassBlock => 2,
            SpriteId::EnemyBug => 3,
            SpriteId::CharBoy => 4,
            SpriteId::GemBlue => 5,
            SpriteId::GemGreen => 6,
            SpriteId::Star => 7,
        }
    }
}

/// Text colours used by the HUD and feedback labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColor {
    Black,
    White,
    Yellow,
    Red,
}

/// Font description passed to the renderer with every text draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Font {
    pub size_px: u16,
}

/// What a row of the field is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneKind {
    /// Top row; reaching it scores the goal bonus
    Goal,
    /// Rows where enemies run and collectables are placed
    Obstacle,
    /// Start area at the bottom
    Safe,
}

impl LaneKind {
    /// Background tile for this lane
    pub fn background(&self) -> SpriteId {
        match self {
            LaneKind::Goal => SpriteId::WaterBlock,
            LaneKind::Obstacle => SpriteId::StoneBlock,
            LaneKind::Safe => SpriteId::GrassBlock,
        }
    }
}

/// The closed set of bonus item variants
///
/// - **BlueGem**: common, 1 point
/// - **GreenGem**: uncommon, 3 points
/// - **Star**: rare, 10 points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectableKind {
    BlueGem,
    GreenGem,
    Star,
}

impl CollectableKind {
    pub fn points(&self) -> u32 {
        match self {
            CollectableKind::BlueGem => 1,
            CollectableKind::GreenGem => 3,
            CollectableKind::Star => 10,
        }
    }

    /// Chance that an item of this kind is visible in a given round
    pub fn appear_probability(&self) -> f32 {
        match self {
            CollectableKind::BlueGem => 0.6,
            CollectableKind::GreenGem => 0.3,
            CollectableKind::Star => 0.2,
        }
    }

    pub fn sprite(&self) -> SpriteId {
        match self {
            CollectableKind::BlueGem => SpriteId::GemBlue,
            CollectableKind::GreenGem => SpriteId::GemGreen,
            CollectableKind::Star => SpriteId::Star,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectableKind::BlueGem => "blue_gem",
            CollectableKind::GreenGem => "green_gem",
            CollectableKind::Star => "star",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arcade_tuning_defaults() {
        assert_eq!(TILE_WIDTH, 101.0);
        assert_eq!(TILE_HEIGHT, 83.0);
        assert_eq!(DEFAULT_COLS, 5);
        assert_eq!(DEFAULT_OBSTACLE_LANES + DEFAULT_SAFE_ROWS + 1, 6);
        assert_eq!(ENEMY_MIN_SPEED, 250.0);
        assert_eq!(ENEMY_MAX_SPEED, 400.0);
        assert_eq!(GOAL_BONUS, 5);
        assert_eq!(FEEDBACK_DURATION_SECS, 0.5);
    }

    #[test]
    fn direction_parse_is_case_insensitive() {
        assert_eq!(Direction::from_str("Up"), Some(Direction::Up));
        assert_eq!(Direction::from_str("down"), Some(Direction::Down));
        assert_eq!(Direction::from_str("RIGHT"), Some(Direction::Right));
        assert_eq!(Direction::from_str(""), None);
    }

    #[test]
    fn collectable_kinds_carry_points_and_odds() {
        assert_eq!(CollectableKind::BlueGem.points(), 1);
        assert_eq!(CollectableKind::GreenGem.points(), 3);
        assert_eq!(CollectableKind::Star.points(), 10);
        assert!(
            CollectableKind::BlueGem.appear_probability()
                > CollectableKind::Star.appear_probability()
        );
    }
}
