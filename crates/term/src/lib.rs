//! Terminal front end for the crossing game.
//!
//! Rendering goes through a plain framebuffer instead of a widget toolkit:
//! the simulation draws in pixel space onto a [`TermCanvas`], which maps
//! every tile to a fixed block of character cells. [`TerminalRenderer`]
//! then flushes only what changed since the last frame.

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod sprites;

pub use tui_crossing_core as core;
pub use tui_crossing_types as types;

pub use canvas::{pixel_to_cell, text_rgb, TermCanvas};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, FieldLayout, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sprites::{SpriteArt, SpriteEntry, SpriteSheet, TILE_CELLS_H, TILE_CELLS_W};
