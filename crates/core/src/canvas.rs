//! Drawing surface used by the simulation's render pass.
//!
//! The simulation never touches pixels or terminal cells directly. It issues
//! draw calls in pixel coordinates against a [`Canvas`]; the host supplies the
//! implementation.

use crate::types::{Font, SpriteId, TextColor};

pub trait Canvas {
    /// Erase the whole frame before a redraw.
    fn clear_frame(&mut self);

    /// Draw `sprite` with its top-left corner at pixel `(x, y)`.
    fn draw_image(&mut self, sprite: SpriteId, x: f32, y: f32);

    /// Draw `text` with its baseline starting at pixel `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font: Font, color: TextColor);
}

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Image {
        sprite: SpriteId,
        x: f32,
        y: f32,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font: Font,
        color: TextColor,
    },
}

/// Canvas that records draw calls in order instead of drawing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop recorded commands, keeping the allocation.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Sprites drawn, in draw order.
    pub fn images(&self) -> impl Iterator<Item = (SpriteId, f32, f32)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Image { sprite, x, y } => Some((*sprite, *x, *y)),
            _ => None,
        })
    }

    /// Text strings drawn, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn clear_frame(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_image(&mut self, sprite: SpriteId, x: f32, y: f32) {
        self.commands.push(DrawCommand::Image { sprite, x, y });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font: Font, color: TextColor) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font,
            color,
        });
    }
}
