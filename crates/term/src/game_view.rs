//! GameView: draws a [`Simulation`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). The field is framed by a border and
//! centered in the viewport, with a key-hint line under it.

use crate::canvas::TermCanvas;
use crate::core::Simulation;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::sprites::{SpriteSheet, TILE_CELLS_H, TILE_CELLS_W};

const HINTS: &str = "arrows/wasd move  q quit";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the bordered field lands inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    /// Top-left corner of the border
    pub frame_x: i32,
    pub frame_y: i32,
    /// Field size in cells, border excluded
    pub field_w: i32,
    pub field_h: i32,
}

impl FieldLayout {
    pub fn frame_w(&self) -> i32 {
        self.field_w + 2
    }

    pub fn frame_h(&self) -> i32 {
        self.field_h + 2
    }
}

#[derive(Debug, Clone)]
pub struct GameView {
    sheet: SpriteSheet,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            sheet: SpriteSheet::builtin(),
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(sheet: SpriteSheet) -> Self {
        Self {
            sheet,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn layout(&self, sim: &Simulation, viewport: Viewport) -> FieldLayout {
        let grid = sim.grid();
        let field_w = grid.cols() * TILE_CELLS_W;
        let field_h = grid.rows() * TILE_CELLS_H;
        // Border plus the hint line.
        let total_h = field_h + 3;

        let frame_x = (viewport.width as i32 - (field_w + 2)).max(0) / 2;
        let frame_y = match self.anchor_y {
            AnchorY::Center => (viewport.height as i32 - total_h).max(0) / 2,
            AnchorY::Top => 0,
        };
        FieldLayout {
            frame_x,
            frame_y,
            field_w,
            field_h,
        }
    }

    /// Render the scene into an existing framebuffer.
    ///
    /// Callers reuse one framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, sim: &Simulation, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let layout = self.layout(sim, viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        draw_border(fb, &layout, border);

        {
            let mut canvas = TermCanvas::new(
                fb,
                &self.sheet,
                layout.frame_x + 1,
                layout.frame_y + 1,
                layout.field_w,
                layout.field_h,
            );
            sim.render(&mut canvas);
        }

        let hint_w = HINTS.chars().count() as i32;
        let hint_x = layout.frame_x + (layout.frame_w() - hint_w).max(0) / 2;
        let hint = CellStyle::new(Rgb::new(140, 140, 150), Rgb::new(0, 0, 0));
        fb.put_str(hint_x, layout.frame_y + layout.frame_h(), HINTS, hint);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, sim: &Simulation, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(sim, viewport, &mut fb);
        fb
    }
}

fn draw_border(fb: &mut FrameBuffer, layout: &FieldLayout, style: CellStyle) {
    let (x, y) = (layout.frame_x, layout.frame_y);
    let (w, h) = (layout.frame_w(), layout.frame_h());

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);
    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
