//! Pixel-space [`Canvas`] drawn onto terminal cells.
//!
//! One tile (101×83 px) maps to [`TILE_CELLS_W`] × [`TILE_CELLS_H`] cells.
//! Drawing is clipped to the field rectangle, so enemies waiting left of the
//! field stay hidden until they enter it.

use crate::core::Canvas;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::sprites::{SpriteSheet, TILE_CELLS_H, TILE_CELLS_W};
use crate::types::{Font, SpriteId, TextColor, TILE_HEIGHT, TILE_WIDTH};

/// Text is positioned by its baseline; shift it up to the glyph row.
pub const TEXT_BASELINE_SHIFT_PX: f32 = 40.0;

pub fn text_rgb(color: TextColor) -> Rgb {
    match color {
        TextColor::Black => Rgb::new(15, 15, 15),
        TextColor::White => Rgb::new(255, 255, 255),
        TextColor::Yellow => Rgb::new(255, 230, 0),
        TextColor::Red => Rgb::new(255, 60, 60),
    }
}

/// Convert a pixel position to a cell offset inside the field.
pub fn pixel_to_cell(x: f32, y: f32) -> (i32, i32) {
    (
        (x * TILE_CELLS_W as f32 / TILE_WIDTH).floor() as i32,
        (y * TILE_CELLS_H as f32 / TILE_HEIGHT).floor() as i32,
    )
}

pub struct TermCanvas<'a> {
    fb: &'a mut FrameBuffer,
    sheet: &'a SpriteSheet,
    origin_x: i32,
    origin_y: i32,
    width: i32,
    height: i32,
}

impl<'a> TermCanvas<'a> {
    /// A canvas over the `width × height` cell rectangle at `(origin_x, origin_y)`.
    pub fn new(
        fb: &'a mut FrameBuffer,
        sheet: &'a SpriteSheet,
        origin_x: i32,
        origin_y: i32,
        width: i32,
        height: i32,
    ) -> Self {
        Self {
            fb,
            sheet,
            origin_x,
            origin_y,
            width,
            height,
        }
    }

    fn in_field(&self, cx: i32, cy: i32) -> bool {
        cx >= 0 && cy >= 0 && cx < self.width && cy < self.height
    }
}

impl Canvas for TermCanvas<'_> {
    fn clear_frame(&mut self) {
        self.fb.fill_rect(
            self.origin_x,
            self.origin_y,
            self.width,
            self.height,
            ' ',
            CellStyle::default(),
        );
    }

    fn draw_image(&mut self, sprite: SpriteId, x: f32, y: f32) {
        let entry = *self.sheet.get(sprite);
        let (cx, cy) = pixel_to_cell(x, y + entry.anchor_dy);
        let art = entry.art;

        for (dy, line) in art.rows.iter().enumerate() {
            for (dx, ch) in line.chars().enumerate() {
                let (px, py) = (cx + dx as i32, cy + dy as i32);
                if !self.in_field(px, py) {
                    continue;
                }
                let (fx, fy) = (self.origin_x + px, self.origin_y + py);
                match art.bg {
                    Some(bg) => {
                        let style = CellStyle {
                            fg: art.fg,
                            bg,
                            bold: art.bold,
                        };
                        self.fb.put_char(fx, fy, ch, style);
                    }
                    None if ch != ' ' => self.fb.overlay_char(fx, fy, ch, art.fg, art.bold),
                    None => {}
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, _font: Font, color: TextColor) {
        let (cx, cy) = pixel_to_cell(x, y - TEXT_BASELINE_SHIFT_PX);
        let fg = text_rgb(color);
        for (dx, ch) in text.chars().enumerate() {
            let px = cx + dx as i32;
            if self.in_field(px, cy) {
                self.fb
                    .overlay_char(self.origin_x + px, self.origin_y + cy, ch, fg, true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_corners_map_to_whole_cells() {
        assert_eq!(pixel_to_cell(0.0, 0.0), (0, 0));
        assert_eq!(pixel_to_cell(303.0, 166.0), (24, 6));
        assert_eq!(pixel_to_cell(-1.0, 0.0), (-1, 0));
    }

    #[test]
    fn sprites_left_of_the_field_are_clipped() {
        let sheet = SpriteSheet::builtin();
        let mut fb = FrameBuffer::new(40, 18);
        {
            let mut canvas = TermCanvas::new(&mut fb, &sheet, 0, 0, 40, 18);
            canvas.draw_image(SpriteId::EnemyBug, -200.0, 83.0 - 20.0);
        }
        for y in 0..18 {
            assert_eq!(fb.row_text(y).trim(), "");
        }
    }

    #[test]
    fn transparent_sprite_keeps_tile_background() {
        let sheet = SpriteSheet::builtin();
        let mut fb = FrameBuffer::new(8, 3);
        {
            let mut canvas = TermCanvas::new(&mut fb, &sheet, 0, 0, 8, 3);
            canvas.draw_image(SpriteId::StoneBlock, 0.0, 0.0);
            canvas.draw_image(SpriteId::CharBoy, 0.0, 0.0);
        }
        let head = fb.get(3, 0).unwrap();
        assert_eq!(head.ch, 'O');
        assert_eq!(head.style.bg, Rgb::new(95, 95, 105));
    }
}
