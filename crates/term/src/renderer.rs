//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize or [`TerminalRenderer::invalidate`])
//! is a full redraw; every other frame only rewrites the runs of cells that
//! changed since the previous one.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(32 * 1024),
        }
    }

    /// Switch to raw mode on the alternate screen with the cursor hidden.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Undo [`TerminalRenderer::enter`].
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next frame to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Present `fb`, then swap it with the previous frame.
    ///
    /// After the call `fb` holds stale contents the caller overwrites next
    /// frame, so no buffer is ever cloned.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Tracks the terminal's active style so only changes are emitted.
#[derive(Default)]
struct StyleCursor {
    current: Option<CellStyle>,
}

impl StyleCursor {
    fn apply(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        let prev = self.current.replace(style);
        if prev == Some(style) {
            return Ok(());
        }

        let bold_changed = prev.map_or(true, |p| p.bold != style.bold);
        if bold_changed {
            // Resetting attributes also resets colors, so re-send both after.
            out.queue(SetAttribute(Attribute::Reset))?;
            if style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
        }
        if bold_changed || prev.map(|p| p.fg) != Some(style.fg) {
            out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        }
        if bold_changed || prev.map(|p| p.bg) != Some(style.bg) {
            out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        }
        Ok(())
    }

    fn finish(self, out: &mut Vec<u8>) -> Result<()> {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out` without touching stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut style = StyleCursor::default();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            style.apply(out, cell.style)?;
            out.queue(Print(cell.ch))?;
        }
    }
    style.finish(out)
}

/// Encode only the cells of `next` that differ from `prev`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style = StyleCursor::default();

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for cx in x..x + len {
            let cell = next.get(cx, y).unwrap_or_default();
            style.apply(out, cell.style)?;
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    style.finish(out)
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Call `f(x, y, len)` for every maximal horizontal run of changed cells.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let changed = |x: u16, y: u16| prev.get(x, y) != next.get(x, y);
    for y in 0..next.height() {
        let mut run_start: Option<u16> = None;
        for x in 0..next.width() {
            match (changed(x, y), run_start) {
                (true, None) => run_start = Some(x),
                (false, Some(start)) => {
                    f(start, y, x - start)?;
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            f(start, y, next.width() - start)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(a: &FrameBuffer, b: &FrameBuffer) -> Vec<(u16, u16, u16)> {
        let mut runs = Vec::new();
        for_each_changed_run(a, b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        runs
    }

    #[test]
    fn adjacent_changes_coalesce_into_one_run() {
        let a = FrameBuffer::new(6, 1);
        let mut b = FrameBuffer::new(6, 1);
        b.put_str(1, 0, "XYZ", CellStyle::default());
        assert_eq!(runs(&a, &b), vec![(1, 0, 3)]);
    }

    #[test]
    fn run_touching_the_right_edge_is_flushed() {
        let a = FrameBuffer::new(4, 2);
        let mut b = FrameBuffer::new(4, 2);
        b.put_str(2, 1, "ab", CellStyle::default());
        assert_eq!(runs(&a, &b), vec![(2, 1, 2)]);
    }

    #[test]
    fn identical_frames_encode_no_cells() {
        let a = FrameBuffer::new(3, 3);
        let mut out = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut out).unwrap();
        assert!(!String::from_utf8_lossy(&out).contains(' '));
    }

    #[test]
    fn full_redraw_prints_every_glyph() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(0, 0, "abc", CellStyle::default().bold());
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        assert!(String::from_utf8_lossy(&out).contains("abc"));
    }
}
