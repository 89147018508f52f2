//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self { fg, bg, bold: false }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
///
/// Writes outside the buffer are silently clipped; coordinates are signed so
/// callers can draw partially off-screen sprites without pre-clipping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer, reusing the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells
            .resize((width as usize) * (height as usize), Cell::default());
    }

    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x as i32, y as i32).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn put_char(&mut self, x: i32, y: i32, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Draw a glyph over whatever is there, keeping the existing background.
    pub fn overlay_char(&mut self, x: i32, y: i32, ch: char, fg: Rgb, bold: bool) {
        if let Some(i) = self.idx(x, y) {
            let under = self.cells[i].style;
            self.cells[i] = Cell {
                ch,
                style: CellStyle { fg, bg: under.bg, bold },
            };
        }
    }

    pub fn put_str(&mut self, x: i32, y: i32, s: &str, style: CellStyle) {
        for (dx, ch) in s.chars().enumerate() {
            self.put_char(x + dx as i32, y, ch, style);
        }
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x + dx, y + dy, ch, style);
            }
        }
    }

    /// Characters of row `y` as a string (empty when out of range).
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}
