//! Framebuffer of styled character cells, implementing the view's surface
//! contract.

use blockfall_view::{FontSize, Rgb, Surface, TextAlign};

/// Blank background color
const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
/// Wash color for the pause overlay
const TINT: Rgb = Rgb::new(245, 222, 179);

/// Per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: BACKGROUND,
            bold: false,
            dim: false,
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

/// 2D grid of styled cells. One surface pixel maps to one cell; text is one
/// cell per character with a one-row descent.
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

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Row `y` as a string, for tests that scan rendered text.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .map(|x| self.get(x, y).map(|c| c.ch).unwrap_or(' '))
            .collect()
    }

    fn put_char(&mut self, x: u16, y: u16, ch: char, style: Style) {
        self.set(x, y, Cell { ch, style });
    }

    /// Overwrite a cell's glyph and foreground, keeping its background.
    fn put_glyph(&mut self, x: u16, y: u16, ch: char, fg: Rgb, bold: bool) {
        if let Some(i) = self.idx(x, y) {
            let bg = self.cells[i].style.bg;
            self.cells[i] = Cell {
                ch,
                style: Style {
                    fg,
                    bg,
                    bold,
                    dim: false,
                },
            };
        }
    }
}

/// Average toward the tint color, 3:1 in the tint's favor.
fn washed(c: Rgb) -> Rgb {
    Rgb::new(
        ((c.r as u16 + 3 * TINT.r as u16) / 4) as u8,
        ((c.g as u16 + 3 * TINT.g as u16) / 4) as u8,
        ((c.b as u16 + 3 * TINT.b as u16) / 4) as u8,
    )
}

impl Surface for FrameBuffer {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn clear_rect(&mut self, x: u16, y: u16, w: u16, h: u16) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x.saturating_add(dx), y.saturating_add(dy), Cell::default());
            }
        }
    }

    fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Rgb) {
        let style = Style {
            fg: color,
            bg: color,
            bold: false,
            dim: false,
        };
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ' ', style);
            }
        }
    }

    fn stroke_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Rgb) {
        if w == 0 || h == 0 {
            return;
        }
        let (x1, y1) = (x + w - 1, y + h - 1);

        if w >= 2 && h >= 2 {
            self.put_glyph(x, y, '┌', color, false);
            self.put_glyph(x1, y, '┐', color, false);
            self.put_glyph(x, y1, '└', color, false);
            self.put_glyph(x1, y1, '┘', color, false);
            for dx in 1..w - 1 {
                self.put_glyph(x + dx, y, '─', color, false);
                self.put_glyph(x + dx, y1, '─', color, false);
            }
            for dy in 1..h - 1 {
                self.put_glyph(x, y + dy, '│', color, false);
                self.put_glyph(x1, y + dy, '│', color, false);
            }
        } else {
            // Too thin for a box: a plain edge run.
            for dy in 0..h {
                for dx in 0..w {
                    self.put_glyph(x + dx, y + dy, '─', color, false);
                }
            }
        }
    }

    fn tint_rect(&mut self, x: u16, y: u16, w: u16, h: u16) {
        for dy in 0..h {
            for dx in 0..w {
                if let Some(i) = self.idx(x.saturating_add(dx), y.saturating_add(dy)) {
                    let cell = &mut self.cells[i];
                    cell.style.fg = washed(cell.style.fg);
                    cell.style.bg = washed(cell.style.bg);
                    cell.style.dim = true;
                }
            }
        }
    }

    fn fill_text(&mut self, text: &str, x: u16, y: u16, size: FontSize, align: TextAlign, color: Rgb) {
        let width = self.text_width(text, size);
        let start = match align {
            TextAlign::Left => x,
            TextAlign::Center => x.saturating_sub(width / 2),
        };
        let bold = size == FontSize::Title;
        for (i, ch) in text.chars().enumerate() {
            let cx = start.saturating_add(i as u16);
            if cx >= self.width {
                break;
            }
            self.put_glyph(cx, y, ch, color, bold);
        }
    }

    fn text_width(&self, text: &str, _size: FontSize) -> u16 {
        text.chars().count() as u16
    }

    fn text_descent(&self, _size: FontSize) -> u16 {
        1
    }
}
