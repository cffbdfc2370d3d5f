//! Screen renderers.

use blockfall_game::GameSnapshot;
use blockfall_types::Difficulty;

use crate::layout::Layout;
use crate::surface::{FontSize, Rgb, Surface, TextAlign};

/// Light block fill and text
const SAND: Rgb = Rgb::new(245, 222, 179);
/// Dark trim: block inners, outlines, the underline
const UMBER: Rgb = Rgb::new(139, 69, 19);

/// Vertical gap between side panel lines
const PANEL_ROW_STEP: u16 = 2;
/// Rows between the "Next:" caption and the preview grid
const PREVIEW_DROP: u16 = 2;

/// Stateless-per-call projector of game snapshots onto a [`Surface`].
///
/// Owns the surface handle and the frozen [`Layout`]; retains no game data
/// between calls. The controller picks exactly one render method per frame.
pub struct View<S: Surface> {
    surface: S,
    layout: Layout,
}

impl<S: Surface> View<S> {
    /// Freeze layout metrics for the surface's dimensions and the logical
    /// grid size.
    pub fn new(surface: S, rows: u8, cols: u8) -> Self {
        let layout = Layout::new(surface.width(), surface.height(), rows, cols);
        Self { surface, layout }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn render_start_screen(&mut self) {
        let (w, h) = (self.layout.width, self.layout.height);
        self.surface.clear_rect(0, 0, w, h);
        self.surface.fill_text(
            "Press ENTER to Start",
            w / 2,
            h / 2,
            FontSize::Title,
            TextAlign::Center,
            SAND,
        );
        self.surface.fill_text(
            "Press (E, M, H) to Change Difficulty",
            w / 2,
            h / 2 + 2,
            FontSize::Small,
            TextAlign::Center,
            SAND,
        );
        self.render_difficulty_panel();
    }

    /// Washes over whatever frame is already on the surface; deliberately no
    /// clear, so the playfield stays visible under the tint.
    pub fn render_pause_screen(&mut self) {
        let (w, h) = (self.layout.width, self.layout.height);
        self.surface.tint_rect(0, 0, w, h);
        self.surface.fill_text(
            "Press ENTER to Resume",
            w / 2,
            h / 2,
            FontSize::Title,
            TextAlign::Center,
            SAND,
        );
        self.surface.fill_text(
            "Press ESCAPE to Return",
            w / 2,
            h / 2 + 3,
            FontSize::Title,
            TextAlign::Center,
            SAND,
        );
    }

    pub fn render_end_screen(&mut self, state: &GameSnapshot) {
        let (w, h) = (self.layout.width, self.layout.height);
        self.surface.clear_rect(0, 0, w, h);
        self.surface.fill_text(
            "GAME OVER",
            w / 2,
            h / 2 - 3,
            FontSize::Title,
            TextAlign::Center,
            SAND,
        );
        self.surface.fill_text(
            &format!("Score: {}", state.score),
            w / 2,
            h / 2,
            FontSize::Title,
            TextAlign::Center,
            SAND,
        );
        self.surface.fill_text(
            "Press ENTER to Restart",
            w / 2,
            h / 2 + 3,
            FontSize::Title,
            TextAlign::Center,
            SAND,
        );
    }

    pub fn render_main_screen(&mut self, state: &GameSnapshot) {
        let (w, h) = (self.layout.width, self.layout.height);
        self.surface.clear_rect(0, 0, w, h);
        self.render_playfield(state);
        self.render_panel(state);
    }

    fn render_playfield(&mut self, state: &GameSnapshot) {
        let l = self.layout;
        for (y, row) in state.playfield.iter().enumerate() {
            for (x, occupied) in row.iter().enumerate() {
                if *occupied {
                    self.render_block(
                        l.playfield_x + x as u16 * l.block_w,
                        l.playfield_y + y as u16 * l.block_h,
                        l.block_w,
                        l.block_h,
                    );
                }
            }
        }
        self.surface.stroke_rect(0, 0, l.playfield_w, l.playfield_h, UMBER);
    }

    fn render_panel(&mut self, state: &GameSnapshot) {
        let l = self.layout;
        let lines = [
            format!("Score: {}", state.score),
            format!("Lines: {}", state.lines),
            format!("Level: {}", state.level),
            format!("Difficulty: {}", state.difficulty.as_str()),
            "Next:".to_string(),
        ];
        for (i, line) in lines.iter().enumerate() {
            self.surface.fill_text(
                line,
                l.panel_x,
                l.panel_y + i as u16 * PANEL_ROW_STEP,
                FontSize::Body,
                TextAlign::Left,
                SAND,
            );
        }

        // Half-scale preview of the upcoming piece.
        let pw = (l.block_w / 2).max(1);
        let ph = (l.block_h / 2).max(1);
        let top = l.panel_y + lines.len() as u16 * PANEL_ROW_STEP + PREVIEW_DROP;
        for (y, row) in state.next_piece.blocks.iter().enumerate() {
            for (x, block) in row.iter().enumerate() {
                if *block {
                    self.render_block(l.panel_x + x as u16 * pw, top + y as u16 * ph, pw, ph);
                }
            }
        }
    }

    /// Two-layer decorated cell: filled and outlined square with a smaller
    /// centered inner square of the contrasting fill. Works at any size and
    /// is reused for playfield cells and the half-scale preview.
    pub fn render_block(&mut self, x: u16, y: u16, w: u16, h: u16) {
        if w == 0 || h == 0 {
            return;
        }
        self.surface.fill_rect(x, y, w, h, SAND);
        self.surface.stroke_rect(x, y, w, h, UMBER);

        let inner_w = w / 2;
        let inner_h = h / 2;
        if inner_w > 0 && inner_h > 0 {
            self.surface.fill_rect(
                x + (w - inner_w) / 2,
                y + (h - inner_h) / 2,
                inner_w,
                inner_h,
                UMBER,
            );
        }
    }

    fn render_difficulty_panel(&mut self) {
        let l = self.layout;
        for difficulty in Difficulty::ALL {
            self.surface.fill_text(
                difficulty.label(),
                l.difficulty_x(difficulty),
                l.label_row,
                FontSize::Label,
                TextAlign::Center,
                SAND,
            );
        }
    }

    /// Move the difficulty selection underline to sit centered under `x`.
    ///
    /// The whole band below the label row is cleared first so a previous
    /// underline can never survive as a ghost, then the new one is drawn at
    /// the measured width of the uppercased label.
    pub fn add_underline(&mut self, label: &str, x: u16) {
        let text = label.to_uppercase();
        let text_w = self.surface.text_width(&text, FontSize::Label);
        let descent = self.surface.text_descent(FontSize::Label);
        let band_y = self.layout.label_row + descent;

        self.surface.clear_rect(0, band_y, self.layout.width, 1);
        let start = x.saturating_sub(text_w / 2);
        self.surface.fill_rect(start, band_y, text_w, 1, UMBER);
    }
}
