//! Layout metrics, computed once at construction and frozen.

use blockfall_types::Difficulty;

/// Horizontal distance of the easy/hard labels from the surface midpoint.
pub const DIFFICULTY_SLOT_OFFSET: u16 = 10;

/// Rows below vertical center where the difficulty labels sit.
const LABEL_ROW_DROP: u16 = 5;

/// Gap between the playfield frame and the side panel.
const PANEL_GAP: u16 = 2;

/// Frozen geometry for a given surface size and logical grid.
///
/// The playfield takes the left two thirds of the surface, the side panel the
/// remaining third. Block cell size is derived from the playfield interior
/// and the logical row/column count; none of these change after construction
/// even though snapshots are re-read every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: u16,
    pub height: u16,
    /// Playfield frame thickness
    pub border: u16,
    pub playfield_x: u16,
    pub playfield_y: u16,
    pub playfield_w: u16,
    pub playfield_h: u16,
    pub block_w: u16,
    pub block_h: u16,
    pub panel_x: u16,
    pub panel_y: u16,
    pub panel_w: u16,
    /// Row of the difficulty labels
    pub label_row: u16,
    /// Band cleared and redrawn by the selection underline
    pub underline_row: u16,
}

impl Layout {
    pub fn new(width: u16, height: u16, rows: u8, cols: u8) -> Self {
        let border = 1;
        let playfield_w = width * 2 / 3;
        let playfield_h = height;
        let inner_w = playfield_w.saturating_sub(border * 2);
        let inner_h = playfield_h.saturating_sub(border * 2);
        let label_row = height / 2 + LABEL_ROW_DROP;

        Self {
            width,
            height,
            border,
            playfield_x: border,
            playfield_y: border,
            playfield_w,
            playfield_h,
            block_w: inner_w / cols.max(1) as u16,
            block_h: inner_h / rows.max(1) as u16,
            panel_x: playfield_w + PANEL_GAP,
            panel_y: 0,
            panel_w: width / 3,
            label_row,
            underline_row: label_row + 1,
        }
    }

    /// Fixed x-position of a difficulty label (its center).
    pub fn difficulty_x(&self, difficulty: Difficulty) -> u16 {
        let mid = self.width / 2;
        match difficulty {
            Difficulty::Easy => mid.saturating_sub(DIFFICULTY_SLOT_OFFSET),
            Difficulty::Medium => mid,
            Difficulty::Hard => mid + DIFFICULTY_SLOT_OFFSET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playfield_takes_left_two_thirds() {
        let layout = Layout::new(96, 32, 20, 10);
        assert_eq!(layout.playfield_w, 64);
        assert_eq!(layout.panel_w, 32);
        assert!(layout.panel_x > layout.playfield_w);
    }

    #[test]
    fn test_block_size_divides_playfield_interior() {
        let layout = Layout::new(96, 44, 20, 10);
        // Interior is 62x42 for a 64x44 playfield with 1px border.
        assert_eq!(layout.block_w, 62 / 10);
        assert_eq!(layout.block_h, 42 / 20);
    }

    #[test]
    fn test_difficulty_positions_are_symmetric_around_center() {
        let layout = Layout::new(96, 32, 20, 10);
        let mid = 48;
        assert_eq!(layout.difficulty_x(Difficulty::Easy), mid - DIFFICULTY_SLOT_OFFSET);
        assert_eq!(layout.difficulty_x(Difficulty::Medium), mid);
        assert_eq!(layout.difficulty_x(Difficulty::Hard), mid + DIFFICULTY_SLOT_OFFSET);
    }

    #[test]
    fn test_underline_band_sits_below_labels() {
        let layout = Layout::new(96, 32, 20, 10);
        assert_eq!(layout.underline_row, layout.label_row + 1);
    }
}
