//! Read-only state projection handed to the view.

use blockfall_types::{Difficulty, PLAYFIELD_COLS, PLAYFIELD_ROWS, PREVIEW_SIZE};

/// Bounding-box grid of the upcoming piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PiecePreview {
    pub blocks: [[bool; PREVIEW_SIZE]; PREVIEW_SIZE],
}

/// Point-in-time projection of the engine state.
///
/// `playfield` is pure occupancy (the active piece already merged in); its
/// dimensions are fixed for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub playfield: [[bool; PLAYFIELD_COLS as usize]; PLAYFIELD_ROWS as usize],
    pub level: u32,
    pub difficulty: Difficulty,
    pub score: u32,
    pub lines: u32,
    pub next_piece: PiecePreview,
    pub is_game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            playfield: [[false; PLAYFIELD_COLS as usize]; PLAYFIELD_ROWS as usize],
            level: 0,
            difficulty: Difficulty::default(),
            score: 0,
            lines: 0,
            next_piece: PiecePreview {
                blocks: [[false; PREVIEW_SIZE]; PREVIEW_SIZE],
            },
            is_game_over: false,
        }
    }
}
