//! Concrete engine: classic rules over board + pieces + 7-bag.

use blockfall_types::{Difficulty, LINES_PER_LEVEL, LINE_SCORES, PLAYFIELD_COLS, PLAYFIELD_ROWS};

use crate::board::Board;
use crate::pieces::{preview_blocks, shape, PieceKind, Rotation, SPAWN_POSITION};
use crate::rng::PieceBag;
use crate::snapshot::{GameSnapshot, PiecePreview};
use crate::Engine;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq)]
struct Tetromino {
    kind: PieceKind,
    rotation: Rotation,
    x: i8,
    y: i8,
}

impl Tetromino {
    fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
        }
    }

    fn minos(&self) -> [(i8, i8); 4] {
        shape(self.kind, self.rotation)
    }

    fn fits(&self, board: &Board) -> bool {
        self.minos()
            .iter()
            .all(|&(dx, dy)| board.is_free(self.x + dx, self.y + dy))
    }
}

/// Classic falling-block game.
///
/// All commands are safe: an invalid move leaves the state unchanged, and
/// every command is a no-op once the game has topped out.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Tetromino,
    next: PieceKind,
    bag: PieceBag,
    score: u32,
    lines: u32,
    difficulty: Difficulty,
    game_over: bool,
}

impl Game {
    pub fn new(seed: u32) -> Self {
        let mut bag = PieceBag::new(seed);
        let active = Tetromino::spawn(bag.draw());
        let next = bag.draw();
        Self {
            board: Board::new(),
            active,
            next,
            bag,
            score: 0,
            lines: 0,
            difficulty: Difficulty::default(),
            game_over: false,
        }
    }

    fn level(&self) -> u32 {
        self.lines / LINES_PER_LEVEL
    }

    /// Shift the active piece, reverting on collision. Returns whether it moved.
    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        let mut moved = self.active;
        moved.x += dx;
        moved.y += dy;
        if moved.fits(&self.board) {
            self.active = moved;
            true
        } else {
            false
        }
    }

    /// Freeze the active piece into the board, score any cleared rows, and
    /// spawn the next piece. A spawn into collision tops the game out.
    fn lock_and_spawn(&mut self) {
        self.board
            .fill(&self.active.minos(), self.active.x, self.active.y, self.active.kind);

        let cleared = self.board.clear_full_rows().len();
        if cleared > 0 {
            // Score with the pre-clear level, matching classic rules.
            self.score += LINE_SCORES[cleared] * (self.level() + 1);
            self.lines += cleared as u32;
        }

        self.active = Tetromino::spawn(self.next);
        self.next = self.bag.draw();
        if !self.active.fits(&self.board) {
            self.game_over = true;
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn active_position(&self) -> (i8, i8) {
        (self.active.x, self.active.y)
    }
}

impl Engine for Game {
    fn state(&self) -> GameSnapshot {
        let mut playfield = [[false; PLAYFIELD_COLS as usize]; PLAYFIELD_ROWS as usize];
        let width = PLAYFIELD_COLS as usize;
        for (i, cell) in self.board.cells().iter().enumerate() {
            if cell.is_some() {
                playfield[i / width][i % width] = true;
            }
        }
        for (dx, dy) in self.active.minos() {
            let x = self.active.x + dx;
            let y = self.active.y + dy;
            if (0..PLAYFIELD_COLS as i8).contains(&x) && (0..PLAYFIELD_ROWS as i8).contains(&y) {
                playfield[y as usize][x as usize] = true;
            }
        }

        GameSnapshot {
            playfield,
            level: self.level(),
            difficulty: self.difficulty,
            score: self.score,
            lines: self.lines,
            next_piece: PiecePreview {
                blocks: preview_blocks(self.next),
            },
            is_game_over: self.game_over,
        }
    }

    fn move_piece_down(&mut self) {
        if self.game_over {
            return;
        }
        if !self.try_shift(0, 1) {
            self.lock_and_spawn();
        }
    }

    fn move_piece_left(&mut self) {
        if !self.game_over {
            self.try_shift(-1, 0);
        }
    }

    fn move_piece_right(&mut self) {
        if !self.game_over {
            self.try_shift(1, 0);
        }
    }

    fn rotate_piece(&mut self) {
        if self.game_over {
            return;
        }
        let mut rotated = self.active;
        rotated.rotation = rotated.rotation.rotate_cw();
        if rotated.fits(&self.board) {
            self.active = rotated;
        }
    }

    fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.game_over = false;
        self.active = Tetromino::spawn(self.bag.draw());
        self.next = self.bag.draw();
        // Difficulty is managed by the controller and survives a reset.
    }

    fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }
}
