//! Tetromino shapes.
//!
//! Pieces are mino offsets relative to a piece origin, one shape per rotation
//! state. Rotation is attempt-and-revert at the engine level; there are no
//! wall kicks.

use blockfall_types::PREVIEW_SIZE;

/// The seven tetromino kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// One of each, bag order before shuffling
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// Rotation states (North = spawn orientation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub fn rotate_cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }
}

/// Offsets of the four minos from the piece origin
pub type PieceShape = [(i8, i8); 4];

/// Spawn position for new pieces (x, y)
pub const SPAWN_POSITION: (i8, i8) = (3, 0);

/// Get the shape (mino offsets) for a piece kind and rotation.
///
/// All offsets stay within the piece's 4x4 bounding box so the spawn shape
/// doubles as the preview grid.
pub fn shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    use Rotation::*;
    match kind {
        PieceKind::I => match rotation {
            North => [(0, 1), (1, 1), (2, 1), (3, 1)],
            East => [(2, 0), (2, 1), (2, 2), (2, 3)],
            South => [(0, 2), (1, 2), (2, 2), (3, 2)],
            West => [(1, 0), (1, 1), (1, 2), (1, 3)],
        },
        PieceKind::O => [(1, 0), (2, 0), (1, 1), (2, 1)],
        PieceKind::T => match rotation {
            North => [(1, 0), (0, 1), (1, 1), (2, 1)],
            East => [(1, 0), (1, 1), (2, 1), (1, 2)],
            South => [(0, 1), (1, 1), (2, 1), (1, 2)],
            West => [(1, 0), (0, 1), (1, 1), (1, 2)],
        },
        PieceKind::S => match rotation {
            North => [(1, 0), (2, 0), (0, 1), (1, 1)],
            East => [(1, 0), (1, 1), (2, 1), (2, 2)],
            South => [(1, 1), (2, 1), (0, 2), (1, 2)],
            West => [(0, 0), (0, 1), (1, 1), (1, 2)],
        },
        PieceKind::Z => match rotation {
            North => [(0, 0), (1, 0), (1, 1), (2, 1)],
            East => [(2, 0), (1, 1), (2, 1), (1, 2)],
            South => [(0, 1), (1, 1), (1, 2), (2, 2)],
            West => [(1, 0), (0, 1), (1, 1), (0, 2)],
        },
        PieceKind::J => match rotation {
            North => [(0, 0), (0, 1), (1, 1), (2, 1)],
            East => [(1, 0), (2, 0), (1, 1), (1, 2)],
            South => [(0, 1), (1, 1), (2, 1), (2, 2)],
            West => [(1, 0), (1, 1), (0, 2), (1, 2)],
        },
        PieceKind::L => match rotation {
            North => [(2, 0), (0, 1), (1, 1), (2, 1)],
            East => [(1, 0), (1, 1), (1, 2), (2, 2)],
            South => [(0, 1), (1, 1), (2, 1), (0, 2)],
            West => [(0, 0), (1, 0), (1, 1), (1, 2)],
        },
    }
}

/// Spawn-orientation bounding-box grid, as exported in the snapshot's
/// next-piece preview.
pub fn preview_blocks(kind: PieceKind) -> [[bool; PREVIEW_SIZE]; PREVIEW_SIZE] {
    let mut blocks = [[false; PREVIEW_SIZE]; PREVIEW_SIZE];
    for (dx, dy) in shape(kind, Rotation::North) {
        blocks[dy as usize][dx as usize] = true;
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_rotations() -> [Rotation; 4] {
        [
            Rotation::North,
            Rotation::East,
            Rotation::South,
            Rotation::West,
        ]
    }

    #[test]
    fn test_every_shape_has_four_distinct_minos() {
        for kind in PieceKind::ALL {
            for rotation in all_rotations() {
                let s = shape(kind, rotation);
                for i in 0..4 {
                    for j in (i + 1)..4 {
                        assert_ne!(s[i], s[j], "{:?} {:?} has duplicate minos", kind, rotation);
                    }
                }
            }
        }
    }

    #[test]
    fn test_shapes_fit_preview_bounding_box() {
        for kind in PieceKind::ALL {
            for rotation in all_rotations() {
                for (dx, dy) in shape(kind, rotation) {
                    assert!((0..PREVIEW_SIZE as i8).contains(&dx));
                    assert!((0..PREVIEW_SIZE as i8).contains(&dy));
                }
            }
        }
    }

    #[test]
    fn test_rotation_cycles_back_after_four_turns() {
        let mut r = Rotation::North;
        for _ in 0..4 {
            r = r.rotate_cw();
        }
        assert_eq!(r, Rotation::North);
    }

    #[test]
    fn test_preview_blocks_match_spawn_shape() {
        let blocks = preview_blocks(PieceKind::O);
        let filled: usize = blocks.iter().flatten().filter(|b| **b).count();
        assert_eq!(filled, 4);
        assert!(blocks[0][1] && blocks[0][2] && blocks[1][1] && blocks[1][2]);
    }
}
