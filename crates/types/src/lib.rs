//! Core types shared across the application.
//! This crate contains pure data types with no external dependencies.

/// Playfield dimensions
pub const PLAYFIELD_COLS: u8 = 10;
pub const PLAYFIELD_ROWS: u8 = 20;

/// Bounding box of a piece preview grid
pub const PREVIEW_SIZE: usize = 4;

/// Gravity timer sizing (milliseconds)
pub const BASE_PERIOD_MS: i32 = 1000;
pub const PERIOD_FLOOR_MS: i32 = 100;
pub const LEVEL_STEP_MS: i32 = 100;

/// Level-up cadence and classic per-line scores (index = lines cleared at once)
pub const LINES_PER_LEVEL: u32 = 10;
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Fallback for terminals that never deliver key-release events: a held Down
/// key with no repeat for this long is treated as released.
pub const RELEASE_TIMEOUT_MS: u64 = 150;

/// Difficulty selected on the start screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties in panel order (left to right)
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Parse from a hotkey character
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'e' => Some(Difficulty::Easy),
            'm' => Some(Difficulty::Medium),
            'h' => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Uppercase panel label
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Easy
    }
}

/// Named keys the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Escape,
    Left,
    Right,
    Up,
    Down,
}

/// Platform-neutral input event, in the three categories the controller
/// distinguishes: repeatable key-down, one-shot key-up, and printable
/// characters (difficulty hotkeys).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    Char(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_hotkeys() {
        assert_eq!(Difficulty::from_char('e'), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_char('m'), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_char('h'), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_char('H'), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_char('x'), None);
    }

    #[test]
    fn test_difficulty_labels_match_order() {
        let labels: Vec<&str> = Difficulty::ALL.iter().map(|d| d.label()).collect();
        assert_eq!(labels, vec!["EASY", "MEDIUM", "HARD"]);
    }
}
