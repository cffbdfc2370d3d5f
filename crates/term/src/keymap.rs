//! Key translation from terminal events to controller input events.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use blockfall_types::{InputEvent, Key};

fn named_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        _ => None,
    }
}

/// Map a terminal key event into one of the controller's three input
/// categories. Presses and terminal auto-repeats both become key-down (the
/// repeat stream is what drives per-repeat soft drop); printable characters
/// become the separate hotkey category.
pub fn map_key_event(key: KeyEvent) -> Option<InputEvent> {
    match key.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => {
            if let Some(named) = named_key(key.code) {
                return Some(InputEvent::KeyDown(named));
            }
            match key.code {
                KeyCode::Char(c) => Some(InputEvent::Char(c.to_ascii_lowercase())),
                _ => None,
            }
        }
        KeyEventKind::Release => named_key(key.code).map(InputEvent::KeyUp),
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Synthesizes a Down release for terminals that never emit key-release
/// events.
///
/// While Down is held the terminal keeps delivering repeat presses; once they
/// stop for longer than the timeout, the key must have been let go and the
/// gravity timer needs its resume event.
#[derive(Debug, Clone)]
pub struct ReleaseWatchdog {
    held_since: Option<Instant>,
    timeout: Duration,
}

impl ReleaseWatchdog {
    pub fn new(timeout: Duration) -> Self {
        Self {
            held_since: None,
            timeout,
        }
    }

    /// Track an event on its way to the controller.
    pub fn note(&mut self, event: &InputEvent, now: Instant) {
        match event {
            InputEvent::KeyDown(Key::Down) => self.held_since = Some(now),
            InputEvent::KeyUp(Key::Down) => self.held_since = None,
            _ => {}
        }
    }

    /// Returns the synthetic release once the repeat stream has gone quiet.
    pub fn poll(&mut self, now: Instant) -> Option<InputEvent> {
        let held_since = self.held_since?;
        if now.duration_since(held_since) >= self.timeout {
            self.held_since = None;
            return Some(InputEvent::KeyUp(Key::Down));
        }
        None
    }
}
