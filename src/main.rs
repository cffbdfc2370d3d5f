//! Blockfall terminal runner (default binary).
//!
//! Owns the event loop: flush the framebuffer, wait for input until the next
//! gravity deadline, feed translated events to the controller.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event};

use blockfall::control::Controller;
use blockfall::game::Game;
use blockfall::term::{map_key_event, should_quit, FrameBuffer, ReleaseWatchdog, TerminalRenderer};
use blockfall::types::{PLAYFIELD_COLS, PLAYFIELD_ROWS, RELEASE_TIMEOUT_MS};
use blockfall::view::View;

/// Poll cadence while no gravity timer is armed (start screen, pause).
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let (width, height) = crossterm::terminal::size().unwrap_or((96, 32));

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1);

    let view = View::new(
        FrameBuffer::new(width, height),
        PLAYFIELD_ROWS,
        PLAYFIELD_COLS,
    );
    let mut controller = Controller::new(Game::new(seed), view);
    let mut watchdog = ReleaseWatchdog::new(Duration::from_millis(RELEASE_TIMEOUT_MS));

    loop {
        term.draw(controller.view().surface())?;

        let timeout = controller
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(input) = map_key_event(key) {
                        let now = Instant::now();
                        watchdog.note(&input, now);
                        controller.handle_event(input, now);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        if let Some(release) = watchdog.poll(now) {
            controller.handle_event(release, now);
        }
        controller.advance(now);
    }
}
