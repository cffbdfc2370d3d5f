//! Controller timing and lifecycle tests under a simulated clock.

use std::time::{Duration, Instant};

use blockfall::control::{Controller, Phase};
use blockfall::game::{Engine, Game, GameSnapshot};
use blockfall::term::FrameBuffer;
use blockfall::types::{Difficulty, InputEvent, Key, PLAYFIELD_COLS, PLAYFIELD_ROWS};
use blockfall::view::{Rgb, Surface, View};

const UNDERLINE: Rgb = Rgb::new(139, 69, 19);

/// Engine double that counts gravity commands and serves a scripted snapshot.
#[derive(Default)]
struct CountingEngine {
    snapshot: GameSnapshot,
    downs: u32,
    resets: u32,
}

impl Engine for CountingEngine {
    fn state(&self) -> GameSnapshot {
        self.snapshot
    }

    fn move_piece_down(&mut self) {
        self.downs += 1;
    }

    fn move_piece_left(&mut self) {}
    fn move_piece_right(&mut self) {}
    fn rotate_piece(&mut self) {}

    fn reset(&mut self) {
        self.resets += 1;
        self.snapshot.score = 0;
        self.snapshot.level = 0;
        self.snapshot.is_game_over = false;
    }

    fn difficulty(&self) -> Difficulty {
        self.snapshot.difficulty
    }

    fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.snapshot.difficulty = difficulty;
    }
}

fn counting_controller() -> Controller<CountingEngine, FrameBuffer> {
    let view = View::new(FrameBuffer::new(96, 32), PLAYFIELD_ROWS, PLAYFIELD_COLS);
    Controller::new(CountingEngine::default(), view)
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

/// Cells painted by the selection underline on its band row.
fn underline_cells<E: Engine>(controller: &Controller<E, FrameBuffer>) -> Vec<u16> {
    let fb = controller.view().surface();
    let band_y = controller.view().layout().underline_row;
    (0..fb.width())
        .filter(|&x| {
            fb.get(x, band_y)
                .map(|cell| cell.style.bg == UNDERLINE)
                .unwrap_or(false)
        })
        .collect()
}

#[test]
fn double_play_arms_exactly_one_timer() {
    let mut c = counting_controller();
    c.game_mut().set_difficulty(Difficulty::Hard);
    let t0 = Instant::now();

    c.play(t0);
    c.play(t0 + ms(50));

    // hard, level 0: 900ms. Three whole periods later, exactly three ticks.
    c.advance(t0 + ms(2700));
    assert_eq!(c.game().downs, 3, "a second play() must not stack a second cadence");
}

#[test]
fn pause_then_resume_restores_exact_period() {
    let mut c = counting_controller();
    c.game_mut().set_difficulty(Difficulty::Hard);
    let t0 = Instant::now();

    c.play(t0);
    assert_eq!(c.next_deadline(), Some(t0 + ms(900)));

    c.pause();
    assert_eq!(c.next_deadline(), None);

    let t1 = t0 + ms(5000);
    c.play(t1);
    assert_eq!(
        c.next_deadline(),
        Some(t1 + ms(900)),
        "resume must fire at 900ms, not the 1000ms base"
    );
}

#[test]
fn holding_down_suspends_gravity_until_release() {
    let mut c = counting_controller();
    c.game_mut().set_difficulty(Difficulty::Hard);
    let t0 = Instant::now();
    c.play(t0);

    // Hold Down: three repeat events 50ms apart.
    for i in 0..3u64 {
        c.handle_event(InputEvent::KeyDown(Key::Down), t0 + ms(100 + i * 50));
    }
    assert_eq!(c.game().downs, 3, "each repeat is one soft-drop step");
    assert_eq!(c.next_deadline(), None, "gravity is suspended during the hold");

    // No gravity ticks fire while the key is held, however long.
    c.advance(t0 + ms(4000));
    assert_eq!(c.game().downs, 3);

    // Release re-arms; the next tick fires one whole period later.
    let release = t0 + ms(4100);
    c.handle_event(InputEvent::KeyUp(Key::Down), release);
    assert_eq!(c.next_deadline(), Some(release + ms(900)));

    c.advance(release + ms(899));
    assert_eq!(c.game().downs, 3, "no tick before the full period elapses");
    c.advance(release + ms(900));
    assert_eq!(c.game().downs, 4);
}

#[test]
fn repeated_release_events_do_not_stack_timers() {
    let mut c = counting_controller();
    c.game_mut().set_difficulty(Difficulty::Hard);
    let t0 = Instant::now();
    c.play(t0);

    c.handle_event(InputEvent::KeyDown(Key::Down), t0 + ms(100));
    c.handle_event(InputEvent::KeyUp(Key::Down), t0 + ms(200));
    c.handle_event(InputEvent::KeyUp(Key::Down), t0 + ms(300));

    assert_eq!(c.next_deadline(), Some(t0 + ms(200) + ms(900)));
    c.advance(t0 + ms(200) + ms(2700));
    assert_eq!(c.game().downs, 1 + 3, "one soft-drop step plus three gravity ticks");
}

#[test]
fn game_over_overrides_playing_for_rendering() {
    let mut c = counting_controller();
    let t0 = Instant::now();
    c.play(t0);
    assert_eq!(c.phase(), Phase::Playing);

    c.game_mut().snapshot.is_game_over = true;
    c.refresh_view();

    let fb = c.view().surface();
    let all: String = (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect();
    assert!(all.contains("GAME OVER"), "end screen wins over the playing flag");
    assert!(!all.contains("Next:"), "main screen panel is not drawn");
}

#[test]
fn underline_position_survives_return_to_start() {
    let mut c = counting_controller();
    let t0 = Instant::now();

    c.handle_event(InputEvent::Char('h'), t0);
    let selected = underline_cells(&c);
    assert!(!selected.is_empty());

    // The underline sits centered under the hard label.
    let hard_x = c.view().layout().difficulty_x(Difficulty::Hard);
    let mid = (selected[0] + selected[selected.len() - 1]) / 2;
    assert!(mid.abs_diff(hard_x) <= 1);

    c.return_to_start();
    assert_eq!(
        underline_cells(&c),
        selected,
        "return-to-start must reproduce the underline without a reselect"
    );
}

#[test]
fn changing_difficulty_erases_previous_underline() {
    let mut c = counting_controller();
    let t0 = Instant::now();

    c.handle_event(InputEvent::Char('e'), t0);
    let easy_cells = underline_cells(&c);

    c.handle_event(InputEvent::Char('h'), t0 + ms(10));
    let hard_cells = underline_cells(&c);

    assert!(!hard_cells.is_empty());
    assert!(
        easy_cells.iter().all(|x| !hard_cells.contains(x)),
        "no ghost of the old underline may remain"
    );
}

#[test]
fn full_session_reset_preserves_difficulty() {
    // Real engine end-to-end: select medium, play until top-out, restart.
    let view = View::new(FrameBuffer::new(96, 32), PLAYFIELD_ROWS, PLAYFIELD_COLS);
    let mut c = Controller::new(Game::new(1), view);
    let t0 = Instant::now();

    c.handle_event(InputEvent::Char('m'), t0);
    c.handle_event(InputEvent::KeyDown(Key::Enter), t0);
    assert_eq!(c.phase(), Phase::Playing);

    // Gravity alone stacks pieces in the spawn columns until the game tops
    // out; 1200ms per tick at medium/level 0.
    let mut now = t0;
    for _ in 0..10_000 {
        now += ms(1200);
        c.advance(now);
        if c.phase() == Phase::GameOver {
            break;
        }
    }
    assert_eq!(c.phase(), Phase::GameOver);

    c.handle_event(InputEvent::KeyDown(Key::Enter), now + ms(100));
    assert_eq!(c.phase(), Phase::Playing);

    let state = c.game().state();
    assert_eq!(state.difficulty, Difficulty::Medium);
    assert_eq!(state.score, 0);
    assert_eq!(state.level, 0);
    assert!(!state.is_game_over);
}
