//! Controller: translates input events into engine commands and view
//! refreshes, and drives the gravity tick.

use std::time::{Duration, Instant};

use blockfall_game::{Engine, GameSnapshot};
use blockfall_types::{Difficulty, InputEvent, Key};
use blockfall_view::{Surface, View};

use crate::phase::{transition, Phase, PhaseInput};
use crate::timer::{gravity_period, GravityTimer};

/// What a key event asks for, before phase guards are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Confirm,
    Cancel,
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    SoftDropEnd,
    SelectDifficulty(Difficulty),
}

/// Dispatch table keyed on key identity. Guards live at the execution site,
/// not here.
fn command_for(event: InputEvent) -> Option<Command> {
    match event {
        InputEvent::KeyDown(Key::Enter) => Some(Command::Confirm),
        InputEvent::KeyDown(Key::Escape) => Some(Command::Cancel),
        InputEvent::KeyDown(Key::Left) => Some(Command::MoveLeft),
        InputEvent::KeyDown(Key::Up) => Some(Command::Rotate),
        InputEvent::KeyDown(Key::Right) => Some(Command::MoveRight),
        InputEvent::KeyDown(Key::Down) => Some(Command::SoftDrop),
        InputEvent::KeyUp(Key::Down) => Some(Command::SoftDropEnd),
        InputEvent::KeyUp(_) => None,
        InputEvent::Char(c) => Difficulty::from_char(c).map(Command::SelectDifficulty),
    }
}

/// Owns the engine, the view and the gravity timer for the process lifetime.
///
/// All timing is passed in: the event loop feeds `handle_event(event, now)`
/// and `advance(now)`, and sizes its poll timeout from `next_deadline()`.
pub struct Controller<E: Engine, S: Surface> {
    game: E,
    view: View<S>,
    phase: Phase,
    timer: GravityTimer,
}

impl<E: Engine, S: Surface> Controller<E, S> {
    /// Renders the start screen and places the selection underline under the
    /// engine's current difficulty.
    pub fn new(game: E, view: View<S>) -> Self {
        let mut controller = Self {
            game,
            view,
            phase: Phase::Start,
            timer: GravityTimer::new(),
        };
        controller.view.render_start_screen();
        let difficulty = controller.game.difficulty();
        controller.change_difficulty(difficulty);
        controller
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn view(&self) -> &View<S> {
        &self.view
    }

    pub fn game(&self) -> &E {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut E {
        &mut self.game
    }

    /// Deadline of the armed gravity tick, if any (event-loop poll timeout).
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.next_deadline()
    }

    pub fn handle_event(&mut self, event: InputEvent, now: Instant) {
        let Some(command) = command_for(event) else {
            return;
        };

        match command {
            Command::Confirm => match (self.phase, transition(self.phase, PhaseInput::Confirm)) {
                (Phase::GameOver, Phase::Playing) => self.reset(now),
                (_, Phase::Playing) => self.play(now),
                (_, Phase::Paused) => self.pause(),
                _ => {}
            },
            Command::Cancel => {
                // Covers Paused -> Start and the start screen re-entering
                // itself (engine reset, same difficulty); Playing and
                // GameOver ignore escape.
                if transition(self.phase, PhaseInput::Cancel) == Phase::Start {
                    self.return_to_start();
                }
            }
            Command::MoveLeft => {
                if self.phase == Phase::Playing {
                    self.game.move_piece_left();
                    self.refresh_view();
                }
            }
            Command::MoveRight => {
                if self.phase == Phase::Playing {
                    self.game.move_piece_right();
                    self.refresh_view();
                }
            }
            Command::Rotate => {
                if self.phase == Phase::Playing {
                    self.game.rotate_piece();
                    self.refresh_view();
                }
            }
            Command::SoftDrop => {
                if self.phase == Phase::Playing {
                    // Suspend gravity for the duration of the hold; every
                    // key-repeat lands here and moves the piece one row.
                    self.timer.disarm();
                    self.game.move_piece_down();
                    self.observe_and_refresh();
                }
            }
            Command::SoftDropEnd => {
                if self.phase == Phase::Playing {
                    let period = self.current_period();
                    self.timer.arm(now, period);
                }
            }
            Command::SelectDifficulty(difficulty) => {
                if self.phase != Phase::Playing {
                    self.change_difficulty(difficulty);
                }
            }
        }
    }

    /// One gravity tick. A tick that was already queued when the timer was
    /// cancelled observes a non-playing phase and does nothing.
    pub fn update(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        self.game.move_piece_down();
        self.observe_and_refresh();
    }

    /// Fire every gravity tick due at `now`.
    pub fn advance(&mut self, now: Instant) {
        for _ in 0..self.timer.poll(now) {
            self.update();
            if self.phase != Phase::Playing {
                break;
            }
        }
    }

    /// Arm the gravity timer for the current difficulty and level and show
    /// the main screen. The period is sampled here and only here, so a
    /// level-up mid-run takes effect on the next play/resume.
    pub fn play(&mut self, now: Instant) {
        self.phase = Phase::Playing;
        let period = self.current_period();
        self.timer.arm(now, period);
        self.refresh_view();
    }

    pub fn pause(&mut self) {
        self.phase = Phase::Paused;
        self.timer.disarm();
        self.refresh_view();
    }

    /// Reinitialize the engine (difficulty survives) and play immediately.
    pub fn reset(&mut self, now: Instant) {
        self.timer.disarm();
        self.game.reset();
        self.play(now);
    }

    /// Back to the start screen, keeping the selected difficulty and its
    /// underline position.
    pub fn return_to_start(&mut self) {
        let difficulty = self.game.difficulty();
        self.timer.disarm();
        self.game.reset();
        self.phase = Phase::Start;
        self.view.render_start_screen();
        self.change_difficulty(difficulty);
    }

    /// Set the engine difficulty and move the selection underline. Callers
    /// guard against the playing phase; difficulty changes mid-game are
    /// rejected upstream.
    pub fn change_difficulty(&mut self, difficulty: Difficulty) {
        self.game.set_difficulty(difficulty);
        let x = self.view.layout().difficulty_x(difficulty);
        self.view.add_underline(difficulty.label(), x);
    }

    /// Read a fresh snapshot and dispatch to exactly one renderer.
    pub fn refresh_view(&mut self) {
        let state = self.game.state();
        self.render_for(&state);
    }

    fn current_period(&self) -> Duration {
        gravity_period(self.game.difficulty(), self.game.state().level)
    }

    /// Post-mutation path: pick up a top-out before rendering so the timer is
    /// disarmed the moment the engine reports game over.
    fn observe_and_refresh(&mut self) {
        let state = self.game.state();
        if state.is_game_over && self.phase != Phase::GameOver {
            self.phase = transition(self.phase, PhaseInput::ToppedOut);
            self.timer.disarm();
        }
        self.render_for(&state);
    }

    fn render_for(&mut self, state: &GameSnapshot) {
        if state.is_game_over {
            self.view.render_end_screen(state);
        } else if self.phase != Phase::Playing {
            self.view.render_pause_screen();
        } else {
            self.view.render_main_screen(state);
        }
    }
}
