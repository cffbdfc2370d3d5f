//! Controller phase machine.
//!
//! Four explicit states instead of flag pairs; the transition map is a pure
//! function so the lifecycle can be tested without touching the engine, the
//! timer or the view. `GameOver` is never dispatched by a key: it is observed
//! from the engine snapshot after a mutating command and fed in as
//! [`PhaseInput::ToppedOut`].

/// Controller lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    Playing,
    Paused,
    GameOver,
}

/// Inputs that can move the phase machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseInput {
    /// Enter: start, pause, resume or restart depending on phase
    Confirm,
    /// Escape: back to the start screen, only while not playing
    Cancel,
    /// The engine reported `is_game_over` after a mutating command
    ToppedOut,
}

/// Pure transition map. Inputs that do not apply in a phase leave it
/// unchanged.
pub fn transition(phase: Phase, input: PhaseInput) -> Phase {
    match (phase, input) {
        (_, PhaseInput::ToppedOut) => Phase::GameOver,

        (Phase::Start, PhaseInput::Confirm) => Phase::Playing,
        (Phase::Playing, PhaseInput::Confirm) => Phase::Paused,
        (Phase::Paused, PhaseInput::Confirm) => Phase::Playing,
        // Restart goes straight back to play, no intermediate start screen.
        (Phase::GameOver, PhaseInput::Confirm) => Phase::Playing,

        (Phase::Start, PhaseInput::Cancel) => Phase::Start,
        (Phase::Paused, PhaseInput::Cancel) => Phase::Start,
        (Phase::Playing, PhaseInput::Cancel) => Phase::Playing,
        (Phase::GameOver, PhaseInput::Cancel) => Phase::GameOver,
    }
}
