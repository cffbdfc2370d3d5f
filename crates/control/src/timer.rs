//! Gravity timer: deadline-based, idempotent arm/disarm.
//!
//! The event loop polls `next_deadline()` for its input timeout and calls
//! `poll(now)` afterwards; the timer reports how many whole periods elapsed.
//! Arming an already-armed timer is a no-op, which is what keeps key-repeat
//! bursts from ever producing two concurrent gravity cadences.

use std::time::{Duration, Instant};

use blockfall_types::{Difficulty, BASE_PERIOD_MS, LEVEL_STEP_MS, PERIOD_FLOOR_MS};

/// Per-difficulty speed bias subtracted from the base period. Easy's negative
/// bias lengthens the period; hard shortens it below the base even at level 0.
pub fn speed_bias(difficulty: Difficulty) -> i32 {
    match difficulty {
        Difficulty::Easy => -1000,
        Difficulty::Medium => -200,
        Difficulty::Hard => 100,
    }
}

/// `max(100, 1000 - bias(difficulty) - level * 100)` milliseconds.
pub fn gravity_period(difficulty: Difficulty, level: u32) -> Duration {
    let level_cut = (level as i32).saturating_mul(LEVEL_STEP_MS);
    let ms = BASE_PERIOD_MS - speed_bias(difficulty) - level_cut;
    Duration::from_millis(ms.max(PERIOD_FLOOR_MS) as u64)
}

#[derive(Debug, Clone)]
pub struct GravityTimer {
    deadline: Option<Instant>,
    period: Duration,
}

impl GravityTimer {
    pub fn new() -> Self {
        Self {
            deadline: None,
            period: Duration::from_millis(BASE_PERIOD_MS as u64),
        }
    }

    /// Arm at `period` from `now`. No-op while already armed: the period in
    /// flight keeps running (restarts go through `disarm` first).
    pub fn arm(&mut self, now: Instant, period: Duration) {
        if self.deadline.is_none() {
            self.period = period;
            self.deadline = Some(now + period);
        }
    }

    /// No-op when already disarmed.
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Count the ticks due at `now`, advancing the deadline one period per
    /// tick. N whole periods elapsed fire exactly N ticks.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let mut fired = 0;
        while let Some(deadline) = self.deadline {
            if now < deadline {
                break;
            }
            self.deadline = Some(deadline + self.period);
            fired += 1;
        }
        fired
    }
}

impl Default for GravityTimer {
    fn default() -> Self {
        Self::new()
    }
}
