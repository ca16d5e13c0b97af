//! Course countdown clock — owns remaining time and one-shot completion.

use crate::types::Seconds;
use serde::{Deserialize, Serialize};

/// Total course length: 3 hours.
pub const COURSE_DURATION_SECS: Seconds = 3 * 60 * 60;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseClock {
    pub remaining: Seconds,
    pub running: bool,
    pub completed: bool,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub remaining: Seconds,
    /// True exactly once, on the tick that reached zero.
    pub just_completed: bool,
}

impl CourseClock {
    pub fn new() -> Self {
        Self {
            remaining: COURSE_DURATION_SECS,
            running: false,
            completed: false,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Decrement one second. Idempotent at zero: once completed, further
    /// ticks change nothing and never re-trigger completion.
    pub fn tick(&mut self) -> TickOutcome {
        if self.completed {
            return TickOutcome {
                remaining: 0,
                just_completed: false,
            };
        }
        self.remaining = self.remaining.saturating_sub(1);
        let just_completed = self.remaining == 0;
        if just_completed {
            self.completed = true;
            self.running = false;
        }
        TickOutcome {
            remaining: self.remaining,
            just_completed,
        }
    }

    pub fn elapsed(&self) -> Seconds {
        COURSE_DURATION_SECS - self.remaining
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for CourseClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Format seconds as HH:MM:SS, the way the course header shows it.
pub fn hms(total: Seconds) -> String {
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
