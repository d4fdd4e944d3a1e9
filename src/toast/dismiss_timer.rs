//! One-shot auto-dismiss timer owned by a single toast
//!
//! The timer is a deadline checked from the host loop's ticks. Firing disarms
//! it, so a timer reports expiry at most once; cancelling disarms it without
//! firing.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DismissTimer {
    deadline: Option<Instant>,
}

impl DismissTimer {
    /// Arms a timer that expires `duration` after `now`
    ///
    /// A zero duration produces a disarmed timer (the toast persists).
    pub fn arm(duration: Duration, now: Instant) -> Self {
        if duration.is_zero() {
            return Self::disarmed();
        }
        Self {
            deadline: now.checked_add(duration),
        }
    }

    pub fn disarmed() -> Self {
        Self::default()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns true exactly once, on the first call at or after the deadline
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
