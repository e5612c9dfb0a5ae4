//! Bonus-time bookkeeping for a single card.
//!
//! A card earns a bonus when it is matched before its bonus time runs
//! out. Time drains only while the card is face-up and unmatched, and it
//! is accumulated across separate face-up intervals.
//!
//! The timer never reads a clock itself: callers pass `now` in
//! milliseconds, so remaining bonus is computed on demand.

use serde::{Deserialize, Serialize};

/// Accumulated face-up time for one card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BonusTimer {
    /// Bonus time available in total. 0 disables the bonus.
    pub limit_ms: u64,

    /// Face-up time from finished intervals.
    pub past_face_up_ms: u64,

    /// Start of the running interval, if the timer is running.
    pub last_face_up_at: Option<u64>,
}

impl BonusTimer {
    /// Create a stopped timer with the given limit.
    #[must_use]
    pub const fn new(limit_ms: u64) -> Self {
        Self {
            limit_ms,
            past_face_up_ms: 0,
            last_face_up_at: None,
        }
    }

    /// Is the timer currently running?
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.last_face_up_at.is_some()
    }

    /// Total face-up time as of `now`.
    #[must_use]
    pub fn face_up_ms(&self, now: u64) -> u64 {
        match self.last_face_up_at {
            Some(start) => self.past_face_up_ms + now.saturating_sub(start),
            None => self.past_face_up_ms,
        }
    }

    /// Bonus time left as of `now`.
    #[must_use]
    pub fn remaining_ms(&self, now: u64) -> u64 {
        self.limit_ms.saturating_sub(self.face_up_ms(now))
    }

    /// Remaining bonus as a fraction of the limit, in `0.0..=1.0`.
    #[must_use]
    pub fn remaining_fraction(&self, now: u64) -> f64 {
        let remaining = self.remaining_ms(now);
        if self.limit_ms > 0 && remaining > 0 {
            remaining as f64 / self.limit_ms as f64
        } else {
            0.0
        }
    }

    /// Start an interval if none is running and bonus is left.
    pub fn start(&mut self, now: u64) {
        if self.last_face_up_at.is_none() && self.remaining_ms(now) > 0 {
            self.last_face_up_at = Some(now);
        }
    }

    /// Close the running interval, folding it into the accumulated time.
    pub fn stop(&mut self, now: u64) {
        self.past_face_up_ms = self.face_up_ms(now);
        self.last_face_up_at = None;
    }
}
