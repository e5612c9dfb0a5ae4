//! Card state.
//!
//! A `Card` is one half of a pair. Its content is opaque to the engine:
//! only equality is ever asked of it.
//!
//! ## Lifecycle
//!
//! ```text
//! FaceDown ──choose──▶ FaceUp (pending) ──match──▶ Matched (terminal)
//!     ▲                      │
//!     └──── next turn ◀──────┘ (mismatch)
//! ```
//!
//! Face changes go through [`Card::turn_face_up`] and
//! [`Card::turn_face_down`] so the bonus timer follows the card.

use serde::{Deserialize, Serialize};

use super::bonus::BonusTimer;
use crate::core::card_id::CardId;

/// Bound for card payloads: anything cloneable and comparable.
pub trait CardContent: Clone + PartialEq + std::fmt::Debug {}

impl<T: Clone + PartialEq + std::fmt::Debug> CardContent for T {}

/// A card in a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card<C> {
    /// Stable identity.
    pub id: CardId,

    /// Payload shared with exactly one other card.
    pub content: C,

    /// Is the card currently shown?
    pub is_face_up: bool,

    /// Has the card been resolved as part of a found pair?
    pub is_matched: bool,

    /// Has the card been shown and then missed in a mismatch?
    pub has_been_seen: bool,

    /// Bonus-time tracking.
    pub bonus: BonusTimer,
}

impl<C> Card<C> {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, content: C, bonus_limit_ms: u64) -> Self {
        Self {
            id,
            content,
            is_face_up: false,
            is_matched: false,
            has_been_seen: false,
            bonus: BonusTimer::new(bonus_limit_ms),
        }
    }

    /// Can this card be chosen?
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.is_face_up && !self.is_matched
    }

    /// Is the card shown and still waiting to be resolved?
    #[must_use]
    pub fn is_pending_candidate(&self) -> bool {
        self.is_face_up && !self.is_matched
    }

    /// Show the card, starting its bonus timer if it is unmatched.
    pub fn turn_face_up(&mut self, now: u64) {
        self.is_face_up = true;
        if !self.is_matched {
            self.bonus.start(now);
        }
    }

    /// Hide the card, stopping its bonus timer.
    pub fn turn_face_down(&mut self, now: u64) {
        self.is_face_up = false;
        self.bonus.stop(now);
    }

    /// Resolve the card as part of a found pair. Freezes its bonus.
    pub fn mark_matched(&mut self, now: u64) {
        self.is_matched = true;
        self.bonus.stop(now);
    }

    /// Matched with bonus time left.
    #[must_use]
    pub fn has_earned_bonus(&self, now: u64) -> bool {
        self.is_matched && self.bonus.remaining_ms(now) > 0
    }

    /// Face-up, unmatched and still draining bonus time.
    #[must_use]
    pub fn is_consuming_bonus_time(&self, now: u64) -> bool {
        self.is_pending_candidate() && self.bonus.remaining_ms(now) > 0
    }
}
