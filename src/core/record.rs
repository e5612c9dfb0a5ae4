//! Choice outcomes and history records.
//!
//! Every call to `choose` reports what it did. Effective choices are also
//! appended to the game history, which hosts use for replay, undo UIs or
//! analytics.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card_id::CardId;

/// Why a choice had no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// No card with this id is in the game.
    UnknownCard,
    /// The card is already showing.
    AlreadyFaceUp,
    /// The card belongs to a found pair.
    AlreadyMatched,
}

/// Result of a single `choose` call.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChoiceOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),

    /// A new turn started: `card` is now the pending selection.
    ///
    /// `flipped_down` lists the cards turned face-down to start the turn.
    /// Usually the two cards of the previous mismatch.
    Revealed {
        card: CardId,
        flipped_down: SmallVec<[CardId; 2]>,
    },

    /// `card` matched the pending selection `pending`.
    Matched {
        pending: CardId,
        card: CardId,
        points: i64,
    },

    /// `card` did not match the pending selection `pending`.
    Mismatched {
        pending: CardId,
        card: CardId,
        points: i64,
    },
}

impl ChoiceOutcome {
    /// Did the choice change the game?
    #[must_use]
    pub fn is_effective(&self) -> bool {
        !matches!(self, ChoiceOutcome::Ignored(_))
    }

    /// Score change caused by this choice.
    #[must_use]
    pub fn points(&self) -> i64 {
        match self {
            ChoiceOutcome::Matched { points, .. } | ChoiceOutcome::Mismatched { points, .. } => *points,
            ChoiceOutcome::Ignored(_) | ChoiceOutcome::Revealed { .. } => 0,
        }
    }

    /// The card this choice turned face-up, if any.
    #[must_use]
    pub fn chosen(&self) -> Option<CardId> {
        match self {
            ChoiceOutcome::Ignored(_) => None,
            ChoiceOutcome::Revealed { card, .. }
            | ChoiceOutcome::Matched { card, .. }
            | ChoiceOutcome::Mismatched { card, .. } => Some(*card),
        }
    }
}

/// An effective choice, as stored in game history.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChoiceRecord {
    /// Position in the history, starting at 0.
    pub sequence: u32,

    /// What happened.
    pub outcome: ChoiceOutcome,

    /// Score after the choice.
    pub score_after: i64,
}

impl ChoiceRecord {
    /// Create a new choice record.
    #[must_use]
    pub fn new(sequence: u32, outcome: ChoiceOutcome, score_after: i64) -> Self {
        Self {
            sequence,
            outcome,
            score_after,
        }
    }
}
