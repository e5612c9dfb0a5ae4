//! Scoring strategies.
//!
//! The engine decides *whether* two cards match. A `ScoringRules`
//! implementation decides what that is worth. Hosts pick one when they
//! build the engine:
//!
//! - [`NoScoring`]: no score at all
//! - [`ClassicScoring`]: +2 per match, −1 per previously seen card in a mismatch
//! - [`TimeBonusScoring`]: classic, plus a bonus for matching quickly

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::CardId;

/// What a scoring rule knows about one of the two compared cards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardScore {
    /// The card.
    pub id: CardId,
    /// Was the card already shown in an earlier mismatch?
    pub previously_seen: bool,
    /// Remaining bonus time as a fraction of the limit.
    pub bonus_fraction: f64,
}

impl CardScore {
    /// Capture a card's scoring facts as of `now`.
    #[must_use]
    pub fn of<C>(card: &Card<C>, now: u64) -> Self {
        Self {
            id: card.id,
            previously_seen: card.has_been_seen,
            bonus_fraction: card.bonus.remaining_fraction(now),
        }
    }
}

/// The two cards compared by the second choice of a turn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreContext {
    /// The card chosen first.
    pub pending: CardScore,
    /// The card chosen second.
    pub chosen: CardScore,
}

impl ScoreContext {
    /// How many of the two cards had been seen before.
    #[must_use]
    pub fn seen_count(&self) -> i64 {
        i64::from(self.pending.previously_seen) + i64::from(self.chosen.previously_seen)
    }
}

/// Scoring strategy.
///
/// Both methods return a score delta. They are called before the engine
/// updates either card, so `previously_seen` reflects earlier turns only.
pub trait ScoringRules {
    /// Points for finding a pair.
    fn score_match(&self, ctx: &ScoreContext) -> i64;

    /// Points for a miss. Usually zero or negative.
    fn score_mismatch(&self, ctx: &ScoreContext) -> i64;
}

/// Score stays at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoScoring;

impl ScoringRules for NoScoring {
    fn score_match(&self, _ctx: &ScoreContext) -> i64 {
        0
    }

    fn score_mismatch(&self, _ctx: &ScoreContext) -> i64 {
        0
    }
}

/// The classic Memorize rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassicScoring {
    /// Points per match.
    pub match_points: i64,
    /// Penalty per already seen card in a mismatch.
    pub seen_penalty: i64,
}

impl Default for ClassicScoring {
    fn default() -> Self {
        Self {
            match_points: 2,
            seen_penalty: 1,
        }
    }
}

impl ScoringRules for ClassicScoring {
    fn score_match(&self, _ctx: &ScoreContext) -> i64 {
        self.match_points
    }

    fn score_mismatch(&self, ctx: &ScoreContext) -> i64 {
        self.seen_penalty.saturating_mul(ctx.seen_count()).saturating_neg()
    }
}

/// Classic rules plus a bonus for quick matches.
///
/// Each card of a found pair adds `floor(max_bonus × remaining fraction)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBonusScoring {
    /// Base rules.
    pub classic: ClassicScoring,
    /// Bonus for a card matched with its full bonus time left.
    pub max_bonus: i64,
}

impl Default for TimeBonusScoring {
    fn default() -> Self {
        Self {
            classic: ClassicScoring::default(),
            max_bonus: 10,
        }
    }
}

impl TimeBonusScoring {
    fn card_bonus(&self, card: &CardScore) -> i64 {
        (self.max_bonus as f64 * card.bonus_fraction).floor() as i64
    }
}

impl ScoringRules for TimeBonusScoring {
    fn score_match(&self, ctx: &ScoreContext) -> i64 {
        self.classic
            .score_match(ctx)
            .saturating_add(self.card_bonus(&ctx.pending))
            .saturating_add(self.card_bonus(&ctx.chosen))
    }

    fn score_mismatch(&self, ctx: &ScoreContext) -> i64 {
        self.classic.score_mismatch(ctx)
    }
}
