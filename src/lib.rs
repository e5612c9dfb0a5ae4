//! # memory-match
//!
//! A generic engine for pairwise memory-matching games ("Memorize").
//!
//! ## Design Principles
//!
//! 1. **Content-Agnostic**: Cards carry any `Clone + PartialEq` payload.
//!    The engine only asks whether two payloads are equal.
//!
//! 2. **Ids, Not Positions**: Cards are addressed by `CardId`. The pending
//!    selection is an id too, so shuffling never invalidates it.
//!
//! 3. **Tolerant Intents**: `choose` never fails. Stale taps on unknown,
//!    face-up or matched cards come back as `ChoiceOutcome::Ignored`.
//!
//! 4. **Configuration Over Globals**: Seeds, bonus time and themes are
//!    passed in explicitly, so every game is reproducible and testable.
//!
//! ## Modules
//!
//! - `core`: Card ids, RNG, clocks, configuration, records, state, snapshots
//! - `cards`: Card state and bonus-time tracking
//! - `rules`: The matching engine and scoring strategies
//! - `games`: Memorize themes and sessions
//! - `error`: Error types for setup and persistence

pub mod core;
pub mod cards;
pub mod rules;
pub mod games;
pub mod error;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    CardId, Clock, ManualClock, SystemClock,
    DeckRng, DeckRngState,
    BonusConfig, GameConfig, GameConfigBuilder,
    ChoiceOutcome, ChoiceRecord, IgnoreReason,
    GameSnapshot, GameState,
};

pub use crate::cards::{BonusTimer, Card, CardContent};

pub use crate::rules::{
    MatchingEngine,
    ScoringRules, ScoreContext, CardScore,
    NoScoring, ClassicScoring, TimeBonusScoring,
};

pub use crate::games::memorize::{MemorizeSession, Theme, ThemeCatalog};

pub use crate::error::{MatchError, Result};
