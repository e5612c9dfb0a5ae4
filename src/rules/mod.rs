//! Matching rules.
//!
//! - `engine`: `MatchingEngine`, which deals games and applies choices
//! - `scoring`: the `ScoringRules` strategy and its stock implementations
//!
//! The engine decides what a choice does to the cards. Scoring only
//! decides what it is worth, so new scoring schemes never touch the
//! matching algorithm.

pub mod engine;
pub mod scoring;

pub use engine::MatchingEngine;
pub use scoring::{CardScore, ClassicScoring, NoScoring, ScoreContext, ScoringRules, TimeBonusScoring};
