//! Cards and per-card bonus-time tracking.

pub mod bonus;
pub mod card;

pub use bonus::BonusTimer;
pub use card::{Card, CardContent};
