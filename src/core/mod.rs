//! Core engine types: card ids, RNG, clocks, configuration, records, state.
//!
//! Nothing in here knows about scoring or themes. Those live in `rules`
//! and `games` and plug into the core through `GameConfig` and the engine.

pub mod card_id;
pub mod clock;
pub mod config;
pub mod record;
pub mod rng;
pub mod snapshot;
pub mod state;

pub use card_id::CardId;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{BonusConfig, GameConfig, GameConfigBuilder};
pub use record::{ChoiceOutcome, ChoiceRecord, IgnoreReason};
pub use rng::{DeckRng, DeckRngState};
pub use snapshot::GameSnapshot;
pub use state::GameState;
