//! Memorize: the classic emoji memory game.
//!
//! Each new game picks a random theme from a catalog, deals a random
//! number of its emoji as pairs (or the theme's fixed count) and scores
//! with the engine's scoring rules.

mod session;
mod theme;

pub use session::MemorizeSession;
pub use theme::{Theme, ThemeCatalog};
