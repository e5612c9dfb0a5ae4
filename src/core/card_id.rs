//! Card identification.
//!
//! Every card in a game has a unique `CardId`. Ids are stable for the
//! lifetime of a game: shuffling reorders cards but never renumbers them,
//! so callers (UI tap handlers, snapshots, history) always refer to cards
//! by id rather than by position.
//!
//! ## ID Layout
//!
//! Ids are allocated two per pair at creation time:
//! - pair `0` owns ids `0` and `1`
//! - pair `i` owns ids `2i` and `2i + 1`
//!
//! ```
//! use memory_match::core::CardId;
//!
//! let (a, b) = CardId::pair(3);
//! assert_eq!(a, CardId(6));
//! assert_eq!(b, CardId(7));
//! assert_eq!(a.pair_index(), 3);
//! assert_eq!(b.partner(), a);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The two ids allocated to pair `pair_index`.
    #[must_use]
    pub const fn pair(pair_index: u32) -> (Self, Self) {
        (Self(pair_index * 2), Self(pair_index * 2 + 1))
    }

    /// Index of the pair this id was allocated for.
    #[must_use]
    pub const fn pair_index(self) -> u32 {
        self.0 / 2
    }

    /// The other id allocated for the same pair.
    ///
    /// Only meaningful for games built by the engine; restored snapshots
    /// are validated by content, not by this layout.
    #[must_use]
    pub const fn partner(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
