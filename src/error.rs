//! Error types.
//!
//! Only setup and persistence can fail. Gameplay (`choose`, `shuffle`)
//! never returns an error: stale input is reported as an ignored choice.

use thiserror::Error;

/// Errors from game creation, themes and snapshots.
#[derive(Error, Debug)]
pub enum MatchError {
    #[error("a game needs at least one pair")]
    NoPairs,

    #[error("requested {requested} pairs but only {available} distinct contents are available")]
    InsufficientContent { requested: usize, available: usize },

    #[error("pairs {first} and {second} were given the same content")]
    DuplicateContent { first: usize, second: usize },

    #[error("invalid theme {name:?}: {reason}")]
    InvalidTheme { name: String, reason: String },

    #[error("no themes available")]
    EmptyCatalog,

    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(String),

    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),
}

impl MatchError {
    /// Shorthand for an invalid theme error.
    pub(crate) fn invalid_theme(name: &str, reason: impl Into<String>) -> Self {
        MatchError::InvalidTheme {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// Can the caller retry with different input?
    ///
    /// Setup errors are fixable by the caller. Broken snapshots are not.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            MatchError::NoPairs
            | MatchError::InsufficientContent { .. }
            | MatchError::DuplicateContent { .. }
            | MatchError::InvalidTheme { .. }
            | MatchError::EmptyCatalog => true,
            MatchError::CorruptSnapshot(_) | MatchError::Codec(_) => false,
        }
    }
}

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = MatchError::InsufficientContent {
            requested: 8,
            available: 5,
        };
        assert_eq!(
            err.to_string(),
            "requested 8 pairs but only 5 distinct contents are available"
        );

        let err = MatchError::invalid_theme("Food", "no contents");
        assert_eq!(err.to_string(), "invalid theme \"Food\": no contents");
    }

    #[test]
    fn test_recoverable() {
        assert!(MatchError::NoPairs.is_recoverable());
        assert!(!MatchError::CorruptSnapshot("pending card missing".into()).is_recoverable());
    }
}
