//! Snapshots for persisting a game between sessions.
//!
//! A `GameSnapshot` is a plain serde value. Hosts can store it as JSON,
//! or as compact bytes via [`GameSnapshot::to_bytes`] (bincode).
//!
//! Restoring validates the snapshot against the game invariants, so a
//! tampered or truncated save cannot produce a state the engine would
//! never reach on its own.

use im::Vector;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::card_id::CardId;
use super::record::ChoiceRecord;
use super::rng::{DeckRng, DeckRngState};
use super::state::GameState;
use crate::cards::{Card, CardContent};
use crate::error::{MatchError, Result};

/// Serializable copy of a [`GameState`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot<C> {
    /// Cards in display order.
    pub cards: Vec<Card<C>>,
    /// Pending selection.
    pub pending: Option<CardId>,
    /// Score at snapshot time.
    pub score: i64,
    /// Effective choices, oldest first.
    pub history: Vec<ChoiceRecord>,
    /// RNG position, so later shuffles replay identically.
    pub rng: DeckRngState,
}

impl<C: Serialize> GameSnapshot<C> {
    /// Encode as bincode bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }
}

impl<C: DeserializeOwned> GameSnapshot<C> {
    /// Decode from bincode bytes. Does not validate; see [`GameState::restore`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl<C: Clone> GameState<C> {
    /// Capture the full state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot<C> {
        GameSnapshot {
            cards: self.cards().to_vec(),
            pending: self.pending(),
            score: self.score(),
            history: self.history().iter().cloned().collect(),
            rng: self.rng.state(),
        }
    }
}

impl<C: CardContent> GameState<C> {
    /// Rebuild a state from a snapshot, rejecting inconsistent data.
    pub fn restore(snapshot: GameSnapshot<C>) -> Result<Self> {
        validate(&snapshot).map_err(|reason| {
            tracing::debug!(%reason, "rejected snapshot");
            MatchError::CorruptSnapshot(reason)
        })?;

        tracing::debug!(
            cards = snapshot.cards.len(),
            score = snapshot.score,
            history = snapshot.history.len(),
            "restored game"
        );

        Ok(GameState::from_parts(
            snapshot.cards,
            snapshot.pending,
            snapshot.score,
            Vector::from(snapshot.history),
            DeckRng::from_state(&snapshot.rng),
        ))
    }
}

fn validate<C: CardContent>(snapshot: &GameSnapshot<C>) -> std::result::Result<(), String> {
    let cards = &snapshot.cards;
    if cards.is_empty() {
        return Err("no cards".to_string());
    }

    for (i, card) in cards.iter().enumerate() {
        if cards[..i].iter().any(|other| other.id == card.id) {
            return Err(format!("duplicate {}", card.id));
        }

        let mut same_content = cards
            .iter()
            .enumerate()
            .filter(|(j, other)| *j != i && other.content == card.content);
        let partner = match (same_content.next(), same_content.next()) {
            (Some((_, partner)), None) => partner,
            _ => return Err(format!("content of {} is not on exactly two cards", card.id)),
        };
        if partner.is_matched != card.is_matched {
            return Err(format!("{} and {} disagree on matched", card.id, partner.id));
        }
    }

    let face_up: Vec<&Card<C>> = cards.iter().filter(|c| c.is_pending_candidate()).collect();
    match snapshot.pending {
        Some(id) => match face_up.as_slice() {
            [only] if only.id == id => Ok(()),
            _ => Err(format!("pending {id} is not the only face-up unmatched card")),
        },
        None => match face_up.as_slice() {
            [] => Ok(()),
            [a, b] if a.content != b.content => Ok(()),
            _ => Err(format!("{} face-up unmatched cards without a pending selection", face_up.len())),
        },
    }
}
