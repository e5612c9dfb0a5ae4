//! Game state: the deck, the pending selection, score and history.
//!
//! ## Pending selection
//!
//! At most one unmatched card is face-up and waiting for a partner at any
//! time. The state stores it as a `CardId`, never as a position, so
//! reordering the deck cannot leave it pointing at the wrong card.
//! The only other face-up unmatched cards are the two halves of a
//! mismatch, which stay visible until the next turn starts.
//! [`GameState::index_of_pending`] resolves it to a position on demand.
//!
//! ## Positions
//!
//! `positions` maps every id to its index in `cards`. It is rebuilt after
//! every reorder, which keeps `choose` an O(1) lookup.
//!
//! State is mutated only by the engine (`rules::MatchingEngine`). Hosts
//! get read access.

use im::Vector;
use rustc_hash::FxHashMap;

use super::card_id::CardId;
use super::record::{ChoiceOutcome, ChoiceRecord};
use super::rng::DeckRng;
use crate::cards::Card;

/// Full state of one game.
///
/// Cloning is cheap for the history (`im::Vector`) and linear in the
/// number of cards otherwise.
#[derive(Clone, Debug)]
pub struct GameState<C> {
    /// Cards in display order.
    cards: Vec<Card<C>>,

    /// Card id -> index in `cards`.
    positions: FxHashMap<CardId, usize>,

    /// The face-up unmatched card awaiting a second choice.
    pending: Option<CardId>,

    /// Running score (may go negative, saturates at the `i64` bounds).
    score: i64,

    /// Effective choices, oldest first.
    history: Vector<ChoiceRecord>,

    /// Deterministic RNG for shuffles and follow-up games.
    pub rng: DeckRng,
}

impl<C> GameState<C> {
    /// Assemble a state from its parts. Builds the position index.
    pub(crate) fn from_parts(
        cards: Vec<Card<C>>,
        pending: Option<CardId>,
        score: i64,
        history: Vector<ChoiceRecord>,
        rng: DeckRng,
    ) -> Self {
        let mut state = Self {
            cards,
            positions: FxHashMap::default(),
            pending,
            score,
            history,
            rng,
        };
        state.reindex();
        state
    }

    fn reindex(&mut self) {
        self.positions.clear();
        self.positions
            .extend(self.cards.iter().enumerate().map(|(idx, card)| (card.id, idx)));
    }

    // === Read access ===

    /// Cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[Card<C>] {
        &self.cards
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card<C>> {
        self.position_of(id).map(|idx| &self.cards[idx])
    }

    /// Current index of a card.
    #[must_use]
    pub fn position_of(&self, id: CardId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// The pending selection, if any.
    #[must_use]
    pub fn pending(&self) -> Option<CardId> {
        self.pending
    }

    /// Current index of the pending selection.
    #[must_use]
    pub fn index_of_pending(&self) -> Option<usize> {
        self.pending.and_then(|id| self.position_of(id))
    }

    /// Number of pairs dealt.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Number of pairs found so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched).count() / 2
    }

    /// Cards that are showing and not yet matched.
    ///
    /// 1 while a selection is pending, 2 right after a mismatch (until the
    /// next turn starts), 0 otherwise.
    #[must_use]
    pub fn face_up_unmatched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_pending_candidate()).count()
    }

    /// Has every pair been found?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|c| c.is_matched)
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Effective choices, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ChoiceRecord> {
        &self.history
    }

    // === Engine mutation ===

    pub(crate) fn card_at_mut(&mut self, idx: usize) -> &mut Card<C> {
        &mut self.cards[idx]
    }

    pub(crate) fn cards_mut(&mut self) -> impl Iterator<Item = &mut Card<C>> {
        self.cards.iter_mut()
    }

    pub(crate) fn set_pending(&mut self, pending: Option<CardId>) {
        self.pending = pending;
    }

    pub(crate) fn add_score(&mut self, delta: i64) {
        self.score = self.score.saturating_add(delta);
    }

    /// Append an effective choice to history.
    pub(crate) fn record(&mut self, outcome: ChoiceOutcome) {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(ChoiceRecord::new(sequence, outcome, self.score));
    }

    /// Shuffle the deck with the state's RNG. Flags are untouched.
    pub(crate) fn shuffle_cards(&mut self) {
        self.rng.shuffle(&mut self.cards);
        self.reindex();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_state() -> GameState<char> {
        let cards = vec![
            Card::new(CardId(0), 'a', 0),
            Card::new(CardId(1), 'a', 0),
            Card::new(CardId(2), 'b', 0),
            Card::new(CardId(3), 'b', 0),
        ];
        GameState::from_parts(cards, None, 0, Vector::new(), DeckRng::new(42))
    }

    #[test]
    fn test_lookup_by_id() {
        let state = small_state();

        assert_eq!(state.pair_count(), 2);
        assert_eq!(state.position_of(CardId(2)), Some(2));
        assert_eq!(state.card(CardId(3)).map(|c| c.content), Some('b'));
        assert!(state.card(CardId(9)).is_none());
    }

    #[test]
    fn test_shuffle_keeps_index_consistent() {
        let mut state = small_state();
        state.set_pending(Some(CardId(1)));

        for _ in 0..10 {
            state.shuffle_cards();
            for (idx, card) in state.cards().iter().enumerate() {
                assert_eq!(state.position_of(card.id), Some(idx));
            }
            let idx = state.index_of_pending().unwrap();
            assert_eq!(state.cards()[idx].id, CardId(1));
        }
    }

    #[test]
    fn test_completion() {
        let mut state = small_state();
        assert!(!state.is_complete());
        assert_eq!(state.matched_pairs(), 0);

        for card in state.cards_mut() {
            card.mark_matched(0);
        }
        assert!(state.is_complete());
        assert_eq!(state.matched_pairs(), 2);
    }

    #[test]
    fn test_record_sequence() {
        let mut state = small_state();
        state.add_score(2);
        state.record(ChoiceOutcome::Matched {
            pending: CardId(0),
            card: CardId(1),
            points: 2,
        });
        state.add_score(-1);
        state.record(ChoiceOutcome::Mismatched {
            pending: CardId(2),
            card: CardId(0),
            points: -1,
        });

        let history = state.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].sequence, 0);
        assert_eq!(history[0].score_after, 2);
        assert_eq!(history[1].sequence, 1);
        assert_eq!(history[1].score_after, 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = small_state();
        let snapshot = state.clone();

        state.card_at_mut(0).turn_face_up(0);
        assert!(state.cards()[0].is_face_up);
        assert!(!snapshot.cards()[0].is_face_up);
    }
}
