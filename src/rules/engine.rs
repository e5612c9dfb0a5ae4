//! The matching engine.
//!
//! `MatchingEngine` owns the rules of a game (configuration, scoring and
//! a clock) but not its state. Games live in a [`GameState`] the caller
//! holds, and the engine mutates it through two intents:
//!
//! - [`MatchingEngine::choose`]: the player taps a card
//! - [`MatchingEngine::shuffle`]: the player asks for a re-shuffle
//!
//! ## Turn structure
//!
//! The first choice of a turn flips every other unmatched card face-down
//! and makes the chosen card the pending selection. The second choice
//! compares against it: equal contents lock both cards as matched,
//! different contents leave both face-up until the next turn starts.
//!
//! ## Usage
//!
//! ```
//! use memory_match::core::GameConfig;
//! use memory_match::rules::MatchingEngine;
//!
//! let engine = MatchingEngine::new(GameConfig::builder().seed(1).build());
//! let mut game = engine.create(2, |pair| ["A", "B"][pair]).unwrap();
//!
//! let a: Vec<_> = game.cards().iter().filter(|c| c.content == "A").map(|c| c.id).collect();
//! engine.choose(&mut game, a[0]);
//! engine.choose(&mut game, a[1]);
//!
//! assert_eq!(game.matched_pairs(), 1);
//! assert_eq!(game.score(), 2);
//! ```

use std::sync::Arc;

use im::Vector;
use smallvec::SmallVec;

use super::scoring::{CardScore, ClassicScoring, ScoreContext, ScoringRules};
use crate::cards::{Card, CardContent};
use crate::core::{
    CardId, ChoiceOutcome, Clock, DeckRng, GameConfig, GameState, IgnoreReason, SystemClock,
};
use crate::error::{MatchError, Result};

/// Rules and collaborators for pairwise matching games.
#[derive(Clone, Debug)]
pub struct MatchingEngine<S = ClassicScoring> {
    config: GameConfig,
    scoring: S,
    clock: Arc<dyn Clock>,
}

impl MatchingEngine<ClassicScoring> {
    /// Engine with classic scoring and the system clock.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_scoring(config, ClassicScoring::default())
    }
}

impl<S: ScoringRules> MatchingEngine<S> {
    /// Engine with custom scoring and the system clock.
    #[must_use]
    pub fn with_scoring(config: GameConfig, scoring: S) -> Self {
        Self {
            config,
            scoring,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock used for bonus time.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the scoring rules.
    #[must_use]
    pub fn scoring(&self) -> &S {
        &self.scoring
    }

    /// Current clock reading.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Remaining bonus of a card right now, as a fraction of its limit.
    #[must_use]
    pub fn bonus_fraction<C>(&self, card: &Card<C>) -> f64 {
        card.bonus.remaining_fraction(self.now_ms())
    }

    // === Creation ===

    /// Deal a new game of `pair_count` pairs.
    ///
    /// `content_at` is called once per pair index, in order. Each content
    /// lands on two cards with consecutive ids.
    ///
    /// # Errors
    ///
    /// - [`MatchError::NoPairs`] when `pair_count` is zero
    /// - [`MatchError::DuplicateContent`] when two pairs got equal content
    pub fn create<C, F>(&self, pair_count: usize, content_at: F) -> Result<GameState<C>>
    where
        C: CardContent,
        F: FnMut(usize) -> C,
    {
        self.deal(pair_count, content_at, DeckRng::new(self.config.seed))
    }

    /// Deal a new game from the first `pair_count` entries of `contents`.
    ///
    /// # Errors
    ///
    /// As [`create`](Self::create), plus [`MatchError::InsufficientContent`]
    /// when `contents` is shorter than `pair_count`.
    pub fn create_from_contents<C: CardContent>(
        &self,
        pair_count: usize,
        contents: &[C],
    ) -> Result<GameState<C>> {
        self.deal_contents(pair_count, contents, DeckRng::new(self.config.seed))
    }

    /// Deal a follow-up game, seeded from the previous game's RNG.
    ///
    /// Successive calls produce different deals. The same sequence of calls
    /// from the same seed produces the same deals.
    pub fn new_game<C, F>(
        &self,
        previous: &mut GameState<C>,
        pair_count: usize,
        content_at: F,
    ) -> Result<GameState<C>>
    where
        C: CardContent,
        F: FnMut(usize) -> C,
    {
        let rng = previous.rng.fork();
        self.deal(pair_count, content_at, rng)
    }

    pub(crate) fn deal_contents<C: CardContent>(
        &self,
        pair_count: usize,
        contents: &[C],
        rng: DeckRng,
    ) -> Result<GameState<C>> {
        if pair_count > contents.len() {
            return Err(MatchError::InsufficientContent {
                requested: pair_count,
                available: contents.len(),
            });
        }
        self.deal(pair_count, |pair| contents[pair].clone(), rng)
    }

    pub(crate) fn deal<C, F>(&self, pair_count: usize, mut content_at: F, rng: DeckRng) -> Result<GameState<C>>
    where
        C: CardContent,
        F: FnMut(usize) -> C,
    {
        if pair_count == 0 {
            return Err(MatchError::NoPairs);
        }

        let mut contents: Vec<C> = Vec::with_capacity(pair_count);
        for pair in 0..pair_count {
            let content = content_at(pair);
            if let Some(first) = contents.iter().position(|c| *c == content) {
                return Err(MatchError::DuplicateContent { first, second: pair });
            }
            contents.push(content);
        }

        let bonus_limit = self.config.bonus_limit_ms();
        let mut cards = Vec::with_capacity(pair_count * 2);
        for (pair, content) in contents.into_iter().enumerate() {
            let (a, b) = CardId::pair(pair as u32);
            cards.push(Card::new(a, content.clone(), bonus_limit));
            cards.push(Card::new(b, content, bonus_limit));
        }

        if self.config.shuffle_on_create {
            rng.for_context("deck").shuffle(&mut cards);
        }

        tracing::debug!(pairs = pair_count, seed = rng.seed(), "dealt game");

        Ok(GameState::from_parts(cards, None, 0, Vector::new(), rng))
    }

    // === Intents ===

    /// Choose a card by id.
    ///
    /// Unknown, face-up and matched cards are ignored: the returned
    /// outcome says why, and the state is left untouched.
    pub fn choose<C: CardContent>(&self, state: &mut GameState<C>, id: CardId) -> ChoiceOutcome {
        let Some(chosen_idx) = state.position_of(id) else {
            return Self::ignore(id, IgnoreReason::UnknownCard);
        };

        let chosen = &state.cards()[chosen_idx];
        if chosen.is_matched {
            return Self::ignore(id, IgnoreReason::AlreadyMatched);
        }
        if chosen.is_face_up {
            return Self::ignore(id, IgnoreReason::AlreadyFaceUp);
        }

        let now = self.clock.now_ms();
        let outcome = match state.index_of_pending() {
            Some(pending_idx) => self.resolve_turn(state, pending_idx, chosen_idx, now),
            None => self.start_turn(state, chosen_idx, now),
        };

        state.record(outcome.clone());
        tracing::trace!(?outcome, score = state.score(), "choice");
        outcome
    }

    /// Re-shuffle the deck. Flags and the pending selection are kept.
    pub fn shuffle<C>(&self, state: &mut GameState<C>) {
        state.shuffle_cards();
        tracing::trace!(cards = state.cards().len(), "shuffled");
    }

    /// Has every pair been found?
    #[must_use]
    pub fn is_complete<C>(&self, state: &GameState<C>) -> bool {
        state.is_complete()
    }

    fn ignore(id: CardId, reason: IgnoreReason) -> ChoiceOutcome {
        tracing::trace!(%id, ?reason, "ignored choice");
        ChoiceOutcome::Ignored(reason)
    }

    /// Second choice of a turn: compare with the pending card.
    fn resolve_turn<C: CardContent>(
        &self,
        state: &mut GameState<C>,
        pending_idx: usize,
        chosen_idx: usize,
        now: u64,
    ) -> ChoiceOutcome {
        let pending = &state.cards()[pending_idx];
        let chosen = &state.cards()[chosen_idx];
        let (pending_id, chosen_id) = (pending.id, chosen.id);
        let is_match = pending.content == chosen.content;
        let ctx = ScoreContext {
            pending: CardScore::of(pending, now),
            chosen: CardScore::of(chosen, now),
        };

        let points = if is_match {
            state.card_at_mut(pending_idx).mark_matched(now);
            state.card_at_mut(chosen_idx).mark_matched(now);
            self.scoring.score_match(&ctx)
        } else {
            state.card_at_mut(pending_idx).has_been_seen = true;
            state.card_at_mut(chosen_idx).has_been_seen = true;
            self.scoring.score_mismatch(&ctx)
        };

        state.add_score(points);
        state.set_pending(None);
        state.card_at_mut(chosen_idx).turn_face_up(now);

        if is_match {
            ChoiceOutcome::Matched {
                pending: pending_id,
                card: chosen_id,
                points,
            }
        } else {
            ChoiceOutcome::Mismatched {
                pending: pending_id,
                card: chosen_id,
                points,
            }
        }
    }

    /// First choice of a turn: clear the table and arm the pending slot.
    fn start_turn<C>(&self, state: &mut GameState<C>, chosen_idx: usize, now: u64) -> ChoiceOutcome {
        let flip_matched = self.config.flip_matched_down;
        let mut flipped_down = SmallVec::new();

        for card in state.cards_mut() {
            if card.is_face_up && (flip_matched || !card.is_matched) {
                card.turn_face_down(now);
                flipped_down.push(card.id);
            }
        }

        let chosen = state.card_at_mut(chosen_idx);
        chosen.turn_face_up(now);
        let card = chosen.id;
        state.set_pending(Some(card));

        ChoiceOutcome::Revealed { card, flipped_down }
    }
}
