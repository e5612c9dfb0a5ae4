//! A Memorize session: one engine, a theme catalog, and the current game.
//!
//! The session is what a UI binds to. It picks a theme, deals a game from
//! it, forwards taps to the engine and deals follow-up games on request.

use super::theme::{Theme, ThemeCatalog};
use crate::cards::Card;
use crate::core::{CardId, ChoiceOutcome, DeckRng, GameSnapshot, GameState};
use crate::error::{MatchError, Result};
use crate::rules::{ClassicScoring, MatchingEngine, ScoringRules};

/// The current Memorize game and everything needed to start the next one.
#[derive(Clone, Debug)]
pub struct MemorizeSession<S = ClassicScoring> {
    engine: MatchingEngine<S>,
    catalog: ThemeCatalog,
    theme: Theme,
    game: GameState<String>,
}

impl<S: ScoringRules> MemorizeSession<S> {
    /// Start a session with a random theme, seeded from the engine config.
    ///
    /// # Errors
    ///
    /// Only if the catalog cannot deal, which a validated catalog never does.
    pub fn start(engine: MatchingEngine<S>, catalog: ThemeCatalog) -> Result<Self> {
        let rng = DeckRng::new(engine.config().seed);
        let (theme, game) = deal(&engine, &catalog, rng)?;
        Ok(Self {
            engine,
            catalog,
            theme,
            game,
        })
    }

    /// Resume a saved game.
    ///
    /// # Errors
    ///
    /// [`MatchError::InvalidTheme`] when `theme_name` is not in the catalog
    /// or the snapshot holds contents the theme does not have, and
    /// [`MatchError::CorruptSnapshot`] for an inconsistent snapshot.
    pub fn resume(
        engine: MatchingEngine<S>,
        catalog: ThemeCatalog,
        theme_name: &str,
        snapshot: GameSnapshot<String>,
    ) -> Result<Self> {
        let theme = catalog
            .get(theme_name)
            .cloned()
            .ok_or_else(|| MatchError::invalid_theme(theme_name, "not in catalog"))?;

        if let Some(card) = snapshot.cards.iter().find(|c| !theme.contents.contains(&c.content)) {
            return Err(MatchError::invalid_theme(
                theme_name,
                format!("snapshot content {:?} not in theme", card.content),
            ));
        }

        let game = GameState::restore(snapshot)?;
        Ok(Self {
            engine,
            catalog,
            theme,
            game,
        })
    }

    /// Deal a new game with a freshly picked theme.
    pub fn new_game(&mut self) -> Result<()> {
        let rng = self.game.rng.fork();
        let (theme, game) = deal(&self.engine, &self.catalog, rng)?;
        self.theme = theme;
        self.game = game;
        Ok(())
    }

    /// Choose a card. See [`MatchingEngine::choose`].
    pub fn choose(&mut self, id: CardId) -> ChoiceOutcome {
        self.engine.choose(&mut self.game, id)
    }

    /// Re-shuffle the current game.
    pub fn shuffle(&mut self) {
        self.engine.shuffle(&mut self.game);
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[must_use]
    pub fn game(&self) -> &GameState<String> {
        &self.game
    }

    #[must_use]
    pub fn cards(&self) -> &[Card<String>] {
        self.game.cards()
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.game.score()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.engine.is_complete(&self.game)
    }

    #[must_use]
    pub fn engine(&self) -> &MatchingEngine<S> {
        &self.engine
    }

    #[must_use]
    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }
}

/// Pick a theme and deal a game from it, consuming `rng` as the game RNG.
fn deal<S: ScoringRules>(
    engine: &MatchingEngine<S>,
    catalog: &ThemeCatalog,
    rng: DeckRng,
) -> Result<(Theme, GameState<String>)> {
    let mut picker = rng.for_context("theme");
    let theme = catalog.pick(&mut picker).cloned().ok_or(MatchError::EmptyCatalog)?;
    theme.validate()?;
    let pair_count = theme.pick_pair_count(&mut picker);

    let mut contents = theme.contents.clone();
    picker.shuffle(&mut contents);

    tracing::debug!(theme = %theme.name, pairs = pair_count, "picked theme");

    let game = engine.deal_contents(pair_count, &contents, rng)?;
    Ok((theme, game))
}
