//! Game bindings for Python.

use std::borrow::Cow;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{CardId, GameConfig, GameSnapshot};
use crate::error::MatchError;
use crate::games::memorize::{MemorizeSession, ThemeCatalog};
use crate::rules::{MatchingEngine, TimeBonusScoring};

use super::py_core::{PyCard, PyChoiceOutcome};

fn to_py_err(err: MatchError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for a Memorize session with the built-in themes.
#[pyclass(name = "MemorizeGame")]
pub struct PyMemorizeGame {
    session: MemorizeSession<TimeBonusScoring>,
}

fn engine(seed: u64, bonus_ms: u64) -> MatchingEngine<TimeBonusScoring> {
    let config = GameConfig::builder().seed(seed).bonus_time_limit_ms(bonus_ms).build();
    MatchingEngine::with_scoring(config, TimeBonusScoring::default())
}

#[pymethods]
impl PyMemorizeGame {
    /// Start a session.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic deals
    /// - bonus_ms: bonus time per card in milliseconds
    #[new]
    #[pyo3(signature = (seed = 42, bonus_ms = 6_000))]
    fn new(seed: u64, bonus_ms: u64) -> PyResult<Self> {
        let session = MemorizeSession::start(engine(seed, bonus_ms), ThemeCatalog::builtin())
            .map_err(to_py_err)?;
        Ok(Self { session })
    }

    /// Choose a card by id.
    fn choose(&mut self, card_id: u32) -> PyChoiceOutcome {
        PyChoiceOutcome::from(&self.session.choose(CardId::new(card_id)))
    }

    /// Re-shuffle the cards.
    fn shuffle(&mut self) {
        self.session.shuffle();
    }

    /// Deal a new game with a new random theme.
    fn new_game(&mut self) -> PyResult<()> {
        self.session.new_game().map_err(to_py_err)
    }

    /// Cards in display order.
    fn cards(&self) -> Vec<PyCard> {
        let now = self.session.engine().now_ms();
        self.session.cards().iter().map(|c| PyCard::from_card(c, now)).collect()
    }

    #[getter]
    fn score(&self) -> i64 {
        self.session.score()
    }

    #[getter]
    fn theme_name(&self) -> String {
        self.session.theme().name.clone()
    }

    #[getter]
    fn theme_color(&self) -> String {
        self.session.theme().color.clone()
    }

    fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    /// Save the current game as bytes.
    fn save(&self) -> PyResult<Cow<'static, [u8]>> {
        let bytes = self.session.game().snapshot().to_bytes().map_err(to_py_err)?;
        Ok(Cow::Owned(bytes))
    }

    /// Resume a game saved with `save`.
    #[staticmethod]
    #[pyo3(signature = (theme_name, data, seed = 42, bonus_ms = 6_000))]
    fn load(theme_name: &str, data: &[u8], seed: u64, bonus_ms: u64) -> PyResult<Self> {
        let snapshot = GameSnapshot::<String>::from_bytes(data).map_err(to_py_err)?;
        let session = MemorizeSession::resume(
            engine(seed, bonus_ms),
            ThemeCatalog::builtin(),
            theme_name,
            snapshot,
        )
        .map_err(to_py_err)?;
        Ok(Self { session })
    }

    fn __repr__(&self) -> String {
        format!(
            "MemorizeGame(theme={:?}, pairs={}, score={})",
            self.session.theme().name,
            self.session.game().pair_count(),
            self.session.score()
        )
    }
}
