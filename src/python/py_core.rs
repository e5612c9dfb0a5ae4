//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::cards::Card;
use crate::core::{ChoiceOutcome, IgnoreReason};

/// Read-only view of a card.
#[pyclass(name = "Card", frozen)]
#[derive(Clone, Debug)]
pub struct PyCard {
    #[pyo3(get)]
    pub id: u32,
    #[pyo3(get)]
    pub content: String,
    #[pyo3(get)]
    pub is_face_up: bool,
    #[pyo3(get)]
    pub is_matched: bool,
    #[pyo3(get)]
    pub bonus_remaining: f64,
}

impl PyCard {
    pub fn from_card(card: &Card<String>, now: u64) -> Self {
        Self {
            id: card.id.raw(),
            content: card.content.clone(),
            is_face_up: card.is_face_up,
            is_matched: card.is_matched,
            bonus_remaining: card.bonus.remaining_fraction(now),
        }
    }
}

#[pymethods]
impl PyCard {
    fn __repr__(&self) -> String {
        format!(
            "Card(id={}, content={:?}, face_up={}, matched={})",
            self.id, self.content, self.is_face_up, self.is_matched
        )
    }
}

/// Outcome of a choice.
///
/// `kind` is one of "ignored", "revealed", "matched", "mismatched".
#[pyclass(name = "ChoiceOutcome", frozen)]
#[derive(Clone, Debug)]
pub struct PyChoiceOutcome {
    #[pyo3(get)]
    pub kind: &'static str,
    /// Why an ignored choice had no effect.
    #[pyo3(get)]
    pub reason: Option<&'static str>,
    #[pyo3(get)]
    pub points: i64,
}

impl From<&ChoiceOutcome> for PyChoiceOutcome {
    fn from(outcome: &ChoiceOutcome) -> Self {
        let (kind, reason) = match outcome {
            ChoiceOutcome::Ignored(reason) => (
                "ignored",
                Some(match reason {
                    IgnoreReason::UnknownCard => "unknown_card",
                    IgnoreReason::AlreadyFaceUp => "already_face_up",
                    IgnoreReason::AlreadyMatched => "already_matched",
                }),
            ),
            ChoiceOutcome::Revealed { .. } => ("revealed", None),
            ChoiceOutcome::Matched { .. } => ("matched", None),
            ChoiceOutcome::Mismatched { .. } => ("mismatched", None),
        };
        Self {
            kind,
            reason,
            points: outcome.points(),
        }
    }
}

#[pymethods]
impl PyChoiceOutcome {
    /// Did the choice change the game?
    fn is_effective(&self) -> bool {
        self.kind != "ignored"
    }

    fn __repr__(&self) -> String {
        format!("ChoiceOutcome(kind={:?}, points={})", self.kind, self.points)
    }
}
