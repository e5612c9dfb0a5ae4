//! Python bindings for the memory-match engine.
//!
//! # Quick Start
//!
//! ```python
//! import memory_match as mm
//!
//! game = mm.MemorizeGame(seed=7)
//! print(game.theme_name, len(game.cards()))
//!
//! first = game.cards()[0]
//! outcome = game.choose(first.id)
//! assert outcome.kind == "revealed"
//!
//! data = game.save()
//! again = mm.MemorizeGame.load(game.theme_name, data, seed=7)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// memory_match: a pairwise memory-matching game engine.
#[pymodule]
fn memory_match(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyChoiceOutcome>()?;
    m.add_class::<PyMemorizeGame>()?;
    Ok(())
}
