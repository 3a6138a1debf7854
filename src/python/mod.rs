//! Python bindings for the code-breaker engine.
//!
//! # Quick Start
//!
//! ```python
//! import code_breaker as cb
//!
//! game = cb.GameSession(code_length=4, palette_size=6, max_attempts=10, seed=42)
//! exact, found = game.submit_guess("RGBY")
//! print(game.status(), game.history())
//!
//! hint = game.suggest()
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::GameError;

mod py_session;

pub use py_session::*;

pub(crate) fn to_py_err(err: GameError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// code_breaker: a Mastermind engine.
///
/// This module provides:
/// - Game sessions with seeded secrets
/// - Aggregate scoring (exact / found counts)
/// - Minimax hints
#[pymodule]
fn code_breaker(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGameSession>()?;
    m.add_function(wrap_pyfunction!(py_evaluate, m)?)?;
    Ok(())
}
