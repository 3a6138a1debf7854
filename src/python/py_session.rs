//! Session bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Code, GameConfig};
use crate::scoring::evaluate;
use crate::session::GameSession;
use crate::solver::{self, MinimaxPolicy};

use super::to_py_err;

fn parse_code(text: &str) -> PyResult<Code> {
    text.parse::<Code>()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Score `guess` against `secret`, returning `(exact, found)`.
#[pyfunction]
#[pyo3(name = "evaluate")]
pub fn py_evaluate(secret: &str, guess: &str) -> PyResult<(usize, usize)> {
    let result = evaluate(&parse_code(secret)?, &parse_code(guess)?).map_err(to_py_err)?;
    Ok(result.counts())
}

/// Python wrapper for GameSession.
#[pyclass(name = "GameSession")]
pub struct PyGameSession {
    session: GameSession,
}

#[pymethods]
impl PyGameSession {
    /// Create a new game.
    ///
    /// # Arguments
    /// - code_length: Pegs per code
    /// - palette_size: Colors available (1-8)
    /// - max_attempts: Guesses allowed
    /// - seed: RNG seed, or None for a random secret
    #[new]
    #[pyo3(signature = (
        code_length = 4,
        palette_size = 6,
        max_attempts = 10,
        seed = None
    ))]
    fn new(
        code_length: usize,
        palette_size: usize,
        max_attempts: usize,
        seed: Option<u64>,
    ) -> PyResult<Self> {
        let mut config = GameConfig::new(code_length, palette_size, max_attempts);
        config.seed = seed;
        let session = GameSession::new(config).map_err(to_py_err)?;
        Ok(Self { session })
    }

    /// Submit a guess such as "RGBY". Returns `(exact, found)`.
    fn submit_guess(&mut self, guess: &str) -> PyResult<(usize, usize)> {
        let result = self
            .session
            .submit_guess(parse_code(guess)?)
            .map_err(to_py_err)?;
        Ok(result.counts())
    }

    /// List of `(guess, exact, found)` tuples.
    fn history(&self) -> Vec<(String, usize, usize)> {
        self.session
            .history()
            .iter()
            .map(|record| {
                let (exact, found) = record.result().counts();
                (record.guess().to_string(), exact, found)
            })
            .collect()
    }

    /// "InProgress", "Won" or "Lost".
    fn status(&self) -> String {
        self.session.status().to_string()
    }

    #[getter]
    fn attempts_remaining(&self) -> usize {
        self.session.attempts_remaining()
    }

    /// The secret once the game is over, else None.
    fn reveal_secret(&self) -> Option<String> {
        self.session.reveal_secret().map(|code| code.to_string())
    }

    /// Minimax hint for the next guess, or None when the game is over.
    fn suggest(&self) -> PyResult<Option<String>> {
        let hint = solver::suggest(&self.session, &mut MinimaxPolicy::default())
            .map_err(to_py_err)?;
        Ok(hint.map(|code| code.to_string()))
    }

    fn __repr__(&self) -> String {
        format!(
            "GameSession(attempts={}, status={})",
            self.session.attempts_used(),
            self.session.status()
        )
    }
}
