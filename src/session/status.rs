//! Session status and guess records.

use serde::{Deserialize, Serialize};

use crate::core::Code;
use crate::scoring::MatchResult;

/// Where a session stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Guesses are still accepted.
    #[default]
    InProgress,
    /// A guess matched the secret exactly.
    Won,
    /// The attempt limit was reached without a win.
    Lost,
}

impl GameStatus {
    /// Won or Lost.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameStatus::InProgress => "InProgress",
            GameStatus::Won => "Won",
            GameStatus::Lost => "Lost",
        };
        f.write_str(name)
    }
}

/// A submitted guess and its score.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuessRecord {
    guess: Code,
    result: MatchResult,
}

impl GuessRecord {
    pub(crate) fn new(guess: Code, result: MatchResult) -> Self {
        Self { guess, result }
    }

    #[must_use]
    pub fn guess(&self) -> &Code {
        &self.guess
    }

    #[must_use]
    pub fn result(&self) -> &MatchResult {
        &self.result
    }

    /// Split into `(guess, result)`.
    #[must_use]
    pub fn into_parts(self) -> (Code, MatchResult) {
        (self.guess, self.result)
    }
}
