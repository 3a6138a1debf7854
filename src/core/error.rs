//! Error taxonomy for the engine.
//!
//! Every failure is returned synchronously to the immediate caller. The engine
//! never logs, retries or masks an error; presentation layers decide how to
//! surface each kind.

use super::peg::Peg;
use crate::session::GameStatus;

/// Errors produced by generation, scoring, sessions and persistence.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Code length, palette size or attempt limit is unusable.
    ///
    /// Fatal to session creation.
    #[display("Invalid configuration: {}", reason)]
    InvalidConfiguration { reason: String },

    /// A guess does not have the secret's length.
    #[display("Expected a code of length {}, got {}", expected, actual)]
    LengthMismatch { expected: usize, actual: usize },

    /// A guess was submitted after the session ended.
    #[display("Session is over ({})", status)]
    SessionTerminated { status: GameStatus },

    /// A guess uses a color outside the game's palette.
    #[display("Peg {:?} is outside the {}-color palette", peg, palette_size)]
    InvalidPeg { peg: Peg, palette_size: usize },

    /// The solver was asked to enumerate too many codes.
    #[display("Search space of {} codes is too large", size)]
    SearchSpaceTooLarge { size: u128 },

    /// A snapshot could not be decoded or failed validation.
    #[display("Snapshot error: {}", reason)]
    Snapshot { reason: String },
}

impl std::error::Error for GameError {}

impl GameError {
    pub(crate) fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }

    pub(crate) fn snapshot(reason: impl Into<String>) -> Self {
        Self::Snapshot { reason: reason.into() }
    }

    /// Whether the caller can recover by resubmitting within the same session.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::LengthMismatch { .. } | GameError::InvalidPeg { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;
