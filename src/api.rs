//! The engine's external surface for a rendering layer.
//!
//! A renderer creates a game, forwards guesses, and redraws from `history`
//! and `status`. It never mutates session state any other way.

use crate::core::{Code, GameConfig, Result};
use crate::scoring::MatchResult;
use crate::session::{GameSession, GameStatus};

/// Start a game with `length` pegs, `palette_size` colors and `max_attempts` guesses.
///
/// # Errors
///
/// `InvalidConfiguration` if any dimension is out of range.
pub fn new_game(length: usize, palette_size: usize, max_attempts: usize) -> Result<GameSession> {
    GameSession::new(GameConfig::new(length, palette_size, max_attempts))
}

/// Score a guess. See [`GameSession::submit_guess`].
pub fn submit_guess(session: &mut GameSession, guess: Code) -> Result<MatchResult> {
    session.submit_guess(guess)
}

/// `(guess, result)` pairs, oldest first.
#[must_use]
pub fn history(session: &GameSession) -> Vec<(Code, MatchResult)> {
    session
        .history()
        .iter()
        .cloned()
        .map(|record| record.into_parts())
        .collect()
}

#[must_use]
pub fn status(session: &GameSession) -> GameStatus {
    session.status()
}
