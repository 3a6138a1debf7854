//! The game session state machine.
//!
//! ```text
//! InProgress --(exact == N)------------------> Won
//! InProgress --(attempts == max, not solved)--> Lost
//! ```
//!
//! A session is created once per game with a freshly generated secret and is
//! mutated only by [`GameSession::submit_guess`]. Once terminal it is a
//! read-only history.

use im::Vector;
use tracing::{debug, instrument};

use crate::core::{Code, GameConfig, GameError, Palette, Result};
use crate::generator::{CodeGenerator, RandomGenerator};
use crate::scoring::{evaluate, MatchResult};

use super::snapshot::SessionSnapshot;
use super::status::{GameStatus, GuessRecord};

/// One game from secret generation to termination.
///
/// Cloning is O(1): history lives in a persistent vector.
#[derive(Clone)]
pub struct GameSession {
    config: GameConfig,
    palette: Palette,
    secret: Code,
    history: Vector<GuessRecord>,
    status: GameStatus,
}

impl GameSession {
    /// Start a game with a random secret.
    ///
    /// Uses `config.seed` when set, OS entropy otherwise.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if the config does not validate.
    pub fn new(config: GameConfig) -> Result<Self> {
        let mut generator = match config.seed {
            Some(seed) => RandomGenerator::new(seed),
            None => RandomGenerator::from_entropy(),
        };
        Self::with_generator(config, &mut generator)
    }

    /// Start a game whose secret comes from `generator`.
    #[instrument(level = "debug", skip(generator))]
    pub fn with_generator<G>(config: GameConfig, generator: &mut G) -> Result<Self>
    where
        G: CodeGenerator + ?Sized,
    {
        let palette = config.validate()?;
        let secret = generator.generate(config.code_length, config.palette_size)?;
        secret
            .check(config.code_length, palette)
            .map_err(|e| GameError::invalid_configuration(format!("generated secret rejected: {}", e)))?;
        debug!("session started");
        Ok(Self::from_parts(config, palette, secret))
    }

    /// Start a game with a known secret.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` for a bad config, `LengthMismatch` or
    /// `InvalidPeg` if the secret does not fit it.
    pub fn with_secret(config: GameConfig, secret: Code) -> Result<Self> {
        let palette = config.validate()?;
        secret.check(config.code_length, palette)?;
        Ok(Self::from_parts(config, palette, secret))
    }

    fn from_parts(config: GameConfig, palette: Palette, secret: Code) -> Self {
        Self {
            config,
            palette,
            secret,
            history: Vector::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Score a guess and advance the state machine.
    ///
    /// A failed submission leaves the session untouched.
    ///
    /// # Errors
    ///
    /// - `SessionTerminated` once the game is Won or Lost
    /// - `LengthMismatch` if the guess is not `code_length` pegs
    /// - `InvalidPeg` if the guess uses a color outside the palette
    #[instrument(level = "debug", skip(self, guess), fields(attempt = self.history.len() + 1, guess = %guess))]
    pub fn submit_guess(&mut self, guess: Code) -> Result<MatchResult> {
        if self.status.is_terminal() {
            return Err(GameError::SessionTerminated { status: self.status });
        }
        guess.check(self.config.code_length, self.palette)?;

        let result = evaluate(&self.secret, &guess)?;
        self.history.push_back(GuessRecord::new(guess, result.clone()));

        if result.is_solved() {
            self.status = GameStatus::Won;
        } else if self.history.len() >= self.config.max_attempts {
            self.status = GameStatus::Lost;
        }
        debug!(exact = result.exact_count(), found = result.found_count(), status = %self.status, "guess scored");

        Ok(result)
    }

    /// Submitted guesses, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<GuessRecord> {
        &self.history
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        if self.is_terminal() {
            0
        } else {
            self.config.max_attempts - self.history.len()
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn palette(&self) -> Palette {
        self.palette
    }

    #[must_use]
    pub fn code_length(&self) -> usize {
        self.config.code_length
    }

    /// The secret, available only once the game is over.
    #[must_use]
    pub fn reveal_secret(&self) -> Option<&Code> {
        self.is_terminal().then_some(&self.secret)
    }

    /// Capture everything needed to resume this session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            config: self.config.clone(),
            secret: self.secret.clone(),
            history: self.history.iter().cloned().collect(),
            status: self.status,
        }
    }

    /// Rebuild a session from a snapshot, replaying its history.
    ///
    /// # Errors
    ///
    /// `Snapshot` if the snapshot is inconsistent: bad config, malformed
    /// secret or guess, a stored score that disagrees with re-scoring, or a
    /// stored status that disagrees with the replay.
    #[instrument(level = "debug", skip(snapshot), fields(records = snapshot.history.len()))]
    pub fn restore(snapshot: SessionSnapshot) -> Result<Self> {
        let SessionSnapshot {
            config,
            secret,
            history,
            status,
        } = snapshot;

        let mut session = Self::with_secret(config, secret)
            .map_err(|e| GameError::snapshot(format!("invalid session header: {}", e)))?;

        for (i, record) in history.into_iter().enumerate() {
            let (guess, stored) = record.into_parts();
            let replayed = session
                .submit_guess(guess)
                .map_err(|e| GameError::snapshot(format!("record {} rejected: {}", i, e)))?;
            if replayed != stored {
                return Err(GameError::snapshot(format!(
                    "record {} scored {} but snapshot says {}",
                    i, replayed, stored
                )));
            }
        }

        if session.status != status {
            return Err(GameError::snapshot(format!(
                "replayed status {} but snapshot says {}",
                session.status, status
            )));
        }
        Ok(session)
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("config", &self.config)
            .field("attempts", &self.history.len())
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}
