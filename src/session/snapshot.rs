//! Session snapshots for persistence.
//!
//! A snapshot is plain data: config, secret, history and status. Encoding uses
//! bincode; any serde format works for callers that prefer their own.
//! [`GameSession::restore`](super::GameSession::restore) replays and
//! re-validates a snapshot before trusting it.

use serde::{Deserialize, Serialize};

use crate::core::{Code, GameConfig, GameError, Result};

use super::status::{GameStatus, GuessRecord};

/// Serializable state of a [`GameSession`](super::GameSession).
///
/// Contains the secret, so treat it as private to whoever hosts the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub config: GameConfig,
    pub secret: Code,
    pub history: Vec<GuessRecord>,
    pub status: GameStatus,
}

impl SessionSnapshot {
    /// Encode with bincode.
    pub fn encode(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| GameError::snapshot(e.to_string()))
    }

    /// Decode from bincode. The result is not yet validated.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| GameError::snapshot(e.to_string()))
    }
}
