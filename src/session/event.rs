//! Events published to session observers.

use serde::{Deserialize, Serialize};

use super::status::{GameStatus, GuessRecord};

/// Something that happened to a shared session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A guess was accepted and scored. `attempt` is 1-based.
    GuessScored { attempt: usize, record: GuessRecord },
    /// The session reached a terminal status.
    Finished { status: GameStatus, attempts: usize },
}
