//! # code-breaker
//!
//! A Mastermind-style code-breaking engine.
//!
//! ## Design Principles
//!
//! 1. **Aggregate Scoring**: A guess is scored as exact and found counts,
//!    never per position. Markers `0..exact` are filled and `0..found` are
//!    outlined.
//!
//! 2. **Deterministic When Asked**: Secrets come from a seeded ChaCha8 RNG,
//!    or from a fixed sequence in tests.
//!
//! 3. **Renderer-Agnostic**: The engine exposes state. Drawing, animation
//!    and input are left to whoever consumes `history()` and `status()`.
//!
//! ## Example
//!
//! ```
//! use code_breaker::{GameConfig, GameSession, GameStatus};
//!
//! let secret = "RGBY".parse().unwrap();
//! let mut game = GameSession::with_secret(GameConfig::default(), secret)?;
//!
//! let result = game.submit_guess("RRGB".parse().unwrap())?;
//! assert_eq!((result.exact_count(), result.found_count()), (1, 3));
//!
//! game.submit_guess("RGBY".parse().unwrap())?;
//! assert_eq!(game.status(), GameStatus::Won);
//! # Ok::<(), code_breaker::GameError>(())
//! ```
//!
//! ## Modules
//!
//! - `core`: Pegs, codes, RNG, configuration, errors
//! - `generator`: Secret code generators
//! - `scoring`: Guess evaluation and match markers
//! - `session`: Game state machine, snapshots, shared access
//! - `solver`: Candidate filtering and guess policies
//! - `api`: Flat functions for rendering layers

pub mod core;
pub mod generator;
pub mod scoring;
pub mod session;
pub mod solver;
pub mod api;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    Code, ParseCodeError, Peg, Palette,
    GameRng, GameRngState,
    GameConfig, GameError, Result,
};

pub use crate::generator::{CodeGenerator, RandomGenerator, SequenceGenerator};

pub use crate::scoring::{evaluate, Marker, Match, MatchResult};

pub use crate::session::{
    GameSession, GameStatus, GuessRecord,
    SessionEvent, SessionSnapshot, SharedSession, ObserverId,
};

pub use crate::solver::{
    CandidateSet, GuessPolicy,
    FirstCandidate, RandomCandidate, MinimaxPolicy,
};
