//! Core engine types: pegs, codes, RNG, configuration, errors.
//!
//! Everything else in the crate is built from these types.

pub mod peg;
pub mod code;
pub mod rng;
pub mod config;
pub mod error;

pub use peg::{Palette, Peg};
pub use code::{Code, ParseCodeError};
pub use rng::{GameRng, GameRngState};
pub use config::GameConfig;
pub use error::{GameError, Result};
