//! Guess scoring.
//!
//! Scores are aggregate: a `MatchResult` says how many pegs matched exactly
//! and how many were found at all, never which guess positions they were.
//! This matches the two-by-two marker grid players see, where markers
//! `0..exact` are filled and `0..found` are outlined.

pub mod evaluator;
pub mod result;

pub use evaluator::{evaluate, is_consistent};
pub use result::{Marker, Match, MatchResult};
