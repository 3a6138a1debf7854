//! Guess selection policies.
//!
//! Policies are trait-based to allow customization:
//! - `FirstCandidate`: lexicographically first consistent code
//! - `RandomCandidate`: uniform over consistent codes, seeded
//! - `MinimaxPolicy`: smallest worst-case remaining set

use rustc_hash::FxHashMap;

use crate::core::{Code, GameRng};
use crate::scoring::evaluate;

use super::candidates::CandidateSet;

/// Picks the next guess from the codes still possible.
pub trait GuessPolicy {
    /// Choose a guess, or `None` if there are no candidates.
    fn choose(&mut self, candidates: &CandidateSet) -> Option<Code>;
}

/// Always guesses the first remaining candidate.
#[derive(Clone, Debug, Default)]
pub struct FirstCandidate;

impl GuessPolicy for FirstCandidate {
    fn choose(&mut self, candidates: &CandidateSet) -> Option<Code> {
        candidates.codes().first().cloned()
    }
}

/// Guesses a uniformly random remaining candidate.
#[derive(Clone, Debug)]
pub struct RandomCandidate {
    rng: GameRng,
}

impl RandomCandidate {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }
}

impl GuessPolicy for RandomCandidate {
    fn choose(&mut self, candidates: &CandidateSet) -> Option<Code> {
        self.rng.choose(candidates.codes()).cloned()
    }
}

/// Knuth-style minimax restricted to consistent candidates.
///
/// For each candidate guess, partitions the remaining set by the feedback it
/// would produce and picks the guess whose largest partition is smallest.
/// Ties go to the earliest candidate. Quadratic in the candidate count, so
/// sets larger than `exhaustive_limit` fall back to the first candidate.
#[derive(Clone, Debug)]
pub struct MinimaxPolicy {
    pub exhaustive_limit: usize,
}

impl Default for MinimaxPolicy {
    fn default() -> Self {
        Self {
            exhaustive_limit: 2_000,
        }
    }
}

impl MinimaxPolicy {
    /// Size of the largest feedback partition `guess` leaves behind.
    #[must_use]
    pub fn worst_case(guess: &Code, candidates: &CandidateSet) -> usize {
        let mut partitions: FxHashMap<(usize, usize), usize> = FxHashMap::default();
        for candidate in candidates.iter() {
            if let Ok(result) = evaluate(candidate, guess) {
                *partitions.entry(result.counts()).or_insert(0) += 1;
            }
        }
        partitions.values().copied().max().unwrap_or(0)
    }
}

impl GuessPolicy for MinimaxPolicy {
    fn choose(&mut self, candidates: &CandidateSet) -> Option<Code> {
        if candidates.len() > self.exhaustive_limit {
            return candidates.codes().first().cloned();
        }
        candidates
            .iter()
            .enumerate()
            .min_by_key(|(i, guess)| (Self::worst_case(guess, candidates), *i))
            .map(|(_, guess)| guess.clone())
    }
}
