//! Guess evaluation with standard Mastermind semantics.

use smallvec::SmallVec;

use crate::core::{Code, GameError, Peg, Result};

use super::result::MatchResult;

/// Score `guess` against `secret`.
///
/// 1. Positions where the pegs agree are exact matches and are consumed.
/// 2. Each leftover guess peg whose color is still among the leftover secret
///    pegs is an inexact match and consumes one occurrence.
/// 3. Everything else is no match.
///
/// A color is never credited more times than it appears in the leftover
/// secret.
///
/// # Errors
///
/// `LengthMismatch` if the codes differ in length.
pub fn evaluate(secret: &Code, guess: &Code) -> Result<MatchResult> {
    if secret.len() != guess.len() {
        return Err(GameError::LengthMismatch {
            expected: secret.len(),
            actual: guess.len(),
        });
    }

    let mut leftover = [0usize; Peg::COUNT];
    let mut unmatched: SmallVec<[Peg; 8]> = SmallVec::new();
    let mut exact = 0;

    for (s, g) in secret.iter().zip(guess.iter()) {
        if s == g {
            exact += 1;
        } else {
            leftover[s.index()] += 1;
            unmatched.push(g);
        }
    }

    let mut inexact = 0;
    for g in unmatched {
        let slot = &mut leftover[g.index()];
        if *slot > 0 {
            *slot -= 1;
            inexact += 1;
        }
    }

    Ok(MatchResult::counted(exact, inexact, secret.len()))
}

/// Whether `candidate` could be the secret given that `guess` scored `result`.
#[must_use]
pub fn is_consistent(candidate: &Code, guess: &Code, result: &MatchResult) -> bool {
    evaluate(candidate, guess).is_ok_and(|r| r.counts() == result.counts())
}
