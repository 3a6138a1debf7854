//! Code-breaking solver.
//!
//! The solver only sees what a player sees: guesses and their aggregate
//! scores. It keeps the set of codes consistent with that history and lets a
//! [`GuessPolicy`] pick from it. Since the secret is always consistent, any
//! policy that picks from the set wins within `|set|` guesses.

mod candidates;
mod policy;

pub use candidates::{CandidateSet, MAX_CANDIDATES};
pub use policy::{FirstCandidate, GuessPolicy, MinimaxPolicy, RandomCandidate};

use tracing::{debug, instrument};

use crate::core::{Code, Result};
use crate::session::{GameSession, GameStatus};

/// Suggest the next guess for `session` without submitting it.
///
/// Returns `None` once the game is over.
pub fn suggest<P>(session: &GameSession, policy: &mut P) -> Result<Option<Code>>
where
    P: GuessPolicy + ?Sized,
{
    if session.is_terminal() {
        return Ok(None);
    }
    let candidates = CandidateSet::from_history(
        session.code_length(),
        session.palette().size(),
        session.history(),
    )?;
    Ok(policy.choose(&candidates))
}

/// Play `session` to completion with `policy`.
///
/// Returns the final status, or `InProgress` if the policy declined to guess.
///
/// # Errors
///
/// `SearchSpaceTooLarge` if the game is too big to enumerate.
#[instrument(level = "debug", skip_all, fields(attempts = session.attempts_used()))]
pub fn autoplay<P>(session: &mut GameSession, policy: &mut P) -> Result<GameStatus>
where
    P: GuessPolicy + ?Sized,
{
    let mut candidates = CandidateSet::from_history(
        session.code_length(),
        session.palette().size(),
        session.history(),
    )?;

    while !session.is_terminal() {
        let Some(guess) = policy.choose(&candidates) else {
            debug!("policy returned no guess");
            break;
        };
        let result = session.submit_guess(guess.clone())?;
        candidates.retain_consistent(&guess, &result);
        debug!(remaining = candidates.len(), "candidates filtered");
    }

    Ok(session.status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    #[test]
    fn test_autoplay_small_game() {
        let config = GameConfig::new(3, 4, 64);
        for secret in ["RRR", "BGY", "YYR"] {
            let mut session = GameSession::with_secret(config.clone(), secret.parse().unwrap()).unwrap();
            assert_eq!(autoplay(&mut session, &mut FirstCandidate).unwrap(), GameStatus::Won);
            assert_eq!(session.reveal_secret().unwrap().to_string(), secret);
        }
    }

    #[test]
    fn test_suggest() {
        let mut session =
            GameSession::with_secret(GameConfig::default(), "RGBY".parse().unwrap()).unwrap();
        assert_eq!(
            suggest(&session, &mut FirstCandidate).unwrap().unwrap().to_string(),
            "RRRR"
        );

        session.submit_guess("RGBY".parse().unwrap()).unwrap();
        assert_eq!(suggest(&session, &mut FirstCandidate).unwrap(), None);
    }

    #[test]
    fn test_autoplay_resumes_mid_game() {
        let mut session =
            GameSession::with_secret(GameConfig::default(), "OPYB".parse().unwrap()).unwrap();
        session.submit_guess("RRGG".parse().unwrap()).unwrap();
        session.submit_guess("BBYY".parse().unwrap()).unwrap();

        let status = autoplay(&mut session, &mut MinimaxPolicy::default()).unwrap();
        assert_eq!(status, GameStatus::Won);
    }
}
