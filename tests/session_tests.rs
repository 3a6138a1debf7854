//! Session state machine and external-interface tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use code_breaker::api;
use code_breaker::{
    Code, CodeGenerator, GameConfig, GameError, GameSession, GameStatus, RandomGenerator,
    SequenceGenerator, SessionEvent, SharedSession,
};
use proptest::prelude::*;

fn code(s: &str) -> Code {
    s.parse().unwrap()
}

fn session(secret: &str, max_attempts: usize) -> GameSession {
    GameSession::with_secret(GameConfig::new(4, 6, max_attempts), code(secret)).unwrap()
}

// =============================================================================
// State Machine
// =============================================================================

/// Lost exactly when M guesses are used without solving.
#[test]
fn test_lost_after_max_attempts() {
    for max in 1..=6 {
        let mut game = session("RGBY", max);
        for attempt in 1..=max {
            assert_eq!(game.status(), GameStatus::InProgress);
            game.submit_guess(code("OOOO")).unwrap();
            assert_eq!(game.attempts_used(), attempt);
        }
        assert_eq!(game.status(), GameStatus::Lost);
    }
}

/// Terminal sessions reject guesses and keep their history.
#[test]
fn test_terminal_sessions_are_frozen() {
    let mut won = session("RGBY", 5);
    won.submit_guess(code("RGBY")).unwrap();

    let mut lost = session("RGBY", 1);
    lost.submit_guess(code("PPPP")).unwrap();

    for (game, status) in [(&mut won, GameStatus::Won), (&mut lost, GameStatus::Lost)] {
        let before = game.history().clone();
        for guess in ["RGBY", "OOOO", "RGB"] {
            assert_eq!(
                game.submit_guess(code(guess)),
                Err(GameError::SessionTerminated { status })
            );
        }
        assert_eq!(game.history(), &before);
        assert_eq!(game.status(), status);
    }
}

/// Error ordering: termination is reported before shape problems.
#[test]
fn test_terminated_takes_precedence() {
    let mut game = session("RGBY", 1);
    game.submit_guess(code("RGBY")).unwrap();
    assert!(matches!(
        game.submit_guess(code("RG")),
        Err(GameError::SessionTerminated { .. })
    ));
}

/// History preserves submission order and pairs each guess with its score.
#[test]
fn test_history_order() {
    let mut game = session("RGBY", 10);
    let guesses = ["RRGG", "BBYY", "YBGR", "RGBY"];
    let results: Vec<_> = guesses
        .iter()
        .map(|g| game.submit_guess(code(g)).unwrap())
        .collect();

    let history = api::history(&game);
    assert_eq!(history.len(), 4);
    for ((guess, result), (expected_guess, expected_result)) in
        history.iter().zip(guesses.iter().zip(results.iter()))
    {
        assert_eq!(guess, &code(expected_guess));
        assert_eq!(result, expected_result);
    }
    assert_eq!(api::status(&game), GameStatus::Won);
}

// =============================================================================
// Generation
// =============================================================================

/// Fixed seeds give identical secrets across runs.
#[test]
fn test_seeded_generation_is_reproducible() {
    let first: Vec<Code> = {
        let mut generator = RandomGenerator::new(2024);
        (0..20).map(|_| generator.generate(4, 6).unwrap()).collect()
    };
    let second: Vec<Code> = {
        let mut generator = RandomGenerator::new(2024);
        (0..20).map(|_| generator.generate(4, 6).unwrap()).collect()
    };
    assert_eq!(first, second);
}

#[test]
fn test_fixed_sequence_drives_session() {
    let mut generator = SequenceGenerator::new(code("YYBR").iter());
    let mut game = GameSession::with_generator(GameConfig::default(), &mut generator).unwrap();
    let result = game.submit_guess(code("RYBY")).unwrap();
    // Y exact at 1, B exact at 2; leftover secret {Y,R} vs guess {R,Y}
    assert_eq!(result.counts(), (2, 4));
}

#[test]
fn test_boxed_generator() {
    let mut generator: Box<dyn CodeGenerator> = Box::new(RandomGenerator::new(1));
    let game = GameSession::with_generator(GameConfig::default(), &mut generator).unwrap();
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_generation_errors_surface() {
    let mut empty = SequenceGenerator::new(Vec::new());
    assert!(matches!(
        GameSession::with_generator(GameConfig::default(), &mut empty),
        Err(GameError::InvalidConfiguration { .. })
    ));
}

// =============================================================================
// Shared Access
// =============================================================================

/// Concurrent submitters never exceed the attempt limit.
#[test]
fn test_shared_session_serializes_submissions() {
    let shared = SharedSession::new(session("RGBY", 10));
    let finished = Arc::new(AtomicUsize::new(0));
    let finished_in = Arc::clone(&finished);
    shared.subscribe(move |event| {
        if matches!(event, SessionEvent::Finished { .. }) {
            finished_in.fetch_add(1, Ordering::SeqCst);
        }
    });

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                let mut accepted = 0;
                for _ in 0..5 {
                    if shared.submit_guess(code("OOOO")).is_ok() {
                        accepted += 1;
                    }
                }
                accepted
            })
        })
        .collect();

    let accepted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(accepted, 10);
    assert_eq!(shared.history().len(), 10);
    assert_eq!(shared.status(), GameStatus::Lost);
    assert_eq!(finished.load(Ordering::SeqCst), 1);
}

/// Observers see attempts in submission order even with concurrent submitters.
#[test]
fn test_shared_session_events_in_attempt_order() {
    let shared = SharedSession::new(session("RGBY", 40));
    let attempts = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&attempts);
    shared.subscribe(move |event| {
        if let SessionEvent::GuessScored { attempt, .. } = event {
            sink.lock().unwrap().push(*attempt);
            thread::yield_now();
        }
    });

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                for _ in 0..5 {
                    shared.submit_guess(code("OOOO")).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let attempts = attempts.lock().unwrap();
    assert_eq!(*attempts, (1..=40).collect::<Vec<_>>());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_random_play_respects_invariants(
        seed in any::<u64>(),
        max_attempts in 1usize..12,
        guesses in prop::collection::vec(prop::collection::vec(0usize..6, 4), 0..16),
    ) {
        let config = GameConfig::default().with_max_attempts(max_attempts).with_seed(seed);
        let mut game = GameSession::new(config).unwrap();

        for pegs in guesses {
            let guess: Code = pegs.into_iter().map(|i| code_breaker::Peg::ALL[i]).collect();
            let before = game.attempts_used();
            match game.submit_guess(guess) {
                Ok(result) => {
                    prop_assert_eq!(game.attempts_used(), before + 1);
                    prop_assert_eq!(result.is_solved(), game.status() == GameStatus::Won);
                }
                Err(err) => {
                    prop_assert!(game.is_terminal());
                    let is_terminated = matches!(err, GameError::SessionTerminated { .. });
                    prop_assert!(is_terminated);
                    prop_assert_eq!(game.attempts_used(), before);
                }
            }
            prop_assert!(game.attempts_used() <= max_attempts);
        }

        let lost_by_count = game.status() == GameStatus::Lost;
        if lost_by_count {
            prop_assert_eq!(game.attempts_used(), max_attempts);
            prop_assert!(game.history().iter().all(|r| !r.result().is_solved()));
        }
    }
}
