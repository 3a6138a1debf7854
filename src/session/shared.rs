//! Serialized access to one session from several callers.
//!
//! A UI event loop and a test harness (or a solver thread) may both want to
//! submit guesses. `SharedSession` puts the session behind a mutex so every
//! submission is one atomic step, and fans results out to observers after the
//! lock is released. The session itself never learns about observers.
//!
//! Events are queued while the session lock is held, so the queue is in
//! attempt order. One submitter at a time drains it, which keeps delivery in
//! that order even with concurrent submitters. No lock is held while an
//! observer runs, so observers may read from or submit to the same session.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::core::{Code, Result};
use crate::scoring::MatchResult;

use super::event::SessionEvent;
use super::game::GameSession;
use super::status::{GameStatus, GuessRecord};

/// Handle returned by [`SharedSession::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Arc<dyn Fn(&SessionEvent) + Send + Sync>;

#[derive(Default)]
struct Observers {
    next_id: u64,
    entries: Vec<(ObserverId, Observer)>,
}

#[derive(Default)]
struct Outbox {
    pending: VecDeque<SessionEvent>,
    draining: bool,
}

/// Clears the draining flag if an observer panics mid-delivery.
struct DrainGuard<'a>(&'a Mutex<Outbox>);

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            lock(self.0).draining = false;
        }
    }
}

/// A cloneable, thread-safe handle to one [`GameSession`].
#[derive(Clone)]
pub struct SharedSession {
    session: Arc<Mutex<GameSession>>,
    observers: Arc<Mutex<Observers>>,
    outbox: Arc<Mutex<Outbox>>,
}

// `submit_guess` writes only after every check passes, so a poisoned lock
// still guards a consistent session.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl SharedSession {
    pub fn new(session: GameSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            observers: Arc::new(Mutex::new(Observers::default())),
            outbox: Arc::new(Mutex::new(Outbox::default())),
        }
    }

    /// Register a callback invoked after each successful submission.
    pub fn subscribe<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&SessionEvent) + Send + Sync + 'static,
    {
        let mut observers = lock(&self.observers);
        let id = ObserverId(observers.next_id);
        observers.next_id += 1;
        observers.entries.push((id, Arc::new(observer)));
        id
    }

    /// Remove an observer. Returns whether it was registered.
    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        let mut observers = lock(&self.observers);
        let before = observers.entries.len();
        observers.entries.retain(|(existing, _)| *existing != id);
        observers.entries.len() != before
    }

    /// Submit a guess atomically, then notify observers.
    ///
    /// Errors are returned exactly as [`GameSession::submit_guess`] reports
    /// them, and no events are published for a failed submission. If another
    /// submitter is already delivering events, this call's events are handed
    /// to it and delivered after the earlier ones.
    pub fn submit_guess(&self, guess: Code) -> Result<MatchResult> {
        let result = {
            let mut session = lock(&self.session);
            let result = session.submit_guess(guess.clone())?;

            let attempt = session.attempts_used();
            let record = GuessRecord::new(guess, result.clone());
            let mut outbox = lock(&self.outbox);
            outbox
                .pending
                .push_back(SessionEvent::GuessScored { attempt, record });
            if session.is_terminal() {
                outbox.pending.push_back(SessionEvent::Finished {
                    status: session.status(),
                    attempts: attempt,
                });
            }
            result
        };

        self.drain();
        Ok(result)
    }

    fn drain(&self) {
        {
            let mut outbox = lock(&self.outbox);
            if outbox.draining {
                return;
            }
            outbox.draining = true;
        }
        let _guard = DrainGuard(&self.outbox);

        loop {
            let event = {
                let mut outbox = lock(&self.outbox);
                match outbox.pending.pop_front() {
                    Some(event) => event,
                    None => {
                        outbox.draining = false;
                        return;
                    }
                }
            };

            let observers: Vec<Observer> = lock(&self.observers)
                .entries
                .iter()
                .map(|(_, observer)| Arc::clone(observer))
                .collect();
            for observer in &observers {
                (observer.as_ref())(&event);
            }
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        lock(&self.session).status()
    }

    /// Copy of the history at this moment.
    #[must_use]
    pub fn history(&self) -> Vec<GuessRecord> {
        lock(&self.session).history().iter().cloned().collect()
    }

    /// Run `f` with read access to the session.
    pub fn with_session<R>(&self, f: impl FnOnce(&GameSession) -> R) -> R {
        f(&lock(&self.session))
    }

    /// O(1) copy of the current session.
    #[must_use]
    pub fn clone_session(&self) -> GameSession {
        lock(&self.session).clone()
    }
}

impl std::fmt::Debug for SharedSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSession")
            .field("session", &*lock(&self.session))
            .field("observers", &lock(&self.observers).entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn shared(secret: &str, max_attempts: usize) -> SharedSession {
        SharedSession::new(
            GameSession::with_secret(GameConfig::new(4, 6, max_attempts), secret.parse().unwrap())
                .unwrap(),
        )
    }

    #[test]
    fn test_events_on_win() {
        let session = shared("RGBY", 10);
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        session.subscribe(move |e| sink.lock().unwrap().push(e.clone()));

        session.submit_guess("OOOO".parse().unwrap()).unwrap();
        session.submit_guess("RGBY".parse().unwrap()).unwrap();

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], SessionEvent::GuessScored { attempt: 1, .. }));
        assert!(matches!(events[1], SessionEvent::GuessScored { attempt: 2, .. }));
        assert_eq!(
            events[2],
            SessionEvent::Finished { status: GameStatus::Won, attempts: 2 }
        );
    }

    #[test]
    fn test_no_events_on_error() {
        let session = shared("RGBY", 10);
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        session.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(session.submit_guess("RGB".parse().unwrap()).is_err());
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unsubscribe() {
        let session = shared("RGBY", 10);
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let id = session.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        session.submit_guess("OOOO".parse().unwrap()).unwrap();
        assert!(session.unsubscribe(id));
        assert!(!session.unsubscribe(id));
        session.submit_guess("PPPP".parse().unwrap()).unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_observer_can_submit() {
        let session = shared("RGBY", 3);
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let inner = session.clone();
        session.subscribe(move |e| {
            if let SessionEvent::GuessScored { attempt: 1, .. } = e {
                inner.submit_guess("RGBY".parse().unwrap()).unwrap();
            }
            sink.lock().unwrap().push(e.clone());
        });

        session.submit_guess("OOOO".parse().unwrap()).unwrap();

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], SessionEvent::GuessScored { attempt: 1, .. }));
        assert!(matches!(events[1], SessionEvent::GuessScored { attempt: 2, .. }));
        assert_eq!(
            events[2],
            SessionEvent::Finished { status: GameStatus::Won, attempts: 2 }
        );
    }

    #[test]
    fn test_observer_can_read_session() {
        let session = shared("RGBY", 10);
        let reader = session.clone();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_in = Arc::clone(&seen);
        session.subscribe(move |_| {
            // The session lock is released before observers run.
            seen_in.store(reader.history().len(), Ordering::SeqCst);
        });

        session.submit_guess("OOOO".parse().unwrap()).unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }
}
