//! Match outcomes and marker layout.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::code::INLINE_PEGS;

/// Outcome for one scoring slot.
///
/// Ordered so that sorting puts exact matches first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Match {
    /// Right color, right position.
    Exact,
    /// Color present among the leftover secret pegs, wrong position.
    Inexact,
    /// Nothing left to match.
    NoMatch,
}

/// How one marker dot should be drawn.
///
/// Exact matches are filled; every match (exact or not) is outlined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Marker {
    pub filled: bool,
    pub outlined: bool,
}

/// Aggregate score of a guess, one `Match` per scoring slot.
///
/// Slots are not tied to guess positions: all `Exact` come first, then
/// `Inexact`, then `NoMatch`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawMatchResult")]
pub struct MatchResult {
    slots: SmallVec<[Match; INLINE_PEGS]>,
}

/// Wire shape of [`MatchResult`]; slots may arrive in any order.
#[derive(Deserialize)]
struct RawMatchResult {
    slots: SmallVec<[Match; INLINE_PEGS]>,
}

impl From<RawMatchResult> for MatchResult {
    fn from(raw: RawMatchResult) -> Self {
        Self::from_matches(raw.slots)
    }
}

impl MatchResult {
    /// Build a result from aggregate counts over `len` slots.
    ///
    /// Returns `None` if `exact + inexact > len`.
    #[must_use]
    pub fn from_counts(exact: usize, inexact: usize, len: usize) -> Option<Self> {
        let found = exact.checked_add(inexact)?;
        if found > len {
            return None;
        }
        Some(Self::counted(exact, inexact, len))
    }

    /// Caller guarantees `exact + inexact <= len`.
    pub(crate) fn counted(exact: usize, inexact: usize, len: usize) -> Self {
        let slots = std::iter::repeat(Match::Exact)
            .take(exact)
            .chain(std::iter::repeat(Match::Inexact).take(inexact))
            .chain(std::iter::repeat(Match::NoMatch).take(len - exact - inexact))
            .collect();
        Self { slots }
    }

    /// Build a result from per-slot tags in any order.
    #[must_use]
    pub fn from_matches(matches: impl IntoIterator<Item = Match>) -> Self {
        let mut slots: SmallVec<[Match; INLINE_PEGS]> = matches.into_iter().collect();
        slots.sort_unstable();
        Self { slots }
    }

    /// Number of slots (equals the code length).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Tags in slot order.
    #[must_use]
    pub fn slots(&self) -> &[Match] {
        &self.slots
    }

    #[must_use]
    pub fn exact_count(&self) -> usize {
        self.count(Match::Exact)
    }

    #[must_use]
    pub fn inexact_count(&self) -> usize {
        self.count(Match::Inexact)
    }

    #[must_use]
    pub fn no_match_count(&self) -> usize {
        self.count(Match::NoMatch)
    }

    /// Exact plus inexact matches.
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.len() - self.no_match_count()
    }

    /// `(exact_count, found_count)`, the pair a player actually sees.
    #[must_use]
    pub fn counts(&self) -> (usize, usize) {
        (self.exact_count(), self.found_count())
    }

    /// Every slot is an exact match.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.is_empty() && self.exact_count() == self.len()
    }

    /// Marker style for `slot`.
    #[must_use]
    pub fn marker(&self, slot: usize) -> Marker {
        Marker {
            filled: slot < self.exact_count(),
            outlined: slot < self.found_count(),
        }
    }

    /// Marker styles for every slot.
    pub fn markers(&self) -> impl Iterator<Item = Marker> + '_ {
        (0..self.len()).map(move |slot| self.marker(slot))
    }

    fn count(&self, kind: Match) -> usize {
        self.slots.iter().filter(|&&m| m == kind).count()
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} exact, {} found", self.exact_count(), self.found_count())
    }
}
