//! Codes: ordered sequences of pegs.
//!
//! The same type represents both the secret and a guess. Duplicate colors are
//! allowed.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{GameError, Result};
use super::peg::{Palette, Peg};

/// Inline capacity before a code spills to the heap.
pub(crate) const INLINE_PEGS: usize = 8;

/// An ordered sequence of pegs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Code(SmallVec<[Peg; INLINE_PEGS]>);

impl Code {
    /// Create a code from pegs.
    #[must_use]
    pub fn new(pegs: impl IntoIterator<Item = Peg>) -> Self {
        Self(pegs.into_iter().collect())
    }

    /// Number of pegs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the code has no pegs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The pegs, in order.
    #[must_use]
    pub fn pegs(&self) -> &[Peg] {
        &self.0
    }

    /// Peg at `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<Peg> {
        self.0.get(position).copied()
    }

    /// Iterate over the pegs.
    pub fn iter(&self) -> impl Iterator<Item = Peg> + '_ {
        self.0.iter().copied()
    }

    /// Per-color occurrence counts, indexed by [`Peg::index`].
    #[must_use]
    pub fn color_counts(&self) -> [usize; Peg::COUNT] {
        let mut counts = [0; Peg::COUNT];
        for peg in self.iter() {
            counts[peg.index()] += 1;
        }
        counts
    }

    /// Check that this code has `length` pegs, all drawn from `palette`.
    ///
    /// # Errors
    ///
    /// `LengthMismatch` on a wrong length, `InvalidPeg` for the first peg
    /// outside the palette.
    pub fn check(&self, length: usize, palette: Palette) -> Result<()> {
        if self.len() != length {
            return Err(GameError::LengthMismatch {
                expected: length,
                actual: self.len(),
            });
        }
        if let Some(peg) = self.iter().find(|&p| !palette.contains(p)) {
            return Err(GameError::InvalidPeg {
                peg,
                palette_size: palette.size(),
            });
        }
        Ok(())
    }
}

impl FromIterator<Peg> for Code {
    fn from_iter<I: IntoIterator<Item = Peg>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<Peg>> for Code {
    fn from(pegs: Vec<Peg>) -> Self {
        Self(SmallVec::from_vec(pegs))
    }
}

impl From<&[Peg]> for Code {
    fn from(pegs: &[Peg]) -> Self {
        Self(SmallVec::from_slice(pegs))
    }
}

/// Error returned when a string is not a sequence of peg letters.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Unknown peg letter {:?} at position {}", letter, position)]
pub struct ParseCodeError {
    /// The offending character.
    pub letter: char,
    /// Character offset within the input.
    pub position: usize,
}

impl std::error::Error for ParseCodeError {}

impl FromStr for Code {
    type Err = ParseCodeError;

    /// Parse letters such as `"RGBY"` or `"r-g-b-y"`.
    ///
    /// Whitespace, commas and dashes are ignored.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .filter(|(_, c)| !c.is_whitespace() && *c != ',' && *c != '-')
            .map(|(position, letter)| {
                Peg::from_letter(letter).ok_or(ParseCodeError { letter, position })
            })
            .collect()
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for peg in self.iter() {
            write!(f, "{}", peg)?;
        }
        Ok(())
    }
}
