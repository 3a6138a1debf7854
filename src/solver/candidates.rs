//! Candidate secrets consistent with a guess history.

use crate::core::{Code, GameError, Palette, Result};
use crate::scoring::{is_consistent, MatchResult};
use crate::session::GuessRecord;

/// Largest search space the solver will enumerate.
pub const MAX_CANDIDATES: u128 = 1 << 20;

/// Every code that could still be the secret.
///
/// Codes are kept in lexicographic palette order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateSet {
    length: usize,
    palette: Palette,
    codes: Vec<Code>,
}

impl CandidateSet {
    /// All `palette_size ^ length` codes.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` for zero or oversized dimensions,
    /// `SearchSpaceTooLarge` past [`MAX_CANDIDATES`].
    pub fn all(length: usize, palette_size: usize) -> Result<Self> {
        let palette = crate::generator::check_dimensions(length, palette_size)?;
        let size = search_space(length, palette_size)?;

        let k = palette_size;
        let codes = (0..size)
            .map(|mut index| {
                let mut digits = vec![0usize; length];
                for digit in digits.iter_mut().rev() {
                    *digit = index % k;
                    index /= k;
                }
                digits
                    .into_iter()
                    .map(|d| palette.pegs()[d])
                    .collect::<Code>()
            })
            .collect();

        Ok(Self {
            length,
            palette,
            codes,
        })
    }

    /// Codes consistent with every record in `history`.
    pub fn from_history<'a>(
        length: usize,
        palette_size: usize,
        history: impl IntoIterator<Item = &'a GuessRecord>,
    ) -> Result<Self> {
        let mut set = Self::all(length, palette_size)?;
        for record in history {
            set.retain_consistent(record.guess(), record.result());
        }
        Ok(set)
    }

    /// Drop codes that would not have scored `result` against `guess`.
    pub fn retain_consistent(&mut self, guess: &Code, result: &MatchResult) {
        self.codes.retain(|candidate| is_consistent(candidate, guess, result));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.codes.binary_search(code).is_ok()
    }

    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Code> {
        self.codes.iter()
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn palette(&self) -> Palette {
        self.palette
    }
}

fn search_space(length: usize, palette_size: usize) -> Result<usize> {
    // One color still means one code of `length` pegs; bound the pegs too.
    if length as u128 > MAX_CANDIDATES {
        return Err(GameError::SearchSpaceTooLarge { size: length as u128 });
    }
    let exponent = u32::try_from(length).unwrap_or(u32::MAX);
    match (palette_size as u128).checked_pow(exponent) {
        Some(size) if size <= MAX_CANDIDATES => Ok(size as usize),
        Some(size) => Err(GameError::SearchSpaceTooLarge { size }),
        None => Err(GameError::SearchSpaceTooLarge { size: u128::MAX }),
    }
}
