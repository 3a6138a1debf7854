//! Fixed-sequence secrets for tests and replays.

use crate::core::{Code, GameError, Peg, Result};

use super::{check_dimensions, CodeGenerator};

/// Yields pegs from a fixed sequence, cycling when it runs out.
#[derive(Clone, Debug)]
pub struct SequenceGenerator {
    pegs: Vec<Peg>,
    cursor: usize,
}

impl SequenceGenerator {
    /// Create a generator over `pegs`.
    pub fn new(pegs: impl IntoIterator<Item = Peg>) -> Self {
        Self {
            pegs: pegs.into_iter().collect(),
            cursor: 0,
        }
    }

    /// A generator that always returns `code`, when asked for its length.
    pub fn repeating(code: &Code) -> Self {
        Self::new(code.iter())
    }
}

impl CodeGenerator for SequenceGenerator {
    fn generate(&mut self, length: usize, palette_size: usize) -> Result<Code> {
        let palette = check_dimensions(length, palette_size)?;
        if self.pegs.is_empty() {
            return Err(GameError::invalid_configuration("peg sequence is empty"));
        }

        let start = self.cursor;
        let code: Code = (0..length)
            .map(|i| self.pegs[(start + i) % self.pegs.len()])
            .collect();

        if let Some(peg) = code.iter().find(|&p| !palette.contains(p)) {
            return Err(GameError::invalid_configuration(format!(
                "sequence peg {:?} is outside the {}-color palette",
                peg, palette_size
            )));
        }

        self.cursor = (start + length) % self.pegs.len();
        Ok(code)
    }
}
