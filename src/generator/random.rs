//! Uniform random secrets.

use crate::core::{Code, GameRng, GameRngState, Result};

use super::{check_dimensions, CodeGenerator};

/// Draws each peg independently and uniformly from the palette.
///
/// Repetition is allowed, as in standard Mastermind. The same seed always
/// yields the same sequence of codes.
#[derive(Clone, Debug)]
pub struct RandomGenerator {
    rng: GameRng,
}

impl RandomGenerator {
    /// Create a generator with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }

    /// Create a generator seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self { rng: GameRng::from_entropy() }
    }

    /// Wrap an existing RNG.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Resume a generator from a checkpoint.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self { rng: GameRng::from_state(state) }
    }

    /// Checkpoint the underlying RNG.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl CodeGenerator for RandomGenerator {
    fn generate(&mut self, length: usize, palette_size: usize) -> Result<Code> {
        let palette = check_dimensions(length, palette_size)?;
        let pegs = palette.pegs();
        Ok((0..length)
            .map(|_| pegs[self.rng.gen_index(pegs.len())])
            .collect())
    }
}
