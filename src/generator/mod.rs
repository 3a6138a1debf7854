//! Secret code generation.
//!
//! Generators are trait-based so sessions can be driven by a seeded RNG in
//! play and by a fixed sequence in tests:
//! - `RandomGenerator`: independent, uniform draws from the palette
//! - `SequenceGenerator`: replays a fixed peg sequence

mod random;
mod sequence;

pub use random::RandomGenerator;
pub use sequence::SequenceGenerator;

use crate::core::{Code, GameError, Palette, Result};

/// Source of secret codes.
pub trait CodeGenerator {
    /// Produce a code of `length` pegs drawn from the first `palette_size` colors.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if either dimension is zero or the palette is
    /// larger than the available colors.
    fn generate(&mut self, length: usize, palette_size: usize) -> Result<Code>;
}

impl<G: CodeGenerator + ?Sized> CodeGenerator for &mut G {
    fn generate(&mut self, length: usize, palette_size: usize) -> Result<Code> {
        (**self).generate(length, palette_size)
    }
}

impl<G: CodeGenerator + ?Sized> CodeGenerator for Box<G> {
    fn generate(&mut self, length: usize, palette_size: usize) -> Result<Code> {
        (**self).generate(length, palette_size)
    }
}

/// Shared argument check for generators.
pub(crate) fn check_dimensions(length: usize, palette_size: usize) -> Result<Palette> {
    if length == 0 {
        return Err(GameError::invalid_configuration("code length must be positive"));
    }
    Palette::new(palette_size)
}
