//! Peg colors and palettes.
//!
//! Colors are a closed enum rather than free-form values so that generation,
//! equality and counting stay exact. A game uses the first `K` colors of
//! [`Peg::ALL`] as its palette.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// A single colored game piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Peg {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
    Cyan,
    Magenta,
}

impl Peg {
    /// Number of distinct peg colors.
    pub const COUNT: usize = 8;

    /// All colors in palette order.
    pub const ALL: [Peg; Peg::COUNT] = [
        Peg::Red,
        Peg::Green,
        Peg::Blue,
        Peg::Yellow,
        Peg::Orange,
        Peg::Purple,
        Peg::Cyan,
        Peg::Magenta,
    ];

    /// Position of this color in palette order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a color by palette index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Single-letter abbreviation used when parsing and printing codes.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Peg::Red => 'R',
            Peg::Green => 'G',
            Peg::Blue => 'B',
            Peg::Yellow => 'Y',
            Peg::Orange => 'O',
            Peg::Purple => 'P',
            Peg::Cyan => 'C',
            Peg::Magenta => 'M',
        }
    }

    /// Parse a letter (case-insensitive).
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        Self::ALL.iter().copied().find(|p| p.letter() == upper)
    }
}

impl std::fmt::Display for Peg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The set of colors available in a game: the first `size` entries of [`Peg::ALL`].
///
/// Serialized as its size. Deserializing goes through [`Palette::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Palette {
    size: u8,
}

impl Palette {
    /// Create a palette of `size` colors.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `size` is zero or exceeds [`Peg::COUNT`].
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(GameError::invalid_configuration("palette size must be positive"));
        }
        if size > Peg::COUNT {
            return Err(GameError::invalid_configuration(format!(
                "palette size {} exceeds the {} available colors",
                size,
                Peg::COUNT
            )));
        }
        Ok(Self { size: size as u8 })
    }

    /// Palette with every color.
    #[must_use]
    pub const fn full() -> Self {
        Self { size: Peg::COUNT as u8 }
    }

    /// Number of colors.
    #[must_use]
    pub const fn size(self) -> usize {
        self.size as usize
    }

    /// Whether `peg` belongs to this palette.
    #[must_use]
    pub const fn contains(self, peg: Peg) -> bool {
        peg.index() < self.size as usize
    }

    /// The palette's colors, in order.
    #[must_use]
    pub fn pegs(self) -> &'static [Peg] {
        &Peg::ALL[..self.size()]
    }

    /// Color at `index`, if inside the palette.
    #[must_use]
    pub fn get(self, index: usize) -> Option<Peg> {
        self.pegs().get(index).copied()
    }
}

impl TryFrom<usize> for Palette {
    type Error = GameError;

    fn try_from(size: usize) -> Result<Self> {
        Self::new(size)
    }
}

impl From<Palette> for usize {
    fn from(palette: Palette) -> Self {
        palette.size()
    }
}
