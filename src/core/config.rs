//! Game configuration.
//!
//! A `GameConfig` fixes the three dimensions of a game (code length `N`,
//! palette size `K`, attempt limit `M`) plus an optional RNG seed. Configs
//! can be built in code or loaded from TOML:
//!
//! ```toml
//! code_length = 4
//! palette_size = 6
//! max_attempts = 10
//! seed = 7
//! ```

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::peg::Palette;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pegs per code (`N`).
    pub code_length: usize,

    /// Colors available (`K`), at most [`Peg::COUNT`](super::Peg::COUNT).
    pub palette_size: usize,

    /// Guesses allowed before the game is lost (`M`).
    pub max_attempts: usize,

    /// Seed for secret generation. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            code_length: 4,
            palette_size: 6,
            max_attempts: 10,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with explicit dimensions and no seed.
    pub fn new(code_length: usize, palette_size: usize, max_attempts: usize) -> Self {
        Self {
            code_length,
            palette_size,
            max_attempts,
            seed: None,
        }
    }

    /// Set the code length.
    #[must_use]
    pub fn with_code_length(mut self, length: usize) -> Self {
        self.code_length = length;
        self
    }

    /// Set the palette size.
    #[must_use]
    pub fn with_palette_size(mut self, size: usize) -> Self {
        self.palette_size = size;
        self
    }

    /// Set the attempt limit.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Set a fixed seed for deterministic secrets.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every dimension and return the palette.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if the code length or attempt limit is zero,
    /// or the palette size is out of range.
    pub fn validate(&self) -> Result<Palette> {
        if self.code_length == 0 {
            return Err(GameError::invalid_configuration("code length must be positive"));
        }
        if self.max_attempts == 0 {
            return Err(GameError::invalid_configuration("max attempts must be positive"));
        }
        Palette::new(self.palette_size)
    }

    /// Parse a configuration from TOML. Missing keys take their defaults.
    ///
    /// The result is validated.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)
            .map_err(|e| GameError::invalid_configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Render this configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| GameError::invalid_configuration(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.code_length, 4);
        assert_eq!(config.palette_size, 6);
        assert_eq!(config.max_attempts, 10);
        assert_eq!(config.seed, None);
        assert_eq!(config.validate().unwrap().size(), 6);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_code_length(5)
            .with_palette_size(8)
            .with_max_attempts(12)
            .with_seed(99);

        assert_eq!(config.code_length, 5);
        assert_eq!(config.palette_size, 8);
        assert_eq!(config.max_attempts, 12);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_validate_rejects_zero_dimensions() {
        assert!(GameConfig::new(0, 6, 10).validate().is_err());
        assert!(GameConfig::new(4, 0, 10).validate().is_err());
        assert!(GameConfig::new(4, 6, 0).validate().is_err());
        assert!(GameConfig::new(4, 9, 10).validate().is_err());
    }

    #[test]
    fn test_toml_partial() {
        let config = GameConfig::from_toml_str("palette_size = 8\nseed = 3\n").unwrap();
        assert_eq!(config.code_length, 4);
        assert_eq!(config.palette_size, 8);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = GameConfig::new(5, 7, 8).with_seed(11);
        let text = config.to_toml_string().unwrap();
        assert_eq!(GameConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_unseeded_roundtrip() {
        let config = GameConfig::default();

        let text = config.to_toml_string().unwrap();
        assert!(!text.contains("seed"));
        assert_eq!(GameConfig::from_toml_str(&text).unwrap(), config);

        // bincode has no field names, so the absent seed must still be encoded.
        let bytes = bincode::serialize(&config).unwrap();
        assert_eq!(bincode::deserialize::<GameConfig>(&bytes).unwrap(), config);
    }

    #[test]
    fn test_toml_errors_are_configuration_errors() {
        let err = GameConfig::from_toml_str("code_length = \"four\"").unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration { .. }));

        let err = GameConfig::from_toml_str("code_length = 0").unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration { .. }));
    }
}
