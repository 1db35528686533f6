//! Hi-lo game parameters.

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_TRIES: u32 = 7;
pub const DEFAULT_LOWER: i32 = 0;
pub const DEFAULT_UPPER: i32 = 10;
/// Upper limit for `tries`, both in files and when changed interactively.
pub const MAX_TRIES: u32 = 100;

/// Parameters of a hi-lo game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Guesses allowed per round
    pub tries: u32,
    /// Smallest possible secret
    pub lower: i32,
    /// Largest possible secret
    pub upper: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tries: DEFAULT_TRIES,
            lower: DEFAULT_LOWER,
            upper: DEFAULT_UPPER,
        }
    }
}

impl GameConfig {
    pub fn new(tries: u32, lower: i32, upper: i32) -> Result<Self, ConfigError> {
        let config = Self {
            tries,
            lower,
            upper,
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the number of tries.
    pub fn with_tries(mut self, tries: u32) -> Self {
        self.tries = tries;
        self
    }

    /// Set the secret range.
    pub fn with_range(mut self, lower: i32, upper: i32) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_TRIES).contains(&self.tries) {
            return Err(ConfigError::Invalid(format!(
                "tries must be between 1 and {MAX_TRIES}, got {}",
                self.tries
            )));
        }
        if self.lower > self.upper {
            return Err(ConfigError::Invalid(format!(
                "lower bound {} is greater than upper bound {}",
                self.lower, self.upper
            )));
        }
        Ok(())
    }
}
