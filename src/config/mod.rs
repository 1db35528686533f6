//! Configuration for the hi-lo game.
//!
//! This module provides:
//! - `GameConfig`: Number of tries and the range secrets are drawn from
//! - `ConfigFormat`: File formats a config can be loaded from
//! - `load_config`: Read, parse and validate a config file

mod format;
mod game;

pub use format::ConfigFormat;
pub use game::{DEFAULT_LOWER, DEFAULT_TRIES, DEFAULT_UPPER, GameConfig, MAX_TRIES};

use std::path::Path;

use crate::error::ConfigError;

/// Load a game config, inferring the format from the file extension.
pub fn load_config(path: impl AsRef<Path>) -> Result<GameConfig, ConfigError> {
    let path = path.as_ref();
    let display = path.to_string_lossy().into_owned();
    let format =
        ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnknownFormat(display.clone()))?;

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: display.clone(),
        source,
    })?;

    let config: GameConfig = format.deserialize(&content)?;
    config.validate()?;
    log::debug!("loaded {format} config from '{display}': {config:?}");
    Ok(config)
}
