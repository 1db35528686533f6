//! Config file formats.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
    Toml,
}

impl std::fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigFormat::Json => write!(f, "json"),
            ConfigFormat::Yaml => write!(f, "yaml"),
            ConfigFormat::Toml => write!(f, "toml"),
        }
    }
}

impl ConfigFormat {
    /// Parse a format from its name or a file extension.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Some(ConfigFormat::Json),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }

    /// Infer the format from a path's extension.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension().and_then(|e| e.to_str())?;
        Self::parse(ext)
    }

    /// Whether support for this format was compiled in.
    pub fn is_enabled(&self) -> bool {
        match self {
            ConfigFormat::Json => cfg!(feature = "json"),
            ConfigFormat::Yaml => cfg!(feature = "yaml"),
            ConfigFormat::Toml => cfg!(feature = "toml"),
        }
    }

    /// Deserialize `content` in this format.
    #[cfg_attr(
        not(any(feature = "json", feature = "yaml", feature = "toml")),
        allow(unused_variables)
    )]
    pub fn deserialize<T: DeserializeOwned>(&self, content: &str) -> Result<T, ConfigError> {
        match self {
            #[cfg(feature = "json")]
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| self.parse_error(e)),
            #[cfg(feature = "yaml")]
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| self.parse_error(e)),
            #[cfg(feature = "toml")]
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| self.parse_error(e)),
            #[allow(unreachable_patterns)]
            other => Err(ConfigError::FormatDisabled(other.to_string())),
        }
    }

    #[cfg(any(feature = "json", feature = "yaml", feature = "toml"))]
    fn parse_error(&self, e: impl std::error::Error + Send + Sync + 'static) -> ConfigError {
        ConfigError::Parse {
            format: self.to_string(),
            source: Box::new(e),
        }
    }
}
