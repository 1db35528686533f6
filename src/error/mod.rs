//! Error types for promptio input acquisition and configuration.
//!
//! This module provides:
//! - `Stage`: Indicates where an I/O failure occurred while reading or prompting
//! - `SingleIoError`: A single I/O error with context
//! - `ReadError`: Everything a bounded read can surface to its caller
//! - `ConfigError`: Failures while loading or validating a game configuration

use std::fmt;
use std::io;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Error while opening the input stream or output sink
    Open,
    Extract,
    Discard,
    /// Error while writing a prompt or message to the sink
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Open => write!(f, "Open"),
            Stage::Extract => write!(f, "Extract"),
            Stage::Discard => write!(f, "Discard"),
            Stage::Write => write!(f, "Write"),
        }
    }
}

#[derive(Debug, Error)]
#[error("[{stage}] {target}: {error}")]
pub struct SingleIoError {
    /// Stage where the error occurred
    pub stage: Stage,
    /// Identifier of the stream ("-" for stdin/stdout, a path for files, etc.)
    pub target: String,
    /// The underlying error
    #[source]
    pub error: io::Error,
}

impl SingleIoError {
    pub fn new(stage: Stage, target: impl Into<String>, error: io::Error) -> Self {
        Self {
            stage,
            target: target.into(),
            error,
        }
    }
}

/// Error returned by a bounded read.
///
/// Malformed and out-of-range entries never show up here: the reader recovers
/// from them itself. What remains is the end of the input, a request that can
/// never be satisfied, and genuine I/O failures.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The input has no more data. Callers at the process boundary treat this
    /// as a clean shutdown.
    #[error("input '{target}' was closed before an acceptable value was read")]
    StreamClosed { target: String },

    #[error("invalid bounds: lower bound {lower} is greater than upper bound {upper}")]
    InvalidBounds { lower: String, upper: String },

    #[error(transparent)]
    Io(#[from] SingleIoError),

    /// Game parameters that no round can be played with.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ReadError {
    /// Check if this error signals the end of the input stream.
    pub fn is_stream_closed(&self) -> bool {
        matches!(self, ReadError::StreamClosed { .. })
    }

    pub(crate) fn io(stage: Stage, target: &str, error: io::Error) -> Self {
        ReadError::Io(SingleIoError::new(stage, target, error))
    }
}

/// Error returned while loading a game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot infer config format from '{0}'")]
    UnknownFormat(String),

    #[error("config format '{0}' is not enabled; rebuild with the matching feature")]
    FormatDisabled(String),

    #[error("failed to parse {format} config: {source}")]
    Parse {
        format: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
