//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{ConfigError, ReadError};

/// A diagnostic wrapper for read and config errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct ReadDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

impl From<ReadError> for ReadDiagnostic {
    fn from(e: ReadError) -> Self {
        match e {
            ReadError::StreamClosed { target } => ReadDiagnostic {
                message: format!("input '{target}' closed"),
                source: None,
                help: Some("Provide more input lines or pipe a longer script".into()),
                severity: Severity::Advice,
            },
            ReadError::InvalidBounds { lower, upper } => ReadDiagnostic {
                message: format!("empty range {lower}..={upper}"),
                source: None,
                help: Some("The lower bound must not exceed the upper bound".into()),
                severity: Severity::Error,
            },
            ReadError::Config(e) => ReadDiagnostic::from(e),
            ReadError::Io(io) => ReadDiagnostic {
                message: format!("[{}] on '{}'", io.stage, io.target),
                source: Some(Box::new(io.error)),
                help: Some("Check that the input and output streams are still open".into()),
                severity: Severity::Error,
            },
        }
    }
}

impl From<ConfigError> for ReadDiagnostic {
    fn from(e: ConfigError) -> Self {
        let help = match &e {
            ConfigError::UnknownFormat(_) => "Use a .json, .yaml, .yml or .toml extension",
            ConfigError::FormatDisabled(_) => "Enable the matching cargo feature",
            _ => "Check the config file contents",
        };
        ReadDiagnostic {
            message: e.to_string(),
            source: Some(Box::new(e)),
            help: Some(help.into()),
            severity: Severity::Error,
        }
    }
}

impl From<ReadError> for miette::Report {
    fn from(e: ReadError) -> Self {
        miette::Report::new(ReadDiagnostic::from(e))
    }
}
