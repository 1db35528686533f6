//! Tests for error rendering and classification.

use std::io;

use crate::error::{ConfigError, ReadError, SingleIoError, Stage};

#[test]
fn single_io_error_display_includes_stage_and_target() {
    let err = SingleIoError::new(
        Stage::Extract,
        "-",
        io::Error::new(io::ErrorKind::Other, "boom"),
    );
    assert_eq!(err.to_string(), "[Extract] -: boom");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn read_error_classifies_stream_closed() {
    let closed = ReadError::StreamClosed {
        target: "-".into(),
    };
    assert!(closed.is_stream_closed());

    let io_err: ReadError = SingleIoError::new(
        Stage::Write,
        "out",
        io::Error::new(io::ErrorKind::BrokenPipe, "pipe"),
    )
    .into();
    assert!(!io_err.is_stream_closed());
    assert_eq!(io_err.to_string(), "[Write] out: pipe");
}

#[test]
fn invalid_bounds_message() {
    let err = ReadError::InvalidBounds {
        lower: "5".into(),
        upper: "1".into(),
    };
    assert_eq!(
        err.to_string(),
        "invalid bounds: lower bound 5 is greater than upper bound 1"
    );
}

#[test]
fn config_error_messages() {
    assert_eq!(
        ConfigError::UnknownFormat("game.ini".into()).to_string(),
        "cannot infer config format from 'game.ini'"
    );
    assert_eq!(
        ConfigError::Invalid("tries".into()).to_string(),
        "invalid config: tries"
    );
}

#[cfg(feature = "miette")]
#[test]
fn miette_diagnostic_for_closed_stream_is_advice() {
    use crate::error::ReadDiagnostic;

    let diag = ReadDiagnostic::from(ReadError::StreamClosed {
        target: "-".into(),
    });
    assert_eq!(diag.severity, miette::Severity::Advice);
    assert!(diag.help.is_some());
}
