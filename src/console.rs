//! Process boundary: binds readers to stdin/stdout and turns the end of the
//! input into a clean exit.
//!
//! Library code returns `ReadError::StreamClosed`; only the functions here
//! terminate the process.

use std::process;

use crate::error::ReadError;
use crate::io::{StdinInput, StdoutOutput};
use crate::reader::{BoundedInt, DynReader, ReadResult};

/// A reader over stdin that writes to stdout.
pub fn stdio() -> ReadResult<DynReader> {
    DynReader::from_providers(&StdinInput::new(), &StdoutOutput::new())
}

/// Unwrap a read result at the process boundary.
///
/// The end of the input exits with status 0, since nothing more can be done
/// without input. Any other error is reported on stderr and exits with 1.
pub fn exit_on_closed<T>(result: ReadResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(ReadError::StreamClosed { target }) => {
            log::info!("input '{target}' closed, exiting");
            process::exit(0);
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Read one integer in `lower..=upper` from stdin.
///
/// Never returns without a value: the process exits with status 0 when stdin
/// is closed.
pub fn read_bounded_int<T: BoundedInt>(lower: T, upper: T) -> T {
    let mut reader = exit_on_closed(stdio());
    exit_on_closed(reader.read_bounded_int(lower, upper))
}
