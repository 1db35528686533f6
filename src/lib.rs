//! # promptio
//!
//! Bounded, retrying integer input for interactive console programs.
//!
//! ## Overview
//!
//! promptio provides:
//! - **Bounded reads**: Ask for an integer in an inclusive range until one is given
//! - **Stream semantics**: Whitespace-delimited tokens, sticky format faults, line discarding
//! - **Injectable streams**: Any `BufRead` can back a session, so input can be scripted
//! - **Clean shutdown**: The end of the input surfaces as `ReadError::StreamClosed`;
//!   the `console` boundary turns it into exit status 0
//! - **Hi-lo game**: A number-guessing game built on the reader
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use promptio::console;
//!
//! fn main() {
//!     // Exits the process cleanly if stdin is closed.
//!     let n: i32 = console::read_bounded_int(0, 10);
//!     println!("got {n}");
//! }
//! ```
//!
//! Scripted input, e.g. in tests:
//!
//! ```rust
//! use std::io::Cursor;
//! use promptio::{BoundedIntegerReader, InputSession};
//!
//! let session = InputSession::new("script", Cursor::new("-5\n15\n7\n"));
//! let mut reader = BoundedIntegerReader::new(session, Vec::<u8>::new());
//!
//! assert_eq!(reader.read_bounded_int(0, 10).unwrap(), 7);
//! let (_, out) = reader.into_parts();
//! assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
//! ```
//!
//! ## Features
//!
//! - `json` - JSON game configs (enabled by default)
//! - `yaml` - YAML game configs
//! - `toml` - TOML game configs
//! - `sarge` - Argument types for `sarge` and the bundled binaries (enabled by default)
//! - `miette` - Pretty error reporting with miette

pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod io;
pub mod reader;
pub mod request;
pub mod session;

// Re-exports for convenience
pub use config::{ConfigFormat, GameConfig, load_config};
pub use error::{ConfigError, ReadError, SingleIoError, Stage};
pub use io::{
    FileInput, InMemorySink, InMemorySource, InputProvider, OutputTarget, StdinInput,
    StdoutOutput,
};
pub use reader::{BoundedInt, BoundedIntegerReader, DynReader, ReadResult};
pub use request::ReadRequest;
pub use session::{InputSession, StreamState};

/// Bind a reader to in-memory streams: the source's data as input, the sink
/// as output.
pub fn scripted(source: &InMemorySource, sink: &InMemorySink) -> ReadResult<DynReader> {
    DynReader::from_providers(source, sink)
}

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::ReadDiagnostic;

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
