//! I/O abstractions for input providers and output targets.
//!
//! This module provides:
//! - `InputProvider`: Trait for line-oriented input sources
//! - `OutputTarget`: Trait for user-facing output sinks
//! - Standard implementations for files, stdin and stdout
//! - In-memory implementations for testing

mod input;
mod memory;
mod output;
mod std_io;

pub use input::InputProvider;
pub use memory::{InMemorySink, InMemorySource};
pub use output::OutputTarget;
pub use std_io::{FileInput, StdinInput, StdoutOutput};

/// Resolve an input token into a provider.
///
/// Convention: "-" (or "stdin") for stdin, anything else is a file path.
pub fn input_from_token(token: &str) -> Box<dyn InputProvider> {
    if token == "-" || token.eq_ignore_ascii_case("stdin") {
        Box::new(StdinInput::new())
    } else {
        Box::new(FileInput::new(token.into()))
    }
}
