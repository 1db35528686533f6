//! Input provider trait definition.

use std::fmt::Debug;
use std::io::BufRead;

/// Trait for synchronous input providers.
///
/// Implementors provide a way to open a buffered, line-oriented stream from
/// sources such as stdin, files, or in-memory buffers.
pub trait InputProvider: Send + Sync + Debug {
    /// Returns a unique identifier for this input source.
    ///
    /// This is used for error messages and logging.
    /// Convention: "-" for stdin, file path for files.
    fn id(&self) -> &str;

    /// Open and return a buffered readable stream.
    ///
    /// The stream is not required to be `Send`: a locked stdin handle is a
    /// valid stream, and sessions are only ever driven from one thread.
    fn open(&self) -> std::io::Result<Box<dyn BufRead>>;
}
