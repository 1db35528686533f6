//! Output target trait definition.

use std::fmt::Debug;
use std::io::Write;

/// Trait for synchronous output targets.
///
/// Implementors provide a way to open a writable stream to destinations such
/// as stdout/stderr or in-memory buffers. Prompts and invalid-input messages
/// go through this stream.
pub trait OutputTarget: Send + Sync + Debug {
    /// Returns a unique identifier for this output target.
    ///
    /// Convention: "-" for stdout, "stderr" for stderr.
    fn id(&self) -> &str;

    /// Open the target for writing.
    fn open(&self) -> std::io::Result<Box<dyn Write>>;
}
