//! Bounded, retrying integer reads.

use std::fmt::{self, Display};
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{ReadError, Stage};
use crate::io::{InputProvider, OutputTarget};
use crate::request::ReadRequest;
use crate::session::InputSession;

/// Result of a read: the accepted value, or why none will ever come.
pub type ReadResult<T> = Result<T, ReadError>;

/// A reader over type-erased streams, as opened from providers.
pub type DynReader = BoundedIntegerReader<Box<dyn BufRead>, Box<dyn Write>>;

mod sealed {
    pub trait Sealed {}
}

/// Integer types a [`BoundedIntegerReader`] can produce.
pub trait BoundedInt: FromStr + PartialOrd + Display + Copy + sealed::Sealed {}

macro_rules! bounded_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}
            impl BoundedInt for $t {}
        )*
    };
}

bounded_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Reads integers within inclusive bounds from an [`InputSession`], writing
/// prompts and invalid-input messages to `W`.
///
/// Malformed tokens and out-of-range values are absorbed: the rest of the
/// offending line is discarded, a message is written and the read starts
/// over. Only the end of the input (`ReadError::StreamClosed`) or a genuine
/// I/O failure ends a read without a value.
#[derive(Debug)]
pub struct BoundedIntegerReader<R, W> {
    session: InputSession<R>,
    output: W,
    output_id: String,
}

impl<R: BufRead, W: Write> BoundedIntegerReader<R, W> {
    pub fn new(session: InputSession<R>, output: W) -> Self {
        Self {
            session,
            output,
            output_id: "-".into(),
        }
    }

    /// Set the identifier used for the output sink in errors.
    pub fn with_output_id(mut self, id: impl Into<String>) -> Self {
        self.output_id = id.into();
        self
    }

    pub fn session(&self) -> &InputSession<R> {
        &self.session
    }

    pub fn into_parts(self) -> (InputSession<R>, W) {
        (self.session, self.output)
    }

    /// Read one integer in `lower..=upper`.
    pub fn read_bounded_int<T: BoundedInt>(&mut self, lower: T, upper: T) -> ReadResult<T> {
        let request = ReadRequest::new(lower, upper)?;
        self.read_request(request)
    }

    /// Write `prompt` on its own line, then read one integer in `lower..=upper`.
    pub fn prompt_bounded_int<T: BoundedInt>(
        &mut self,
        prompt: &str,
        lower: T,
        upper: T,
    ) -> ReadResult<T> {
        let request = ReadRequest::new(lower, upper)?;
        self.say(format_args!("{prompt}"))?;
        self.read_request(request)
    }

    pub fn read_request<T: BoundedInt>(&mut self, request: ReadRequest<T>) -> ReadResult<T> {
        loop {
            let extracted = self
                .session
                .extract::<T>()
                .map_err(|e| ReadError::io(Stage::Extract, self.session.id(), e))?;

            match extracted {
                Some(value) if request.contains(value) => {
                    // Leftovers on the line must not leak into the next read.
                    self.discard_line()?;
                    return Ok(value);
                }
                Some(value) => {
                    log::debug!(
                        "value {value} outside {}..={} on '{}'",
                        request.lower(),
                        request.upper(),
                        self.session.id()
                    );
                }
                None if self.session.is_closed() => {
                    return Err(ReadError::StreamClosed {
                        target: self.session.id().to_owned(),
                    });
                }
                None => {}
            }

            self.session.clear();
            self.discard_line()?;
            self.say(format_args!("{}", request.invalid_input_message()))?;
        }
    }

    /// Read the next non-whitespace character and drop the rest of its line.
    pub fn read_char(&mut self) -> ReadResult<char> {
        loop {
            let extracted = self
                .session
                .extract_char()
                .map_err(|e| ReadError::io(Stage::Extract, self.session.id(), e))?;

            match extracted {
                Some(c) => {
                    self.discard_line()?;
                    return Ok(c);
                }
                None if self.session.is_closed() => {
                    return Err(ReadError::StreamClosed {
                        target: self.session.id().to_owned(),
                    });
                }
                None => {
                    self.session.clear();
                    self.discard_line()?;
                }
            }
        }
    }

    /// Write one line to the output sink and flush it.
    pub fn say(&mut self, args: fmt::Arguments<'_>) -> ReadResult<()> {
        writeln!(self.output, "{args}")
            .and_then(|()| self.output.flush())
            .map_err(|e| ReadError::io(Stage::Write, &self.output_id, e))
    }

    fn discard_line(&mut self) -> ReadResult<()> {
        let discarded = self
            .session
            .ignore_line()
            .map_err(|e| ReadError::io(Stage::Discard, self.session.id(), e))?;
        log::trace!("discarded {discarded} byte(s) from '{}'", self.session.id());
        Ok(())
    }
}

impl DynReader {
    /// Open `input` and `output` and bind a reader to them.
    pub fn from_providers(input: &dyn InputProvider, output: &dyn OutputTarget) -> ReadResult<Self> {
        let reader = input
            .open()
            .map_err(|e| ReadError::io(Stage::Open, input.id(), e))?;
        let sink = output
            .open()
            .map_err(|e| ReadError::io(Stage::Open, output.id(), e))?;
        Ok(Self::new(InputSession::new(input.id(), reader), sink).with_output_id(output.id()))
    }
}
