//! Token extraction over a buffered text stream.
//!
//! `InputSession` wraps any `BufRead` and gives it stream-extraction
//! semantics: leading whitespace is skipped, one whitespace-delimited token
//! is consumed, and the delimiter is left in the stream. A failed extraction
//! puts the session into a sticky fault state that must be cleared before the
//! next extraction can make progress.

use std::io::{self, BufRead};
use std::str::FromStr;

/// Fault state of an [`InputSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamState {
    #[default]
    Ready,
    /// The last extraction did not yield the requested type.
    FormatFault,
    /// The stream has no more data. Never cleared.
    Closed,
}

/// Whitespace as the C locale classifies it (`\v` included).
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

fn utf8_width(lead: u8) -> usize {
    match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// A line-oriented input stream with an observable fault state.
#[derive(Debug)]
pub struct InputSession<R> {
    id: String,
    reader: R,
    state: StreamState,
}

impl<R: BufRead> InputSession<R> {
    /// Create a session over `reader`. `id` names the stream in errors and logs.
    pub fn new(id: impl Into<String>, reader: R) -> Self {
        Self {
            id: id.into(),
            reader,
            state: StreamState::Ready,
        }
    }

    /// Identifier of the underlying stream.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> StreamState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == StreamState::Ready
    }

    pub fn is_closed(&self) -> bool {
        self.state == StreamState::Closed
    }

    /// Reset a format fault so extraction can resume.
    ///
    /// A closed stream stays closed.
    pub fn clear(&mut self) {
        if self.state == StreamState::FormatFault {
            self.state = StreamState::Ready;
        }
    }

    /// Consume the session and return the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Extract one whitespace-delimited token and parse it as `T`.
    ///
    /// Returns `Ok(None)` when the extraction failed; `state()` then tells a
    /// format fault apart from the end of the stream. Nothing is consumed
    /// while the session is not `Ready`.
    pub fn extract<T: FromStr>(&mut self) -> io::Result<Option<T>> {
        if self.state != StreamState::Ready {
            return Ok(None);
        }

        let Some(token) = self.next_token()? else {
            self.state = StreamState::Closed;
            log::debug!("input '{}' closed", self.id);
            return Ok(None);
        };

        let parsed = std::str::from_utf8(&token)
            .ok()
            .and_then(|s| s.parse::<T>().ok());
        match parsed {
            Some(value) => {
                log::trace!(
                    "extracted token {:?} from '{}'",
                    String::from_utf8_lossy(&token),
                    self.id
                );
                Ok(Some(value))
            }
            None => {
                log::debug!(
                    "rejected token {:?} from '{}'",
                    String::from_utf8_lossy(&token),
                    self.id
                );
                self.state = StreamState::FormatFault;
                Ok(None)
            }
        }
    }

    /// Extract the next non-whitespace character.
    ///
    /// Only that character is consumed; the rest of the line stays in the
    /// stream.
    pub fn extract_char(&mut self) -> io::Result<Option<char>> {
        if self.state != StreamState::Ready {
            return Ok(None);
        }

        if !self.skip_space()? {
            self.state = StreamState::Closed;
            log::debug!("input '{}' closed", self.id);
            return Ok(None);
        }

        let mut bytes = Vec::with_capacity(4);
        let mut width = 1;
        while bytes.len() < width {
            let Some(b) = self.with_buf(|buf| buf.first().copied())? else {
                break;
            };
            if bytes.is_empty() {
                width = utf8_width(b);
            } else if !(0x80..=0xBF).contains(&b) {
                // Not a continuation byte; it belongs to whatever follows.
                break;
            }
            bytes.push(b);
            self.reader.consume(1);
        }

        match std::str::from_utf8(&bytes).ok().and_then(|s| s.chars().next()) {
            Some(c) => Ok(Some(c)),
            None => {
                self.state = StreamState::FormatFault;
                Ok(None)
            }
        }
    }

    /// Discard everything up to and including the next `\n`, or up to the end
    /// of the stream. Returns the number of bytes discarded.
    pub fn ignore_line(&mut self) -> io::Result<usize> {
        let mut discarded = 0;
        loop {
            let (take, done) = self.with_buf(|buf| {
                if buf.is_empty() {
                    return (0, true);
                }
                match buf.iter().position(|&b| b == b'\n') {
                    Some(pos) => (pos + 1, true),
                    None => (buf.len(), false),
                }
            })?;
            self.reader.consume(take);
            discarded += take;
            if done {
                return Ok(discarded);
            }
        }
    }

    fn next_token(&mut self) -> io::Result<Option<Vec<u8>>> {
        if !self.skip_space()? {
            return Ok(None);
        }

        let mut token = Vec::new();
        loop {
            let (take, done) = self.with_buf(|buf| {
                if buf.is_empty() {
                    return (0, true);
                }
                match buf.iter().position(|&b| is_space(b)) {
                    Some(pos) => {
                        token.extend_from_slice(&buf[..pos]);
                        (pos, true)
                    }
                    None => {
                        token.extend_from_slice(buf);
                        (buf.len(), false)
                    }
                }
            })?;
            // The delimiter itself stays in the stream.
            self.reader.consume(take);
            if done {
                return Ok(Some(token));
            }
        }
    }

    /// Skip whitespace. Returns `false` if the stream ended first.
    fn skip_space(&mut self) -> io::Result<bool> {
        loop {
            let (take, found) = self.with_buf(|buf| {
                if buf.is_empty() {
                    return (0, None);
                }
                match buf.iter().position(|&b| !is_space(b)) {
                    Some(pos) => (pos, Some(true)),
                    None => (buf.len(), Some(false)),
                }
            })?;
            self.reader.consume(take);
            match found {
                None => return Ok(false),
                Some(true) => return Ok(true),
                Some(false) => {}
            }
        }
    }

    fn with_buf<T>(&mut self, f: impl FnOnce(&[u8]) -> T) -> io::Result<T> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(f(buf)),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}
