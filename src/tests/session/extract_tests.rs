//! Tests for token extraction, fault state and line discarding.

use std::io::{self, BufRead, BufReader, Cursor, Read};

use crate::session::{InputSession, StreamState};

fn session(input: &str) -> InputSession<Cursor<Vec<u8>>> {
    InputSession::new("test", Cursor::new(input.as_bytes().to_vec()))
}

#[test]
fn extracts_signed_tokens_across_lines() {
    let mut s = session("  -5\n\t+7 \n\n42");
    assert_eq!(s.extract::<i32>().unwrap(), Some(-5));
    assert_eq!(s.extract::<i32>().unwrap(), Some(7));
    assert_eq!(s.extract::<i32>().unwrap(), Some(42));
    assert!(s.is_ready());

    assert_eq!(s.extract::<i32>().unwrap(), None);
    assert_eq!(s.state(), StreamState::Closed);
}

#[test]
fn empty_input_is_closed() {
    let mut s = session("");
    assert_eq!(s.extract::<i64>().unwrap(), None);
    assert!(s.is_closed());

    let mut s = session(" \n \r\n");
    assert_eq!(s.extract::<i64>().unwrap(), None);
    assert!(s.is_closed());
}

#[test]
fn non_numeric_token_sets_sticky_fault() {
    let mut s = session("abc 5\n");
    assert_eq!(s.extract::<i32>().unwrap(), None);
    assert_eq!(s.state(), StreamState::FormatFault);

    // Nothing is consumed while faulted.
    assert_eq!(s.extract::<i32>().unwrap(), None);
    assert_eq!(s.state(), StreamState::FormatFault);

    s.clear();
    assert!(s.is_ready());
    assert_eq!(s.extract::<i32>().unwrap(), Some(5));
}

#[test]
fn token_with_trailing_garbage_is_a_fault() {
    let mut s = session("5abc\n");
    assert_eq!(s.extract::<i32>().unwrap(), None);
    assert_eq!(s.state(), StreamState::FormatFault);
}

#[test]
fn overflow_is_a_fault() {
    let mut s = session("300\n");
    assert_eq!(s.extract::<u8>().unwrap(), None);
    assert_eq!(s.state(), StreamState::FormatFault);
}

#[test]
fn clear_does_not_reopen_closed_stream() {
    let mut s = session("");
    assert_eq!(s.extract::<i32>().unwrap(), None);
    s.clear();
    assert_eq!(s.state(), StreamState::Closed);
}

#[test]
fn delimiter_stays_in_stream() {
    let mut s = session("5 garbage\nnext\n");
    assert_eq!(s.extract::<i32>().unwrap(), Some(5));
    assert_eq!(s.ignore_line().unwrap(), " garbage\n".len());

    let mut s = session("5\n6\n");
    assert_eq!(s.extract::<i32>().unwrap(), Some(5));
    // Only the terminator of the first line goes; "6" survives.
    assert_eq!(s.ignore_line().unwrap(), 1);
    assert_eq!(s.extract::<i32>().unwrap(), Some(6));
}

#[test]
fn ignore_line_stops_at_end_of_stream() {
    let mut s = session("tail without newline");
    assert_eq!(s.ignore_line().unwrap(), "tail without newline".len());
    assert_eq!(s.ignore_line().unwrap(), 0);
}

#[test]
fn tokens_spanning_buffer_refills() {
    let data = format!("{}\n", "1".repeat(2) + &"0".repeat(7));
    let reader = BufReader::with_capacity(2, Cursor::new(data.into_bytes()));
    let mut s = InputSession::new("small", reader);
    assert_eq!(s.extract::<i64>().unwrap(), Some(110_000_000));
}

#[test]
fn extract_char_takes_one_character() {
    let mut s = session("  yes\n é\n");
    assert_eq!(s.extract_char().unwrap(), Some('y'));
    assert_eq!(s.extract_char().unwrap(), Some('e'));
    s.ignore_line().unwrap();
    assert_eq!(s.extract_char().unwrap(), Some('é'));
    s.ignore_line().unwrap();
    assert_eq!(s.extract_char().unwrap(), None);
    assert!(s.is_closed());
}

#[test]
fn extract_char_rejects_invalid_utf8() {
    let mut s = InputSession::new("bytes", Cursor::new(vec![0xC3, b'x', b'\n']));
    assert_eq!(s.extract_char().unwrap(), None);
    assert_eq!(s.state(), StreamState::FormatFault);
}

#[test]
fn truncated_sequence_leaves_newline_in_stream() {
    let mut s = InputSession::new("bytes", Cursor::new(b"\xC3\ny\n".to_vec()));
    assert_eq!(s.extract_char().unwrap(), None);
    assert_eq!(s.state(), StreamState::FormatFault);

    s.clear();
    assert_eq!(s.ignore_line().unwrap(), 1);
    assert_eq!(s.extract_char().unwrap(), Some('y'));
}

/// Fails once with `Interrupted`, then behaves like the wrapped data.
struct Flaky {
    inner: Cursor<Vec<u8>>,
    interrupted: bool,
}

impl Read for Flaky {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl BufRead for Flaky {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if !self.interrupted {
            self.interrupted = true;
            return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
        }
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt)
    }
}

#[test]
fn interrupted_reads_are_retried() {
    let reader = Flaky {
        inner: Cursor::new(b"9\n".to_vec()),
        interrupted: false,
    };
    let mut s = InputSession::new("flaky", reader);
    assert_eq!(s.extract::<i32>().unwrap(), Some(9));
}

struct Broken;

impl Read for Broken {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
    }
}

#[test]
fn read_errors_propagate() {
    let mut s = InputSession::new("broken", BufReader::new(Broken));
    let err = s.extract::<i32>().unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::Other);
}
