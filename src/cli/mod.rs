//! CLI integration helpers for promptio.
//!
//! This module provides argument types for the bundled binaries and for
//! applications that want the same conventions:
//! - `BoundsArg`: an inclusive range written `LO..HI`, `LO..=HI` or `LO,HI`
//! - `InputArg`: an input token, "-" for stdin or a file path
//!
//! With the `sarge` feature both implement `sarge::ArgumentType`.
//!
//! # Example with sarge
//!
//! ```rust,ignore
//! use promptio::cli::BoundsArg;
//! use sarge::prelude::*;
//!
//! let mut reader = ArgumentReader::new();
//! let bounds_ref = reader.add::<BoundsArg>(tag::both('b', "bounds"));
//! let args = reader.parse()?;
//! ```

use thiserror::Error;

use crate::io::{InputProvider, input_from_token};

#[cfg(feature = "sarge")]
mod sarge;

/// Error returned for a malformed `--bounds` value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundsParseError {
    #[error("expected LO..HI, LO..=HI or LO,HI, got '{0}'")]
    Syntax(String),
    #[error("'{0}' is not an integer")]
    NotAnInteger(String),
    #[error("lower bound {lower} is greater than upper bound {upper}")]
    Empty { lower: i64, upper: i64 },
}

/// Inclusive integer bounds given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsArg {
    pub lower: i64,
    pub upper: i64,
}

impl BoundsArg {
    pub fn new(lower: i64, upper: i64) -> Result<Self, BoundsParseError> {
        if lower > upper {
            return Err(BoundsParseError::Empty { lower, upper });
        }
        Ok(Self { lower, upper })
    }
}

impl std::str::FromStr for BoundsArg {
    type Err = BoundsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_bounds(s)
    }
}

/// Parse `LO..HI`, `LO..=HI` or `LO,HI` (both ends inclusive).
pub fn parse_bounds(s: &str) -> Result<BoundsArg, BoundsParseError> {
    let s = s.trim();
    let (lo, hi) = s
        .split_once("..=")
        .or_else(|| s.split_once(".."))
        .or_else(|| s.split_once(','))
        .ok_or_else(|| BoundsParseError::Syntax(s.to_string()))?;

    let parse = |part: &str| {
        let part = part.trim();
        part.parse::<i64>()
            .map_err(|_| BoundsParseError::NotAnInteger(part.to_string()))
    };

    BoundsArg::new(parse(lo)?, parse(hi)?)
}

/// Where interactive input comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputArg(String);

impl Default for InputArg {
    fn default() -> Self {
        Self::stdin()
    }
}

impl InputArg {
    pub fn stdin() -> Self {
        Self("-".into())
    }

    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        if token == "-" || token.eq_ignore_ascii_case("stdin") {
            Self::stdin()
        } else {
            Self(token)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if reading from stdin.
    pub fn is_stdin(&self) -> bool {
        self.0 == "-"
    }

    pub fn provider(&self) -> Box<dyn InputProvider> {
        input_from_token(&self.0)
    }
}
