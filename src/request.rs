//! Inclusive bounds for a single read.

use std::fmt::Display;

use crate::error::ReadError;

/// An inclusive range a read value must fall into.
///
/// Invariant: `lower <= upper`. The constructor is the only way to build one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadRequest<T> {
    lower: T,
    upper: T,
}

impl<T: PartialOrd + Display + Copy> ReadRequest<T> {
    pub fn new(lower: T, upper: T) -> Result<Self, ReadError> {
        if lower > upper {
            return Err(ReadError::InvalidBounds {
                lower: lower.to_string(),
                upper: upper.to_string(),
            });
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> T {
        self.lower
    }

    pub fn upper(&self) -> T {
        self.upper
    }

    pub fn contains(&self, value: T) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// The message shown after a rejected entry.
    pub fn invalid_input_message(&self) -> String {
        format!(
            "Oops, that input is invalid. Please try again. It should be a number between {} and {}",
            self.lower, self.upper
        )
    }
}
