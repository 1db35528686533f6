use std::convert::Infallible;

use sarge::ArgumentType;

use crate::cli::{BoundsArg, BoundsParseError, InputArg, parse_bounds};

impl ArgumentType for BoundsArg {
    type Error = BoundsParseError;

    const REPEATABLE: bool = false;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        let val = val?;
        Some(parse_bounds(val))
    }
}

impl ArgumentType for InputArg {
    type Error = Infallible;

    const REPEATABLE: bool = false;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        match val {
            None => Some(Ok(InputArg::stdin())),
            Some(v) => Some(Ok(InputArg::new(v.trim()))),
        }
    }

    fn default_value() -> Option<Self> {
        Some(InputArg::stdin())
    }
}
