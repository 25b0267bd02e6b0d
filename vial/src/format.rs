//! Failure message formatting
//!
//! Operands of a failed equality are rendered with their `Debug`
//! representation, which selects the right style per value kind:
//! - strings are quoted and escaped: `"foo"`
//! - characters use character quotes: `'a'`
//! - everything else uses its plain form: `7`, `1.53`, `true`

use std::fmt::{self, Debug, Display};

use crate::color;
use crate::config::ColorMode;

/// Body of a failure message, before location and color are applied
pub enum Failure<'a> {
    /// Two values that should have been equal
    NotEqual {
        want: &'a dyn Debug,
        got: &'a dyn Debug,
    },
    /// A boolean expression that evaluated to false
    NotTrue,
    /// An error that should not have been there
    UnexpectedError(&'a dyn Display),
}

impl Display for Failure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEqual { want, got } => write!(f, "want {:?}, got {:?}", want, got),
            Self::NotTrue => write!(f, "expression is not true"),
            Self::UnexpectedError(err) => write!(f, "unexpected error: {}", err),
        }
    }
}

/// Build the final message: `location: body`, decorated per `mode`
///
/// An empty location drops the prefix entirely.
pub fn compose(location: &str, failure: &Failure<'_>, mode: ColorMode) -> String {
    let text = if location.is_empty() {
        failure.to_string()
    } else {
        format!("{}: {}", location, failure)
    };

    color::paint(&text, mode)
}
