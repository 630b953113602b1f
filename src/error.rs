use std::num::ParseIntError;

use thiserror::Error;

/// Why a piece of puzzle input couldn't be turned into one of the shared types.
///
/// Individual days don't try to recover from any of these: the input is known
/// good, so a parse failure means the parser is wrong and the program panics
/// with this as the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unrecognized direction {0:?}")]
    Direction(String),

    #[error("invalid SNAFU digit {0:?}")]
    SnafuDigit(char),

    #[error("malformed {what}: {text:?}")]
    Malformed { what: &'static str, text: String },

    #[error("input ended while reading {0}")]
    UnexpectedEnd(&'static str),

    #[error("invalid integer: {0}")]
    Int(#[from] ParseIntError),
}

impl ParseError {
    pub fn malformed(what: &'static str, text: impl Into<String>) -> Self {
        ParseError::Malformed {
            what,
            text: text.into(),
        }
    }
}
