//! Error types for set parsing, combination generation and formatting.
//!
//! Every failure is terminal: the tool is a one-shot batch transform, so the
//! first error aborts the whole run and no partial output is produced.
//!
//! ## Error Categories
//!
//! - **Parse errors**: [`Error::InvalidName`], [`Error::MissingSeparator`],
//!   [`Error::NoClosingQuote`] and [`Error::InvalidEscape`], all carrying the
//!   1-based line (and column where it makes sense)
//! - **Generation errors**: [`Error::NoValues`] and [`Error::TooManyCombinations`]
//! - **I/O errors**: reading sets or writing combinations failed
//!
//! ## Examples
//!
//! ```rust
//! use combination::{parse_set_line, Error};
//!
//! let err = parse_set_line(r#"card: "Heart"#).unwrap_err();
//! assert!(matches!(err, Error::NoClosingQuote { line: 1, col: 7 }));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// The set name is empty, or cannot be written back as a set line
    #[error("line {line}: set has an invalid name")]
    InvalidName { line: usize },

    /// The line has no `:` between name and values
    #[error("line {line}: expected `name: value ...`, found no ':'")]
    MissingSeparator { line: usize },

    /// A quoted value runs to the end of the line
    #[error("line {line}, column {col}: set value has no closing quote")]
    NoClosingQuote { line: usize, col: usize },

    /// A quoted value contains a backslash escape that cannot be decoded
    #[error("line {line}, column {col}: invalid escape sequence: {msg}")]
    InvalidEscape { line: usize, col: usize, msg: String },

    /// A set handed to the generator has no values
    #[error("set {name:?} has no values")]
    NoValues { name: String },

    /// The number of combinations does not fit in `usize`
    #[error("too many combinations: the product of all set sizes overflows")]
    TooManyCombinations,
}

impl Error {
    /// Creates an I/O error for reading or writing failures.
    pub fn io<T: fmt::Display>(msg: T) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates an invalid escape error.
    pub fn invalid_escape(line: usize, col: usize, msg: &str) -> Self {
        Error::InvalidEscape {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates a missing-values error for the set named `name`.
    pub fn no_values(name: &str) -> Self {
        Error::NoValues {
            name: name.to_string(),
        }
    }

    /// Returns the line this error points at, if it is a parse error.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::InvalidName { line }
            | Error::MissingSeparator { line }
            | Error::NoClosingQuote { line, .. }
            | Error::InvalidEscape { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Rewrites the line number of a parse error.
    ///
    /// [`parse_set_line`](crate::parse_set_line) reports everything at line 1;
    /// multi-line readers use this to point at the actual line.
    #[must_use]
    pub fn at_line(self, at: usize) -> Self {
        match self {
            Error::InvalidName { .. } => Error::InvalidName { line: at },
            Error::MissingSeparator { .. } => Error::MissingSeparator { line: at },
            Error::NoClosingQuote { col, .. } => Error::NoClosingQuote { line: at, col },
            Error::InvalidEscape { col, msg, .. } => Error::InvalidEscape { line: at, col, msg },
            other => other,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_line_rewrites_parse_errors() {
        let err = Error::NoClosingQuote { line: 1, col: 4 }.at_line(7);
        assert_eq!(err, Error::NoClosingQuote { line: 7, col: 4 });
        assert_eq!(err.line(), Some(7));
    }

    #[test]
    fn test_at_line_keeps_other_errors() {
        let err = Error::no_values("x").at_line(3);
        assert_eq!(err, Error::NoValues { name: "x".into() });
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::InvalidName { line: 2 }.to_string(),
            "line 2: set has an invalid name"
        );
        assert_eq!(Error::no_values("y").to_string(), "set \"y\" has no values");
    }
}
