//! Error types for almanac parsing.

use remap_core::RuleError;
use std::error::Error;
use std::fmt;

/// Malformed almanac text. Line numbers are 1-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The input has no `seeds:` line before its first map.
    MissingSeeds,
    /// A token is not an unsigned 64-bit integer.
    InvalidNumber {
        /// Line of the token.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// A map line does not have exactly three numbers.
    WrongFieldCount {
        /// Line of the map entry.
        line: usize,
        /// Number of fields found.
        found: usize,
    },
    /// A line that belongs to no section.
    UnexpectedLine {
        /// Line number.
        line: usize,
        /// The line's text.
        content: String,
    },
    /// A map header is not of the form `<source>-to-<destination> map:`.
    InvalidHeader {
        /// Line of the header.
        line: usize,
        /// The header text.
        header: String,
    },
    /// A second map consumes an already-mapped category.
    DuplicateStage {
        /// Line of the repeated header.
        line: usize,
        /// The repeated source category.
        category: String,
    },
    /// A map entry is not a valid rule.
    InvalidRule {
        /// Line of the map entry.
        line: usize,
        /// Why the rule was rejected.
        reason: RuleError,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeeds => write!(f, "input has no 'seeds:' line"),
            Self::InvalidNumber { line, token } => {
                write!(f, "line {line}: '{token}' is not a valid number")
            }
            Self::WrongFieldCount { line, found } => {
                write!(f, "line {line}: expected 3 numbers, found {found}")
            }
            Self::UnexpectedLine { line, content } => {
                write!(f, "line {line}: unexpected line '{content}'")
            }
            Self::InvalidHeader { line, header } => {
                write!(f, "line {line}: invalid map header '{header}'")
            }
            Self::DuplicateStage { line, category } => {
                write!(f, "line {line}: category '{category}' is already mapped")
            }
            Self::InvalidRule { line, reason } => write!(f, "line {line}: {reason}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRule { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
