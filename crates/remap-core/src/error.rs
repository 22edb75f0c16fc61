//! Error types for rule construction.

use std::error::Error;
use std::fmt;

/// Errors from [`Rule::new`](crate::Rule::new).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// The rule covers no values.
    ZeroLength {
        /// Source start of the rejected rule.
        source_start: u64,
    },
    /// `source_start + length` runs past [`DOMAIN_END`](crate::DOMAIN_END).
    SourceOverflow {
        /// Source start of the rejected rule.
        source_start: u64,
        /// Length of the rejected rule.
        length: u64,
    },
    /// `dest_start + length` runs past [`DOMAIN_END`](crate::DOMAIN_END).
    DestinationOverflow {
        /// Destination start of the rejected rule.
        dest_start: u64,
        /// Length of the rejected rule.
        length: u64,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLength { source_start } => {
                write!(f, "rule at source {source_start} has zero length")
            }
            Self::SourceOverflow {
                source_start,
                length,
            } => {
                write!(
                    f,
                    "source range {source_start} + {length} exceeds the value domain"
                )
            }
            Self::DestinationOverflow { dest_start, length } => {
                write!(
                    f,
                    "destination range {dest_start} + {length} exceeds the value domain"
                )
            }
        }
    }
}

impl Error for RuleError {}
