//! Error types for rule table construction.

use remap_core::Rule;
use std::error::Error;
use std::fmt;

/// Errors from [`RuleTableBuilder::build`](crate::RuleTableBuilder::build).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableError {
    /// Two explicit rules claim overlapping source values under
    /// [`OverlapPolicy::Reject`](crate::OverlapPolicy::Reject).
    OverlappingRules {
        /// The rule with the lower source start.
        first: Rule,
        /// The rule whose source interval starts inside `first`.
        second: Rule,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OverlappingRules { first, second } => {
                write!(f, "rules {first} and {second} overlap in their source ranges")
            }
        }
    }
}

impl Error for TableError {}
