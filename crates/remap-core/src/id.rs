//! Strongly-typed stage identifier.

use std::fmt;

/// Identifies a stage by its position in a pipeline.
///
/// `StageId(n)` is the n-th rule table a value passes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StageId(pub u32);

impl StageId {
    /// The position as a `usize` index into the stage list.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for StageId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
