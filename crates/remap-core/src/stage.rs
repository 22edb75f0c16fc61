//! Named sparse stage descriptions.

use crate::rule::Rule;

/// The sparse rules for one stage, together with the categories it maps
/// between (for example `seed` to `soil`).
///
/// This is the hand-off format between the parser and the pipeline: the
/// rules are as given, possibly unsorted and partial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageSpec {
    /// Category of the values entering this stage.
    pub source: String,
    /// Category of the values leaving this stage.
    pub destination: String,
    /// Explicit rules, in input order.
    pub rules: Vec<Rule>,
}

impl StageSpec {
    /// Create a stage spec.
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        rules: Vec<Rule>,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            rules,
        }
    }

    /// The `<source>-to-<destination>` label used in map headers.
    pub fn label(&self) -> String {
        format!("{}-to-{}", self.source, self.destination)
    }
}
