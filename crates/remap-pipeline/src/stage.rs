//! One position in a pipeline.

use remap_core::StageId;
use remap_table::RuleTable;

/// A completed rule table at a fixed position in a pipeline, optionally
/// labelled with the categories it maps between.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stage {
    id: StageId,
    categories: Option<(String, String)>,
    table: RuleTable,
}

impl Stage {
    pub(crate) fn new(id: StageId, categories: Option<(String, String)>, table: RuleTable) -> Self {
        Self {
            id,
            categories,
            table,
        }
    }

    /// Position in the pipeline.
    pub fn id(&self) -> StageId {
        self.id
    }

    /// The stage's total rule table.
    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Category of the values entering the stage, if named.
    pub fn source(&self) -> Option<&str> {
        self.categories.as_ref().map(|(s, _)| s.as_str())
    }

    /// Category of the values leaving the stage, if named.
    pub fn destination(&self) -> Option<&str> {
        self.categories.as_ref().map(|(_, d)| d.as_str())
    }

    /// `<source>-to-<destination>` when named, otherwise `stage <id>`.
    pub fn label(&self) -> String {
        match &self.categories {
            Some((source, dest)) => format!("{source}-to-{dest}"),
            None => format!("stage {}", self.id),
        }
    }
}
