//! Error types for pipeline construction and seed coalescing.

use remap_core::StageId;
use remap_table::TableError;
use std::error::Error;
use std::fmt;

/// Errors from building a [`RangePipeline`](crate::RangePipeline) or
/// preparing its input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PipelineError {
    /// No stages were supplied.
    EmptyPipeline,
    /// A stage's sparse rules could not be completed into a table.
    Table {
        /// Position of the failing stage.
        stage: StageId,
        /// The underlying table error.
        reason: TableError,
    },
    /// A stage does not consume the category the previous stage produces.
    BrokenChain {
        /// Position of the stage that breaks the chain.
        stage: StageId,
        /// Category produced by the previous stage.
        expected: String,
        /// Category this stage consumes.
        found: String,
    },
    /// Two stages consume the same source category.
    DuplicateStage {
        /// The repeated source category.
        category: String,
    },
    /// A seed list read as `(start, length)` pairs has an odd length.
    UnpairedSeed {
        /// The trailing seed with no length.
        seed: u64,
    },
    /// A seed range runs past the value domain.
    SeedRangeOverflow {
        /// Range start.
        start: u64,
        /// Range length.
        length: u64,
    },
    /// `worker_count` was explicitly set to zero.
    InvalidWorkerCount,
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPipeline => write!(f, "pipeline has no stages"),
            Self::Table { stage, reason } => write!(f, "stage {stage}: {reason}"),
            Self::BrokenChain {
                stage,
                expected,
                found,
            } => {
                write!(
                    f,
                    "stage {stage} maps from '{found}' but the previous stage produces '{expected}'"
                )
            }
            Self::DuplicateStage { category } => {
                write!(f, "more than one stage maps from '{category}'")
            }
            Self::UnpairedSeed { seed } => {
                write!(f, "seed {seed} has no matching range length")
            }
            Self::SeedRangeOverflow { start, length } => {
                write!(f, "seed range {start} + {length} exceeds the value domain")
            }
            Self::InvalidWorkerCount => write!(f, "worker_count must be at least 1"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Table { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remap_core::Rule;

    #[test]
    fn table_error_is_chained_as_source() {
        let reason = TableError::OverlappingRules {
            first: Rule::new(10, 0, 10).unwrap(),
            second: Rule::new(15, 100, 10).unwrap(),
        };
        let err = PipelineError::Table {
            stage: StageId(2),
            reason: reason.clone(),
        };
        assert!(err.to_string().starts_with("stage 2: "));
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), reason.to_string());
    }

    #[test]
    fn broken_chain_names_both_categories() {
        let err = PipelineError::BrokenChain {
            stage: StageId(1),
            expected: "soil".into(),
            found: "water".into(),
        };
        assert_eq!(
            err.to_string(),
            "stage 1 maps from 'water' but the previous stage produces 'soil'"
        );
    }
}
