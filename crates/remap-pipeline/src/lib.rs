//! Chained point and interval conversion for the remap engine.
//!
//! A [`RangePipeline`] owns one completed [`RuleTable`](remap_table::RuleTable)
//! per stage and pushes values through them in order. Single values map
//! pointwise; half-open intervals are split at rule boundaries, so one
//! input interval may leave a stage as several.
//!
//! Pipelines are built once and never mutated. They are `Sync`, so
//! [`RangePipeline::convert_all_ranges_parallel`] can share one pipeline
//! across scoped worker threads without locking.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod metrics;
pub mod parallel;
pub mod pipeline;
pub mod seeds;
pub mod stage;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use metrics::{RangeStats, StageStats};
pub use pipeline::RangePipeline;
pub use seeds::coalesce_seed_ranges;
pub use stage::Stage;
