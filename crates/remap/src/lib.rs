//! Remap: a piecewise, chained range-remapping engine.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all remap sub-crates. For most users, adding `remap` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use remap::prelude::*;
//!
//! let input = "seeds: 79 14 55 13
//!
//! seed-to-soil map:
//! 50 98 2
//! 52 50 48
//! ";
//! let answers = remap::solve(input, &PipelineConfig::default()).unwrap();
//! assert_eq!(answers.lowest_point, Some(13));
//! assert_eq!(answers.lowest_range, Some(57));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `remap-core` | `Rule`, `Interval`, `StageId`, `StageSpec`, `DOMAIN_END` |
//! | [`table`] | `remap-table` | `RuleTableBuilder`, `RuleTable`, overlap policies |
//! | [`pipeline`] | `remap-pipeline` | `RangePipeline`, config, seed coalescing, stats |
//! | [`parse`] | `remap-parse` | Almanac text parser |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: rules, intervals, stage specs (`remap-core`).
pub use remap_core as types;

/// Total rule tables and their builder (`remap-table`).
pub use remap_table as table;

/// Chained point and range conversion (`remap-pipeline`).
pub use remap_pipeline as pipeline;

/// Almanac text parsing (`remap-parse`).
pub use remap_parse as parse;

pub mod error;
pub mod solve;

pub use error::RemapError;
pub use solve::{build_pipeline, solve, solve_almanac, Answers};

/// Common imports for typical usage.
///
/// ```rust
/// use remap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::RemapError;
    pub use crate::solve::{build_pipeline, solve, Answers};
    pub use remap_core::{Interval, Rule, StageId, StageSpec, DOMAIN_END};
    pub use remap_parse::{parse_almanac, Almanac, ParseError};
    pub use remap_pipeline::{
        coalesce_seed_ranges, PipelineConfig, PipelineError, RangePipeline, RangeStats,
    };
    pub use remap_table::{build_table, OverlapPolicy, RuleTable, RuleTableBuilder, TableError};
}
