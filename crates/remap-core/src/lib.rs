//! Core types for the remap range-remapping engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value domain, affine mapping rules, half-open intervals, stage
//! identifiers, and the per-rule error type shared by the table builder,
//! the pipeline, and the parser.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod interval;
pub mod rule;
pub mod stage;

pub use error::RuleError;
pub use id::StageId;
pub use interval::{Interval, IntervalVec};
pub use rule::Rule;
pub use stage::StageSpec;

/// Exclusive upper bound of the value domain.
///
/// Every rule table covers `[0, DOMAIN_END)`. The last fallback rule of a
/// table ends exactly here, and no rule may map a value past it.
pub const DOMAIN_END: u64 = u64::MAX;
