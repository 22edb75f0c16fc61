//! Total rule tables for the remap engine.
//!
//! [`RuleTableBuilder`] completes a sparse, unsorted rule list into a
//! [`RuleTable`]: a sorted partition of `[0, DOMAIN_END)` where every value
//! is covered by exactly one rule. Gaps are filled with identity fallback
//! rules, so values no explicit rule mentions pass through unchanged.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod error;
pub mod table;

pub use builder::{build_table, OverlapPolicy, RuleTableBuilder};
pub use error::TableError;
pub use table::RuleTable;
