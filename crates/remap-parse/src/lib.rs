//! Parser for almanac text: a seed line followed by stage maps.
//!
//! ```text
//! seeds: 79 14 55 13
//!
//! seed-to-soil map:
//! 50 98 2
//! 52 50 48
//! ```
//!
//! Each map line is `dest source length`. A section ends at a blank line or
//! at the end of input. [`parse_almanac`] returns the seeds and one
//! [`StageSpec`](remap_core::StageSpec) per map, in input order.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod almanac;
pub mod error;

pub use almanac::{parse_almanac, Almanac};
pub use error::ParseError;
