//! Test utilities for remap development.
//!
//! Provides the documented example almanac as text and as structured
//! stages ([`fixtures`]), plus proptest strategies that generate valid
//! sparse rule lists and intervals ([`strategies`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

pub use fixtures::{
    example_seeds, example_specs, example_stage_rules, rules_from_triples, EXAMPLE_ALMANAC,
    EXAMPLE_LOWEST_POINT, EXAMPLE_LOWEST_RANGE,
};
pub use strategies::{arb_interval, arb_sparse_rules, arb_stages, SMALL_DOMAIN};
