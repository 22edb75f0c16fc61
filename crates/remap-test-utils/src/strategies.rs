//! Proptest strategies for sparse rule lists and intervals.
//!
//! Everything is drawn from `[0, SMALL_DOMAIN)` so properties can be
//! checked against brute-force enumeration.

use proptest::prelude::*;
use remap_core::{Interval, Rule};

/// Upper bound for generated source and destination values.
pub const SMALL_DOMAIN: u64 = 2_000;

/// A non-overlapping, shuffled sparse rule list of up to `max_rules` rules.
///
/// Source intervals are laid out left to right with random gaps (possibly
/// zero), then the list is shuffled so builders must sort it themselves.
pub fn arb_sparse_rules(max_rules: usize) -> impl Strategy<Value = Vec<Rule>> {
    proptest::collection::vec((0u64..40, 1u64..60, 0u64..SMALL_DOMAIN), 0..=max_rules)
        .prop_map(|parts| {
            let mut cursor = 0u64;
            parts
                .into_iter()
                .map(|(gap, len, dest)| {
                    let source = cursor + gap;
                    cursor = source + len;
                    Rule::new(source, dest, len).unwrap()
                })
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

/// Between one and `max_stages` independent sparse rule lists.
pub fn arb_stages(max_stages: usize, max_rules: usize) -> impl Strategy<Value = Vec<Vec<Rule>>> {
    proptest::collection::vec(arb_sparse_rules(max_rules), 1..=max_stages)
}

/// A non-empty interval inside `[0, SMALL_DOMAIN)`.
pub fn arb_interval() -> impl Strategy<Value = Interval> {
    (0u64..SMALL_DOMAIN - 200, 1u64..200).prop_map(|(min, len)| Interval::new(min, min + len))
}
