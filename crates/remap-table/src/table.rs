//! The total, sorted rule table of one stage.

use remap_core::{Interval, IntervalVec, Rule};

/// A sorted partition of `[0, DOMAIN_END)` into affine rules.
///
/// Built only by [`RuleTableBuilder`](crate::RuleTableBuilder). Rules are
/// ascending by source start, adjacent, and non-overlapping, so every
/// domain value is covered by exactly one rule. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<Rule>,
    explicit_count: usize,
}

impl RuleTable {
    pub(crate) fn from_partition(rules: Vec<Rule>, explicit_count: usize) -> Self {
        debug_assert!(!rules.is_empty());
        debug_assert!(rules
            .windows(2)
            .all(|pair| pair[0].source_end() == pair[1].source_start()));
        Self {
            rules,
            explicit_count,
        }
    }

    /// All rules, ascending by source start.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Iterate over the rules in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Number of rules, fallbacks included. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Number of rules that came from the explicit input (after any
    /// overlap trimming).
    pub fn explicit_count(&self) -> usize {
        self.explicit_count
    }

    /// Number of synthesized identity rules.
    pub fn fallback_count(&self) -> usize {
        self.rules.len() - self.explicit_count
    }

    /// The rule covering `value`, or `None` for `value >= DOMAIN_END`.
    pub fn rule_for(&self, value: u64) -> Option<&Rule> {
        let idx = self.rules.partition_point(|r| r.source_end() <= value);
        self.rules.get(idx).filter(|r| r.contains(value))
    }

    /// Map one value through this table.
    ///
    /// # Panics
    ///
    /// Panics if no rule covers `value`, which only happens for
    /// `value >= DOMAIN_END`.
    pub fn convert_point(&self, value: u64) -> u64 {
        match self.rule_for(value) {
            Some(rule) => rule.map_point(value),
            None => panic!("rule table coverage violated: no rule covers {value}"),
        }
    }

    /// Map a half-open range through this table.
    ///
    /// Emits one interval per rule the range overlaps, in ascending source
    /// order. The output lengths sum to `range.len()`.
    ///
    /// # Panics
    ///
    /// Panics if part of the range is not covered, which cannot happen for
    /// a table built by the builder.
    pub fn convert_range(&self, range: Interval) -> IntervalVec {
        let first = self.rules.partition_point(|r| r.source_end() <= range.min());
        let mut out = IntervalVec::new();
        let mut covered = range.min();
        for rule in &self.rules[first..] {
            if rule.source_start() >= range.max() {
                break;
            }
            let Some(overlap) = range.intersection(&rule.source_interval()) else {
                continue;
            };
            assert!(
                overlap.min() == covered,
                "rule table coverage violated: gap at {covered} while converting {range}"
            );
            covered = overlap.max();
            out.push(rule.map_interval(overlap));
        }
        assert!(
            covered == range.max(),
            "rule table coverage violated: {range} only covered up to {covered}"
        );
        out
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
