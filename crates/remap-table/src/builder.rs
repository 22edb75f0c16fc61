//! Completion of sparse rule lists into total tables.
//!
//! The builder sorts the explicit rules by source start, resolves overlaps
//! according to the configured [`OverlapPolicy`], then walks the sorted list
//! with a cursor and inserts an identity fallback rule for every gap,
//! including the final open stretch up to [`DOMAIN_END`].

use remap_core::{Interval, Rule, DOMAIN_END};

use crate::error::TableError;
use crate::table::RuleTable;

/// How the builder treats explicit rules whose source ranges overlap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverlapPolicy {
    /// Fail with [`TableError::OverlappingRules`].
    #[default]
    Reject,
    /// Earlier-listed rules take priority. A later rule keeps only the
    /// source values no earlier rule claims, each piece with its original
    /// offset.
    FirstListed,
}

/// Collects sparse rules for one stage and builds the total [`RuleTable`].
///
/// # Examples
///
/// ```
/// use remap_core::Rule;
/// use remap_table::RuleTableBuilder;
///
/// let mut builder = RuleTableBuilder::new();
/// builder.push(Rule::new(98, 50, 2).unwrap());
/// let table = builder.build().unwrap();
///
/// // [0, 98) identity, [98, 100) explicit, [100, DOMAIN_END) identity.
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.convert_point(99), 51);
/// assert_eq!(table.convert_point(10), 10);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RuleTableBuilder {
    rules: Vec<Rule>,
    policy: OverlapPolicy,
}

impl RuleTableBuilder {
    /// An empty builder with [`OverlapPolicy::Reject`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the overlap policy.
    pub fn with_policy(mut self, policy: OverlapPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Add one explicit rule. Order matters only for
    /// [`OverlapPolicy::FirstListed`].
    pub fn push(&mut self, rule: Rule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Add explicit rules in order.
    pub fn extend<I: IntoIterator<Item = Rule>>(&mut self, rules: I) -> &mut Self {
        self.rules.extend(rules);
        self
    }

    /// Build the total table.
    pub fn build(self) -> Result<RuleTable, TableError> {
        let explicit = match self.policy {
            OverlapPolicy::Reject => sorted_disjoint(self.rules)?,
            OverlapPolicy::FirstListed => first_listed(self.rules),
        };
        let explicit_count = explicit.len();

        let mut rules = Vec::with_capacity(explicit_count * 2 + 1);
        let mut cursor = 0u64;
        for rule in explicit {
            if let Some(gap) = Rule::identity_span(cursor, rule.source_start()) {
                rules.push(gap);
            }
            cursor = rule.source_end();
            rules.push(rule);
        }
        if let Some(tail) = Rule::identity_span(cursor, DOMAIN_END) {
            rules.push(tail);
        }

        tracing::debug!(
            explicit = explicit_count,
            fallbacks = rules.len() - explicit_count,
            policy = ?self.policy,
            "built rule table"
        );
        Ok(RuleTable::from_partition(rules, explicit_count))
    }
}

/// Build a table from sparse rules with [`OverlapPolicy::Reject`].
pub fn build_table(rules: impl IntoIterator<Item = Rule>) -> Result<RuleTable, TableError> {
    let mut builder = RuleTableBuilder::new();
    builder.extend(rules);
    builder.build()
}

/// Sort by source start and fail on the first overlapping neighbour pair.
fn sorted_disjoint(mut rules: Vec<Rule>) -> Result<Vec<Rule>, TableError> {
    rules.sort_by_key(Rule::source_start);
    if let Some(pair) = rules
        .windows(2)
        .find(|pair| pair[1].source_start() < pair[0].source_end())
    {
        return Err(TableError::OverlappingRules {
            first: pair[0],
            second: pair[1],
        });
    }
    Ok(rules)
}

/// Keep earlier rules whole and trim later ones to the unclaimed parts.
fn first_listed(rules: Vec<Rule>) -> Vec<Rule> {
    let mut accepted: Vec<Rule> = Vec::with_capacity(rules.len());
    for rule in rules {
        let mut cursor = rule.source_start();
        let end = rule.source_end();
        let mut pieces: Vec<Interval> = Vec::new();

        let first = accepted.partition_point(|r| r.source_end() <= cursor);
        for claimed in &accepted[first..] {
            if claimed.source_start() >= end {
                break;
            }
            if let Some(gap) = Interval::try_new(cursor, claimed.source_start()) {
                pieces.push(gap);
            }
            cursor = cursor.max(claimed.source_end());
        }
        if let Some(tail) = Interval::try_new(cursor, end) {
            pieces.push(tail);
        }

        for piece in pieces {
            let at = accepted.partition_point(|r| r.source_start() < piece.min());
            accepted.insert(at, rule.restrict(piece));
        }
    }
    accepted
}
