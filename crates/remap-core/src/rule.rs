//! Affine mapping rules.

use crate::error::RuleError;
use crate::interval::Interval;
use crate::DOMAIN_END;
use std::fmt;

/// Maps the source interval `[source_start, source_start + length)` onto
/// `[dest_start, dest_start + length)` value by value.
///
/// # Invariants
/// `length > 0`, and both the source and destination ends stay within
/// [`DOMAIN_END`].
///
/// # Examples
///
/// ```
/// use remap_core::Rule;
///
/// // "50 98 2": sources 98..100 map to 50..52.
/// let rule = Rule::new(98, 50, 2).unwrap();
/// assert_eq!(rule.map_point(99), 51);
/// assert!(!rule.contains(100));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rule {
    source_start: u64,
    dest_start: u64,
    length: u64,
}

impl Rule {
    /// Create a rule, checking the length and both domain bounds.
    pub fn new(source_start: u64, dest_start: u64, length: u64) -> Result<Self, RuleError> {
        if length == 0 {
            return Err(RuleError::ZeroLength { source_start });
        }
        let fits = |start: u64| start <= DOMAIN_END - length;
        if !fits(source_start) {
            return Err(RuleError::SourceOverflow {
                source_start,
                length,
            });
        }
        if !fits(dest_start) {
            return Err(RuleError::DestinationOverflow { dest_start, length });
        }
        Ok(Self {
            source_start,
            dest_start,
            length,
        })
    }

    /// An identity rule covering `[start, end)`, or `None` if that is empty.
    ///
    /// `end` is clamped to [`DOMAIN_END`].
    pub fn identity_span(start: u64, end: u64) -> Option<Self> {
        let end = end.min(DOMAIN_END);
        (start < end).then_some(Self {
            source_start: start,
            dest_start: start,
            length: end - start,
        })
    }

    /// First source value covered.
    #[inline]
    pub fn source_start(&self) -> u64 {
        self.source_start
    }

    /// First destination value produced.
    #[inline]
    pub fn dest_start(&self) -> u64 {
        self.dest_start
    }

    /// Number of values covered.
    #[inline]
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Exclusive end of the source interval.
    #[inline]
    pub fn source_end(&self) -> u64 {
        self.source_start + self.length
    }

    /// Exclusive end of the destination interval.
    #[inline]
    pub fn dest_end(&self) -> u64 {
        self.dest_start + self.length
    }

    /// The source values as an interval.
    #[inline]
    pub fn source_interval(&self) -> Interval {
        Interval::new(self.source_start, self.source_end())
    }

    /// Whether `value` falls in the source interval.
    #[inline]
    pub fn contains(&self, value: u64) -> bool {
        self.source_start <= value && value < self.source_end()
    }

    /// Whether every value maps to itself.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.source_start == self.dest_start
    }

    /// Map a covered source value to its destination.
    ///
    /// The caller must pass a value inside the source interval.
    #[inline]
    pub fn map_point(&self, value: u64) -> u64 {
        debug_assert!(self.contains(value), "{value} is outside rule {self}");
        self.dest_start + (value - self.source_start)
    }

    /// Map a sub-interval of the source interval to its destination.
    ///
    /// The exclusive end is mapped as `map_point(max - 1) + 1` so the
    /// result never reaches past the rule's own destination end.
    #[inline]
    pub fn map_interval(&self, part: Interval) -> Interval {
        Interval::new(
            self.map_point(part.min()),
            self.map_point(part.max() - 1) + 1,
        )
    }

    /// The same affine rule restricted to `part` of its source interval.
    ///
    /// `part` must lie inside the source interval.
    pub fn restrict(&self, part: Interval) -> Rule {
        debug_assert!(
            self.contains(part.min()) && part.max() <= self.source_end(),
            "{part} is not inside rule {self}"
        );
        Rule {
            source_start: part.min(),
            dest_start: self.map_point(part.min()),
            length: part.len(),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}) -> [{}, {})",
            self.source_start,
            self.source_end(),
            self.dest_start,
            self.dest_end()
        )
    }
}
