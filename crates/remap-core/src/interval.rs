//! Half-open value intervals.

use smallvec::SmallVec;
use std::fmt;

/// Inline storage for the handful of intervals one range splits into.
pub type IntervalVec = SmallVec<[Interval; 4]>;

/// A half-open interval `[min, max)` of domain values.
///
/// # Invariants
/// `min < max`: an interval always holds at least one value.
///
/// # Examples
///
/// ```
/// use remap_core::Interval;
///
/// let iv = Interval::new(79, 93);
/// assert_eq!(iv.len(), 14);
/// assert!(iv.contains(79));
/// assert!(!iv.contains(93));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval {
    min: u64,
    max: u64,
}

impl Interval {
    /// Create the interval `[min, max)`.
    ///
    /// # Panics
    ///
    /// Panics if `min >= max`.
    #[inline]
    pub fn new(min: u64, max: u64) -> Self {
        assert!(
            min < max,
            "invalid interval: min ({min}) must be less than max ({max})"
        );
        Self { min, max }
    }

    /// Create `[min, max)`, or `None` if it would be empty.
    #[inline]
    pub fn try_new(min: u64, max: u64) -> Option<Self> {
        (min < max).then_some(Self { min, max })
    }

    /// Create `[start, start + len)`.
    ///
    /// Returns `None` for a zero length or if the end overflows `u64`.
    #[inline]
    pub fn from_start_len(start: u64, len: u64) -> Option<Self> {
        Self::try_new(start, start.checked_add(len)?)
    }

    /// Inclusive lower bound.
    #[inline]
    pub fn min(&self) -> u64 {
        self.min
    }

    /// Exclusive upper bound.
    #[inline]
    pub fn max(&self) -> u64 {
        self.max
    }

    /// Number of values in the interval. Always at least one.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u64 {
        self.max - self.min
    }

    /// Whether `value` lies in `[min, max)`.
    #[inline]
    pub fn contains(&self, value: u64) -> bool {
        self.min <= value && value < self.max
    }

    /// Whether the two intervals share at least one value.
    #[inline]
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.min < other.max && other.min < self.max
    }

    /// The values common to both intervals, if any.
    #[inline]
    pub fn intersection(&self, other: &Interval) -> Option<Interval> {
        Self::try_new(self.min.max(other.min), self.max.min(other.max))
    }

    /// Sort intervals and merge any that overlap or touch.
    ///
    /// The result is ascending and pairwise disjoint with a gap between
    /// neighbours, and covers exactly the union of the input.
    pub fn normalize(mut intervals: Vec<Interval>) -> Vec<Interval> {
        intervals.sort_unstable_by_key(|iv| (iv.min, iv.max));
        let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
        for iv in intervals {
            if let Some(last) = merged.last_mut() {
                if iv.min <= last.max {
                    last.max = last.max.max(iv.max);
                    continue;
                }
            }
            merged.push(iv);
        }
        merged
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.min, self.max)
    }
}
