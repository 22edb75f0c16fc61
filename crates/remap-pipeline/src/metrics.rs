//! Per-stage interval statistics for range conversion.
//!
//! [`RangeStats`] records how the interval set grows as it passes through
//! each stage. Without merging, `total_len` stays equal to the input's
//! total length at every stage: splitting never gains or loses values.

use remap_core::StageId;

/// Interval counts after one stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageStats {
    /// The stage these numbers were taken after.
    pub stage: StageId,
    /// Intervals leaving the stage.
    pub interval_count: usize,
    /// Sum of the lengths of those intervals.
    pub total_len: u128,
}

/// Statistics collected by
/// [`convert_all_ranges_with_stats`](crate::RangePipeline::convert_all_ranges_with_stats).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RangeStats {
    /// Intervals entering the first stage.
    pub input_count: usize,
    /// Sum of the input interval lengths.
    pub input_len: u128,
    /// One entry per stage, in pipeline order.
    pub stages: Vec<StageStats>,
}

impl RangeStats {
    /// Interval count after the last stage, or the input count for an
    /// empty record.
    pub fn output_count(&self) -> usize {
        self.stages
            .last()
            .map_or(self.input_count, |s| s.interval_count)
    }
}
