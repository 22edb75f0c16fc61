//! Pipeline construction and execution settings.

use remap_table::OverlapPolicy;

use crate::error::PipelineError;

/// Settings applied when building and running a
/// [`RangePipeline`](crate::RangePipeline).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    /// How each stage's table builder treats overlapping explicit rules.
    /// Default: [`OverlapPolicy::Reject`].
    pub overlap_policy: OverlapPolicy,
    /// Merge overlapping and touching intervals after every stage of range
    /// conversion. Keeps the interval set small; the lowest reachable value
    /// is the same either way. Default: `false`.
    pub merge_intervals: bool,
    /// Worker threads for parallel range conversion. `None` = auto-detect
    /// from `available_parallelism`.
    pub worker_count: Option<usize>,
}

impl PipelineConfig {
    /// Check the settings for values that can never work.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.worker_count == Some(0) {
            return Err(PipelineError::InvalidWorkerCount);
        }
        Ok(())
    }

    /// Resolve the worker count, applying auto-detection if `None`.
    ///
    /// Values are clamped to `[1, 64]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, 64),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
                .clamp(1, 64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_strict_and_unmerged() {
        let config = PipelineConfig::default();
        assert_eq!(config.overlap_policy, OverlapPolicy::Reject);
        assert!(!config.merge_intervals);
        assert!(config.worker_count.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_workers_rejected() {
        let config = PipelineConfig {
            worker_count: Some(0),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(PipelineError::InvalidWorkerCount));
    }

    #[test]
    fn worker_count_is_clamped() {
        let config = PipelineConfig {
            worker_count: Some(1_000),
            ..Default::default()
        };
        assert_eq!(config.resolved_worker_count(), 64);
        let auto = PipelineConfig::default().resolved_worker_count();
        assert!((1..=64).contains(&auto));
    }
}
