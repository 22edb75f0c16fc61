//! Benchmark profiles for the remap engine.
//!
//! Deterministic synthetic almanacs at two sizes:
//!
//! - [`reference_profile`]: 7 stages x 32 rules, 10 seed ranges
//! - [`stress_profile`]: 12 stages x 512 rules, 200 seed ranges
//!
//! Generation uses a fixed-multiplier LCG so every run sees the same data.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use remap_core::{Interval, Rule};
use remap_pipeline::{PipelineConfig, RangePipeline};

/// Values are drawn from `[0, PROFILE_DOMAIN)`.
pub const PROFILE_DOMAIN: u64 = 1 << 32;

/// A synthetic almanac: sparse stages plus seed ranges.
pub struct Profile {
    /// One sparse, non-overlapping rule list per stage.
    pub stages: Vec<Vec<Rule>>,
    /// Seed ranges to push through the stages.
    pub ranges: Vec<Interval>,
}

impl Profile {
    /// Build the pipeline for this profile with `config`.
    ///
    /// # Panics
    ///
    /// Panics if the profile's stages are invalid, which the generator
    /// never produces.
    pub fn pipeline(&self, config: &PipelineConfig) -> RangePipeline {
        RangePipeline::from_sparse(self.stages.clone(), config).unwrap()
    }

    /// The range starts, read as single seed values.
    pub fn points(&self) -> Vec<u64> {
        self.ranges.iter().map(Interval::min).collect()
    }
}

/// 7 stages x 32 rules, 10 seed ranges.
pub fn reference_profile(seed: u64) -> Profile {
    build_profile(seed, 7, 32, 10)
}

/// 12 stages x 512 rules, 200 seed ranges.
pub fn stress_profile(seed: u64) -> Profile {
    build_profile(seed, 12, 512, 200)
}

/// Deterministic 64-bit LCG step.
fn next(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state >> 16
}

/// Generate `stages` sparse rule lists and `range_count` seed ranges.
pub fn build_profile(seed: u64, stages: usize, rules_per_stage: u64, range_count: usize) -> Profile {
    let mut state = seed;
    let slot = PROFILE_DOMAIN / rules_per_stage;
    let stages = (0..stages)
        .map(|_| {
            (0..rules_per_stage)
                .map(|i| {
                    let start = i * slot + next(&mut state) % (slot / 4);
                    let len = slot / 2 + next(&mut state) % (slot / 4);
                    let dest = next(&mut state) % PROFILE_DOMAIN;
                    Rule::new(start, dest, len).unwrap()
                })
                .collect()
        })
        .collect();
    let ranges = (0..range_count)
        .map(|_| {
            let start = next(&mut state) % PROFILE_DOMAIN;
            let len = 1 + next(&mut state) % (PROFILE_DOMAIN / 64);
            Interval::new(start, start + len)
        })
        .collect();
    Profile { stages, ranges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remap_table::build_table;

    #[test]
    fn profiles_are_deterministic() {
        let a = reference_profile(42);
        let b = reference_profile(42);
        assert_eq!(a.stages, b.stages);
        assert_eq!(a.ranges, b.ranges);
    }

    #[test]
    fn profile_stages_build_without_overlap() {
        let profile = stress_profile(7);
        assert_eq!(profile.stages.len(), 12);
        for rules in &profile.stages {
            let table = build_table(rules.clone()).unwrap();
            assert_eq!(table.explicit_count(), 512);
        }
        assert_eq!(profile.ranges.len(), 200);
    }

    #[test]
    fn reference_pipeline_answers_agree() {
        let profile = reference_profile(1);
        let pipeline = profile.pipeline(&PipelineConfig::default());
        let serial = pipeline.lowest_range(&profile.ranges);
        assert_eq!(pipeline.lowest_range_parallel(&profile.ranges, 4), serial);
        assert_eq!(profile.points().len(), 10);
    }
}
