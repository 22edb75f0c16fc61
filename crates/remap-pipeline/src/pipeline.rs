//! The ordered stage list and its point and range traversals.
//!
//! Construction validates everything once: every stage table is total,
//! named stages chain category to category, and no source category
//! repeats. After that, conversion has no failure path.

use indexmap::IndexMap;
use remap_core::{Interval, IntervalVec, Rule, StageId, StageSpec, DOMAIN_END};
use remap_table::{RuleTable, RuleTableBuilder};

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::metrics::{RangeStats, StageStats};
use crate::stage::Stage;

/// An immutable sequence of rule tables applied in order.
///
/// # Examples
///
/// ```
/// use remap_core::{Interval, Rule};
/// use remap_pipeline::{PipelineConfig, RangePipeline};
///
/// let stages = vec![
///     vec![Rule::new(98, 50, 2).unwrap(), Rule::new(50, 52, 48).unwrap()],
///     vec![Rule::new(0, 39, 15).unwrap(), Rule::new(15, 0, 37).unwrap()],
/// ];
/// let pipeline = RangePipeline::from_sparse(stages, &PipelineConfig::default()).unwrap();
///
/// // 14 -> 14 -> 53
/// assert_eq!(pipeline.convert_point(14), 53);
///
/// // [13, 16) passes the first stage unchanged, then splits at 15.
/// let out = pipeline.convert_all_ranges(&[Interval::new(13, 16)]);
/// assert_eq!(out, vec![Interval::new(52, 54), Interval::new(0, 1)]);
/// ```
#[derive(Clone, Debug)]
pub struct RangePipeline {
    stages: Vec<Stage>,
    by_source: IndexMap<String, StageId>,
    merge_intervals: bool,
}

impl RangePipeline {
    /// Build a pipeline of unnamed stages from completed tables.
    pub fn from_tables(tables: Vec<RuleTable>) -> Result<Self, PipelineError> {
        if tables.is_empty() {
            return Err(PipelineError::EmptyPipeline);
        }
        let stages = tables
            .into_iter()
            .enumerate()
            .map(|(i, table)| Stage::new(StageId(i as u32), None, table))
            .collect();
        Ok(Self {
            stages,
            by_source: IndexMap::new(),
            merge_intervals: false,
        })
    }

    /// Build a pipeline of unnamed stages from one sparse rule list per
    /// stage, in stage order.
    pub fn from_sparse(
        stage_rules: Vec<Vec<Rule>>,
        config: &PipelineConfig,
    ) -> Result<Self, PipelineError> {
        config.validate()?;
        let tables = stage_rules
            .into_iter()
            .enumerate()
            .map(|(i, rules)| build_stage_table(StageId(i as u32), rules, config))
            .collect::<Result<Vec<_>, _>>()?;
        let mut pipeline = Self::from_tables(tables)?;
        pipeline.merge_intervals = config.merge_intervals;
        Ok(pipeline)
    }

    /// Build a pipeline of named stages, checking that each stage consumes
    /// the category the previous one produces.
    pub fn from_specs(
        specs: Vec<StageSpec>,
        config: &PipelineConfig,
    ) -> Result<Self, PipelineError> {
        config.validate()?;
        if specs.is_empty() {
            return Err(PipelineError::EmptyPipeline);
        }

        let mut by_source: IndexMap<String, StageId> = IndexMap::with_capacity(specs.len());
        for (i, spec) in specs.iter().enumerate() {
            let id = StageId(i as u32);
            if by_source.insert(spec.source.clone(), id).is_some() {
                return Err(PipelineError::DuplicateStage {
                    category: spec.source.clone(),
                });
            }
            if let Some(prev) = i.checked_sub(1).map(|p| &specs[p]) {
                if prev.destination != spec.source {
                    return Err(PipelineError::BrokenChain {
                        stage: id,
                        expected: prev.destination.clone(),
                        found: spec.source.clone(),
                    });
                }
            }
        }

        let mut stages = Vec::with_capacity(specs.len());
        for (i, spec) in specs.into_iter().enumerate() {
            let id = StageId(i as u32);
            let table = build_stage_table(id, spec.rules, config)?;
            stages.push(Stage::new(id, Some((spec.source, spec.destination)), table));
        }

        tracing::debug!(
            stages = stages.len(),
            from = %stages[0].label(),
            "built range pipeline"
        );
        Ok(Self {
            stages,
            by_source,
            merge_intervals: config.merge_intervals,
        })
    }

    /// All stages, in order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Number of stages. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// The stage at `id`, if it exists.
    pub fn stage(&self, id: StageId) -> Option<&Stage> {
        self.stages.get(id.index())
    }

    /// The named stage that consumes `category`.
    pub fn stage_by_source(&self, category: &str) -> Option<&Stage> {
        self.by_source
            .get(category)
            .and_then(|&id| self.stage(id))
    }

    /// Category consumed by the first stage, when stages are named.
    pub fn source_category(&self) -> Option<&str> {
        self.stages.first().and_then(Stage::source)
    }

    /// Category produced by the last stage, when stages are named.
    pub fn destination_category(&self) -> Option<&str> {
        self.stages.last().and_then(Stage::destination)
    }

    /// Whether range conversion merges intervals between stages.
    pub fn merges_intervals(&self) -> bool {
        self.merge_intervals
    }

    // ── Point conversion ───────────────────────────────────────

    /// Map one value through every stage in order.
    ///
    /// # Panics
    ///
    /// Panics if `value >= DOMAIN_END`.
    pub fn convert_point(&self, value: u64) -> u64 {
        self.stages
            .iter()
            .fold(value, |v, stage| stage.table().convert_point(v))
    }

    /// Map one value through every stage, or `None` if it lies outside
    /// `[0, DOMAIN_END)`.
    pub fn try_convert_point(&self, value: u64) -> Option<u64> {
        (value < DOMAIN_END).then(|| self.convert_point(value))
    }

    /// Map every value through every stage.
    ///
    /// # Panics
    ///
    /// Panics if any value is `>= DOMAIN_END`.
    pub fn convert_all_points(&self, values: &[u64]) -> Vec<u64> {
        values.iter().map(|&v| self.convert_point(v)).collect()
    }

    /// The lowest final value over `values`, or `None` if there are none.
    ///
    /// Values at or past `DOMAIN_END` have no image and are skipped.
    pub fn lowest_point(&self, values: &[u64]) -> Option<u64> {
        values
            .iter()
            .filter_map(|&v| self.try_convert_point(v))
            .min()
    }

    // ── Range conversion ───────────────────────────────────────

    /// Map one range through a single stage table.
    ///
    /// One output interval per rule the range overlaps; together they are
    /// exactly the image of `range`.
    pub fn convert_range(table: &RuleTable, range: Interval) -> IntervalVec {
        table.convert_range(range)
    }

    /// Map a set of ranges through a single stage table.
    pub fn convert_ranges_through(table: &RuleTable, ranges: &[Interval]) -> Vec<Interval> {
        ranges
            .iter()
            .flat_map(|&range| table.convert_range(range))
            .collect()
    }

    /// Map a set of ranges through every stage in order.
    ///
    /// Without merging, the descendants of each input range stay
    /// contiguous and in input order.
    pub fn convert_all_ranges(&self, ranges: &[Interval]) -> Vec<Interval> {
        let mut current = ranges.to_vec();
        for stage in &self.stages {
            current = self.step_ranges(stage, &current);
        }
        current
    }

    /// [`convert_all_ranges`](Self::convert_all_ranges), also recording
    /// interval counts and total lengths after each stage.
    pub fn convert_all_ranges_with_stats(&self, ranges: &[Interval]) -> (Vec<Interval>, RangeStats) {
        let mut stats = RangeStats {
            input_count: ranges.len(),
            input_len: total_len(ranges),
            stages: Vec::with_capacity(self.stages.len()),
        };
        let mut current = ranges.to_vec();
        for stage in &self.stages {
            current = self.step_ranges(stage, &current);
            stats.stages.push(StageStats {
                stage: stage.id(),
                interval_count: current.len(),
                total_len: total_len(&current),
            });
        }
        (current, stats)
    }

    /// The lowest value reachable from any of `ranges`, or `None` if there
    /// are none.
    pub fn lowest_range(&self, ranges: &[Interval]) -> Option<u64> {
        self.convert_all_ranges(ranges)
            .iter()
            .map(Interval::min)
            .min()
    }

    fn step_ranges(&self, stage: &Stage, ranges: &[Interval]) -> Vec<Interval> {
        let mut out = Self::convert_ranges_through(stage.table(), ranges);
        if self.merge_intervals {
            out = Interval::normalize(out);
        }
        tracing::trace!(
            stage = %stage.label(),
            input = ranges.len(),
            output = out.len(),
            "converted ranges"
        );
        out
    }
}

fn build_stage_table(
    stage: StageId,
    rules: Vec<Rule>,
    config: &PipelineConfig,
) -> Result<RuleTable, PipelineError> {
    let mut builder = RuleTableBuilder::new().with_policy(config.overlap_policy);
    builder.extend(rules);
    builder
        .build()
        .map_err(|reason| PipelineError::Table { stage, reason })
}

fn total_len(ranges: &[Interval]) -> u128 {
    ranges.iter().map(|iv| u128::from(iv.len())).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use remap_table::{build_table, OverlapPolicy, TableError};
    use remap_test_utils::{
        arb_interval, arb_stages, example_seeds, example_specs, example_stage_rules,
        rules_from_triples, EXAMPLE_LOWEST_POINT, EXAMPLE_LOWEST_RANGE,
    };

    use crate::seeds::coalesce_seed_ranges;

    fn example() -> RangePipeline {
        RangePipeline::from_specs(example_specs(), &PipelineConfig::default()).unwrap()
    }

    // ── Construction ───────────────────────────────────────────

    #[test]
    fn empty_pipeline_rejected() {
        let config = PipelineConfig::default();
        assert_eq!(
            RangePipeline::from_specs(Vec::new(), &config).unwrap_err(),
            PipelineError::EmptyPipeline
        );
        assert_eq!(
            RangePipeline::from_sparse(Vec::new(), &config).unwrap_err(),
            PipelineError::EmptyPipeline
        );
        assert_eq!(
            RangePipeline::from_tables(Vec::new()).unwrap_err(),
            PipelineError::EmptyPipeline
        );
    }

    #[test]
    fn named_stages_are_indexed_by_source() {
        let pipeline = example();
        assert_eq!(pipeline.len(), 7);
        assert_eq!(pipeline.source_category(), Some("seed"));
        assert_eq!(pipeline.destination_category(), Some("location"));
        let water = pipeline.stage_by_source("water").unwrap();
        assert_eq!(water.id(), StageId(3));
        assert_eq!(water.destination(), Some("light"));
        assert_eq!(water.label(), "water-to-light");
        assert!(pipeline.stage_by_source("location").is_none());
    }

    #[test]
    fn unnamed_stages_have_positional_labels() {
        let pipeline =
            RangePipeline::from_sparse(example_stage_rules(), &PipelineConfig::default()).unwrap();
        assert_eq!(pipeline.stage(StageId(0)).unwrap().label(), "stage 0");
        assert!(pipeline.source_category().is_none());
        assert!(pipeline.stage_by_source("seed").is_none());
    }

    #[test]
    fn broken_chain_rejected() {
        let mut specs = example_specs();
        specs.swap(1, 2);
        let err = RangePipeline::from_specs(specs, &PipelineConfig::default()).unwrap_err();
        assert_eq!(
            err,
            PipelineError::BrokenChain {
                stage: StageId(1),
                expected: "soil".into(),
                found: "fertilizer".into(),
            }
        );
    }

    #[test]
    fn duplicate_source_rejected() {
        let mut specs = example_specs();
        let again = specs[0].clone();
        specs.push(again);
        let err = RangePipeline::from_specs(specs, &PipelineConfig::default()).unwrap_err();
        assert_eq!(
            err,
            PipelineError::DuplicateStage {
                category: "seed".into()
            }
        );
    }

    #[test]
    fn overlap_reported_with_stage_position() {
        let stages = vec![
            rules_from_triples(&[[50, 98, 2]]),
            rules_from_triples(&[[0, 10, 10], [100, 15, 10]]),
        ];
        let err = RangePipeline::from_sparse(stages.clone(), &PipelineConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Table {
                stage: StageId(1),
                reason: TableError::OverlappingRules { .. }
            }
        ));

        let lenient = PipelineConfig {
            overlap_policy: OverlapPolicy::FirstListed,
            ..Default::default()
        };
        let pipeline = RangePipeline::from_sparse(stages, &lenient).unwrap();
        assert_eq!(pipeline.convert_point(17), 7);
    }

    #[test]
    fn invalid_config_rejected_before_building() {
        let config = PipelineConfig {
            worker_count: Some(0),
            ..Default::default()
        };
        assert_eq!(
            RangePipeline::from_specs(example_specs(), &config).unwrap_err(),
            PipelineError::InvalidWorkerCount
        );
    }

    // ── Point conversion ───────────────────────────────────────

    #[test]
    fn example_points_reach_documented_locations() {
        let pipeline = example();
        assert_eq!(
            pipeline.convert_all_points(&example_seeds()),
            vec![82, 43, 86, 35]
        );
        assert_eq!(
            pipeline.lowest_point(&example_seeds()),
            Some(EXAMPLE_LOWEST_POINT)
        );
    }

    #[test]
    fn value_at_domain_end_has_no_point_image() {
        let pipeline = example();
        assert_eq!(pipeline.try_convert_point(DOMAIN_END), None);
        assert_eq!(pipeline.try_convert_point(79), Some(82));
        assert_eq!(pipeline.lowest_point(&[DOMAIN_END]), None);
        assert_eq!(pipeline.lowest_point(&[DOMAIN_END, 14]), Some(43));
    }

    #[test]
    fn lowest_of_nothing_is_none() {
        let pipeline = example();
        assert_eq!(pipeline.lowest_point(&[]), None);
        assert_eq!(pipeline.lowest_range(&[]), None);
    }

    // ── Range conversion ───────────────────────────────────────

    #[test]
    fn example_ranges_reach_documented_location() {
        let pipeline = example();
        let ranges = coalesce_seed_ranges(&example_seeds()).unwrap();
        assert_eq!(pipeline.lowest_range(&ranges), Some(EXAMPLE_LOWEST_RANGE));
    }

    #[test]
    fn single_stage_split_at_rule_boundary() {
        let table = build_table(rules_from_triples(&[[50, 98, 2]])).unwrap();
        let out = RangePipeline::convert_range(&table, Interval::new(90, 100));
        assert_eq!(
            out.as_slice(),
            &[Interval::new(90, 98), Interval::new(50, 52)]
        );
    }

    #[test]
    fn stats_track_growth_and_conserve_length() {
        let pipeline = example();
        let ranges = coalesce_seed_ranges(&example_seeds()).unwrap();
        let (out, stats) = pipeline.convert_all_ranges_with_stats(&ranges);
        assert_eq!(stats.input_count, 2);
        assert_eq!(stats.input_len, 27);
        assert_eq!(stats.stages.len(), 7);
        assert_eq!(stats.output_count(), out.len());
        let mut previous = stats.input_count;
        for stage in &stats.stages {
            assert_eq!(stage.total_len, 27);
            assert!(stage.interval_count >= previous);
            previous = stage.interval_count;
        }
    }

    #[test]
    fn merging_keeps_the_answer() {
        let merged = RangePipeline::from_specs(
            example_specs(),
            &PipelineConfig {
                merge_intervals: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert!(merged.merges_intervals());
        let ranges = coalesce_seed_ranges(&example_seeds()).unwrap();
        assert_eq!(merged.lowest_range(&ranges), Some(EXAMPLE_LOWEST_RANGE));
        let out = merged.convert_all_ranges(&ranges);
        for pair in out.windows(2) {
            assert!(pair[0].max() < pair[1].min());
        }
    }

    proptest! {
        #[test]
        fn unit_range_matches_point(stages in arb_stages(5, 8), v in 0u64..2_500) {
            let pipeline = RangePipeline::from_sparse(stages, &PipelineConfig::default()).unwrap();
            let out = pipeline.convert_all_ranges(&[Interval::new(v, v + 1)]);
            prop_assert_eq!(out.len(), 1);
            prop_assert_eq!(out[0].min(), pipeline.convert_point(v));
        }

        #[test]
        fn lowest_range_matches_brute_force(stages in arb_stages(4, 8), range in arb_interval()) {
            let pipeline = RangePipeline::from_sparse(stages, &PipelineConfig::default()).unwrap();
            let brute = (range.min()..range.max()).map(|v| pipeline.convert_point(v)).min();
            prop_assert_eq!(pipeline.lowest_range(&[range]), brute);
        }

        #[test]
        fn interval_count_never_shrinks_and_length_is_conserved(
            stages in arb_stages(5, 8),
            ranges in proptest::collection::vec(arb_interval(), 1..6),
        ) {
            let pipeline = RangePipeline::from_sparse(stages, &PipelineConfig::default()).unwrap();
            let (_, stats) = pipeline.convert_all_ranges_with_stats(&ranges);
            let mut previous = stats.input_count;
            for stage in &stats.stages {
                prop_assert!(stage.interval_count >= previous);
                prop_assert_eq!(stage.total_len, stats.input_len);
                previous = stage.interval_count;
            }
        }

        #[test]
        fn merged_and_unmerged_agree_on_lowest(
            stages in arb_stages(5, 8),
            ranges in proptest::collection::vec(arb_interval(), 1..6),
        ) {
            let plain = RangePipeline::from_sparse(stages.clone(), &PipelineConfig::default()).unwrap();
            let merged = RangePipeline::from_sparse(
                stages,
                &PipelineConfig { merge_intervals: true, ..Default::default() },
            )
            .unwrap();
            prop_assert_eq!(plain.lowest_range(&ranges), merged.lowest_range(&ranges));
        }
    }
}
