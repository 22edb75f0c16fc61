//! End-to-end solving: parse, build, and reduce both seed readings.

use remap_parse::{parse_almanac, Almanac};
use remap_pipeline::{coalesce_seed_ranges, PipelineConfig, PipelineError, RangePipeline};

use crate::error::RemapError;

/// The two reductions over an almanac's seeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Answers {
    /// Lowest final value with every seed read as a single value.
    pub lowest_point: Option<u64>,
    /// Lowest final value with seeds read as `(start, length)` pairs.
    pub lowest_range: Option<u64>,
}

/// Build the pipeline for a parsed almanac.
pub fn build_pipeline(
    almanac: &Almanac,
    config: &PipelineConfig,
) -> Result<RangePipeline, PipelineError> {
    RangePipeline::from_specs(almanac.stages.clone(), config)
}

/// Compute both answers for a parsed almanac.
///
/// Range conversion runs on [`PipelineConfig::resolved_worker_count`]
/// threads; the answer does not depend on the count.
pub fn solve_almanac(almanac: &Almanac, config: &PipelineConfig) -> Result<Answers, RemapError> {
    let pipeline = build_pipeline(almanac, config)?;
    let ranges = coalesce_seed_ranges(&almanac.seeds)?;
    let workers = config.resolved_worker_count();
    tracing::debug!(
        seeds = almanac.seeds.len(),
        ranges = ranges.len(),
        workers,
        "solving almanac"
    );
    Ok(Answers {
        lowest_point: pipeline.lowest_point(&almanac.seeds),
        lowest_range: pipeline.lowest_range_parallel(&ranges, workers),
    })
}

/// Parse almanac text and compute both answers.
pub fn solve(input: &str, config: &PipelineConfig) -> Result<Answers, RemapError> {
    let almanac = parse_almanac(input)?;
    solve_almanac(&almanac, config)
}
