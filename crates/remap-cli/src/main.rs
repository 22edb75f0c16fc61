use std::io::Read;

use anyhow::Context;
use clap::Parser;
use remap::prelude::*;
use remap::solve_almanac;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let input = read_input(&cli)?;
    print!("{}", run(&cli, &input)?);
    Ok(())
}

fn run(cli: &Cli, input: &str) -> anyhow::Result<String> {
    let config = cli.config();
    config.validate()?;
    let almanac = parse_almanac(input).context("failed to parse almanac")?;
    let answers = solve_almanac(&almanac, &config).context("failed to solve almanac")?;
    tracing::info!(
        stages = almanac.stages.len(),
        lowest_point = ?answers.lowest_point,
        lowest_range = ?answers.lowest_range,
        "solved almanac"
    );

    if cli.stats {
        let pipeline = build_pipeline(&almanac, &config)?;
        let ranges = coalesce_seed_ranges(&almanac.seeds)?;
        let (_, stats) = pipeline.convert_all_ranges_with_stats(&ranges);
        print_stats(&pipeline, &stats);
    }

    Ok(format!(
        "{}\n{}\n",
        format_answer(answers.lowest_point),
        format_answer(answers.lowest_range)
    ))
}

fn read_input(cli: &Cli) -> anyhow::Result<String> {
    if cli.reads_stdin() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))
}

fn format_answer(answer: Option<u64>) -> String {
    answer.map_or_else(|| "none".to_string(), |v| v.to_string())
}

fn print_stats(pipeline: &RangePipeline, stats: &RangeStats) {
    eprintln!(
        "input: {} intervals, {} values",
        stats.input_count, stats.input_len
    );
    for (stage, s) in pipeline.stages().iter().zip(&stats.stages) {
        eprintln!(
            "{}: {} intervals, {} values",
            stage.label(),
            s.interval_count,
            s.total_len
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_answer_prints_none() {
        assert_eq!(format_answer(None), "none");
        assert_eq!(format_answer(Some(46)), "46");
    }

    #[test]
    fn run_prints_both_answers() {
        let cli = Cli::try_parse_from(["remap", "-"]).unwrap();
        let out = run(&cli, remap_test_utils::EXAMPLE_ALMANAC).unwrap();
        assert_eq!(out, "35\n46\n");
    }

    #[test]
    fn stats_do_not_change_answers() {
        let cli = Cli::try_parse_from(["remap", "--stats", "--workers", "3", "-"]).unwrap();
        let out = run(&cli, remap_test_utils::EXAMPLE_ALMANAC).unwrap();
        assert_eq!(out, "35\n46\n");
    }

    #[test]
    fn solve_failure_is_reported() {
        let cli = Cli::try_parse_from(["remap", "-"]).unwrap();
        let err = run(&cli, "seeds: 1 2 3\n\na-to-b map:\n5 0 3\n").unwrap_err();
        assert!(err.to_string().contains("failed to solve almanac"));
    }

    #[test]
    fn reads_input_file() {
        let path = std::env::temp_dir().join(format!("remap-cli-{}.txt", std::process::id()));
        std::fs::write(&path, remap_test_utils::EXAMPLE_ALMANAC).unwrap();
        let cli = Cli::try_parse_from([std::ffi::OsStr::new("remap"), path.as_os_str()]).unwrap();
        let text = read_input(&cli).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(text, remap_test_utils::EXAMPLE_ALMANAC);
    }

    #[test]
    fn missing_file_names_the_path() {
        let cli = Cli::try_parse_from(["remap", "/nonexistent/almanac.txt"]).unwrap();
        let err = read_input(&cli).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/almanac.txt"));
    }
}
