use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use remap::prelude::{OverlapPolicy, PipelineConfig};

#[derive(Parser, Debug)]
#[command(name = "remap", version)]
#[command(about = "Find the lowest value reachable through a chain of range maps", long_about = None)]
pub struct Cli {
    /// Almanac file to read, or `-` for stdin
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// How to treat explicit rules whose source ranges overlap
    #[arg(long, value_enum, default_value_t = OverlapArg::Reject)]
    pub overlap_policy: OverlapArg,

    /// Merge overlapping intervals after every stage
    #[arg(long)]
    pub merge: bool,

    /// Worker threads for range conversion (default: available cores)
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,

    /// Print per-stage interval counts to stderr
    #[arg(long)]
    pub stats: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlapArg {
    /// Fail on overlapping rules
    Reject,
    /// Earlier-listed rules win
    FirstListed,
}

impl From<OverlapArg> for OverlapPolicy {
    fn from(arg: OverlapArg) -> Self {
        match arg {
            OverlapArg::Reject => OverlapPolicy::Reject,
            OverlapArg::FirstListed => OverlapPolicy::FirstListed,
        }
    }
}

impl Cli {
    pub fn config(&self) -> PipelineConfig {
        PipelineConfig {
            overlap_policy: self.overlap_policy.into(),
            merge_intervals: self.merge,
            worker_count: self.workers,
        }
    }

    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}
