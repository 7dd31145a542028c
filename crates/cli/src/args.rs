// crates/cli/src/args.rs
use crate::options::{OutputFormat, StrategyArg};
use crate::parsers;
use clap::{Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "target_sum",
    version = crate::VERSION,
    about = "Count the +/- sign assignments of a number sequence that reach a target",
    after_help = concat!(
        "Examples:\n",
        "  target_sum -t 3 1 1 1 1 1\n",
        "  target_sum -t 0 1,2,3 --verify\n",
        "  target_sum --input problems.txt --format json"
    )
)]
pub struct Args {
    /// Numbers to sign (space and/or comma separated, negatives allowed)
    #[arg(
        value_delimiter = ',',
        allow_negative_numbers = true,
        value_parser = parsers::parse_i64,
        conflicts_with = "input"
    )]
    pub numbers: Vec<i64>,

    /// Signed sum to reach
    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        value_parser = parsers::parse_i64,
        conflicts_with = "input"
    )]
    pub target: Option<i64>,

    /// Batch file with one problem per line ('-' reads stdin)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub solve: SolveOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub logging: LoggingOptions,
}

/// Counting options
#[derive(ClapArgs, Debug)]
pub struct SolveOptions {
    /// Counting algorithm
    #[arg(long, value_enum, default_value = "auto", help_heading = "Counting")]
    pub strategy: StrategyArg,

    /// Cross-check the count with every other eligible strategy
    #[arg(long, help_heading = "Counting")]
    pub verify: bool,

    /// Longest input an exhaustive strategy may enumerate
    #[arg(long = "max-len", value_parser = parsers::parse_max_len, help_heading = "Counting")]
    pub max_len: Option<usize>,

    /// Distinct partial sums the dynamic strategy may hold
    #[arg(
        long = "max-sums",
        value_parser = parsers::parse_positive_usize,
        help_heading = "Counting"
    )]
    pub max_sums: Option<usize>,

    /// Worker threads for batch runs (default: CPU count)
    #[arg(short, long, value_parser = parsers::parse_positive_usize, help_heading = "Counting")]
    pub jobs: Option<usize>,

    /// Stop at the first failing problem
    #[arg(long, help_heading = "Counting")]
    pub strict: bool,
}

/// Output-related options
#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// Output format
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: OutputFormat,

    /// Append a TOTAL row (table/csv/tsv/md)
    #[arg(long, help_heading = "Output")]
    pub total_row: bool,
}

/// Diagnostics
#[derive(ClapArgs, Debug)]
pub struct LoggingOptions {
    /// Increase log detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, help_heading = "Logging")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose", global = true, help_heading = "Logging")]
    pub quiet: bool,
}
