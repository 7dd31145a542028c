use clap::ValueEnum;
use target_sum_engine::Strategy;
use target_sum_engine::options::StrategyChoice;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    /// way counts only, one per line
    Plain,
    Csv,
    Tsv,
    Json,
    Jsonl,
    Yaml,
    Md,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StrategyArg {
    /// complement up to --max-len numbers, dynamic beyond
    #[default]
    Auto,
    /// recursive enumeration of every assignment
    Direct,
    /// parity check plus subset enumeration
    Complement,
    /// enumeration over an explicit stack
    Worklist,
    /// memoized partial sums
    Dynamic,
}

impl From<StrategyArg> for StrategyChoice {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Auto => Self::Auto,
            StrategyArg::Direct => Self::Fixed(Strategy::Direct),
            StrategyArg::Complement => Self::Fixed(Strategy::Complement),
            StrategyArg::Worklist => Self::Fixed(Strategy::Worklist),
            StrategyArg::Dynamic => Self::Fixed(Strategy::Dynamic),
        }
    }
}

/// Log verbosity derived from `-v`/`-q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    #[must_use]
    pub const fn directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

