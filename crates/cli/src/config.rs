// crates/cli/src/config.rs
use crate::args::Args;
pub use target_sum_engine::config::{
    Config, ConfigBuilder, DEFAULT_MAX_ENUMERATION_LEN, DEFAULT_MAX_PARTIAL_SUMS,
};
use target_sum_engine::error::EngineError;
use target_sum_engine::options::StrategyChoice;

impl TryFrom<&Args> for Config {
    type Error = EngineError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let solve = &args.solve;
        let strategy: StrategyChoice = solve.strategy.into();

        let config = ConfigBuilder::default()
            .strategy(strategy)
            .verify(solve.verify)
            .max_enumeration_len(solve.max_len.unwrap_or(DEFAULT_MAX_ENUMERATION_LEN))
            .max_partial_sums(solve.max_sums.unwrap_or(DEFAULT_MAX_PARTIAL_SUMS))
            .jobs(solve.jobs.unwrap_or_else(num_cpus::get))
            .strict(solve.strict)
            .build()?;
        Ok(config)
    }
}
