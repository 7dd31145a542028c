use crate::options::StrategyChoice;
use derive_builder::Builder;

pub use target_sum_core::dynamic::DEFAULT_MAX_PARTIAL_SUMS;

/// Longest input an exhaustive strategy accepts unless configured otherwise.
pub const DEFAULT_MAX_ENUMERATION_LEN: usize = 30;

/// Exhaustive counts stay below `2^63` up to this length.
pub const MAX_ENUMERATION_LEN_CEILING: usize = 62;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    #[builder(default)]
    pub strategy: StrategyChoice,
    /// Cross-check the answer with every other eligible strategy.
    #[builder(default)]
    pub verify: bool,
    #[builder(default = "DEFAULT_MAX_ENUMERATION_LEN")]
    pub max_enumeration_len: usize,
    /// Distinct partial sums the dynamic strategy may hold at once.
    #[builder(default = "DEFAULT_MAX_PARTIAL_SUMS")]
    pub max_partial_sums: usize,
    #[builder(default = "1")]
    pub jobs: usize,
    #[builder(default)]
    pub strict: bool,
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(max) = self.max_enumeration_len
            && !(1..=MAX_ENUMERATION_LEN_CEILING).contains(&max)
        {
            return Err(format!(
                "max_enumeration_len must be between 1 and {MAX_ENUMERATION_LEN_CEILING}, got {max}"
            ));
        }
        if self.max_partial_sums == Some(0) {
            return Err("max_partial_sums must be at least 1".to_string());
        }
        if self.jobs == Some(0) {
            return Err("jobs must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: StrategyChoice::Auto,
            verify: false,
            max_enumeration_len: DEFAULT_MAX_ENUMERATION_LEN,
            max_partial_sums: DEFAULT_MAX_PARTIAL_SUMS,
            jobs: 1,
            strict: false,
        }
    }
}
