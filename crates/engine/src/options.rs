use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use target_sum_core::Strategy;

/// Strategy requested by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyChoice {
    /// `Complement` while the input fits the enumeration limit, `Dynamic` beyond it.
    #[default]
    Auto,
    Fixed(Strategy),
}

impl StrategyChoice {
    #[must_use]
    pub const fn resolve(self, len: usize, max_enumeration_len: usize) -> Strategy {
        match self {
            Self::Fixed(strategy) => strategy,
            Self::Auto if len <= max_enumeration_len => Strategy::Complement,
            Self::Auto => Strategy::Dynamic,
        }
    }
}

impl From<Strategy> for StrategyChoice {
    fn from(strategy: Strategy) -> Self {
        Self::Fixed(strategy)
    }
}

impl fmt::Display for StrategyChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Fixed(strategy) => strategy.fmt(f),
        }
    }
}

impl FromStr for StrategyChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        s.parse::<Strategy>()
            .map(Self::Fixed)
            .map_err(|e| e.to_string())
    }
}
