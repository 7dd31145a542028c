use core::fmt;
use core::str::FromStr;

use crate::dynamic::DEFAULT_MAX_PARTIAL_SUMS;
use crate::error::CountError;
use crate::{complement, direct, dynamic, worklist};

/// Algorithm used to count sign assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Strategy {
    /// Recursive enumeration of all `2^n` assignments.
    Direct,
    /// Parity check, then enumeration of subsets summing to the negated total.
    Complement,
    /// Enumeration over an explicit stack of `(index, partial_sum)` frames.
    Worklist,
    /// Rolling map of reachable partial sums.
    Dynamic,
}

impl Strategy {
    pub const ALL: [Self; 4] = [Self::Direct, Self::Complement, Self::Worklist, Self::Dynamic];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Complement => "complement",
            Self::Worklist => "worklist",
            Self::Dynamic => "dynamic",
        }
    }

    /// Whether the running time grows as `2^n`.
    #[must_use]
    pub const fn is_exhaustive(self) -> bool {
        !matches!(self, Self::Dynamic)
    }

    /// Count with this strategy. `None` means the count does not fit in `u64`.
    ///
    /// `Dynamic` holds at most [`DEFAULT_MAX_PARTIAL_SUMS`] partial sums here
    /// and also yields `None` past that; use [`Strategy::count_bounded`] to
    /// tell the two apart or to pick another cap.
    #[must_use]
    pub fn count(self, numbers: &[i64], target: i64) -> Option<u64> {
        self.count_bounded(numbers, target, DEFAULT_MAX_PARTIAL_SUMS).ok()
    }

    /// Count with this strategy, capping the partial sums `Dynamic` may hold.
    ///
    /// # Errors
    /// See [`dynamic::count`]. The exhaustive strategies never fail.
    pub fn count_bounded(
        self,
        numbers: &[i64],
        target: i64,
        max_partial_sums: usize,
    ) -> Result<u64, CountError> {
        match self {
            Self::Direct => Ok(direct::count(numbers, target)),
            Self::Complement => Ok(complement::count(numbers, target)),
            Self::Worklist => Ok(worklist::count(numbers, target)),
            Self::Dynamic => dynamic::count(numbers, target, max_partial_sums),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError(alloc::string::String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown strategy: {}", self.0)
    }
}

impl core::error::Error for ParseStrategyError {}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == lower)
            .ok_or_else(|| ParseStrategyError(lower))
    }
}
