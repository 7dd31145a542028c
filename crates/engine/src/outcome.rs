use serde::{Deserialize, Serialize};
use target_sum_core::Strategy;
use target_sum_shared_kernel::{Problem, WayCount};

use crate::error::EngineError;

/// Answer to a single problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub numbers: Vec<i64>,
    pub target: i64,
    pub strategy: Strategy,
    pub ways: WayCount,
    /// Strategies that independently produced the same count.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub verified_by: Vec<Strategy>,
}

impl Outcome {
    #[must_use]
    pub fn new(problem: &Problem, strategy: Strategy, ways: u64) -> Self {
        Self {
            numbers: problem.numbers.clone(),
            target: problem.target,
            strategy,
            ways: WayCount::from(ways),
            verified_by: Vec::new(),
        }
    }

    #[must_use]
    pub fn problem(&self) -> Problem {
        Problem::new(self.numbers.clone(), self.target)
    }
}

/// Result of a batch run.
///
/// `errors` carries the zero-based index of the failing problem; it is
/// always empty in strict mode.
#[derive(Debug, Default)]
pub struct RunResult {
    pub outcomes: Vec<Outcome>,
    pub errors: Vec<(usize, EngineError)>,
}

impl RunResult {
    #[must_use]
    pub fn total_ways(&self) -> WayCount {
        self.outcomes.iter().map(|o| o.ways).sum()
    }
}
