// crates/engine/src/lib.rs
use log::{debug, info, trace, warn};
use rayon::prelude::*;
use target_sum_core::CountError;
use target_sum_shared_kernel::DomainError;

pub mod config;
pub mod error;
pub mod input;
pub mod options;
pub mod outcome;

pub use target_sum_core::{Strategy, count_ways};
pub use target_sum_shared_kernel::{Problem, WayCount};

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::outcome::{Outcome, RunResult};

/// Solve a single problem with the configured strategy.
///
/// With `config.verify` set, every other strategy eligible for the input
/// length recomputes the count and must agree.
///
/// # Errors
///
/// - `InputTooLong` when an exhaustive strategy is asked to enumerate more
///   than `max_enumeration_len` numbers.
/// - `CountOverflow` when the count does not fit in `u64`.
/// - `TooManyPartialSums` when `Dynamic` would hold more than
///   `max_partial_sums` partial sums.
/// - `StrategyMismatch` when verification finds a disagreement.
pub fn solve(config: &Config, problem: &Problem) -> Result<Outcome> {
    let strategy = config
        .strategy
        .resolve(problem.len(), config.max_enumeration_len);
    trace!("solving '{problem}' with {strategy}");

    let ways = count_with(strategy, problem, config)?;
    let mut outcome = Outcome::new(problem, strategy, ways);

    if config.verify {
        outcome.verified_by = verify(strategy, ways, problem, config)?;
    }

    debug!("'{problem}' -> {ways} ({strategy})");
    Ok(outcome)
}

fn count_with(strategy: Strategy, problem: &Problem, config: &Config) -> Result<u64> {
    if strategy.is_exhaustive() && problem.len() > config.max_enumeration_len {
        return Err(DomainError::InputTooLong {
            len: problem.len(),
            max: config.max_enumeration_len,
            strategy: strategy.name(),
        }
        .into());
    }

    strategy
        .count_bounded(&problem.numbers, problem.target, config.max_partial_sums)
        .map_err(|e| {
            let strategy = strategy.name();
            match e {
                CountError::Overflow => DomainError::CountOverflow { strategy },
                CountError::TooManyPartialSums { limit } => {
                    DomainError::TooManyPartialSums { limit, strategy }
                }
            }
            .into()
        })
}

fn verify(
    primary: Strategy,
    ways: u64,
    problem: &Problem,
    config: &Config,
) -> Result<Vec<Strategy>> {
    let candidates = Strategy::ALL
        .into_iter()
        .filter(|s| *s != primary)
        .filter(|s| !s.is_exhaustive() || problem.len() <= config.max_enumeration_len);

    let mut checked = Vec::new();
    let mut disagreements = Vec::new();
    for strategy in candidates {
        let other = match count_with(strategy, problem, config) {
            Ok(other) => other,
            Err(EngineError::Domain(DomainError::TooManyPartialSums { limit, .. })) => {
                warn!("'{problem}': {strategy} exceeds {limit} partial sums, not cross-checked");
                continue;
            }
            Err(e) => return Err(e),
        };
        if other != ways {
            disagreements.push(format!("{strategy}={other}"));
        }
        checked.push(strategy);
    }

    if checked.is_empty() {
        warn!(
            "'{problem}': no other strategy can handle {} numbers, skipping verification",
            problem.len()
        );
    }

    if disagreements.is_empty() {
        Ok(checked)
    } else {
        Err(EngineError::StrategyMismatch {
            problem: problem.clone(),
            details: format!("{primary}={ways}, {}", disagreements.join(", ")),
        })
    }
}

/// Solve a batch of problems on a dedicated rayon pool.
///
/// Outcomes keep the order of `problems`.
///
/// # Errors
///
/// Returns an error if the thread pool cannot be built. In strict mode the
/// error of the first failing problem in input order is returned; otherwise
/// failures are collected in `RunResult::errors`.
pub fn run(config: &Config, problems: &[Problem]) -> Result<RunResult> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs)
        .build()?;
    info!(
        "solving {} problems with strategy={} jobs={}",
        problems.len(),
        config.strategy,
        config.jobs
    );

    let results: Vec<Result<Outcome>> = pool.install(|| {
        problems
            .par_iter()
            .map(|problem| solve(config, problem))
            .collect()
    });

    if config.strict {
        // Sequential collect stops at the lowest failing index.
        let outcomes = results.into_iter().collect::<Result<Vec<_>>>()?;
        return Ok(RunResult {
            outcomes,
            errors: Vec::new(),
        });
    }

    let mut result = RunResult::default();
    for (index, item) in results.into_iter().enumerate() {
        match item {
            Ok(outcome) => result.outcomes.push(outcome),
            Err(e) => result.errors.push((index, e)),
        }
    }
    if !result.errors.is_empty() {
        warn!("{} of {} problems failed", result.errors.len(), problems.len());
    }
    Ok(result)
}
