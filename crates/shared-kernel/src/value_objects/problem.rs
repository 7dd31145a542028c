// crates/shared-kernel/src/value_objects/problem.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A sign-assignment problem: the numbers to sign and the sum to reach.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Problem {
    pub numbers: Vec<i64>,
    pub target: i64,
}

impl Problem {
    pub fn new(numbers: impl Into<Vec<i64>>, target: i64) -> Self {
        Self {
            numbers: numbers.into(),
            target,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

/// Renders the text line format accepted by [`FromStr`], e.g. `3: 1 1 1 1 1`.
impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.target)?;
        for n in &self.numbers {
            write!(f, " {n}")?;
        }
        Ok(())
    }
}

/// Parses `<target>: <n1> <n2> ...`; numbers may be separated by whitespace
/// and/or commas.
impl FromStr for Problem {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (target_str, numbers_str) = s
            .split_once(':')
            .ok_or_else(|| DomainError::invalid_problem(s, "expected '<target>: <numbers>'"))?;

        let target_str = target_str.trim();
        let target = target_str.parse::<i64>().map_err(|e| {
            DomainError::invalid_problem(s, format!("bad target '{target_str}': {e}"))
        })?;

        let numbers = parse_number_list(numbers_str)
            .map_err(|reason| DomainError::invalid_problem(s, reason))?;

        Ok(Self { numbers, target })
    }
}

/// Splits on commas and whitespace, ignoring empty fragments.
pub fn parse_number_list(s: &str) -> Result<Vec<i64>, String> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<i64>().map_err(|e| format!("bad number '{p}': {e}")))
        .collect()
}
