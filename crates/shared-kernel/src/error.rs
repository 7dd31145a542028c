// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Domain-layer errors shared by every crate in the workspace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Way count exceeds u64 range ({strategy} strategy)")]
    CountOverflow { strategy: &'static str },

    #[error("Input of {len} numbers exceeds the {strategy} limit of {max}")]
    InputTooLong {
        len: usize,
        max: usize,
        strategy: &'static str,
    },

    #[error("More than {limit} distinct partial sums ({strategy} strategy)")]
    TooManyPartialSums { limit: usize, strategy: &'static str },

    #[error("Invalid problem '{input}': {reason}")]
    InvalidProblem { input: String, reason: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

impl DomainError {
    pub(crate) fn invalid_problem(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidProblem {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
