use std::path::PathBuf;

use target_sum_shared_kernel::{DomainError, Problem};
use thiserror::Error;

use crate::config::ConfigBuilderError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Failed to read input '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: invalid JSON problem: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Line {line}: {source}")]
    Problem {
        line: usize,
        #[source]
        source: DomainError,
    },

    #[error("Strategies disagree on '{problem}': {details}")]
    StrategyMismatch { problem: Problem, details: String },

    #[error("Thread pool creation failed: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<ConfigBuilderError> for EngineError {
    fn from(err: ConfigBuilderError) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
