use core::fmt;

/// Why a strategy gave up on an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountError {
    /// The count does not fit in `u64`.
    Overflow,
    /// More distinct partial sums than the caller allows in memory.
    TooManyPartialSums { limit: usize },
}

impl fmt::Display for CountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow => f.write_str("way count exceeds u64 range"),
            Self::TooManyPartialSums { limit } => {
                write!(f, "more than {limit} distinct partial sums")
            }
        }
    }
}

impl core::error::Error for CountError {}
