//! Memoized counting over reachable partial sums.
//!
//! After each element the map holds, for every reachable partial sum, the
//! number of sign prefixes producing it. Work is proportional to `n` times
//! the number of distinct partial sums rather than `2^n`, but that number can
//! itself reach `2^n` (distinct powers of two), so callers bound it.

use hashbrown::HashMap;

use crate::error::CountError;

/// Partial-sum cap used by [`Strategy::count`](crate::Strategy::count).
pub const DEFAULT_MAX_PARTIAL_SUMS: usize = 1 << 20;

/// Count with at most `max_partial_sums` distinct partial sums held at once.
///
/// # Errors
/// `TooManyPartialSums` as soon as a step would exceed the cap, `Overflow` if
/// any partial count exceeds `u64::MAX`.
pub fn count(numbers: &[i64], target: i64, max_partial_sums: usize) -> Result<u64, CountError> {
    let too_many = CountError::TooManyPartialSums {
        limit: max_partial_sums,
    };

    let mut ways: HashMap<i128, u64> = HashMap::new();
    ways.insert(0, 1);

    for &n in numbers {
        let n = i128::from(n);
        let capacity = ways.len().saturating_mul(2).min(max_partial_sums);
        let mut next: HashMap<i128, u64> = HashMap::with_capacity(capacity);
        for (&sum, &prefixes) in &ways {
            for reached in [sum + n, sum - n] {
                let slot = next.entry(reached).or_insert(0);
                *slot = slot.checked_add(prefixes).ok_or(CountError::Overflow)?;
            }
            if next.len() > max_partial_sums {
                return Err(too_many);
            }
        }
        ways = next;
    }

    Ok(ways.get(&i128::from(target)).copied().unwrap_or(0))
}
