//! Depth-first enumeration of every sign assignment.
//!
//! Visits all `2^n` leaves; recursion depth equals the sequence length.

/// Below this length a parallel split costs more than it saves.
#[cfg(feature = "parallel")]
pub const PARALLEL_THRESHOLD: usize = 16;

/// Number of leading sign choices forked onto the rayon pool.
#[cfg(feature = "parallel")]
pub const PARALLEL_DEPTH: usize = 4;

#[must_use]
pub fn count(numbers: &[i64], target: i64) -> u64 {
    let target = i128::from(target);

    #[cfg(feature = "parallel")]
    if numbers.len() >= PARALLEL_THRESHOLD {
        return explore_parallel(numbers, 0, target, PARALLEL_DEPTH);
    }

    explore(numbers, 0, target)
}

fn explore(rest: &[i64], sum: i128, target: i128) -> u64 {
    match rest.split_first() {
        None => u64::from(sum == target),
        Some((&head, tail)) => {
            let head = i128::from(head);
            explore(tail, sum + head, target) + explore(tail, sum - head, target)
        }
    }
}

#[cfg(feature = "parallel")]
fn explore_parallel(rest: &[i64], sum: i128, target: i128, depth: usize) -> u64 {
    if depth == 0 {
        return explore(rest, sum, target);
    }
    match rest.split_first() {
        None => u64::from(sum == target),
        Some((&head, tail)) => {
            let head = i128::from(head);
            let (plus, minus) = rayon::join(
                || explore_parallel(tail, sum + head, target, depth - 1),
                || explore_parallel(tail, sum - head, target, depth - 1),
            );
            plus + minus
        }
    }
}
