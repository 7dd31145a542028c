//! Counting through the negated subset.
//!
//! With `P` the sum of the positive-signed elements and `M` the sum of the
//! negated ones, `P - M = target` and `P + M = total`, so `M = (total - target) / 2`.
//! The count equals the number of subsets summing to `M`, which is zero
//! whenever `total - target` is odd.

/// Sum the negated subset must reach, or `None` when no subset can.
///
/// A negative result is only reachable through negative elements, so it is
/// rejected up front for all-non-negative input.
#[must_use]
pub fn negated_subset_sum(numbers: &[i64], target: i64) -> Option<i128> {
    let total: i128 = numbers.iter().copied().map(i128::from).sum();
    let diff = total - i128::from(target);
    if diff % 2 != 0 {
        return None;
    }
    let minus = diff / 2;
    if minus < 0 && all_non_negative(numbers) {
        return None;
    }
    Some(minus)
}

#[must_use]
pub fn count(numbers: &[i64], target: i64) -> u64 {
    let Some(goal) = negated_subset_sum(numbers, target) else {
        return 0;
    };
    let prune = all_non_negative(numbers);
    subsets(numbers, 0, goal, prune)
}

fn subsets(rest: &[i64], sum: i128, goal: i128, prune: bool) -> u64 {
    // Sums only grow when nothing is negative.
    if prune && sum > goal {
        return 0;
    }
    match rest.split_first() {
        None => u64::from(sum == goal),
        Some((&head, tail)) => {
            subsets(tail, sum + i128::from(head), goal, prune) + subsets(tail, sum, goal, prune)
        }
    }
}

fn all_non_negative(numbers: &[i64]) -> bool {
    numbers.iter().all(|&n| n >= 0)
}
