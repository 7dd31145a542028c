//! Sign enumeration driven by an explicit stack instead of the call stack.
//!
//! The stack never holds more than `n + 1` frames, so long inputs cost heap
//! memory rather than risking a stack overflow. Leaves are still `2^n`.

use alloc::vec::Vec;

#[must_use]
pub fn count(numbers: &[i64], target: i64) -> u64 {
    let target = i128::from(target);
    let mut stack: Vec<(usize, i128)> = Vec::with_capacity(numbers.len() + 1);
    stack.push((0, 0));

    let mut ways = 0u64;
    while let Some((index, sum)) = stack.pop() {
        match numbers.get(index) {
            None => {
                if sum == target {
                    ways += 1;
                }
            }
            Some(&n) => {
                let n = i128::from(n);
                stack.push((index + 1, sum - n));
                stack.push((index + 1, sum + n));
            }
        }
    }
    ways
}
