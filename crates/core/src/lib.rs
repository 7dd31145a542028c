//! Counting the sign assignments of a number sequence that reach a target.
//!
//! Every strategy in this crate is a pure function of `(numbers, target)` and
//! they all agree on every input. Partial sums are carried as `i128`, so any
//! combination of `i64` inputs is accumulated without overflow.
#![cfg_attr(not(feature = "parallel"), no_std)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod complement;
pub mod direct;
pub mod dynamic;
pub mod error;
pub mod strategy;
pub mod worklist;

pub use error::CountError;
pub use strategy::{ParseStrategyError, Strategy};

/// Count the ways to put `+` or `-` in front of each number so that the
/// signed sum equals `target`.
///
/// The empty sequence has exactly one assignment (the empty one), whose sum
/// is zero.
///
/// ```
/// assert_eq!(target_sum_core::count_ways(&[1, 1, 1, 1, 1], 3), 5);
/// assert_eq!(target_sum_core::count_ways(&[], 0), 1);
/// ```
#[must_use]
pub fn count_ways(numbers: &[i64], target: i64) -> u64 {
    direct::count(numbers, target)
}
