// crates/shared-kernel/src/value_objects/way_count.rs
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Number of sign assignments that reach a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WayCount(u64);

impl WayCount {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Totals saturate; a batch total is informational only.
    #[inline]
    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Default for WayCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for WayCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl AddAssign for WayCount {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for WayCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a WayCount> for WayCount {
    fn sum<I: Iterator<Item = &'a WayCount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<u64> for WayCount {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<WayCount> for u64 {
    fn from(value: WayCount) -> Self {
        value.0
    }
}

impl PartialEq<u64> for WayCount {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for WayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
