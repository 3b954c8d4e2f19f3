// crates/shared-kernel/src/value_objects/occurrences.rs
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

/// Number of times a word was seen. Non-negative by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Occurrences(usize);

impl Occurrences {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn one() -> Self {
        Self(1)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Default for Occurrences {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Occurrences {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Occurrences {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl From<usize> for Occurrences {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<Occurrences> for usize {
    fn from(value: Occurrences) -> Self {
        value.0
    }
}

impl Sum for Occurrences {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Occurrences> for Occurrences {
    fn sum<I: Iterator<Item = &'a Occurrences>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Occurrences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
