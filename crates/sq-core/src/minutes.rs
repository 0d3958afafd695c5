//! Simulation time unit.
//!
//! # Design
//!
//! All durations and clocks in the simulation are whole minutes, represented
//! by the `Minutes` newtype.  Using an integer as the canonical time unit
//! means all queue arithmetic is exact (no floating-point drift) and
//! comparisons are O(1).  Subtraction saturates at zero: a desk whose
//! remaining time is overdrawn by a large `advance` simply reads 0, it never
//! wraps.

use std::fmt;
use std::iter::Sum;

/// A non-negative duration or clock reading in whole minutes.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minutes(pub u32);

impl Minutes {
    pub const ZERO: Minutes = Minutes(0);

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Subtract, stopping at zero instead of wrapping.
    #[inline]
    pub fn saturating_sub(self, rhs: Minutes) -> Minutes {
        Minutes(self.0.saturating_sub(rhs.0))
    }

    /// Minutes elapsed from `earlier` to `self`, zero if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: Minutes) -> Minutes {
        self.saturating_sub(earlier)
    }
}

impl std::ops::Add for Minutes {
    type Output = Minutes;
    #[inline]
    fn add(self, rhs: Minutes) -> Minutes {
        Minutes(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Minutes {
    #[inline]
    fn add_assign(&mut self, rhs: Minutes) {
        self.0 += rhs.0;
    }
}

impl Sum for Minutes {
    fn sum<I: Iterator<Item = Minutes>>(iter: I) -> Minutes {
        iter.fold(Minutes::ZERO, |acc, m| acc + m)
    }
}

impl From<u32> for Minutes {
    #[inline]
    fn from(n: u32) -> Minutes {
        Minutes(n)
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.0)
    }
}
