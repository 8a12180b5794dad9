//! Sort Operation Statistics
//!
//! Every sorting algorithm in this crate records its work into a [`SortStats`]
//! counter pair: one comparison per ordering-predicate evaluation (counted
//! regardless of outcome) and one swap per actual element exchange (never
//! counted when the element would not move).

use std::ops::{Add, AddAssign};

/// Comparison and swap counters for one or more sort invocations.
///
/// Algorithms take `&mut SortStats` and increment the fields directly.
/// Per-column results are accumulated into a per-algorithm total with `+=`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Number of ordering-predicate evaluations between two elements.
    pub comparisons: u64,
    /// Number of element exchanges that actually moved data.
    pub swaps: u64,
}

impl Add for SortStats {
    type Output = SortStats;

    fn add(self, rhs: SortStats) -> SortStats {
        SortStats {
            comparisons: self.comparisons + rhs.comparisons,
            swaps: self.swaps + rhs.swaps,
        }
    }
}

impl AddAssign for SortStats {
    fn add_assign(&mut self, rhs: SortStats) {
        self.comparisons += rhs.comparisons;
        self.swaps += rhs.swaps;
    }
}
