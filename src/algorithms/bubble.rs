//! Bubble Sort
//!
//! Classic adjacent-pair exchange sort with the shrinking-pass optimization:
//! after pass i, the last i elements are in their final positions, so each
//! pass scans one fewer pair. There is no early exit on a swap-free pass, so
//! the comparison count is always exactly n(n-1)/2.
//!
//! Stable under the strict `>` comparison used here.

use super::abs_key;
use crate::stats::SortStats;

/// Sort a slice in-place, ascending by absolute value.
pub fn sort(data: &mut [i32], stats: &mut SortStats) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    for i in 0..n - 1 {
        for j in 0..n - 1 - i {
            stats.comparisons += 1;
            if abs_key(data[j]) > abs_key(data[j + 1]) {
                data.swap(j, j + 1);
                stats.swaps += 1;
            }
        }
    }
}
