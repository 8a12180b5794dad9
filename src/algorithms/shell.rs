//! Shell Sort
//!
//! Insertion sort over a shrinking gap sequence: n/2, n/4, ..., 1. Each gap
//! round runs a gapped insertion sort with the same counting discipline as
//! the plain one (one comparison per candidate examined, one swap per shift).
//! The final gap-1 round is an ordinary insertion sort over nearly-sorted
//! data, which is what makes the whole thing fast in practice.

use super::abs_key;
use crate::stats::SortStats;

/// Sort a slice in-place, ascending by absolute value.
pub fn sort(data: &mut [i32], stats: &mut SortStats) {
    let n = data.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let key = data[i];
            let mut j = i;
            while j >= gap {
                stats.comparisons += 1;
                if abs_key(data[j - gap]) > abs_key(key) {
                    data[j] = data[j - gap];
                    j -= gap;
                    stats.swaps += 1;
                } else {
                    break;
                }
            }
            data[j] = key;
        }
        gap /= 2;
    }
}
