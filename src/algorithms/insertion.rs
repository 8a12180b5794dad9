//! Insertion Sort
//!
//! Grows a sorted prefix one element at a time: each new element is held as a
//! key while strictly greater-magnitude neighbors shift right to make room.
//! Every shift candidate examined costs one comparison, including the final
//! one that stops the scan; each shift counts as one swap. Reaching the front
//! of the slice stops the scan without a comparison.
//!
//! Stable: equal magnitudes never shift past each other.

use super::abs_key;
use crate::stats::SortStats;

/// Sort a slice in-place, ascending by absolute value.
pub fn sort(data: &mut [i32], stats: &mut SortStats) {
    let n = data.len();
    for i in 1..n {
        let key = data[i];
        let mut j = i;
        while j > 0 {
            stats.comparisons += 1;
            if abs_key(data[j - 1]) > abs_key(key) {
                data[j] = data[j - 1];
                j -= 1;
                stats.swaps += 1;
            } else {
                break;
            }
        }
        data[j] = key;
    }
}
