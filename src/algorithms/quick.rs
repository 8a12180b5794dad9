//! Quick Sort
//!
//! Recursive quicksort with a Lomuto partition, always picking the last
//! element of the range as the pivot. The boundary swap into the partition
//! and the final pivot placement are each counted only when the element
//! actually moves, so a range the pivot already partitions costs no swaps.
//!
//! Not stable, and O(n²) on sorted input with this pivot choice; that is the
//! textbook trade-off this crate is measuring, not a bug.

use super::abs_key;
use crate::stats::SortStats;

/// Sort a slice in-place, ascending by absolute value.
pub fn sort(data: &mut [i32], stats: &mut SortStats) {
    if data.len() > 1 {
        sort_range(data, 0, data.len() - 1, stats);
    }
}

/// Sort `data[left..=right]`. Ranges of length <= 1 terminate immediately.
fn sort_range(data: &mut [i32], left: usize, right: usize, stats: &mut SortStats) {
    if left >= right {
        return;
    }

    let pivot = data[right];
    // `slot` is the position the next <= pivot element belongs in.
    let mut slot = left;
    for j in left..right {
        stats.comparisons += 1;
        if abs_key(data[j]) <= abs_key(pivot) {
            if slot != j {
                data.swap(slot, j);
                stats.swaps += 1;
            }
            slot += 1;
        }
    }
    if slot != right {
        data.swap(slot, right);
        stats.swaps += 1;
    }

    if slot > 0 {
        sort_range(data, left, slot - 1, stats);
    }
    sort_range(data, slot + 1, right, stats);
}
