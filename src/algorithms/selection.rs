//! Selection Sort
//!
//! For each position, scans the unsorted suffix for the element of minimum
//! absolute value and swaps it into place. The swap only happens (and is only
//! counted) when the minimum is not already in position, so the swap count is
//! bounded by n-1 regardless of input.
//!
//! Not stable: a long-range swap can reorder equal magnitudes.

use super::abs_key;
use crate::stats::SortStats;

/// Sort a slice in-place, ascending by absolute value.
pub fn sort(data: &mut [i32], stats: &mut SortStats) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    for i in 0..n - 1 {
        let mut min_idx = i;
        for j in i + 1..n {
            stats.comparisons += 1;
            if abs_key(data[j]) < abs_key(data[min_idx]) {
                min_idx = j;
            }
        }
        if min_idx != i {
            data.swap(i, min_idx);
            stats.swaps += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::is_sorted_by_magnitude;
    use super::*;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_sort_empty() {
        let mut data: Vec<i32> = vec![];
        let mut stats = SortStats::default();
        sort(&mut data, &mut stats);
        assert_eq!(stats, SortStats::default());
    }

    #[test]
    fn test_sort_single() {
        let mut data = vec![3];
        let mut stats = SortStats::default();
        sort(&mut data, &mut stats);
        assert_eq!(data, vec![3]);
        assert_eq!(stats, SortStats::default());
    }

    #[test]
    fn test_sort_mixed_signs() {
        let mut data = vec![-9, 4, -1, 7, 0];
        let mut stats = SortStats::default();
        sort(&mut data, &mut stats);
        assert_eq!(data, vec![0, -1, 4, 7, -9]);
        assert_eq!(stats.comparisons, 10); // 4+3+2+1 for n=5
    }

    /// At most n-1 swaps, for any input.
    #[test]
    fn test_swap_bound() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let n = rng.gen_range(2..40);
            let mut data: Vec<i32> = (0..n).map(|_| rng.gen_range(-100..100)).collect();
            let mut stats = SortStats::default();
            sort(&mut data, &mut stats);
            assert!(is_sorted_by_magnitude(&data));
            assert!(stats.swaps <= (n as u64) - 1);
        }
    }

    #[test]
    fn test_sorted_input_zero_swaps() {
        let mut data = vec![1, -2, 3, -4, 5];
        let mut stats = SortStats::default();
        sort(&mut data, &mut stats);
        assert_eq!(data, vec![1, -2, 3, -4, 5]);
        assert_eq!(stats.swaps, 0);
    }

    #[test]
    fn test_sort_all_same_magnitude() {
        let mut data = vec![5, -5, 5, -5];
        let mut stats = SortStats::default();
        sort(&mut data, &mut stats);
        assert_eq!(data, vec![5, -5, 5, -5]);
        assert_eq!(stats.swaps, 0);
    }
}
