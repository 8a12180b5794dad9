//! Comparison-Based Sorting Algorithms
//!
//! Five textbook in-place sorts, each in its own module:
//! - **Bubble Sort**: O(n²) - adjacent-pair exchanges, full passes
//! - **Selection Sort**: O(n²) comparisons, at most n-1 swaps
//! - **Insertion Sort**: O(n²) worst case, early-exit inner scan
//! - **Shell Sort**: gapped insertion sort, n/2 halving gap sequence
//! - **Quick Sort**: recursive Lomuto partition, last element as pivot
//!
//! All of them order by the **absolute value** of the element, not the signed
//! value, and record their work into a [`SortStats`]. The counting discipline
//! is uniform: a comparison is one evaluation of the ordering predicate, a
//! swap is one exchange that actually moved data.

pub mod bubble;
pub mod insertion;
pub mod quick;
pub mod selection;
pub mod shell;

use crate::stats::SortStats;

/// The ordering key used throughout: |value|.
///
/// `unsigned_abs` is total over all of `i32`, including `i32::MIN` where
/// `abs()` would overflow.
#[inline]
pub(crate) fn abs_key(value: i32) -> u32 {
    value.unsigned_abs()
}

/// Check that a slice is non-decreasing by absolute value.
pub fn is_sorted_by_magnitude(data: &[i32]) -> bool {
    data.windows(2).all(|w| abs_key(w[0]) <= abs_key(w[1]))
}

/// The registry of available sorting algorithms.
///
/// Order of [`Algorithm::ALL`] is the presentation order used for the sorted
/// matrices and the comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Shell,
    Quick,
}

impl Algorithm {
    /// All algorithms in presentation order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Shell,
        Algorithm::Quick,
    ];

    /// Human-readable name, as shown in the comparison table.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Shell => "Shell Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }

    /// Sort `data` in place by absolute value, recording into `stats`.
    pub fn sort(self, data: &mut [i32], stats: &mut SortStats) {
        match self {
            Algorithm::Bubble => bubble::sort(data, stats),
            Algorithm::Selection => selection::sort(data, stats),
            Algorithm::Insertion => insertion::sort(data, stats),
            Algorithm::Shell => shell::sort(data, stats),
            Algorithm::Quick => quick::sort(data, stats),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    /// Sorted-by-magnitude output and unchanged multiset, for every algorithm
    /// on the same randomized inputs.
    #[test]
    fn test_all_algorithms_sort_and_permute() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for len in [0usize, 1, 2, 17, 100] {
            let data: Vec<i32> = (0..len).map(|_| rng.gen_range(-100..100)).collect();
            for algorithm in Algorithm::ALL {
                let mut sorted = data.clone();
                let mut stats = SortStats::default();
                algorithm.sort(&mut sorted, &mut stats);
                assert!(
                    is_sorted_by_magnitude(&sorted),
                    "{} left unsorted output for len {}",
                    algorithm.name(),
                    len
                );

                let mut expected = data.clone();
                let mut actual = sorted.clone();
                expected.sort_unstable();
                actual.sort_unstable();
                assert_eq!(actual, expected, "{} changed the multiset", algorithm.name());
            }
        }
    }

    /// Re-sorting an already-sorted sequence performs zero swaps.
    #[test]
    fn test_all_algorithms_idempotent_with_zero_swaps() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);
        let data: Vec<i32> = (0..50).map(|_| rng.gen_range(-100..100)).collect();
        for algorithm in Algorithm::ALL {
            let mut once = data.clone();
            let mut stats = SortStats::default();
            algorithm.sort(&mut once, &mut stats);

            let mut twice = once.clone();
            let mut stats = SortStats::default();
            algorithm.sort(&mut twice, &mut stats);
            assert_eq!(twice, once, "{} is not idempotent", algorithm.name());
            assert_eq!(stats.swaps, 0, "{} swapped on sorted input", algorithm.name());
        }
    }

    /// Empty and single-element inputs terminate with zero work.
    #[test]
    fn test_all_algorithms_trivial_inputs() {
        for algorithm in Algorithm::ALL {
            let mut empty: Vec<i32> = vec![];
            let mut stats = SortStats::default();
            algorithm.sort(&mut empty, &mut stats);
            assert_eq!(stats, SortStats::default());

            let mut single = vec![42];
            let mut stats = SortStats::default();
            algorithm.sort(&mut single, &mut stats);
            assert_eq!(single, vec![42]);
            assert_eq!(stats, SortStats::default());
        }
    }

    #[test]
    fn test_is_sorted_by_magnitude() {
        assert!(is_sorted_by_magnitude(&[0, 2, -3, 5]));
        assert!(is_sorted_by_magnitude(&[-5, 5]));
        assert!(is_sorted_by_magnitude(&[1]));
        assert!(is_sorted_by_magnitude(&[]));
        assert!(!is_sorted_by_magnitude(&[2, -1]));
        assert!(!is_sorted_by_magnitude(&[1, -3, 2]));
    }
}
