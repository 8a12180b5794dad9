//! Column-wise Matrix Sorting with Operation Statistics
//!
//! Sorts each column of an integer matrix independently with five classic
//! comparison-based algorithms (bubble, selection, insertion, shell, quick)
//! and counts how many comparisons and swaps each algorithm spends. The
//! ordering key is the absolute value of the element, not the signed value.
//!
//! The binary in `src/main.rs` is thin interactive glue; everything it does
//! is available here:
//!
//! ```
//! use matrix_sorting::{Algorithm, Matrix};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let matrix = Matrix::random(4, 3, &mut rng);
//! let (sorted, stats) = matrix.sort_columns(Algorithm::Quick);
//! assert_eq!(sorted.rows(), 4);
//! assert!(stats.comparisons > 0);
//! ```

pub mod algorithms;
pub mod input;
pub mod matrix;
pub mod report;
pub mod stats;

pub use algorithms::Algorithm;
pub use matrix::Matrix;
pub use stats::SortStats;
