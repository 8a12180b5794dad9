//! Comparison Table Rendering
//!
//! Renders the final fixed-width summary table: one row per algorithm with
//! its comparison and swap totals across all matrix columns. The totals are
//! always computed fresh from the matrix passed in, so feeding it the
//! original unsorted matrix measures every algorithm against identical input
//! regardless of what the display step sorted earlier.

use std::fmt::Write;

use crate::algorithms::Algorithm;
use crate::matrix::Matrix;
use crate::stats::SortStats;

const METHOD_WIDTH: usize = 14;
const COMPARISONS_WIDTH: usize = 12;
const SWAPS_WIDTH: usize = 6;

/// Per-algorithm comparison/swap totals for one matrix, registry order.
pub fn algorithm_totals(matrix: &Matrix) -> Vec<(Algorithm, SortStats)> {
    Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            let (_, stats) = matrix.sort_columns(algorithm);
            (algorithm, stats)
        })
        .collect()
}

/// Render the `Method | Comparisons | Swaps` table for `matrix`.
pub fn comparison_table(matrix: &Matrix) -> String {
    let mut output = String::new();

    let border = format!(
        "+{}+{}+{}+",
        "-".repeat(METHOD_WIDTH + 2),
        "-".repeat(COMPARISONS_WIDTH + 2),
        "-".repeat(SWAPS_WIDTH + 2)
    );

    writeln!(output, "{}", border).unwrap();
    writeln!(
        output,
        "| {:<mw$} | {:>cw$} | {:>sw$} |",
        "Method",
        "Comparisons",
        "Swaps",
        mw = METHOD_WIDTH,
        cw = COMPARISONS_WIDTH,
        sw = SWAPS_WIDTH
    )
    .unwrap();
    writeln!(output, "{}", border).unwrap();

    for (algorithm, stats) in algorithm_totals(matrix) {
        writeln!(
            output,
            "| {:<mw$} | {:>cw$} | {:>sw$} |",
            algorithm.name(),
            stats.comparisons,
            stats.swaps,
            mw = METHOD_WIDTH,
            cw = COMPARISONS_WIDTH,
            sw = SWAPS_WIDTH
        )
        .unwrap();
    }

    writeln!(output, "{}", border).unwrap();
    output
}
