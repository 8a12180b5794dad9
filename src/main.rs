//! Matrix Column Sorting Comparison
//!
//! This application generates a random integer matrix and sorts every column
//! independently with five classic comparison-based algorithms:
//! - **Bubble Sort**: O(n²) - adjacent-pair exchanges
//! - **Selection Sort**: O(n²) comparisons, at most n-1 swaps
//! - **Insertion Sort**: O(n²) worst case, fast on nearly-sorted columns
//! - **Shell Sort**: gapped insertion sort, n/2 halving gaps
//! - **Quick Sort**: recursive Lomuto partition, last-element pivot
//!
//! It prints the original matrix, each algorithm's column-sorted result, and
//! a summary table of comparison/swap totals. The totals are always computed
//! from the original unsorted matrix so every algorithm is measured against
//! identical input.

use std::io::{self, Write};

use matrix_sorting::algorithms::Algorithm;
use matrix_sorting::input::read_dimension;
use matrix_sorting::matrix::Matrix;
use matrix_sorting::report;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let (rows, cols) = {
        let mut input = stdin.lock();
        let mut output = stdout.lock();
        let rows = read_dimension("Enter number of rows M: ", &mut input, &mut output)?;
        let cols = read_dimension("Enter number of columns N: ", &mut input, &mut output)?;
        (rows, cols)
    };

    let mut rng = rand::thread_rng();
    let matrix = Matrix::random(rows, cols, &mut rng);

    run(&matrix, &mut stdout.lock())
}

/// Print the original matrix, each algorithm's result, and the summary table.
fn run<W: Write>(matrix: &Matrix, output: &mut W) -> io::Result<()> {
    writeln!(output, "\nOriginal matrix:")?;
    write!(output, "{}", matrix)?;
    writeln!(output)?;

    for algorithm in Algorithm::ALL {
        let (sorted, _) = matrix.sort_columns(algorithm);
        writeln!(output, "Matrix sorted by {}:", algorithm.name())?;
        write!(output, "{}", sorted)?;
        writeln!(output)?;
    }

    write!(output, "{}", report::comparison_table(matrix))?;
    Ok(())
}
