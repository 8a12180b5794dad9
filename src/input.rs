//! Validated Dimension Input
//!
//! Interactive prompting for matrix dimensions. Non-numeric and non-positive
//! input is never fatal: the prompt repeats until a positive integer arrives.
//! Reader and writer are generic so tests can drive the loop with in-memory
//! buffers instead of a terminal.

use std::io::{self, BufRead, Write};

const INVALID_SIZE_MESSAGE: &str = "Error: Size must be a positive integer.";

/// Prompt on `output` and read lines from `input` until one parses as a
/// positive integer.
///
/// Returns an error only for genuine I/O failures, including EOF before a
/// valid size was entered.
pub fn read_dimension<R, W>(prompt: &str, input: &mut R, output: &mut W) -> io::Result<usize>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before a valid size was entered",
            ));
        }

        match line.trim().parse::<usize>() {
            Ok(size) if size > 0 => return Ok(size),
            _ => writeln!(output, "{}", INVALID_SIZE_MESSAGE)?,
        }
    }
}
