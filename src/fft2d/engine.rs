// src/fft2d/engine.rs

use alloc::vec;
use alloc::vec::Vec;
use num_complex::Complex64;

use crate::common::{ComplexMatrix, FftError};
use crate::fft1d::{fft, next_power_of_two};

/// Checks that the matrix is rectangular and returns (rows, cols).
/// An empty matrix is (0, 0).
pub(crate) fn dims<T>(input: &[Vec<T>]) -> Result<(usize, usize), FftError> {
    let rows = input.len();
    let cols = if rows > 0 { input[0].len() } else { 0 };
    if input.iter().any(|row| row.len() != cols) {
        return Err(FftError::RaggedMatrix);
    }
    Ok((rows, cols))
}

/// 2D FFT over a zero-padded copy of the input.
///
/// Pads rows and columns up to powers of two, runs the 1D transform on
/// every row and then on every column, and returns the full padded M×N
/// buffer. Cropping back to the caller's size is left to the trim
/// wrappers.
pub fn fft2d(input: &ComplexMatrix, invert: bool) -> Result<ComplexMatrix, FftError> {
    let (rows, cols) = dims(input)?;
    let pad_rows = next_power_of_two(rows);
    let pad_cols = next_power_of_two(cols);

    // Pad to M×N, input in the top-left block.
    let mut a = vec![vec![Complex64::new(0.0, 0.0); pad_cols]; pad_rows];
    for (dst, src) in a.iter_mut().zip(input.iter()) {
        dst[..cols].copy_from_slice(src);
    }

    // FFT rows. Every row must be done before the column pass starts:
    // the column pass reads the row-transformed values.
    for row in a.iter_mut() {
        fft(row, invert)?;
    }

    // FFT columns, through a contiguous scratch column.
    let mut column = vec![Complex64::new(0.0, 0.0); pad_rows];
    for j in 0..pad_cols {
        for (cell, row) in column.iter_mut().zip(a.iter()) {
            *cell = row[j];
        }
        fft(&mut column, invert)?;
        for (cell, row) in column.iter().zip(a.iter_mut()) {
            row[j] = *cell;
        }
    }

    Ok(a)
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
