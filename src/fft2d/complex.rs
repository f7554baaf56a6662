// src/fft2d/complex.rs

use super::engine::{dims, fft2d};
use crate::common::{ComplexMatrix, FftError};

/// Forward transform bundled with the size metadata needed to invert it.
///
/// `freq` holds the full padded pad_rows×pad_cols spectrum; the original
/// size is only applied when the inverse crops the spatial result back
/// to orig_rows×orig_cols.
#[derive(Debug, Clone, PartialEq)]
pub struct Fft2dC2CTrimmed {
    pub freq: ComplexMatrix,
    pub orig_rows: usize,
    pub orig_cols: usize,
    pub pad_rows: usize,
    pub pad_cols: usize,
}

/// Complex-to-complex 2D FFT of an arbitrary-size matrix.
///
/// Runs the full padded forward pass and packages the spectrum together
/// with the original and padded dimensions, so the inverse can recover
/// exactly the original R×C block.
pub fn fft2d_c2c_trim(input: &ComplexMatrix) -> Result<Fft2dC2CTrimmed, FftError> {
    let (orig_rows, orig_cols) = dims(input)?;

    let freq = fft2d(input, false)?;
    let pad_rows = freq.len();
    let pad_cols = freq[0].len();

    Ok(Fft2dC2CTrimmed {
        freq,
        orig_rows,
        orig_cols,
        pad_rows,
        pad_cols,
    })
}

/// Inverse of [`fft2d_c2c_trim`]: full padded inverse pass, then crop to
/// the original orig_rows×orig_cols block.
pub fn ifft2d_c2c_trim(trimmed: &Fft2dC2CTrimmed) -> Result<ComplexMatrix, FftError> {
    let spatial = fft2d(&trimmed.freq, true)?;

    if trimmed.orig_rows > spatial.len() || trimmed.orig_cols > spatial[0].len() {
        return Err(FftError::SizeMismatch);
    }

    Ok(spatial[..trimmed.orig_rows]
        .iter()
        .map(|row| row[..trimmed.orig_cols].to_vec())
        .collect())
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
