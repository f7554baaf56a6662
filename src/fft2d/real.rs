// src/fft2d/real.rs

use alloc::vec;
use num_complex::Complex64;

use super::engine::{dims, fft2d};
use crate::common::{ComplexMatrix, FftError, RealMatrix};

/// Promotes a real matrix to complex with zero imaginary part.
fn promote_to_complex(input: &RealMatrix) -> ComplexMatrix {
    input
        .iter()
        .map(|row| row.iter().map(|&x| Complex64::new(x, 0.0)).collect())
        .collect()
}

/// Real-to-complex 2D FFT keeping only the non-redundant half-spectrum.
///
/// The input is promoted to complex, run through the full padded forward
/// pass, and every row is cropped to its first N/2+1 columns. The dropped
/// columns carry no information: the spectrum of a real signal is
/// Hermitian-symmetric, see [`r2c_reconstruct_full`].
pub fn fft2d_r2c_trim(input: &RealMatrix) -> Result<ComplexMatrix, FftError> {
    let full = fft2d(&promote_to_complex(input), false)?;

    let pad_cols = full[0].len();
    let half_cols = pad_cols / 2 + 1;

    Ok(full
        .into_iter()
        .map(|mut row| {
            row.truncate(half_cols);
            row
        })
        .collect())
}

/// Expands a half-spectrum of shape M×(N/2+1) back to the full M×N
/// spectrum through Hermitian symmetry:
///
///   full[i][j] = conj(half[(M-i) mod M][(N-j) mod N])   for j ≥ N/2+1
///
/// N is inferred from the half width as 2·(width−1). The inferred M and N
/// must be the padded power-of-two sizes the forward trim produced.
pub fn r2c_reconstruct_full(half: &ComplexMatrix) -> Result<ComplexMatrix, FftError> {
    let (pad_rows, half_cols) = dims(half)?;
    if half_cols == 0 {
        return Err(FftError::SizeMismatch);
    }
    let pad_cols = 2 * (half_cols - 1);
    if !pad_rows.is_power_of_two() || !pad_cols.is_power_of_two() {
        return Err(FftError::NotPowerOfTwo);
    }

    let mut full = vec![vec![Complex64::new(0.0, 0.0); pad_cols]; pad_rows];
    for i in 0..pad_rows {
        full[i][..half_cols].copy_from_slice(&half[i]);
        for j in half_cols..pad_cols {
            let ii = (pad_rows - i) % pad_rows;
            let jj = pad_cols - j;
            full[i][j] = half[ii][jj].conj();
        }
    }

    Ok(full)
}

/// Inverse of [`fft2d_r2c_trim`].
///
/// Rebuilds the full Hermitian spectrum, runs the full padded inverse
/// pass, and returns the real part of the first `orig_cols` columns of
/// all M rows.
pub fn ifft2d_c2r_trim(half: &ComplexMatrix, orig_cols: usize) -> Result<RealMatrix, FftError> {
    let full = r2c_reconstruct_full(half)?;
    let spatial = fft2d(&full, true)?;

    if orig_cols > spatial[0].len() {
        return Err(FftError::SizeMismatch);
    }

    Ok(spatial
        .iter()
        .map(|row| row[..orig_cols].iter().map(|c| c.re).collect())
        .collect())
}

#[cfg(test)]
#[path = "real_tests.rs"]
mod tests;
