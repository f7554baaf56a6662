// src/fft1d/core.rs

use core::f64::consts::PI;
use num_complex::Complex64;

use crate::common::FftError;

/// Returns the smallest power of two ≥ n.
///
/// For n = 0 this is 1: there is no zero-length power of two, so the
/// minimal representable buffer length is used.
pub fn next_power_of_two(n: usize) -> usize {
    let mut p = 1;
    while p < n {
        p <<= 1;
    }
    p
}

/// Agnostic helper for sin/cos (std intrinsics or libm).
fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    return (angle.sin(), angle.cos());

    #[cfg(not(feature = "std"))]
    return (libm::sin(angle), libm::cos(angle));
}

/// Permutes the buffer into bit-reversed index order.
/// The permutation depends only on n, never on the sample values.
pub(crate) fn bit_reverse_permute(buffer: &mut [Complex64]) {
    let n = buffer.len();

    // j percorre os índices em ordem bit-reversa enquanto i avança em
    // ordem natural; trocamos só quando i < j para não desfazer a troca.
    let mut j = 0;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j |= bit;
        if i < j {
            buffer.swap(i, j);
        }
    }
}

/// Iterative radix-2 DIT butterflies over a bit-reversed buffer.
///
/// The stage twiddle starts at 1 and advances by incremental
/// multiplication with e^{∓2πi/len}, so a small rounding drift
/// accumulates over each stage.
///
/// The compiler removes the INVERSE branches completely because the flag
/// is constant at compile time.
pub(crate) fn radix_2_dit_fft_core<const INVERSE: bool>(buffer: &mut [Complex64]) {
    let n = buffer.len();

    bit_reverse_permute(buffer);

    let mut len = 2;
    while len <= n {
        let angle = if INVERSE {
            2.0 * PI / (len as f64)
        } else {
            -2.0 * PI / (len as f64)
        };
        let (sin, cos) = sin_cos(angle);
        let wlen = Complex64::new(cos, sin);

        for chunk in buffer.chunks_exact_mut(len) {
            let (lo, hi) = chunk.split_at_mut(len / 2);
            let mut w = Complex64::new(1.0, 0.0);
            for (a, b) in lo.iter_mut().zip(hi.iter_mut()) {
                let u = *a;
                let v = *b * w;
                *a = u + v;
                *b = u - v;
                w *= wlen;
            }
        }

        len <<= 1;
    }

    // The 1/n scaling belongs to the inverse transform only.
    if INVERSE {
        let scale = 1.0 / (n as f64);
        for x in buffer.iter_mut() {
            *x = x.scale(scale);
        }
    }
}

/// In-place Cooley–Tukey FFT:
/// - forward if invert == false
/// - inverse (and divides by n) if invert == true
///
/// Lengths 0 and 1 are identity transforms; any other length must be a
/// power of two. The caller pads beforehand, this function never does.
pub fn fft(buffer: &mut [Complex64], invert: bool) -> Result<(), FftError> {
    let n = buffer.len();
    if n < 2 {
        return Ok(());
    }
    if !n.is_power_of_two() {
        return Err(FftError::NotPowerOfTwo);
    }

    if invert {
        radix_2_dit_fft_core::<true>(buffer);
    } else {
        radix_2_dit_fft_core::<false>(buffer);
    }

    Ok(())
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
