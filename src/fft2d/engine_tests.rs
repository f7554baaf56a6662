use super::*;
use crate::common::{ComplexMatrix, FftError};
use crate::fft1d::next_power_of_two;
use alloc::vec;
use num_complex::Complex64;

const EPSILON: f64 = 1e-9;

fn assert_cplx_eq(a: Complex64, b: Complex64) {
    assert!(
        (a - b).l1_norm() < EPSILON,
        "Complex mismatch: {} vs {}",
        a,
        b
    );
}

fn c(re: f64) -> Complex64 {
    Complex64::new(re, 0.0)
}

#[test]
fn test_dims() {
    let a = vec![vec![c(1.0), c(2.0)], vec![c(3.0), c(4.0)]];
    assert_eq!(dims(&a), Ok((2, 2)));

    let empty: ComplexMatrix = vec![];
    assert_eq!(dims(&empty), Ok((0, 0)));

    let ragged = vec![vec![c(1.0), c(2.0)], vec![c(3.0)]];
    assert_eq!(dims(&ragged), Err(FftError::RaggedMatrix));
}

#[test]
fn test_fft2d_pads_to_powers_of_two() {
    // 2×3 pads to 2×4.
    let a = vec![
        vec![c(1.0), c(2.0), c(3.0)],
        vec![c(4.0), c(5.0), c(6.0)],
    ];

    let spectrum = fft2d(&a, false).unwrap();

    assert_eq!(spectrum.len(), next_power_of_two(a.len()));
    assert_eq!(spectrum[0].len(), next_power_of_two(a[0].len()));
}

#[test]
fn test_fft2d_impulse_is_flat_spectrum() {
    // An impulse at (0,0) transforms to an all-ones spectrum.
    let mut a = vec![vec![c(0.0); 2]; 2];
    a[0][0] = c(1.0);

    let spectrum = fft2d(&a, false).unwrap();

    for row in spectrum.iter() {
        for &x in row.iter() {
            assert_cplx_eq(x, c(1.0));
        }
    }
}

#[test]
fn test_fft2d_dc_bin_is_sum() {
    let a = vec![vec![c(1.0), c(2.0)], vec![c(3.0), c(4.0)]];

    let spectrum = fft2d(&a, false).unwrap();

    assert_cplx_eq(spectrum[0][0], c(10.0));
}

#[test]
fn test_fft2d_padded_roundtrip() {
    let a = vec![
        vec![c(1.0), c(2.0), c(3.0)],
        vec![c(4.0), c(5.0), c(6.0)],
    ];

    let spectrum = fft2d(&a, false).unwrap();
    let back = fft2d(&spectrum, true).unwrap();

    // Still the padded shape, but the top-left block must match A.
    assert_eq!(back.len(), 2);
    assert_eq!(back[0].len(), 4);
    for i in 0..a.len() {
        for j in 0..a[0].len() {
            assert_cplx_eq(back[i][j], a[i][j]);
        }
    }
}

#[test]
fn test_fft2d_roundtrip_with_imaginary_parts() {
    let a = vec![
        vec![Complex64::new(1.0, -1.0), Complex64::new(0.5, 2.0)],
        vec![Complex64::new(-3.0, 0.25), Complex64::new(4.0, -0.75)],
        vec![Complex64::new(0.0, 1.0), Complex64::new(-1.5, -2.5)],
    ];

    let spectrum = fft2d(&a, false).unwrap();
    assert_eq!(spectrum.len(), 4);
    assert_eq!(spectrum[0].len(), 2);

    let back = fft2d(&spectrum, true).unwrap();
    for i in 0..a.len() {
        for j in 0..a[0].len() {
            assert_cplx_eq(back[i][j], a[i][j]);
        }
    }
}

#[test]
fn test_fft2d_rejects_ragged_input() {
    let ragged = vec![vec![c(1.0), c(2.0)], vec![c(3.0)]];
    assert_eq!(fft2d(&ragged, false), Err(FftError::RaggedMatrix));
}
