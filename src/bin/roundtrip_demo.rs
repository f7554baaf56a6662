// src/bin/roundtrip_demo.rs
//
// Round-trip accuracy demo: transform a Gaussian random matrix through
// the trimmed complex-to-complex and real-to-complex pathways and print
// the reconstruction error statistics.

use std::error::Error;

use num_complex::Complex64;
use rand_distr::{Distribution, Normal};

use rs_fft2d::{
    ComplexMatrix, RealMatrix, fft2d_c2c_trim, fft2d_r2c_trim, ifft2d_c2c_trim, ifft2d_c2r_trim,
};

const ROWS: usize = 1000;
const COLS: usize = 1000;

/// Bundles absolute & relative RMSE / median root-squared-error.
struct ErrorStats {
    rmse_abs: f64,
    medrse_abs: f64,
    rmse_rel: f64,
    medrse_rel: f64,
}

fn generate_gaussian_matrix(
    rows: usize,
    cols: usize,
    mean: f64,
    stddev: f64,
) -> Result<RealMatrix, Box<dyn Error>> {
    let normal = Normal::new(mean, stddev)?;
    let mut rng = rand::rng();

    Ok((0..rows)
        .map(|_| (0..cols).map(|_| normal.sample(&mut rng)).collect())
        .collect())
}

fn promote_to_complex(a: &RealMatrix) -> ComplexMatrix {
    a.iter()
        .map(|row| row.iter().map(|&x| Complex64::new(x, 0.0)).collect())
        .collect()
}

/// RMSE and median of the squared errors (as a root, so both come out in
/// the units of the input).
fn compute_two_stats(errors: &[f64]) -> (f64, f64) {
    let n = errors.len();
    let mut sq: Vec<f64> = errors.iter().map(|e| e * e).collect();

    let mean_sq = sq.iter().sum::<f64>() / n as f64;
    let rmse = mean_sq.sqrt();

    sq.sort_by(|a, b| a.total_cmp(b));
    let mut med = sq[n / 2];
    if n % 2 == 0 {
        med = 0.5 * (med + sq[n / 2 - 1]);
    }

    (rmse, med.sqrt())
}

fn evaluate_roundtrip(orig: &RealMatrix, rec: impl Fn(usize, usize) -> f64) -> ErrorStats {
    let mut abs_err = Vec::with_capacity(ROWS * COLS);
    let mut rel_err = Vec::with_capacity(ROWS * COLS);

    for (i, row) in orig.iter().enumerate() {
        for (j, &x) in row.iter().enumerate() {
            let e = rec(i, j) - x;
            abs_err.push(e);
            rel_err.push(e / x);
        }
    }

    let (rmse_abs, medrse_abs) = compute_two_stats(&abs_err);
    let (rmse_rel, medrse_rel) = compute_two_stats(&rel_err);
    ErrorStats {
        rmse_abs,
        medrse_abs,
        rmse_rel,
        medrse_rel,
    }
}

fn print_error_stats(label: &str, stats: &ErrorStats) {
    println!("{label}:");
    println!("  absolute RMSE   = {:e}", stats.rmse_abs);
    println!("  absolute MedRSE = {:e}", stats.medrse_abs);
    println!("  relative RMSE   = {:e}", stats.rmse_rel);
    println!("  relative MedRSE = {:e}", stats.medrse_rel);
    println!();
}

fn main() -> Result<(), Box<dyn Error>> {
    // 1) Generate A ~ N(1,1)
    let a = generate_gaussian_matrix(ROWS, COLS, 1.0, 1.0)?;

    // 2) c2c FFT + inverse using the trimmed interface
    let trimmed = fft2d_c2c_trim(&promote_to_complex(&a))?;
    let rec_c2c = ifft2d_c2c_trim(&trimmed)?;

    let stats_c2c = evaluate_roundtrip(&a, |i, j| rec_c2c[i][j].re);
    print_error_stats("c2c_trim round-trip errors", &stats_c2c);

    // The DC term lives in the (0,0) bin of the spectrum.
    println!("C[0][0] = {}  (~ sum of A)\n", trimmed.freq[0][0]);

    // ---- now the r2c pathway ----

    // 3) r2c FFT + inverse
    let half = fft2d_r2c_trim(&a)?;
    let rec_r2c = ifft2d_c2r_trim(&half, COLS)?;

    let stats_r2c = evaluate_roundtrip(&a, |i, j| rec_r2c[i][j]);
    print_error_stats("r2c round-trip errors", &stats_r2c);

    println!("R[0][0] = {}  (DC term again)", half[0][0]);

    Ok(())
}
