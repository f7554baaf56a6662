pub mod complex;
pub mod real;
mod engine;

pub use crate::common::{ComplexMatrix, FftError, RealMatrix};
pub use complex::{Fft2dC2CTrimmed, fft2d_c2c_trim, ifft2d_c2c_trim};
pub use engine::fft2d;
pub use real::{fft2d_r2c_trim, ifft2d_c2r_trim, r2c_reconstruct_full};
