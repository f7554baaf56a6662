#![no_std]

// The padded transform buffers live on the heap, so alloc is always linked.
extern crate alloc;

// Enables the standard library only for tests,
// so you can run 'cargo test' on your PC normally.
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod fft1d;
pub mod fft2d;

pub use common::{ComplexMatrix, FftError, RealMatrix};
pub use fft1d::{fft, next_power_of_two};
pub use fft2d::{
    Fft2dC2CTrimmed, fft2d, fft2d_c2c_trim, fft2d_r2c_trim, ifft2d_c2c_trim, ifft2d_c2r_trim,
    r2c_reconstruct_full,
};
