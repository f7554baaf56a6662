// src/common.rs

use alloc::vec::Vec;
use num_complex::Complex64;

/// Matrix of complex samples, stored as rows. Rectangular by contract.
pub type ComplexMatrix = Vec<Vec<Complex64>>;

/// Matrix of real samples, stored as rows. Rectangular by contract.
pub type RealMatrix = Vec<Vec<f64>>;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FftError {
    SizeMismatch,
    NotPowerOfTwo,
    RaggedMatrix,
}

use core::fmt;

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::SizeMismatch => write!(f, "Requested size does not match the data"),
            FftError::NotPowerOfTwo => write!(f, "Size must be a power of 2"),
            FftError::RaggedMatrix => write!(f, "Matrix rows must all have the same length"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}
