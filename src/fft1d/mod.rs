mod core;

pub use self::core::{fft, next_power_of_two};
pub use crate::common::FftError;
