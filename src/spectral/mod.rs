//! Spectral path: complex arithmetic, radix-2 FFT and periodic height fields.

mod complex;
mod fft;
mod field;

pub use complex::Complex;
pub use fft::{transform, transform_2d, transform_in_place};
pub use field::SpectralField;
