//! Periodic height field synthesized from a frequency-domain spectrum.

use super::complex::Complex;
use super::fft::forward_2d;
use crate::error::{Result, SynthError};

/// Square, toroidally wrapping height field and the spectrum that drives it.
///
/// Spectrum layout is row-major with row = y bin and column = x bin. A bin
/// `A·e^{iθ}` at `(mx, my)` contributes `A·cos(2π(mx·x + my·y)/size + θ)`.
#[derive(Debug, Clone)]
pub struct SpectralField {
    size: usize,
    spectrum: Vec<Complex>,
    heights: Vec<f64>,
    scratch: Vec<Complex>,
}

impl SpectralField {
    /// Create a flat field; `size` must be a power of two (≥ 2)
    pub fn new(size: usize) -> Result<Self> {
        if size < 2 || !size.is_power_of_two() {
            return Err(SynthError::NonPowerOfTwo { len: size });
        }
        let bins = size * size;
        Ok(Self {
            size,
            spectrum: vec![Complex::ZERO; bins],
            heights: vec![0.0; bins],
            scratch: vec![Complex::ZERO; bins],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn spectrum_mut(&mut self) -> &mut [Complex] {
        &mut self.spectrum
    }

    /// Copy `spectrum` in and rebuild heights
    pub fn synthesize(&mut self, spectrum: &[Complex]) -> Result<()> {
        if spectrum.len() != self.spectrum.len() {
            return Err(SynthError::SpectrumSizeMismatch {
                expected: self.spectrum.len(),
                actual: spectrum.len(),
            });
        }
        self.spectrum.copy_from_slice(spectrum);
        self.rebuild();
        Ok(())
    }

    /// Rebuild heights from the current spectrum.
    ///
    /// Runs the forward transform on the conjugated spectrum; its real part
    /// equals the unnormalized inverse transform.
    pub fn rebuild(&mut self) {
        for (dst, src) in self.scratch.iter_mut().zip(&self.spectrum) {
            *dst = src.conj();
        }
        forward_2d(&mut self.scratch, self.size);

        for (h, c) in self.heights.iter_mut().zip(&self.scratch) {
            *h = c.real;
        }
    }

    /// Height at integer lattice point, wrapping both axes
    pub fn at(&self, x: i64, y: i64) -> f64 {
        let n = self.size as i64;
        let xi = x.rem_euclid(n) as usize;
        let yi = y.rem_euclid(n) as usize;
        self.heights[yi * self.size + xi]
    }

    /// Bilinear sample with toroidal wrap
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let x0 = x.floor();
        let y0 = y.floor();
        let fx = x - x0;
        let fy = y - y0;
        let (xi, yi) = (x0 as i64, y0 as i64);

        let h00 = self.at(xi, yi);
        let h10 = self.at(xi + 1, yi);
        let h01 = self.at(xi, yi + 1);
        let h11 = self.at(xi + 1, yi + 1);

        let top = h00 + (h10 - h00) * fx;
        let bottom = h01 + (h11 - h01) * fx;
        top + (bottom - top) * fy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    #[test]
    fn test_rejects_bad_sizes() {
        assert!(SpectralField::new(0).is_err());
        assert!(SpectralField::new(1).is_err());
        assert!(SpectralField::new(12).is_err());
        assert!(SpectralField::new(16).is_ok());
    }

    #[test]
    fn test_single_bin_is_cosine() {
        let size = 16;
        let mut field = SpectralField::new(size).unwrap();
        let (mx, my) = (2, 1);
        let theta = 0.4;
        field.spectrum_mut()[my * size + mx] = Complex::from_polar(1.5, theta);
        field.rebuild();

        for y in 0..size as i64 {
            for x in 0..size as i64 {
                let phase = TAU * (mx as f64 * x as f64 + my as f64 * y as f64) / size as f64;
                let expected = 1.5 * (phase + theta).cos();
                assert!((field.at(x, y) - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_sample_wraps_and_interpolates() {
        let size = 4;
        let mut field = SpectralField::new(size).unwrap();
        let mut spectrum = vec![Complex::ZERO; size * size];
        spectrum[0] = Complex::new(3.0, 0.0);
        field.synthesize(&spectrum).unwrap();

        // DC only: flat at 3 everywhere, including outside the tile
        assert!((field.sample(-7.25, 13.5) - 3.0).abs() < 1e-12);

        let mut spectrum = vec![Complex::ZERO; size * size];
        spectrum[1] = Complex::new(1.0, 0.0);
        field.synthesize(&spectrum).unwrap();
        assert!((field.sample(4.0, 0.0) - field.at(0, 0)).abs() < 1e-12);
        let mid = field.sample(0.5, 0.0);
        assert!((mid - 0.5 * (field.at(0, 0) + field.at(1, 0))).abs() < 1e-12);
    }

    #[test]
    fn test_spectrum_length_checked() {
        let mut field = SpectralField::new(8).unwrap();
        assert_eq!(
            field.synthesize(&[Complex::ZERO; 8]),
            Err(SynthError::SpectrumSizeMismatch {
                expected: 64,
                actual: 8
            })
        );
    }
}
