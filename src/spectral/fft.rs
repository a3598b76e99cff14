//! Radix-2 Cooley-Tukey transform over complex samples.
//!
//! Output uses standard DFT ordering (bin 0 = DC). No inverse, windowing or
//! normalization is applied here; callers add those if they need them.

use std::f64::consts::TAU;

use super::complex::Complex;
use crate::error::{Result, SynthError};

/// Forward transform, returning a new buffer.
///
/// Recursive even/odd split with twiddle factors `e^{-2πik/n}`. Sequences of
/// length 0 or 1 come back unchanged.
pub fn transform(samples: &[Complex]) -> Result<Vec<Complex>> {
    check_len(samples.len())?;
    let mut data = samples.to_vec();
    forward_recursive(&mut data);
    Ok(data)
}

/// Forward transform in place (iterative, bit-reversal ordering).
///
/// Same contract as [`transform`] without per-level allocation.
pub fn transform_in_place(data: &mut [Complex]) -> Result<()> {
    check_len(data.len())?;
    forward_in_place(data);
    Ok(())
}

/// 2D forward transform of a row-major `size × size` buffer (rows, then columns)
pub fn transform_2d(data: &mut [Complex], size: usize) -> Result<()> {
    check_len(size)?;
    // An overflowing size can never match a real buffer
    if size.checked_mul(size) != Some(data.len()) {
        return Err(SynthError::SpectrumSizeMismatch {
            expected: size.saturating_mul(size),
            actual: data.len(),
        });
    }
    forward_2d(data, size);
    Ok(())
}

/// Caller guarantees a power-of-two length
pub(crate) fn forward_in_place(data: &mut [Complex]) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    let bits = n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - bits);
        if j > i {
            data.swap(i, j);
        }
    }

    let mut len = 2;
    while len <= n {
        let half = len / 2;
        let angle_step = -TAU / len as f64;
        for start in (0..n).step_by(len) {
            for k in 0..half {
                let twiddle = Complex::from_polar(1.0, angle_step * k as f64);
                let t = twiddle * data[start + k + half];
                let e = data[start + k];
                data[start + k] = e + t;
                data[start + k + half] = e - t;
            }
        }
        len <<= 1;
    }
}

/// Caller guarantees `size` is a power of two and `data.len() == size * size`
pub(crate) fn forward_2d(data: &mut [Complex], size: usize) {
    if size == 0 {
        return;
    }

    for row in data.chunks_exact_mut(size) {
        forward_in_place(row);
    }

    let mut column = vec![Complex::ZERO; size];
    for x in 0..size {
        for (y, sample) in column.iter_mut().enumerate() {
            *sample = data[y * size + x];
        }
        forward_in_place(&mut column);
        for (y, sample) in column.iter().enumerate() {
            data[y * size + x] = *sample;
        }
    }
}

fn check_len(len: usize) -> Result<()> {
    if len > 1 && !len.is_power_of_two() {
        return Err(SynthError::NonPowerOfTwo { len });
    }
    Ok(())
}

fn forward_recursive(data: &mut [Complex]) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    let half = n / 2;
    let mut even: Vec<Complex> = data.iter().step_by(2).copied().collect();
    let mut odd: Vec<Complex> = data.iter().skip(1).step_by(2).copied().collect();

    forward_recursive(&mut even);
    forward_recursive(&mut odd);

    for k in 0..half {
        let t = Complex::from_polar(1.0, -TAU * k as f64 / n as f64) * odd[k];
        data[k] = even[k] + t;
        data[k + half] = even[k] - t;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use rustfft::num_complex::Complex64;
    use rustfft::FftPlanner;

    fn random_samples(n: usize, seed: u64) -> Vec<Complex> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..n)
            .map(|_| Complex::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
            .collect()
    }

    /// Direct O(n²) DFT used as the reference
    fn naive_dft(samples: &[Complex]) -> Vec<Complex> {
        let n = samples.len();
        (0..n)
            .map(|k| {
                let mut acc = Complex::ZERO;
                for (t, sample) in samples.iter().enumerate() {
                    let angle = -TAU * (k * t) as f64 / n as f64;
                    acc += *sample * Complex::from_polar(1.0, angle);
                }
                acc
            })
            .collect()
    }

    fn assert_close(actual: &[Complex], expected: &[Complex]) {
        assert_eq!(actual.len(), expected.len());
        let scale = expected.iter().map(|c| c.norm()).fold(1.0, f64::max);
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            let err = (*a - *e).norm();
            assert!(
                err <= 1e-9 * scale,
                "bin {}: got {:?}, expected {:?}",
                i,
                a,
                e
            );
        }
    }

    #[test]
    fn test_matches_naive_dft_for_powers_of_two() {
        for log2 in 0..=8 {
            let n = 1 << log2;
            let samples = random_samples(n, 7 + log2 as u64);
            let out = transform(&samples).unwrap();
            assert_close(&out, &naive_dft(&samples));
        }
    }

    #[test]
    fn test_matches_rustfft() {
        let samples = random_samples(256, 99);
        let out = transform(&samples).unwrap();

        let mut buffer: Vec<Complex64> = samples
            .iter()
            .map(|c| Complex64::new(c.real, c.imaginary))
            .collect();
        let mut planner = FftPlanner::<f64>::new();
        planner.plan_fft_forward(buffer.len()).process(&mut buffer);

        let expected: Vec<Complex> = buffer.iter().map(|c| Complex::new(c.re, c.im)).collect();
        assert_close(&out, &expected);
    }

    #[test]
    fn test_single_sample_unchanged() {
        let samples = [Complex::new(0.25, -3.0)];
        assert_eq!(transform(&samples).unwrap(), samples.to_vec());

        let mut in_place = samples;
        transform_in_place(&mut in_place).unwrap();
        assert_eq!(in_place, samples);

        assert!(transform(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_non_power_of_two() {
        let samples = random_samples(6, 1);
        assert_eq!(
            transform(&samples),
            Err(SynthError::NonPowerOfTwo { len: 6 })
        );

        let mut samples = random_samples(12, 1);
        assert_eq!(
            transform_in_place(&mut samples),
            Err(SynthError::NonPowerOfTwo { len: 12 })
        );
    }

    #[test]
    fn test_in_place_matches_recursive() {
        for n in [2, 4, 32, 512] {
            let samples = random_samples(n, n as u64);
            let expected = transform(&samples).unwrap();
            let mut data = samples.clone();
            transform_in_place(&mut data).unwrap();
            assert_close(&data, &expected);
        }
    }

    #[test]
    fn test_dc_and_single_tone() {
        // Constant signal lands entirely in bin 0
        let constant = vec![Complex::new(2.0, 0.0); 8];
        let out = transform(&constant).unwrap();
        assert!((out[0].real - 16.0).abs() < 1e-12);
        assert!(out[1..].iter().all(|c| c.norm() < 1e-12));

        // e^{2πi·3t/16} lands in bin 3 with magnitude n
        let n = 16;
        let tone: Vec<Complex> = (0..n)
            .map(|t| Complex::from_polar(1.0, TAU * 3.0 * t as f64 / n as f64))
            .collect();
        let out = transform(&tone).unwrap();
        for (k, c) in out.iter().enumerate() {
            let expected = if k == 3 { n as f64 } else { 0.0 };
            assert!((c.norm() - expected).abs() < 1e-9, "bin {}", k);
        }
    }

    #[test]
    fn test_2d_matches_separable_naive() {
        let size = 8;
        let samples = random_samples(size * size, 5);
        let mut data = samples.clone();
        transform_2d(&mut data, size).unwrap();

        // Naive 2D DFT
        let mut expected = vec![Complex::ZERO; size * size];
        for ky in 0..size {
            for kx in 0..size {
                let mut acc = Complex::ZERO;
                for y in 0..size {
                    for x in 0..size {
                        let angle = -TAU * ((kx * x + ky * y) as f64) / size as f64;
                        acc += samples[y * size + x] * Complex::from_polar(1.0, angle);
                    }
                }
                expected[ky * size + kx] = acc;
            }
        }
        assert_close(&data, &expected);
    }

    #[test]
    fn test_2d_rejects_wrong_buffer() {
        let mut data = vec![Complex::ZERO; 10];
        assert_eq!(
            transform_2d(&mut data, 4),
            Err(SynthError::SpectrumSizeMismatch {
                expected: 16,
                actual: 10
            })
        );
        let mut data = vec![Complex::ZERO; 9];
        assert!(transform_2d(&mut data, 3).is_err());
    }

    #[test]
    fn test_2d_huge_size_is_an_error() {
        let size = 1usize << (usize::BITS / 2);
        let mut data = vec![Complex::ZERO; 4];
        assert_eq!(
            transform_2d(&mut data, size),
            Err(SynthError::SpectrumSizeMismatch {
                expected: usize::MAX,
                actual: 4
            })
        );
    }
}
