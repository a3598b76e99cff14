//! Minimal complex number value type for the radix-2 transform.

use std::ops::{Add, AddAssign, Mul, Sub};

/// Complex sample (double precision)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imaginary: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex::new(0.0, 0.0);

    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Build from magnitude and phase (radians)
    pub fn from_polar(magnitude: f64, phase: f64) -> Self {
        let (sin, cos) = phase.sin_cos();
        Self::new(magnitude * cos, magnitude * sin)
    }

    pub fn conj(self) -> Self {
        Self::new(self.real, -self.imaginary)
    }

    /// Magnitude |z|
    pub fn norm(self) -> f64 {
        self.real.hypot(self.imaginary)
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.real + rhs.real, self.imaginary + rhs.imaginary)
    }
}

impl AddAssign for Complex {
    fn add_assign(&mut self, rhs: Complex) {
        self.real += rhs.real;
        self.imaginary += rhs.imaginary;
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.real - rhs.real, self.imaginary - rhs.imaginary)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.real * rhs.real - self.imaginary * rhs.imaginary,
            self.real * rhs.imaginary + self.imaginary * rhs.real,
        )
    }
}
