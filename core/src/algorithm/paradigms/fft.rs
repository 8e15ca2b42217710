//! Radix-2 fast Fourier transform and polynomial multiplication
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::f64::consts::PI;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{AlgorithmError, AlgorithmResult};

/// Complex number in rectangular form
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// `e^{i theta}`
    pub fn from_angle(theta: f64) -> Self {
        Self::new(theta.cos(), theta.sin())
    }

    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    pub fn norm(self) -> f64 {
        self.re.hypot(self.im)
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::new(re, 0.0)
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

/// In-place iterative Cooley-Tukey; `sign` is -1 forward, +1 inverse
fn transform(values: &mut [Complex], sign: f64) {
    let n = values.len();

    // bit-reversal permutation
    let mut j = 0;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j |= bit;
        if i < j {
            values.swap(i, j);
        }
    }

    let mut len = 2;
    while len <= n {
        let w_len = Complex::from_angle(sign * 2.0 * PI / len as f64);
        for chunk in values.chunks_mut(len) {
            let (lo, hi) = chunk.split_at_mut(len / 2);
            let mut w = Complex::new(1.0, 0.0);
            for (a, b) in lo.iter_mut().zip(hi.iter_mut()) {
                let t = w * *b;
                *b = *a - t;
                *a = *a + t;
                w = w * w_len;
            }
        }
        len <<= 1;
    }
}

fn check_length(len: usize) -> AlgorithmResult<()> {
    if len == 0 || !len.is_power_of_two() {
        return Err(AlgorithmError::invalid_argument(format!(
            "transform length must be a power of two, got {}",
            len
        )));
    }
    Ok(())
}

/// Discrete Fourier transform `X_k = sum x_j e^{-2 pi i jk / n}`
///
/// # Errors
///
/// Returns `InvalidArgument` unless the length is a power of two.
pub fn fft(input: &[Complex]) -> AlgorithmResult<Vec<Complex>> {
    check_length(input.len())?;
    let mut values = input.to_vec();
    transform(&mut values, -1.0);
    Ok(values)
}

/// Inverse of [`fft`], scaled by `1/n`
pub fn inverse_fft(input: &[Complex]) -> AlgorithmResult<Vec<Complex>> {
    check_length(input.len())?;
    let mut values = input.to_vec();
    transform(&mut values, 1.0);
    let scale = values.len() as f64;
    for v in &mut values {
        v.re /= scale;
        v.im /= scale;
    }
    Ok(values)
}

/// Coefficients of the product polynomial, lowest degree first
///
/// Exact while the product coefficients stay well inside `f64` precision.
pub fn multiply_polynomials(a: &[i64], b: &[i64]) -> Vec<i64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let result_len = a.len() + b.len() - 1;
    let size = result_len.next_power_of_two();

    let pad = |coeffs: &[i64]| {
        let mut v: Vec<Complex> = coeffs.iter().map(|&c| Complex::from(c as f64)).collect();
        v.resize(size, Complex::default());
        v
    };
    let (mut fa, mut fb) = (pad(a), pad(b));
    transform(&mut fa, -1.0);
    transform(&mut fb, -1.0);
    let mut product: Vec<Complex> = fa.into_iter().zip(fb).map(|(x, y)| x * y).collect();
    transform(&mut product, 1.0);

    product
        .into_iter()
        .take(result_len)
        .map(|c| (c.re / size as f64).round() as i64)
        .collect()
}
