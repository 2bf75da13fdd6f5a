//! Complex array utilities over slices of [`Complex`].
//!
//! Mirrors [`crate::array`]: pure functions return fresh `Vec`s, the
//! `*_in_place` variants overwrite their first argument, and every binary
//! operation validates lengths before producing output or mutating.
//!
//! Split storage (separate real and imaginary buffers) is handled by
//! [`zip`], [`unzip`] and [`SplitComplex`].
//!
//! # Example
//!
//! ```
//! use numkit::{carray, Complex};
//!
//! let z = carray::zip(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
//! assert_eq!(z, vec![Complex::new(1.0, 0.0), Complex::new(0.0, 1.0)]);
//!
//! let sq = carray::mul(&z, &z).unwrap();
//! assert_eq!(carray::real(&sq), vec![1.0, -1.0]);
//! assert!(carray::zip(&[1.0], &[1.0, 2.0]).is_err());
//! ```

#[cfg(test)]
mod tests;

use alloc::vec::Vec;

use crate::array::{self, zip_with, zip_with_in_place};
use crate::complex::Complex;
use crate::dimension::{check_same_len, Result};
use crate::scalar::Tolerance;
use crate::traits::FloatScalar;

// ── Split storage ───────────────────────────────────────────────────

/// A complex array held as two parallel real buffers.
///
/// The constructor guarantees both buffers have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitComplex<T> {
    re: Vec<T>,
    im: Vec<T>,
}

impl<T: FloatScalar> SplitComplex<T> {
    /// Pair up real and imaginary buffers.
    ///
    /// Returns [`DimensionError::LengthMismatch`](crate::DimensionError::LengthMismatch)
    /// if their lengths differ.
    pub fn new(re: Vec<T>, im: Vec<T>) -> Result<Self> {
        check_same_len(&re, &im)?;
        Ok(Self { re, im })
    }

    /// Real parts.
    pub fn re(&self) -> &[T] {
        &self.re
    }

    /// Imaginary parts.
    pub fn im(&self) -> &[T] {
        &self.im
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.re.len()
    }

    /// Whether there are no elements.
    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }

    /// Interleave into a vector of [`Complex`].
    pub fn to_complex(&self) -> Vec<Complex<T>> {
        self.re
            .iter()
            .zip(self.im.iter())
            .map(|(&re, &im)| Complex::new(re, im))
            .collect()
    }

    /// Consume into the `(re, im)` buffers.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.re, self.im)
    }
}

/// Combine real and imaginary buffers into complex values.
pub fn zip<T: FloatScalar>(re: &[T], im: &[T]) -> Result<Vec<Complex<T>>> {
    zip_with(re, im, Complex::new)
}

/// Split complex values into real and imaginary buffers.
pub fn unzip<T: FloatScalar>(z: &[Complex<T>]) -> SplitComplex<T> {
    SplitComplex {
        re: real(z),
        im: imag(z),
    }
}

/// Promote real values to complex with zero imaginary part.
pub fn from_real<T: FloatScalar>(x: &[T]) -> Vec<Complex<T>> {
    array::map(x, Complex::from_real)
}

// ── Component extraction ────────────────────────────────────────────

/// Real parts.
pub fn real<T: FloatScalar>(z: &[Complex<T>]) -> Vec<T> {
    array::map(z, |c| c.re)
}

/// Imaginary parts.
pub fn imag<T: FloatScalar>(z: &[Complex<T>]) -> Vec<T> {
    array::map(z, |c| c.im)
}

/// Magnitudes.
pub fn abs<T: FloatScalar>(z: &[Complex<T>]) -> Vec<T> {
    array::map(z, |c| c.abs())
}

/// Arguments in `(-π, π]`.
pub fn arg<T: FloatScalar>(z: &[Complex<T>]) -> Vec<T> {
    array::map(z, |c| c.arg())
}

/// Conjugates.
pub fn conj<T: FloatScalar>(z: &[Complex<T>]) -> Vec<Complex<T>> {
    array::map(z, |c| c.conj())
}

/// Conjugate every element in place.
pub fn conj_in_place<T: FloatScalar>(z: &mut [Complex<T>]) {
    z.iter_mut().for_each(Complex::conj_in_place);
}

// ── Element-wise arithmetic ─────────────────────────────────────────

/// `a[i] + b[i]`.
pub fn add<T: FloatScalar>(a: &[Complex<T>], b: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
    zip_with(a, b, |x, y| x + y)
}

/// `a[i] - b[i]`.
pub fn sub<T: FloatScalar>(a: &[Complex<T>], b: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
    zip_with(a, b, |x, y| x - y)
}

/// `a[i] * b[i]`.
pub fn mul<T: FloatScalar>(a: &[Complex<T>], b: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
    zip_with(a, b, |x, y| x * y)
}

/// `a[i] / b[i]`.
pub fn div<T: FloatScalar>(a: &[Complex<T>], b: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
    zip_with(a, b, |x, y| x / y)
}

/// `a[i] += b[i]`.
pub fn add_in_place<T: FloatScalar>(a: &mut [Complex<T>], b: &[Complex<T>]) -> Result<()> {
    zip_with_in_place(a, b, |x, y| x + y)
}

/// `a[i] -= b[i]`.
pub fn sub_in_place<T: FloatScalar>(a: &mut [Complex<T>], b: &[Complex<T>]) -> Result<()> {
    zip_with_in_place(a, b, |x, y| x - y)
}

/// `a[i] *= b[i]`.
pub fn mul_in_place<T: FloatScalar>(a: &mut [Complex<T>], b: &[Complex<T>]) -> Result<()> {
    zip_with_in_place(a, b, |x, y| x * y)
}

/// `a[i] /= b[i]`.
pub fn div_in_place<T: FloatScalar>(a: &mut [Complex<T>], b: &[Complex<T>]) -> Result<()> {
    zip_with_in_place(a, b, |x, y| x / y)
}

/// `a[i] * s`.
pub fn scale<T: FloatScalar>(a: &[Complex<T>], s: Complex<T>) -> Vec<Complex<T>> {
    array::map(a, |x| x * s)
}

// ── Transcendental maps ─────────────────────────────────────────────

/// Element-wise complex exponential.
pub fn exp<T: FloatScalar>(z: &[Complex<T>]) -> Vec<Complex<T>> {
    array::map(z, |c| c.exp())
}

/// Element-wise principal logarithm.
pub fn log<T: FloatScalar>(z: &[Complex<T>]) -> Vec<Complex<T>> {
    array::map(z, |c| c.log())
}

/// Element-wise principal square root.
pub fn sqrt<T: FloatScalar>(z: &[Complex<T>]) -> Vec<Complex<T>> {
    array::map(z, |c| c.sqrt())
}

/// Element-wise complex sine.
pub fn sin<T: FloatScalar>(z: &[Complex<T>]) -> Vec<Complex<T>> {
    array::map(z, |c| c.sin())
}

/// Element-wise complex cosine.
pub fn cos<T: FloatScalar>(z: &[Complex<T>]) -> Vec<Complex<T>> {
    array::map(z, |c| c.cos())
}

// ── Reductions ──────────────────────────────────────────────────────

/// Sum of all elements.
pub fn sum<T: FloatScalar>(z: &[Complex<T>]) -> Complex<T> {
    z.iter().sum()
}

/// Product of all elements.
pub fn product<T: FloatScalar>(z: &[Complex<T>]) -> Complex<T> {
    z.iter().product()
}

/// Arithmetic mean. Both parts are NaN for an empty slice.
pub fn mean<T: FloatScalar>(z: &[Complex<T>]) -> Complex<T> {
    sum(z) / T::from_len(z.len())
}

/// Whether every `a[i]` is close to `b[i]`, measured by `|a[i] - b[i]|`.
pub fn all_close<T: FloatScalar>(
    a: &[Complex<T>],
    b: &[Complex<T>],
    tol: Tolerance<T>,
) -> Result<bool> {
    check_same_len(a, b)?;
    Ok(a.iter().zip(b.iter()).all(|(x, y)| x.is_close_tol(y, tol)))
}

// ── Structure ───────────────────────────────────────────────────────

/// Full discrete convolution, `len(a) + len(b) - 1` elements.
///
/// ```
/// use numkit::{carray, Complex};
/// let i: Complex<f64> = Complex::i();
/// let r = carray::convolve(&[Complex::one(), i], &[Complex::one(), -i]);
/// assert_eq!(r, vec![Complex::one(), Complex::zero(), Complex::one()]);
/// ```
pub fn convolve<T: FloatScalar>(a: &[Complex<T>], b: &[Complex<T>]) -> Vec<Complex<T>> {
    array::convolve(a, b)
}

/// Concatenate the rows of a rectangular 2D complex array.
pub fn flatten<T: FloatScalar, R: AsRef<[Complex<T>]>>(rows: &[R]) -> Result<Vec<Complex<T>>> {
    array::flatten(rows)
}

/// An independent copy of `z`.
pub fn deep_copy<T: FloatScalar>(z: &[Complex<T>]) -> Vec<Complex<T>> {
    z.to_vec()
}

/// An independent copy of a 2D complex array. Rows may differ in length.
pub fn deep_copy_2d<T: FloatScalar, R: AsRef<[Complex<T>]>>(rows: &[R]) -> Vec<Vec<Complex<T>>> {
    rows.iter().map(|r| r.as_ref().to_vec()).collect()
}
