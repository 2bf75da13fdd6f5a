//! Complex number value type.
//!
//! [`Complex<T>`] is a `Copy` pair of real and imaginary parts. Arithmetic
//! through the operator traits (`+ - * /`, unary `-`) and the named methods
//! (`exp`, `log`, `sqrt`, trig and hyperbolic functions, ...) returns new
//! values; the compound-assignment operators and the `*_in_place` methods
//! overwrite the receiver.
//!
//! Arithmetic edge cases never signal errors: division by zero, `log(0)` and
//! friends produce IEEE infinities and NaNs. Use [`Complex::is_finite`] to
//! check results where that matters.
//!
//! # Example
//!
//! ```
//! use numkit::Complex;
//!
//! let a = Complex::new(1.0, 2.0);
//! let b = Complex::new(3.0, -1.0);
//! assert_eq!(a + b, Complex::new(4.0, 1.0));
//! assert_eq!(a * b, Complex::new(5.0, 5.0));
//!
//! let mut c = a;
//! c *= b;
//! assert_eq!(c, a * b);
//!
//! let i = Complex::<f64>::i();
//! assert!((i * i).is_close(&Complex::new(-1.0, 0.0)));
//! ```

mod ops;
mod transcendental;

#[cfg(test)]
mod tests;

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::scalar::{hypot, Tolerance};
use crate::traits::FloatScalar;

/// Complex number `re + im·i`.
///
/// Equality is exact and bitwise on both parts (`f32`/`f64`): `0.0` and
/// `-0.0` differ, and a NaN equals a NaN with the same bit pattern. Use
/// [`is_close`](Complex::is_close) for tolerance-based comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct Complex<T = f64> {
    /// Real part.
    pub re: T,
    /// Imaginary part.
    pub im: T,
}

/// Double-precision complex number.
pub type Complex64 = Complex<f64>;

/// Single-precision complex number.
pub type Complex32 = Complex<f32>;

// ── Constructors ─────────────────────────────────────────────────────

impl<T: FloatScalar> Complex<T> {
    /// Create from real and imaginary parts.
    #[inline]
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    /// Real number `re + 0i`.
    #[inline]
    pub fn from_real(re: T) -> Self {
        Self { re, im: T::zero() }
    }

    /// Pure imaginary number `0 + im·i`.
    #[inline]
    pub fn from_imag(im: T) -> Self {
        Self { re: T::zero(), im }
    }

    /// Create from magnitude and phase: `r·(cos θ + i sin θ)`.
    ///
    /// ```
    /// use numkit::Complex;
    /// let z = Complex::from_polar(2.0, core::f64::consts::FRAC_PI_2);
    /// assert!(z.re.abs() < 1e-15);
    /// assert!((z.im - 2.0).abs() < 1e-15);
    /// ```
    #[inline]
    pub fn from_polar(r: T, theta: T) -> Self {
        let (s, c) = theta.sin_cos();
        Self { re: r * c, im: r * s }
    }

    /// `0 + 0i`.
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// `1 + 0i`.
    #[inline]
    pub fn one() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// Imaginary unit `0 + 1i`.
    #[inline]
    pub fn i() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// `NaN + NaN·i`.
    #[inline]
    pub fn nan() -> Self {
        Self::new(T::nan(), T::nan())
    }
}

// ── Core operations ──────────────────────────────────────────────────

impl<T: FloatScalar> Complex<T> {
    /// Magnitude `|z|`, computed with [`hypot`] so it never overflows for
    /// finite parts.
    #[inline]
    pub fn abs(&self) -> T {
        hypot(self.re, self.im)
    }

    /// Squared magnitude `re² + im²`.
    #[inline]
    pub fn norm_sqr(&self) -> T {
        self.re * self.re + self.im * self.im
    }

    /// Phase angle `atan2(im, re)` in `(-π, π]`.
    #[inline]
    pub fn arg(&self) -> T {
        self.im.atan2(self.re)
    }

    /// Magnitude and phase.
    #[inline]
    pub fn to_polar(&self) -> (T, T) {
        (self.abs(), self.arg())
    }

    /// Complex conjugate `re - im·i`.
    #[inline]
    pub fn conj(&self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Conjugate the receiver.
    #[inline]
    pub fn conj_in_place(&mut self) {
        self.im = -self.im;
    }

    /// Reciprocal `conj(z) / |z|²`.
    ///
    /// Zero gives infinite/NaN parts, no guard is applied.
    #[inline]
    pub fn invert(&self) -> Self {
        let n = self.norm_sqr();
        Self::new(self.re / n, -self.im / n)
    }

    /// Replace the receiver with its reciprocal.
    #[inline]
    pub fn invert_in_place(&mut self) {
        *self = self.invert();
    }

    /// Negate the receiver.
    #[inline]
    pub fn neg_in_place(&mut self) {
        self.re = -self.re;
        self.im = -self.im;
    }

    /// `self + (re + im·i)`.
    #[inline]
    pub fn add_parts(&self, re: T, im: T) -> Self {
        Self::new(self.re + re, self.im + im)
    }

    /// `self - (re + im·i)`.
    #[inline]
    pub fn sub_parts(&self, re: T, im: T) -> Self {
        Self::new(self.re - re, self.im - im)
    }

    /// `self · (re + im·i)`.
    #[inline]
    pub fn mul_parts(&self, re: T, im: T) -> Self {
        *self * Self::new(re, im)
    }

    /// `self / (re + im·i)`.
    #[inline]
    pub fn div_parts(&self, re: T, im: T) -> Self {
        *self / Self::new(re, im)
    }

    /// Both parts finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Either part NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// Either part infinite (and neither NaN).
    #[inline]
    pub fn is_infinite(&self) -> bool {
        !self.is_nan() && (self.re.is_infinite() || self.im.is_infinite())
    }

    /// Exactly zero (either sign) in both parts.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.re == T::zero() && self.im == T::zero()
    }
}

// ── Comparison ───────────────────────────────────────────────────────

impl<T: FloatScalar> Complex<T> {
    /// Lexicographic ordering: real part first, then imaginary part.
    ///
    /// Unordered (NaN) components compare as equal.
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use numkit::Complex;
    /// let a = Complex::new(1.0, 5.0);
    /// let b = Complex::new(2.0, -5.0);
    /// assert_eq!(a.compare_to(&b), Ordering::Less);
    /// assert_eq!(a.compare_to(&Complex::new(1.0, 4.0)), Ordering::Greater);
    /// ```
    pub fn compare_to(&self, other: &Self) -> Ordering {
        if self.re < other.re {
            Ordering::Less
        } else if self.re > other.re {
            Ordering::Greater
        } else if self.im < other.im {
            Ordering::Less
        } else if self.im > other.im {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Ordering by magnitude.
    ///
    /// Identical values are `Equal` without computing magnitudes; NaN
    /// magnitudes compare as equal.
    pub fn compare_to_abs(&self, other: &Self) -> Ordering {
        if self.bits_eq(other) {
            return Ordering::Equal;
        }
        self.abs()
            .partial_cmp(&other.abs())
            .unwrap_or(Ordering::Equal)
    }

    /// Closeness with the default tolerances: `|a - b| <= 1e-8 + 1e-5·|b|`.
    #[inline]
    pub fn is_close(&self, other: &Self) -> bool {
        self.is_close_tol(other, Tolerance::default())
    }

    /// Closeness with the given absolute tolerance and the default relative
    /// one.
    #[inline]
    pub fn is_close_abs(&self, other: &Self, abs_tol: T) -> bool {
        self.is_close_tol(other, Tolerance::absolute(abs_tol))
    }

    /// Closeness with explicit tolerances, measured by the magnitude of the
    /// difference. A NaN part on either side is never close.
    #[inline]
    pub fn is_close_tol(&self, other: &Self, tol: Tolerance<T>) -> bool {
        tol.accepts_distance((*self - *other).abs(), other.abs())
    }

    /// Bitwise equality of both parts via the float's integer decoding.
    #[inline]
    fn bits_eq(&self, other: &Self) -> bool {
        self.re.integer_decode() == other.re.integer_decode()
            && self.im.integer_decode() == other.im.integer_decode()
    }
}

macro_rules! impl_bitwise_eq_hash {
    ($($t:ty),*) => {
        $(
            impl PartialEq for Complex<$t> {
                #[inline]
                fn eq(&self, other: &Self) -> bool {
                    self.re.to_bits() == other.re.to_bits()
                        && self.im.to_bits() == other.im.to_bits()
                }
            }

            impl Eq for Complex<$t> {}

            impl Complex<$t> {
                /// Hash code of the bit patterns, imaginary part first:
                /// `37 · (17 · bits(im) + bits(re))`.
                #[inline]
                pub fn hash_code(&self) -> u64 {
                    let re = u64::from(self.re.to_bits());
                    let im = u64::from(self.im.to_bits());
                    37u64.wrapping_mul(17u64.wrapping_mul(im).wrapping_add(re))
                }
            }

            impl Hash for Complex<$t> {
                fn hash<H: Hasher>(&self, state: &mut H) {
                    state.write_u64(self.hash_code());
                }
            }
        )*
    };
}

impl_bitwise_eq_hash!(f32, f64);

// ── Conversions ──────────────────────────────────────────────────────

impl<T: FloatScalar> From<T> for Complex<T> {
    #[inline]
    fn from(re: T) -> Self {
        Self::from_real(re)
    }
}

impl<T: FloatScalar> From<(T, T)> for Complex<T> {
    #[inline]
    fn from((re, im): (T, T)) -> Self {
        Self::new(re, im)
    }
}

impl<T: FloatScalar> From<Complex<T>> for (T, T) {
    #[inline]
    fn from(z: Complex<T>) -> Self {
        (z.re, z.im)
    }
}

#[cfg(feature = "num-complex")]
impl<T: FloatScalar> From<num_complex::Complex<T>> for Complex<T> {
    #[inline]
    fn from(z: num_complex::Complex<T>) -> Self {
        Self::new(z.re, z.im)
    }
}

#[cfg(feature = "num-complex")]
impl<T: FloatScalar> From<Complex<T>> for num_complex::Complex<T> {
    #[inline]
    fn from(z: Complex<T>) -> Self {
        num_complex::Complex::new(z.re, z.im)
    }
}

// ── Display ──────────────────────────────────────────────────────────

impl<T: FloatScalar> core::fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.im.is_sign_negative() && !self.im.is_nan() {
            write!(f, "{} - {}i", self.re, -self.im)
        } else {
            write!(f, "{} + {}i", self.re, self.im)
        }
    }
}
