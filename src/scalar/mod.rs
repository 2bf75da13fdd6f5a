//! Scalar numeric helpers.
//!
//! Free functions generic over [`FloatScalar`] (f32/f64), no-std compatible.
//! None of them signal errors: out-of-domain inputs produce NaN or ±∞ the way
//! IEEE arithmetic does.
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`hypot`] | `sqrt(a² + b²)` without intermediate overflow |
//! | [`is_close`] | closeness test with default tolerances |
//! | [`fix`] | truncation toward zero |
//! | [`rem`] | remainder with the sign of the dividend |
//! | [`frexp`] / [`ldexp`] | mantissa/exponent decomposition and its inverse |
//! | [`asinh`] / [`acosh`] / [`atanh`] | inverse hyperbolic functions |
//!
//! # Example
//!
//! ```
//! use numkit::scalar::{hypot, is_close, frexp};
//!
//! assert_eq!(hypot(3.0_f64, 4.0), 5.0);
//! assert!(hypot(1e300_f64, 1e300).is_finite());
//! assert!(is_close(1.0_f64, 1.0 + 1e-9));
//! assert_eq!(frexp(8.0_f64), (0.5, 4));
//! ```


use crate::traits::FloatScalar;

/// 2π for `f64`.
pub const TWO_PI: f64 = 2.0 * core::f64::consts::PI;

/// Default absolute tolerance used by [`is_close`].
pub const DEFAULT_ABS_TOL: f64 = 1e-8;

/// Default relative tolerance used by [`is_close`].
pub const DEFAULT_REL_TOL: f64 = 1e-5;

/// Absolute and relative tolerances for closeness tests.
///
/// Two values `a` and `b` are close when `|a - b| <= abs + rel * |b|`.
/// The test is asymmetric in the same way as NumPy's `isclose`: `b` is the
/// reference value.
///
/// ```
/// use numkit::scalar::Tolerance;
///
/// let t = Tolerance::<f64>::default();
/// assert_eq!(t.abs, 1e-8);
/// assert_eq!(t.rel, 1e-5);
/// assert!(t.accepts(1.0, 1.000001));
///
/// let strict = Tolerance::absolute(1e-12);
/// assert_eq!(strict.rel, 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<T> {
    /// Absolute tolerance.
    pub abs: T,
    /// Relative tolerance, scaled by `|b|`.
    pub rel: T,
}

impl<T: FloatScalar> Tolerance<T> {
    /// Tolerance with both parts specified.
    #[inline]
    pub fn new(abs: T, rel: T) -> Self {
        Self { abs, rel }
    }

    /// Tolerance with the given absolute part and the default relative part.
    #[inline]
    pub fn absolute(abs: T) -> Self {
        Self {
            abs,
            rel: T::lit(DEFAULT_REL_TOL),
        }
    }

    /// Whether `a` is close to the reference `b`.
    #[inline]
    pub fn accepts(&self, a: T, b: T) -> bool {
        (a - b).abs() <= self.abs + self.rel * b.abs()
    }

    /// The same test with the distance and reference magnitude precomputed.
    #[inline]
    pub(crate) fn accepts_distance(&self, dist: T, ref_mag: T) -> bool {
        dist <= self.abs + self.rel * ref_mag
    }
}

impl<T: FloatScalar> Default for Tolerance<T> {
    fn default() -> Self {
        Self {
            abs: T::lit(DEFAULT_ABS_TOL),
            rel: T::lit(DEFAULT_REL_TOL),
        }
    }
}

/// `sqrt(a² + b²)` computed without overflow or underflow of the squares.
///
/// The larger operand is factored out before squaring the ratio. A NaN
/// operand gives NaN; otherwise an infinite operand gives +∞.
///
/// ```
/// use numkit::scalar::hypot;
/// assert!(hypot(f64::NAN, 0.0).is_nan());
/// assert_eq!(hypot(f64::INFINITY, f64::NEG_INFINITY), f64::INFINITY);
/// ```
#[inline]
pub fn hypot<T: FloatScalar>(a: T, b: T) -> T {
    if a.is_nan() || b.is_nan() {
        return T::nan();
    }
    if a.is_infinite() || b.is_infinite() {
        return T::infinity();
    }
    let (aa, ab) = (a.abs(), b.abs());
    if aa > ab {
        let r = b / a;
        aa * (T::one() + r * r).sqrt()
    } else if b != T::zero() {
        let r = a / b;
        ab * (T::one() + r * r).sqrt()
    } else {
        T::zero()
    }
}

/// `|a - b| <= 1e-8 + 1e-5 * |b|`.
#[inline]
pub fn is_close<T: FloatScalar>(a: T, b: T) -> bool {
    Tolerance::default().accepts(a, b)
}

/// Closeness with a caller-supplied absolute tolerance and the default
/// relative tolerance.
#[inline]
pub fn is_close_abs<T: FloatScalar>(a: T, b: T, abs_tol: T) -> bool {
    Tolerance::absolute(abs_tol).accepts(a, b)
}

/// Closeness with both tolerances supplied.
#[inline]
pub fn is_close_tol<T: FloatScalar>(a: T, b: T, tol: Tolerance<T>) -> bool {
    tol.accepts(a, b)
}

/// Round toward zero.
///
/// ```
/// use numkit::scalar::fix;
/// assert_eq!(fix(2.7_f64), 2.0);
/// assert_eq!(fix(-2.7_f64), -2.0);
/// ```
#[inline]
pub fn fix<T: FloatScalar>(x: T) -> T {
    if x <= T::zero() {
        x.ceil()
    } else {
        x.floor()
    }
}

/// Remainder after division, `a - b * fix(a / b)`.
///
/// The result has the sign of `a`. `b == 0` gives NaN.
///
/// ```
/// use numkit::scalar::rem;
/// assert_eq!(rem(5.0_f64, 3.0), 2.0);
/// assert_eq!(rem(-5.0_f64, 3.0), -2.0);
/// assert!(rem(1.0_f64, 0.0).is_nan());
/// ```
#[inline]
pub fn rem<T: FloatScalar>(a: T, b: T) -> T {
    if b == T::zero() {
        return T::nan();
    }
    a - b * fix(a / b)
}

/// Split `x` into a mantissa in `[0.5, 1)` (carrying the sign of `x`) and a
/// base-2 exponent, so that `x == m * 2^e`.
///
/// Zero maps to `(0, 0)`. NaN and ±∞ are returned unchanged with exponent -1.
pub fn frexp<T: FloatScalar>(x: T) -> (T, i32) {
    if x.is_nan() || x.is_infinite() {
        return (x, -1);
    }
    if x == T::zero() {
        return (T::zero(), 0);
    }
    let (mantissa, exponent, sign) = x.integer_decode();
    // x == sign * mantissa * 2^exponent, mantissa > 0
    let bits = (u64::BITS - mantissa.leading_zeros()) as i32;
    let m = T::lit(mantissa as f64) / T::lit(2.0).powi(bits);
    let m = if sign < 0 { -m } else { m };
    (m, i32::from(exponent) + bits)
}

/// Inverse of [`frexp`]: `m * 2^e`.
///
/// Large exponents are applied in steps so that `2^e` itself never
/// overflows or flushes to zero before the product would.
pub fn ldexp<T: FloatScalar>(m: T, e: i32) -> T {
    const STEP: i32 = 60;
    let two = T::lit(2.0);
    let (mut m, mut e) = (m, e);
    while e > STEP {
        m = m * two.powi(STEP);
        e -= STEP;
    }
    while e < -STEP {
        m = m * two.powi(-STEP);
        e += STEP;
    }
    m * two.powi(e)
}

/// Sign of `x`: -1, 0 or 1. NaN is returned unchanged.
#[inline]
pub fn sign<T: FloatScalar>(x: T) -> T {
    if x > T::zero() {
        T::one()
    } else if x < T::zero() {
        -T::one()
    } else {
        x
    }
}

/// `x * x`.
#[inline]
pub fn sqr<T: FloatScalar>(x: T) -> T {
    x * x
}

/// Round `x` to `decimals` places after the decimal point.
///
/// Negative `decimals` round to tens, hundreds, ...
#[inline]
pub fn round_to<T: FloatScalar>(x: T, decimals: i32) -> T {
    let scale = T::lit(10.0).powi(decimals);
    (x * scale).round() / scale
}

/// Inverse hyperbolic sine, `ln(x + sqrt(x² + 1))`.
///
/// Evaluated on `|x|` and mirrored so that large negative inputs keep full
/// precision.
#[inline]
pub fn asinh<T: FloatScalar>(x: T) -> T {
    let ax = x.abs();
    let r = (ax + hypot(ax, T::one())).ln();
    if x < T::zero() {
        -r
    } else {
        r
    }
}

/// Inverse hyperbolic cosine, `ln(x + sqrt(x² - 1))`. NaN for `x < 1`.
#[inline]
pub fn acosh<T: FloatScalar>(x: T) -> T {
    (x + (x * x - T::one()).sqrt()).ln()
}

/// Inverse hyperbolic tangent, `0.5 * ln((1 + x) / (1 - x))`.
///
/// `atanh(±1)` is ±∞ and `|x| > 1` is NaN.
#[inline]
pub fn atanh<T: FloatScalar>(x: T) -> T {
    T::lit(0.5) * ((T::one() + x) / (T::one() - x)).ln()
}
