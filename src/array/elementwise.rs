use alloc::vec::Vec;

use crate::dimension::{check_same_len, Result};
use crate::traits::FloatScalar;

// ── Shared kernels ──────────────────────────────────────────────────

/// Combine two equal-length slices element by element into a new vector.
pub(crate) fn zip_with<A: Copy, B: Copy, U>(
    a: &[A],
    b: &[B],
    f: impl Fn(A, B) -> U,
) -> Result<Vec<U>> {
    check_same_len(a, b)?;
    Ok(a.iter().zip(b.iter()).map(|(&x, &y)| f(x, y)).collect())
}

/// Combine `b` into `a` element by element. `a` is untouched on mismatch.
pub(crate) fn zip_with_in_place<A: Copy, B: Copy>(
    a: &mut [A],
    b: &[B],
    f: impl Fn(A, B) -> A,
) -> Result<()> {
    check_same_len(a, b)?;
    for (x, &y) in a.iter_mut().zip(b.iter()) {
        *x = f(*x, y);
    }
    Ok(())
}

// ── Binary element-wise ─────────────────────────────────────────────

/// `a[i] + b[i]`.
pub fn add<T: FloatScalar>(a: &[T], b: &[T]) -> Result<Vec<T>> {
    zip_with(a, b, |x, y| x + y)
}

/// `a[i] - b[i]`.
pub fn sub<T: FloatScalar>(a: &[T], b: &[T]) -> Result<Vec<T>> {
    zip_with(a, b, |x, y| x - y)
}

/// `a[i] * b[i]`.
pub fn mul<T: FloatScalar>(a: &[T], b: &[T]) -> Result<Vec<T>> {
    zip_with(a, b, |x, y| x * y)
}

/// `a[i] / b[i]`. Division by zero follows IEEE rules.
pub fn div<T: FloatScalar>(a: &[T], b: &[T]) -> Result<Vec<T>> {
    zip_with(a, b, |x, y| x / y)
}

/// `a[i] += b[i]`.
pub fn add_in_place<T: FloatScalar>(a: &mut [T], b: &[T]) -> Result<()> {
    zip_with_in_place(a, b, |x, y| x + y)
}

/// `a[i] -= b[i]`.
pub fn sub_in_place<T: FloatScalar>(a: &mut [T], b: &[T]) -> Result<()> {
    zip_with_in_place(a, b, |x, y| x - y)
}

/// `a[i] *= b[i]`.
pub fn mul_in_place<T: FloatScalar>(a: &mut [T], b: &[T]) -> Result<()> {
    zip_with_in_place(a, b, |x, y| x * y)
}

/// `a[i] /= b[i]`.
pub fn div_in_place<T: FloatScalar>(a: &mut [T], b: &[T]) -> Result<()> {
    zip_with_in_place(a, b, |x, y| x / y)
}

// ── Scalar broadcast ────────────────────────────────────────────────

/// `a[i] + s`.
pub fn add_scalar<T: FloatScalar>(a: &[T], s: T) -> Vec<T> {
    map(a, |x| x + s)
}

/// `a[i] * s`.
pub fn mul_scalar<T: FloatScalar>(a: &[T], s: T) -> Vec<T> {
    map(a, |x| x * s)
}

/// `a[i] += s`.
pub fn add_scalar_in_place<T: FloatScalar>(a: &mut [T], s: T) {
    map_in_place(a, |x| x + s);
}

/// `a[i] *= s`.
pub fn mul_scalar_in_place<T: FloatScalar>(a: &mut [T], s: T) {
    map_in_place(a, |x| x * s);
}

/// `-a[i]`.
pub fn negate<T: FloatScalar>(a: &[T]) -> Vec<T> {
    map(a, |x| -x)
}

// ── Maps ────────────────────────────────────────────────────────────

/// Apply `f` to every element, producing a new vector.
///
/// ```
/// use numkit::array::map;
/// let r = map(&[1.0_f64, 4.0, 9.0], |x| x.sqrt());
/// assert_eq!(r, vec![1.0, 2.0, 3.0]);
/// ```
pub fn map<T: Copy, U>(a: &[T], f: impl Fn(T) -> U) -> Vec<U> {
    a.iter().map(|&x| f(x)).collect()
}

/// Apply `f` to every element in place.
pub fn map_in_place<T: Copy>(a: &mut [T], f: impl Fn(T) -> T) {
    for x in a.iter_mut() {
        *x = f(*x);
    }
}

/// Element-wise sine.
pub fn sin<T: FloatScalar>(a: &[T]) -> Vec<T> {
    map(a, T::sin)
}

/// Element-wise cosine.
pub fn cos<T: FloatScalar>(a: &[T]) -> Vec<T> {
    map(a, T::cos)
}

/// Element-wise tangent.
pub fn tan<T: FloatScalar>(a: &[T]) -> Vec<T> {
    map(a, T::tan)
}

/// Element-wise hyperbolic sine.
pub fn sinh<T: FloatScalar>(a: &[T]) -> Vec<T> {
    map(a, T::sinh)
}

/// Element-wise hyperbolic cosine.
pub fn cosh<T: FloatScalar>(a: &[T]) -> Vec<T> {
    map(a, T::cosh)
}

/// Element-wise hyperbolic tangent.
pub fn tanh<T: FloatScalar>(a: &[T]) -> Vec<T> {
    map(a, T::tanh)
}

/// Element-wise natural exponential.
pub fn exp<T: FloatScalar>(a: &[T]) -> Vec<T> {
    map(a, T::exp)
}

/// Element-wise natural logarithm.
pub fn log<T: FloatScalar>(a: &[T]) -> Vec<T> {
    map(a, T::ln)
}

/// Element-wise base-2 logarithm.
pub fn log2<T: FloatScalar>(a: &[T]) -> Vec<T> {
    map(a, T::log2)
}

/// Element-wise base-10 logarithm.
pub fn log10<T: FloatScalar>(a: &[T]) -> Vec<T> {
    map(a, T::log10)
}

/// Element-wise square root.
pub fn sqrt<T: FloatScalar>(a: &[T]) -> Vec<T> {
    map(a, T::sqrt)
}

/// Element-wise absolute value.
pub fn abs<T: FloatScalar>(a: &[T]) -> Vec<T> {
    map(a, T::abs)
}
