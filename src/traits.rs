use core::fmt::{Debug, Display};
use num_traits::{Float, Num, NumCast, One, Zero};

/// Trait for types that can be stored in the arrays of this crate.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for real floating-point elements (`f32`, `f64`).
///
/// Required by everything that needs `sqrt`, `sin`, `abs`, etc.: the complex
/// type, the array maps and reductions, polynomials and piecewise functions.
pub trait FloatScalar: Scalar + Float + Display {
    /// Convert an `f64` constant into `Self`.
    ///
    /// Conversions that cannot be represented give NaN rather than panicking.
    #[inline]
    fn lit(v: f64) -> Self {
        <Self as NumCast>::from(v).unwrap_or_else(Self::nan)
    }

    /// Convert a length, count or index into `Self`.
    #[inline]
    fn from_len(n: usize) -> Self {
        <Self as NumCast>::from(n).unwrap_or_else(Self::nan)
    }
}

impl<T: Scalar + Float + Display> FloatScalar for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lit_and_from_len() {
        assert_eq!(f64::lit(0.25), 0.25);
        assert_eq!(f32::lit(1.5), 1.5_f32);
        assert_eq!(f64::from_len(7), 7.0);
    }
}
