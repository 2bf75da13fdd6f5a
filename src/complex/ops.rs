use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::FloatScalar;

use super::Complex;

// ── Complex ⊕ Complex ────────────────────────────────────────────────

impl<T: FloatScalar> Add for Complex<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<T: FloatScalar> Sub for Complex<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<T: FloatScalar> Mul for Complex<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl<T: FloatScalar> Div for Complex<T> {
    type Output = Self;

    /// Smith's algorithm: scale by the larger component of the divisor so
    /// that `|rhs|²` is never formed.
    #[inline]
    fn div(self, rhs: Self) -> Self {
        let (a, b, c, d) = (self.re, self.im, rhs.re, rhs.im);
        if c.abs() < d.abs() {
            let q = c / d;
            let den = c * q + d;
            Self::new((a * q + b) / den, (b * q - a) / den)
        } else {
            let q = d / c;
            let den = d * q + c;
            Self::new((b * q + a) / den, (b - a * q) / den)
        }
    }
}

impl<T: FloatScalar> Neg for Complex<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

// ── Complex ⊕ real ───────────────────────────────────────────────────

impl<T: FloatScalar> Add<T> for Complex<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: T) -> Self {
        Self::new(self.re + rhs, self.im)
    }
}

impl<T: FloatScalar> Sub<T> for Complex<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: T) -> Self {
        Self::new(self.re - rhs, self.im)
    }
}

impl<T: FloatScalar> Mul<T> for Complex<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.re * rhs, self.im * rhs)
    }
}

impl<T: FloatScalar> Div<T> for Complex<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.re / rhs, self.im / rhs)
    }
}

// ── real ⊕ Complex ───────────────────────────────────────────────────

macro_rules! impl_real_lhs {
    ($($t:ty),*) => {
        $(
            impl Add<Complex<$t>> for $t {
                type Output = Complex<$t>;

                #[inline]
                fn add(self, rhs: Complex<$t>) -> Complex<$t> {
                    Complex::new(self + rhs.re, rhs.im)
                }
            }

            impl Sub<Complex<$t>> for $t {
                type Output = Complex<$t>;

                #[inline]
                fn sub(self, rhs: Complex<$t>) -> Complex<$t> {
                    Complex::new(self - rhs.re, -rhs.im)
                }
            }

            impl Mul<Complex<$t>> for $t {
                type Output = Complex<$t>;

                #[inline]
                fn mul(self, rhs: Complex<$t>) -> Complex<$t> {
                    Complex::new(self * rhs.re, self * rhs.im)
                }
            }

            impl Div<Complex<$t>> for $t {
                type Output = Complex<$t>;

                #[inline]
                fn div(self, rhs: Complex<$t>) -> Complex<$t> {
                    Complex::from_real(self) / rhs
                }
            }
        )*
    };
}

impl_real_lhs!(f32, f64);

// ── In-place ─────────────────────────────────────────────────────────

impl<T: FloatScalar> AddAssign for Complex<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.re = self.re + rhs.re;
        self.im = self.im + rhs.im;
    }
}

impl<T: FloatScalar> SubAssign for Complex<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.re = self.re - rhs.re;
        self.im = self.im - rhs.im;
    }
}

impl<T: FloatScalar> MulAssign for Complex<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: FloatScalar> DivAssign for Complex<T> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<T: FloatScalar> AddAssign<T> for Complex<T> {
    #[inline]
    fn add_assign(&mut self, rhs: T) {
        self.re = self.re + rhs;
    }
}

impl<T: FloatScalar> SubAssign<T> for Complex<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: T) {
        self.re = self.re - rhs;
    }
}

impl<T: FloatScalar> MulAssign<T> for Complex<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.re = self.re * rhs;
        self.im = self.im * rhs;
    }
}

impl<T: FloatScalar> DivAssign<T> for Complex<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.re = self.re / rhs;
        self.im = self.im / rhs;
    }
}

// ── Iterator folds ───────────────────────────────────────────────────

impl<T: FloatScalar> Sum for Complex<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, z| acc + z)
    }
}

impl<'a, T: FloatScalar> Sum<&'a Complex<T>> for Complex<T> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, z| acc + *z)
    }
}

impl<T: FloatScalar> Product for Complex<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, z| acc * z)
    }
}

impl<'a, T: FloatScalar> Product<&'a Complex<T>> for Complex<T> {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, z| acc * *z)
    }
}

// ── num-traits identities ────────────────────────────────────────────

impl<T: FloatScalar> num_traits::Zero for Complex<T> {
    #[inline]
    fn zero() -> Self {
        Complex::new(T::zero(), T::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.re == T::zero() && self.im == T::zero()
    }
}

impl<T: FloatScalar> num_traits::One for Complex<T> {
    #[inline]
    fn one() -> Self {
        Complex::new(T::one(), T::zero())
    }
}
