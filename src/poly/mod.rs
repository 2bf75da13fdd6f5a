//! Dense real polynomials.
//!
//! Coefficients are stored highest power first, so `[2, -3, 1]` is
//! `2x² - 3x + 1`. Leading zeros are trimmed on construction; the zero
//! polynomial is stored as `[0]` and has degree 0.
//!
//! # Example
//!
//! ```
//! use numkit::Polynomial;
//!
//! let p = Polynomial::from_roots(&[1.0, 0.5]) * 2.0;
//! assert_eq!(p.coeffs(), &[2.0, -3.0, 1.0]);
//! assert_eq!(p.to_string(), "2x^2 - 3x + 1");
//! assert_eq!(p.eval(3.0), 10.0);
//! assert_eq!(p.derivative().coeffs(), &[4.0, -3.0]);
//! ```


use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use crate::array;
use crate::complex::Complex;
use crate::piecewise::Function;
use crate::traits::FloatScalar;

/// A polynomial with real coefficients, highest power first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<T> {
    coeffs: Vec<T>,
}

impl<T: FloatScalar> Polynomial<T> {
    /// Build from coefficients ordered highest power first.
    ///
    /// Leading zeros are dropped. An empty or all-zero input gives the zero
    /// polynomial.
    pub fn new(coeffs: Vec<T>) -> Self {
        let mut coeffs = coeffs;
        let lead = coeffs
            .iter()
            .position(|c| *c != T::zero())
            .unwrap_or(coeffs.len());
        coeffs.drain(..lead);
        if coeffs.is_empty() {
            coeffs.push(T::zero());
        }
        Self { coeffs }
    }

    /// The constant polynomial `c`.
    pub fn constant(c: T) -> Self {
        Self::new(vec![c])
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self::constant(T::zero())
    }

    /// The monic polynomial `(x - r₀)(x - r₁)…` with the given roots.
    ///
    /// No roots gives the constant `1`.
    pub fn from_roots(roots: &[T]) -> Self {
        let coeffs = roots.iter().fold(vec![T::one()], |acc, &r| {
            array::convolve(&acc, &[T::one(), -r])
        });
        Self::new(coeffs)
    }

    /// Coefficients, highest power first.
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// Highest power with a nonzero coefficient (0 for constants).
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Whether every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0] == T::zero()
    }

    /// Evaluate at `x` by Horner's rule.
    pub fn eval(&self, x: T) -> T {
        self.coeffs
            .iter()
            .fold(T::zero(), |acc, &c| acc * x + c)
    }

    /// Evaluate at a complex point by Horner's rule.
    ///
    /// ```
    /// use numkit::{Complex, Polynomial};
    /// // x² + 1 vanishes at ±i
    /// let p = Polynomial::new(vec![1.0, 0.0, 1.0]);
    /// assert_eq!(p.eval_complex(Complex::i()), Complex::new(0.0, 0.0));
    /// ```
    pub fn eval_complex(&self, z: Complex<T>) -> Complex<T> {
        self.coeffs
            .iter()
            .fold(Complex::zero(), |acc, &c| acc * z + c)
    }

    /// Evaluate at every point of `xs`.
    pub fn eval_many(&self, xs: &[T]) -> Vec<T> {
        array::map(xs, |x| self.eval(x))
    }

    /// The first derivative.
    pub fn derivative(&self) -> Self {
        let n = self.degree();
        if n == 0 {
            return Self::zero();
        }
        let coeffs = self.coeffs[..n]
            .iter()
            .enumerate()
            .map(|(i, &c)| c * T::from_len(n - i))
            .collect();
        Self::new(coeffs)
    }

    /// The antiderivative whose value at zero is `constant`.
    pub fn integral(&self, constant: T) -> Self {
        let n = self.coeffs.len();
        let mut coeffs: Vec<T> = self
            .coeffs
            .iter()
            .enumerate()
            .map(|(i, &c)| c / T::from_len(n - i))
            .collect();
        coeffs.push(constant);
        Self::new(coeffs)
    }

    /// Coefficient of `x^power` (zero above the degree).
    pub fn coeff(&self, power: usize) -> T {
        let n = self.coeffs.len();
        if power < n {
            self.coeffs[n - 1 - power]
        } else {
            T::zero()
        }
    }

    /// Add or subtract, aligning coefficients at the constant term.
    fn combine(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Self {
        let n = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..n)
            .rev()
            .map(|p| f(self.coeff(p), rhs.coeff(p)))
            .collect();
        Self::new(coeffs)
    }
}

impl<T: FloatScalar> Function<T> for Polynomial<T> {
    fn eval(&self, x: T) -> T {
        Polynomial::eval(self, x)
    }
}

// ── Arithmetic ──────────────────────────────────────────────────────

impl<T: FloatScalar> Add for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, rhs: Self) -> Polynomial<T> {
        self.combine(rhs, |a, b| a + b)
    }
}

impl<T: FloatScalar> Sub for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, rhs: Self) -> Polynomial<T> {
        self.combine(rhs, |a, b| a - b)
    }
}

impl<T: FloatScalar> Mul for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: Self) -> Polynomial<T> {
        Polynomial::new(array::convolve(&self.coeffs, &rhs.coeffs))
    }
}

impl<T: FloatScalar> Mul<T> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: T) -> Polynomial<T> {
        Polynomial::new(array::mul_scalar(&self.coeffs, rhs))
    }
}

impl<T: FloatScalar> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        Polynomial::new(array::negate(&self.coeffs))
    }
}

macro_rules! forward_owned_binop {
    ($($trait:ident :: $method:ident),*) => {
        $(
            impl<T: FloatScalar> $trait for Polynomial<T> {
                type Output = Polynomial<T>;

                #[inline]
                fn $method(self, rhs: Self) -> Polynomial<T> {
                    <&Polynomial<T> as $trait>::$method(&self, &rhs)
                }
            }
        )*
    };
}

forward_owned_binop!(Add::add, Sub::sub, Mul::mul);

impl<T: FloatScalar> Mul<T> for Polynomial<T> {
    type Output = Polynomial<T>;

    #[inline]
    fn mul(self, rhs: T) -> Polynomial<T> {
        <&Polynomial<T> as Mul<T>>::mul(&self, rhs)
    }
}

impl<T: FloatScalar> Neg for Polynomial<T> {
    type Output = Polynomial<T>;

    #[inline]
    fn neg(self) -> Polynomial<T> {
        -&self
    }
}

// ── Formatting ──────────────────────────────────────────────────────

impl<T: FloatScalar> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let n = self.degree();
        let mut first = true;
        for (i, &c) in self.coeffs.iter().enumerate() {
            if c == T::zero() {
                continue;
            }
            let power = n - i;
            let mag = c.abs();
            if first {
                if c < T::zero() {
                    write!(f, "-")?;
                }
            } else if c < T::zero() {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            first = false;
            if mag != T::one() || power == 0 {
                write!(f, "{}", mag)?;
            }
            match power {
                0 => {}
                1 => write!(f, "x")?,
                p => write!(f, "x^{}", p)?,
            }
        }
        Ok(())
    }
}
