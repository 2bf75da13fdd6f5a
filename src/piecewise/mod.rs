//! Real functions of one variable: the [`Function`] trait and a
//! piecewise-linear interpolant with selectable extrapolation.
//!
//! # Example
//!
//! ```
//! use numkit::{Extrapolation, Function, PiecewiseLinear};
//!
//! let f = PiecewiseLinear::new(
//!     vec![0.0, 1.0, 3.0],
//!     vec![0.0, 2.0, 1.0],
//!     Extrapolation::Constant,
//! )
//! .unwrap();
//! assert_eq!(f.eval(0.5), 1.0);
//! assert_eq!(f.eval(2.0), 1.5);
//! assert_eq!(f.eval(10.0), 1.0);
//! assert_eq!(f.eval_many(&[-1.0, 1.0]), vec![0.0, 2.0]);
//! ```


use alloc::vec::Vec;

use crate::array;
use crate::dimension::{check_min_len, check_same_len, check_strictly_ascending, Result};
use crate::traits::FloatScalar;

/// A real-valued function of one real variable.
pub trait Function<T: FloatScalar> {
    /// Value at `x`.
    fn eval(&self, x: T) -> T;

    /// Values at every point of `xs`.
    fn eval_many(&self, xs: &[T]) -> Vec<T> {
        array::map(xs, |x| self.eval(x))
    }
}

/// What a [`PiecewiseLinear`] returns outside its knot range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Extrapolation<T> {
    /// NaN.
    #[default]
    Nan,
    /// The value at the nearest end knot.
    Constant,
    /// Extend the first or last segment.
    Linear,
    /// A fixed value.
    Fill(T),
}

/// Piecewise-linear interpolant through strictly ascending knots.
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseLinear<T> {
    xs: Vec<T>,
    ys: Vec<T>,
    extrapolation: Extrapolation<T>,
}

impl<T: FloatScalar> PiecewiseLinear<T> {
    /// Construct from knots `(xs[i], ys[i])`.
    ///
    /// Requires equal lengths, at least two knots and strictly increasing
    /// `xs`. Errors are
    /// [`LengthMismatch`](crate::DimensionError::LengthMismatch),
    /// [`TooShort`](crate::DimensionError::TooShort) and
    /// [`NotAscending`](crate::DimensionError::NotAscending) respectively.
    pub fn new(xs: Vec<T>, ys: Vec<T>, extrapolation: Extrapolation<T>) -> Result<Self> {
        check_same_len(&xs, &ys)?;
        check_min_len(&xs, 2)?;
        check_strictly_ascending(&xs)?;
        Ok(Self {
            xs,
            ys,
            extrapolation,
        })
    }

    /// The same knots with a different extrapolation strategy.
    pub fn with_extrapolation(self, extrapolation: Extrapolation<T>) -> Self {
        Self {
            extrapolation,
            ..self
        }
    }

    /// The knot x-values.
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// The knot y-values.
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// The extrapolation strategy.
    pub fn extrapolation(&self) -> Extrapolation<T> {
        self.extrapolation
    }

    /// Knot range `(x_first, x_last)`.
    pub fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Linear interpolation on segment `i`, extended beyond its ends.
    fn on_segment(&self, i: usize, x: T) -> T {
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);
        y0 + (x - x0) / (x1 - x0) * (y1 - y0)
    }

    fn segment(&self, x: T) -> usize {
        // at least two knots, so an interval always exists
        array::find_interval(&self.xs, x).unwrap_or(0)
    }
}

impl<T: FloatScalar> Function<T> for PiecewiseLinear<T> {
    fn eval(&self, x: T) -> T {
        if x.is_nan() {
            return x;
        }
        let n = self.xs.len();
        let (lo, hi) = self.domain();
        if x >= lo && x <= hi {
            // exact at knots, including the right end
            if x == hi {
                return self.ys[n - 1];
            }
            return self.on_segment(self.segment(x), x);
        }
        match self.extrapolation {
            Extrapolation::Nan => T::nan(),
            Extrapolation::Constant if x < lo => self.ys[0],
            Extrapolation::Constant => self.ys[n - 1],
            Extrapolation::Linear => self.on_segment(self.segment(x), x),
            Extrapolation::Fill(v) => v,
        }
    }
}
