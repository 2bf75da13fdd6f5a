//! # numkit
//!
//! Small numerical toolkit, no-std compatible (with `alloc`): a complex number
//! type, real and complex array utilities over plain slices, dimension
//! validation, scalar helpers, polynomials and piecewise-linear functions.
//!
//! ## Quick start
//!
//! ```
//! use numkit::{array, carray, Complex};
//!
//! let z = Complex::new(3.0, 4.0);
//! assert_eq!(z.abs(), 5.0);
//! assert_eq!(z * z.conj(), Complex::from_real(25.0));
//!
//! let x = array::linspace(0.0, 1.0, 5);
//! assert_eq!(x, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
//! assert_eq!(array::argsort(&[3.0, 1.0, 2.0], true), vec![1, 2, 0]);
//!
//! // length mismatches are reported, never silently truncated
//! let err = carray::zip(&[1.0, 2.0], &[0.0]).unwrap_err();
//! assert_eq!(err, numkit::DimensionError::LengthMismatch { left: 2, right: 1 });
//! ```
//!
//! ## Modules
//!
//! - [`complex`] — `Complex<T>` value type with full operator support
//!   (`+ - * /` against complex and real operands, compound assignment),
//!   polar form, bitwise equality and hashing, lexicographic and magnitude
//!   ordering, and the elementary functions (`exp`, `log`, `sqrt`, `pow`,
//!   trigonometric, hyperbolic and inverse trigonometric).
//!
//! - [`array`] — Real slices: element-wise arithmetic with `*_in_place`
//!   variants, maps, reductions and norms, `linspace`/`logspace`, stable
//!   `argsort`, interval search, 2D reshaping, convolution and Kronecker
//!   products.
//!
//! - [`carray`] — The complex counterparts of [`array`], plus split
//!   real/imaginary storage via [`carray::SplitComplex`].
//!
//! - [`dimension`] — Length and shape checks shared by every fallible
//!   operation, and the [`DimensionError`] they report.
//!
//! - [`scalar`] — `hypot`, closeness tests with [`Tolerance`], `fix`, `rem`,
//!   `frexp`/`ldexp`, inverse hyperbolics and other single-value helpers.
//!
//! - [`poly`] — Dense [`Polynomial`] with Horner evaluation (real and
//!   complex), calculus and ring arithmetic.
//!
//! - [`piecewise`] — The [`Function`] trait and [`PiecewiseLinear`] with
//!   selectable [`Extrapolation`].
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — `Copy + PartialEq + Debug + Zero + One + Num`
//!   - [`FloatScalar`] — real floats (`f32`, `f64`), used throughout
//!
//! ## Errors and logging
//!
//! Arithmetic never fails: division by zero, overflow and domain errors
//! produce IEEE infinities and NaNs. Only structural problems (mismatched
//! lengths, jagged rows, unsorted knots) are errors, reported as
//! [`DimensionError`] before any output is produced or any buffer is
//! mutated. Each rejection also emits a `tracing` debug event; the crate
//! never installs a subscriber.
//!
//! ## Cargo features
//!
//! | Feature       | Default  | Description |
//! |---------------|----------|-------------|
//! | `std`         | yes      | Hardware FPU via system libm, `std` for `tracing` |
//! | `libm`        | baseline | Pure-Rust software float fallback |
//! | `num-complex` | no       | `From` conversions to and from `num_complex::Complex` |
//! | `all`         | no       | `std` + `num-complex` |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod array;
pub mod carray;
pub mod complex;
pub mod dimension;
pub mod piecewise;
pub mod poly;
pub mod scalar;
pub mod traits;

pub use complex::{Complex, Complex32, Complex64};
pub use dimension::{DimensionError, ErrorKind, Result};
pub use piecewise::{Extrapolation, Function, PiecewiseLinear};
pub use poly::Polynomial;
pub use scalar::Tolerance;
pub use traits::{FloatScalar, Scalar};
