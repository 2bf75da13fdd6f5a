//! Real array utilities over plain slices.
//!
//! Inputs are borrowed slices, outputs are freshly allocated `Vec`s. Each
//! binary element-wise operation comes in two flavours:
//!
//! - `op(&a, &b) -> Result<Vec<T>>` leaves both inputs untouched,
//! - `op_in_place(&mut a, &b) -> Result<()>` overwrites `a`.
//!
//! Both validate lengths first, so a mismatch never produces partial output
//! or a partially mutated buffer.
//!
//! | Group | Functions |
//! |-------|-----------|
//! | element-wise | [`add`], [`sub`], [`mul`], [`div`], `*_in_place`, [`add_scalar`], [`mul_scalar`], [`negate`] |
//! | maps | [`map`], [`sin`], [`cos`], [`tan`], [`sinh`], [`cosh`], [`tanh`], [`exp`], [`log`], [`log2`], [`log10`], [`sqrt`], [`abs`] |
//! | reductions | [`sum`], [`sum_squares`], [`mean`], [`rms`], [`norm1`], [`norm2`], [`norm_inf`], [`norm_neg_inf`], [`max`], [`min`], [`arg_min`], [`arg_max`], [`product`], [`dot`], [`distance`] |
//! | generation | [`linspace`], [`logspace`], [`zeros`], [`ones`], [`fill`], [`concat`], [`repeat`], [`reverse`], [`cumsum`], [`diff`], [`gradient`] |
//! | ordering | [`argsort`], [`sort`], [`is_ascending`], [`search_sorted`], [`find_interval`] |
//! | shape | [`transpose`], [`transpose_flat`], [`flatten`], [`reshape`] |
//! | products | [`convolve`], [`kronecker`] |
//!
//! # Example
//!
//! ```
//! use numkit::array;
//!
//! let a = [1.0, 2.0, 3.0];
//! let b = [4.0, 5.0];
//! assert_eq!(array::convolve(&a, &b), vec![4.0, 13.0, 22.0, 15.0]);
//!
//! let mut x = vec![1.0, 2.0, 3.0];
//! array::mul_in_place(&mut x, &[2.0, 2.0, 2.0]).unwrap();
//! assert_eq!(x, vec![2.0, 4.0, 6.0]);
//! assert!(array::add(&x, &b).is_err());
//! ```

mod convolve;
mod elementwise;
mod generate;
mod reduce;
mod shape;
mod sort;


pub use convolve::{convolve, kronecker};
pub use elementwise::{
    abs, add, add_in_place, add_scalar, add_scalar_in_place, cos, cosh, div, div_in_place, exp,
    log, log10, log2, map, map_in_place, mul, mul_in_place, mul_scalar, mul_scalar_in_place,
    negate, sin, sinh, sqrt, sub, sub_in_place, tan, tanh,
};
pub use generate::{
    concat, cumsum, diff, fill, gradient, linspace, logspace, ones, repeat, reverse, zeros,
};
pub use reduce::{
    all_close, arg_max, arg_min, distance, dot, max, mean, min, norm1, norm2, norm_inf,
    norm_neg_inf, product, rms, sum, sum_squares,
};
pub use shape::{flatten, reshape, transpose, transpose_flat};
pub use sort::{argsort, find_interval, is_ascending, search_sorted, sort};

pub(crate) use elementwise::{zip_with, zip_with_in_place};
