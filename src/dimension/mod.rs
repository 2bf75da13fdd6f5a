//! Dimension validation for binary array operations.
//!
//! Every paired operation in [`array`](crate::array) and
//! [`carray`](crate::carray) calls into this module before it reads a single
//! element, so a mismatch is reported before any output is allocated or any
//! in-place buffer is touched.
//!
//! # Example
//!
//! ```
//! use numkit::dimension::{check_same_len, DimensionError};
//!
//! assert!(check_same_len(&[1.0, 2.0], &[3.0, 4.0]).is_ok());
//! let err = check_same_len(&[1.0, 2.0, 3.0], &[1.0]).unwrap_err();
//! assert_eq!(err, DimensionError::LengthMismatch { left: 3, right: 1 });
//! assert!(err.to_string().contains("x and y dimensions must be the same"));
//! ```


use thiserror::Error;

/// Errors from array shape validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DimensionError {
    /// The two operands of an element-wise operation differ in length.
    #[error("x and y dimensions must be the same (got {left} and {right})")]
    LengthMismatch { left: usize, right: usize },
    /// The array is shorter than the operation requires.
    #[error("array length must be at least {min} (got {len})")]
    TooShort { len: usize, min: usize },
    /// A row of a 2D input differs in length from the first row.
    #[error("2D input is jagged: row {row} has length {found}, expected {expected}")]
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A linear buffer cannot be split evenly into rows of `ncols` columns.
    #[error("length {len} cannot be reshaped into rows of {ncols} columns")]
    NotDivisible { len: usize, ncols: usize },
    /// Knots are not strictly increasing at `index`.
    #[error("x values must be strictly increasing (violated at index {index})")]
    NotAscending { index: usize },
}

/// Coarse classification of [`DimensionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operand lengths are incompatible.
    Dimension,
    /// The input structure itself is malformed.
    Shape,
}

impl DimensionError {
    /// Whether this is a length mismatch or a structural problem.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::LengthMismatch { .. } | Self::TooShort { .. } => ErrorKind::Dimension,
            Self::Jagged { .. } | Self::NotDivisible { .. } | Self::NotAscending { .. } => {
                ErrorKind::Shape
            }
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, DimensionError>;

/// Check that two slices have the same length.
///
/// The element types are independent, so real/complex pairs are accepted.
#[inline]
pub fn check_same_len<A, B>(a: &[A], b: &[B]) -> Result<()> {
    if a.len() == b.len() {
        return Ok(());
    }
    tracing::debug!(left = a.len(), right = b.len(), "length mismatch");
    Err(DimensionError::LengthMismatch {
        left: a.len(),
        right: b.len(),
    })
}

/// Check that a slice holds at least `min` elements.
#[inline]
pub fn check_min_len<A>(a: &[A], min: usize) -> Result<()> {
    if a.len() >= min {
        return Ok(());
    }
    tracing::debug!(len = a.len(), min, "array too short");
    Err(DimensionError::TooShort { len: a.len(), min })
}

/// Check that every row of a 2D input has the length of the first row.
///
/// Returns the common row length (zero for an empty input).
pub fn check_rectangular<A, R: AsRef<[A]>>(rows: &[R]) -> Result<usize> {
    let Some(first) = rows.first() else {
        return Ok(0);
    };
    let expected = first.as_ref().len();
    for (row, r) in rows.iter().enumerate().skip(1) {
        let found = r.as_ref().len();
        if found != expected {
            tracing::debug!(row, expected, found, "jagged 2D input");
            return Err(DimensionError::Jagged {
                row,
                expected,
                found,
            });
        }
    }
    Ok(expected)
}

/// Check that a buffer of `len` elements splits into whole rows of `ncols`.
///
/// Returns the number of rows.
#[inline]
pub fn check_divisible(len: usize, ncols: usize) -> Result<usize> {
    if ncols > 0 && len % ncols == 0 {
        return Ok(len / ncols);
    }
    tracing::debug!(len, ncols, "length not divisible by column count");
    Err(DimensionError::NotDivisible { len, ncols })
}

/// Check that a slice is strictly increasing.
pub fn check_strictly_ascending<T: PartialOrd>(xs: &[T]) -> Result<()> {
    for i in 1..xs.len() {
        // written as !(a < b) so that NaN knots are rejected
        if !(xs[i - 1] < xs[i]) {
            tracing::debug!(index = i, "knots not strictly increasing");
            return Err(DimensionError::NotAscending { index: i });
        }
    }
    Ok(())
}
