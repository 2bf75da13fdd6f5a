use alloc::vec::Vec;

use crate::dimension::{check_divisible, check_rectangular, Result};

// ── Nested rows ─────────────────────────────────────────────────────

/// Transpose a rectangular 2D array given as rows.
///
/// Returns [`DimensionError::Jagged`](crate::DimensionError::Jagged) if the
/// rows differ in length. An empty input transposes to an empty output.
///
/// ```
/// use numkit::array::transpose;
/// let t = transpose(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
/// assert_eq!(t, vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
/// ```
pub fn transpose<T: Copy, R: AsRef<[T]>>(rows: &[R]) -> Result<Vec<Vec<T>>> {
    let ncols = check_rectangular::<T, R>(rows)?;
    Ok((0..ncols)
        .map(|j| rows.iter().map(|r| r.as_ref()[j]).collect())
        .collect())
}

/// Concatenate the rows of a rectangular 2D array, row-major.
///
/// Jagged input is rejected rather than silently concatenated.
pub fn flatten<T: Copy, R: AsRef<[T]>>(rows: &[R]) -> Result<Vec<T>> {
    let ncols = check_rectangular::<T, R>(rows)?;
    let mut out = Vec::with_capacity(rows.len() * ncols);
    for r in rows {
        out.extend_from_slice(r.as_ref());
    }
    Ok(out)
}

// ── Flat row-major buffers ──────────────────────────────────────────

/// Split a flat row-major buffer into rows of `ncols` elements.
///
/// ```
/// use numkit::array::reshape;
/// let m = reshape(&[1, 2, 3, 4, 5, 6], 3).unwrap();
/// assert_eq!(m, vec![vec![1, 2, 3], vec![4, 5, 6]]);
/// assert!(reshape(&[1, 2, 3], 2).is_err());
/// ```
pub fn reshape<T: Copy>(data: &[T], ncols: usize) -> Result<Vec<Vec<T>>> {
    check_divisible(data.len(), ncols)?;
    Ok(data.chunks(ncols).map(<[T]>::to_vec).collect())
}

/// Transpose a flat row-major buffer with `ncols` columns, returning the
/// transposed buffer (row-major, `nrows` columns).
pub fn transpose_flat<T: Copy>(data: &[T], ncols: usize) -> Result<Vec<T>> {
    let nrows = check_divisible(data.len(), ncols)?;
    let mut out = Vec::with_capacity(data.len());
    for j in 0..ncols {
        for i in 0..nrows {
            out.push(data[i * ncols + j]);
        }
    }
    Ok(out)
}
