use crate::dimension::{check_same_len, Result};
use crate::scalar::{hypot, Tolerance};
use crate::traits::FloatScalar;

/// Sum of all elements (zero for an empty slice).
pub fn sum<T: FloatScalar>(a: &[T]) -> T {
    a.iter().fold(T::zero(), |acc, &x| acc + x)
}

/// Sum of squares.
pub fn sum_squares<T: FloatScalar>(a: &[T]) -> T {
    a.iter().fold(T::zero(), |acc, &x| acc + x * x)
}

/// Product of all elements (one for an empty slice).
pub fn product<T: FloatScalar>(a: &[T]) -> T {
    a.iter().fold(T::one(), |acc, &x| acc * x)
}

/// Arithmetic mean. NaN for an empty slice.
pub fn mean<T: FloatScalar>(a: &[T]) -> T {
    sum(a) / T::from_len(a.len())
}

/// Root mean square. NaN for an empty slice.
pub fn rms<T: FloatScalar>(a: &[T]) -> T {
    (sum_squares(a) / T::from_len(a.len())).sqrt()
}

/// L1 norm, `Σ|a[i]|`.
pub fn norm1<T: FloatScalar>(a: &[T]) -> T {
    a.iter().fold(T::zero(), |acc, &x| acc + x.abs())
}

/// Euclidean norm, accumulated with [`hypot`] so that it neither overflows
/// nor underflows for representable results.
///
/// ```
/// use numkit::array::norm2;
/// assert_eq!(norm2(&[3.0_f64, 4.0]), 5.0);
/// assert!(norm2(&[1e200_f64, 1e200]).is_finite());
/// ```
pub fn norm2<T: FloatScalar>(a: &[T]) -> T {
    a.iter().fold(T::zero(), |acc, &x| hypot(acc, x))
}

/// Maximum magnitude (zero for an empty slice).
pub fn norm_inf<T: FloatScalar>(a: &[T]) -> T {
    a.iter().fold(T::zero(), |acc, &x| {
        let m = x.abs();
        if m > acc {
            m
        } else {
            acc
        }
    })
}

/// Minimum magnitude (+∞ for an empty slice).
pub fn norm_neg_inf<T: FloatScalar>(a: &[T]) -> T {
    a.iter().fold(T::infinity(), |acc, &x| {
        let m = x.abs();
        if m < acc {
            m
        } else {
            acc
        }
    })
}

/// Largest element. NaN elements are skipped; -∞ for an empty slice.
pub fn max<T: FloatScalar>(a: &[T]) -> T {
    a.iter()
        .fold(T::neg_infinity(), |acc, &x| if x > acc { x } else { acc })
}

/// Smallest element. NaN elements are skipped; +∞ for an empty slice.
pub fn min<T: FloatScalar>(a: &[T]) -> T {
    a.iter()
        .fold(T::infinity(), |acc, &x| if x < acc { x } else { acc })
}

/// Index of the first smallest element, skipping NaN.
///
/// `None` when the slice is empty or holds only NaN.
pub fn arg_min<T: FloatScalar>(a: &[T]) -> Option<usize> {
    arg_best(a, |x, best| x < best)
}

/// Index of the first largest element, skipping NaN.
///
/// `None` when the slice is empty or holds only NaN.
pub fn arg_max<T: FloatScalar>(a: &[T]) -> Option<usize> {
    arg_best(a, |x, best| x > best)
}

fn arg_best<T: FloatScalar>(a: &[T], better: impl Fn(T, T) -> bool) -> Option<usize> {
    let mut best: Option<(usize, T)> = None;
    for (i, &x) in a.iter().enumerate() {
        if x.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if !better(x, b) => {}
            _ => best = Some((i, x)),
        }
    }
    best.map(|(i, _)| i)
}

/// Inner product `Σ a[i]·b[i]`.
pub fn dot<T: FloatScalar>(a: &[T], b: &[T]) -> Result<T> {
    check_same_len(a, b)?;
    Ok(a
        .iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y))
}

/// Euclidean distance `sqrt(Σ (a[i] - b[i])²)`.
///
/// ```
/// use numkit::array::distance;
/// assert_eq!(distance(&[0.0, 0.0], &[3.0, 4.0]).unwrap(), 5.0);
/// assert!(distance(&[0.0], &[3.0, 4.0]).is_err());
/// ```
pub fn distance<T: FloatScalar>(a: &[T], b: &[T]) -> Result<T> {
    check_same_len(a, b)?;
    let ss = a.iter().zip(b.iter()).fold(T::zero(), |acc, (&x, &y)| {
        let d = x - y;
        acc + d * d
    });
    Ok(ss.sqrt())
}

/// Whether every `a[i]` is close to `b[i]` under `tol`.
pub fn all_close<T: FloatScalar>(a: &[T], b: &[T], tol: Tolerance<T>) -> Result<bool> {
    check_same_len(a, b)?;
    Ok(a.iter().zip(b.iter()).all(|(&x, &y)| tol.accepts(x, y)))
}
