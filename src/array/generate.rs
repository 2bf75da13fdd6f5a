use alloc::vec;
use alloc::vec::Vec;

use crate::dimension::{check_min_len, Result};
use crate::traits::FloatScalar;

/// `count` evenly spaced samples from `lower` to `upper` inclusive.
///
/// Samples are computed as `lower + i·step` rather than by accumulation, and
/// the last one is set to exactly `upper`. A single sample is `[upper]`.
///
/// ```
/// use numkit::array::linspace;
/// let x = linspace(0.0, 10.0, 5);
/// assert_eq!(x, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
/// ```
pub fn linspace<T: FloatScalar>(lower: T, upper: T, count: usize) -> Vec<T> {
    if count == 0 {
        return Vec::new();
    }
    let step = (upper - lower) / T::from_len(count - 1);
    let mut v: Vec<T> = (0..count).map(|i| lower + step * T::from_len(i)).collect();
    if let Some(last) = v.last_mut() {
        *last = upper;
    }
    v
}

/// `count` samples spaced evenly in log scale, `10^lower_decade` to
/// `10^upper_decade` inclusive. The last sample is exactly `10^upper_decade`.
///
/// ```
/// use numkit::array::logspace;
/// let x = logspace(0.0_f64, 2.0, 3);
/// assert!((x[1] - 10.0).abs() < 1e-12);
/// assert_eq!(x[2], 100.0);
/// ```
pub fn logspace<T: FloatScalar>(lower_decade: T, upper_decade: T, count: usize) -> Vec<T> {
    let ten = T::lit(10.0);
    let mut v: Vec<T> = linspace(lower_decade, upper_decade, count)
        .into_iter()
        .map(|e| ten.powf(e))
        .collect();
    if let Some(last) = v.last_mut() {
        *last = ten.powf(upper_decade);
    }
    v
}

/// `n` zeros.
pub fn zeros<T: FloatScalar>(n: usize) -> Vec<T> {
    vec![T::zero(); n]
}

/// `n` ones.
pub fn ones<T: FloatScalar>(n: usize) -> Vec<T> {
    vec![T::one(); n]
}

/// `n` copies of `value`.
pub fn fill<T: Copy>(n: usize, value: T) -> Vec<T> {
    vec![value; n]
}

/// Concatenate slices end to end.
///
/// ```
/// use numkit::array::concat;
/// assert_eq!(concat(&[&[1.0, 2.0][..], &[3.0]]), vec![1.0, 2.0, 3.0]);
/// ```
pub fn concat<T: Copy>(parts: &[&[T]]) -> Vec<T> {
    let mut out = Vec::with_capacity(parts.iter().map(|p| p.len()).sum());
    for p in parts {
        out.extend_from_slice(p);
    }
    out
}

/// The whole slice repeated `times` times.
pub fn repeat<T: Copy>(a: &[T], times: usize) -> Vec<T> {
    a.repeat(times)
}

/// A reversed copy.
pub fn reverse<T: Copy>(a: &[T]) -> Vec<T> {
    a.iter().rev().copied().collect()
}

/// Running sum: `out[i] = a[0] + ... + a[i]`.
pub fn cumsum<T: FloatScalar>(a: &[T]) -> Vec<T> {
    let mut acc = T::zero();
    a.iter()
        .map(|&x| {
            acc = acc + x;
            acc
        })
        .collect()
}

/// First differences: `out[i] = a[i + 1] - a[i]`, one element shorter than
/// the input (empty for fewer than two elements).
pub fn diff<T: FloatScalar>(a: &[T]) -> Vec<T> {
    a.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Numerical first derivative assuming unit spacing.
///
/// Central differences in the interior, one-sided differences at both ends.
/// Requires at least two samples.
///
/// ```
/// use numkit::array::gradient;
/// let g = gradient(&[1.0, 2.0, 4.0, 7.0, 11.0]).unwrap();
/// assert_eq!(g, vec![1.0, 1.5, 2.5, 3.5, 4.0]);
/// ```
pub fn gradient<T: FloatScalar>(a: &[T]) -> Result<Vec<T>> {
    check_min_len(a, 2)?;
    let n = a.len();
    let half = T::lit(0.5);
    let mut g = Vec::with_capacity(n);
    g.push(a[1] - a[0]);
    for w in a.windows(3) {
        g.push((w[2] - w[0]) * half);
    }
    g.push(a[n - 1] - a[n - 2]);
    Ok(g)
}
