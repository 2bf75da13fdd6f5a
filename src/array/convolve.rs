use alloc::vec::Vec;
use core::ops::Mul;

use num_traits::Zero;

/// Full discrete convolution of `a` and `b`.
///
/// The result has length `a.len() + b.len() - 1`, with
/// `out[k] = Σ a[i]·b[k - i]`. An empty operand yields an empty result.
/// Works for any ring-like element, so the complex array module reuses it.
///
/// ```
/// use numkit::array::convolve;
/// assert_eq!(convolve(&[1.0, 1.0], &[1.0, 1.0]), vec![1.0, 2.0, 1.0]);
/// assert!(convolve::<f64>(&[], &[1.0]).is_empty());
/// ```
pub fn convolve<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Copy + Zero + Mul<Output = T>,
{
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = alloc::vec![T::zero(); a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            out[i + j] = out[i + j] + x * y;
        }
    }
    out
}

/// Kronecker (outer) product flattened row-major: `out[i·m + j] = a[i]·b[j]`.
///
/// ```
/// use numkit::array::kronecker;
/// assert_eq!(kronecker(&[1.0, 2.0], &[1.0, 10.0]), vec![1.0, 10.0, 2.0, 20.0]);
/// ```
pub fn kronecker<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Copy + Mul<Output = T>,
{
    match (a, b) {
        ([s], _) => b.iter().map(|&y| *s * y).collect(),
        (_, [s]) => a.iter().map(|&x| x * *s).collect(),
        _ => a
            .iter()
            .flat_map(|&x| b.iter().map(move |&y| x * y))
            .collect(),
    }
}
