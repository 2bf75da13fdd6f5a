use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::traits::FloatScalar;

/// Total order used for sorting: numeric order with NaN after every number
/// in either direction.
fn sort_order<T: FloatScalar>(x: T, y: T, ascending: bool) -> Ordering {
    match (x.is_nan(), y.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let o = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
            if ascending {
                o
            } else {
                o.reverse()
            }
        }
    }
}

/// Permutation of `0..a.len()` that puts `a` in sorted order.
///
/// The sort is stable: equal elements keep their original relative order in
/// both directions. NaN elements are placed last.
///
/// ```
/// use numkit::array::argsort;
/// assert_eq!(argsort(&[3.0, 1.0, 2.0], true), vec![1, 2, 0]);
/// assert_eq!(argsort(&[3.0, 1.0, 2.0], false), vec![0, 2, 1]);
/// ```
pub fn argsort<T: FloatScalar>(a: &[T], ascending: bool) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..a.len()).collect();
    idx.sort_by(|&i, &j| sort_order(a[i], a[j], ascending));
    idx
}

/// A sorted copy of `a` (stable, NaN last).
pub fn sort<T: FloatScalar>(a: &[T], ascending: bool) -> Vec<T> {
    let mut v = a.to_vec();
    v.sort_by(|&x, &y| sort_order(x, y, ascending));
    v
}

/// Whether every adjacent pair is non-decreasing.
///
/// Empty and single-element slices are ascending; any NaN makes the test
/// fail.
pub fn is_ascending<T: FloatScalar>(a: &[T]) -> bool {
    a.windows(2).all(|w| w[0] <= w[1])
}

/// Number of elements of the ascending slice `xs` that are `<= x`, i.e. the
/// insertion point to the right of any equal elements.
///
/// ```
/// use numkit::array::search_sorted;
/// let xs = [1.0, 2.0, 2.0, 3.0];
/// assert_eq!(search_sorted(&xs, 0.5), 0);
/// assert_eq!(search_sorted(&xs, 2.0), 3);
/// assert_eq!(search_sorted(&xs, 9.0), 4);
/// ```
pub fn search_sorted<T: FloatScalar>(xs: &[T], x: T) -> usize {
    xs.partition_point(|&v| v <= x)
}

/// Index `i` of the segment `[xs[i], xs[i + 1]]` of the ascending slice
/// `xs` that contains `x`, clamped to the first and last segments for
/// points outside the range.
///
/// `None` when `xs` has fewer than two elements.
///
/// ```
/// use numkit::array::find_interval;
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// assert_eq!(find_interval(&xs, 1.5), Some(1));
/// assert_eq!(find_interval(&xs, 3.0), Some(2));
/// assert_eq!(find_interval(&xs, -4.0), Some(0));
/// ```
pub fn find_interval<T: FloatScalar>(xs: &[T], x: T) -> Option<usize> {
    let n = xs.len();
    if n < 2 {
        return None;
    }
    let i = search_sorted(xs, x);
    Some(i.saturating_sub(1).min(n - 2))
}
