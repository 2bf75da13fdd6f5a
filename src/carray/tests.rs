use super::*;
use crate::dimension::DimensionError;
use core::f64::consts::{FRAC_PI_2, PI};

type C = Complex<f64>;

const EPS: f64 = 1e-12;

fn c(re: f64, im: f64) -> C {
    Complex::new(re, im)
}

fn assert_all_near(a: &[C], b: &[C], tol: f64) {
    assert_eq!(a.len(), b.len(), "length");
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        assert!(
            (x.re - y.re).abs() < tol && (x.im - y.im).abs() < tol,
            "index {}: {:?} vs {:?}",
            i,
            x,
            y
        );
    }
}

// ── Split storage ────────────────────────────────────────────

#[test]
fn zip_and_unzip() {
    let z = zip(&[1.0, 2.0], &[3.0, 4.0]).unwrap();
    assert_eq!(z, vec![c(1.0, 3.0), c(2.0, 4.0)]);
    let s = unzip(&z);
    assert_eq!(s.re(), &[1.0, 2.0]);
    assert_eq!(s.im(), &[3.0, 4.0]);
    assert_eq!(s.len(), 2);
    assert_eq!(s.to_complex(), z);
}

#[test]
fn split_rejects_mismatch() {
    assert_eq!(
        SplitComplex::new(vec![1.0, 2.0], vec![1.0]).unwrap_err(),
        DimensionError::LengthMismatch { left: 2, right: 1 }
    );
    assert!(zip(&[1.0], &[]).is_err());
    let empty = SplitComplex::<f64>::new(Vec::new(), Vec::new()).unwrap();
    assert!(empty.is_empty());
    assert!(empty.to_complex().is_empty());
}

#[test]
fn components() {
    let z = [c(3.0, 4.0), c(0.0, -2.0), c(-1.0, 0.0)];
    assert_eq!(real(&z), vec![3.0, 0.0, -1.0]);
    assert_eq!(imag(&z), vec![4.0, -2.0, 0.0]);
    assert_eq!(abs(&z), vec![5.0, 2.0, 1.0]);
    let a = arg(&z);
    assert!((a[1] + FRAC_PI_2).abs() < EPS);
    assert!((a[2] - PI).abs() < EPS);
    assert_eq!(from_real(&[2.0, -1.0]), vec![c(2.0, 0.0), c(-1.0, 0.0)]);
}

#[test]
fn conjugation() {
    let mut z = vec![c(1.0, 2.0), c(-3.0, -4.0)];
    let expected = vec![c(1.0, -2.0), c(-3.0, 4.0)];
    assert_eq!(conj(&z), expected);
    conj_in_place(&mut z);
    assert_eq!(z, expected);
}

// ── Arithmetic ───────────────────────────────────────────────

#[test]
fn binary_ops() {
    let a = [c(1.0, 1.0), c(2.0, -1.0)];
    let b = [c(0.0, 1.0), c(1.0, 1.0)];
    assert_eq!(add(&a, &b).unwrap(), vec![c(1.0, 2.0), c(3.0, 0.0)]);
    assert_eq!(sub(&a, &b).unwrap(), vec![c(1.0, 0.0), c(1.0, -2.0)]);
    assert_eq!(mul(&a, &b).unwrap(), vec![c(-1.0, 1.0), c(3.0, 1.0)]);
    let q = div(&mul(&a, &b).unwrap(), &b).unwrap();
    assert_all_near(&q, &a, EPS);
}

#[test]
fn in_place_mismatch_is_untouched() {
    let mut a = vec![c(1.0, 1.0), c(2.0, 2.0), c(3.0, 3.0)];
    let b = vec![C::one(); 4];
    assert!(add_in_place(&mut a, &b).is_err());
    assert!(sub_in_place(&mut a, &b).is_err());
    assert!(mul_in_place(&mut a, &b).is_err());
    assert!(div_in_place(&mut a, &b).is_err());
    assert_eq!(a, vec![c(1.0, 1.0), c(2.0, 2.0), c(3.0, 3.0)]);

    mul_in_place(&mut a, &b[..3]).unwrap();
    add_in_place(&mut a, &[C::i(); 3]).unwrap();
    assert_eq!(a, vec![c(1.0, 2.0), c(2.0, 3.0), c(3.0, 4.0)]);
}

#[test]
fn scale_by_complex() {
    let r = scale(&[c(1.0, 0.0), c(0.0, 1.0)], C::i());
    assert_eq!(r, vec![c(0.0, 1.0), c(-1.0, 0.0)]);
}

// ── Maps and reductions ──────────────────────────────────────

#[test]
fn transcendental_maps() {
    let z = [c(0.0, PI), c(1.0, 0.5), c(-2.0, 0.25)];
    assert_all_near(&exp(&log(&z)), &z, 1e-12);
    let s = sqrt(&z);
    assert_all_near(&mul(&s, &s).unwrap(), &z, 1e-12);
    let one = add(
        &mul(&sin(&z), &sin(&z)).unwrap(),
        &mul(&cos(&z), &cos(&z)).unwrap(),
    )
    .unwrap();
    assert_all_near(&one, &[C::one(); 3], 1e-12);
}

#[test]
fn reductions() {
    let z = [c(1.0, 2.0), c(3.0, -1.0)];
    assert_eq!(sum(&z), c(4.0, 1.0));
    assert_eq!(mean(&z), c(2.0, 0.5));
    assert_eq!(product(&z), c(5.0, 5.0));
    assert_eq!(sum::<f64>(&[]), C::zero());
    assert_eq!(product::<f64>(&[]), C::one());
    assert!(mean::<f64>(&[]).is_nan());
}

#[test]
fn closeness() {
    let a = [c(1.0, 1.0), c(2.0, 0.0)];
    let b = [c(1.0, 1.0 + 1e-11), c(2.0, 0.0)];
    assert!(all_close(&a, &b, Tolerance::default()).unwrap());
    assert!(!all_close(&a, &[c(1.0, 1.1), c(2.0, 0.0)], Tolerance::default()).unwrap());
    assert!(all_close(&a, &b[..1], Tolerance::default()).is_err());
}

#[test]
fn nan_elements_are_not_close() {
    let zero = [C::zero()];
    assert!(!all_close(&[c(f64::NAN, 0.0)], &zero, Tolerance::default()).unwrap());
    assert!(!all_close(&zero, &[c(0.0, f64::NAN)], Tolerance::new(1.0, 1.0)).unwrap());
    assert!(abs(&[c(f64::NAN, 0.0)])[0].is_nan());
}

// ── Structure ────────────────────────────────────────────────

#[test]
fn convolve_matches_polynomial_product() {
    // (1 + 2i·x)(3 - x) = 3 + (6i - 1)x - 2i·x²
    let r = convolve(&[c(1.0, 0.0), c(0.0, 2.0)], &[c(3.0, 0.0), c(-1.0, 0.0)]);
    assert_all_near(&r, &[c(3.0, 0.0), c(-1.0, 6.0), c(0.0, -2.0)], EPS);
    assert!(convolve::<f64>(&[], &[C::one()]).is_empty());
}

#[test]
fn flatten_complex_rows() {
    let rows = [vec![c(1.0, 0.0), c(2.0, 0.0)], vec![c(3.0, 1.0), c(4.0, 1.0)]];
    assert_eq!(flatten(&rows).unwrap().len(), 4);
    let jagged = [vec![c(1.0, 0.0)], vec![]];
    assert_eq!(
        flatten(&jagged).unwrap_err(),
        DimensionError::Jagged { row: 1, expected: 1, found: 0 }
    );
}

#[test]
fn deep_copies_are_independent() {
    let src = vec![c(1.0, 2.0), c(3.0, 4.0)];
    let mut copy = deep_copy(&src);
    copy[0] += C::one();
    assert_eq!(src[0], c(1.0, 2.0));

    let rows = vec![vec![c(1.0, 0.0)], vec![c(2.0, 0.0), c(3.0, 0.0)]];
    let mut copy2 = deep_copy_2d(&rows);
    copy2[1][1] = C::zero();
    assert_eq!(rows[1][1], c(3.0, 0.0));
    assert_eq!(copy2[0], rows[0]);
}
