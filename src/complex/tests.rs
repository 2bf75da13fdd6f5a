use super::*;
use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

type C = Complex<f64>;

const EPS: f64 = 1e-12;

fn c(re: f64, im: f64) -> C {
    Complex::new(re, im)
}

fn assert_complex_near(a: C, b: C, tol: f64, msg: &str) {
    assert!(
        (a.re - b.re).abs() < tol && (a.im - b.im).abs() < tol,
        "{}: {:?} vs {:?}",
        msg,
        a,
        b
    );
}

// ── Constructors ─────────────────────────────────────────────

#[test]
fn constructors() {
    assert_eq!(C::from_real(2.0), c(2.0, 0.0));
    assert_eq!(C::from_imag(-3.0), c(0.0, -3.0));
    assert_eq!(C::i(), c(0.0, 1.0));
    assert_eq!(C::from(1.5), c(1.5, 0.0));
    assert_eq!(C::from((1.0, 2.0)), c(1.0, 2.0));
    let (re, im): (f64, f64) = c(4.0, 5.0).into();
    assert_eq!((re, im), (4.0, 5.0));
}

#[test]
fn from_polar_round_trip() {
    for &(r, theta) in &[(1.0, 0.0), (2.0, FRAC_PI_4), (0.5, -2.0), (3.0, PI), (10.0, 3.0)] {
        let z = C::from_polar(r, theta);
        assert!((z.abs() - r).abs() < EPS, "abs for ({r}, {theta})");
        assert!((z.arg() - theta).abs() < EPS, "arg for ({r}, {theta})");
    }
}

#[test]
fn copies_are_independent() {
    let a = c(1.0, 2.0);
    let mut b = a;
    b += c(1.0, 1.0);
    assert_eq!(a, c(1.0, 2.0));
    assert_eq!(b, c(2.0, 3.0));
}

// ── Arithmetic ───────────────────────────────────────────────

#[test]
fn pure_arithmetic_leaves_operands() {
    let a = c(1.0, 2.0);
    let b = c(3.0, 4.0);
    assert_eq!(a + b, c(4.0, 6.0));
    assert_eq!(a - b, c(-2.0, -2.0));
    assert_eq!(a * b, c(-5.0, 10.0));
    assert_complex_near(a / b, c(0.44, 0.08), EPS, "div");
    assert_eq!(a, c(1.0, 2.0));
    assert_eq!(b, c(3.0, 4.0));
}

#[test]
fn real_operands() {
    let a = c(1.0, 2.0);
    assert_eq!(a + 1.0, c(2.0, 2.0));
    assert_eq!(a - 1.0, c(0.0, 2.0));
    assert_eq!(a * 2.0, c(2.0, 4.0));
    assert_eq!(a / 2.0, c(0.5, 1.0));
    assert_eq!(1.0 + a, c(2.0, 2.0));
    assert_eq!(1.0 - a, c(0.0, -2.0));
    assert_eq!(2.0 * a, c(2.0, 4.0));
    assert_complex_near(1.0 / c(0.0, 2.0), c(0.0, -0.5), EPS, "real / complex");
}

#[test]
fn parts_arithmetic() {
    let a = c(1.0, 2.0);
    assert_eq!(a.add_parts(1.0, 1.0), c(2.0, 3.0));
    assert_eq!(a.sub_parts(1.0, 1.0), c(0.0, 1.0));
    assert_eq!(a.mul_parts(0.0, 1.0), c(-2.0, 1.0));
    assert_complex_near(a.div_parts(1.0, 2.0), c(1.0, 0.0), EPS, "div_parts");
}

#[test]
fn in_place_arithmetic() {
    let mut z = c(1.0, 2.0);
    z += c(1.0, 1.0);
    assert_eq!(z, c(2.0, 3.0));
    z -= c(0.5, 0.5);
    assert_eq!(z, c(1.5, 2.5));
    z *= c(0.0, 1.0);
    assert_eq!(z, c(-2.5, 1.5));
    z /= c(0.0, 1.0);
    assert_complex_near(z, c(1.5, 2.5), EPS, "div_assign");

    let mut w = c(2.0, 4.0);
    w *= 0.5;
    assert_eq!(w, c(1.0, 2.0));
    w /= 2.0;
    assert_eq!(w, c(0.5, 1.0));
    w += 1.0;
    assert_eq!(w, c(1.5, 1.0));
    w -= 1.5;
    assert_eq!(w, c(0.0, 1.0));
}

#[test]
fn division_avoids_overflow() {
    let a = c(1e300, 1e300);
    let b = c(1e300, 1e300);
    assert_complex_near(a / b, c(1.0, 0.0), EPS, "large / large");
    let tiny = c(1e-300, 1e-300);
    assert_complex_near(tiny / tiny, c(1.0, 0.0), EPS, "tiny / tiny");
}

#[test]
fn division_by_zero_propagates() {
    let z = c(1.0, 1.0) / C::zero();
    assert!(!z.is_finite());
    let inv = C::zero().invert();
    assert!(!inv.is_finite());
}

#[test]
fn add_negation_is_exact_zero() {
    for &z in &[c(1.0, 2.0), c(-3.5, 1e-300), c(0.0, 0.0), c(1e308, -1e308)] {
        assert_eq!(z + (-z), c(0.0, 0.0), "{z:?}");
    }
}

#[test]
fn multiply_by_inverse_is_one() {
    for &z in &[c(1.0, 2.0), c(-3.0, 0.5), c(1e-5, 1e5), c(0.0, -7.0)] {
        assert!((z * z.invert()).is_close(&c(1.0, 0.0)), "{z:?}");
    }
}

#[test]
fn invert_and_conj_in_place() {
    let mut z = c(0.0, 2.0);
    z.invert_in_place();
    assert_complex_near(z, c(0.0, -0.5), EPS, "invert_in_place");
    z.conj_in_place();
    assert_complex_near(z, c(0.0, 0.5), EPS, "conj_in_place");
    z.neg_in_place();
    assert_complex_near(z, c(0.0, -0.5), EPS, "neg_in_place");
}

#[test]
fn sum_and_product() {
    let zs = [c(1.0, 1.0), c(2.0, -1.0), c(0.0, 3.0)];
    let s: C = zs.iter().sum();
    assert_eq!(s, c(3.0, 3.0));
    let p: C = zs.iter().copied().product();
    // (1+i)(2-i) = 3+i, (3+i)(3i) = -3+9i
    assert_eq!(p, c(-3.0, 9.0));
}

// ── Magnitude and phase ──────────────────────────────────────

#[test]
fn abs_arg_conj() {
    let z = c(3.0, -4.0);
    assert_eq!(z.abs(), 5.0);
    assert_eq!(z.norm_sqr(), 25.0);
    assert_eq!(z.conj(), c(3.0, 4.0));
    assert!((c(0.0, 1.0).arg() - FRAC_PI_2).abs() < EPS);
    assert!((c(-1.0, 0.0).arg() - PI).abs() < EPS);
    assert!(c(1e300, 1e300).abs().is_finite());
}

// ── Roots and powers ─────────────────────────────────────────

#[test]
fn sqrt_branches() {
    assert_eq!(C::zero().sqrt(), C::zero());
    assert_eq!(c(4.0, 0.0).sqrt(), c(2.0, 0.0));
    assert_eq!(c(-4.0, 0.0).sqrt(), c(0.0, 2.0));
    assert_eq!(c(-4.0, -0.0).sqrt(), c(0.0, -2.0));
    assert_complex_near(c(0.0, 2.0).sqrt(), c(1.0, 1.0), EPS, "sqrt(2i)");
    assert_complex_near(c(-3.0, 4.0).sqrt(), c(1.0, 2.0), EPS, "sqrt(-3+4i)");
    assert_complex_near(c(-3.0, -4.0).sqrt(), c(1.0, -2.0), EPS, "sqrt(-3-4i)");
}

#[test]
fn sqrt_squares_back() {
    for &z in &[c(1.0, 2.0), c(-5.0, 0.1), c(-2.0, -7.0), c(1e-8, -1e-8)] {
        let r = z.sqrt();
        assert!(r.re >= 0.0);
        assert!((r * r).is_close(&z), "{z:?}");
    }
}

#[test]
fn exp_log_inverse() {
    for &z in &[c(1.0, 2.0), c(-0.5, 0.3), c(0.0, -3.0)] {
        assert_complex_near(z.log().exp(), z, EPS, "exp(log z)");
    }
    assert_complex_near(c(0.0, PI).exp(), c(-1.0, 0.0), EPS, "Euler");
}

#[test]
fn log_of_zero_is_neg_infinity() {
    let l = C::zero().log();
    assert_eq!(l.re, f64::NEG_INFINITY);
    assert_eq!(l.im, 0.0);
    assert!(!l.is_finite());
}

#[test]
fn powers() {
    let z = c(1.0, 1.0);
    assert_complex_near(z.powi(2), c(0.0, 2.0), EPS, "powi(2)");
    assert_complex_near(z.powi(-1), z.invert(), EPS, "powi(-1)");
    assert_eq!(z.powi(0), C::one());
    assert_complex_near(z.powf(2.0), c(0.0, 2.0), EPS, "powf(2)");
    assert_complex_near(z.pow(&c(2.0, 0.0)), c(0.0, 2.0), EPS, "pow(2+0i)");
    assert_complex_near(c(4.0, 0.0).powf(0.5), c(2.0, 0.0), EPS, "sqrt via powf");
}

#[test]
fn in_place_transcendentals() {
    let mut z = c(-4.0, 0.0);
    z.sqrt_in_place();
    assert_eq!(z, c(0.0, 2.0));
    let mut w = c(0.0, PI);
    w.exp_in_place();
    assert_complex_near(w, c(-1.0, 0.0), EPS, "exp_in_place");
    w.log_in_place();
    assert_complex_near(w, c(0.0, PI), EPS, "log_in_place");
    let mut p = c(1.0, 1.0);
    p.pow_in_place(&c(2.0, 0.0));
    assert_complex_near(p, c(0.0, 2.0), EPS, "pow_in_place");
}

// ── Trig / hyperbolic ────────────────────────────────────────

#[test]
fn trig_identities() {
    for &z in &[c(0.3, 0.7), c(-1.2, 0.4), c(2.0, -1.5)] {
        let s = z.sin();
        let co = z.cos();
        assert_complex_near(s * s + co * co, C::one(), 1e-10, "sin² + cos²");
        assert_complex_near(z.tan(), s / co, 1e-10, "tan = sin/cos");
        let sh = z.sinh();
        let ch = z.cosh();
        assert_complex_near(ch * ch - sh * sh, C::one(), 1e-10, "cosh² - sinh²");
        assert_complex_near(z.tanh(), sh / ch, 1e-10, "tanh = sinh/cosh");
    }
}

#[test]
fn trig_real_axis() {
    let z = c(0.5, 0.0);
    assert_complex_near(z.sin(), c(0.5_f64.sin(), 0.0), EPS, "sin");
    assert_complex_near(z.cos(), c(0.5_f64.cos(), 0.0), EPS, "cos");
    assert_complex_near(z.tan(), c(0.5_f64.tan(), 0.0), EPS, "tan");
    assert_complex_near(z.sinh(), c(0.5_f64.sinh(), 0.0), EPS, "sinh");
    assert_complex_near(z.cosh(), c(0.5_f64.cosh(), 0.0), EPS, "cosh");
    assert_complex_near(z.tanh(), c(0.5_f64.tanh(), 0.0), EPS, "tanh");
}

#[test]
fn tan_tanh_saturate() {
    assert_eq!(c(1.0, 25.0).tan(), c(0.0, 1.0));
    assert_eq!(c(1.0, -25.0).tan(), c(0.0, -1.0));
    assert_eq!(c(400.0, 1.0).tanh(), c(1.0, 0.0));
    assert_eq!(c(-400.0, 1.0).tanh(), c(-1.0, 0.0));
    assert!(c(0.3, 19.0).tan().is_finite());
}

#[test]
fn inverse_trig() {
    for &z in &[c(0.3, 0.2), c(-0.5, 0.8), c(2.0, -1.0)] {
        assert_complex_near(z.asin().sin(), z, 1e-10, "sin(asin z)");
        assert_complex_near(z.acos().cos(), z, 1e-10, "cos(acos z)");
        assert_complex_near(z.atan().tan(), z, 1e-10, "tan(atan z)");
    }
    assert_complex_near(c(1.0, 0.0).atan(), c(FRAC_PI_4, 0.0), EPS, "atan(1)");
    assert_complex_near(c(0.5, 0.0).asin(), c(0.5_f64.asin(), 0.0), EPS, "asin real");
    assert_complex_near(c(0.5, 0.0).acos(), c(0.5_f64.acos(), 0.0), EPS, "acos real");
    assert_complex_near(c(0.5, 0.0).sqrt1z(), c(0.75_f64.sqrt(), 0.0), EPS, "sqrt1z");
}

#[test]
fn log10() {
    assert_complex_near(c(100.0, 0.0).log10(), c(2.0, 0.0), EPS, "log10");
}

// ── Predicates ───────────────────────────────────────────────

#[test]
fn finiteness() {
    assert!(c(1.0, 2.0).is_finite());
    assert!(!c(f64::INFINITY, 0.0).is_finite());
    assert!(c(f64::INFINITY, 0.0).is_infinite());
    assert!(!c(f64::NAN, 0.0).is_finite());
    assert!(c(0.0, f64::NAN).is_nan());
    assert!(!C::nan().is_infinite());
    assert!(c(-0.0, 0.0).is_zero());
}

// ── Equality, hashing, ordering ──────────────────────────────

#[test]
fn equality_is_bitwise() {
    assert_eq!(c(1.0, 2.0), c(1.0, 2.0));
    assert_ne!(c(0.0, 0.0), c(-0.0, 0.0));
    assert_eq!(C::nan(), C::nan());
    assert_ne!(c(1.0, 2.0), c(1.0, 2.0 + 1e-15));
}

#[test]
fn hash_consistent_with_eq() {
    use std::collections::HashSet;

    assert_eq!(c(1.0, 2.0).hash_code(), c(1.0, 2.0).hash_code());
    assert_ne!(c(1.0, 2.0).hash_code(), c(2.0, 1.0).hash_code());

    let set: HashSet<C> = [c(1.0, 2.0), c(1.0, 2.0), c(2.0, 1.0)].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn hash_code_formula() {
    let z = c(1.0, 2.0);
    let expected = 37u64.wrapping_mul(
        17u64
            .wrapping_mul(2.0_f64.to_bits())
            .wrapping_add(1.0_f64.to_bits()),
    );
    assert_eq!(z.hash_code(), expected);
}

#[test]
fn compare_lexicographic() {
    use core::cmp::Ordering;
    assert_eq!(c(1.0, 9.0).compare_to(&c(2.0, 0.0)), Ordering::Less);
    assert_eq!(c(3.0, 0.0).compare_to(&c(2.0, 9.0)), Ordering::Greater);
    assert_eq!(c(1.0, 1.0).compare_to(&c(1.0, 2.0)), Ordering::Less);
    assert_eq!(c(1.0, 3.0).compare_to(&c(1.0, 2.0)), Ordering::Greater);
    assert_eq!(c(1.0, 2.0).compare_to(&c(1.0, 2.0)), Ordering::Equal);
}

#[test]
fn compare_by_magnitude() {
    use core::cmp::Ordering;
    assert_eq!(c(3.0, 4.0).compare_to_abs(&c(0.0, 6.0)), Ordering::Less);
    assert_eq!(c(-6.0, 0.0).compare_to_abs(&c(3.0, 4.0)), Ordering::Greater);
    assert_eq!(c(3.0, 4.0).compare_to_abs(&c(4.0, 3.0)), Ordering::Equal);
    assert_eq!(C::nan().compare_to_abs(&C::nan()), Ordering::Equal);
}

#[test]
fn closeness() {
    assert!(c(1.0, 1.0).is_close(&c(1.0, 1.0 + 1e-9)));
    assert!(!c(1.0, 1.0).is_close(&c(1.0, 1.1)));
    assert!(c(1.0, 0.0).is_close_tol(&c(1.1, 0.0), Tolerance::new(0.2, 0.0)));
}

#[test]
fn closeness_absolute_only() {
    assert!(c(1.0, 0.0).is_close_abs(&c(1.1, 0.0), 0.2));
    assert!(!c(1.0, 0.0).is_close_abs(&c(1.1, 0.0), 0.05));
    // default relative part still applies
    assert!(c(1e6, 0.0).is_close_abs(&c(1e6 + 1.0, 0.0), 0.0));
}

#[test]
fn nan_is_never_close() {
    let nan_re = c(f64::NAN, 0.0);
    assert!(nan_re.abs().is_nan());
    assert!(!nan_re.is_close(&C::zero()));
    assert!(!C::zero().is_close(&nan_re));
    assert!(!c(0.0, f64::NAN).is_close_abs(&C::zero(), 1.0));
    assert!(!nan_re.is_close_tol(&nan_re, Tolerance::new(1.0, 1.0)));
}

#[test]
fn abs_of_infinite_parts() {
    assert_eq!(c(f64::INFINITY, f64::INFINITY).abs(), f64::INFINITY);
    assert_eq!(c(f64::NEG_INFINITY, 3.0).abs(), f64::INFINITY);
    assert_eq!(c(0.0, f64::NEG_INFINITY).abs(), f64::INFINITY);
}

// ── Display / f32 ────────────────────────────────────────────

#[test]
fn display() {
    assert_eq!(format!("{}", c(1.0, 2.0)), "1 + 2i");
    assert_eq!(format!("{}", c(1.5, -2.0)), "1.5 - 2i");
}

#[test]
fn f32_works() {
    let z = Complex::new(3.0_f32, 4.0);
    assert_eq!(z.abs(), 5.0_f32);
    let r = Complex::new(-4.0_f32, 0.0).sqrt();
    assert_eq!(r, Complex::new(0.0_f32, 2.0));
    assert!((z * z.invert()).is_close(&Complex::one()));
}
