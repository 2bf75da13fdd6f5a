use crate::traits::FloatScalar;

use super::Complex;

/// Beyond this imaginary (for `tan`) or real (for `tanh`) magnitude the
/// hyperbolic terms overflow while the result has already converged to ±1.
const SATURATION: f64 = 20.0;

// ── Roots, powers, exponentials ──────────────────────────────────────

impl<T: FloatScalar> Complex<T> {
    /// Principal square root (non-negative real part).
    ///
    /// The branch is chosen on the sign of the real part so that the
    /// cancellation-prone term is never formed.
    ///
    /// ```
    /// use numkit::Complex;
    /// let z = Complex::new(-4.0, 0.0).sqrt();
    /// assert_eq!(z, Complex::new(0.0, 2.0));
    /// ```
    pub fn sqrt(&self) -> Self {
        if self.re == T::zero() && self.im == T::zero() {
            return Self::zero();
        }
        let two = T::lit(2.0);
        let t = (T::lit(0.5) * (self.re.abs() + self.abs())).sqrt();
        if self.re >= T::zero() {
            Self::new(t, self.im / (two * t))
        } else {
            Self::new(self.im.abs() / (two * t), t.copysign(self.im))
        }
    }

    /// `sqrt(1 - z²)`, the building block of the inverse trig functions.
    #[inline]
    pub fn sqrt1z(&self) -> Self {
        (Self::one() - *self * *self).sqrt()
    }

    /// Principal natural logarithm `ln|z| + i·arg(z)`.
    ///
    /// `log(0)` is `-∞ + 0i`.
    #[inline]
    pub fn log(&self) -> Self {
        Self::new(self.abs().ln(), self.arg())
    }

    /// Alias for [`log`](Complex::log).
    #[inline]
    pub fn ln(&self) -> Self {
        self.log()
    }

    /// Base-10 logarithm.
    #[inline]
    pub fn log10(&self) -> Self {
        self.log() / T::lit(core::f64::consts::LN_10)
    }

    /// `e^z = e^re·(cos im + i sin im)`.
    #[inline]
    pub fn exp(&self) -> Self {
        let r = self.re.exp();
        let (s, c) = self.im.sin_cos();
        Self::new(r * c, r * s)
    }

    /// Principal power `exp(w · log(z))`.
    ///
    /// ```
    /// use numkit::Complex;
    /// let i = Complex::<f64>::i();
    /// // i^i = e^(-π/2)
    /// let r = i.pow(&i);
    /// assert!((r.re - (-core::f64::consts::FRAC_PI_2).exp()).abs() < 1e-15);
    /// assert!(r.im.abs() < 1e-15);
    /// ```
    #[inline]
    pub fn pow(&self, w: &Self) -> Self {
        (*w * self.log()).exp()
    }

    /// Principal power with a real exponent, `exp(x · log(z))`.
    #[inline]
    pub fn powf(&self, x: T) -> Self {
        (self.log() * x).exp()
    }

    /// Integer power by repeated squaring (exact for small exponents,
    /// no branch cut).
    pub fn powi(&self, n: i32) -> Self {
        let mut base = *self;
        let mut e = n.unsigned_abs();
        let mut acc = Self::one();
        while e > 0 {
            if e & 1 == 1 {
                acc = acc * base;
            }
            base = base * base;
            e >>= 1;
        }
        if n < 0 {
            acc.invert()
        } else {
            acc
        }
    }

    /// Replace the receiver with its principal square root.
    #[inline]
    pub fn sqrt_in_place(&mut self) {
        *self = self.sqrt();
    }

    /// Replace the receiver with `e^z`.
    #[inline]
    pub fn exp_in_place(&mut self) {
        *self = self.exp();
    }

    /// Replace the receiver with its principal logarithm.
    #[inline]
    pub fn log_in_place(&mut self) {
        *self = self.log();
    }

    /// Replace the receiver with `z^w`.
    #[inline]
    pub fn pow_in_place(&mut self, w: &Self) {
        *self = self.pow(w);
    }
}

// ── Trigonometric and hyperbolic ─────────────────────────────────────

impl<T: FloatScalar> Complex<T> {
    /// `sin(re)cosh(im) + i cos(re)sinh(im)`.
    #[inline]
    pub fn sin(&self) -> Self {
        let (s, c) = self.re.sin_cos();
        Self::new(s * self.im.cosh(), c * self.im.sinh())
    }

    /// `cos(re)cosh(im) - i sin(re)sinh(im)`.
    #[inline]
    pub fn cos(&self) -> Self {
        let (s, c) = self.re.sin_cos();
        Self::new(c * self.im.cosh(), -(s * self.im.sinh()))
    }

    /// `(sin 2re + i sinh 2im) / (cos 2re + cosh 2im)`.
    ///
    /// Returns exactly `±i` once `|im| > 20`.
    pub fn tan(&self) -> Self {
        let lim = T::lit(SATURATION);
        if self.im > lim {
            return Self::new(T::zero(), T::one());
        }
        if self.im < -lim {
            return Self::new(T::zero(), -T::one());
        }
        let two = T::lit(2.0);
        let (re2, im2) = (two * self.re, two * self.im);
        let d = re2.cos() + im2.cosh();
        Self::new(re2.sin() / d, im2.sinh() / d)
    }

    /// `sinh(re)cos(im) + i cosh(re)sin(im)`.
    #[inline]
    pub fn sinh(&self) -> Self {
        let (s, c) = self.im.sin_cos();
        Self::new(self.re.sinh() * c, self.re.cosh() * s)
    }

    /// `cosh(re)cos(im) + i sinh(re)sin(im)`.
    #[inline]
    pub fn cosh(&self) -> Self {
        let (s, c) = self.im.sin_cos();
        Self::new(self.re.cosh() * c, self.re.sinh() * s)
    }

    /// `(sinh 2re + i sin 2im) / (cosh 2re + cos 2im)`.
    ///
    /// Returns exactly `±1` once `|re| > 20`.
    pub fn tanh(&self) -> Self {
        let lim = T::lit(SATURATION);
        if self.re > lim {
            return Self::new(T::one(), T::zero());
        }
        if self.re < -lim {
            return Self::new(-T::one(), T::zero());
        }
        let two = T::lit(2.0);
        let (re2, im2) = (two * self.re, two * self.im);
        let d = re2.cosh() + im2.cos();
        Self::new(re2.sinh() / d, im2.sin() / d)
    }

    /// Inverse sine, `-i · log(sqrt(1 - z²) + i·z)`.
    #[inline]
    pub fn asin(&self) -> Self {
        let iz = Self::new(-self.im, self.re);
        (self.sqrt1z() + iz).log().mul_neg_i()
    }

    /// Inverse cosine, `-i · log(z + i·sqrt(1 - z²))`.
    #[inline]
    pub fn acos(&self) -> Self {
        let s = self.sqrt1z();
        let i_s = Self::new(-s.im, s.re);
        (*self + i_s).log().mul_neg_i()
    }

    /// Inverse tangent, `(i/2) · log((i + z) / (i - z))`.
    ///
    /// `atan(±i)` is infinite/NaN.
    #[inline]
    pub fn atan(&self) -> Self {
        let i = Self::i();
        let l = ((i + *self) / (i - *self)).log();
        Self::new(-l.im, l.re) * T::lit(0.5)
    }

    /// Multiply by `-i`: `(re + im·i)(-i) = im - re·i`.
    #[inline]
    fn mul_neg_i(self) -> Self {
        Self::new(self.im, -self.re)
    }
}
