//! Branch-selected complex roots
//!
//! Library square roots already return the principal value, but on the
//! negative real axis the sign of the result follows the sign of a zero
//! imaginary part. Passive transmission-line quantities need a fixed rule,
//! so every root taken for γ or Z0 goes through [`principal_root`].

use std::f64::consts::FRAC_PI_2;

use num_complex::Complex64;

/// Square root with Re ≥ 0; on the imaginary axis the root with Im ≥ 0.
#[inline]
pub fn principal_root(z: Complex64) -> Complex64 {
    let r = z.sqrt();
    if r.re < 0.0 || (r.re == 0.0 && r.im < 0.0) {
        -r
    } else {
        r
    }
}

/// `(j·x)^p` for `x ≥ 0` on the principal branch.
///
/// Evaluated in polar form as `x^p · e^{j·p·π/2}`, which is continuous in
/// both `x` and `p`. `p = 1` returns `j·x` exactly and `0^0` is taken as 1.
pub fn imaginary_power(x: f64, p: f64) -> Complex64 {
    if x == 0.0 {
        return if p == 0.0 {
            Complex64::new(1.0, 0.0)
        } else {
            Complex64::new(0.0, 0.0)
        };
    }
    if p == 1.0 {
        return Complex64::new(0.0, x);
    }
    Complex64::from_polar(x.powf(p), p * FRAC_PI_2)
}
