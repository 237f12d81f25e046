//! Scalar conversions between linear, logarithmic and angular quantities.

use num_complex::Complex64;
use std::f64::consts::{LN_10, PI};

/// `20·log10|z|`
pub fn complex_2_db(z: Complex64) -> f64 {
    20.0 * z.norm().log10()
}

/// Argument of `z` in degrees.
pub fn complex_2_degree(z: Complex64) -> f64 {
    z.arg().to_degrees()
}

/// Voltage ratio for a level in dB.
pub fn db_2_mag(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// Attenuation in dB for a value in nepers (1 Np ≈ 8.686 dB).
pub fn np_2_db(np: f64) -> f64 {
    np * 20.0 / LN_10
}

/// Angle in radians for a value in degrees.
pub fn degree_2_radian(deg: f64) -> f64 {
    deg * PI / 180.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_complex_2_db_and_degree() {
        let z = Complex64::new(6.0, 8.0);
        assert_relative_eq!(complex_2_db(z), 20.0, epsilon = 1e-10);
        assert_relative_eq!(complex_2_degree(Complex64::new(0.0, -1.0)), -90.0, epsilon = 1e-10);
    }

    #[test]
    fn test_db_2_mag() {
        assert_relative_eq!(db_2_mag(-20.0), 0.1, epsilon = 1e-12);
        assert_relative_eq!(db_2_mag(0.0), 1.0);
    }

    #[test]
    fn test_np_2_db() {
        assert_relative_eq!(np_2_db(1.0), 8.685_889_638, epsilon = 1e-8);
    }

    #[test]
    fn test_degree_2_radian() {
        assert_relative_eq!(degree_2_radian(180.0), PI, epsilon = 1e-12);
    }
}
