//! Network property checks
//!
//! Provides methods to test network properties like passivity, reciprocity,
//! losslessness, and symmetry.

use num_complex::Complex64;

use super::core::Network;
use crate::constants::PROPERTY_TOL;

impl Network {
    /// Test if network is reciprocal
    ///
    /// A network is reciprocal if S = S^T (transpose).
    pub fn is_reciprocal(&self, tol: Option<f64>) -> bool {
        let tol = tol.unwrap_or(PROPERTY_TOL);
        let nports = self.nports();

        (0..self.nfreq()).all(|f| {
            (0..nports).all(|i| {
                (i + 1..nports).all(|j| (self.s[[f, i, j]] - self.s[[f, j, i]]).norm() <= tol)
            })
        })
    }

    /// Test if network is passive
    ///
    /// Simplified check: every column of S carries at most unit power.
    pub fn is_passive(&self, tol: Option<f64>) -> bool {
        let tol = tol.unwrap_or(PROPERTY_TOL);
        let nports = self.nports();

        (0..self.nfreq()).all(|f| {
            (0..nports).all(|i| {
                let sum_sq: f64 = (0..nports).map(|k| self.s[[f, k, i]].norm_sqr()).sum();
                sum_sq <= 1.0 + tol
            })
        })
    }

    /// Test if network is lossless
    ///
    /// A network is lossless if S is unitary: S^H * S = I
    pub fn is_lossless(&self, tol: Option<f64>) -> bool {
        let tol = tol.unwrap_or(PROPERTY_TOL);
        let nports = self.nports();

        for f in 0..self.nfreq() {
            for i in 0..nports {
                for j in 0..nports {
                    let sum: Complex64 = (0..nports)
                        .map(|k| self.s[[f, k, i]].conj() * self.s[[f, k, j]])
                        .sum();
                    let expected = if i == j { 1.0 } else { 0.0 };
                    if (sum.re - expected).abs() > tol || sum.im.abs() > tol {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Test if 2-port network has symmetric reflection coefficients (S11 = S22)
    ///
    /// Returns None for networks with other port counts.
    pub fn is_symmetric_2port(&self, tol: Option<f64>) -> Option<bool> {
        if self.nports() != 2 {
            return None;
        }
        let tol = tol.unwrap_or(PROPERTY_TOL);
        Some((0..self.nfreq()).all(|f| (self.s[[f, 0, 0]] - self.s[[f, 1, 1]]).norm() <= tol))
    }
}
