//! Distributed-circuit engine
//!
//! Turns RLGC samples into the per-frequency series impedance, shunt
//! admittance, propagation constant and characteristic impedance of a
//! uniform line:
//!
//! ```text
//! Zs = R + jωL        Ys = G + jωC
//! γ  = sqrt(Zs·Ys)    Z0 = sqrt(Zs/Ys)
//! ```
//!
//! Both roots are taken on the principal branch (Re ≥ 0), so a passive
//! line always has non-negative attenuation and resistance.

use std::f64::consts::PI;

use ndarray::Array1;
use num_complex::Complex64;

use super::rlgc::Rlgc;
use crate::constants::ROOT_CONSISTENCY_TOL;
use crate::error::{MediaError, MediaResult};
use crate::math::principal_root;

fn check_inputs(rlgc: &Rlgc, w: &Array1<f64>) -> MediaResult<()> {
    if rlgc.len() != w.len() {
        return Err(MediaError::LengthMismatch {
            expected: w.len(),
            actual: rlgc.len(),
        });
    }
    if let Some(index) = w.iter().position(|v| !v.is_finite()) {
        return Err(MediaError::NonFinite {
            quantity: "angular frequency",
            index,
        });
    }
    if let Some((quantity, index)) = rlgc.first_non_finite() {
        return Err(MediaError::NonFinite { quantity, index });
    }
    Ok(())
}

fn check_output(values: &Array1<Complex64>, quantity: &'static str) -> MediaResult<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(MediaError::NonFinite { quantity, index }),
        None => Ok(()),
    }
}

/// Series impedance per meter, `R + jωL`.
pub fn series_impedance(rlgc: &Rlgc, w: &Array1<f64>) -> Array1<Complex64> {
    Array1::from_iter(
        rlgc.r
            .iter()
            .zip(&rlgc.l)
            .zip(w)
            .map(|((&r, &l), &w)| Complex64::new(r, w * l)),
    )
}

/// Shunt admittance per meter, `G + jωC`.
pub fn shunt_admittance(rlgc: &Rlgc, w: &Array1<f64>) -> Array1<Complex64> {
    Array1::from_iter(
        rlgc.g
            .iter()
            .zip(&rlgc.c)
            .zip(w)
            .map(|((&g, &c), &w)| Complex64::new(g, w * c)),
    )
}

/// Propagation constant `γ = α + jβ` (1/m).
pub fn propagation_constant(rlgc: &Rlgc, w: &Array1<f64>) -> MediaResult<Array1<Complex64>> {
    check_inputs(rlgc, w)?;
    let zs = series_impedance(rlgc, w);
    let ys = shunt_admittance(rlgc, w);
    let gamma = Array1::from_iter(zs.iter().zip(&ys).map(|(&z, &y)| principal_root(z * y)));
    check_output(&gamma, "propagation constant")?;
    Ok(gamma)
}

/// Characteristic impedance `Z0` (Ω).
///
/// Fails with [`MediaError::ZeroShuntAdmittance`] at the first point where
/// `G + jωC` is exactly zero.
pub fn characteristic_impedance(rlgc: &Rlgc, w: &Array1<f64>) -> MediaResult<Array1<Complex64>> {
    check_inputs(rlgc, w)?;
    let zs = series_impedance(rlgc, w);
    let ys = shunt_admittance(rlgc, w);

    if let Some(index) = ys.iter().position(|y| y.re == 0.0 && y.im == 0.0) {
        return Err(MediaError::ZeroShuntAdmittance {
            index,
            frequency: w[index] / (2.0 * PI),
        });
    }

    let z0 = Array1::from_iter(zs.iter().zip(&ys).map(|(&z, &y)| principal_root(z / y)));
    check_output(&z0, "characteristic impedance")?;
    Ok(z0)
}

/// Frequency points at which a medium is not physically passive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassivityReport {
    /// Indices with R < 0
    pub negative_resistance: Vec<usize>,
    /// Indices with G < 0
    pub negative_conductance: Vec<usize>,
    /// Indices where `γ·Z0` does not reproduce `R + jωL`
    pub inconsistent_roots: Vec<usize>,
}

impl PassivityReport {
    /// Inspect an RLGC set and the γ/Z0 pair derived from it.
    pub fn assess(
        rlgc: &Rlgc,
        w: &Array1<f64>,
        gamma: &Array1<Complex64>,
        z0: &Array1<Complex64>,
    ) -> Self {
        let negative_resistance = rlgc
            .r
            .iter()
            .enumerate()
            .filter(|(_, &r)| r < 0.0)
            .map(|(i, _)| i)
            .collect();
        let negative_conductance = rlgc
            .g
            .iter()
            .enumerate()
            .filter(|(_, &g)| g < 0.0)
            .map(|(i, _)| i)
            .collect();

        let zs = series_impedance(rlgc, w);
        let inconsistent_roots = zs
            .iter()
            .zip(gamma.iter().zip(z0))
            .enumerate()
            .filter(|(_, (&z, (&g, &z0)))| (g * z0 - z).norm() > ROOT_CONSISTENCY_TOL * z.norm())
            .map(|(i, _)| i)
            .collect();

        Self {
            negative_resistance,
            negative_conductance,
            inconsistent_roots,
        }
    }

    pub fn is_passive(&self) -> bool {
        self.negative_resistance.is_empty()
            && self.negative_conductance.is_empty()
            && self.inconsistent_roots.is_empty()
    }

    /// Sorted, de-duplicated union of all flagged indices.
    pub fn flagged_indices(&self) -> Vec<usize> {
        let mut all: Vec<usize> = self
            .negative_resistance
            .iter()
            .chain(&self.negative_conductance)
            .chain(&self.inconsistent_roots)
            .copied()
            .collect();
        all.sort_unstable();
        all.dedup();
        all
    }
}
