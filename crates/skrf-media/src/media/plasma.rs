//! Cold collisional plasma
//!
//! Drude permittivity of a free-electron gas with density `ne` and
//! collision frequency `ν`:
//!
//! ```text
//! ωp² = ne·e² / (ε₀·mₑ)
//! εr  = 1 − ωp²/(ω² + ν²) − j·ωp²·ν / (ω·(ω² + ν²))
//! ```
//!
//! The imaginary term is singular at DC, so every frequency point must be
//! strictly positive.

use ndarray::Array1;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use super::rlgc::{Rlgc, RlgcGenerator};
use crate::constants::PhysicalConstants;
use crate::error::{MediaError, MediaResult};
use crate::frequency::Frequency;

/// Plasma parameters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Plasma {
    /// Electron density (m⁻³)
    pub ne: f64,
    /// Collision frequency (s⁻¹)
    pub nu: f64,
}

impl Plasma {
    pub fn new(ne: f64, nu: f64) -> Self {
        Self { ne, nu }
    }

    /// Angular plasma frequency ωp (rad/s)
    pub fn plasma_frequency(&self, constants: &PhysicalConstants) -> f64 {
        let e = constants.elementary_charge;
        (self.ne * e * e / (constants.epsilon_0 * constants.electron_mass)).sqrt()
    }

    /// Relative complex permittivity at angular frequency `w > 0`.
    pub fn permittivity(&self, w: f64, constants: &PhysicalConstants) -> Complex64 {
        let wp2 = self.plasma_frequency(constants).powi(2);
        let denom = w * w + self.nu * self.nu;
        Complex64::new(1.0 - wp2 / denom, -wp2 * self.nu / (w * denom))
    }

    fn validate(&self) -> MediaResult<()> {
        for (name, value) in [("ne", self.ne), ("nu", self.nu)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(MediaError::InvalidParameter {
                    name,
                    value,
                    reason: "must be finite and non-negative",
                });
            }
        }
        Ok(())
    }
}

impl RlgcGenerator for Plasma {
    fn name(&self) -> &'static str {
        "Plasma Media"
    }

    fn generate(&self, frequency: &Frequency, constants: &PhysicalConstants) -> MediaResult<Rlgc> {
        self.validate()?;
        if let Some(index) = frequency.f().iter().position(|&f| f == 0.0) {
            return Err(MediaError::ZeroFrequency {
                medium: self.name(),
                index,
            });
        }
        let w = frequency.w();
        let eps = w.mapv(|w| self.permittivity(w, constants) * constants.epsilon_0);
        let mu = Array1::from_elem(w.len(), Complex64::new(constants.mu_0, 0.0));
        Rlgc::from_constitutive(&w, &eps, &mu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyUnit;
    use approx::assert_relative_eq;

    #[test]
    fn test_plasma_frequency() {
        // ne = 1e18 m⁻³ gives fp ≈ 8.98 GHz
        let p = Plasma::new(1e18, 0.0);
        let fp = p.plasma_frequency(&PhysicalConstants::SI) / (2.0 * std::f64::consts::PI);
        assert_relative_eq!(fp, 8.978e9, max_relative = 1e-3);
    }

    #[test]
    fn test_empty_plasma_is_vacuum() {
        let eps = Plasma::default().permittivity(1e9, &PhysicalConstants::SI);
        assert_relative_eq!(eps.re, 1.0);
        assert_eq!(eps.im, 0.0);
    }

    #[test]
    fn test_collisions_are_lossy() {
        let k = PhysicalConstants::SI;
        let freq = Frequency::from_f(vec![5.0, 20.0], FrequencyUnit::GHz);
        let rlgc = Plasma::new(1e17, 1e9).generate(&freq, &k).unwrap();
        assert!(rlgc.g.iter().all(|&g| g > 0.0));
        assert!(rlgc.c.iter().all(|&c| c < k.epsilon_0));
    }

    #[test]
    fn test_zero_frequency_rejected() {
        let freq = Frequency::from_f(vec![0.0, 1.0], FrequencyUnit::GHz);
        let err = Plasma::new(1e17, 1e9)
            .generate(&freq, &PhysicalConstants::SI)
            .unwrap_err();
        assert!(matches!(err, MediaError::ZeroFrequency { index: 0, .. }));
    }
}
