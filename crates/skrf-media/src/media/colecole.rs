//! Cole-Cole dielectric
//!
//! Debye relaxation broadened by a distribution parameter α:
//!
//! ```text
//! εr(ω) = ε∞ + (εs − ε∞) / (1 + (jωτ)^(1−α))
//! ```
//!
//! α = 0 reduces to the Debye model. The fractional power is taken on the
//! principal branch, see [`imaginary_power`].

use ndarray::Array1;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use super::debye::Debye;
use super::rlgc::{Rlgc, RlgcGenerator};
use crate::constants::PhysicalConstants;
use crate::error::{MediaError, MediaResult};
use crate::frequency::Frequency;
use crate::math::imaginary_power;

/// Cole-Cole dielectric parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColeCole {
    /// Static relative permittivity εs
    pub es: f64,
    /// High-frequency relative permittivity ε∞
    pub einf: f64,
    /// Relaxation time τ (s)
    pub tau: f64,
    /// Broadening exponent, 0 ≤ α ≤ 1
    pub alpha: f64,
}

impl Default for ColeCole {
    fn default() -> Self {
        Self {
            es: 1.0,
            einf: 1.0,
            tau: 0.0,
            alpha: 0.0,
        }
    }
}

impl ColeCole {
    pub fn new(es: f64, einf: f64, tau: f64, alpha: f64) -> Self {
        Self {
            es,
            einf,
            tau,
            alpha,
        }
    }

    /// Liquid water near room temperature.
    pub fn water() -> Self {
        Self::new(78.408, 5.2, 8.27e-12, 0.02)
    }

    /// Relative complex permittivity at angular frequency `w`.
    pub fn permittivity(&self, w: f64) -> Complex64 {
        let delta = self.es - self.einf;
        let relaxation = Complex64::new(1.0, 0.0) + imaginary_power(w * self.tau, 1.0 - self.alpha);
        Complex64::new(self.einf, 0.0) + delta / relaxation
    }

    /// Dielectric loss factor ε″ at angular frequency `w`.
    pub fn loss_factor(&self, w: f64) -> f64 {
        -self.permittivity(w).im
    }

    fn validate(&self) -> MediaResult<()> {
        Debye::new(self.es, self.einf, self.tau).validate()?;
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(MediaError::InvalidParameter {
                name: "alpha",
                value: self.alpha,
                reason: "must lie in [0, 1]",
            });
        }
        Ok(())
    }
}

impl RlgcGenerator for ColeCole {
    fn name(&self) -> &'static str {
        "Cole-Cole Media"
    }

    fn generate(&self, frequency: &Frequency, constants: &PhysicalConstants) -> MediaResult<Rlgc> {
        self.validate()?;
        let w = frequency.w();
        let eps = w.mapv(|w| self.permittivity(w) * constants.epsilon_0);
        let mu = Array1::from_elem(w.len(), Complex64::new(constants.mu_0, 0.0));
        Rlgc::from_constitutive(&w, &eps, &mu)
    }
}
