//! Debye relaxation dielectric
//!
//! Single-pole relaxation model:
//!
//! ```text
//! εr(ω) = ε∞ + (εs − ε∞) / (1 + jωτ)
//!       = ε′ − jε″
//! ε′ = ε∞ + (εs − ε∞) / (1 + ω²τ²)
//! ε″ = (εs − ε∞)·ωτ / (1 + ω²τ²)
//! ```
//!
//! The dielectric fills a TEM line with vacuum permeability, giving
//! `C = ε₀ε′`, `G = ωε₀ε″`, `L = μ₀`, `R = 0`.

use ndarray::Array1;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use super::rlgc::{Rlgc, RlgcGenerator};
use crate::constants::PhysicalConstants;
use crate::error::{MediaError, MediaResult};
use crate::frequency::Frequency;

/// Debye dielectric parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Debye {
    /// Static relative permittivity εs
    pub es: f64,
    /// High-frequency relative permittivity ε∞
    pub einf: f64,
    /// Relaxation time τ (s)
    pub tau: f64,
}

impl Default for Debye {
    /// Vacuum: εs = ε∞ = 1, τ = 0
    fn default() -> Self {
        Self {
            es: 1.0,
            einf: 1.0,
            tau: 0.0,
        }
    }
}

impl Debye {
    pub fn new(es: f64, einf: f64, tau: f64) -> Self {
        Self { es, einf, tau }
    }

    /// Liquid water near room temperature.
    pub fn water() -> Self {
        Self::new(78.408, 5.2, 8.27e-12)
    }

    /// Relative complex permittivity at angular frequency `w`.
    pub fn permittivity(&self, w: f64) -> Complex64 {
        let x = w * self.tau;
        let denom = 1.0 + x * x;
        let delta = self.es - self.einf;
        Complex64::new(self.einf + delta / denom, -delta * x / denom)
    }

    /// Dielectric loss factor ε″ at angular frequency `w`.
    pub fn loss_factor(&self, w: f64) -> f64 {
        -self.permittivity(w).im
    }

    /// Frequency of peak loss, 1/(2πτ) in Hz. `None` for τ = 0.
    pub fn relaxation_frequency(&self) -> Option<f64> {
        (self.tau > 0.0).then(|| 1.0 / (2.0 * std::f64::consts::PI * self.tau))
    }

    pub(crate) fn validate(&self) -> MediaResult<()> {
        for (name, value) in [("es", self.es), ("einf", self.einf)] {
            if !value.is_finite() {
                return Err(MediaError::InvalidParameter {
                    name,
                    value,
                    reason: "must be finite",
                });
            }
        }
        if !(self.tau.is_finite() && self.tau >= 0.0) {
            return Err(MediaError::InvalidParameter {
                name: "tau",
                value: self.tau,
                reason: "relaxation time must be finite and non-negative",
            });
        }
        Ok(())
    }
}

impl RlgcGenerator for Debye {
    fn name(&self) -> &'static str {
        "Debye Media"
    }

    fn generate(&self, frequency: &Frequency, constants: &PhysicalConstants) -> MediaResult<Rlgc> {
        self.validate()?;
        let w = frequency.w();
        let eps = w.mapv(|w| self.permittivity(w) * constants.epsilon_0);
        let mu = Array1::from_elem(w.len(), Complex64::new(constants.mu_0, 0.0));
        Rlgc::from_constitutive(&w, &eps, &mu)
    }
}
