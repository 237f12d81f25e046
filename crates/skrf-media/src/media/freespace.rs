//! Plane wave in a homogeneous medium.

use ndarray::Array1;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use super::rlgc::{Rlgc, RlgcGenerator};
use crate::constants::PhysicalConstants;
use crate::error::{MediaError, MediaResult};
use crate::frequency::Frequency;

/// Unbounded medium with constant complex εr and μr.
///
/// Z0 is the wave impedance `sqrt(μ/ε)` and γ the plane-wave propagation
/// constant. Losses follow `εr = ε′ − jε″`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Freespace {
    pub ep_r: Complex64,
    pub mu_r: Complex64,
}

impl Default for Freespace {
    fn default() -> Self {
        Self {
            ep_r: Complex64::new(1.0, 0.0),
            mu_r: Complex64::new(1.0, 0.0),
        }
    }
}

impl Freespace {
    pub fn new(ep_r: Complex64, mu_r: Complex64) -> Self {
        Self { ep_r, mu_r }
    }

    /// Lossless dielectric with relative permittivity `ep_r`
    pub fn dielectric(ep_r: f64) -> Self {
        Self::new(Complex64::new(ep_r, 0.0), Complex64::new(1.0, 0.0))
    }
}

impl RlgcGenerator for Freespace {
    fn name(&self) -> &'static str {
        "Freespace Media"
    }

    fn generate(&self, frequency: &Frequency, constants: &PhysicalConstants) -> MediaResult<Rlgc> {
        for (name, value) in [("ep_r", self.ep_r), ("mu_r", self.mu_r)] {
            if !value.is_finite() {
                return Err(MediaError::InvalidParameter {
                    name,
                    value: value.re,
                    reason: "must be finite",
                });
            }
        }
        let w = frequency.w();
        let eps = Array1::from_elem(w.len(), self.ep_r * constants.epsilon_0);
        let mu = Array1::from_elem(w.len(), self.mu_r * constants.mu_0);
        Rlgc::from_constitutive(&w, &eps, &mu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyUnit;
    use crate::media::{DistributedCircuit, Media};
    use approx::assert_relative_eq;

    #[test]
    fn test_vacuum_wave_impedance() {
        let freq = Frequency::from_f(vec![1.0, 2.0], FrequencyUnit::GHz);
        let air = DistributedCircuit::new(freq, Freespace::default()).unwrap();
        let eta = PhysicalConstants::SI.free_space_impedance();
        assert_relative_eq!(air.z0()[0].re, eta, max_relative = 1e-12);
        assert_relative_eq!(
            air.phase_velocity()[1],
            PhysicalConstants::SI.speed_of_light,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_dielectric_slows_wave() {
        let freq = Frequency::from_f(vec![1.0], FrequencyUnit::GHz);
        let glass = DistributedCircuit::new(freq, Freespace::dielectric(4.0)).unwrap();
        assert_relative_eq!(
            glass.phase_velocity()[0],
            PhysicalConstants::SI.speed_of_light / 2.0,
            max_relative = 1e-9
        );
    }
}
