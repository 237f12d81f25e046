//! Frequency-independent RLGC line.

use serde::{Deserialize, Serialize};

use super::rlgc::{Rlgc, RlgcGenerator};
use crate::constants::PhysicalConstants;
use crate::error::{MediaError, MediaResult};
use crate::frequency::Frequency;

/// Line with constant per-unit-length parameters.
///
/// Defaults describe an air-like line of roughly 55.7 Ω.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstantRlgc {
    /// Series resistance (Ω/m)
    pub r: f64,
    /// Series inductance (H/m)
    pub l: f64,
    /// Shunt conductance (S/m)
    pub g: f64,
    /// Shunt capacitance (F/m)
    pub c: f64,
}

impl Default for ConstantRlgc {
    fn default() -> Self {
        Self {
            r: 0.0,
            l: 280.8666e-9,
            g: 0.0,
            c: 90.4444e-12,
        }
    }
}

impl ConstantRlgc {
    pub fn new(r: f64, l: f64, g: f64, c: f64) -> Self {
        Self { r, l, g, c }
    }

    /// R = G = 0
    pub fn lossless(l: f64, c: f64) -> Self {
        Self::new(0.0, l, 0.0, c)
    }
}

impl RlgcGenerator for ConstantRlgc {
    fn name(&self) -> &'static str {
        "Distributed Circuit"
    }

    fn generate(&self, frequency: &Frequency, _constants: &PhysicalConstants) -> MediaResult<Rlgc> {
        for (name, value) in [("r", self.r), ("l", self.l), ("g", self.g), ("c", self.c)] {
            if !value.is_finite() {
                return Err(MediaError::InvalidParameter {
                    name,
                    value,
                    reason: "must be finite",
                });
            }
        }
        Ok(Rlgc::constant(frequency.npoints(), self.r, self.l, self.g, self.c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyUnit;

    #[test]
    fn test_repeats_over_axis() {
        let freq = Frequency::from_f(vec![1.0, 2.0, 5.0, 9.0], FrequencyUnit::MHz);
        let rlgc = ConstantRlgc::new(1.0, 2.0, 3.0, 4.0)
            .generate(&freq, &PhysicalConstants::SI)
            .unwrap();
        assert_eq!(rlgc.len(), 4);
        assert!(rlgc.c.iter().all(|&c| c == 4.0));
    }

    #[test]
    fn test_non_finite_parameter_rejected() {
        let freq = Frequency::from_f(vec![1.0], FrequencyUnit::MHz);
        let err = ConstantRlgc::new(f64::NAN, 1.0, 0.0, 1.0)
            .generate(&freq, &PhysicalConstants::SI)
            .unwrap_err();
        assert!(matches!(err, MediaError::InvalidParameter { name: "r", .. }));
    }
}
