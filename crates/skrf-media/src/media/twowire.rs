//! Parallel two-wire line
//!
//! Two round conductors of radius `a` with centre spacing `D`, embedded in a
//! homogeneous dielectric:
//!
//! ```text
//! x = arccosh(D / 2a)
//! R = sqrt(ω·μ₀·μc / (2(πa)²·σc·(1 − (2a/D)²)))
//! L = μ₀·μr·x / π
//! C = π·ε₀·εr / x
//! G = π·ω·ε₀·εr·tanδ / x
//! ```
//!
//! Perfect conductors (σc = ∞) give R = 0 exactly.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::rlgc::{Rlgc, RlgcGenerator};
use crate::constants::PhysicalConstants;
use crate::error::{MediaError, MediaResult};
use crate::frequency::Frequency;
use crate::units::{self, LengthUnit};

fn perfect_conductor() -> f64 {
    f64::INFINITY
}

/// JSON has no infinity, so a perfect conductor is written as `"inf"`.
/// `null` and `"inf"` both read back as σc = ∞.
mod conductivity {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Value(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(sigma: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if *sigma == f64::INFINITY {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_f64(*sigma)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Option::<Repr>::deserialize(deserializer)? {
            None => Ok(f64::INFINITY),
            Some(Repr::Value(v)) => Ok(v),
            Some(Repr::Text(t)) if matches!(t.to_ascii_lowercase().as_str(), "inf" | "infinity") => {
                Ok(f64::INFINITY)
            }
            Some(Repr::Text(t)) => Err(D::Error::custom(format!(
                "expected a conductivity in S/m or \"inf\", got \"{t}\""
            ))),
        }
    }
}

fn unity() -> f64 {
    1.0
}

/// Two-wire line geometry and materials
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoWire {
    /// Wire radius, in `unit`
    pub a: f64,
    /// Centre-to-centre spacing, in `unit`
    pub d: f64,
    /// Conductor conductivity (S/m)
    #[serde(default = "perfect_conductor", with = "conductivity")]
    pub sigma_c: f64,
    /// Relative permeability of the conductors
    #[serde(default = "unity")]
    pub mu_c: f64,
    /// Relative permittivity of the dielectric
    #[serde(default = "unity")]
    pub eps_r: f64,
    /// Dielectric loss tangent
    #[serde(default)]
    pub tan_delta: f64,
    /// Relative permeability of the dielectric
    #[serde(default = "unity")]
    pub mu_r: f64,
    /// Unit of `a` and `d`
    #[serde(default)]
    pub unit: LengthUnit,
}

impl TwoWire {
    /// Lossless line in vacuum with perfect conductors.
    pub fn new(a: f64, d: f64, unit: LengthUnit) -> Self {
        Self {
            a,
            d,
            sigma_c: perfect_conductor(),
            mu_c: 1.0,
            eps_r: 1.0,
            tan_delta: 0.0,
            mu_r: 1.0,
            unit,
        }
    }

    pub fn with_conductor(mut self, sigma_c: f64, mu_c: f64) -> Self {
        self.sigma_c = sigma_c;
        self.mu_c = mu_c;
        self
    }

    pub fn with_dielectric(mut self, eps_r: f64, tan_delta: f64, mu_r: f64) -> Self {
        self.eps_r = eps_r;
        self.tan_delta = tan_delta;
        self.mu_r = mu_r;
        self
    }

    /// Radius and spacing in meters.
    pub fn dimensions_m(&self, constants: &PhysicalConstants) -> MediaResult<(f64, f64)> {
        let a = units::to_meters(self.a, self.unit, constants.speed_of_light)?;
        let d = units::to_meters(self.d, self.unit, constants.speed_of_light)?;
        Ok((a, d))
    }

    fn validate(&self, a: f64, d: f64) -> MediaResult<()> {
        if !(a > 0.0) {
            return Err(MediaError::InvalidGeometry(format!(
                "wire radius must be positive, got {a} m"
            )));
        }
        if !(d > 2.0 * a) {
            return Err(MediaError::InvalidGeometry(format!(
                "spacing D = {d} m must exceed the wire diameter 2a = {} m",
                2.0 * a
            )));
        }
        if !(self.sigma_c > 0.0) {
            return Err(MediaError::InvalidParameter {
                name: "sigma_c",
                value: self.sigma_c,
                reason: "conductivity must be positive",
            });
        }
        for (name, value) in [("mu_c", self.mu_c), ("eps_r", self.eps_r), ("mu_r", self.mu_r)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(MediaError::InvalidParameter {
                    name,
                    value,
                    reason: "must be finite and positive",
                });
            }
        }
        if !(self.tan_delta.is_finite() && self.tan_delta >= 0.0) {
            return Err(MediaError::InvalidParameter {
                name: "tan_delta",
                value: self.tan_delta,
                reason: "loss tangent must be finite and non-negative",
            });
        }
        Ok(())
    }
}

impl RlgcGenerator for TwoWire {
    fn name(&self) -> &'static str {
        "Two Wire T-line"
    }

    fn generate(&self, frequency: &Frequency, constants: &PhysicalConstants) -> MediaResult<Rlgc> {
        let (a, d) = self.dimensions_m(constants)?;
        self.validate(a, d)?;

        let inv_cosh = (d / (2.0 * a)).acosh();
        let eps = constants.epsilon_0 * self.eps_r;
        let w = frequency.w();

        let r = if self.sigma_c.is_infinite() {
            w.mapv(|_| 0.0)
        } else {
            let skin = 2.0 * (PI * a).powi(2) * self.sigma_c * (1.0 - (2.0 * a / d).powi(2));
            w.mapv(|w| (w * constants.mu_0 * self.mu_c / skin).sqrt())
        };
        let l = w.mapv(|_| constants.mu_0 * self.mu_r / PI * inv_cosh);
        let g = w.mapv(|w| PI * w * eps * self.tan_delta / inv_cosh);
        let c = w.mapv(|_| PI * eps / inv_cosh);

        Rlgc::new(r, l, g, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyUnit;
    use approx::assert_relative_eq;

    fn band() -> Frequency {
        Frequency::from_f(vec![1.0, 10.0], FrequencyUnit::MHz)
    }

    #[test]
    fn test_perfect_conductor_has_no_resistance() {
        let rlgc = TwoWire::new(0.5, 3.0, LengthUnit::Mil)
            .generate(&band(), &PhysicalConstants::SI)
            .unwrap();
        assert!(rlgc.r.iter().all(|&r| r == 0.0));
        assert!(rlgc.g.iter().all(|&g| g == 0.0));
    }

    #[test]
    fn test_lossless_speed_of_light() {
        // LC = μ₀ε₀ for air, independent of geometry
        let k = PhysicalConstants::SI;
        let rlgc = TwoWire::new(1.0, 10.0, LengthUnit::Cm)
            .generate(&band(), &k)
            .unwrap();
        assert_relative_eq!(rlgc.l[0] * rlgc.c[0], k.mu_0 * k.epsilon_0, max_relative = 1e-12);
    }

    #[test]
    fn test_finite_conductivity_scales_with_root_frequency() {
        let wire = TwoWire::new(0.5, 2.0, LengthUnit::Cm).with_conductor(5.8e7, 1.0);
        let rlgc = wire.generate(&band(), &PhysicalConstants::SI).unwrap();
        assert!(rlgc.r[0] > 0.0);
        assert_relative_eq!(rlgc.r[1] / rlgc.r[0], 10f64.sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn test_touching_wires_rejected() {
        let err = TwoWire::new(1.0, 2.0, LengthUnit::Cm)
            .generate(&band(), &PhysicalConstants::SI)
            .unwrap_err();
        assert!(matches!(err, MediaError::InvalidGeometry(_)));
    }

    #[test]
    fn test_electrical_unit_rejected() {
        let err = TwoWire::new(1.0, 5.0, LengthUnit::Deg)
            .generate(&band(), &PhysicalConstants::SI)
            .unwrap_err();
        assert!(matches!(err, MediaError::UnsupportedUnit("deg")));
    }

    #[test]
    fn test_conductivity_json_form() {
        let perfect = TwoWire::new(0.5, 4.0, LengthUnit::Cm);
        let json = serde_json::to_string(&perfect).unwrap();
        assert!(json.contains("\"sigma_c\":\"inf\""));
        let back: TwoWire = serde_json::from_str(&json).unwrap();
        assert_eq!(back, perfect);

        let copper = perfect.with_conductor(5.8e7, 1.0);
        let back: TwoWire = serde_json::from_str(&serde_json::to_string(&copper).unwrap()).unwrap();
        assert_eq!(back.sigma_c, 5.8e7);

        let null: TwoWire = serde_json::from_str(r#"{"a": 1, "d": 5, "sigma_c": null}"#).unwrap();
        assert!(null.sigma_c.is_infinite());
        assert!(serde_json::from_str::<TwoWire>(r#"{"a": 1, "d": 5, "sigma_c": "copper"}"#).is_err());
    }
}
