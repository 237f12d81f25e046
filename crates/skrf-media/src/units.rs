//! Length units
//!
//! Lengths handed to media constructors and network builders may be given as
//! a physical distance, as a propagation delay, or as an electrical phase.
//! Only the first two can be resolved without a medium; phase lengths are
//! resolved by [`crate::media::Media::to_meters`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{INCH, MIL};
use crate::error::{MediaError, MediaResult};
use crate::math::degree_2_radian;

/// Every unit string accepted by [`LengthUnit::from_str`].
pub const ACCEPTED_UNITS: [&str; 11] = [
    "deg", "rad", "m", "cm", "um", "in", "mil", "s", "us", "ns", "ps",
];

/// What a length unit measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// Phase at a reference frequency (deg, rad)
    Electrical,
    /// Physical distance (m, cm, um, in, mil)
    Physical,
    /// Propagation delay (s, us, ns, ps)
    Time,
}

/// A recognized length unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Deg,
    Rad,
    #[default]
    M,
    Cm,
    Um,
    In,
    Mil,
    S,
    Us,
    Ns,
    Ps,
}

impl LengthUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Deg => "deg",
            LengthUnit::Rad => "rad",
            LengthUnit::M => "m",
            LengthUnit::Cm => "cm",
            LengthUnit::Um => "um",
            LengthUnit::In => "in",
            LengthUnit::Mil => "mil",
            LengthUnit::S => "s",
            LengthUnit::Us => "us",
            LengthUnit::Ns => "ns",
            LengthUnit::Ps => "ps",
        }
    }

    pub fn kind(&self) -> UnitKind {
        match self {
            LengthUnit::Deg | LengthUnit::Rad => UnitKind::Electrical,
            LengthUnit::M | LengthUnit::Cm | LengthUnit::Um | LengthUnit::In | LengthUnit::Mil => {
                UnitKind::Physical
            }
            LengthUnit::S | LengthUnit::Us | LengthUnit::Ns | LengthUnit::Ps => UnitKind::Time,
        }
    }

    /// Size of one unit in the base quantity of its kind: meters, seconds or
    /// radians.
    pub fn scale(&self) -> f64 {
        match self {
            LengthUnit::Deg => degree_2_radian(1.0),
            LengthUnit::Rad => 1.0,
            LengthUnit::M => 1.0,
            LengthUnit::Cm => 1e-2,
            LengthUnit::Um => 1e-6,
            LengthUnit::In => INCH,
            LengthUnit::Mil => MIL,
            LengthUnit::S => 1.0,
            LengthUnit::Us => 1e-6,
            LengthUnit::Ns => 1e-9,
            LengthUnit::Ps => 1e-12,
        }
    }
}

impl FromStr for LengthUnit {
    type Err = MediaError;

    /// Parse a unit string (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deg" => Ok(LengthUnit::Deg),
            "rad" => Ok(LengthUnit::Rad),
            "m" => Ok(LengthUnit::M),
            "cm" => Ok(LengthUnit::Cm),
            "um" => Ok(LengthUnit::Um),
            "in" => Ok(LengthUnit::In),
            "mil" => Ok(LengthUnit::Mil),
            "s" => Ok(LengthUnit::S),
            "us" => Ok(LengthUnit::Us),
            "ns" => Ok(LengthUnit::Ns),
            "ps" => Ok(LengthUnit::Ps),
            _ => Err(MediaError::UnknownUnit(s.to_string())),
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a physical or time length to meters.
///
/// Time units are scaled by the propagation velocity `v` (m/s). Electrical
/// units fail with [`MediaError::UnsupportedUnit`] since they depend on the
/// medium's phase constant.
pub fn to_meters(d: f64, unit: LengthUnit, v: f64) -> MediaResult<f64> {
    if !d.is_finite() {
        return Err(MediaError::InvalidLength(d));
    }
    match unit.kind() {
        UnitKind::Physical => Ok(d * unit.scale()),
        UnitKind::Time => Ok(d * unit.scale() * v),
        UnitKind::Electrical => Err(MediaError::UnsupportedUnit(unit.as_str())),
    }
}
