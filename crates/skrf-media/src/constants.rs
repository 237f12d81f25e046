//! Numerical and physical constants
//!
//! Provides standardized tolerance values used throughout the library and
//! the table of physical constants injected into the media parameter
//! generators.

/// Tolerance for detecting near-zero values in division and singularity checks.
pub const NEAR_ZERO: f64 = 1e-15;

/// Default tolerance for property checks (passivity, reciprocity, etc).
/// This is the tolerance used when None is passed to property check functions.
pub const PROPERTY_TOL: f64 = 1e-12;

/// Relative tolerance used when checking that a propagation constant and a
/// characteristic impedance form a consistent pair (γ·Z0 = R + jωL).
pub const ROOT_CONSISTENCY_TOL: f64 = 1e-9;

/// Tolerance for comparing reference impedances of connected ports.
pub const Z0_MATCH_TOL: f64 = 1e-9;

/// One inch in meters.
pub const INCH: f64 = 0.0254;

/// One mil (thousandth of an inch) in meters.
pub const MIL: f64 = 25.4e-6;

/// Physical constants consumed by the parameter generators.
///
/// Generators receive this table explicitly instead of reading globals, so
/// a model can be evaluated against alternative constant sets in tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Vacuum permittivity ε₀ (F/m)
    pub epsilon_0: f64,
    /// Vacuum permeability μ₀ (H/m)
    pub mu_0: f64,
    /// Elementary charge e (C)
    pub elementary_charge: f64,
    /// Electron mass mₑ (kg)
    pub electron_mass: f64,
    /// Speed of light in vacuum c (m/s)
    pub speed_of_light: f64,
}

impl PhysicalConstants {
    /// CODATA 2018 values.
    pub const SI: PhysicalConstants = PhysicalConstants {
        epsilon_0: 8.854_187_812_8e-12,
        mu_0: 1.256_637_062_12e-6,
        elementary_charge: 1.602_176_634e-19,
        electron_mass: 9.109_383_701_5e-31,
        speed_of_light: 299_792_458.0,
    };

    /// Intrinsic impedance of free space, sqrt(μ₀/ε₀).
    pub fn free_space_impedance(&self) -> f64 {
        (self.mu_0 / self.epsilon_0).sqrt()
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::SI
    }
}
