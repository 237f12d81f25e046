//! Error types for media construction and network synthesis.

use thiserror::Error;

use crate::units::ACCEPTED_UNITS;

/// Errors raised while building a medium or deriving its quantities.
#[derive(Debug, Error)]
pub enum MediaError {
    /// The frequency axis has no points.
    #[error("frequency axis is empty")]
    EmptyFrequency,

    /// A frequency sample is smaller than its predecessor.
    #[error("frequency axis decreases at index {index}: {previous} Hz followed by {current} Hz")]
    NonMonotonicFrequency {
        index: usize,
        previous: f64,
        current: f64,
    },

    /// A frequency sample is negative or not finite.
    #[error("invalid frequency {value} Hz at index {index}")]
    InvalidFrequency { index: usize, value: f64 },

    /// A model with an ω⁻¹ term was evaluated at DC.
    #[error("{medium} is singular at zero frequency (index {index})")]
    ZeroFrequency { medium: &'static str, index: usize },

    /// Physically impossible geometry.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A physical parameter is outside its admissible range.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Length unit string not recognized.
    #[error("unknown length unit '{0}', expected one of: {units}", units = ACCEPTED_UNITS.join(", "))]
    UnknownUnit(String),

    /// Unit recognized, but meaningless without a medium (deg, rad).
    #[error("unit '{0}' is an electrical length and needs a medium to resolve")]
    UnsupportedUnit(&'static str),

    /// Length value is NaN or infinite.
    #[error("invalid length {0}")]
    InvalidLength(f64),

    /// An electrical or time length cannot be converted at the reference point.
    #[error("cannot convert {value} {unit} to meters at index {index}: {reason}")]
    UnresolvableLength {
        value: f64,
        unit: &'static str,
        index: usize,
        reason: &'static str,
    },

    /// G + jωC vanishes, leaving Z0 undefined.
    #[error("shunt admittance is zero at index {index} ({frequency} Hz), characteristic impedance undefined")]
    ZeroShuntAdmittance { index: usize, frequency: f64 },

    /// NaN or infinity in an input or derived array.
    #[error("non-finite {quantity} at index {index}")]
    NonFinite { quantity: &'static str, index: usize },

    /// Array lengths disagree with the frequency axis.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Failure inside the network connection algebra.
    #[error(transparent)]
    Network(#[from] anyhow::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for media operations.
pub type MediaResult<T> = Result<T, MediaError>;
