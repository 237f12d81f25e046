//! Frequency module - represents a frequency band
//!
//! Provides a convenient way to work with frequency vectors with units.

use std::f64::consts::PI;
use std::fmt;

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{MediaError, MediaResult};

/// Frequency unit enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FrequencyUnit {
    #[serde(rename = "Hz", alias = "hz")]
    Hz,
    #[serde(rename = "kHz", alias = "khz")]
    KHz,
    #[serde(rename = "MHz", alias = "mhz")]
    MHz,
    #[default]
    #[serde(rename = "GHz", alias = "ghz")]
    GHz,
    #[serde(rename = "THz", alias = "thz")]
    THz,
}

impl FrequencyUnit {
    /// Get the multiplier to convert to Hz
    pub fn multiplier(&self) -> f64 {
        match self {
            FrequencyUnit::Hz => 1.0,
            FrequencyUnit::KHz => 1e3,
            FrequencyUnit::MHz => 1e6,
            FrequencyUnit::GHz => 1e9,
            FrequencyUnit::THz => 1e12,
        }
    }

    /// Display label ("Hz", "kHz", ...)
    pub fn label(&self) -> &'static str {
        match self {
            FrequencyUnit::Hz => "Hz",
            FrequencyUnit::KHz => "kHz",
            FrequencyUnit::MHz => "MHz",
            FrequencyUnit::GHz => "GHz",
            FrequencyUnit::THz => "THz",
        }
    }
}

impl fmt::Display for FrequencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sweep type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SweepType {
    #[default]
    Linear,
    Log,
}

/// A frequency band representation
#[derive(Debug, Clone, PartialEq)]
pub struct Frequency {
    /// Frequency vector in Hz
    f: Vec<f64>,
    /// Display unit
    unit: FrequencyUnit,
}

impl Frequency {
    /// Create a new Frequency with start/stop/npoints
    ///
    /// # Arguments
    /// * `start` - Start frequency in the specified unit
    /// * `stop` - Stop frequency in the specified unit
    /// * `npoints` - Number of frequency points
    /// * `unit` - Frequency unit
    /// * `sweep_type` - Linear or logarithmic sweep
    ///
    /// # Example
    /// ```
    /// use skrf_media::frequency::{Frequency, FrequencyUnit, SweepType};
    /// let freq = Frequency::new(1.0, 10.0, 10, FrequencyUnit::GHz, SweepType::Linear);
    /// assert_eq!(freq.npoints(), 10);
    /// ```
    pub fn new(
        start: f64,
        stop: f64,
        npoints: usize,
        unit: FrequencyUnit,
        sweep_type: SweepType,
    ) -> Self {
        let mult = unit.multiplier();
        let start_hz = start * mult;
        let stop_hz = stop * mult;

        let f = match (sweep_type, npoints) {
            (_, 0) => Vec::new(),
            (_, 1) => vec![start_hz],
            (SweepType::Linear, _) => {
                let step = (stop_hz - start_hz) / (npoints - 1) as f64;
                (0..npoints).map(|i| start_hz + i as f64 * step).collect()
            }
            (SweepType::Log, _) => {
                let log_start = start_hz.ln();
                let log_stop = stop_hz.ln();
                let log_step = (log_stop - log_start) / (npoints - 1) as f64;
                (0..npoints)
                    .map(|i| (log_start + i as f64 * log_step).exp())
                    .collect()
            }
        };

        Self { f, unit }
    }

    /// Create from a frequency vector given in `unit`
    pub fn from_f(f: Vec<f64>, unit: FrequencyUnit) -> Self {
        let mult = unit.multiplier();
        let f_hz: Vec<f64> = f.iter().map(|&x| x * mult).collect();
        Self { f: f_hz, unit }
    }

    /// Check that the axis can drive a medium: non-empty, finite,
    /// non-negative and non-decreasing.
    pub fn validate(&self) -> MediaResult<()> {
        if self.f.is_empty() {
            return Err(MediaError::EmptyFrequency);
        }
        for (index, &value) in self.f.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(MediaError::InvalidFrequency { index, value });
            }
            if index > 0 && value < self.f[index - 1] {
                return Err(MediaError::NonMonotonicFrequency {
                    index,
                    previous: self.f[index - 1],
                    current: value,
                });
            }
        }
        Ok(())
    }

    /// Get frequency vector in Hz
    #[inline]
    pub fn f(&self) -> &[f64] {
        &self.f
    }

    /// Angular frequency 2πf in rad/s
    pub fn w(&self) -> Array1<f64> {
        self.f.iter().map(|&x| 2.0 * PI * x).collect()
    }

    /// Get frequency vector in the current unit
    pub fn f_scaled(&self) -> Vec<f64> {
        let mult = self.unit.multiplier();
        self.f.iter().map(|&x| x / mult).collect()
    }

    /// Get the number of frequency points
    #[inline]
    pub fn npoints(&self) -> usize {
        self.f.len()
    }

    /// Get the start frequency in Hz
    #[inline]
    pub fn start(&self) -> f64 {
        *self.f.first().unwrap_or(&0.0)
    }

    /// Get the stop frequency in Hz
    #[inline]
    pub fn stop(&self) -> f64 {
        *self.f.last().unwrap_or(&0.0)
    }

    /// Index of the sample used as band centre for electrical lengths
    #[inline]
    pub fn center_index(&self) -> usize {
        self.f.len() / 2
    }

    /// Get the current unit
    #[inline]
    pub fn unit(&self) -> FrequencyUnit {
        self.unit
    }

    /// Band edges truncated to whole display units, e.g. `1-100 GHz`
    pub fn range_label(&self) -> String {
        let mult = self.unit.multiplier();
        format!(
            "{}-{} {}",
            (self.start() / mult).trunc() as i64,
            (self.stop() / mult).trunc() as i64,
            self.unit
        )
    }
}

impl fmt::Display for Frequency {
    /// `1-100 GHz, 3 pts`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} pts", self.range_label(), self.npoints())
    }
}
