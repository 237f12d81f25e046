//! Core Network struct and constructors
//!
//! Contains the fundamental Network data structure and factory methods.

use std::fmt;

use anyhow::{bail, Result};
use ndarray::{Array2, Array3};
use num_complex::Complex64;

use crate::frequency::Frequency;

/// An N-port electrical network
#[derive(Debug, Clone)]
pub struct Network {
    /// Frequency data
    pub frequency: Frequency,
    /// S-parameter data [nfreq, nports, nports]
    pub s: Array3<Complex64>,
    /// Reference impedance [nfreq, nports]
    pub z0: Array2<Complex64>,
    /// Network name
    pub name: Option<String>,
}

impl Network {
    /// Create a new Network from S-parameters
    ///
    /// Fails if `s` is not [nfreq, n, n] for the frequency axis or `z0` is
    /// not [nfreq, n].
    pub fn new(frequency: Frequency, s: Array3<Complex64>, z0: Array2<Complex64>) -> Result<Self> {
        let (nfreq, rows, cols) = s.dim();
        if rows != cols {
            bail!("S-parameter matrices must be square, got {}x{}", rows, cols);
        }
        if nfreq != frequency.npoints() {
            bail!(
                "frequency count mismatch: {} points vs {} S-matrices",
                frequency.npoints(),
                nfreq
            );
        }
        if z0.dim() != (nfreq, rows) {
            bail!(
                "z0 shape {:?} does not match [{}, {}]",
                z0.dim(),
                nfreq,
                rows
            );
        }
        Ok(Self {
            frequency,
            s,
            z0,
            name: None,
        })
    }

    /// Create a Network whose ports all share one reference impedance
    pub fn with_uniform_z0(frequency: Frequency, s: Array3<Complex64>, z0: Complex64) -> Result<Self> {
        let (nfreq, nports, _) = s.dim();
        Self::new(frequency, s, Array2::from_elem((nfreq, nports), z0))
    }

    /// Set the network name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Get the number of ports
    #[inline]
    pub fn nports(&self) -> usize {
        self.s.shape()[1]
    }

    /// Get the number of frequency points
    #[inline]
    pub fn nfreq(&self) -> usize {
        self.s.shape()[0]
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-Port Network: '{}',  {}",
            self.nports(),
            self.name.as_deref().unwrap_or(""),
            self.frequency
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::{FrequencyUnit, SweepType};

    #[test]
    fn test_network_creation() {
        let freq = Frequency::new(1.0, 10.0, 10, FrequencyUnit::GHz, SweepType::Linear);

        let s = Array3::<Complex64>::zeros((10, 2, 2));
        let ntwk = Network::with_uniform_z0(freq, s, Complex64::new(50.0, 0.0)).unwrap();

        assert_eq!(ntwk.nports(), 2);
        assert_eq!(ntwk.nfreq(), 10);
        assert_eq!(ntwk.z0[[3, 1]].re, 50.0);
    }

    #[test]
    fn test_network_shape_checks() {
        let freq = Frequency::new(1.0, 10.0, 10, FrequencyUnit::GHz, SweepType::Linear);
        let s = Array3::<Complex64>::zeros((9, 2, 2));
        assert!(Network::with_uniform_z0(freq.clone(), s, Complex64::new(50.0, 0.0)).is_err());

        let s = Array3::<Complex64>::zeros((10, 2, 2));
        let z0 = Array2::from_elem((10, 3), Complex64::new(50.0, 0.0));
        assert!(Network::new(freq, s, z0).is_err());
    }

    #[test]
    fn test_display() {
        let freq = Frequency::new(1.0, 10.0, 10, FrequencyUnit::GHz, SweepType::Linear);
        let s = Array3::<Complex64>::zeros((10, 2, 2));
        let ntwk = Network::with_uniform_z0(freq, s, Complex64::new(50.0, 0.0))
            .unwrap()
            .named("thru");
        assert_eq!(ntwk.to_string(), "2-Port Network: 'thru',  1-10 GHz, 10 pts");
    }
}
