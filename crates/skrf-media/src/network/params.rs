//! Network parameter accessors
//!
//! S-parameter views and conversions to other parameter sets.

use anyhow::Result;
use ndarray::{Array2, Array3};
use num_complex::Complex64;

use super::core::Network;
use crate::frequency::Frequency;
use crate::math::conversions::{complex_2_db, complex_2_degree};
use crate::math::transforms::{s2a, s2z};

impl Network {
    /// Get reference impedance [nfreq, nports]
    pub fn z0(&self) -> &Array2<Complex64> {
        &self.z0
    }

    /// Get S-parameters
    pub fn s(&self) -> &Array3<Complex64> {
        &self.s
    }

    /// Get frequency object
    pub fn frequency(&self) -> &Frequency {
        &self.frequency
    }

    /// Get frequency vector in Hz
    pub fn f(&self) -> &[f64] {
        self.frequency.f()
    }

    /// Get S-parameter in dB
    pub fn s_db(&self) -> Array3<f64> {
        self.s.mapv(complex_2_db)
    }

    /// Get S-parameter phase in degrees
    pub fn s_deg(&self) -> Array3<f64> {
        self.s.mapv(complex_2_degree)
    }

    /// Get Z-parameters
    ///
    /// Fails where I - S is singular (an open, for example).
    pub fn z(&self) -> Result<Array3<Complex64>> {
        s2z(&self.s, &self.z0)
    }

    /// Get ABCD parameters (chain/cascade parameters) of a 2-port
    ///
    /// ABCD matrix organization: [[A, B], [C, D]]
    pub fn a(&self) -> Result<Array3<Complex64>> {
        s2a(&self.s, &self.z0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::{FrequencyUnit, SweepType};
    use approx::assert_relative_eq;

    #[test]
    fn test_s_db_and_deg() {
        let freq = Frequency::new(1.0, 1.0, 1, FrequencyUnit::GHz, SweepType::Linear);
        let mut s = Array3::<Complex64>::zeros((1, 1, 1));
        // |S11| = 0.1 at 90° -> -20 dB
        s[[0, 0, 0]] = Complex64::new(0.0, 0.1);
        let ntwk = Network::with_uniform_z0(freq, s, Complex64::new(50.0, 0.0)).unwrap();

        assert_relative_eq!(ntwk.s_db()[[0, 0, 0]], -20.0, epsilon = 1e-10);
        assert_relative_eq!(ntwk.s_deg()[[0, 0, 0]], 90.0, epsilon = 1e-10);
    }
}
