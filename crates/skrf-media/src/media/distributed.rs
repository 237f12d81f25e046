//! Distributed-circuit medium
//!
//! Couples an [`RlgcGenerator`] with a frequency axis. γ and Z0 are derived
//! once at construction, so every network built afterwards shares the same
//! arrays and construction is the only place numerical failures surface.

use std::fmt;

use ndarray::Array1;
use num_complex::Complex64;

use super::engine::{self, PassivityReport};
use super::rlgc::{Rlgc, RlgcGenerator};
use super::synthesis::Media;
use crate::constants::PhysicalConstants;
use crate::error::MediaResult;
use crate::frequency::Frequency;

/// A uniform transmission line described by per-unit-length RLGC values.
#[derive(Debug, Clone)]
pub struct DistributedCircuit<G> {
    frequency: Frequency,
    generator: G,
    constants: PhysicalConstants,
    rlgc: Rlgc,
    gamma: Array1<Complex64>,
    z0: Array1<Complex64>,
    port_z0: Option<Array1<Complex64>>,
    passivity: PassivityReport,
}

impl<G: RlgcGenerator> DistributedCircuit<G> {
    /// Build with SI physical constants.
    ///
    /// # Example
    /// ```
    /// use skrf_media::frequency::{Frequency, FrequencyUnit, SweepType};
    /// use skrf_media::media::{Debye, DistributedCircuit, Media};
    ///
    /// let freq = Frequency::new(1.0, 100.0, 3, FrequencyUnit::GHz, SweepType::Linear);
    /// let water = DistributedCircuit::new(freq, Debye::water()).unwrap();
    /// assert!(water.alpha().iter().all(|&a| a >= 0.0));
    /// ```
    pub fn new(frequency: Frequency, generator: G) -> MediaResult<Self> {
        Self::with_constants(frequency, generator, PhysicalConstants::SI)
    }

    /// Build with an explicit table of physical constants.
    pub fn with_constants(
        frequency: Frequency,
        generator: G,
        constants: PhysicalConstants,
    ) -> MediaResult<Self> {
        frequency.validate()?;
        let rlgc = generator.generate(&frequency, &constants)?;
        let w = frequency.w();
        let gamma = engine::propagation_constant(&rlgc, &w)?;
        let z0 = engine::characteristic_impedance(&rlgc, &w)?;
        let passivity = PassivityReport::assess(&rlgc, &w, &gamma, &z0);

        tracing::debug!(
            medium = generator.name(),
            npoints = frequency.npoints(),
            "derived propagation constant and characteristic impedance"
        );
        if !passivity.is_passive() {
            let flagged = passivity.flagged_indices();
            tracing::warn!(
                medium = generator.name(),
                points = flagged.len(),
                first = flagged.first().copied(),
                "medium is not passive at some frequencies"
            );
        }

        Ok(Self {
            frequency,
            generator,
            constants,
            rlgc,
            gamma,
            z0,
            port_z0: None,
            passivity,
        })
    }

    /// Reference every port of the synthesized networks to `z` instead of Z0.
    pub fn with_port_impedance(mut self, z: Complex64) -> Self {
        self.port_z0 = Some(Array1::from_elem(self.frequency.npoints(), z));
        self
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// The RLGC samples γ and Z0 were derived from
    pub fn rlgc(&self) -> &Rlgc {
        &self.rlgc
    }

    pub fn passivity(&self) -> &PassivityReport {
        &self.passivity
    }

    /// Series impedance per meter, `R + jωL`
    pub fn series_impedance(&self) -> Array1<Complex64> {
        engine::series_impedance(&self.rlgc, &self.frequency.w())
    }

    /// Shunt admittance per meter, `G + jωC`
    pub fn shunt_admittance(&self) -> Array1<Complex64> {
        engine::shunt_admittance(&self.rlgc, &self.frequency.w())
    }
}

impl<G: RlgcGenerator> Media for DistributedCircuit<G> {
    fn name(&self) -> &'static str {
        self.generator.name()
    }

    fn frequency(&self) -> &Frequency {
        &self.frequency
    }

    fn gamma(&self) -> &Array1<Complex64> {
        &self.gamma
    }

    fn z0(&self) -> &Array1<Complex64> {
        &self.z0
    }

    fn port_z0(&self) -> Option<&Array1<Complex64>> {
        self.port_z0.as_ref()
    }
}

impl<G: RlgcGenerator> fmt::Display for DistributedCircuit<G> {
    /// `Debye Media.  1-100 GHz.  3 points`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.  {}.  {} points",
            self.generator.name(),
            self.frequency.range_label(),
            self.frequency.npoints()
        )
    }
}
