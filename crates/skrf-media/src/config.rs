//! Medium configuration loading
//!
//! A medium can be described declaratively as JSON:
//!
//! ```json
//! {
//!   "sweep": { "start": 1.0, "stop": 100.0, "npoints": 3, "unit": "GHz" },
//!   "medium": { "medium": "debye", "es": 78.408, "einf": 5.2, "tau": 8.27e-12 }
//! }
//! ```

use std::path::Path;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::MediaResult;
use crate::frequency::{Frequency, FrequencyUnit, SweepType};
use crate::media::{
    ColeCole, ConstantRlgc, Debye, DistributedCircuit, Freespace, Media, Plasma, RlgcGenerator,
    TwoWire,
};

/// Frequency axis description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Start frequency, in `unit`
    pub start: f64,
    /// Stop frequency, in `unit`
    pub stop: f64,
    pub npoints: usize,
    #[serde(default)]
    pub unit: FrequencyUnit,
    #[serde(default)]
    pub sweep: SweepType,
}

impl SweepConfig {
    pub fn to_frequency(&self) -> Frequency {
        Frequency::new(self.start, self.stop, self.npoints, self.unit, self.sweep)
    }
}

/// Physical model selection, tagged by the `medium` field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "medium", rename_all = "snake_case")]
pub enum MediumConfig {
    Debye(Debye),
    ColeCole(ColeCole),
    Plasma(Plasma),
    TwoWire(TwoWire),
    Freespace(Freespace),
    Rlgc(ConstantRlgc),
}

/// Complete medium description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaConfig {
    pub sweep: SweepConfig,
    pub medium: MediumConfig,
    /// Port reference impedance `[re, im]`; Z0 when absent.
    #[serde(default)]
    pub port_z0: Option<Complex64>,
}

type BoxedMedia = Box<dyn Media + Send + Sync>;

fn boxed<G>(frequency: Frequency, generator: G, port_z0: Option<Complex64>) -> MediaResult<BoxedMedia>
where
    G: RlgcGenerator + Send + Sync + 'static,
{
    let medium = DistributedCircuit::new(frequency, generator)?;
    let boxed: BoxedMedia = match port_z0 {
        Some(z) => Box::new(medium.with_port_impedance(z)),
        None => Box::new(medium),
    };
    Ok(boxed)
}

impl MediaConfig {
    pub fn from_json_str(json: &str) -> MediaResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON configuration file.
    pub fn from_file(path: &Path) -> MediaResult<Self> {
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading medium configuration");
        Self::from_json_str(&content)
    }

    /// Construct the configured medium.
    pub fn build(&self) -> MediaResult<BoxedMedia> {
        let frequency = self.sweep.to_frequency();
        match self.medium {
            MediumConfig::Debye(g) => boxed(frequency, g, self.port_z0),
            MediumConfig::ColeCole(g) => boxed(frequency, g, self.port_z0),
            MediumConfig::Plasma(g) => boxed(frequency, g, self.port_z0),
            MediumConfig::TwoWire(g) => boxed(frequency, g, self.port_z0),
            MediumConfig::Freespace(g) => boxed(frequency, g, self.port_z0),
            MediumConfig::Rlgc(g) => boxed(frequency, g, self.port_z0),
        }
    }
}
