//! skrf-media: transmission-line media and RF network synthesis
//!
//! Rust implementation of the scikit-rf media layer. Physical models
//! (Debye and Cole-Cole dielectrics, cold plasma, two-wire lines, free
//! space) produce per-unit-length RLGC parameters; a distributed-circuit
//! engine derives the propagation constant γ and characteristic impedance
//! Z0; and the [`media::Media`] trait synthesizes n-port networks (lines,
//! terminations, lumped elements, junctions) from them.
//!
//! ## Modules
//!
//! - `frequency` - Frequency band representation
//! - `units` - Length units and conversion to meters
//! - `constants` - Tolerances and physical constants
//! - `math` - dB/phase conversions, branch-selected roots, S-parameter transforms
//! - `media` - Parameter generators, the RLGC engine and network synthesis
//! - `network` - N-port network representation and connection algebra
//! - `config` - JSON medium descriptions

pub mod config;
pub mod constants;
pub mod error;
pub mod frequency;
pub mod math;
pub mod media;
pub mod network;
pub mod units;

pub use config::MediaConfig;
pub use constants::PhysicalConstants;
pub use error::{MediaError, MediaResult};
pub use frequency::Frequency;
pub use media::{DistributedCircuit, Media, RlgcGenerator};
pub use network::Network;
pub use units::LengthUnit;
