//! Transmission media
//!
//! Each physical model implements [`RlgcGenerator`]. A
//! [`DistributedCircuit`] turns a generator into γ and Z0 over a frequency
//! axis, and the [`Media`] trait synthesizes networks from those.
//!
//! # Example
//! ```
//! use skrf_media::frequency::{Frequency, FrequencyUnit, SweepType};
//! use skrf_media::media::{ColeCole, DistributedCircuit, Media};
//! use skrf_media::units::LengthUnit;
//!
//! let freq = Frequency::new(1.0, 20.0, 20, FrequencyUnit::GHz, SweepType::Linear);
//! let water = DistributedCircuit::new(freq, ColeCole::water()).unwrap();
//! let stub = water.delay_short(90.0, LengthUnit::Deg).unwrap();
//! assert_eq!(stub.nports(), 1);
//! ```

pub mod colecole;
pub mod debye;
pub mod distributed;
pub mod engine;
pub mod freespace;
pub mod generic;
pub mod plasma;
pub mod rlgc;
pub mod synthesis;
pub mod twowire;

pub use colecole::ColeCole;
pub use debye::Debye;
pub use distributed::DistributedCircuit;
pub use engine::{
    characteristic_impedance, propagation_constant, series_impedance, shunt_admittance,
    PassivityReport,
};
pub use freespace::Freespace;
pub use generic::ConstantRlgc;
pub use plasma::Plasma;
pub use rlgc::{Rlgc, RlgcGenerator};
pub use synthesis::{Media, Termination};
pub use twowire::TwoWire;
