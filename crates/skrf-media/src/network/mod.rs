//! Network module - N-port electrical network representation
//!
//! The container that media synthesize into: S-parameters with per-port,
//! per-frequency reference impedances, plus the port connection algebra
//! used to cascade lines and terminations.

mod connect;
mod core;
mod operators;
mod params;
mod properties;

pub use connect::{connect_s, innerconnect_s};
pub use self::core::Network;
