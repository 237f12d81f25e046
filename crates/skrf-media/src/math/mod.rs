//! Mathematical functions module
//!
//! Provides commonly used mathematical functions for RF/microwave engineering.

pub mod conversions;
pub mod roots;
pub mod transforms;

pub use conversions::*;
pub use roots::*;
pub use transforms::*;
