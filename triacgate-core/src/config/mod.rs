//! Configuration types and validation
//!
//! A [`TriacConfig`] names the peripherals, channels and pins the driver
//! takes over plus the electrical parameters of the zero-crossing detector
//! and gate pulse. [`validate`] checks it completely before any hardware
//! is touched.

pub mod types;
pub mod validate;

pub use types::*;
pub use validate::validate;
