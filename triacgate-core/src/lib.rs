//! Board-agnostic core logic for the triac gate pulse generator
//!
//! This crate contains everything that does not touch registers:
//!
//! - Configuration types, defaults and limits
//! - Configuration validation against device resources
//! - Timer timing math (prescaler selection, pulse width in ticks)
//! - Comparator threshold math
//! - Half-wave bounds tracking and the duty-cycle to firing-point mapping
//! - Error type and logging macros

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod log;

pub mod config;
pub mod error;
pub mod phase;
pub mod threshold;

#[cfg(feature = "defmt")]
pub use log::defmt;

pub use error::{Result, TriacError};
