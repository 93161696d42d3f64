//! Triac gate pulse driver
//!
//! Drives a triac gate in phase-control mode. A comparator detects the
//! zero crossings of the AC line, a timer measures each half-wave and
//! fires one fixed-width gate pulse per half-wave at a point set by the
//! duty cycle. After `init` the hardware runs on its own; software only
//! rewrites two compare values when the duty cycle changes.
//!
//! ```ignore
//! use triacgate_drivers::Triac;
//! use triacgate_hal::SpinBudget;
//!
//! let mut triac = Triac::new(hw);
//! triac.init(&TriacConfig::default(), &mut SpinBudget::new(1_000_000))?;
//! triac.calibrate(10, &mut SpinBudget::new(10_000_000))?;
//! triac.set_duty_cycle(40, &mut SpinBudget::new(1_000_000))?;
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod triac;

pub use triac::Triac;
