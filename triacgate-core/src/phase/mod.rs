//! Phase-control timing
//!
//! Everything here works in timer ticks. A half-wave is the tick count
//! between two zero crossings; the gate pulse fires at a tick offset
//! from the last crossing.
//!
//! - [`timing`] - Prescaler choice and pulse width in ticks
//! - [`halfwave`] - Running bounds of measured half-wave lengths
//! - [`firing`] - Duty cycle to rise/fall compare values

pub mod firing;
pub mod halfwave;
pub mod timing;

pub use firing::FiringPoint;
pub use halfwave::{HalfWaveBounds, HalfWaveTracker};
pub use timing::TimerTiming;
