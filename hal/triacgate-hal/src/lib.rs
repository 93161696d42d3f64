//! Triacgate Hardware Abstraction Layer
//!
//! This crate defines the narrow set of hardware operations the triac
//! gate driver needs. Chip-specific crates (e.g. `triacgate-hal-efm32`)
//! implement them on top of real registers; the `mock` feature provides a
//! simulated device for host tests.
//!
//! # Architecture
//!
//! ```text
//!   AC line sample
//!         │
//!         ▼
//! ┌───────────────┐  edge   ┌───────────────────┐
//! │ acmp          │────────▶│ prs (edge channel)│
//! │ (comparator)  │         └─────────┬─────────┘
//! └───────────────┘                   │ capture + reload
//!                                     ▼
//!                           ┌───────────────────┐
//!                           │ timer             │
//!                           │ CC0 capture       │
//!                           │ CC1 set on match  │──┐
//!                           │ CC2 clear on match│──┤
//!                           └───────────────────┘  │
//!                                     ┌────────────┘
//!                                     ▼
//!                           ┌───────────────────┐
//!                           │ prs N AND N+1     │──▶ gate pin
//!                           └───────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`device::DeviceResources`] - Resource availability and clock gating
//! - [`acmp::AnalogComparator`] - Zero-crossing comparator
//! - [`prs::ReflexRouter`] - Peripheral signal interconnect
//! - [`timer::CaptureCompareTimer`] - Half-wave capture and gate compare
//! - [`gpio::OutputPins`] - Push-pull output pins
//! - [`deadline::Deadline`] - Bounded waiting on hardware events

#![no_std]
#![deny(unsafe_code)]

pub mod acmp;
pub mod deadline;
pub mod device;
pub mod gpio;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod prs;
pub mod timer;

pub use acmp::{AcmpInput, AcmpSetup, AnalogComparator, ThresholdDividers, VbReference};
pub use deadline::{Deadline, DelayBudget, SpinBudget};
#[cfg(feature = "embassy-time")]
pub use deadline::InstantDeadline;
pub use device::{AcmpId, DeviceResources, GpioPort, PinRoute, PrsChannel, TimerId};
pub use gpio::OutputPins;
pub use prs::{EdgeDetect, PrsSource, ReflexRouter};
pub use timer::{CaptureCompareTimer, CcChannel, CompareSetup, CounterSetup, OutputAction, Prescale};

/// Everything the triac driver needs from a device
///
/// Blanket-implemented for any type providing all of the individual
/// peripheral traits.
pub trait TriacHardware:
    DeviceResources + AnalogComparator + ReflexRouter + CaptureCompareTimer + OutputPins
{
}

impl<T> TriacHardware for T where
    T: DeviceResources + AnalogComparator + ReflexRouter + CaptureCompareTimer + OutputPins
{
}
