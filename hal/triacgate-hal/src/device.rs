//! Device resource identifiers and queries
//!
//! Identifiers name peripheral instances and channels without touching
//! them. [`DeviceResources`] answers whether a given instance exists on
//! the chip so configuration can be rejected before any register write.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::timer::CcChannel;

/// Analog comparator instance (ACMP0, ACMP1, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AcmpId(pub u8);

/// Timer instance (TIMER0, TIMER1, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimerId(pub u8);

/// Interconnect (PRS) channel number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrsChannel(pub u8);

impl PrsChannel {
    /// The adjacent channel (N + 1)
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Channel number as an index
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// GPIO port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GpioPort {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
}

impl GpioPort {
    /// Port index (A = 0)
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A physical pin together with the route location that selects it
///
/// On parts with location-based pin muxing each peripheral signal can
/// appear on a handful of pins; `location` is the mux setting that picks
/// `port`/`pin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinRoute {
    /// GPIO port
    pub port: GpioPort,
    /// Pin number within the port
    pub pin: u8,
    /// Route location for the signal driven onto this pin
    pub location: u8,
}

impl PinRoute {
    /// Create a new pin route
    pub const fn new(port: GpioPort, pin: u8, location: u8) -> Self {
        Self {
            port,
            pin,
            location,
        }
    }
}

/// Resource availability and clock gating
///
/// All query methods must be free of side effects: configuration
/// validation calls them before deciding whether to touch hardware.
pub trait DeviceResources {
    /// Number of interconnect channels on the chip
    fn prs_channel_count(&self) -> u8;

    /// Highest encodable pin location for a channel's GPIO output
    ///
    /// Returns `None` for channels that have no pin output.
    fn prs_location_max(&self, channel: PrsChannel) -> Option<u8>;

    /// Highest encodable pin location for the comparator output
    ///
    /// Returns `None` if the comparator does not exist.
    fn acmp_location_max(&self, acmp: AcmpId) -> Option<u8>;

    /// Highest encodable pin location for a timer compare output
    ///
    /// Returns `None` if the timer does not exist.
    fn timer_location_max(&self, timer: TimerId, cc: CcChannel) -> Option<u8>;

    /// Check that a port/pin combination is bonded out on this chip
    fn pin_exists(&self, port: GpioPort, pin: u8) -> bool;

    /// Check that a comparator instance exists
    fn has_acmp(&self, acmp: AcmpId) -> bool;

    /// Input clock frequency of a timer instance in Hz
    ///
    /// Returns `None` if the timer does not exist on this chip.
    fn timer_clock_hz(&self, timer: TimerId) -> Option<u32>;

    /// Highest value the timer counter can hold
    fn timer_max_count(&self, timer: TimerId) -> u32;

    /// Enable the bus clocks for the interconnect, GPIO, and the two
    /// selected peripherals
    fn enable_clocks(&mut self, acmp: AcmpId, timer: TimerId);
}
