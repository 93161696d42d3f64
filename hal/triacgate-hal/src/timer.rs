//! Capture/compare timer abstractions
//!
//! The timer counts up from the last zero-crossing edge. An edge on the
//! capture input both latches the count (the half-wave length) and
//! reloads the counter to zero. Two compare channels then mark the rising
//! and falling edges of the gate pulse.

use crate::device::{PrsChannel, TimerId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Compare/capture channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CcChannel {
    /// Half-wave capture
    Cc0,
    /// Pulse rising edge
    Cc1,
    /// Pulse falling edge
    Cc2,
}

impl CcChannel {
    /// Channel index
    pub const fn index(self) -> usize {
        match self {
            CcChannel::Cc0 => 0,
            CcChannel::Cc1 => 1,
            CcChannel::Cc2 => 2,
        }
    }
}

/// Power-of-two clock prescaler, stored as log2 of the divider
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Prescale(u8);

impl Prescale {
    /// Divide by 1
    pub const DIV1: Self = Self(0);
    /// Divide by 1024 (largest supported)
    pub const DIV1024: Self = Self(10);

    /// Create from log2 of the divider, `None` above 1024
    pub const fn from_log2(log2: u8) -> Option<Self> {
        if log2 <= Self::DIV1024.0 {
            Some(Self(log2))
        } else {
            None
        }
    }

    /// log2 of the divider
    pub const fn log2(self) -> u8 {
        self.0
    }

    /// The divider value (1, 2, 4, ... 1024)
    pub const fn divider(self) -> u32 {
        1 << self.0
    }

    /// Next larger prescaler, if any
    pub const fn next(self) -> Option<Self> {
        Self::from_log2(self.0 + 1)
    }

    /// Divide an input clock frequency
    pub const fn apply(self, clock_hz: u32) -> u32 {
        clock_hz >> self.0
    }
}

/// Output action on compare match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputAction {
    /// Leave the output alone
    #[default]
    None,
    /// Toggle the output
    Toggle,
    /// Drive the output low
    Clear,
    /// Drive the output high
    Set,
}

/// Counter setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CounterSetup {
    /// Clock prescaler
    pub prescale: Prescale,
    /// Reload and restart the counter on both edges of the capture input
    pub reload_on_edge: bool,
    /// Force compare outputs back to their initial state on reload-start
    pub reset_outputs_on_reload: bool,
    /// Clear interrupt flags when a DMA reads the capture value
    pub dma_clear_on_access: bool,
}

/// Compare channel setup
///
/// Compare outputs always feed the interconnect as levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CompareSetup {
    /// Action on compare match
    pub on_match: OutputAction,
    /// Output level after init and after every reload
    pub initial_high: bool,
}

/// Capture/compare timer operations
pub trait CaptureCompareTimer {
    /// Configure the counter, leaving it stopped
    fn timer_setup(&mut self, timer: TimerId, setup: &CounterSetup);

    /// Configure a compare channel
    fn timer_compare_setup(&mut self, timer: TimerId, cc: CcChannel, setup: &CompareSetup);

    /// Arm a channel to capture on rising edges of an interconnect channel
    ///
    /// The counter starts on the first edge seen after this call.
    fn timer_capture_setup(&mut self, timer: TimerId, cc: CcChannel, input: PrsChannel);

    /// Write a compare value
    fn timer_set_compare(&mut self, timer: TimerId, cc: CcChannel, value: u32);

    /// Check whether a capture is waiting to be read
    fn timer_capture_pending(&self, timer: TimerId, cc: CcChannel) -> bool;

    /// Read the captured value and clear the capture flag
    fn timer_take_capture(&mut self, timer: TimerId, cc: CcChannel) -> u32;

    /// Drive a compare channel output onto its pin at `location`
    fn timer_route_compare(&mut self, timer: TimerId, cc: CcChannel, location: u8);
}
