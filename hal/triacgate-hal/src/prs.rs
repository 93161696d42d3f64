//! Peripheral reflex (interconnect) abstractions
//!
//! Interconnect channels carry signals from a producer peripheral to
//! consumers without CPU involvement. A channel can be combined with the
//! next one (logical AND) and driven to a pin.

use crate::device::{AcmpId, PrsChannel, TimerId};
use crate::timer::CcChannel;

/// Signal producer for a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PrsSource {
    /// Comparator output level
    AcmpOutput(AcmpId),
    /// Timer compare/capture channel output level
    TimerCompare(TimerId, CcChannel),
}

/// Edge detection applied to the source signal
///
/// With `Off` the channel carries the source level; otherwise it carries
/// a one-clock pulse on each selected edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeDetect {
    /// Pass the level through
    #[default]
    Off,
    /// Pulse on rising edges
    Rising,
    /// Pulse on falling edges
    Falling,
    /// Pulse on both edges
    Both,
}

/// Interconnect operations
pub trait ReflexRouter {
    /// Select the producer signal and edge detection for a channel
    fn prs_connect(&mut self, channel: PrsChannel, source: PrsSource, edge: EdgeDetect);

    /// AND a channel's output with the next channel (N & N+1)
    fn prs_and_next(&mut self, channel: PrsChannel);

    /// Drive a channel onto its GPIO output at `location`
    fn prs_route_pin(&mut self, channel: PrsChannel, location: u8);
}
