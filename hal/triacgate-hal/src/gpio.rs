//! GPIO pin abstractions
//!
//! The gate output and the optional debug taps only need their pins put
//! into push-pull mode; after that the driving peripheral owns the level.

use crate::device::GpioPort;

/// Push-pull output configuration
pub trait OutputPins {
    /// Configure a pin as a push-pull output with the given initial level
    fn configure_push_pull(&mut self, port: GpioPort, pin: u8, high: bool);
}
