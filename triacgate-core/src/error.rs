//! Driver error type

use core::fmt;

/// Errors reported by configuration and driver operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TriacError {
    /// A value is outside its allowed range (supply voltage, threshold,
    /// pulse width, timer clock, duty cycle, sample count)
    InvalidRange,
    /// The edge channel collides with the pulse channel pair
    InvalidParameter,
    /// A resource does not exist on this device (channel, comparator,
    /// timer, pin or pin location)
    InvalidConfiguration,
    /// Operation requires a successful `init` first
    NotInitialized,
    /// The deadline expired while waiting for the hardware
    Timeout,
}

impl fmt::Display for TriacError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            TriacError::InvalidRange => "value out of range",
            TriacError::InvalidParameter => "edge channel overlaps pulse channels",
            TriacError::InvalidConfiguration => "resource not available on this device",
            TriacError::NotInitialized => "driver not initialized",
            TriacError::Timeout => "timed out waiting for hardware",
        };
        f.write_str(msg)
    }
}

/// Result alias for driver operations
pub type Result<T> = core::result::Result<T, TriacError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(TriacError::Timeout.to_string(), "timed out waiting for hardware");
        assert_eq!(TriacError::NotInitialized.to_string(), "driver not initialized");
    }
}
