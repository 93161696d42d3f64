//! Analog comparator abstractions
//!
//! The comparator compares the conditioned AC sample (positive input)
//! against a divided reference voltage (negative input). Two divider
//! settings are used: one while the output is low and one while it is
//! high, which gives a hysteresis band when they differ.

use crate::device::AcmpId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Width of the reference divider field (6 bits)
pub const DIVIDER_STEPS: u32 = 64;

/// Analog input channel selection (chip-specific encoding)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AcmpInput(pub u8);

/// Reference voltage fed to the divider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VbReference {
    /// 1.25 V internal reference
    V1_25,
    /// 2.5 V internal reference
    #[default]
    V2_5,
}

impl VbReference {
    /// Reference voltage in millivolts
    pub const fn millivolts(self) -> u32 {
        match self {
            VbReference::V1_25 => 1250,
            VbReference::V2_5 => 2500,
        }
    }
}

/// Reference divider settings (0-63)
///
/// The divided voltage is `VB * (div + 1) / 64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThresholdDividers {
    /// Divider in effect while the comparator output is low
    pub low: u8,
    /// Divider in effect while the comparator output is high
    pub high: u8,
}

impl ThresholdDividers {
    /// Same divider for both output states (no hysteresis)
    pub const fn symmetric(div: u8) -> Self {
        Self { low: div, high: div }
    }
}

/// Full comparator setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AcmpSetup {
    /// Positive input (the AC sample)
    pub input: AcmpInput,
    /// Reference for the negative-input divider
    pub reference: VbReference,
    /// Divider settings
    pub dividers: ThresholdDividers,
    /// High accuracy mode
    pub high_accuracy: bool,
    /// Full bias current
    pub full_bias: bool,
    /// Bias programming value
    pub bias_prog: u8,
}

/// Analog comparator operations
pub trait AnalogComparator {
    /// Configure the comparator, leaving it disabled
    fn acmp_setup(&mut self, acmp: AcmpId, setup: &AcmpSetup);

    /// Enable the comparator
    fn acmp_enable(&mut self, acmp: AcmpId);

    /// Check whether the comparator has finished warming up
    fn acmp_active(&self, acmp: AcmpId) -> bool;

    /// Drive the comparator output state onto its pin at `location`
    fn acmp_route_output(&mut self, acmp: AcmpId, location: u8);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_voltage() {
        assert_eq!(VbReference::V2_5.millivolts(), 2500);
        assert_eq!(VbReference::V1_25.millivolts(), 1250);
        assert_eq!(VbReference::default(), VbReference::V2_5);
    }

    #[test]
    fn test_symmetric_dividers() {
        let div = ThresholdDividers::symmetric(4);
        assert_eq!(div.low, 4);
        assert_eq!(div.high, 4);
    }
}
