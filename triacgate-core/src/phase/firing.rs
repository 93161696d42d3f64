//! Duty cycle to compare values
//!
//! The pulse rises at `(100 - duty)` hundredths of the shortest measured
//! half-wave and falls one pulse width later. At 0% both edges sit at the
//! longest half-wave, so the counter is reloaded before they are reached.

use super::halfwave::HalfWaveBounds;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Compare values for the pulse rise (CC1) and fall (CC2)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FiringPoint {
    /// Tick at which the pulse rises
    pub rise: u32,
    /// Tick at which the pulse falls
    pub fall: u32,
}

impl FiringPoint {
    /// Pulse parked at `count`, out of reach of every half-wave
    pub const fn parked(count: u32) -> Self {
        Self {
            rise: count,
            fall: count,
        }
    }

    /// Pulse right at the zero crossing
    pub const fn at_crossing(pulse_width_ticks: u32) -> Self {
        Self {
            rise: 0,
            fall: pulse_width_ticks,
        }
    }

    /// Firing point for a duty cycle (0-100)
    ///
    /// Callers validate `duty`; values above 100 are clamped.
    pub fn for_duty(duty: u8, bounds: HalfWaveBounds, pulse_width_ticks: u32) -> Self {
        if duty == 0 {
            return Self::parked(bounds.max);
        }
        let delay = 100 - duty.min(100) as u32;
        let rise = delay * (bounds.min / 100);
        Self {
            rise,
            fall: rise.saturating_add(pulse_width_ticks),
        }
    }

    /// Pulse width in ticks
    pub fn width(&self) -> u32 {
        self.fall.saturating_sub(self.rise)
    }
}
