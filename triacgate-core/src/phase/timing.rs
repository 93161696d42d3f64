//! Timer clock and pulse width in ticks

use triacgate_hal::Prescale;

use crate::config::{MIN_TIMER_FREQUENCY_HZ, SLOWEST_LINE_HZ};
use crate::error::{Result, TriacError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Timer settings derived from the input clock and pulse width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimerTiming {
    /// Timer input clock (Hz)
    pub clock_hz: u32,
    /// Selected prescaler
    pub prescale: Prescale,
    /// Counter tick rate after prescaling (Hz)
    pub tick_hz: u32,
    /// Highest counter value
    pub max_count: u32,
    /// Gate pulse width in ticks
    pub pulse_width_ticks: u32,
}

impl TimerTiming {
    /// Derive timing for a timer clock, counter limit and pulse width
    ///
    /// Fails with `InvalidRange` if the clock is below 1 MHz or if even
    /// the largest prescaler leaves the counter too narrow for a full
    /// period at the slowest line frequency.
    pub fn new(clock_hz: u32, max_count: u32, pulse_width_us: u32) -> Result<Self> {
        if clock_hz < MIN_TIMER_FREQUENCY_HZ {
            return Err(TriacError::InvalidRange);
        }
        let prescale = select_prescale(clock_hz, max_count).ok_or(TriacError::InvalidRange)?;
        let tick_hz = prescale.apply(clock_hz);
        Ok(Self {
            clock_hz,
            prescale,
            tick_hz,
            max_count,
            pulse_width_ticks: pulse_ticks(tick_hz, pulse_width_us),
        })
    }
}

/// Smallest prescaler for which one period of the slowest line frequency
/// fits below `max_count`
pub fn select_prescale(clock_hz: u32, max_count: u32) -> Option<Prescale> {
    let mut prescale = Prescale::DIV1;
    loop {
        if prescale.apply(clock_hz) / SLOWEST_LINE_HZ < max_count {
            return Some(prescale);
        }
        prescale = prescale.next()?;
    }
}

/// Convert a duration in µs to ticks, truncating
pub fn pulse_ticks(tick_hz: u32, width_us: u32) -> u32 {
    let ticks = tick_hz as u64 * width_us as u64 / 1_000_000;
    ticks.min(u32::MAX as u64) as u32
}
