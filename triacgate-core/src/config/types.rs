//! Configuration type definitions

use triacgate_hal::{AcmpId, AcmpInput, GpioPort, PinRoute, PrsChannel, TimerId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Longest allowed gate pulse (µs)
pub const MAX_PULSE_WIDTH_US: u32 = 200;

/// Zero-crossing threshold limits (mV)
pub const MIN_ZERO_THRESHOLD_MV: u32 = 5;
pub const MAX_ZERO_THRESHOLD_MV: u32 = 500;

/// Slowest usable timer input clock (Hz)
pub const MIN_TIMER_FREQUENCY_HZ: u32 = 1_000_000;

/// Analog supply limits (mV)
pub const MIN_AVDD_MV: u32 = 1800;
pub const MAX_AVDD_MV: u32 = 3800;

/// Most half-wave samples one `calibrate` call may collect
pub const MAX_CAL_COUNT: u32 = 60;

/// Highest duty cycle (%)
pub const MAX_DUTY_CYCLE: u8 = 100;

/// Lowest supported line frequency (Hz); sizes the timer prescaler
pub const SLOWEST_LINE_HZ: u32 = 50;

/// Positive input APORT2XCH27 on Series 1 comparators
pub const DEFAULT_ACMP_INPUT: AcmpInput = AcmpInput(0x5B);

/// How the conditioned line sample presents the zero crossing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ZeroCrossMode {
    /// Rectified sine: crossing when the sample drops below the threshold
    #[default]
    RectifiedSine,
    /// Sine offset to AVDD/2: crossing at the midpoint, with the threshold
    /// used as hysteresis on either side
    OffsetSine,
}

/// Optional pins for observing internal signals
///
/// Each tap that is set gets its pin configured as push-pull output and
/// the signal routed there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DebugTaps {
    /// Comparator output, via the comparator's own pin route
    pub acmp_output: Option<PinRoute>,
    /// Edge channel (one pulse per zero crossing), via the interconnect
    pub edge_channel: Option<PinRoute>,
    /// Timer CC1 output (pulse rise)
    pub pulse_rise: Option<PinRoute>,
    /// Timer CC2 output (pulse fall), idles high
    pub pulse_fall: Option<PinRoute>,
    /// Pulse fall channel (base pulse channel + 1) via the interconnect,
    /// idles high
    pub pulse_fall_prs: Option<PinRoute>,
}

impl DebugTaps {
    /// True if any tap is set
    pub fn any(&self) -> bool {
        self.acmp_output.is_some()
            || self.edge_channel.is_some()
            || self.pulse_rise.is_some()
            || self.pulse_fall.is_some()
            || self.pulse_fall_prs.is_some()
    }
}

/// Driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriacConfig {
    /// Comparator watching the line sample
    pub acmp: AcmpId,
    /// Comparator positive input carrying the line sample
    pub acmp_input: AcmpInput,
    /// Interconnect channel carrying comparator edges to the timer
    pub edge_channel: PrsChannel,
    /// Timer measuring half-waves and timing the pulse
    pub timer: TimerId,
    /// First of the two adjacent channels forming the pulse (N, N+1)
    pub pulse_channel: PrsChannel,
    /// Gate output pin, driven by `pulse_channel`
    pub output: PinRoute,
    /// Zero-crossing detection mode
    pub mode: ZeroCrossMode,
    /// Threshold (rectified) or hysteresis (offset) in mV
    pub zero_threshold_mv: u32,
    /// Analog supply voltage in mV
    pub avdd_mv: u32,
    /// Gate pulse width in µs
    pub pulse_width_us: u32,
    /// Start at 100% duty cycle instead of 0%
    pub initially_on: bool,
    /// Signal observation pins
    pub debug: DebugTaps,
}

impl Default for TriacConfig {
    fn default() -> Self {
        Self {
            acmp: AcmpId(0),
            acmp_input: DEFAULT_ACMP_INPUT,
            edge_channel: PrsChannel(0),
            timer: TimerId(1),
            pulse_channel: PrsChannel(1),
            output: PinRoute::new(GpioPort::F, 7, 6),
            mode: ZeroCrossMode::RectifiedSine,
            zero_threshold_mv: 200,
            avdd_mv: 3300,
            pulse_width_us: 20,
            initially_on: false,
            debug: DebugTaps::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TriacConfig::default();
        assert_eq!(config.edge_channel, PrsChannel(0));
        assert_eq!(config.pulse_channel, PrsChannel(1));
        assert_eq!(config.output, PinRoute::new(GpioPort::F, 7, 6));
        assert_eq!(config.zero_threshold_mv, 200);
        assert_eq!(config.pulse_width_us, 20);
        assert!(!config.initially_on);
        assert!(!config.debug.any());
    }

    #[test]
    fn test_debug_taps_any() {
        let taps = DebugTaps {
            pulse_fall: Some(PinRoute::new(GpioPort::A, 1, 0)),
            ..Default::default()
        };
        assert!(taps.any());

        let taps = DebugTaps {
            pulse_fall_prs: Some(PinRoute::new(GpioPort::A, 1, 0)),
            ..Default::default()
        };
        assert!(taps.any());
    }
}
