//! Configuration validation
//!
//! Runs before the driver writes a single register. Checks are ordered so
//! the first failing category decides the error:
//!
//! 1. Supply voltage, threshold and pulse width ranges
//! 2. Channel overlap, then channel range
//! 3. Output and debug pins, and their locations against each signal's
//!    route field
//! 4. Comparator and timer instances
//! 5. Timer clock and prescaler
//!
//! Steps 2-4 only run with the `resource-checks` feature.

use triacgate_hal::DeviceResources;
#[cfg(feature = "resource-checks")]
use triacgate_hal::{CcChannel, PinRoute};

use super::types::*;
use crate::error::{Result, TriacError};
use crate::phase::TimerTiming;

/// Validate a configuration against a device and derive the timer timing
pub fn validate<D: DeviceResources + ?Sized>(config: &TriacConfig, device: &D) -> Result<TimerTiming> {
    check_ranges(config)?;

    #[cfg(feature = "resource-checks")]
    check_resources(config, device)?;

    let clock_hz = device
        .timer_clock_hz(config.timer)
        .ok_or(TriacError::InvalidConfiguration)?;
    TimerTiming::new(
        clock_hz,
        device.timer_max_count(config.timer),
        config.pulse_width_us,
    )
}

/// Electrical parameter ranges
pub fn check_ranges(config: &TriacConfig) -> Result<()> {
    if !(MIN_AVDD_MV..=MAX_AVDD_MV).contains(&config.avdd_mv) {
        return Err(TriacError::InvalidRange);
    }
    if !(MIN_ZERO_THRESHOLD_MV..=MAX_ZERO_THRESHOLD_MV).contains(&config.zero_threshold_mv) {
        return Err(TriacError::InvalidRange);
    }
    if config.pulse_width_us == 0 || config.pulse_width_us > MAX_PULSE_WIDTH_US {
        return Err(TriacError::InvalidRange);
    }
    Ok(())
}

/// Channel, pin and peripheral availability
#[cfg(feature = "resource-checks")]
pub fn check_resources<D: DeviceResources + ?Sized>(config: &TriacConfig, device: &D) -> Result<()> {
    let edge = config.edge_channel;
    let pulse = config.pulse_channel;

    if edge == pulse || edge == pulse.next() {
        return Err(TriacError::InvalidParameter);
    }

    let count = device.prs_channel_count();
    if edge.0 >= count || pulse.0 >= count.saturating_sub(1) {
        return Err(TriacError::InvalidConfiguration);
    }

    let taps = &config.debug;
    check_pin(device, &config.output, device.prs_location_max(pulse))?;
    if let Some(tap) = &taps.edge_channel {
        check_pin(device, tap, device.prs_location_max(edge))?;
    }
    if let Some(tap) = &taps.pulse_fall_prs {
        check_pin(device, tap, device.prs_location_max(pulse.next()))?;
    }
    if let Some(tap) = &taps.acmp_output {
        check_pin(device, tap, device.acmp_location_max(config.acmp))?;
    }
    for (tap, cc) in [(&taps.pulse_rise, CcChannel::Cc1), (&taps.pulse_fall, CcChannel::Cc2)] {
        if let Some(tap) = tap {
            check_pin(device, tap, device.timer_location_max(config.timer, cc))?;
        }
    }

    if !device.has_acmp(config.acmp) || device.timer_clock_hz(config.timer).is_none() {
        return Err(TriacError::InvalidConfiguration);
    }
    Ok(())
}

/// The pin must exist and the location must fit the signal's route field
#[cfg(feature = "resource-checks")]
fn check_pin<D: DeviceResources + ?Sized>(
    device: &D,
    route: &PinRoute,
    location_max: Option<u8>,
) -> Result<()> {
    if !device.pin_exists(route.port, route.pin) {
        return Err(TriacError::InvalidConfiguration);
    }
    match location_max {
        Some(max) if route.location <= max => Ok(()),
        _ => Err(TriacError::InvalidConfiguration),
    }
}
