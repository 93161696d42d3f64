//! Hardware wiring sequence
//!
//! Brings up the three blocks in dependency order: routing first, then the
//! comparator, then the timer with its capture input armed last so the
//! counter starts on a real zero crossing.

use triacgate_core::config::TriacConfig;
use triacgate_core::phase::{FiringPoint, TimerTiming};
use triacgate_core::threshold::{threshold_dividers, THRESHOLD_REFERENCE};
use triacgate_core::{Result, TriacError};
use triacgate_hal::{
    AcmpSetup, CcChannel, CompareSetup, CounterSetup, Deadline, EdgeDetect, OutputAction,
    PinRoute, PrsSource, TimerId, TriacHardware,
};

/// Comparator bias programming value
const ACMP_BIAS_PROG: u8 = 0x10;

/// Configure all hardware for `config` and start the timer
///
/// Waits (bounded by `deadline`) for the comparator to warm up and for
/// the first zero crossing, whose capture is discarded. If that wait
/// fails, both compare values are parked at the counter limit so the
/// gate stays off once the line appears.
pub(crate) fn wire<H, D>(
    hw: &mut H,
    config: &TriacConfig,
    timing: &TimerTiming,
    firing: FiringPoint,
    deadline: &mut D,
) -> Result<()>
where
    H: TriacHardware + ?Sized,
    D: Deadline + ?Sized,
{
    hw.enable_clocks(config.acmp, config.timer);
    route_signals(hw, config);
    start_comparator(hw, config, deadline)?;
    configure_timer(hw, config, timing, firing);
    wire_debug_taps(hw, config);

    // Capture last: the counter only starts on the next edge
    hw.timer_capture_setup(config.timer, CcChannel::Cc0, config.edge_channel);
    match wait_capture(hw, config.timer, deadline) {
        Ok(first) => {
            triacgate_core::trace!("first edge captured at {=u32}", first);
            Ok(())
        }
        Err(e) => {
            write_firing(hw, config.timer, FiringPoint::parked(timing.max_count));
            Err(e)
        }
    }
}

/// Edge channel into the timer; CC1 AND CC2 onto the gate pin
fn route_signals<H: TriacHardware + ?Sized>(hw: &mut H, config: &TriacConfig) {
    let pulse = config.pulse_channel;

    hw.prs_connect(
        config.edge_channel,
        PrsSource::AcmpOutput(config.acmp),
        EdgeDetect::Both,
    );
    hw.prs_connect(
        pulse,
        PrsSource::TimerCompare(config.timer, CcChannel::Cc1),
        EdgeDetect::Off,
    );
    hw.prs_connect(
        pulse.next(),
        PrsSource::TimerCompare(config.timer, CcChannel::Cc2),
        EdgeDetect::Off,
    );
    hw.prs_and_next(pulse);

    output_idle(hw, &config.output, false);
    hw.prs_route_pin(pulse, config.output.location);
}

fn start_comparator<H, D>(hw: &mut H, config: &TriacConfig, deadline: &mut D) -> Result<()>
where
    H: TriacHardware + ?Sized,
    D: Deadline + ?Sized,
{
    let setup = AcmpSetup {
        input: config.acmp_input,
        reference: THRESHOLD_REFERENCE,
        dividers: threshold_dividers(config.mode, config.zero_threshold_mv, config.avdd_mv),
        high_accuracy: true,
        full_bias: true,
        bias_prog: ACMP_BIAS_PROG,
    };
    triacgate_core::debug!(
        "acmp dividers low {=u8} high {=u8}",
        setup.dividers.low,
        setup.dividers.high
    );
    hw.acmp_setup(config.acmp, &setup);
    hw.acmp_enable(config.acmp);

    while !hw.acmp_active(config.acmp) {
        if deadline.expired() {
            triacgate_core::warn!("comparator warm-up timed out");
            return Err(TriacError::Timeout);
        }
    }
    Ok(())
}

fn configure_timer<H: TriacHardware + ?Sized>(
    hw: &mut H,
    config: &TriacConfig,
    timing: &TimerTiming,
    firing: FiringPoint,
) {
    let timer = config.timer;
    hw.timer_setup(
        timer,
        &CounterSetup {
            prescale: timing.prescale,
            reload_on_edge: true,
            reset_outputs_on_reload: true,
            dma_clear_on_access: true,
        },
    );
    write_firing(hw, timer, firing);

    // Rise: low until CC1 matches. Fall: high until CC2 matches.
    // The AND of the two is the gate pulse.
    hw.timer_compare_setup(
        timer,
        CcChannel::Cc1,
        &CompareSetup {
            on_match: OutputAction::Set,
            initial_high: false,
        },
    );
    hw.timer_compare_setup(
        timer,
        CcChannel::Cc2,
        &CompareSetup {
            on_match: OutputAction::Clear,
            initial_high: true,
        },
    );
}

fn wire_debug_taps<H: TriacHardware + ?Sized>(hw: &mut H, config: &TriacConfig) {
    let taps = &config.debug;
    if !taps.any() {
        return;
    }
    triacgate_core::info!("routing debug taps");

    if let Some(route) = &taps.acmp_output {
        output_idle(hw, route, false);
        hw.acmp_route_output(config.acmp, route.location);
    }
    if let Some(route) = &taps.edge_channel {
        output_idle(hw, route, false);
        hw.prs_route_pin(config.edge_channel, route.location);
    }
    if let Some(route) = &taps.pulse_rise {
        output_idle(hw, route, false);
        hw.timer_route_compare(config.timer, CcChannel::Cc1, route.location);
    }
    // CC2 starts high and drops at the end of the pulse
    if let Some(route) = &taps.pulse_fall {
        output_idle(hw, route, true);
        hw.timer_route_compare(config.timer, CcChannel::Cc2, route.location);
    }
    if let Some(route) = &taps.pulse_fall_prs {
        output_idle(hw, route, true);
        hw.prs_route_pin(config.pulse_channel.next(), route.location);
    }
}

fn output_idle<H: TriacHardware + ?Sized>(hw: &mut H, route: &PinRoute, high: bool) {
    hw.configure_push_pull(route.port, route.pin, high);
}

/// Write both compare values
pub(crate) fn write_firing<H: TriacHardware + ?Sized>(hw: &mut H, timer: TimerId, firing: FiringPoint) {
    hw.timer_set_compare(timer, CcChannel::Cc1, firing.rise);
    hw.timer_set_compare(timer, CcChannel::Cc2, firing.fall);
}

/// Wait for the next half-wave capture, then read it and clear its flag
pub(crate) fn wait_capture<H, D>(hw: &mut H, timer: TimerId, deadline: &mut D) -> Result<u32>
where
    H: TriacHardware + ?Sized,
    D: Deadline + ?Sized,
{
    while !hw.timer_capture_pending(timer, CcChannel::Cc0) {
        if deadline.expired() {
            triacgate_core::warn!("no zero crossing before deadline");
            return Err(TriacError::Timeout);
        }
    }
    Ok(hw.timer_take_capture(timer, CcChannel::Cc0))
}
