//! Triac driver context
//!
//! [`Triac`] owns the hardware and all runtime state: the cached duty
//! cycle, the measured half-wave bounds and the current firing point.
//! Operations run from one control flow; the type is not shared between
//! contexts.
//!
//! # Lifecycle
//!
//! 1. `Triac::new(hw)` - uninitialized, every operation but `init` fails
//!    with `NotInitialized`
//! 2. `init(config, deadline)` - validates, wires the hardware, waits for
//!    the first crossing. A second call is a no-op.
//! 3. `calibrate(n, deadline)` - optional, widens the half-wave bounds
//! 4. `set_duty_cycle(percent, deadline)` - moves the firing point
//!
//! Every wait on hardware takes a [`Deadline`] and fails with `Timeout`
//! when it expires, e.g. when the AC line is absent.

mod setup;

use triacgate_core::config::{self, TriacConfig, MAX_CAL_COUNT, MAX_DUTY_CYCLE};
use triacgate_core::phase::{FiringPoint, HalfWaveBounds, HalfWaveTracker, TimerTiming};
use triacgate_core::{Result, TriacError};
use triacgate_hal::{CcChannel, Deadline, TriacHardware};

/// State that exists only after a successful `init`
#[derive(Debug, Clone, Copy)]
struct Live {
    config: TriacConfig,
    timing: TimerTiming,
    halfwave: HalfWaveTracker,
    duty: u8,
    firing: FiringPoint,
}

/// Zero-crossing synchronised triac gate driver
pub struct Triac<H> {
    hw: H,
    live: Option<Live>,
}

impl<H: TriacHardware> Triac<H> {
    /// Take ownership of the hardware without touching it
    pub fn new(hw: H) -> Self {
        Self { hw, live: None }
    }

    /// Validate `config`, configure the hardware and start pulse generation
    ///
    /// The output starts at 0% or, with `initially_on`, at 100% duty cycle.
    /// Validation completes before the first hardware write, so a rejected
    /// configuration leaves the hardware untouched. Returns `Ok` without
    /// doing anything if already initialized.
    pub fn init<D: Deadline + ?Sized>(&mut self, config: &TriacConfig, deadline: &mut D) -> Result<()> {
        if self.live.is_some() {
            triacgate_core::debug!("already initialized");
            return Ok(());
        }
        triacgate_core::info!("triac init");

        let timing = config::validate(config, &self.hw).inspect_err(|e| {
            triacgate_core::warn!("config rejected: {}", e);
        })?;
        triacgate_core::debug!(
            "timer clock {=u32} Hz, prescaler /{=u32}, tick {=u32} Hz, pulse {=u32} ticks",
            timing.clock_hz,
            timing.prescale.divider(),
            timing.tick_hz,
            timing.pulse_width_ticks
        );

        let (duty, firing) = if config.initially_on {
            (MAX_DUTY_CYCLE, FiringPoint::at_crossing(timing.pulse_width_ticks))
        } else {
            (0, FiringPoint::parked(timing.max_count))
        };

        setup::wire(&mut self.hw, config, &timing, firing, deadline)?;

        self.live = Some(Live {
            config: *config,
            timing,
            halfwave: HalfWaveTracker::new(),
            duty,
            firing,
        });
        triacgate_core::info!("triac running at {=u8}%", duty);
        Ok(())
    }

    /// Move the firing point to `duty` percent (0-100)
    ///
    /// Before any half-wave has been measured this waits for one capture
    /// first. Otherwise it folds in a capture that happens to be pending
    /// and does not wait.
    pub fn set_duty_cycle<D: Deadline + ?Sized>(&mut self, duty: u8, deadline: &mut D) -> Result<()> {
        let Some(live) = self.live.as_mut() else {
            return Err(TriacError::NotInitialized);
        };
        if duty > MAX_DUTY_CYCLE {
            return Err(TriacError::InvalidRange);
        }

        let timer = live.config.timer;
        let bounds = match live.halfwave.bounds() {
            None => {
                triacgate_core::info!("no half-wave measured yet, waiting for one");
                let ticks = setup::wait_capture(&mut self.hw, timer, deadline)?;
                live.halfwave.observe(ticks)
            }
            Some(_) if self.hw.timer_capture_pending(timer, CcChannel::Cc0) => {
                let ticks = self.hw.timer_take_capture(timer, CcChannel::Cc0);
                live.halfwave.observe(ticks)
            }
            Some(bounds) => bounds,
        };
        let firing = FiringPoint::for_duty(duty, bounds, live.timing.pulse_width_ticks);
        setup::write_firing(&mut self.hw, timer, firing);

        live.duty = duty;
        live.firing = firing;
        triacgate_core::debug!(
            "duty {=u8}%: rise {=u32} fall {=u32}",
            duty,
            firing.rise,
            firing.fall
        );
        Ok(())
    }

    /// Last duty cycle applied (0 before `init`)
    pub fn duty_cycle(&self) -> u8 {
        self.live.as_ref().map_or(0, |live| live.duty)
    }

    /// Collect `samples` half-wave measurements (0-60) into the bounds
    ///
    /// Blocks for about one half-wave per sample. Samples taken before a
    /// timeout are kept.
    pub fn calibrate<D: Deadline + ?Sized>(&mut self, samples: u32, deadline: &mut D) -> Result<()> {
        let Some(live) = self.live.as_mut() else {
            return Err(TriacError::NotInitialized);
        };
        if samples > MAX_CAL_COUNT {
            return Err(TriacError::InvalidRange);
        }

        for _ in 0..samples {
            let ticks = setup::wait_capture(&mut self.hw, live.config.timer, deadline)?;
            live.halfwave.observe(ticks);
        }

        if let Some(b) = live.halfwave.bounds() {
            triacgate_core::debug!("half-wave bounds {=u32}..={=u32}", b.min, b.max);
        }
        Ok(())
    }

    /// True after a successful `init`
    pub fn is_initialized(&self) -> bool {
        self.live.is_some()
    }

    /// Measured half-wave bounds, `None` until the first measurement
    pub fn half_wave_bounds(&self) -> Option<HalfWaveBounds> {
        self.live.as_ref().and_then(|live| live.halfwave.bounds())
    }

    /// Compare values currently programmed
    pub fn firing(&self) -> Option<FiringPoint> {
        self.live.as_ref().map(|live| live.firing)
    }

    /// Timer timing chosen at `init`
    pub fn timing(&self) -> Option<TimerTiming> {
        self.live.as_ref().map(|live| live.timing)
    }

    /// Configuration applied at `init`
    pub fn config(&self) -> Option<&TriacConfig> {
        self.live.as_ref().map(|live| &live.config)
    }

    /// Hardware backend
    pub fn hardware(&self) -> &H {
        &self.hw
    }

    /// Hardware backend, mutable
    ///
    /// Changing the peripherals owned by the driver behind its back leaves
    /// its cached state stale.
    pub fn hardware_mut(&mut self) -> &mut H {
        &mut self.hw
    }

    /// Give the hardware back
    pub fn release(self) -> H {
        self.hw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::delay::DelayNs;
    use proptest::prelude::*;
    use triacgate_core::config::{DebugTaps, ZeroCrossMode};
    use triacgate_hal::mock::{MockHardware, MockProfile};
    use triacgate_hal::{
        AcmpId, AcmpInput, CompareSetup, CounterSetup, DelayBudget, EdgeDetect, GpioPort,
        OutputAction, PinRoute, Prescale, PrsChannel, PrsSource, SpinBudget, ThresholdDividers,
        TimerId, VbReference,
    };

    fn budget() -> SpinBudget {
        SpinBudget::new(1_000)
    }

    fn running(config: TriacConfig) -> Triac<MockHardware> {
        let mut triac = Triac::new(MockHardware::new());
        triac.init(&config, &mut budget()).unwrap();
        triac
    }

    fn compares(triac: &Triac<MockHardware>) -> (Option<u32>, Option<u32>) {
        let hw = triac.hardware();
        (hw.compare(CcChannel::Cc1), hw.compare(CcChannel::Cc2))
    }

    struct NoopDelay;

    impl DelayNs for NoopDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    #[test]
    fn test_init_wires_hardware() {
        let triac = running(TriacConfig::default());
        let state = triac.hardware().state();

        assert_eq!(state.clocks, Some((AcmpId(0), TimerId(1))));

        let edge = state.prs[0];
        assert_eq!(edge.source, Some(PrsSource::AcmpOutput(AcmpId(0))));
        assert_eq!(edge.edge, EdgeDetect::Both);
        assert!(!edge.and_next);

        let rise = state.prs[1];
        assert_eq!(
            rise.source,
            Some(PrsSource::TimerCompare(TimerId(1), CcChannel::Cc1))
        );
        assert_eq!(rise.edge, EdgeDetect::Off);
        assert!(rise.and_next);
        assert_eq!(rise.pin_location, Some(6));

        let fall = state.prs[2];
        assert_eq!(
            fall.source,
            Some(PrsSource::TimerCompare(TimerId(1), CcChannel::Cc2))
        );
        assert_eq!(fall.edge, EdgeDetect::Off);
        assert_eq!(fall.pin_location, None);

        assert_eq!(state.pins.as_slice(), &[(GpioPort::F, 7, false)]);

        let acmp = state.acmp.unwrap();
        assert_eq!(acmp.input, AcmpInput(0x5B));
        assert_eq!(acmp.reference, VbReference::V2_5);
        assert_eq!(acmp.dividers, ThresholdDividers::symmetric(4));
        assert!(acmp.high_accuracy && acmp.full_bias);
        assert_eq!(acmp.bias_prog, 0x10);
        assert!(state.acmp_enabled);

        assert_eq!(
            state.timer,
            Some(CounterSetup {
                prescale: Prescale::DIV1,
                reload_on_edge: true,
                reset_outputs_on_reload: true,
                dma_clear_on_access: true,
            })
        );
        assert_eq!(
            state.compare_setup[1],
            Some(CompareSetup {
                on_match: OutputAction::Set,
                initial_high: false,
            })
        );
        assert_eq!(
            state.compare_setup[2],
            Some(CompareSetup {
                on_match: OutputAction::Clear,
                initial_high: true,
            })
        );
        assert_eq!(state.capture, Some((CcChannel::Cc0, PrsChannel(0))));
    }

    #[test]
    fn test_init_starts_off() {
        let triac = running(TriacConfig::default());
        assert!(triac.is_initialized());
        assert_eq!(triac.duty_cycle(), 0);
        assert_eq!(compares(&triac), (Some(0xFFFF), Some(0xFFFF)));
        assert_eq!(triac.firing(), Some(FiringPoint::parked(0xFFFF)));
        // The zero-count capture of the first edge is consumed but not kept
        assert_eq!(triac.hardware().captures_taken(), 1);
        assert_eq!(triac.half_wave_bounds(), None);
    }

    #[test]
    fn test_init_initially_on() {
        let triac = running(TriacConfig {
            initially_on: true,
            ..Default::default()
        });
        assert_eq!(triac.duty_cycle(), 100);
        assert_eq!(compares(&triac), (Some(0), Some(20)));
    }

    #[test]
    fn test_init_is_idempotent() {
        let mut triac = running(TriacConfig::default());
        let before = triac.hardware().state().clone();
        let writes = triac.hardware().writes();

        let other = TriacConfig {
            pulse_width_us: 100,
            edge_channel: PrsChannel(4),
            initially_on: true,
            ..Default::default()
        };
        assert_eq!(triac.init(&other, &mut budget()), Ok(()));
        assert_eq!(triac.init(&other, &mut budget()), Ok(()));

        assert_eq!(triac.hardware().state(), &before);
        assert_eq!(triac.hardware().writes(), writes);
        assert_eq!(triac.config(), Some(&TriacConfig::default()));
        assert_eq!(triac.duty_cycle(), 0);
    }

    #[test]
    #[cfg(feature = "resource-checks")]
    fn test_rejected_config_touches_nothing() {
        let base = TriacConfig::default();
        let cases = [
            (TriacConfig { avdd_mv: 4000, ..base }, TriacError::InvalidRange),
            (TriacConfig { zero_threshold_mv: 1, ..base }, TriacError::InvalidRange),
            (TriacConfig { pulse_width_us: 0, ..base }, TriacError::InvalidRange),
            (TriacConfig { pulse_width_us: 250, ..base }, TriacError::InvalidRange),
            (
                TriacConfig {
                    edge_channel: PrsChannel(2),
                    ..base
                },
                TriacError::InvalidParameter,
            ),
            (
                TriacConfig {
                    pulse_channel: PrsChannel(7),
                    ..base
                },
                TriacError::InvalidConfiguration,
            ),
            (
                TriacConfig {
                    output: PinRoute::new(GpioPort::K, 0, 0),
                    ..base
                },
                TriacError::InvalidConfiguration,
            ),
            (
                TriacConfig {
                    output: PinRoute::new(GpioPort::F, 7, 12),
                    ..base
                },
                TriacError::InvalidConfiguration,
            ),
            (
                TriacConfig {
                    acmp: AcmpId(9),
                    ..base
                },
                TriacError::InvalidConfiguration,
            ),
        ];

        for (config, expected) in cases {
            let mut triac = Triac::new(MockHardware::new());
            let pristine = triac.hardware().state().clone();
            assert_eq!(triac.init(&config, &mut budget()), Err(expected));
            assert_eq!(triac.hardware().writes(), 0);
            assert_eq!(triac.hardware().state(), &pristine);
            assert!(!triac.is_initialized());

            // A corrected configuration goes through without a reset
            assert_eq!(triac.init(&base, &mut budget()), Ok(()));
        }
    }

    #[test]
    fn test_slow_timer_clock_rejected() {
        let profile = MockProfile {
            timer_clock_hz: [None, Some(750_000), None, None],
            ..Default::default()
        };
        let mut triac = Triac::new(MockHardware::with_profile(profile));
        assert_eq!(
            triac.init(&TriacConfig::default(), &mut budget()),
            Err(TriacError::InvalidRange)
        );
        assert_eq!(triac.hardware().writes(), 0);
    }

    #[test]
    fn test_prescaled_timer() {
        let profile = MockProfile {
            timer_clock_hz: [None, Some(19_000_000), None, None],
            ..Default::default()
        };
        let mut triac = Triac::new(MockHardware::with_profile(profile));
        let config = TriacConfig {
            initially_on: true,
            ..Default::default()
        };
        triac.init(&config, &mut budget()).unwrap();

        let timing = triac.timing().unwrap();
        assert_eq!(timing.prescale.log2(), 3);
        assert_eq!(timing.pulse_width_ticks, 47);
        assert_eq!(
            triac.hardware().state().timer.map(|t| t.prescale),
            Some(timing.prescale)
        );
        assert_eq!(compares(&triac), (Some(0), Some(47)));
    }

    #[test]
    fn test_not_initialized() {
        let mut hw = MockHardware::new();
        hw.push_captures(&[10_000, 10_000]);
        let mut triac = Triac::new(hw);

        assert_eq!(
            triac.set_duty_cycle(50, &mut budget()),
            Err(TriacError::NotInitialized)
        );
        assert_eq!(
            triac.calibrate(1, &mut budget()),
            Err(TriacError::NotInitialized)
        );
        // Range errors do not take precedence
        assert_eq!(
            triac.set_duty_cycle(200, &mut budget()),
            Err(TriacError::NotInitialized)
        );

        let hw = triac.hardware();
        assert_eq!(hw.writes(), 0);
        assert_eq!(hw.captures_taken(), 0);
        assert_eq!(hw.captures_pending(), 2);
        assert_eq!(triac.duty_cycle(), 0);
        assert_eq!(triac.firing(), None);
    }

    #[test]
    fn test_duty_out_of_range() {
        let mut triac = running(TriacConfig::default());
        triac.hardware_mut().push_capture(10_000);
        triac.set_duty_cycle(30, &mut budget()).unwrap();

        let before = compares(&triac);
        let writes = triac.hardware().writes();
        assert_eq!(
            triac.set_duty_cycle(101, &mut budget()),
            Err(TriacError::InvalidRange)
        );
        assert_eq!(triac.duty_cycle(), 30);
        assert_eq!(compares(&triac), before);
        assert_eq!(triac.hardware().writes(), writes);
    }

    #[test]
    fn test_calibrate_out_of_range() {
        let mut triac = running(TriacConfig::default());
        triac.hardware_mut().push_captures(&[10_000; 5]);

        assert_eq!(
            triac.calibrate(61, &mut budget()),
            Err(TriacError::InvalidRange)
        );
        assert_eq!(triac.hardware().captures_pending(), 5);
        assert_eq!(triac.half_wave_bounds(), None);

        assert_eq!(triac.calibrate(0, &mut budget()), Ok(()));
        assert_eq!(triac.hardware().captures_pending(), 5);
    }

    #[test]
    fn test_calibrate_max_samples() {
        let mut triac = running(TriacConfig::default());
        triac.hardware_mut().push_captures(&[10_000; 60]);
        assert_eq!(triac.calibrate(60, &mut SpinBudget::unbounded()), Ok(()));
        assert_eq!(triac.hardware().captures_pending(), 0);
    }

    #[test]
    fn test_half_duty_at_one_mhz() {
        let mut triac = running(TriacConfig::default());
        assert_eq!(triac.timing().map(|t| t.pulse_width_ticks), Some(20));

        // 50 Hz line at 1 MHz: 10000 ticks per half-wave
        triac.hardware_mut().push_capture(10_000);
        triac.set_duty_cycle(50, &mut budget()).unwrap();

        assert_eq!(compares(&triac), (Some(5_000), Some(5_020)));
        assert_eq!(triac.duty_cycle(), 50);
        assert_eq!(
            triac.half_wave_bounds(),
            Some(HalfWaveBounds {
                min: 10_000,
                max: 10_000
            })
        );
    }

    #[test]
    fn test_zero_duty_parks_at_longest_half_wave() {
        let mut triac = running(TriacConfig::default());
        triac.hardware_mut().push_capture(20_000);
        triac.calibrate(1, &mut budget()).unwrap();
        triac.set_duty_cycle(0, &mut budget()).unwrap();
        assert_eq!(compares(&triac), (Some(20_000), Some(20_000)));
    }

    #[test]
    fn test_full_duty_fires_at_crossing() {
        let mut triac = running(TriacConfig::default());
        triac.hardware_mut().push_capture(10_000);
        triac.set_duty_cycle(100, &mut budget()).unwrap();
        assert_eq!(compares(&triac), (Some(0), Some(20)));
    }

    #[test]
    fn test_calibrate_widens_bounds() {
        let mut triac = running(TriacConfig::default());
        triac
            .hardware_mut()
            .push_captures(&[10_000, 9_900, 10_100, 10_000, 9_950]);

        triac.calibrate(3, &mut budget()).unwrap();
        let first = triac.half_wave_bounds().unwrap();
        assert_eq!(first, HalfWaveBounds { min: 9_900, max: 10_100 });

        triac.calibrate(2, &mut budget()).unwrap();
        let second = triac.half_wave_bounds().unwrap();
        assert!(second.min <= first.min);
        assert!(second.max >= first.max);
        assert_eq!(second, first);
    }

    #[test]
    fn test_set_duty_folds_in_pending_capture() {
        let mut triac = running(TriacConfig::default());
        triac.hardware_mut().push_capture(10_000);
        triac.calibrate(1, &mut budget()).unwrap();

        triac.hardware_mut().push_capture(9_800);
        triac.set_duty_cycle(50, &mut budget()).unwrap();
        assert_eq!(triac.half_wave_bounds().map(|b| b.min), Some(9_800));
        assert_eq!(compares(&triac), (Some(4_900), Some(4_920)));
        assert_eq!(triac.hardware().captures_pending(), 0);
    }

    #[test]
    fn test_set_duty_does_not_wait_once_measured() {
        let mut triac = running(TriacConfig::default());
        triac.hardware_mut().push_capture(10_000);
        triac.calibrate(1, &mut budget()).unwrap();

        // Expired deadline: any wait would fail
        let mut expired = SpinBudget::new(0);
        assert_eq!(triac.set_duty_cycle(25, &mut expired), Ok(()));
        assert_eq!(compares(&triac), (Some(7_500), Some(7_520)));
    }

    #[test]
    fn test_lazy_measurement_times_out() {
        let mut triac = running(TriacConfig::default());
        assert_eq!(
            triac.set_duty_cycle(50, &mut SpinBudget::new(10)),
            Err(TriacError::Timeout)
        );
        assert_eq!(triac.duty_cycle(), 0);
        assert_eq!(compares(&triac), (Some(0xFFFF), Some(0xFFFF)));
    }

    #[test]
    fn test_lazy_measurement_with_delay_budget() {
        let mut triac = running(TriacConfig::default());
        let mut deadline = DelayBudget::new(NoopDelay, 20_000);
        assert_eq!(
            triac.set_duty_cycle(50, &mut deadline),
            Err(TriacError::Timeout)
        );
        assert_eq!(deadline.remaining_us(), 0);

        triac.hardware_mut().push_capture(10_000);
        let mut deadline = DelayBudget::new(NoopDelay, 20_000);
        assert_eq!(triac.set_duty_cycle(50, &mut deadline), Ok(()));
    }

    #[test]
    fn test_init_times_out_without_line() {
        let mut hw = MockHardware::new();
        hw.set_line_present(false);
        let mut triac = Triac::new(hw);

        assert_eq!(
            triac.init(&TriacConfig::default(), &mut SpinBudget::new(100)),
            Err(TriacError::Timeout)
        );
        assert!(!triac.is_initialized());
        assert_eq!(
            triac.set_duty_cycle(50, &mut budget()),
            Err(TriacError::NotInitialized)
        );

        // Line comes back: a retry wires everything again and succeeds
        triac.hardware_mut().set_line_present(true);
        assert_eq!(triac.init(&TriacConfig::default(), &mut budget()), Ok(()));
        assert!(triac.is_initialized());
    }

    #[test]
    fn test_init_timeout_parks_gate() {
        let mut hw = MockHardware::new();
        hw.set_line_present(false);
        let mut triac = Triac::new(hw);
        let config = TriacConfig {
            initially_on: true,
            ..Default::default()
        };

        assert_eq!(
            triac.init(&config, &mut SpinBudget::new(10)),
            Err(TriacError::Timeout)
        );
        assert!(!triac.is_initialized());
        assert_eq!(triac.duty_cycle(), 0);
        // Wired but parked: no pulse fires when the line appears
        assert_eq!(compares(&triac), (Some(0xFFFF), Some(0xFFFF)));

        triac.hardware_mut().set_line_present(true);
        assert_eq!(triac.init(&config, &mut budget()), Ok(()));
        assert_eq!(compares(&triac), (Some(0), Some(20)));
        assert_eq!(triac.duty_cycle(), 100);
    }

    #[test]
    fn test_comparator_warmup_timeout() {
        let mut hw = MockHardware::new();
        hw.set_acmp_stuck(true);
        let mut triac = Triac::new(hw);
        assert_eq!(
            triac.init(&TriacConfig::default(), &mut SpinBudget::new(5)),
            Err(TriacError::Timeout)
        );
        // Timer untouched: the comparator comes first
        assert_eq!(triac.hardware().state().timer, None);
    }

    #[test]
    fn test_calibrate_timeout_keeps_samples() {
        let mut triac = running(TriacConfig::default());
        triac.hardware_mut().push_captures(&[10_000, 10_050]);
        assert_eq!(
            triac.calibrate(5, &mut SpinBudget::new(50)),
            Err(TriacError::Timeout)
        );
        assert_eq!(
            triac.half_wave_bounds(),
            Some(HalfWaveBounds {
                min: 10_000,
                max: 10_050
            })
        );
    }

    #[test]
    fn test_offset_sine_dividers() {
        let triac = running(TriacConfig {
            mode: ZeroCrossMode::OffsetSine,
            ..Default::default()
        });
        let acmp = triac.hardware().state().acmp.unwrap();
        assert_eq!(acmp.dividers, ThresholdDividers { low: 46, high: 36 });
    }

    #[test]
    fn test_debug_taps_routed() {
        let config = TriacConfig {
            debug: DebugTaps {
                acmp_output: Some(PinRoute::new(GpioPort::A, 0, 1)),
                edge_channel: Some(PinRoute::new(GpioPort::A, 1, 2)),
                pulse_rise: Some(PinRoute::new(GpioPort::B, 3, 3)),
                pulse_fall: Some(PinRoute::new(GpioPort::B, 4, 4)),
                pulse_fall_prs: Some(PinRoute::new(GpioPort::B, 5, 5)),
            },
            ..Default::default()
        };
        let triac = running(config);
        let state = triac.hardware().state();

        assert_eq!(state.acmp_route, Some(1));
        assert_eq!(state.prs[0].pin_location, Some(2));
        assert_eq!(state.compare_route[1], Some(3));
        assert_eq!(state.compare_route[2], Some(4));
        assert_eq!(state.prs[2].pin_location, Some(5));
        assert_eq!(state.prs[1].pin_location, Some(6));

        // Fall side idles high, everything else low
        let level = |port: GpioPort, pin: u8| {
            state
                .pins
                .iter()
                .find(|&&(p, n, _)| p == port && n == pin)
                .map(|&(_, _, high)| high)
        };
        assert_eq!(state.pins.len(), 6);
        assert_eq!(level(GpioPort::F, 7), Some(false));
        assert_eq!(level(GpioPort::A, 0), Some(false));
        assert_eq!(level(GpioPort::A, 1), Some(false));
        assert_eq!(level(GpioPort::B, 3), Some(false));
        assert_eq!(level(GpioPort::B, 4), Some(true));
        assert_eq!(level(GpioPort::B, 5), Some(true));
    }

    #[test]
    fn test_no_debug_taps_by_default() {
        let triac = running(TriacConfig::default());
        let state = triac.hardware().state();
        assert_eq!(state.acmp_route, None);
        assert_eq!(state.prs[0].pin_location, None);
        assert_eq!(state.compare_route, [None, None, None]);
    }

    #[test]
    fn test_release_returns_hardware() {
        let triac = running(TriacConfig::default());
        let hw = triac.release();
        assert!(hw.state().acmp_enabled);
    }

    proptest! {
        #[test]
        fn prop_compare_values_follow_duty(
            duty in 0u8..=100,
            samples in proptest::collection::vec(5_000u32..=30_000, 1..8),
        ) {
            let mut triac = running(TriacConfig::default());
            triac.hardware_mut().push_captures(&samples);
            triac.calibrate(samples.len() as u32, &mut budget()).unwrap();
            triac.set_duty_cycle(duty, &mut budget()).unwrap();

            let min = *samples.iter().min().unwrap();
            let max = *samples.iter().max().unwrap();
            let (rise, fall) = if duty == 0 {
                (max, max)
            } else {
                let rise = (100 - duty as u32) * (min / 100);
                (rise, rise + 20)
            };
            prop_assert_eq!(compares(&triac), (Some(rise), Some(fall)));
            prop_assert_eq!(triac.duty_cycle(), duty);
        }
    }
}
