//! Simulated device for host tests
//!
//! [`MockHardware`] implements every peripheral trait against plain state.
//! Tests can snapshot the state before and after a call and compare, count
//! mutating calls, and script the half-wave lengths the timer "captures".
//!
//! The simulation models one comparator and one timer: the ids passed in
//! are recorded but not used to select separate instances.

use heapless::{Deque, Vec};

use crate::acmp::{AcmpSetup, AnalogComparator};
use crate::device::{AcmpId, DeviceResources, GpioPort, PrsChannel, TimerId};
use crate::gpio::OutputPins;
use crate::prs::{EdgeDetect, PrsSource, ReflexRouter};
use crate::timer::{CaptureCompareTimer, CcChannel, CompareSetup, CounterSetup};

/// Interconnect channels the simulation can hold
pub const MOCK_PRS_CHANNELS: usize = 12;

/// Timer instances the simulation can describe
pub const MOCK_TIMERS: usize = 4;

/// Depth of the scripted capture queue
pub const MOCK_CAPTURE_DEPTH: usize = 128;

/// Resources the simulated chip offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockProfile {
    /// Interconnect channels present
    pub prs_channel_count: u8,
    /// Highest pin location for every channel
    pub prs_location_max: u8,
    /// Highest pin location for comparator and timer compare outputs
    pub output_location_max: u8,
    /// Bonded-out pins per port, one bit per pin (A = index 0)
    pub pin_mask: [u16; 12],
    /// Number of comparator instances
    pub acmp_count: u8,
    /// Timer input clocks, `None` where the instance is missing
    pub timer_clock_hz: [Option<u32>; MOCK_TIMERS],
    /// Counter width limit
    pub timer_max_count: u32,
}

impl Default for MockProfile {
    /// Eight channels, ports A-F fully bonded, two comparators, two
    /// 16-bit timers clocked at 1 MHz
    fn default() -> Self {
        Self {
            prs_channel_count: 8,
            prs_location_max: 7,
            output_location_max: 31,
            pin_mask: [0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0, 0, 0, 0, 0, 0],
            acmp_count: 2,
            timer_clock_hz: [Some(1_000_000), Some(1_000_000), None, None],
            timer_max_count: 0xFFFF,
        }
    }
}

/// Routing state of one interconnect channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MockPrsChannel {
    /// Selected producer
    pub source: Option<PrsSource>,
    /// Edge detection
    pub edge: EdgeDetect,
    /// AND with the next channel
    pub and_next: bool,
    /// Pin location the channel drives, if routed
    pub pin_location: Option<u8>,
}

/// Observable device state
///
/// Everything a configuration call can change lives here, so two
/// snapshots compare equal exactly when no such change happened.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MockState {
    /// Peripherals whose clocks were enabled
    pub clocks: Option<(AcmpId, TimerId)>,
    /// Comparator configuration
    pub acmp: Option<AcmpSetup>,
    /// Comparator enabled
    pub acmp_enabled: bool,
    /// Comparator output pin location
    pub acmp_route: Option<u8>,
    /// Interconnect channels
    pub prs: [MockPrsChannel; MOCK_PRS_CHANNELS],
    /// Pins configured as push-pull outputs with their initial level
    pub pins: Vec<(GpioPort, u8, bool), 8>,
    /// Counter configuration
    pub timer: Option<CounterSetup>,
    /// Compare channel configuration, by channel index
    pub compare_setup: [Option<CompareSetup>; 3],
    /// Last written compare values, by channel index
    pub compare: [Option<u32>; 3],
    /// Compare output pin locations, by channel index
    pub compare_route: [Option<u8>; 3],
    /// Capture channel and its interconnect input
    pub capture: Option<(CcChannel, PrsChannel)>,
}

/// Simulated device
#[derive(Debug, Clone)]
pub struct MockHardware {
    profile: MockProfile,
    state: MockState,
    writes: u32,
    captures: Deque<u32, MOCK_CAPTURE_DEPTH>,
    captures_taken: u32,
    last_capture: u32,
    line_present: bool,
    acmp_stuck: bool,
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHardware {
    /// Create a device with the default profile and an AC line present
    pub fn new() -> Self {
        Self::with_profile(MockProfile::default())
    }

    /// Create a device with a custom profile
    pub fn with_profile(profile: MockProfile) -> Self {
        Self {
            profile,
            state: MockState::default(),
            writes: 0,
            captures: Deque::new(),
            captures_taken: 0,
            last_capture: 0,
            line_present: true,
            acmp_stuck: false,
        }
    }

    /// Resource profile
    pub fn profile(&self) -> &MockProfile {
        &self.profile
    }

    /// Snapshot of the observable state
    pub fn state(&self) -> &MockState {
        &self.state
    }

    /// Number of mutating hardware calls so far
    pub fn writes(&self) -> u32 {
        self.writes
    }

    /// Number of captures read so far
    pub fn captures_taken(&self) -> u32 {
        self.captures_taken
    }

    /// Captures still queued
    pub fn captures_pending(&self) -> usize {
        self.captures.len()
    }

    /// Remove the AC line: arming the capture no longer produces the
    /// initial zero-count edge
    pub fn set_line_present(&mut self, present: bool) {
        self.line_present = present;
    }

    /// Keep the comparator from ever reporting ready
    pub fn set_acmp_stuck(&mut self, stuck: bool) {
        self.acmp_stuck = stuck;
    }

    /// Queue one measured half-wave length, in ticks
    ///
    /// Returns false if the queue is full.
    pub fn push_capture(&mut self, ticks: u32) -> bool {
        self.captures.push_back(ticks).is_ok()
    }

    /// Queue several half-wave lengths
    pub fn push_captures(&mut self, ticks: &[u32]) {
        for &t in ticks {
            if !self.push_capture(t) {
                break;
            }
        }
    }

    /// Compare value last written to a channel
    pub fn compare(&self, cc: CcChannel) -> Option<u32> {
        self.state.compare[cc.index()]
    }

    fn touch(&mut self) {
        self.writes += 1;
    }

    fn prs_mut(&mut self, channel: PrsChannel) -> Option<&mut MockPrsChannel> {
        self.state.prs.get_mut(channel.index())
    }
}

impl DeviceResources for MockHardware {
    fn prs_channel_count(&self) -> u8 {
        self.profile.prs_channel_count
    }

    fn prs_location_max(&self, channel: PrsChannel) -> Option<u8> {
        if channel.0 < self.profile.prs_channel_count {
            Some(self.profile.prs_location_max)
        } else {
            None
        }
    }

    fn acmp_location_max(&self, acmp: AcmpId) -> Option<u8> {
        self.has_acmp(acmp).then_some(self.profile.output_location_max)
    }

    fn timer_location_max(&self, timer: TimerId, _cc: CcChannel) -> Option<u8> {
        self.timer_clock_hz(timer).map(|_| self.profile.output_location_max)
    }

    fn pin_exists(&self, port: GpioPort, pin: u8) -> bool {
        pin < 16 && self.profile.pin_mask[port.index()] & (1 << pin) != 0
    }

    fn has_acmp(&self, acmp: AcmpId) -> bool {
        acmp.0 < self.profile.acmp_count
    }

    fn timer_clock_hz(&self, timer: TimerId) -> Option<u32> {
        self.profile
            .timer_clock_hz
            .get(timer.0 as usize)
            .copied()
            .flatten()
    }

    fn timer_max_count(&self, _timer: TimerId) -> u32 {
        self.profile.timer_max_count
    }

    fn enable_clocks(&mut self, acmp: AcmpId, timer: TimerId) {
        self.touch();
        self.state.clocks = Some((acmp, timer));
    }
}

impl AnalogComparator for MockHardware {
    fn acmp_setup(&mut self, _acmp: AcmpId, setup: &AcmpSetup) {
        self.touch();
        self.state.acmp = Some(*setup);
        self.state.acmp_enabled = false;
    }

    fn acmp_enable(&mut self, _acmp: AcmpId) {
        self.touch();
        self.state.acmp_enabled = true;
    }

    fn acmp_active(&self, _acmp: AcmpId) -> bool {
        self.state.acmp_enabled && !self.acmp_stuck
    }

    fn acmp_route_output(&mut self, _acmp: AcmpId, location: u8) {
        self.touch();
        self.state.acmp_route = Some(location);
    }
}

impl ReflexRouter for MockHardware {
    fn prs_connect(&mut self, channel: PrsChannel, source: PrsSource, edge: EdgeDetect) {
        self.touch();
        if let Some(ch) = self.prs_mut(channel) {
            ch.source = Some(source);
            ch.edge = edge;
        }
    }

    fn prs_and_next(&mut self, channel: PrsChannel) {
        self.touch();
        if let Some(ch) = self.prs_mut(channel) {
            ch.and_next = true;
        }
    }

    fn prs_route_pin(&mut self, channel: PrsChannel, location: u8) {
        self.touch();
        if let Some(ch) = self.prs_mut(channel) {
            ch.pin_location = Some(location);
        }
    }
}

impl CaptureCompareTimer for MockHardware {
    fn timer_setup(&mut self, _timer: TimerId, setup: &CounterSetup) {
        self.touch();
        self.state.timer = Some(*setup);
    }

    fn timer_compare_setup(&mut self, _timer: TimerId, cc: CcChannel, setup: &CompareSetup) {
        self.touch();
        self.state.compare_setup[cc.index()] = Some(*setup);
    }

    fn timer_capture_setup(&mut self, _timer: TimerId, cc: CcChannel, input: PrsChannel) {
        self.touch();
        self.state.capture = Some((cc, input));
        // The first edge after arming starts the counter and captures 0
        if self.line_present && self.captures.push_front(0).is_err() {
            self.captures.pop_back();
            let _ = self.captures.push_front(0);
        }
    }

    fn timer_set_compare(&mut self, _timer: TimerId, cc: CcChannel, value: u32) {
        self.touch();
        self.state.compare[cc.index()] = Some(value);
    }

    fn timer_capture_pending(&self, _timer: TimerId, cc: CcChannel) -> bool {
        matches!(self.state.capture, Some((armed, _)) if armed == cc) && !self.captures.is_empty()
    }

    fn timer_take_capture(&mut self, timer: TimerId, cc: CcChannel) -> u32 {
        if self.timer_capture_pending(timer, cc) {
            if let Some(value) = self.captures.pop_front() {
                self.last_capture = value;
                self.captures_taken += 1;
            }
        }
        self.last_capture
    }

    fn timer_route_compare(&mut self, _timer: TimerId, cc: CcChannel, location: u8) {
        self.touch();
        self.state.compare_route[cc.index()] = Some(location);
    }
}

impl OutputPins for MockHardware {
    fn configure_push_pull(&mut self, port: GpioPort, pin: u8, high: bool) {
        self.touch();
        if let Some(entry) = self
            .state
            .pins
            .iter_mut()
            .find(|(p, n, _)| *p == port && *n == pin)
        {
            entry.2 = high;
        } else {
            let _ = self.state.pins.push((port, pin, high));
        }
    }
}
