//! Register-level implementation of the hardware traits

use triacgate_hal::{
    AcmpId, AcmpSetup, AnalogComparator, CaptureCompareTimer, CcChannel, CompareSetup,
    CounterSetup, DeviceResources, EdgeDetect, GpioPort, OutputAction, OutputPins, PrsChannel,
    PrsSource, ReflexRouter, TimerId, VbReference,
};

use crate::access::RegisterAccess;
use crate::chip::ChipProfile;
use crate::regs::{self, field, mask};

/// Series 1 device driven through a [`RegisterAccess`]
///
/// All timers are assumed to run from HFPERCLK with no extra prescaling
/// in the CMU, so their input clock is `hfperclk_hz`.
pub struct Efm32Hardware<R> {
    regs: R,
    chip: &'static ChipProfile,
    hfperclk_hz: u32,
}

impl<R: RegisterAccess> Efm32Hardware<R> {
    /// Create a backend for `chip` with the given peripheral clock
    pub fn new(regs: R, chip: &'static ChipProfile, hfperclk_hz: u32) -> Self {
        Self {
            regs,
            chip,
            hfperclk_hz,
        }
    }

    /// Chip profile in use
    pub fn chip(&self) -> &'static ChipProfile {
        self.chip
    }

    /// Register accessor
    pub fn registers(&self) -> &R {
        &self.regs
    }

    /// Register accessor, mutable
    pub fn registers_mut(&mut self) -> &mut R {
        &mut self.regs
    }

    /// Release the register accessor
    pub fn release(self) -> R {
        self.regs
    }

    fn acmp_base(&self, acmp: AcmpId) -> Option<u32> {
        self.chip.acmp(acmp.0).map(|a| a.base)
    }

    fn timer_base(&self, timer: TimerId) -> Option<u32> {
        self.chip.timer(timer.0).map(|t| t.base)
    }

    fn cc_base(base: u32, cc: CcChannel) -> u32 {
        base + regs::timer::CC0_CTRL + regs::timer::CC_STRIDE * cc.index() as u32
    }

    fn prs_ctrl(&self, channel: PrsChannel) -> u32 {
        self.chip.prs_base + regs::prs::CH0_CTRL + regs::prs::CH_STRIDE * channel.0 as u32
    }

    /// SOURCESEL and SIGSEL codes for a producer
    fn prs_source_codes(&self, source: PrsSource) -> Option<(u32, u32)> {
        match source {
            PrsSource::AcmpOutput(acmp) => self
                .chip
                .acmp(acmp.0)
                .map(|a| (a.prs_source as u32, regs::prs::SIGSEL_ACMPOUT)),
            PrsSource::TimerCompare(timer, cc) => self.chip.timer(timer.0).map(|t| {
                (
                    t.prs_source as u32,
                    regs::prs::SIGSEL_TIMERCC0 + cc.index() as u32,
                )
            }),
        }
    }
}

impl<R: RegisterAccess> DeviceResources for Efm32Hardware<R> {
    fn prs_channel_count(&self) -> u8 {
        self.chip.prs_channel_count
    }

    fn prs_location_max(&self, channel: PrsChannel) -> Option<u8> {
        self.chip.prs_location_max(channel.0)
    }

    fn acmp_location_max(&self, acmp: AcmpId) -> Option<u8> {
        self.chip.acmp(acmp.0).map(|a| a.out_location_max)
    }

    fn timer_location_max(&self, timer: TimerId, _cc: CcChannel) -> Option<u8> {
        self.chip.timer(timer.0).map(|t| t.cc_location_max)
    }

    fn pin_exists(&self, port: GpioPort, pin: u8) -> bool {
        self.chip.pin_exists(port.index(), pin)
    }

    fn has_acmp(&self, acmp: AcmpId) -> bool {
        self.chip.acmp(acmp.0).is_some()
    }

    fn timer_clock_hz(&self, timer: TimerId) -> Option<u32> {
        self.chip.timer(timer.0).map(|_| self.hfperclk_hz)
    }

    fn timer_max_count(&self, timer: TimerId) -> u32 {
        self.chip.timer(timer.0).map_or(0xFFFF, |t| t.max_count)
    }

    fn enable_clocks(&mut self, acmp: AcmpId, timer: TimerId) {
        let cmu = self.chip.cmu_base;
        let bus = (1 << self.chip.gpio_bus_clock_bit) | (1 << self.chip.prs_bus_clock_bit);
        self.regs.modify(cmu + regs::cmu::HFBUSCLKEN0, 0, bus);

        let mut per = 0;
        if let Some(a) = self.chip.acmp(acmp.0) {
            per |= 1 << a.clock_bit;
        }
        if let Some(t) = self.chip.timer(timer.0) {
            per |= 1 << t.clock_bit;
        }
        self.regs.modify(cmu + regs::cmu::HFPERCLKEN0, 0, per);
    }
}

impl<R: RegisterAccess> AnalogComparator for Efm32Hardware<R> {
    fn acmp_setup(&mut self, acmp: AcmpId, setup: &AcmpSetup) {
        use regs::acmp::*;
        let Some(base) = self.acmp_base(acmp) else {
            return;
        };

        let mut ctrl = field(setup.bias_prog as u32, CTRL_BIASPROG_SHIFT, CTRL_BIASPROG_WIDTH);
        if setup.high_accuracy {
            ctrl |= CTRL_ACCURACY;
        }
        if setup.full_bias {
            ctrl |= CTRL_FULLBIAS;
        }
        self.regs.write(base + CTRL, ctrl);

        let mut inputsel = field(setup.input.0 as u32, INPUTSEL_POSSEL_SHIFT, INPUTSEL_SEL_WIDTH)
            | field(NEGSEL_VBDIV, INPUTSEL_NEGSEL_SHIFT, INPUTSEL_SEL_WIDTH);
        if setup.reference == VbReference::V2_5 {
            inputsel |= INPUTSEL_VBSEL;
        }
        self.regs.write(base + INPUTSEL, inputsel);

        self.regs.write(
            base + HYSTERESIS0,
            field(setup.dividers.low as u32, HYST_DIVVB_SHIFT, HYST_DIVVB_WIDTH),
        );
        self.regs.write(
            base + HYSTERESIS1,
            field(setup.dividers.high as u32, HYST_DIVVB_SHIFT, HYST_DIVVB_WIDTH),
        );
    }

    fn acmp_enable(&mut self, acmp: AcmpId) {
        if let Some(base) = self.acmp_base(acmp) {
            self.regs.modify(base + regs::acmp::CTRL, 0, regs::acmp::CTRL_EN);
        }
    }

    fn acmp_active(&self, acmp: AcmpId) -> bool {
        self.acmp_base(acmp).is_some_and(|base| {
            self.regs.read(base + regs::acmp::STATUS) & regs::acmp::STATUS_ACMPACT != 0
        })
    }

    fn acmp_route_output(&mut self, acmp: AcmpId, location: u8) {
        use regs::acmp::*;
        let Some(base) = self.acmp_base(acmp) else {
            return;
        };
        self.regs.modify(
            base + ROUTELOC0,
            mask(0, ROUTELOC0_OUTLOC_WIDTH),
            field(location as u32, 0, ROUTELOC0_OUTLOC_WIDTH),
        );
        self.regs.modify(base + ROUTEPEN, 0, ROUTEPEN_OUTPEN);
    }
}

impl<R: RegisterAccess> ReflexRouter for Efm32Hardware<R> {
    fn prs_connect(&mut self, channel: PrsChannel, source: PrsSource, edge: EdgeDetect) {
        use regs::prs::*;
        let Some((sourcesel, sigsel)) = self.prs_source_codes(source) else {
            return;
        };
        let edsel = match edge {
            EdgeDetect::Off => EDSEL_OFF,
            EdgeDetect::Rising => EDSEL_POSEDGE,
            EdgeDetect::Falling => EDSEL_NEGEDGE,
            EdgeDetect::Both => EDSEL_BOTHEDGES,
        };
        let clear = mask(CTRL_SIGSEL_SHIFT, CTRL_SIGSEL_WIDTH)
            | mask(CTRL_SOURCESEL_SHIFT, CTRL_SOURCESEL_WIDTH)
            | mask(CTRL_EDSEL_SHIFT, CTRL_EDSEL_WIDTH);
        let set = field(sigsel, CTRL_SIGSEL_SHIFT, CTRL_SIGSEL_WIDTH)
            | field(sourcesel, CTRL_SOURCESEL_SHIFT, CTRL_SOURCESEL_WIDTH)
            | field(edsel, CTRL_EDSEL_SHIFT, CTRL_EDSEL_WIDTH);
        let addr = self.prs_ctrl(channel);
        self.regs.modify(addr, clear, set);
    }

    fn prs_and_next(&mut self, channel: PrsChannel) {
        let addr = self.prs_ctrl(channel);
        self.regs.modify(addr, 0, regs::prs::CTRL_ANDNEXT);
    }

    fn prs_route_pin(&mut self, channel: PrsChannel, location: u8) {
        use regs::prs::*;
        let base = self.chip.prs_base;
        let routeloc = base + ROUTELOC0 + 4 * (channel.0 as u32 / 4);
        let shift = (channel.0 as u32 % 4) * 8;
        self.regs
            .modify(routeloc, mask(shift, 8), field(location as u32, shift, 8));
        self.regs.modify(base + ROUTEPEN, 0, 1 << channel.0);
    }
}

impl<R: RegisterAccess> CaptureCompareTimer for Efm32Hardware<R> {
    fn timer_setup(&mut self, timer: TimerId, setup: &CounterSetup) {
        use regs::timer::*;
        let Some(base) = self.timer_base(timer) else {
            return;
        };
        self.regs.write(base + CMD, CMD_STOP);

        let mut ctrl = field(setup.prescale.log2() as u32, CTRL_PRESC_SHIFT, CTRL_PRESC_WIDTH);
        if setup.reload_on_edge {
            ctrl |= field(INPUT_ACTION_RELOADSTART, CTRL_RISEA_SHIFT, CTRL_INPUT_ACTION_WIDTH)
                | field(INPUT_ACTION_RELOADSTART, CTRL_FALLA_SHIFT, CTRL_INPUT_ACTION_WIDTH);
        }
        if setup.dma_clear_on_access {
            ctrl |= CTRL_DMACLRACT;
        }
        if setup.reset_outputs_on_reload {
            ctrl |= CTRL_RSSCOIST;
        }
        self.regs.write(base + CTRL, ctrl);
    }

    fn timer_compare_setup(&mut self, timer: TimerId, cc: CcChannel, setup: &CompareSetup) {
        use regs::timer::*;
        let Some(base) = self.timer_base(timer) else {
            return;
        };
        let cmoa = match setup.on_match {
            OutputAction::None => CMOA_NONE,
            OutputAction::Toggle => CMOA_TOGGLE,
            OutputAction::Clear => CMOA_CLEAR,
            OutputAction::Set => CMOA_SET,
        };
        let mut ctrl = field(MODE_OUTPUTCOMPARE, CC_CTRL_MODE_SHIFT, CC_CTRL_MODE_WIDTH)
            | field(cmoa, CC_CTRL_CMOA_SHIFT, CC_CTRL_CMOA_WIDTH)
            | CC_CTRL_PRSCONF_LEVEL;
        if setup.initial_high {
            ctrl |= CC_CTRL_COIST;
        }
        self.regs.write(Self::cc_base(base, cc), ctrl);
    }

    fn timer_capture_setup(&mut self, timer: TimerId, cc: CcChannel, input: PrsChannel) {
        use regs::timer::*;
        let Some(base) = self.timer_base(timer) else {
            return;
        };
        self.regs.write(base + IFC, IF_CC0 << cc.index());
        let ctrl = field(MODE_INPUTCAPTURE, CC_CTRL_MODE_SHIFT, CC_CTRL_MODE_WIDTH)
            | field(input.0 as u32, CC_CTRL_PRSSEL_SHIFT, CC_CTRL_PRSSEL_WIDTH)
            | CC_CTRL_INSEL_PRS
            | field(ICEDGE_RISING, CC_CTRL_ICEDGE_SHIFT, CC_CTRL_ICEDGE_WIDTH);
        self.regs.write(Self::cc_base(base, cc), ctrl);
    }

    fn timer_set_compare(&mut self, timer: TimerId, cc: CcChannel, value: u32) {
        if let Some(base) = self.timer_base(timer) {
            self.regs
                .write(Self::cc_base(base, cc) + regs::timer::CC_CCV, value);
        }
    }

    fn timer_capture_pending(&self, timer: TimerId, cc: CcChannel) -> bool {
        self.timer_base(timer).is_some_and(|base| {
            self.regs.read(base + regs::timer::IF) & (regs::timer::IF_CC0 << cc.index()) != 0
        })
    }

    fn timer_take_capture(&mut self, timer: TimerId, cc: CcChannel) -> u32 {
        let Some(base) = self.timer_base(timer) else {
            return 0;
        };
        let value = self.regs.read(Self::cc_base(base, cc) + regs::timer::CC_CCV);
        self.regs
            .write(base + regs::timer::IFC, regs::timer::IF_CC0 << cc.index());
        value
    }

    fn timer_route_compare(&mut self, timer: TimerId, cc: CcChannel, location: u8) {
        use regs::timer::*;
        let Some(base) = self.timer_base(timer) else {
            return;
        };
        let shift = ROUTELOC0_CCLOC_STRIDE * cc.index() as u32;
        self.regs.modify(
            base + ROUTELOC0,
            mask(shift, ROUTELOC0_CCLOC_WIDTH),
            field(location as u32, shift, ROUTELOC0_CCLOC_WIDTH),
        );
        self.regs.modify(base + ROUTEPEN, 0, 1 << cc.index());
    }
}

impl<R: RegisterAccess> OutputPins for Efm32Hardware<R> {
    fn configure_push_pull(&mut self, port: GpioPort, pin: u8, high: bool) {
        use regs::gpio::*;
        if pin >= 16 {
            return;
        }
        let base = self.chip.gpio_base + PORT_STRIDE * port.index() as u32;

        let bit = 1 << pin;
        if high {
            self.regs.modify(base + DOUT, 0, bit);
        } else {
            self.regs.modify(base + DOUT, bit, 0);
        }

        let (reg, slot) = if pin < 8 {
            (MODEL, pin)
        } else {
            (MODEH, pin - 8)
        };
        let shift = slot as u32 * MODE_WIDTH;
        self.regs.modify(
            base + reg,
            mask(shift, MODE_WIDTH),
            field(MODE_PUSHPULL, shift, MODE_WIDTH),
        );
    }
}
