//! Series 1 register offsets and fields
//!
//! Only the registers and fields the backend touches are listed. Offsets
//! are relative to the peripheral base address from the chip profile.

/// Place `value` into a field of `width` bits at `shift`
pub const fn field(value: u32, shift: u32, width: u32) -> u32 {
    (value & ((1 << width) - 1)) << shift
}

/// Mask covering a field of `width` bits at `shift`
pub const fn mask(shift: u32, width: u32) -> u32 {
    ((1 << width) - 1) << shift
}

/// Clock management unit
pub mod cmu {
    /// High-frequency bus clock enable 0
    pub const HFBUSCLKEN0: u32 = 0x0B0;
    /// High-frequency peripheral clock enable 0
    pub const HFPERCLKEN0: u32 = 0x0C0;
}

/// General purpose I/O
pub mod gpio {
    /// Distance between port register blocks
    pub const PORT_STRIDE: u32 = 0x30;
    /// Mode for pins 0-7
    pub const MODEL: u32 = 0x004;
    /// Mode for pins 8-15
    pub const MODEH: u32 = 0x008;
    /// Data out
    pub const DOUT: u32 = 0x00C;

    /// Bits per pin in MODEL/MODEH
    pub const MODE_WIDTH: u32 = 4;
    /// Push-pull output
    pub const MODE_PUSHPULL: u32 = 0x4;
}

/// Peripheral reflex system
pub mod prs {
    /// Pin output enable, one bit per channel
    pub const ROUTEPEN: u32 = 0x008;
    /// First location register; four channels per register, one byte each
    pub const ROUTELOC0: u32 = 0x010;
    /// First channel control register
    pub const CH0_CTRL: u32 = 0x050;
    /// Distance between channel control registers
    pub const CH_STRIDE: u32 = 0x4;

    /// Signal select within the source
    pub const CTRL_SIGSEL_SHIFT: u32 = 0;
    pub const CTRL_SIGSEL_WIDTH: u32 = 3;
    /// Source peripheral select
    pub const CTRL_SOURCESEL_SHIFT: u32 = 8;
    pub const CTRL_SOURCESEL_WIDTH: u32 = 7;
    /// Edge detect select
    pub const CTRL_EDSEL_SHIFT: u32 = 24;
    pub const CTRL_EDSEL_WIDTH: u32 = 2;
    /// AND with next channel
    pub const CTRL_ANDNEXT: u32 = 1 << 29;

    pub const EDSEL_OFF: u32 = 0;
    pub const EDSEL_POSEDGE: u32 = 1;
    pub const EDSEL_NEGEDGE: u32 = 2;
    pub const EDSEL_BOTHEDGES: u32 = 3;

    /// Comparator output signal
    pub const SIGSEL_ACMPOUT: u32 = 0;
    /// Timer compare/capture channel 0 signal; CC1 and CC2 follow
    pub const SIGSEL_TIMERCC0: u32 = 2;
}

/// Analog comparator
pub mod acmp {
    pub const CTRL: u32 = 0x000;
    pub const INPUTSEL: u32 = 0x004;
    pub const STATUS: u32 = 0x008;
    /// Divider settings used while the output is low
    pub const HYSTERESIS0: u32 = 0x028;
    /// Divider settings used while the output is high
    pub const HYSTERESIS1: u32 = 0x02C;
    pub const ROUTEPEN: u32 = 0x040;
    pub const ROUTELOC0: u32 = 0x044;

    pub const CTRL_EN: u32 = 1 << 0;
    /// High accuracy mode
    pub const CTRL_ACCURACY: u32 = 1 << 15;
    pub const CTRL_BIASPROG_SHIFT: u32 = 24;
    pub const CTRL_BIASPROG_WIDTH: u32 = 6;
    pub const CTRL_FULLBIAS: u32 = 1 << 31;

    pub const INPUTSEL_POSSEL_SHIFT: u32 = 0;
    pub const INPUTSEL_NEGSEL_SHIFT: u32 = 8;
    pub const INPUTSEL_SEL_WIDTH: u32 = 8;
    /// 2.5 V reference for the VB divider (clear for 1.25 V)
    pub const INPUTSEL_VBSEL: u32 = 1 << 22;
    /// Negative input from the VB divider
    pub const NEGSEL_VBDIV: u32 = 0xF2;

    /// Warm-up complete
    pub const STATUS_ACMPACT: u32 = 1 << 0;

    pub const HYST_DIVVB_SHIFT: u32 = 24;
    pub const HYST_DIVVB_WIDTH: u32 = 6;

    pub const ROUTEPEN_OUTPEN: u32 = 1 << 0;
    pub const ROUTELOC0_OUTLOC_WIDTH: u32 = 6;
}

/// Timer/counter
pub mod timer {
    pub const CTRL: u32 = 0x000;
    pub const CMD: u32 = 0x004;
    pub const IF: u32 = 0x00C;
    pub const IFC: u32 = 0x014;
    pub const ROUTEPEN: u32 = 0x030;
    pub const ROUTELOC0: u32 = 0x034;
    /// First compare/capture channel block
    pub const CC0_CTRL: u32 = 0x060;
    /// Capture/compare value, relative to the channel block
    pub const CC_CCV: u32 = 0x004;
    /// Distance between compare/capture channel blocks
    pub const CC_STRIDE: u32 = 0x10;

    /// Clear interrupt flags on DMA access
    pub const CTRL_DMACLRACT: u32 = 1 << 7;
    pub const CTRL_RISEA_SHIFT: u32 = 8;
    pub const CTRL_FALLA_SHIFT: u32 = 10;
    pub const CTRL_INPUT_ACTION_WIDTH: u32 = 2;
    pub const CTRL_PRESC_SHIFT: u32 = 24;
    pub const CTRL_PRESC_WIDTH: u32 = 4;
    /// Reload-start sets compare outputs to their initial state
    pub const CTRL_RSSCOIST: u32 = 1 << 29;

    pub const INPUT_ACTION_RELOADSTART: u32 = 3;

    pub const CMD_STOP: u32 = 1 << 1;

    /// Capture flag of CC0; CC1 and CC2 follow
    pub const IF_CC0: u32 = 1 << 4;

    pub const CC_CTRL_MODE_SHIFT: u32 = 0;
    pub const CC_CTRL_MODE_WIDTH: u32 = 2;
    pub const CC_CTRL_COIST: u32 = 1 << 4;
    pub const CC_CTRL_CMOA_SHIFT: u32 = 8;
    pub const CC_CTRL_CMOA_WIDTH: u32 = 2;
    pub const CC_CTRL_PRSSEL_SHIFT: u32 = 16;
    pub const CC_CTRL_PRSSEL_WIDTH: u32 = 4;
    /// Input from the interconnect instead of the pin
    pub const CC_CTRL_INSEL_PRS: u32 = 1 << 20;
    pub const CC_CTRL_ICEDGE_SHIFT: u32 = 24;
    pub const CC_CTRL_ICEDGE_WIDTH: u32 = 2;
    /// Compare output drives the interconnect as a level
    pub const CC_CTRL_PRSCONF_LEVEL: u32 = 1 << 28;

    pub const MODE_INPUTCAPTURE: u32 = 1;
    pub const MODE_OUTPUTCOMPARE: u32 = 2;

    pub const CMOA_NONE: u32 = 0;
    pub const CMOA_TOGGLE: u32 = 1;
    pub const CMOA_CLEAR: u32 = 2;
    pub const CMOA_SET: u32 = 3;

    pub const ICEDGE_RISING: u32 = 0;

    /// Width of each CCnLOC field in ROUTELOC0
    pub const ROUTELOC0_CCLOC_WIDTH: u32 = 6;
    /// Distance between CCnLOC fields in ROUTELOC0
    pub const ROUTELOC0_CCLOC_STRIDE: u32 = 8;
}
