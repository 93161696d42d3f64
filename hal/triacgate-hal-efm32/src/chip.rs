//! Chip resource profiles
//!
//! A profile lists where each peripheral lives, which clock-enable bit
//! gates it, and which pins and pin locations the package bonds out.
//! Values are taken from the device headers of the respective part.

/// One analog comparator instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AcmpInstance {
    /// Register block base address
    pub base: u32,
    /// Bit in CMU_HFPERCLKEN0
    pub clock_bit: u8,
    /// PRS SOURCESEL code for this comparator
    pub prs_source: u8,
    /// Highest OUTLOC value with a bonded-out pin
    pub out_location_max: u8,
}

/// One timer instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerInstance {
    /// Register block base address
    pub base: u32,
    /// Bit in CMU_HFPERCLKEN0
    pub clock_bit: u8,
    /// PRS SOURCESEL code for this timer
    pub prs_source: u8,
    /// Counter limit (0xFFFF for 16-bit timers)
    pub max_count: u32,
    /// Highest CCnLOC value with a bonded-out pin
    pub cc_location_max: u8,
}

/// Resource table for one part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChipProfile {
    /// Part name, for logs
    pub name: &'static str,
    /// CMU base address
    pub cmu_base: u32,
    /// GPIO base address
    pub gpio_base: u32,
    /// PRS base address
    pub prs_base: u32,
    /// Bits in CMU_HFBUSCLKEN0 for GPIO and PRS
    pub gpio_bus_clock_bit: u8,
    pub prs_bus_clock_bit: u8,
    /// Comparators, indexed by instance number
    pub acmps: &'static [AcmpInstance],
    /// Timers, indexed by instance number
    pub timers: &'static [TimerInstance],
    /// Number of PRS channels
    pub prs_channel_count: u8,
    /// Valid bits of PRS_ROUTELOC0, PRS_ROUTELOC1, ...
    ///
    /// Each register holds four one-byte CHnLOC fields; the field's mask is
    /// the highest encodable location.
    pub prs_routeloc_masks: &'static [u32],
    /// Bonded-out pins per port (A = index 0), one bit per pin
    pub gpio_pin_masks: [u16; 12],
}

impl ChipProfile {
    /// Comparator instance, if present
    pub fn acmp(&self, index: u8) -> Option<&AcmpInstance> {
        self.acmps.get(index as usize)
    }

    /// Timer instance, if present
    pub fn timer(&self, index: u8) -> Option<&TimerInstance> {
        self.timers.get(index as usize)
    }

    /// Highest location encodable in a channel's CHnLOC field
    pub fn prs_location_max(&self, channel: u8) -> Option<u8> {
        if channel >= self.prs_channel_count {
            return None;
        }
        let group = (channel / 4) as usize;
        let shift = (channel % 4) as u32 * 8;
        self.prs_routeloc_masks
            .get(group)
            .map(|mask| ((mask >> shift) & 0xFF) as u8)
    }

    /// Check a port/pin pair against the package
    pub fn pin_exists(&self, port: usize, pin: u8) -> bool {
        pin < 16
            && self
                .gpio_pin_masks
                .get(port)
                .is_some_and(|mask| mask & (1 << pin) != 0)
    }
}

/// EFM32PG12B500F1024GL125 (Pearl Gecko 12, BGA125)
pub const EFM32PG12B: ChipProfile = ChipProfile {
    name: "EFM32PG12B500F1024GL125",
    cmu_base: 0x400E_4000,
    gpio_base: 0x4000_A000,
    prs_base: 0x400E_6000,
    gpio_bus_clock_bit: 3,
    prs_bus_clock_bit: 4,
    acmps: &[
        AcmpInstance {
            base: 0x4000_0000,
            clock_bit: 10,
            prs_source: 0x02,
            out_location_max: 31,
        },
        AcmpInstance {
            base: 0x4000_0400,
            clock_bit: 11,
            prs_source: 0x03,
            out_location_max: 31,
        },
    ],
    timers: &[
        TimerInstance {
            base: 0x4001_8000,
            clock_bit: 0,
            prs_source: 0x1C,
            max_count: 0xFFFF,
            cc_location_max: 31,
        },
        TimerInstance {
            base: 0x4001_8400,
            clock_bit: 1,
            prs_source: 0x1D,
            max_count: 0xFFFF,
            cc_location_max: 31,
        },
    ],
    prs_channel_count: 12,
    prs_routeloc_masks: &[0x0F0F_0F0F, 0x0707_0F0F, 0x0303_0707],
    gpio_pin_masks: [
        0xFFFF, // A
        0xFFFF, // B
        0xFFFF, // C
        0xFFFF, // D
        0x0000, // E
        0xFFFF, // F
        0x0000, // G
        0x0000, // H
        0x000F, // I
        0xF000, // J
        0x0007, // K
        0x0000, // L
    ],
};
