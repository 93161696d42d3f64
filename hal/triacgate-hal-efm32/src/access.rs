//! Register access seam
//!
//! The backend never dereferences addresses itself; it goes through
//! [`RegisterAccess`]. On target that is [`Mmio`]; host tests use an
//! in-memory register file.

/// 32-bit register reads and writes by absolute address
pub trait RegisterAccess {
    /// Read a register
    fn read(&self, addr: u32) -> u32;

    /// Write a register
    fn write(&mut self, addr: u32, value: u32);

    /// Read-modify-write: clear `clear` bits, then set `set` bits
    fn modify(&mut self, addr: u32, clear: u32, set: u32) {
        let value = (self.read(addr) & !clear) | set;
        self.write(addr, value);
    }
}

/// Volatile memory-mapped I/O
///
/// Only meaningful on the target MCU. Constructing it is unsafe because
/// the caller vouches that the profile's base addresses are real
/// peripherals and that nothing else drives them.
#[derive(Debug)]
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// # Safety
    ///
    /// The running chip must match the profile used with this accessor,
    /// and no other code may access the same peripherals.
    #[allow(unsafe_code)]
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

#[allow(unsafe_code)]
impl RegisterAccess for Mmio {
    fn read(&self, addr: u32) -> u32 {
        // SAFETY: addresses come from the chip profile, vouched for in `new`
        unsafe { core::ptr::read_volatile(addr as usize as *const u32) }
    }

    fn write(&mut self, addr: u32, value: u32) {
        // SAFETY: addresses come from the chip profile, vouched for in `new`
        unsafe { core::ptr::write_volatile(addr as usize as *mut u32, value) }
    }
}

#[cfg(test)]
pub(crate) mod file {
    use super::RegisterAccess;
    use heapless::{LinearMap, Vec};

    /// In-memory registers, zero until written, with a write log
    pub struct RegisterFile {
        regs: LinearMap<u32, u32, 128>,
        pub log: Vec<(u32, u32), 256>,
    }

    impl RegisterFile {
        pub fn new() -> Self {
            Self {
                regs: LinearMap::new(),
                log: Vec::new(),
            }
        }

        /// Set a register without logging (hardware-driven state)
        pub fn preset(&mut self, addr: u32, value: u32) {
            let _ = self.regs.insert(addr, value);
        }

        pub fn get(&self, addr: u32) -> u32 {
            self.regs.get(&addr).copied().unwrap_or(0)
        }

        pub fn writes_to(&self, addr: u32) -> usize {
            self.log.iter().filter(|(a, _)| *a == addr).count()
        }
    }

    impl RegisterAccess for RegisterFile {
        fn read(&self, addr: u32) -> u32 {
            self.get(addr)
        }

        fn write(&mut self, addr: u32, value: u32) {
            let _ = self.log.push((addr, value));
            let _ = self.regs.insert(addr, value);
        }
    }

    #[test]
    fn test_modify_keeps_other_bits() {
        let mut f = RegisterFile::new();
        f.preset(0x100, 0xF0F0);
        f.modify(0x100, 0x00F0, 0x0001);
        assert_eq!(f.get(0x100), 0xF001);
        assert_eq!(f.writes_to(0x100), 1);
    }
}
