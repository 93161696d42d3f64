//! EFM32/EFR32 Series 1 backend for triacgate
//!
//! Implements the `triacgate-hal` traits on Series 1 parts (ACMP, PRS and
//! TIMER peripherals with location-based pin routing).
//!
//! # Usage
//!
//! ```ignore
//! use triacgate_hal_efm32::{Efm32Hardware, Mmio, EFM32PG12B};
//!
//! // SAFETY: running on an EFM32PG12B, peripherals owned by the driver
//! let regs = unsafe { Mmio::new() };
//! let hw = Efm32Hardware::new(regs, &EFM32PG12B, 19_000_000);
//! ```
//!
//! Register access goes through [`access::RegisterAccess`] so the backend
//! itself contains no `unsafe` beyond [`Mmio`].

#![no_std]
#![deny(unsafe_code)]

pub mod access;
pub mod backend;
pub mod chip;
pub mod regs;

pub use access::{Mmio, RegisterAccess};
pub use backend::Efm32Hardware;
pub use chip::{AcmpInstance, ChipProfile, TimerInstance, EFM32PG12B};
