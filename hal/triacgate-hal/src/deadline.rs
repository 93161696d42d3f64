//! Bounded waiting on hardware events
//!
//! Every wait on the comparator or on a timer capture polls a status bit.
//! A [`Deadline`] is consulted once per poll and ends the wait when it
//! expires, so a missing AC line turns into an error instead of a hang.
//!
//! One deadline is meant to cover a whole driver call: `calibrate(60, ..)`
//! shares a single budget across all 60 samples.

use embedded_hal::delay::DelayNs;

/// Expiry check polled while waiting for a hardware event
pub trait Deadline {
    /// Returns true once the wait should be abandoned
    ///
    /// Called once per poll iteration. Implementations may block briefly
    /// (e.g. delay between polls).
    fn expired(&mut self) -> bool;
}

impl<T: Deadline + ?Sized> Deadline for &mut T {
    fn expired(&mut self) -> bool {
        (**self).expired()
    }
}

/// Deadline that expires after a fixed number of polls
///
/// Useful where no time source exists. The wall-clock length depends on
/// how long each poll takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpinBudget {
    remaining: u32,
}

impl SpinBudget {
    /// Allow up to `polls` polls
    pub const fn new(polls: u32) -> Self {
        Self { remaining: polls }
    }

    /// Never expire
    pub const fn unbounded() -> Self {
        Self {
            remaining: u32::MAX,
        }
    }

    /// Polls left before expiry
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }
}

impl Deadline for SpinBudget {
    fn expired(&mut self) -> bool {
        if self.remaining == u32::MAX {
            return false;
        }
        match self.remaining.checked_sub(1) {
            Some(left) => {
                self.remaining = left;
                false
            }
            None => true,
        }
    }
}

/// Deadline measured in microseconds with a delay between polls
pub struct DelayBudget<D> {
    delay: D,
    remaining_us: u32,
    step_us: u32,
}

impl<D: DelayNs> DelayBudget<D> {
    /// Default poll interval
    pub const DEFAULT_STEP_US: u32 = 10;

    /// Allow `budget_us` microseconds, polling every 10 µs
    pub fn new(delay: D, budget_us: u32) -> Self {
        Self::with_step(delay, budget_us, Self::DEFAULT_STEP_US)
    }

    /// Allow `budget_us` microseconds, polling every `step_us`
    pub fn with_step(delay: D, budget_us: u32, step_us: u32) -> Self {
        Self {
            delay,
            remaining_us: budget_us,
            step_us: step_us.max(1),
        }
    }

    /// Microseconds left before expiry
    pub fn remaining_us(&self) -> u32 {
        self.remaining_us
    }

    /// Release the delay provider
    pub fn release(self) -> D {
        self.delay
    }
}

impl<D: DelayNs> Deadline for DelayBudget<D> {
    fn expired(&mut self) -> bool {
        if self.remaining_us == 0 {
            return true;
        }
        let step = self.step_us.min(self.remaining_us);
        self.delay.delay_us(step);
        self.remaining_us -= step;
        false
    }
}

#[cfg(feature = "embassy-time")]
pub use self::instant::InstantDeadline;

#[cfg(feature = "embassy-time")]
mod instant {
    use super::Deadline;
    use embassy_time::{Duration, Instant};

    /// Deadline at a fixed point on the embassy time base
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct InstantDeadline {
        at: Instant,
    }

    impl InstantDeadline {
        /// Expire at `at`
        pub const fn at(at: Instant) -> Self {
            Self { at }
        }

        /// Expire `timeout` from now
        pub fn after(timeout: Duration) -> Self {
            Self {
                at: Instant::now() + timeout,
            }
        }
    }

    impl Deadline for InstantDeadline {
        fn expired(&mut self) -> bool {
            Instant::now() >= self.at
        }
    }
}
