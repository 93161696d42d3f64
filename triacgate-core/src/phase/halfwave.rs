//! Half-wave length bounds
//!
//! The shortest half-wave seen anchors the firing point so the pulse
//! always lands before the next crossing, even on a short half-cycle.
//! The longest one is where a 0% duty cycle parks both compare values.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shortest and longest half-wave seen, in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HalfWaveBounds {
    pub min: u32,
    pub max: u32,
}

impl HalfWaveBounds {
    /// Bounds from a single sample
    pub const fn from_sample(ticks: u32) -> Self {
        Self {
            min: ticks,
            max: ticks,
        }
    }

    /// Widen to include `ticks`
    pub fn include(&mut self, ticks: u32) {
        self.min = self.min.min(ticks);
        self.max = self.max.max(ticks);
    }
}

/// Running half-wave bounds, unmeasured until the first sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HalfWaveTracker {
    bounds: Option<HalfWaveBounds>,
}

impl HalfWaveTracker {
    /// Create an empty tracker
    pub const fn new() -> Self {
        Self { bounds: None }
    }

    /// Record one measured half-wave and return the updated bounds
    pub fn observe(&mut self, ticks: u32) -> HalfWaveBounds {
        let bounds = match self.bounds {
            Some(mut bounds) => {
                bounds.include(ticks);
                bounds
            }
            None => HalfWaveBounds::from_sample(ticks),
        };
        self.bounds = Some(bounds);
        bounds
    }

    /// Current bounds, `None` before the first sample
    pub fn bounds(&self) -> Option<HalfWaveBounds> {
        self.bounds
    }

    /// True once at least one sample was recorded
    pub fn is_measured(&self) -> bool {
        self.bounds.is_some()
    }
}
