//! Comparator threshold math
//!
//! The comparator's negative input is the VB reference divided in 64
//! steps: `V = VB * (div + 1) / 64`. This module turns millivolt
//! thresholds into divider settings.

use triacgate_hal::acmp::DIVIDER_STEPS;
use triacgate_hal::{ThresholdDividers, VbReference};

use crate::config::ZeroCrossMode;

/// Reference used for the threshold divider
pub const THRESHOLD_REFERENCE: VbReference = VbReference::V2_5;

/// Divider setting whose output is closest to (at or below) `mv`
///
/// Saturates at both ends of the 6-bit field.
pub fn divider_for_mv(mv: u32, reference: VbReference) -> u8 {
    let steps = mv.saturating_mul(DIVIDER_STEPS) / reference.millivolts();
    steps.saturating_sub(1).min(DIVIDER_STEPS - 1) as u8
}

/// Divider settings for a detection mode
///
/// - Rectified sine: one threshold, same divider in both output states.
/// - Offset sine: `avdd/2 + threshold` while the output is low and
///   `avdd/2 - threshold` while it is high.
pub fn threshold_dividers(mode: ZeroCrossMode, threshold_mv: u32, avdd_mv: u32) -> ThresholdDividers {
    match mode {
        ZeroCrossMode::RectifiedSine => {
            ThresholdDividers::symmetric(divider_for_mv(threshold_mv, THRESHOLD_REFERENCE))
        }
        ZeroCrossMode::OffsetSine => {
            let mid = avdd_mv / 2;
            ThresholdDividers {
                low: divider_for_mv(mid + threshold_mv, THRESHOLD_REFERENCE),
                high: divider_for_mv(mid.saturating_sub(threshold_mv), THRESHOLD_REFERENCE),
            }
        }
    }
}
