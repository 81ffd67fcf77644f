//! Whole-finger rounding
//!
//! Fingers come in whole numbers, so every requested length or radius is
//! rounded to the nearest finger count and the real dimension is derived back
//! from that count. Ties round to even.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A quarter-circle corner made of whole fingers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerArc {
    /// Finger pairs along the quarter circle.
    pub fingers: u32,
    /// Radius actually produced by `fingers`.
    pub radius: f64,
}

/// Rounds a requested corner radius to a whole number of fingers.
///
/// A finger pitch is `2 * thickness`, so the count is the quarter
/// circumference over the pitch, rounded. The returned radius is recomputed
/// from the count and is what downstream geometry must use.
pub fn finger_count_for_arc(target_radius: f64, thickness: f64) -> CornerArc {
    let quarter = PI * target_radius / 2.0;
    let fingers = rounded_count(quarter / (2.0 * thickness));
    CornerArc {
        fingers,
        radius: radius_for_fingers(fingers, thickness),
    }
}

/// Radius of a quarter circle holding `fingers` finger pairs.
pub fn radius_for_fingers(fingers: u32, thickness: f64) -> f64 {
    fingers as f64 * thickness * 2.0 * 2.0 / PI
}

/// Number of finger pairs that best fill a straight `length`.
pub fn finger_count_for_length(length: f64, thickness: f64) -> u32 {
    rounded_count(length / thickness / 2.0)
}

fn rounded_count(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.round_ties_even() as u32
}
