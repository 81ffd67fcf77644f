//! Finger-joint tiler
//!
//! Traces a run of square teeth, one finger pair per `2 * thickness` of
//! length. Two panels drawn with opposite signs interlock.

use crate::error::{JoineryError, JoineryResult};
use boxkit_core::Turtle;
use serde::{Deserialize, Serialize};

/// Which way a panel's teeth point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FingerSign {
    /// Teeth protrude from the panel.
    #[default]
    Outward,
    /// Teeth are recessed; the mating pattern of `Outward`.
    Inward,
}

impl FingerSign {
    /// `1.0` for outward teeth, `-1.0` for inward ones.
    pub fn factor(self) -> f64 {
        match self {
            FingerSign::Outward => 1.0,
            FingerSign::Inward => -1.0,
        }
    }
}

/// Checks that a finger count is a whole non-negative number.
pub fn whole_fingers(num_fingers: f64) -> JoineryResult<u32> {
    if !num_fingers.is_finite() || num_fingers < 0.0 || num_fingers.fract() != 0.0 {
        return Err(JoineryError::FractionalFingerCount(num_fingers));
    }
    Ok(num_fingers as u32)
}

/// Draws `num_fingers` teeth along the current heading.
///
/// Each unit is a notch step (skipped for the first unit when
/// `skip_first_notch` is set) followed by the tooth itself. The cursor ends
/// `num_fingers * 2 * thickness` further along the heading it started with.
/// A fractional count is rejected before anything is drawn.
pub fn finger_edge(
    turtle: &mut Turtle,
    num_fingers: f64,
    thickness: f64,
    sign: FingerSign,
    skip_first_notch: bool,
) -> JoineryResult<()> {
    let count = whole_fingers(num_fingers)?;
    if !(thickness > 0.0) {
        return Err(JoineryError::InvalidParameters(format!(
            "thickness must be positive, got {thickness}"
        )));
    }

    let s = sign.factor();
    for idx in 0..count {
        if !(skip_first_notch && idx == 0) {
            turtle.corner(-90.0 * s, 0.0);
            turtle.edge(thickness);
            turtle.corner(90.0 * s, 0.0);
        }
        turtle.edge(thickness);
        turtle.corner(90.0 * s, 0.0);
        turtle.edge(thickness);
        turtle.corner(-90.0 * s, 0.0);
        turtle.edge(thickness);
    }
    Ok(())
}
