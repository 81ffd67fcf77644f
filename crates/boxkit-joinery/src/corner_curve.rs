//! Corner-curve tiler
//!
//! A rounded panel corner is a quarter circle built from the same square
//! teeth as the straight edges. Every unit is an out-tooth, an arc step on
//! the outer circle, an in-tooth and an arc step on the inner circle, so the
//! teeth continue the phase of the finger edges on either side.

use crate::error::{JoineryError, JoineryResult};
use crate::finger_edge::FingerSign;
use crate::pitch::CornerArc;
use boxkit_core::Turtle;

/// Draws a 90 degree toothed corner.
///
/// The circles are measured to the middle of the material; inward panels
/// run one thickness further out so they wrap around their outward mates.
pub fn fingered_corner(
    turtle: &mut Turtle,
    corner: &CornerArc,
    thickness: f64,
    sign: FingerSign,
) -> JoineryResult<()> {
    if corner.fingers == 0 {
        return Err(JoineryError::InvalidParameters(
            "a rounded corner needs at least one finger".to_string(),
        ));
    }

    let finger_arc = 90.0 / corner.fingers as f64 / 2.0;
    let center_radius = corner.radius - thickness / 2.0;
    let s = sign.factor();
    let r = match sign {
        FingerSign::Inward => center_radius + thickness,
        FingerSign::Outward => center_radius,
    };

    for _ in 0..corner.fingers {
        turtle.corner(-90.0 * s, 0.0);
        turtle.edge(thickness);
        turtle.corner(90.0 * s, 0.0);
        turtle.corner(finger_arc, r + s * thickness);
        turtle.corner(90.0 * s, 0.0);
        turtle.edge(thickness);
        turtle.corner(-90.0 * s, 0.0);
        turtle.corner(finger_arc, r);
    }
    Ok(())
}
