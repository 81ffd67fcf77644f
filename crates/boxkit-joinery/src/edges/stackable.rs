//! Stackable bottom edge (`s`): feet at both ends so an identical box can
//! sit on top, plus the finger holes for the bottom panel above the feet.

use super::finger_joint::{finger_holes_at, FingerJointSettings};
use boxkit_core::Turtle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackableSettings {
    /// Inclination of the feet in degrees
    pub angle: f64,
    /// Height of the feet in multiples of thickness
    pub height: f64,
    /// Width of the feet in multiples of thickness
    pub width: f64,
    /// Distance from finger holes to the feet in multiples of thickness
    pub holedistance: f64,
}

impl Default for StackableSettings {
    fn default() -> Self {
        Self {
            angle: 60.0,
            height: 2.0,
            width: 4.0,
            holedistance: 1.0,
        }
    }
}

impl StackableSettings {
    /// Distance from the edge line to the inside of the wall.
    pub fn start_width(&self, t: f64) -> f64 {
        (self.height + self.holedistance) * t + t
    }
}

pub fn stackable(
    turtle: &mut Turtle,
    settings: &StackableSettings,
    fingers: &FingerJointSettings,
    length: f64,
) {
    let t = turtle.thickness();
    let height = settings.height * t;
    let width = settings.width * t;
    let angle = settings.angle;

    finger_holes_at(
        turtle,
        fingers,
        0.0,
        height + settings.holedistance * t + 0.5 * t,
        length,
        0.0,
    );

    let r = height / 2.0 / (1.0 - angle.to_radians().cos());
    let l = r * angle.to_radians().sin();

    turtle.edge(width);
    turtle.corner(angle, r);
    turtle.corner(-angle, r);
    turtle.edge(length - 2.0 * width - 4.0 * l);
    turtle.corner(-angle, r);
    turtle.corner(angle, r);
    turtle.edge(width);
}
