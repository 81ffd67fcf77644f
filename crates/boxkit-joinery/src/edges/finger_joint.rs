//! Settings-driven finger joints: the teeth (`f`), their counterpart (`F`)
//! and the rows of finger holes that accept teeth through a panel face.

use boxkit_core::Turtle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FingerJointSettings {
    /// Width of fingers in multiples of thickness
    pub finger: f64,
    /// Space between fingers in multiples of thickness
    pub space: f64,
    /// Space at start and end in multiples of normal spaces
    pub surrounding_spaces: f64,
    /// Extra space to allow fingers to move in/out (multiples of thickness)
    pub play: f64,
    /// Extra material for burn marks (multiples of thickness)
    pub extra_length: f64,
    /// Solid material beside finger holes (multiples of thickness)
    pub edge_width: f64,
    /// Width of finger holes (multiples of thickness)
    pub width: f64,
}

impl Default for FingerJointSettings {
    fn default() -> Self {
        Self {
            finger: 2.0,
            space: 2.0,
            surrounding_spaces: 2.0,
            play: 0.0,
            extra_length: 0.0,
            edge_width: 1.0,
            width: 1.0,
        }
    }
}

impl FingerJointSettings {
    /// Calculate number of fingers and leftover space for a given length
    pub fn calc_fingers(&self, length: f64, t: f64) -> (usize, f64) {
        let space = self.space * t;
        let finger = self.finger * t;

        let mut fingers =
            ((length - (self.surrounding_spaces - 1.0) * space) / (space + finger)).floor();

        // Shrink surrounding space up to half thickness each side if needed
        if fingers <= 0.0 && length > finger + t {
            fingers = 1.0;
        }
        if finger == 0.0 || fingers < 0.0 {
            fingers = 0.0;
        }
        let fingers = fingers as usize;

        let leftover = if fingers > 0 {
            length - fingers as f64 * (space + finger) + space
        } else {
            length
        };

        (fingers, leftover)
    }

    /// Finger count and widths after the small-finger fallback: when no
    /// regular finger fits but the edge is long enough, one finger of half
    /// the leftover is used.
    fn layout(&self, length: f64, t: f64) -> (usize, f64, f64, f64) {
        let mut finger = self.finger * t;
        let space = self.space * t;
        let play = self.play * t;
        let (mut fingers, mut leftover) = self.calc_fingers(length, t);

        if fingers == 0 && finger > 0.0 && leftover > 0.75 * t && leftover > 4.0 * play {
            fingers = 1;
            finger = leftover / 2.0;
            leftover = finger;
        }
        (fingers, finger, space, leftover)
    }

    /// Depth of a tooth.
    pub fn finger_length(&self, t: f64) -> f64 {
        t + self.extra_length * t
    }
}

/// Draws a finger joint along `length`. Positive edges carry the teeth.
pub fn finger_joint(
    turtle: &mut Turtle,
    settings: &FingerJointSettings,
    length: f64,
    positive: bool,
) {
    let t = turtle.thickness();
    let play = settings.play * t;
    let (fingers, mut finger, mut space, mut leftover) = settings.layout(length, t);

    // Adjust for play
    if !positive {
        finger += play;
        space -= play;
        leftover -= play;
    }

    let depth = settings.finger_length(t);
    // teeth stick out to the right of the heading, notches cut in to the left
    let turn = if positive { -90.0 } else { 90.0 };
    turtle.edge(leftover / 2.0);
    for i in 0..fingers {
        if i != 0 {
            turtle.edge(space);
        }
        turtle.corner(turn, 0.0);
        turtle.edge(depth);
        turtle.corner(-turn, 0.0);
        turtle.edge(finger);
        turtle.corner(-turn, 0.0);
        turtle.edge(depth);
        turtle.corner(turn, 0.0);
    }
    turtle.edge(leftover / 2.0);
}

/// Cuts the holes matching a finger joint of `length`, starting at
/// `(x, y)` and running in direction `angle` (degrees).
pub fn finger_holes_at(
    turtle: &mut Turtle,
    settings: &FingerJointSettings,
    x: f64,
    y: f64,
    length: f64,
    angle: f64,
) {
    let t = turtle.thickness();
    let play = settings.play * t;
    let (fingers, finger, space, leftover) = settings.layout(length, t);

    let mut ctx = turtle.saved();
    ctx.move_to(x, y, angle);
    for i in 0..fingers {
        let pos = leftover / 2.0 + i as f64 * (space + finger);
        ctx.rectangular_hole(pos + 0.5 * finger, 0.0, finger + play, settings.width * t + play);
    }
}
