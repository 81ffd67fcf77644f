//! Edge toolbox
//!
//! Panels built with [`crate::wall::rectangular_wall`] describe each side by a
//! single character. The toolbox knows how to draw each kind and how much
//! room it needs next to the panel.
//!
//! | char | edge |
//! |------|------|
//! | `e`  | plain |
//! | `f`  | finger joint, teeth out |
//! | `F`  | finger joint counterpart |
//! | `h`  | finger holes beside a plain edge |
//! | `s`  | stackable feet with finger holes |
//! | `d`  | dovetail |
//! | `D`  | dovetail counterpart |
//!
//! The flex edge takes a second dimension and is drawn with [`Edges::flex`].

pub mod dovetail;
pub mod finger_joint;
pub mod flex;
pub mod stackable;

pub use dovetail::DovetailSettings;
pub use finger_joint::FingerJointSettings;
pub use flex::FlexSettings;
pub use stackable::StackableSettings;

use crate::error::{JoineryError, JoineryResult};
use boxkit_core::Turtle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeKind {
    Plain,
    FingerJoint,
    FingerJointCounterpart,
    FingerHoles,
    Stackable,
    Dovetail,
    DovetailCounterpart,
}

impl TryFrom<char> for EdgeKind {
    type Error = JoineryError;

    fn try_from(c: char) -> JoineryResult<Self> {
        match c {
            'e' => Ok(EdgeKind::Plain),
            'f' => Ok(EdgeKind::FingerJoint),
            'F' => Ok(EdgeKind::FingerJointCounterpart),
            'h' => Ok(EdgeKind::FingerHoles),
            's' => Ok(EdgeKind::Stackable),
            'd' => Ok(EdgeKind::Dovetail),
            'D' => Ok(EdgeKind::DovetailCounterpart),
            other => Err(JoineryError::UnknownEdge(other)),
        }
    }
}

impl EdgeKind {
    pub fn as_char(self) -> char {
        match self {
            EdgeKind::Plain => 'e',
            EdgeKind::FingerJoint => 'f',
            EdgeKind::FingerJointCounterpart => 'F',
            EdgeKind::FingerHoles => 'h',
            EdgeKind::Stackable => 's',
            EdgeKind::Dovetail => 'd',
            EdgeKind::DovetailCounterpart => 'D',
        }
    }

    /// Parses a descriptor such as `"sFFF"`.
    pub fn parse_all(descriptor: &str) -> JoineryResult<Vec<EdgeKind>> {
        descriptor.chars().map(EdgeKind::try_from).collect()
    }
}

/// Per-edge settings, all lengths in multiples of thickness.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeSettings {
    pub finger_joint: FingerJointSettings,
    pub dovetail: DovetailSettings,
    pub flex: FlexSettings,
    pub stackable: StackableSettings,
}

/// Draws edges for a given material thickness.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edges {
    pub settings: EdgeSettings,
}

impl Edges {
    pub fn new(settings: EdgeSettings) -> Self {
        Self { settings }
    }

    pub fn draw(&self, turtle: &mut Turtle, kind: EdgeKind, length: f64) {
        match kind {
            EdgeKind::Plain => turtle.edge(length),
            EdgeKind::FingerJoint => {
                finger_joint::finger_joint(turtle, &self.settings.finger_joint, length, true)
            }
            EdgeKind::FingerJointCounterpart => {
                finger_joint::finger_joint(turtle, &self.settings.finger_joint, length, false)
            }
            EdgeKind::FingerHoles => {
                let t = turtle.thickness();
                let offset =
                    turtle.burn() + self.settings.finger_joint.edge_width * t + t / 2.0;
                finger_joint::finger_holes_at(
                    turtle,
                    &self.settings.finger_joint,
                    0.0,
                    offset,
                    length,
                    0.0,
                );
                turtle.edge(length);
            }
            EdgeKind::Stackable => stackable::stackable(
                turtle,
                &self.settings.stackable,
                &self.settings.finger_joint,
                length,
            ),
            EdgeKind::Dovetail => dovetail::dovetail(turtle, &self.settings.dovetail, length, true),
            EdgeKind::DovetailCounterpart => {
                dovetail::dovetail(turtle, &self.settings.dovetail, length, false)
            }
        }
    }

    /// Flex edge of `length` with a slit field `height` wide.
    pub fn flex(&self, turtle: &mut Turtle, length: f64, height: f64) {
        flex::flex_edge(turtle, &self.settings.flex, length, height);
    }

    /// How far the panel body starts inside the edge line.
    pub fn start_width(&self, kind: EdgeKind, t: f64) -> f64 {
        let fingers = &self.settings.finger_joint;
        match kind {
            EdgeKind::FingerJointCounterpart => fingers.finger_length(t),
            EdgeKind::FingerHoles => fingers.edge_width * t + t,
            EdgeKind::Stackable => self.settings.stackable.start_width(t),
            _ => 0.0,
        }
    }

    pub fn end_width(&self, kind: EdgeKind, t: f64) -> f64 {
        self.start_width(kind, t)
    }

    /// How far the edge reaches outside the edge line.
    pub fn margin(&self, kind: EdgeKind, t: f64) -> f64 {
        match kind {
            EdgeKind::FingerJoint => self.settings.finger_joint.finger_length(t),
            EdgeKind::Dovetail => self.settings.dovetail.depth * t,
            _ => 0.0,
        }
    }

    pub fn spacing(&self, kind: EdgeKind, t: f64) -> f64 {
        self.start_width(kind, t) + self.margin(kind, t)
    }

    /// Turns from `from` onto `to`, stepping past both edges' widths.
    pub fn edge_corner(&self, turtle: &mut Turtle, from: EdgeKind, to: EdgeKind, angle: f64) {
        let t = turtle.thickness();
        let factor = (angle / 2.0).to_radians().tan();
        turtle.edge(self.start_width(to, t) * factor);
        turtle.corner(angle, 0.0);
        turtle.edge(self.end_width(from, t) * factor);
    }
}
