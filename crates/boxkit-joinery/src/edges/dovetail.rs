//! Dovetail joint (`d`) and its counterpart (`D`).

use boxkit_core::Turtle;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DovetailSettings {
    /// Angle of the flanks in degrees (0 gives straight fingers)
    pub angle: f64,
    /// Base width of a tail in multiples of thickness
    pub size: f64,
    /// Depth of a tail in multiples of thickness
    pub depth: f64,
    /// Radius of the rounded corners in multiples of thickness
    pub radius: f64,
}

impl Default for DovetailSettings {
    fn default() -> Self {
        Self {
            angle: 50.0,
            size: 3.0,
            depth: 1.5,
            radius: 0.2,
        }
    }
}

/// Draws a dovetail edge of `length`; the counterpart uses `positive = false`.
pub fn dovetail(turtle: &mut Turtle, settings: &DovetailSettings, length: f64, positive: bool) {
    let t = turtle.thickness();
    let size = settings.size * t;
    let depth = settings.depth * t;
    let radius = (settings.radius * t).max(turtle.burn());

    let a = settings.angle + 90.0;
    let alpha = 0.5 * PI - PI * settings.angle / 180.0;
    let l1 = radius / (alpha / 2.0).tan();
    let diffx = 0.5 * depth / alpha.tan();
    let l2 = 0.5 * depth / alpha.sin();

    let sections = (length / (size * 2.0)).floor() as usize;
    let leftover = length - sections as f64 * size * 2.0;

    if sections == 0 {
        turtle.edge(length);
        return;
    }

    let p = if positive { 1.0 } else { -1.0 };
    let ends = (size + leftover) / 2.0 + diffx - l1;

    turtle.edge(ends);
    for i in 0..sections {
        turtle.corner(-p * a, radius);
        turtle.edge(2.0 * (l2 - l1));
        turtle.corner(p * a, radius);
        turtle.edge(2.0 * (diffx - l1) + size);
        turtle.corner(p * a, radius);
        turtle.edge(2.0 * (l2 - l1));
        turtle.corner(-p * a, radius);
        if i + 1 < sections {
            turtle.edge(2.0 * (diffx - l1) + size);
        }
    }
    turtle.edge(ends);
}
