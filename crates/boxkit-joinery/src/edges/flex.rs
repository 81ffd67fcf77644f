//! Flex edge (`X`): a straight edge with a field of staggered slits to its
//! left, used for the lid-to-base hinge strip.

use boxkit_core::Turtle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlexSettings {
    /// Distance between slit rows in multiples of thickness
    pub distance: f64,
    /// Material left between slits in multiples of thickness
    pub connection: f64,
    /// Maximum slit section in multiples of thickness
    pub width: f64,
}

impl Default for FlexSettings {
    fn default() -> Self {
        Self {
            distance: 0.5,
            connection: 1.0,
            width: 5.0,
        }
    }
}

fn slit(turtle: &mut Turtle, pos: f64, from: f64, to: f64) {
    let mut ctx = turtle.saved();
    ctx.move_to(pos, from, 90.0);
    ctx.edge(to - from);
}

/// Draws a flex edge of `length` whose slit field reaches `height` to the
/// left of the heading.
pub fn flex_edge(turtle: &mut Turtle, settings: &FlexSettings, length: f64, height: f64) {
    let t = turtle.thickness();
    let dist = settings.distance * t;
    let connection = settings.connection * t;
    let width = settings.width * t;
    let h = height + 2.0 * turtle.burn();

    let lines = (length / dist).floor() as usize;
    let leftover = length - lines as f64 * dist;
    let sections = (((h - connection) / width).floor() as usize).max(1);
    let sheight = (h - connection) / sections as f64 - connection;

    turtle.stroke();
    for i in 1..lines {
        let pos = i as f64 * dist + leftover / 2.0;

        if i % 2 == 1 {
            slit(turtle, pos, 0.0, connection + sheight);
            for j in 0..(sections - 1) / 2 {
                let j = j as f64;
                slit(
                    turtle,
                    pos,
                    (2.0 * j + 1.0) * sheight + (2.0 * j + 2.0) * connection,
                    (2.0 * j + 3.0) * (sheight + connection),
                );
            }
            if sections % 2 == 0 {
                slit(turtle, pos, h - sheight - connection, h);
            }
        } else if sections % 2 == 1 {
            slit(turtle, pos, h, h - connection - sheight);
            for j in 0..(sections - 1) / 2 {
                let j = j as f64;
                slit(
                    turtle,
                    pos,
                    h - ((2.0 * j + 1.0) * sheight + (2.0 * j + 2.0) * connection),
                    h - (2.0 * j + 3.0) * (sheight + connection),
                );
            }
        } else {
            for j in 0..sections / 2 {
                let j = j as f64;
                slit(
                    turtle,
                    pos,
                    h - connection - 2.0 * j * (sheight + connection),
                    h - 2.0 * (j + 1.0) * (sheight + connection),
                );
            }
        }
    }

    turtle.edge(length);
}
