//! Flex-area tiler
//!
//! A living hinge across a strip of `width`: rows of slits perpendicular to
//! the bend, alternating between a forward comb and a reverse comb shifted by
//! half a slit, so the sheet stays in one piece but bends along the strip.

use crate::error::{JoineryError, JoineryResult};
use boxkit_core::Turtle;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Slit layout for one flex area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlexPlan {
    /// Slits per forward row, at least two.
    pub segments: u32,
    /// Length of one full slit.
    pub segment_length: f64,
    /// Web left between slits.
    pub gap: f64,
    /// Narrow strip: the reverse row is a single long slit.
    pub single: bool,
}

impl FlexPlan {
    pub fn new(width: f64, thickness: f64) -> JoineryResult<Self> {
        if !(width > 0.0) || !(thickness > 0.0) {
            return Err(JoineryError::InvalidParameters(format!(
                "flex area needs a positive width and thickness, got {width} and {thickness}"
            )));
        }

        let gap = 2.0 / 3.0 * thickness;
        let max_slit = 10.0 * thickness;
        let segments = ((width / (max_slit + gap)).ceil() as u32).max(2);
        let segment_length = (width - 2.0 * thickness) / segments as f64 - gap;

        if segment_length <= 0.0 {
            return Err(JoineryError::InvalidParameters(format!(
                "flex area of width {width} leaves no room for slits in {thickness}mm stock"
            )));
        }

        Ok(Self {
            segments,
            segment_length,
            gap,
            single: width < max_slit,
        })
    }

    fn forward_row(&self, turtle: &mut Turtle, thickness: f64) {
        turtle.move_to(thickness, 0.0, 0.0);
        turtle.edge(self.segment_length / 2.0);
        turtle.move_to(self.gap, 0.0, 0.0);
        for _ in 1..self.segments {
            turtle.edge(self.segment_length);
            turtle.move_to(self.gap, 0.0, 0.0);
        }
        turtle.edge(self.segment_length / 2.0);
        turtle.move_to(thickness, 0.0, 0.0);
    }

    // The phase branches are tuned against cut parts; keep them as they are.
    fn reverse_row(&self, turtle: &mut Turtle, thickness: f64, phase: u32) {
        let even = phase % 2 == 0;
        if even {
            turtle.move_to(thickness + self.gap, 0.0, 0.0);
        } else {
            turtle.move_to(self.gap, 0.0, 0.0);
            turtle.edge(thickness);
        }

        if self.single {
            turtle.edge(self.segment_length + self.gap);
        } else {
            for _ in 1..self.segments {
                turtle.edge(self.segment_length);
                turtle.move_to(self.gap, 0.0, 0.0);
            }
        }
        turtle.edge(self.segment_length - self.gap);

        if even {
            turtle.edge(thickness);
            turtle.move_to(self.gap, 0.0, 0.0);
        } else {
            turtle.move_to(thickness + self.gap, 0.0, 0.0);
        }
    }
}

/// Cuts `num_fingers * 2` hinge rows across a strip of `width`.
///
/// The strip runs to the left of the current heading. `idx_offset` shifts
/// the comb phase so neighbouring flex areas line up. The cursor ends
/// `num_fingers * 2 * thickness` further along its original heading.
pub fn fingered_flex_area(
    turtle: &mut Turtle,
    num_fingers: u32,
    width: f64,
    thickness: f64,
    idx_offset: u32,
) -> JoineryResult<FlexPlan> {
    let plan = FlexPlan::new(width, thickness)?;
    debug!(
        num_fingers,
        width,
        segments = plan.segments,
        segment_length = plan.segment_length,
        single = plan.single,
        "cutting flex area"
    );

    turtle.move_to(0.0, -thickness, 0.0);
    turtle.move_to(0.0, 0.0, 90.0);
    for idx in 0..num_fingers * 2 {
        plan.forward_row(turtle, thickness);
        turtle.move_to(0.0, -thickness / 2.0, 180.0);
        plan.reverse_row(turtle, thickness, idx + idx_offset);
        turtle.move_to(0.0, thickness / 2.0, 180.0);
    }
    turtle.move_to(thickness, 0.0, 0.0);
    turtle.corner(-90.0, 0.0);

    Ok(plan)
}
