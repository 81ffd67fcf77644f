//! Plate composer
//!
//! Chains the tilers into whole panels for a box with rounded, flexing
//! corners: the flat frame and plate outlines, the front strip that wraps
//! around the front corners, and the back strip carrying the hinge.

use crate::corner_curve::fingered_corner;
use crate::edges::{EdgeKind, Edges};
use crate::error::{JoineryError, JoineryResult, ParameterError};
use crate::finger_edge::{finger_edge, FingerSign};
use crate::flex_area::{fingered_flex_area, FlexPlan};
use crate::pitch::CornerArc;
use boxkit_core::{Placement, Turtle};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Finger counts and dimensions shared by all flat panels of one box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelParameters {
    /// Finger pairs along each straight x side.
    pub x_fingers: u32,
    /// Finger pairs along each straight y side.
    pub y_fingers: u32,
    /// Finger pairs left out of the back edge of a plate for the hinge.
    pub hinge_fingers: u32,
    pub thickness: f64,
    /// Achieved corner radius and its finger count.
    pub corner: CornerArc,
    /// Rim left around the lip hole, in thicknesses.
    pub x_lip_fingers: u32,
    pub y_lip_fingers: u32,
}

/// Whether a panel is part of the outer frame or an inner plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelRole {
    /// Closed outline on every side.
    Frame,
    /// Back edge split around the hinge, with a lip hole cut inside.
    Plate,
}

impl PanelParameters {
    /// Checks the parameters for a panel of `role`. Hinge and lip only
    /// matter for plates.
    pub fn validate(&self, role: PanelRole) -> JoineryResult<()> {
        if !(self.thickness > 0.0) {
            return Err(ParameterError::InvalidDimensions(format!(
                "thickness must be positive, got {}",
                self.thickness
            ))
            .into());
        }
        if self.corner.fingers == 0 || !(self.corner.radius > 0.0) {
            return Err(ParameterError::InvalidValue {
                name: "corner".to_string(),
                reason: "a rounded corner needs at least one finger".to_string(),
            }
            .into());
        }
        if role == PanelRole::Frame {
            return Ok(());
        }
        if self.hinge_fingers > self.x_fingers {
            return Err(ParameterError::OutOfRange {
                name: "hinge_fingers".to_string(),
                value: self.hinge_fingers as f64,
                min: 0.0,
                max: self.x_fingers as f64,
            }
            .into());
        }
        if (self.x_fingers - self.hinge_fingers) % 2 != 0 {
            return Err(ParameterError::Incompatible(format!(
                "x fingers ({}) and hinge fingers ({}) must have the same parity",
                self.x_fingers, self.hinge_fingers
            ))
            .into());
        }
        let (hole_x, hole_y) = self.lip_hole();
        if !(hole_x > 0.0) || !(hole_y > 0.0) {
            return Err(ParameterError::InvalidDimensions(format!(
                "lip of {}x{} fingers leaves no hole",
                self.x_lip_fingers, self.y_lip_fingers
            ))
            .into());
        }
        Ok(())
    }

    /// Slot size of a frame or plate.
    pub fn bounding_box(&self) -> (f64, f64) {
        let t = self.thickness;
        let r = self.corner.radius;
        (
            2.0 * (self.x_fingers as f64 * t + r + t),
            2.0 * (self.y_fingers as f64 * t + r + t) + t,
        )
    }

    /// Size of the hole cut into plates.
    pub fn lip_hole(&self) -> (f64, f64) {
        let t = self.thickness;
        let r = self.corner.radius;
        (
            2.0 * (r + t * (self.x_fingers as f64 - self.x_lip_fingers as f64)),
            2.0 * (r + t * (self.y_fingers as f64 - self.y_lip_fingers as f64)),
        )
    }
}

/// Traces the closed outline of a frame or plate, starting at the beginning
/// of the first straight x side. The cursor ends where it started.
pub fn plate_outline(
    turtle: &mut Turtle,
    params: &PanelParameters,
    sign: FingerSign,
    role: PanelRole,
) -> JoineryResult<()> {
    let t = params.thickness;
    let x = params.x_fingers as f64;
    let y = params.y_fingers as f64;

    finger_edge(turtle, x, t, sign, false)?;
    fingered_corner(turtle, &params.corner, t, sign)?;
    finger_edge(turtle, y, t, sign, false)?;
    fingered_corner(turtle, &params.corner, t, sign)?;

    match role {
        PanelRole::Plate => {
            let hinge = params.hinge_fingers as f64;
            let side = (x - hinge) / 2.0;
            finger_edge(turtle, side, t, sign, false)?;
            match sign {
                FingerSign::Outward => {
                    turtle.edge(hinge * t * 2.0);
                    finger_edge(turtle, side, t, sign, false)?;
                }
                FingerSign::Inward => {
                    turtle.corner(90.0, 0.0);
                    turtle.edge(t);
                    turtle.corner(-90.0, 0.0);
                    turtle.edge(hinge * t * 2.0);
                    finger_edge(turtle, side, t, sign, true)?;
                }
            }
        }
        PanelRole::Frame => finger_edge(turtle, x, t, sign, false)?,
    }

    fingered_corner(turtle, &params.corner, t, sign)?;
    finger_edge(turtle, y, t, sign, false)?;
    fingered_corner(turtle, &params.corner, t, sign)?;
    Ok(())
}

/// Draws one flat panel into its slot. Plates also get the lip hole.
pub fn plate(
    turtle: &mut Turtle,
    params: &PanelParameters,
    sign: FingerSign,
    role: PanelRole,
    placement: &Placement,
) -> JoineryResult<()> {
    params.validate(role)?;
    let (bounding_x, bounding_y) = params.bounding_box();
    debug!(?sign, ?role, bounding_x, bounding_y, "drawing plate");

    turtle.part(bounding_x, bounding_y, placement, |turtle| {
        let t = params.thickness;
        let r = params.corner.radius;

        turtle.move_to(r, 0.0, 0.0);
        plate_outline(turtle, params, sign, role)?;

        if role == PanelRole::Plate {
            let (hole_x, hole_y) = params.lip_hole();
            let center_x = bounding_x / 2.0 - t - r;
            let mut center_y = bounding_y / 2.0 - t;
            if sign == FingerSign::Outward {
                center_y -= t;
            }
            turtle.rectangular_hole(center_x, center_y, hole_x, hole_y);
        }
        Ok(())
    })
}

/// Front strip: finger edges top and bottom, dovetails at both ends and two
/// flex areas bending around the front corners.
#[allow(clippy::too_many_arguments)]
pub fn front_plate(
    turtle: &mut Turtle,
    edges: &Edges,
    height: f64,
    x_base_fingers: u32,
    y_base_fingers: u32,
    corner_fingers: u32,
    thickness: f64,
    placement: &Placement,
) -> JoineryResult<()> {
    let t = thickness;
    let fingers = 2 * (y_base_fingers.div_ceil(2) + corner_fingers) + x_base_fingers;
    let bounding_x = fingers as f64 * 2.0 * t;
    let bounding_y = height + t;
    let phase = y_base_fingers % 2;

    if !(height > t) {
        return Err(JoineryError::InvalidParameters(format!(
            "front strip height {height} must exceed the thickness {t}"
        )));
    }
    FlexPlan::new(height + t, t)?;

    turtle.part(bounding_x, bounding_y, placement, |turtle| {
        finger_edge(turtle, fingers as f64, t, FingerSign::Outward, false)?;
        turtle.corner(90.0, 0.0);
        edges.draw(turtle, EdgeKind::Dovetail, height - t);
        turtle.corner(90.0, 0.0);
        finger_edge(turtle, fingers as f64, t, FingerSign::Outward, false)?;
        turtle.corner(90.0, 0.0);
        edges.draw(turtle, EdgeKind::Dovetail, height - t);
        turtle.corner(90.0, 0.0);

        turtle.move_to(y_base_fingers as f64 * t + 2.0 * t, 0.0, 0.0);
        fingered_flex_area(turtle, corner_fingers, height + t, t, phase)?;
        turtle.move_to(x_base_fingers as f64 * t * 2.0, 0.0, 0.0);
        fingered_flex_area(turtle, corner_fingers, height + t, t, phase)?;
        Ok(())
    })
}

/// Finger counts and heights of the back strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackPlateLayout {
    pub x_base_fingers: u32,
    pub y_base_fingers: u32,
    pub corner_fingers: u32,
    /// Finger pairs on either side of the hinge.
    pub pre_hinge_fingers: u32,
    pub hinge_fingers: u32,
    /// Length of the hinge strip across the lid gap.
    pub hinge_height: f64,
    pub base_height: f64,
    pub lid_height: f64,
    pub thickness: f64,
}

/// Back strip: the base row, its corner bends, the living hinge, the lid's
/// corner bends and the lid row, stacked bottom to top from the cursor.
///
/// Rows are positioned relative to each other only, so the whole strip
/// moves as one block with the starting cursor.
pub fn back_plates(
    turtle: &mut Turtle,
    edges: &Edges,
    layout: &BackPlateLayout,
) -> JoineryResult<()> {
    let t = layout.thickness;
    if !(layout.base_height > t) || !(layout.lid_height > t) {
        return Err(JoineryError::InvalidParameters(format!(
            "base ({}) and lid ({}) must both be taller than the thickness {t}",
            layout.base_height, layout.lid_height
        )));
    }
    FlexPlan::new(layout.base_height + t, t)?;
    FlexPlan::new(layout.lid_height + t, t)?;

    let hinge_length = layout.hinge_fingers as f64 * t * 2.0;
    let pre_hinge_length = layout.pre_hinge_fingers as f64 * t * 2.0;
    let pre = layout.pre_hinge_fingers as f64;
    let full = (layout.pre_hinge_fingers * 2 + layout.hinge_fingers) as f64;
    let phase = layout.y_base_fingers % 2;
    let y_offset = layout.y_base_fingers as f64 * t;
    let x_span = layout.x_base_fingers as f64 * t * 2.0;

    // bottom
    finger_edge(turtle, full, t, FingerSign::Outward, false)?;
    turtle.corner(90.0, 0.0);
    edges.draw(turtle, EdgeKind::DovetailCounterpart, layout.base_height - t);
    turtle.corner(90.0, 0.0);
    finger_edge(turtle, pre, t, FingerSign::Outward, false)?;
    turtle.move_to(hinge_length, 0.0, 0.0);
    finger_edge(turtle, pre, t, FingerSign::Outward, false)?;
    turtle.corner(90.0, 0.0);
    edges.draw(turtle, EdgeKind::DovetailCounterpart, layout.base_height - t);
    turtle.corner(90.0, 0.0);
    turtle.move_to(0.0, -t, 0.0);

    // bends
    {
        let mut ctx = turtle.saved();
        ctx.move_to(y_offset, t, 0.0);
        fingered_flex_area(&mut ctx, layout.corner_fingers, layout.base_height + t, t, phase)?;
        ctx.move_to(x_span, 0.0, 0.0);
        fingered_flex_area(&mut ctx, layout.corner_fingers, layout.base_height + t, t, phase)?;
    }

    // hinge
    {
        let mut ctx = turtle.saved();
        let burn = ctx.burn();
        ctx.move_to(pre_hinge_length + hinge_length, layout.base_height / 2.0, 90.0);
        edges.flex(&mut ctx, layout.hinge_height, hinge_length - burn * 2.0);
        ctx.move_to(0.0, hinge_length, 180.0);
        edges.draw(&mut ctx, EdgeKind::Plain, layout.hinge_height);
    }

    {
        let mut ctx = turtle.saved();
        ctx.move_to(y_offset, t + layout.base_height + t, 0.0);
        fingered_flex_area(&mut ctx, layout.corner_fingers, layout.lid_height + t, t, phase)?;
        ctx.move_to(x_span, 0.0, 0.0);
        fingered_flex_area(&mut ctx, layout.corner_fingers, layout.lid_height + t, t, phase)?;
    }

    // top
    turtle.move_to(0.0, layout.base_height + 2.0 * t, 0.0);
    finger_edge(turtle, pre, t, FingerSign::Outward, false)?;
    turtle.move_to(hinge_length, 0.0, 0.0);
    finger_edge(turtle, pre, t, FingerSign::Outward, false)?;
    turtle.corner(90.0, 0.0);
    edges.draw(turtle, EdgeKind::DovetailCounterpart, layout.lid_height - t);
    turtle.corner(90.0, 0.0);
    finger_edge(turtle, full, t, FingerSign::Outward, false)?;
    turtle.corner(90.0, 0.0);
    edges.draw(turtle, EdgeKind::DovetailCounterpart, layout.lid_height - t);
    turtle.corner(90.0, 0.0);
    turtle.move_to(0.0, -t, 0.0);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::finger_count_for_arc;

    fn params() -> PanelParameters {
        PanelParameters {
            x_fingers: 21,
            y_fingers: 13,
            hinge_fingers: 11,
            thickness: 3.0,
            corner: finger_count_for_arc(21.0, 3.0),
            x_lip_fingers: 4,
            y_lip_fingers: 3,
        }
    }

    #[test]
    fn test_validate_accepts_default_box() {
        assert!(params().validate(PanelRole::Plate).is_ok());
        assert!(params().validate(PanelRole::Frame).is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_hinge() {
        let mut p = params();
        p.hinge_fingers = 10;
        assert!(p.validate(PanelRole::Frame).is_ok());
        assert!(matches!(
            p.validate(PanelRole::Plate),
            Err(JoineryError::Parameter(ParameterError::Incompatible(_)))
        ));
        p.hinge_fingers = 23;
        assert!(matches!(
            p.validate(PanelRole::Plate),
            Err(JoineryError::Parameter(ParameterError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_validate_rejects_oversized_lip() {
        let mut p = params();
        p.x_lip_fingers = 40;
        assert!(p.validate(PanelRole::Plate).is_err());
        // frames never cut the lip hole
        assert!(p.validate(PanelRole::Frame).is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_corner_for_any_role() {
        let mut p = params();
        p.corner.fingers = 0;
        assert!(p.validate(PanelRole::Frame).is_err());
        assert!(p.validate(PanelRole::Plate).is_err());
    }

    #[test]
    fn test_bounding_box() {
        let p = params();
        let (bx, by) = p.bounding_box();
        assert!((bx - 2.0 * (63.0 + p.corner.radius + 3.0)).abs() < 1e-9);
        assert!((by - (2.0 * (39.0 + p.corner.radius + 3.0) + 3.0)).abs() < 1e-9);
    }
}
