//! Flex box
//!
//! A small jewelry box whose four corners are bent living hinges and whose
//! lid folds back on a flex strip. The sheet holds, bottom to top:
//!
//! - outward frame and plate, plus a spare frame slot
//! - inward frame and plate, plus a spare frame slot
//! - the front strips of the base and the lid
//! - the back strip with base, hinge and lid rows

pub mod types;

pub use types::{FlexBoxLayout, FlexBoxParameters};

use crate::error::{GeneratorError, GeneratorResult};
use boxkit_core::{CanvasSettings, Direction, Drawing, Placement, Turtle};
use boxkit_joinery::{
    back_plates, finger_count_for_arc, finger_count_for_length, front_plate, plate,
    BackPlateLayout, EdgeSettings, Edges, FingerSign, FlexPlan, PanelParameters, PanelRole,
};
use tracing::{debug, info};

pub struct FlexBoxMaker {
    params: FlexBoxParameters,
    layout: FlexBoxLayout,
    panel: PanelParameters,
}

impl FlexBoxMaker {
    pub fn new(params: FlexBoxParameters) -> GeneratorResult<Self> {
        Self::validate_parameters(&params)?;
        let layout = Self::derive_layout(&params)?;

        let panel = PanelParameters {
            x_fingers: layout.x_base_fingers,
            y_fingers: layout.y_base_fingers,
            hinge_fingers: layout.hinge_fingers,
            thickness: params.thickness,
            corner: layout.corner,
            x_lip_fingers: params.lip_width_x,
            y_lip_fingers: params.lip_width_y,
        };
        panel.validate(PanelRole::Plate)?;

        // Both corner strips must leave room for slits.
        FlexPlan::new(layout.lid_height + params.thickness, params.thickness)?;

        Ok(Self {
            params,
            layout,
            panel,
        })
    }

    fn validate_parameters(params: &FlexBoxParameters) -> GeneratorResult<()> {
        for (name, value) in [("x", params.x), ("y", params.y), ("h", params.h)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GeneratorError::InvalidParameters(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        CanvasSettings::new(params.thickness, params.burn).validate()?;
        if params.radius_factor == 0 {
            return Err(GeneratorError::InvalidParameters(
                "radius factor must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn derive_layout(params: &FlexBoxParameters) -> GeneratorResult<FlexBoxLayout> {
        let t = params.thickness;
        let corner = finger_count_for_arc(t * params.radius_factor as f64, t);
        if corner.fingers == 0 {
            return Err(GeneratorError::Configuration(format!(
                "radius factor {} is too small for a fingered corner",
                params.radius_factor
            )));
        }

        let base_fingers = |side: f64, name: &str| -> GeneratorResult<u32> {
            let fingers = finger_count_for_length(side - 2.0 * corner.radius, t);
            if fingers == 0 {
                return Err(GeneratorError::Configuration(format!(
                    "{name} = {side} leaves no straight side next to corners of radius {:.2}",
                    corner.radius
                )));
            }
            Ok(fingers)
        };
        let x_base_fingers = base_fingers(params.x, "x")?;
        let y_base_fingers = base_fingers(params.y, "y")?;

        let mut hinge_fingers = x_base_fingers / 2;
        if (hinge_fingers + x_base_fingers) % 2 == 1 {
            hinge_fingers += 1;
        }
        let pre_hinge_fingers =
            y_base_fingers / 2 + corner.fingers + (x_base_fingers - hinge_fingers) / 2;

        let base_height = 0.7 * params.h;
        let lid_height = 0.3 * params.h;
        if lid_height <= t {
            return Err(GeneratorError::Configuration(format!(
                "h = {} leaves a lid lower than the thickness {t}",
                params.h
            )));
        }

        Ok(FlexBoxLayout {
            corner,
            x_base_fingers,
            y_base_fingers,
            hinge_fingers,
            pre_hinge_fingers,
            hinge_height: params.h / 2.0 + 2.0 * t,
            base_height,
            lid_height,
        })
    }

    pub fn params(&self) -> &FlexBoxParameters {
        &self.params
    }

    pub fn layout(&self) -> &FlexBoxLayout {
        &self.layout
    }

    /// Outer size the box actually gets after snapping to whole fingers.
    pub fn achieved_size(&self) -> (f64, f64) {
        let t = self.params.thickness;
        let r = self.layout.corner.radius;
        (
            2.0 * (self.layout.x_base_fingers as f64 * t + r),
            2.0 * (self.layout.y_base_fingers as f64 * t + r),
        )
    }

    pub fn generate(&self) -> GeneratorResult<Drawing> {
        let t = self.params.thickness;
        let layout = &self.layout;
        let mut turtle = Turtle::new(CanvasSettings::new(t, self.params.burn))?;
        let edges = Edges::new(EdgeSettings {
            dovetail: self.params.dovetail,
            flex: self.params.flex,
            ..EdgeSettings::default()
        });

        let (achieved_x, achieved_y) = self.achieved_size();
        info!(
            target_x = self.params.x,
            target_y = self.params.y,
            achieved_x,
            achieved_y,
            corner_fingers = layout.corner.fingers,
            radius = layout.corner.radius,
            "generating flex box"
        );

        let right = Placement::toward(Direction::Right);
        let up = Placement::toward(Direction::Up);
        let up_only = Placement::toward(Direction::Up).only();

        turtle.move_to(0.0, 10.0, 0.0);

        for sign in [FingerSign::Outward, FingerSign::Inward] {
            debug!(?sign, "drawing frame and plate");
            {
                let mut ctx = turtle.saved();
                plate(&mut ctx, &self.panel, sign, PanelRole::Frame, &right)?;
                plate(&mut ctx, &self.panel, sign, PanelRole::Plate, &Placement::none())?;
            }
            plate(&mut turtle, &self.panel, sign, PanelRole::Frame, &up_only)?;
        }

        for height in [layout.base_height, layout.lid_height] {
            debug!(height, "drawing front strip");
            front_plate(
                &mut turtle,
                &edges,
                height,
                layout.x_base_fingers,
                layout.y_base_fingers,
                layout.corner.fingers,
                t,
                &up,
            )?;
        }

        debug!(
            pre_hinge = layout.pre_hinge_fingers,
            hinge = layout.hinge_fingers,
            "drawing back strip"
        );
        back_plates(
            &mut turtle,
            &edges,
            &BackPlateLayout {
                x_base_fingers: layout.x_base_fingers,
                y_base_fingers: layout.y_base_fingers,
                corner_fingers: layout.corner.fingers,
                pre_hinge_fingers: layout.pre_hinge_fingers,
                hinge_fingers: layout.hinge_fingers,
                hinge_height: layout.hinge_height,
                base_height: layout.base_height,
                lid_height: layout.lid_height,
                thickness: t,
            },
        )?;

        Ok(turtle.into_drawing())
    }
}
