//! Coin bank safe
//!
//! A piggy bank that looks like a safe: a finger-jointed body with a coin
//! slot in the lid, a door held by a locking bar and three combination dials,
//! and the loose parts for the dials, lock pins and the handle.
//!
//! Keep every disc cut from the door; they are used as spacers and hinges.

pub mod types;

pub use types::{CoinBankParameters, DialVariant};

use crate::error::{GeneratorError, GeneratorResult};
use boxkit_core::{CanvasSettings, Direction, Drawing, PathKind, Placement, Step, Turtle};
use boxkit_joinery::{rectangular_wall, EdgeKind, EdgeSettings, Edges};
use tracing::{debug, info};

const NUM_DIALS: u32 = 3;
const LOCK_SPACING: f64 = 1.0;
const D_RELATIVE_WIDTH: f64 = 0.8;
const KNOB_LOBES: u32 = 20;
const KNOB_ANGLE: f64 = 45.0;

/// Cuts a square hole of one thickness at `(x, y)` and a dial shape around
/// it.
pub fn circle_square_hole(
    turtle: &mut Turtle,
    x: f64,
    y: f64,
    radius: f64,
    variant: DialVariant,
) {
    let t = turtle.thickness();
    let mut ctx = turtle.saved();
    ctx.rectangular_hole(x, y, t, t);
    match variant {
        DialVariant::Round => ctx.circle(x, y, radius),
        DialVariant::D => d_shape(&mut ctx, x, y, radius),
        DialVariant::Wavy => wavy_knob(&mut ctx, x, y, radius),
    }
}

fn d_shape(turtle: &mut Turtle, x: f64, y: f64, radius: f64) {
    let w = 2.0 * radius * D_RELATIVE_WIDTH - radius;
    let a = (w / radius).acos().to_degrees();

    let mut ctx = turtle.saved();
    ctx.set_path_kind(PathKind::Hole);
    ctx.move_to(x, y, -a);
    ctx.move_to(radius, 0.0, -90.0);
    ctx.corner(-360.0 + 2.0 * a, radius);
    ctx.corner(-a, 0.0);
    ctx.edge(2.0 * radius * a.to_radians().sin());
}

/// Scalloped rim: every lobe is an outward arc over one chord of a regular
/// polygon inscribed in `radius`.
fn wavy_knob(turtle: &mut Turtle, x: f64, y: f64, radius: f64) {
    let step = 360.0 / KNOB_LOBES as f64;
    let chord = 2.0 * radius * (step / 2.0).to_radians().sin();
    let lobe_radius = chord / (2.0 * KNOB_ANGLE.to_radians().sin());

    let mut ctx = turtle.saved();
    ctx.set_path_kind(PathKind::Hole);
    ctx.move_to(x, y, 0.0);
    ctx.move_to(radius, 0.0, 90.0 + step / 2.0 - KNOB_ANGLE);
    for _ in 0..KNOB_LOBES {
        ctx.corner(2.0 * KNOB_ANGLE, lobe_radius);
        ctx.corner(step - 2.0 * KNOB_ANGLE, 0.0);
    }
}

pub struct CoinBankSafeMaker {
    params: CoinBankParameters,
    dial_spacing: f64,
}

impl CoinBankSafeMaker {
    pub fn new(params: CoinBankParameters) -> GeneratorResult<Self> {
        Self::validate_parameters(&params)?;

        let t = params.thickness;
        let big_radius = Self::big_radius(t);
        let space_under_dials = 2.0 * NUM_DIALS as f64 * big_radius;
        let dial_spacing = (params.h - space_under_dials) / (NUM_DIALS + 1) as f64;
        if dial_spacing < 1.0 {
            let min_height = space_under_dials + 4.0;
            return Err(GeneratorError::Configuration(format!(
                "With thickness {t}, h must be at least {min_height} to fit the dials."
            )));
        }

        Ok(Self {
            params,
            dial_spacing,
        })
    }

    fn validate_parameters(params: &CoinBankParameters) -> GeneratorResult<()> {
        CanvasSettings::new(params.thickness, params.burn).validate()?;
        let t = params.thickness;

        for (name, value) in [("x", params.x), ("y", params.y), ("h", params.h)] {
            if !value.is_finite() || value <= 4.0 * t {
                return Err(GeneratorError::InvalidParameters(format!(
                    "{name} must exceed four thicknesses ({}), got {value}",
                    4.0 * t
                )));
            }
        }
        if !(params.slot_length > 0.0) || !(params.slot_width > 0.0) {
            return Err(GeneratorError::InvalidParameters(format!(
                "coin slot must be positive, got {} x {}",
                params.slot_length, params.slot_width
            )));
        }
        if params.slot_length >= params.y - 2.0 * t || params.slot_width >= params.x - 2.0 * t {
            return Err(GeneratorError::Configuration(format!(
                "a {} x {} coin slot does not fit the lid",
                params.slot_length, params.slot_width
            )));
        }
        if !(params.handle_length > 2.4) {
            return Err(GeneratorError::InvalidParameters(format!(
                "handle length must exceed 2.4 thicknesses, got {}",
                params.handle_length
            )));
        }
        Ok(())
    }

    fn big_radius(t: f64) -> f64 {
        2.25 * t
    }

    fn small_radius(t: f64) -> f64 {
        1.4 * t
    }

    pub fn params(&self) -> &CoinBankParameters {
        &self.params
    }

    /// Gap between neighbouring dials on the door.
    pub fn dial_spacing(&self) -> f64 {
        self.dial_spacing
    }

    pub fn generate(&self) -> GeneratorResult<Drawing> {
        let p = &self.params;
        let t = p.thickness;
        let mut turtle = Turtle::new(CanvasSettings::new(t, p.burn))?;
        let edges = Edges::new(EdgeSettings {
            finger_joint: p.finger_joint,
            ..EdgeSettings::default()
        });

        info!(
            x = p.x,
            y = p.y,
            h = p.h,
            dial_spacing = self.dial_spacing,
            "generating coin bank safe"
        );

        {
            let mut ctx = turtle.saved();
            self.draw_walls_and_door(&mut ctx, &edges)?;
        }
        let up_only = Placement::toward(Direction::Up).only();
        rectangular_wall(&mut turtle, &edges, p.x, p.h, "seff", &[], &up_only)?;
        turtle.move_to(0.0, t / 2.0, 0.0);

        let right_only = Placement::toward(Direction::Right).only();
        debug!("drawing lid");
        {
            let mut ctx = turtle.saved();
            Self::draw_cover(&mut ctx, &edges, p.y, p.x);
            circle_square_hole(&mut ctx, p.y - 1.75 * t, 1.75 * t, t, DialVariant::Round);
            ctx.rectangular_hole(p.y / 2.0, p.x / 2.0, p.slot_length, p.slot_width);
        }
        rectangular_wall(&mut turtle, &edges, p.y, p.x, "efff", &[], &right_only)?;

        debug!("drawing bottom");
        {
            let mut ctx = turtle.saved();
            Self::draw_cover(&mut ctx, &edges, p.y, p.x);
            circle_square_hole(&mut ctx, 1.75 * t, 1.75 * t, t, DialVariant::Round);
        }
        rectangular_wall(&mut turtle, &edges, p.y, p.x, "efff", &[], &right_only)?;

        debug!("drawing locks");
        {
            let mut ctx = turtle.saved();
            Self::draw_locks(&mut ctx);
        }
        turtle.move_to(0.0, 2.0 * Self::big_radius(t) + LOCK_SPACING, 0.0);

        debug!("drawing lock pins and handle");
        {
            let mut ctx = turtle.saved();
            let up = Placement::toward(Direction::Up);
            for _ in 0..3 {
                rectangular_wall(&mut ctx, &edges, 5.0 * t, t, "eeee", &[], &up)?;
            }
        }
        rectangular_wall(&mut turtle, &edges, 5.0 * t, t, "eeee", &[], &right_only)?;
        self.draw_handle(&mut turtle);

        Ok(turtle.into_drawing())
    }

    fn draw_walls_and_door(&self, turtle: &mut Turtle, edges: &Edges) -> GeneratorResult<()> {
        let p = &self.params;
        let t = p.thickness;
        let big_radius = Self::big_radius(t);
        let right = Placement::toward(Direction::Right);
        let mirror_right = Placement::toward(Direction::Right).mirrored();

        debug!("drawing side walls");
        rectangular_wall(turtle, edges, p.x, p.h, "seFf", &[], &mirror_right)?;
        rectangular_wall(turtle, edges, p.y, p.h, "sFFF", &[], &right)?;
        rectangular_wall(
            turtle,
            edges,
            p.x - 2.0 * t,
            p.h,
            "sfFh",
            &[3, 4, 7, 8],
            &mirror_right,
        )?;

        // locking bar
        {
            let mut ctx = turtle.saved();
            ctx.move_to(0.0, 4.0 * t, 0.0);
            rectangular_wall(&mut ctx, edges, 1.5 * t, p.h, "eeef", &[], &right)?;
        }
        rectangular_wall(turtle, edges, 1.5 * t, p.h, "eeef", &[], &right.clone().only())?;

        debug!("drawing door");
        turtle.move_to(1.0, 1.0 + 4.0 * t, 0.0);
        let side = p.y - 2.25 * t;
        turtle.polyline(&[
            Step::Edge(side),
            Step::Corner(-90.0),
            Step::Edge(t),
            Step::Corner(90.0),
            Step::Edge(t),
            Step::Corner(90.0),
            Step::Edge(t),
            Step::Corner(-90.0),
            Step::Edge(1.25 * t),
            Step::Corner(90.0),
            Step::Edge(p.h),
            Step::Corner(90.0),
            Step::Edge(1.25 * t),
            Step::Corner(-90.0),
            Step::Edge(t),
            Step::Corner(90.0),
            Step::Edge(t),
            Step::Corner(90.0),
            Step::Edge(t),
            Step::Corner(-90.0),
            Step::Edge(side),
            Step::Corner(90.0),
            Step::Edge(p.h),
            Step::Corner(90.0),
        ]);

        let pitch = 2.0 * big_radius + self.dial_spacing;
        for offset in [0.0, -pitch, pitch] {
            circle_square_hole(
                turtle,
                3.0 * t,
                p.h / 2.0 + offset,
                1.25 * t,
                DialVariant::Round,
            );
        }
        turtle.rectangular_hole(p.y / 2.0, p.h / 2.0, t, p.handle_length * t - 2.4 * t);
        Ok(())
    }

    /// Lid and bottom outline: one plain side where the door closes.
    fn draw_cover(turtle: &mut Turtle, edges: &Edges, width: f64, depth: f64) {
        edges.draw(turtle, EdgeKind::Plain, width);
        turtle.corner(90.0, 0.0);
        edges.draw(turtle, EdgeKind::FingerJoint, depth);
        turtle.corner(90.0, 0.0);
        edges.draw(turtle, EdgeKind::FingerJoint, width);
        turtle.corner(90.0, 0.0);
        edges.draw(turtle, EdgeKind::FingerJoint, depth);
        turtle.corner(90.0, 0.0);
    }

    fn draw_locks(turtle: &mut Turtle) {
        let t = turtle.thickness();
        let big = Self::big_radius(t);
        let small = Self::small_radius(t);

        let rows = [
            (big, DialVariant::Round, 2.0 * big),
            (big, DialVariant::D, 2.0 * D_RELATIVE_WIDTH * big),
            (small, DialVariant::Round, 2.0 * small),
            (small, DialVariant::Wavy, 2.0 * small),
        ];
        for (radius, variant, width) in rows {
            for _ in 0..3 {
                circle_square_hole(turtle, radius, radius, radius, variant);
                turtle.move_to(width + LOCK_SPACING, 0.0, 0.0);
            }
        }
    }

    fn draw_handle(&self, turtle: &mut Turtle) {
        let t = self.params.thickness;
        let length = self.params.handle_length * t;
        turtle.move_to(0.4 * t, 0.0, 0.0);
        turtle.polyline(&[
            Step::Edge(length - 0.4 * t),
            Step::Arc(90.0, 0.2 * t),
            Step::Edge(1.3 * t),
            Step::Corner(90.0),
            Step::Edge(1.2 * t),
            Step::Corner(-90.0),
            Step::Edge(t),
            Step::Corner(90.0),
            Step::Edge(length - 2.4 * t),
            Step::Corner(90.0),
            Step::Edge(t),
            Step::Corner(-90.0),
            Step::Edge(1.2 * t),
            Step::Corner(90.0),
            Step::Edge(1.3 * t),
            Step::Arc(90.0, 0.2 * t),
        ]);
        turtle.stroke();
    }
}
