//! Turtle canvas
//!
//! The turtle keeps a cursor (position and heading) and appends straight and
//! circular cuts to an open pen path as it moves. Lifting the pen with
//! `move_to` finishes the open path; a saved context sets it aside until the
//! context is restored.
//!
//! Kerf compensation happens here: `corner` widens outside bends and tightens
//! inside bends by the burn value, so the tilers above can work with nominal
//! dimensions.

use crate::error::{Error, Result};
use crate::path::{CutPath, Drawing, PathKind, Point, Segment};
use crate::placement::{Direction, Placement};
use nalgebra::{Rotation2, Vector2};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use std::ops::{Deref, DerefMut};
use tracing::trace;

const EPSILON: f64 = 1e-12;

/// Material-wide settings every drawing primitive depends on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Material thickness in mm
    pub thickness: f64,
    /// Half the kerf width in mm
    pub burn: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            thickness: 3.0,
            burn: 0.1,
        }
    }
}

impl CanvasSettings {
    pub fn new(thickness: f64, burn: f64) -> Self {
        Self { thickness, burn }
    }

    /// Gap left around every placed part.
    pub fn spacing(&self) -> f64 {
        2.0 * self.burn + 0.5 * self.thickness
    }

    pub fn validate(&self) -> Result<()> {
        if !self.thickness.is_finite() || self.thickness <= 0.0 {
            return Err(Error::InvalidSetting {
                name: "thickness".to_string(),
                reason: format!("must be positive, got {}", self.thickness),
            });
        }
        if !self.burn.is_finite() || self.burn < 0.0 {
            return Err(Error::InvalidSetting {
                name: "burn".to_string(),
                reason: format!("must not be negative, got {}", self.burn),
            });
        }
        Ok(())
    }
}

/// Cursor position and heading. Heading is in degrees, counter-clockwise
/// from the x axis, kept in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TurtleState {
    pub position: Point,
    pub heading: f64,
}

impl TurtleState {
    fn rotation(&self) -> Rotation2<f64> {
        Rotation2::new(self.heading.to_radians())
    }

    /// Converts a point given in the cursor's frame to sheet coordinates.
    pub fn to_global(&self, dx: f64, dy: f64) -> Point {
        let v = self.rotation() * Vector2::new(dx, dy);
        Point::new(self.position.x + v.x, self.position.y + v.y)
    }

    /// Converts a sheet point into the cursor's frame.
    pub fn to_local(&self, p: Point) -> Point {
        let v = self.rotation().inverse()
            * Vector2::new(p.x - self.position.x, p.y - self.position.y);
        Point::new(v.x, v.y)
    }
}

fn normalize_heading(degrees: f64) -> f64 {
    let h = degrees.rem_euclid(360.0);
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// One step of a polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Straight edge of the given length.
    Edge(f64),
    /// Point turn in degrees.
    Corner(f64),
    /// Turn in degrees along an arc of the given radius.
    Arc(f64, f64),
}

#[derive(Debug, Clone)]
pub struct Turtle {
    settings: CanvasSettings,
    state: TurtleState,
    kind: PathKind,
    pen: Option<CutPath>,
    paths: Vec<CutPath>,
    parts: Vec<Vec<usize>>,
    part_stack: Vec<usize>,
}

impl Turtle {
    pub fn new(settings: CanvasSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            state: TurtleState::default(),
            kind: PathKind::Outline,
            pen: None,
            paths: Vec::new(),
            parts: Vec::new(),
            part_stack: Vec::new(),
        })
    }

    pub fn settings(&self) -> &CanvasSettings {
        &self.settings
    }

    pub fn thickness(&self) -> f64 {
        self.settings.thickness
    }

    pub fn burn(&self) -> f64 {
        self.settings.burn
    }

    pub fn spacing(&self) -> f64 {
        self.settings.spacing()
    }

    pub fn state(&self) -> TurtleState {
        self.state
    }

    pub fn position(&self) -> Point {
        self.state.position
    }

    pub fn heading(&self) -> f64 {
        self.state.heading
    }

    pub fn path_kind(&self) -> PathKind {
        self.kind
    }

    /// Kind given to paths started from now on.
    pub fn set_path_kind(&mut self, kind: PathKind) {
        if kind != self.kind {
            self.stroke();
            self.kind = kind;
        }
    }

    /// Finished paths so far (the open pen path is not included).
    pub fn paths(&self) -> &[CutPath] {
        &self.paths
    }

    fn push_segment(&mut self, segment: Segment) {
        let start = self.state.position;
        let kind = self.kind;
        self.pen
            .get_or_insert_with(|| CutPath::new(kind, start))
            .segments
            .push(segment);
    }

    /// Finishes the open path, if any.
    pub fn stroke(&mut self) {
        if let Some(path) = self.pen.take() {
            if !path.is_empty() {
                self.paths.push(path);
            }
        }
    }

    /// Lifts the pen, moves by `(dx, dy)` in the current frame, then turns.
    pub fn move_to(&mut self, dx: f64, dy: f64, degrees: f64) {
        self.stroke();
        self.state.position = self.state.to_global(dx, dy);
        self.state.heading = normalize_heading(self.state.heading + degrees);
    }

    /// Straight cut along the current heading.
    pub fn edge(&mut self, length: f64) {
        let to = self.state.to_global(length, 0.0);
        if length.abs() > EPSILON {
            self.push_segment(Segment::Line { to });
        }
        self.state.position = to;
    }

    /// Turns by `degrees`. With a radius the turn follows an arc; the arc is
    /// grown by the burn on outside turns and shrunk on inside turns, so a
    /// point turn still leaves a burn-sized fillet.
    pub fn corner(&mut self, degrees: f64, radius: f64) {
        let burn = self.settings.burn;
        let sweep = degrees.to_radians();

        let (center_offset, arc_radius) = if degrees > 0.0 {
            (radius + burn, radius + burn)
        } else if radius > burn {
            (-(radius - burn), radius - burn)
        } else {
            (burn - radius, burn - radius)
        };
        let local_start = if center_offset >= 0.0 {
            -FRAC_PI_2
        } else {
            FRAC_PI_2
        };

        let end_local = Point::new(
            arc_radius * (local_start + sweep).cos(),
            center_offset + arc_radius * (local_start + sweep).sin(),
        );
        let to = self.state.to_global(end_local.x, end_local.y);

        if arc_radius > EPSILON && sweep.abs() > EPSILON {
            let center = self.state.to_global(0.0, center_offset);
            self.push_segment(Segment::Arc {
                center,
                radius: arc_radius,
                start_angle: local_start + self.state.heading.to_radians(),
                sweep,
                to,
            });
        }

        self.state.position = to;
        self.state.heading = normalize_heading(self.state.heading + degrees);
    }

    pub fn polyline(&mut self, steps: &[Step]) {
        for step in steps {
            match *step {
                Step::Edge(length) => self.edge(length),
                Step::Corner(degrees) => self.corner(degrees, 0.0),
                Step::Arc(degrees, radius) => self.corner(degrees, radius),
            }
        }
    }

    /// Saves cursor and path kind; they are restored when the guard drops,
    /// whichever way the enclosing scope is left. The open path is set aside
    /// meanwhile and continues after the restore.
    pub fn saved(&mut self) -> SavedContext<'_> {
        SavedContext {
            state: self.state,
            kind: self.kind,
            pen: self.pen.take(),
            turtle: self,
        }
    }

    /// Axis-aligned rectangular opening centered on `(cx, cy)` in the current
    /// frame, shrunk by the burn.
    pub fn rectangular_hole(&mut self, cx: f64, cy: f64, width: f64, height: f64) {
        let burn = self.settings.burn;
        let mut ctx = self.saved();
        ctx.set_path_kind(PathKind::Hole);
        ctx.move_to(cx, cy - height / 2.0 + burn, 180.0);
        ctx.edge(width / 2.0);
        for side in [height, width, height, width / 2.0] {
            ctx.corner(-90.0, 0.0);
            ctx.edge(side);
        }
    }

    /// Round cutout centered on `(x, y)` whose remaining disc keeps radius `r`.
    pub fn circle(&mut self, x: f64, y: f64, r: f64) {
        let radius = r + self.settings.burn;
        self.full_circle(x, y, radius);
    }

    /// Round hole centered on `(x, y)` with finished radius `r`.
    pub fn hole(&mut self, x: f64, y: f64, r: f64) {
        let radius = r - self.settings.burn;
        self.full_circle(x, y, radius);
    }

    fn full_circle(&mut self, x: f64, y: f64, radius: f64) {
        if radius <= EPSILON {
            return;
        }
        let center = self.state.to_global(x, y);
        let mut ctx = self.saved();
        ctx.set_path_kind(PathKind::Hole);
        ctx.move_to(x + radius, y, 0.0);
        let to = ctx.state.position;
        let start_angle = ctx.state.heading.to_radians();
        ctx.push_segment(Segment::Arc {
            center,
            radius,
            start_angle,
            sweep: 2.0 * PI,
            to,
        });
    }

    fn shift(&mut self, direction: Direction, width: f64, height: f64) {
        match direction {
            Direction::Up => self.move_to(0.0, height, 0.0),
            Direction::Down => self.move_to(0.0, -height, 0.0),
            Direction::Left => self.move_to(-width, 0.0, 0.0),
            Direction::Right => self.move_to(width, 0.0, 0.0),
        }
    }

    /// Draws one part into a `width` x `height` slot and moves the cursor
    /// according to `placement`.
    ///
    /// The part is drawn from a saved state offset by half the spacing; the
    /// cursor and path kind are restored afterwards even if `draw` fails.
    /// Paths produced by the outermost part are recorded as one group.
    pub fn part<E>(
        &mut self,
        width: f64,
        height: f64,
        placement: &Placement,
        draw: impl FnOnce(&mut Turtle) -> std::result::Result<(), E>,
    ) -> std::result::Result<(), E> {
        let spacing = self.settings.spacing();
        let (mut slot_w, mut slot_h) = (width + spacing, height + spacing);
        if placement.rotated {
            std::mem::swap(&mut slot_w, &mut slot_h);
        }

        trace!(
            width,
            height,
            placement = %placement,
            "placing part"
        );

        if placement.only {
            for &direction in &placement.directions {
                self.shift(direction, slot_w, slot_h);
            }
            return Ok(());
        }

        for &direction in placement.directions.iter().filter(|d| d.before_drawing()) {
            self.shift(direction, slot_w, slot_h);
        }

        self.stroke();
        let saved_state = self.state;
        let saved_kind = self.kind;
        let first = self.paths.len();
        self.part_stack.push(first);

        self.move_to(spacing / 2.0, spacing / 2.0, 0.0);
        let frame = self.state;
        let result = draw(self);

        self.stroke();
        self.part_stack.pop();
        self.state = saved_state;
        self.kind = saved_kind;

        if placement.mirror {
            let axis = slot_w - spacing;
            let reflect = |p: Point| {
                let local = frame.to_local(p);
                frame.to_global(axis - local.x, local.y)
            };
            for path in &mut self.paths[first..] {
                *path = path.reflected(&reflect);
            }
        }

        if self.part_stack.is_empty() && self.paths.len() > first {
            self.parts.push((first..self.paths.len()).collect());
        }

        result?;

        for &direction in placement.directions.iter().filter(|d| !d.before_drawing()) {
            self.shift(direction, slot_w, slot_h);
        }
        Ok(())
    }

    /// Snapshot of everything drawn so far.
    pub fn drawing(&mut self) -> Drawing {
        self.stroke();
        Drawing {
            paths: self.paths.clone(),
            parts: self.parts.clone(),
        }
    }

    pub fn into_drawing(mut self) -> Drawing {
        self.stroke();
        Drawing {
            paths: self.paths,
            parts: self.parts,
        }
    }
}

/// Scoped save of the turtle's cursor and path kind.
pub struct SavedContext<'a> {
    turtle: &'a mut Turtle,
    state: TurtleState,
    kind: PathKind,
    pen: Option<CutPath>,
}

impl Deref for SavedContext<'_> {
    type Target = Turtle;

    fn deref(&self) -> &Turtle {
        self.turtle
    }
}

impl DerefMut for SavedContext<'_> {
    fn deref_mut(&mut self) -> &mut Turtle {
        self.turtle
    }
}

impl Drop for SavedContext<'_> {
    fn drop(&mut self) {
        self.turtle.stroke();
        self.turtle.state = self.state;
        self.turtle.kind = self.kind;
        self.turtle.pen = self.pen.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::POINT_TOLERANCE;

    fn turtle(burn: f64) -> Turtle {
        Turtle::new(CanvasSettings::new(3.0, burn)).unwrap()
    }

    fn assert_point(p: Point, x: f64, y: f64) {
        assert!(
            (p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9,
            "expected ({x}, {y}), got ({}, {})",
            p.x,
            p.y
        );
    }

    #[test]
    fn test_settings_validation() {
        assert!(CanvasSettings::default().validate().is_ok());
        assert!(Turtle::new(CanvasSettings::new(0.0, 0.1)).is_err());
        assert!(Turtle::new(CanvasSettings::new(3.0, -0.1)).is_err());
        assert!((CanvasSettings::default().spacing() - 1.7).abs() < 1e-12);
    }

    #[test]
    fn test_square_without_burn_closes() {
        let mut t = turtle(0.0);
        for _ in 0..4 {
            t.edge(10.0);
            t.corner(90.0, 0.0);
        }
        let drawing = t.into_drawing();
        assert_eq!(drawing.paths.len(), 1);
        let path = &drawing.paths[0];
        assert_eq!(path.segments.len(), 4);
        assert!(path.is_closed(POINT_TOLERANCE));
    }

    #[test]
    fn test_square_with_burn_grows_outward() {
        let mut t = turtle(0.5);
        for _ in 0..4 {
            t.edge(10.0);
            t.corner(90.0, 0.0);
        }
        assert_point(t.position(), 0.0, 0.0);
        assert!(t.heading().abs() < 1e-9);

        let drawing = t.into_drawing();
        let path = &drawing.paths[0];
        assert_eq!(path.segments.len(), 8);
        assert!(path.is_closed(POINT_TOLERANCE));
        let b = path.bounds();
        assert!((b.width() - 11.0).abs() < 1e-3);
    }

    #[test]
    fn test_inside_corner_with_radius() {
        let mut t = turtle(0.1);
        t.corner(-90.0, 2.0);
        assert_point(t.position(), 1.9, -1.9);
        assert!((t.heading() - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_move_to_lifts_pen() {
        let mut t = turtle(0.0);
        t.edge(5.0);
        t.move_to(1.0, 0.0, 90.0);
        t.edge(5.0);
        assert_point(t.position(), 6.0, 5.0);
        assert_eq!(t.into_drawing().paths.len(), 2);
    }

    #[test]
    fn test_polyline_matches_primitives() {
        let mut t = turtle(0.0);
        t.polyline(&[
            Step::Edge(4.0),
            Step::Corner(90.0),
            Step::Edge(2.0),
            Step::Arc(90.0, 1.0),
            Step::Edge(4.0),
        ]);
        assert_point(t.position(), -1.0, 3.0);
        assert!((t.heading() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_saved_context_restores_on_drop() {
        let mut t = turtle(0.0);
        t.move_to(3.0, 4.0, 30.0);
        let before = t.state();
        {
            let mut ctx = t.saved();
            ctx.set_path_kind(PathKind::Hole);
            ctx.edge(10.0);
            ctx.corner(45.0, 0.0);
        }
        assert_eq!(t.state(), before);
        assert_eq!(t.path_kind(), PathKind::Outline);
        assert_eq!(t.paths()[0].kind, PathKind::Hole);
    }

    #[test]
    fn test_saved_context_restores_on_error() {
        fn failing(t: &mut Turtle) -> std::result::Result<(), String> {
            let mut ctx = t.saved();
            ctx.edge(10.0);
            if ctx.position().x > 5.0 {
                return Err("boom".to_string());
            }
            ctx.edge(10.0);
            Ok(())
        }

        let mut t = turtle(0.0);
        let before = t.state();
        assert!(failing(&mut t).is_err());
        assert_eq!(t.state(), before);
    }

    #[test]
    fn test_saved_context_keeps_open_path() {
        let mut t = turtle(0.0);
        t.edge(5.0);
        t.rectangular_hole(2.0, 5.0, 1.0, 1.0);
        t.corner(90.0, 0.0);
        t.edge(5.0);
        let drawing = t.into_drawing();
        assert_eq!(drawing.paths.len(), 2);
        assert_eq!(drawing.paths[0].kind, PathKind::Hole);
        assert_eq!(drawing.paths[1].kind, PathKind::Outline);
        assert_point(drawing.paths[1].start, 0.0, 0.0);
        assert_point(drawing.paths[1].end(), 5.0, 5.0);
    }

    #[test]
    fn test_rectangular_hole_is_closed_and_shrunk() {
        let mut t = turtle(0.1);
        t.rectangular_hole(10.0, 10.0, 4.0, 2.0);
        let drawing = t.into_drawing();
        let path = &drawing.paths[0];
        assert_eq!(path.kind, PathKind::Hole);
        assert!(path.is_closed(POINT_TOLERANCE));
        assert_point(path.start, 10.0, 9.1);
        // inside corners turn on a burn-sized loop, the straight sides sit
        // one burn inside the nominal rectangle
        assert_point(path.segments[0].end(), 8.0, 9.1);
        assert_point(path.segments[1].end(), 8.1, 9.0);
        let b = path.bounds();
        assert!((b.width() - 4.0).abs() < 1e-3);
        assert!((b.height() - 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_circle_and_hole_radii() {
        let mut t = turtle(0.1);
        t.circle(5.0, 5.0, 2.0);
        t.hole(5.0, 5.0, 2.0);
        t.hole(5.0, 5.0, 0.05);
        let drawing = t.into_drawing();
        assert_eq!(drawing.paths.len(), 2);
        match drawing.paths[0].segments[0] {
            Segment::Arc { center, radius, .. } => {
                assert_point(center, 5.0, 5.0);
                assert!((radius - 2.1).abs() < 1e-12);
            }
            _ => panic!("expected an arc"),
        }
        assert!((drawing.paths[1].bounds().width() - 3.8).abs() < 1e-3);
    }

    #[test]
    fn test_part_moves_by_slot_size() {
        let mut t = turtle(0.1);
        let right: Placement = "right".parse().unwrap();
        t.part(10.0, 5.0, &right, |t| {
            t.edge(10.0);
            Ok::<(), Error>(())
        })
        .unwrap();
        assert_point(t.position(), 11.7, 0.0);

        let up_only: Placement = "up only".parse().unwrap();
        t.part(10.0, 5.0, &up_only, |t| {
            t.edge(10.0);
            Ok::<(), Error>(())
        })
        .unwrap();
        assert_point(t.position(), 11.7, 6.7);

        let drawing = t.into_drawing();
        assert_eq!(drawing.paths.len(), 1);
        assert_eq!(drawing.parts, vec![vec![0]]);
        assert_point(drawing.paths[0].start, 0.85, 0.85);
    }

    #[test]
    fn test_part_mirror_reflects_within_slot() {
        let mut t = turtle(0.0);
        let mirror: Placement = "mirror".parse().unwrap();
        t.part(10.0, 5.0, &mirror, |t| {
            t.edge(4.0);
            Ok::<(), Error>(())
        })
        .unwrap();
        let drawing = t.into_drawing();
        let path = &drawing.paths[0];
        let s = 1.5 / 2.0;
        assert_point(path.start, 10.0 + s, s);
        assert_point(path.end(), 6.0 + s, s);
    }

    #[test]
    fn test_part_restores_on_error() {
        let mut t = turtle(0.1);
        let right: Placement = "right".parse().unwrap();
        let result = t.part(10.0, 5.0, &right, |t| {
            t.set_path_kind(PathKind::Hole);
            t.edge(3.0);
            Err(Error::configuration("no room"))
        });
        assert!(result.is_err());
        assert_point(t.position(), 0.0, 0.0);
        assert_eq!(t.path_kind(), PathKind::Outline);

        t.edge(1.0);
        let drawing = t.into_drawing();
        assert_eq!(drawing.paths.len(), 2);
    }
}
