//! Cut-path model
//!
//! Everything the turtle traces ends up here: straight and circular segments
//! grouped into paths, paths grouped into parts, parts collected in a drawing.
//! Angles stored in segments are radians in the global frame.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Coordinates closer than this are treated as the same point.
pub const POINT_TOLERANCE: f64 = 1e-6;

/// A point on the sheet, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn approx_eq(&self, other: &Point, tolerance: f64) -> bool {
        self.distance_to(other) <= tolerance
    }
}

/// One piece of a cut path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Segment {
    /// Straight cut from the previous end point.
    Line { to: Point },
    /// Circular cut starting at the previous end point.
    ///
    /// `sweep` is signed: positive runs counter-clockwise.
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        sweep: f64,
        to: Point,
    },
}

impl Segment {
    pub fn end(&self) -> Point {
        match self {
            Segment::Line { to } | Segment::Arc { to, .. } => *to,
        }
    }

    fn length_from(&self, from: Point) -> f64 {
        match self {
            Segment::Line { to } => from.distance_to(to),
            Segment::Arc { radius, sweep, .. } => radius * sweep.abs(),
        }
    }
}

/// What a path is cut for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    /// Part outlines, finger teeth and flex slits.
    #[default]
    Outline,
    /// Openings cut inside a part (lip holes, finger holes, dial holes).
    Hole,
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    fn from_point(p: Point) -> Self {
        Self {
            min_x: p.x,
            min_y: p.y,
            max_x: p.x,
            max_y: p.y,
        }
    }

    pub fn include(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn union(&mut self, other: &Bounds) {
        self.include(Point::new(other.min_x, other.min_y));
        self.include(Point::new(other.max_x, other.max_y));
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// A continuous run of cuts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutPath {
    pub kind: PathKind,
    pub start: Point,
    pub segments: Vec<Segment>,
}

impl CutPath {
    pub fn new(kind: PathKind, start: Point) -> Self {
        Self {
            kind,
            start,
            segments: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn end(&self) -> Point {
        self.segments.last().map(Segment::end).unwrap_or(self.start)
    }

    pub fn is_closed(&self, tolerance: f64) -> bool {
        !self.is_empty() && self.start.approx_eq(&self.end(), tolerance)
    }

    /// Total cut length.
    pub fn length(&self) -> f64 {
        let mut from = self.start;
        let mut total = 0.0;
        for segment in &self.segments {
            total += segment.length_from(from);
            from = segment.end();
        }
        total
    }

    /// Polyline approximation; arcs are split into steps of at most
    /// `max_step` radians.
    pub fn flatten(&self, max_step: f64) -> Vec<Point> {
        let max_step = if max_step > 0.0 { max_step } else { PI / 36.0 };
        let mut points = vec![self.start];
        for segment in &self.segments {
            match *segment {
                Segment::Line { to } => points.push(to),
                Segment::Arc {
                    center,
                    radius,
                    start_angle,
                    sweep,
                    to,
                } => {
                    let steps = ((sweep.abs() / max_step).ceil() as usize).max(1);
                    for i in 1..steps {
                        let angle = start_angle + sweep * i as f64 / steps as f64;
                        points.push(Point::new(
                            center.x + radius * angle.cos(),
                            center.y + radius * angle.sin(),
                        ));
                    }
                    points.push(to);
                }
            }
        }
        points
    }

    pub fn bounds(&self) -> Bounds {
        let points = self.flatten(PI / 180.0);
        let mut bounds = Bounds::from_point(self.start);
        for p in points {
            bounds.include(p);
        }
        bounds
    }

    /// Applies an orientation-reversing isometry (a reflection) to the path.
    pub fn reflected(&self, map: impl Fn(Point) -> Point) -> CutPath {
        let mut from = self.start;
        let mut out = CutPath::new(self.kind, map(self.start));
        for segment in &self.segments {
            let mapped = match *segment {
                Segment::Line { to } => Segment::Line { to: map(to) },
                Segment::Arc {
                    center,
                    radius,
                    sweep,
                    to,
                    ..
                } => {
                    let center = map(center);
                    let begin = map(from);
                    Segment::Arc {
                        center,
                        radius,
                        start_angle: (begin.y - center.y).atan2(begin.x - center.x),
                        sweep: -sweep,
                        to: map(to),
                    }
                }
            };
            from = segment.end();
            out.segments.push(mapped);
        }
        out
    }
}

/// All paths produced by one render, grouped into parts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    pub paths: Vec<CutPath>,
    /// Indices into `paths`, one group per placed part.
    pub parts: Vec<Vec<usize>>,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn outlines(&self) -> impl Iterator<Item = &CutPath> {
        self.paths.iter().filter(|p| p.kind == PathKind::Outline)
    }

    pub fn holes(&self) -> impl Iterator<Item = &CutPath> {
        self.paths.iter().filter(|p| p.kind == PathKind::Hole)
    }

    pub fn part_paths(&self, part: usize) -> Vec<&CutPath> {
        self.parts
            .get(part)
            .map(|group| group.iter().filter_map(|&i| self.paths.get(i)).collect())
            .unwrap_or_default()
    }

    pub fn part_bounds(&self, part: usize) -> Option<Bounds> {
        Self::union_bounds(self.part_paths(part).into_iter())
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Self::union_bounds(self.paths.iter())
    }

    pub fn total_cut_length(&self) -> f64 {
        self.paths.iter().map(CutPath::length).sum()
    }

    fn union_bounds<'a>(paths: impl Iterator<Item = &'a CutPath>) -> Option<Bounds> {
        let mut result: Option<Bounds> = None;
        for path in paths {
            let b = path.bounds();
            match result.as_mut() {
                Some(acc) => acc.union(&b),
                None => result = Some(b),
            }
        }
        result
    }
}
