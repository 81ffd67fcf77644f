//! Serialized output of a render.

use boxkit_core::{Drawing, PathKind, Point};
use boxkit_settings::{OutputFormat, OutputSettings};
use serde::Serialize;

/// One path with its arcs split into short lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolylineOutput {
    pub kind: PathKind,
    pub closed: bool,
    pub points: Vec<Point>,
}

#[derive(Serialize)]
struct PolylineDrawing {
    paths: Vec<PolylineOutput>,
    parts: Vec<Vec<usize>>,
}

fn polylines(drawing: &Drawing, arc_step_degrees: f64) -> PolylineDrawing {
    let step = arc_step_degrees.to_radians();
    PolylineDrawing {
        paths: drawing
            .paths
            .iter()
            .map(|path| PolylineOutput {
                kind: path.kind,
                closed: path.is_closed(boxkit_core::POINT_TOLERANCE),
                points: path.flatten(step),
            })
            .collect(),
        parts: drawing.parts.clone(),
    }
}

/// Renders a drawing as JSON in the configured shape.
pub fn render_output(drawing: &Drawing, settings: &OutputSettings) -> serde_json::Result<String> {
    match (settings.format, settings.pretty) {
        (OutputFormat::Segments, true) => serde_json::to_string_pretty(drawing),
        (OutputFormat::Segments, false) => serde_json::to_string(drawing),
        (OutputFormat::Polylines, pretty) => {
            let out = polylines(drawing, settings.arc_step_degrees);
            if pretty {
                serde_json::to_string_pretty(&out)
            } else {
                serde_json::to_string(&out)
            }
        }
    }
}
