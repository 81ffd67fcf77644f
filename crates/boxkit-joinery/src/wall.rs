//! Rectangular walls
//!
//! A wall is an `x` by `y` rectangle whose four sides are drawn with edges
//! from the toolbox, counter-clockwise from the bottom.

use crate::edges::{EdgeKind, Edges};
use crate::error::{JoineryError, JoineryResult};
use boxkit_core::{Placement, Turtle};

/// Draws a wall in its own part slot.
///
/// `descriptor` holds four edge characters: bottom, right, top, left.
/// `ignore_widths` lists corner positions (0 to 7, two per corner, counted
/// counter-clockwise from the bottom left) where an edge should run on over
/// its neighbour's width instead of stopping at it.
pub fn rectangular_wall(
    turtle: &mut Turtle,
    edges: &Edges,
    x: f64,
    y: f64,
    descriptor: &str,
    ignore_widths: &[i32],
    placement: &Placement,
) -> JoineryResult<()> {
    let kinds = EdgeKind::parse_all(descriptor)?;
    if kinds.len() != 4 {
        return Err(JoineryError::InvalidParameters(format!(
            "a wall needs four edges, got '{descriptor}'"
        )));
    }
    if !(x > 0.0) || !(y > 0.0) {
        return Err(JoineryError::InvalidParameters(format!(
            "wall dimensions must be positive, got {x} x {y}"
        )));
    }

    let t = turtle.thickness();
    let edge_at = |i: usize| kinds[i % 4];
    let ignored = |i: i32| ignore_widths.contains(&i);

    let overall_width = x + edges.spacing(edge_at(3), t) + edges.spacing(edge_at(1), t);
    let overall_height = y + edges.spacing(edge_at(0), t) + edges.spacing(edge_at(2), t);

    turtle.part(overall_width, overall_height, placement, |turtle| {
        if !ignored(7) {
            turtle.move_to(edges.spacing(edge_at(3), t), 0.0, 0.0);
        }
        turtle.move_to(0.0, edges.margin(edge_at(0), t), 0.0);

        for (i, side) in [x, y, x, y].into_iter().enumerate() {
            let mut length = side;
            let mut from = edge_at(i);
            let mut to = edge_at(i + 1);
            let corner = 2 * i as i32;

            if ignored(corner - 1) || ignored(corner - 1 + 8) {
                length += edges.end_width(edge_at(i + 3), t);
            }
            if ignored(corner) {
                length += edges.start_width(edge_at(i + 1), t);
                to = EdgeKind::Plain;
            }
            if ignored(corner + 1) {
                from = EdgeKind::Plain;
            }

            edges.draw(turtle, edge_at(i), length);
            edges.edge_corner(turtle, from, to, 90.0);
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxkit_core::{CanvasSettings, PathKind, POINT_TOLERANCE};

    fn wall(descriptor: &str, burn: f64) -> boxkit_core::Drawing {
        let mut t = Turtle::new(CanvasSettings::new(3.0, burn)).unwrap();
        rectangular_wall(
            &mut t,
            &Edges::default(),
            60.0,
            40.0,
            descriptor,
            &[],
            &Placement::none(),
        )
        .unwrap();
        t.into_drawing()
    }

    #[test]
    fn test_plain_wall_is_closed_rectangle() {
        let drawing = wall("eeee", 0.0);
        assert_eq!(drawing.paths.len(), 1);
        let path = &drawing.paths[0];
        assert!(path.is_closed(POINT_TOLERANCE));
        let b = path.bounds();
        assert!((b.width() - 60.0).abs() < 1e-9);
        assert!((b.height() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_finger_walls_close() {
        for descriptor in ["ffff", "FFFF", "fFfF", "efff", "hFeF"] {
            for burn in [0.0, 0.1] {
                let drawing = wall(descriptor, burn);
                let outline: Vec<_> = drawing.outlines().collect();
                assert_eq!(outline.len(), 1, "{descriptor}");
                assert!(
                    outline[0].is_closed(1e-6),
                    "{descriptor} at burn {burn} does not close"
                );
            }
        }
    }

    #[test]
    fn test_finger_hole_edge_adds_holes() {
        let drawing = wall("heee", 0.0);
        assert!(drawing.paths.iter().any(|p| p.kind == PathKind::Hole));
    }

    #[test]
    fn test_bad_descriptors() {
        let mut t = Turtle::new(CanvasSettings::default()).unwrap();
        let edges = Edges::default();
        let none = Placement::none();
        assert!(rectangular_wall(&mut t, &edges, 10.0, 10.0, "eee", &[], &none).is_err());
        assert!(rectangular_wall(&mut t, &edges, 10.0, 10.0, "eeeq", &[], &none).is_err());
        assert!(rectangular_wall(&mut t, &edges, 0.0, 10.0, "eeee", &[], &none).is_err());
    }
}
