use boxkit_core::{CanvasSettings, Drawing, PathKind, Placement, Point, Turtle, POINT_TOLERANCE};
use boxkit_joinery::{
    back_plates, finger_count_for_arc, front_plate, plate, plate_outline, BackPlateLayout, Edges,
    FingerSign, PanelParameters, PanelRole,
};

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
fn test_outline_closes_for_every_sign_and_role() {
    for burn in [0.0, 0.1] {
        for sign in [FingerSign::Outward, FingerSign::Inward] {
            for role in [PanelRole::Frame, PanelRole::Plate] {
                let mut t = Turtle::new(CanvasSettings::new(3.0, burn)).unwrap();
                let start = t.position();
                plate_outline(&mut t, &params(), sign, role).unwrap();
                assert!(
                    t.position().approx_eq(&start, POINT_TOLERANCE),
                    "{sign:?} {role:?} at burn {burn} ends at {:?}",
                    t.position()
                );

                let drawing = t.into_drawing();
                assert_eq!(drawing.paths.len(), 1);
                assert!(drawing.paths[0].is_closed(POINT_TOLERANCE));
            }
        }
    }
}

#[test]
fn test_plate_cuts_lip_hole_inside_outline() {
    let mut t = Turtle::new(CanvasSettings::default()).unwrap();
    plate(
        &mut t,
        &params(),
        FingerSign::Outward,
        PanelRole::Plate,
        &Placement::none(),
    )
    .unwrap();
    let drawing = t.into_drawing();

    let outlines: Vec<_> = drawing.outlines().collect();
    let holes: Vec<_> = drawing.holes().collect();
    assert_eq!(outlines.len(), 1);
    assert_eq!(holes.len(), 1);

    let outer = outlines[0].bounds();
    let inner = holes[0].bounds();
    assert!(inner.min_x > outer.min_x && inner.max_x < outer.max_x);
    assert!(inner.min_y > outer.min_y && inner.max_y < outer.max_y);
}

#[test]
fn test_frame_has_no_hole() {
    let mut t = Turtle::new(CanvasSettings::default()).unwrap();
    plate(
        &mut t,
        &params(),
        FingerSign::Inward,
        PanelRole::Frame,
        &Placement::none(),
    )
    .unwrap();
    let drawing = t.into_drawing();
    assert!(drawing.paths.iter().all(|p| p.kind == PathKind::Outline));
    assert_eq!(drawing.parts.len(), 1);
}

#[test]
fn test_invalid_parameters_draw_nothing() {
    let mut bad = params();
    bad.hinge_fingers = 12;
    let mut t = Turtle::new(CanvasSettings::default()).unwrap();
    assert!(plate(
        &mut t,
        &bad,
        FingerSign::Outward,
        PanelRole::Plate,
        &Placement::none()
    )
    .is_err());
    assert!(t.into_drawing().is_empty());
}

#[test]
fn test_front_strip_outline_closes() {
    for burn in [0.0, 0.1] {
        let mut t = Turtle::new(CanvasSettings::new(3.0, burn)).unwrap();
        front_plate(
            &mut t,
            &Edges::default(),
            42.0,
            21,
            13,
            5,
            3.0,
            &Placement::none(),
        )
        .unwrap();
        let drawing = t.into_drawing();
        // outline first, then one slit field per front corner
        assert!(drawing.paths[0].is_closed(1e-6));
        assert!(drawing.paths.len() > 20);

        let b = drawing.paths[0].bounds();
        let fingers = 2.0 * (7.0 + 5.0) + 21.0;
        // dovetails reach past both ends by at most their depth
        assert!(b.width() > fingers * 6.0 - 1e-6);
        assert!(b.width() < fingers * 6.0 + 2.0 * 4.5 + 1.0);
    }
}

#[test]
fn test_front_strip_without_room_for_slits_draws_nothing() {
    let mut t = Turtle::new(CanvasSettings::default()).unwrap();
    let result = front_plate(
        &mut t,
        &Edges::default(),
        6.0,
        21,
        13,
        5,
        3.0,
        &Placement::none(),
    );
    assert!(result.is_err());
    assert!(t.into_drawing().is_empty());
}

fn back_layout() -> BackPlateLayout {
    BackPlateLayout {
        x_base_fingers: 21,
        y_base_fingers: 13,
        corner_fingers: 5,
        pre_hinge_fingers: 16,
        hinge_fingers: 11,
        hinge_height: 36.0,
        base_height: 42.0,
        lid_height: 18.0,
        thickness: 3.0,
    }
}

fn starts_at(drawing: &Drawing, x: f64, y: f64) -> bool {
    let p = Point::new(x, y);
    drawing
        .paths
        .iter()
        .any(|path| path.start.approx_eq(&p, 1e-6))
}

#[test]
fn test_back_strip_without_room_for_slits_draws_nothing() {
    let mut short_base = back_layout();
    short_base.base_height = 6.0;
    let mut short_lid = back_layout();
    short_lid.lid_height = 6.0;

    for layout in [short_base, short_lid] {
        let mut t = Turtle::new(CanvasSettings::default()).unwrap();
        assert!(back_plates(&mut t, &Edges::default(), &layout).is_err());
        assert!(t.into_drawing().is_empty());
    }
}

#[test]
fn test_back_strip_rows_keep_their_offsets() {
    let layout = back_layout();
    let t = layout.thickness;
    let mut turtle = Turtle::new(CanvasSettings::new(t, 0.0)).unwrap();
    back_plates(&mut turtle, &Edges::default(), &layout).unwrap();
    let drawing = turtle.into_drawing();

    let hinge_length = 11.0 * 2.0 * t;
    let pre_hinge_length = 16.0 * 2.0 * t;

    // bottom row starts at the cursor; the top row sits one base height
    // plus a thickness above it, split around the hinge
    assert!(starts_at(&drawing, 0.0, 0.0));
    let top = layout.base_height + t;
    assert!(starts_at(&drawing, 0.0, top));
    assert!(starts_at(&drawing, pre_hinge_length + hinge_length, top));

    // each corner field starts y_base * t in, the second one a flex area
    // plus the straight front further along
    let first_bend = 13.0 * t;
    let second_bend = first_bend + 5.0 * 2.0 * t + 21.0 * 2.0 * t;
    for x in [first_bend, second_bend] {
        assert!(starts_at(&drawing, x, 0.0), "base bend at {x}");
        assert!(starts_at(&drawing, x, top), "lid bend at {x}");
    }

    // hinge edge runs up the far side of the hinge gap, the plain edge
    // comes back down its near side
    let hinge_x = pre_hinge_length + hinge_length;
    let hinge_y = layout.base_height / 2.0 - t;
    let hinge = drawing
        .paths
        .iter()
        .find(|p| p.start.approx_eq(&Point::new(hinge_x, hinge_y), 1e-6))
        .expect("hinge edge");
    assert!(hinge
        .end()
        .approx_eq(&Point::new(hinge_x, hinge_y + layout.hinge_height), 1e-6));
    assert!(starts_at(
        &drawing,
        pre_hinge_length,
        hinge_y + layout.hinge_height
    ));
}
