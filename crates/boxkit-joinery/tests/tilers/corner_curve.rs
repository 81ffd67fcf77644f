use boxkit_core::{CanvasSettings, Turtle};
use boxkit_joinery::{finger_count_for_arc, fingered_corner, FingerSign};
use std::f64::consts::PI;

#[test]
fn test_21mm_radius_in_3mm_stock() {
    // pi * 21 / 12 = 5.497...
    let arc = finger_count_for_arc(21.0, 3.0);
    assert_eq!(arc.fingers, 5);
    assert!((arc.radius - 19.1).abs() < 0.01);
}

#[test]
fn test_achieved_radius_within_half_a_pitch() {
    for thickness in [1.5, 3.0, 4.0, 6.0] {
        for target in [5.0, 12.5, 21.0, 33.3, 60.0] {
            let arc = finger_count_for_arc(target, thickness);
            let expected = (PI * target / (4.0 * thickness)).round();
            assert_eq!(arc.fingers as f64, expected);
            // half a finger pitch measured along the quarter circle
            let drift = (arc.radius - target).abs() * PI / 2.0;
            assert!(drift <= thickness + 1e-9, "{target} in {thickness}");
        }
    }
}

#[test]
fn test_achieved_radius_converges_for_thin_stock() {
    let target = 21.0;
    let errors: Vec<f64> = [3.0, 1.0, 0.1, 0.01]
        .iter()
        .map(|&t| (finger_count_for_arc(target, t).radius - target).abs())
        .collect();
    assert!(errors[3] < errors[0]);
    assert!(errors[3] < 0.01);
}

#[test]
fn test_corner_turns_both_signs_by_ninety() {
    for burn in [0.0, 0.1] {
        for sign in [FingerSign::Outward, FingerSign::Inward] {
            let mut t = Turtle::new(CanvasSettings::new(3.0, burn)).unwrap();
            let arc = finger_count_for_arc(21.0, 3.0);
            fingered_corner(&mut t, &arc, 3.0, sign).unwrap();
            assert!((t.heading() - 90.0).abs() < 1e-9);
            assert_eq!(t.into_drawing().paths.len(), 1);
        }
    }
}
