use boxkit_core::{CanvasSettings, Turtle};
use boxkit_joinery::{fingered_flex_area, FlexPlan};

#[test]
fn test_plan_invariants_for_positive_widths() {
    for thickness in [1.0, 3.0, 6.0] {
        for width in [8.0, 20.0, 40.0, 75.0, 150.0, 400.0] {
            if let Ok(plan) = FlexPlan::new(width * thickness / 3.0 + 3.0 * thickness, thickness)
            {
                assert!(plan.segments >= 2);
                assert!(plan.segment_length > 0.0);
                assert!((plan.gap - 2.0 / 3.0 * thickness).abs() < 1e-12);
            }
        }
    }
}

#[test]
fn test_40mm_strip_scenario() {
    let mut t = Turtle::new(CanvasSettings::new(3.0, 0.0)).unwrap();
    let plan = fingered_flex_area(&mut t, 5, 40.0, 3.0, 0).unwrap();
    assert_eq!(plan.segments, 2);
    assert!((plan.segment_length - 15.0).abs() < 1e-9);

    let p = t.position();
    assert!((p.x - 30.0).abs() < 1e-9);
    assert!(p.y.abs() < 1e-9);
    assert!(t.heading().abs() < 1e-9);
    assert_eq!(t.into_drawing().paths.len(), 50);
}

#[test]
fn test_narrow_strip_uses_single_reverse_slit() {
    let mut t = Turtle::new(CanvasSettings::new(3.0, 0.0)).unwrap();
    let plan = fingered_flex_area(&mut t, 1, 20.0, 3.0, 0).unwrap();
    assert!(plan.single);
    assert!((t.position().x - 6.0).abs() < 1e-9);
    assert_eq!(t.into_drawing().paths.len(), 8);
}

#[test]
fn test_phase_offset_swaps_rows() {
    let draw = |offset| {
        let mut t = Turtle::new(CanvasSettings::new(3.0, 0.0)).unwrap();
        fingered_flex_area(&mut t, 1, 40.0, 3.0, offset).unwrap();
        t.into_drawing()
    };
    let even = draw(0);
    let odd = draw(1);
    assert_eq!(even.paths.len(), odd.paths.len());
    assert_ne!(even, odd);
    // shifting by two phases is the same pattern
    assert_eq!(even, draw(2));
}

#[test]
fn test_degenerate_strip_is_rejected_before_drawing() {
    let mut t = Turtle::new(CanvasSettings::default()).unwrap();
    assert!(fingered_flex_area(&mut t, 2, 5.0, 3.0, 0).is_err());
    assert!(t.into_drawing().is_empty());
}
