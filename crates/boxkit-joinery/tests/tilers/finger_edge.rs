use boxkit_core::{CanvasSettings, Turtle};
use boxkit_joinery::{finger_edge, FingerSign, JoineryError};

fn turtle(burn: f64) -> Turtle {
    Turtle::new(CanvasSettings::new(3.0, burn)).unwrap()
}

#[test]
fn test_whole_counts_advance_by_pitch() {
    for burn in [0.0, 0.1] {
        for sign in [FingerSign::Outward, FingerSign::Inward] {
            for n in 0..7 {
                let mut t = turtle(burn);
                finger_edge(&mut t, n as f64, 3.0, sign, false).unwrap();
                let p = t.position();
                assert!(
                    (p.x - n as f64 * 6.0).abs() < 1e-9 && p.y.abs() < 1e-9,
                    "{n} fingers {sign:?} at burn {burn}: ({}, {})",
                    p.x,
                    p.y
                );
                assert!(t.heading().abs() < 1e-9 || (t.heading() - 360.0).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn test_skipped_notch_leaves_a_step() {
    let mut t = turtle(0.1);
    finger_edge(&mut t, 4.0, 3.0, FingerSign::Inward, true).unwrap();
    let p = t.position();
    assert!((p.x - 24.0).abs() < 1e-9);
    assert!((p.y + 3.0).abs() < 1e-9);

    let mut t = turtle(0.1);
    finger_edge(&mut t, 4.0, 3.0, FingerSign::Outward, true).unwrap();
    assert!((t.position().y - 3.0).abs() < 1e-9);
}

#[test]
fn test_fractional_count_draws_nothing() {
    let mut t = turtle(0.1);
    let err = finger_edge(&mut t, 2.5, 3.0, FingerSign::Outward, false).unwrap_err();
    assert_eq!(err, JoineryError::FractionalFingerCount(2.5));
    assert!(t.position().x.abs() < 1e-12);
    assert!(t.into_drawing().is_empty());
}

#[test]
fn test_signs_mirror_each_other() {
    let mut out = turtle(0.0);
    finger_edge(&mut out, 3.0, 3.0, FingerSign::Outward, false).unwrap();
    let mut inward = turtle(0.0);
    finger_edge(&mut inward, 3.0, 3.0, FingerSign::Inward, false).unwrap();

    let a = out.into_drawing().bounds().unwrap();
    let b = inward.into_drawing().bounds().unwrap();
    assert!((a.min_y + 3.0).abs() < 1e-9 && a.max_y.abs() < 1e-9);
    assert!(b.min_y.abs() < 1e-9 && (b.max_y - 3.0).abs() < 1e-9);
}
