// Host-side tests for pointer and wheel helpers.

use hextrail_web::input::{wheel_direction, DragState};

#[test]
fn drag_reports_delta_from_last_position() {
    let mut drag = DragState::default();
    drag.begin(100.0, 100.0);
    assert!(drag.active);

    let d = drag.advance(104.0, 97.0).unwrap();
    assert_eq!((d.x, d.y), (4.0, -3.0));
    // measured from the previous move, not from the press
    let d = drag.advance(105.0, 97.0).unwrap();
    assert_eq!((d.x, d.y), (1.0, 0.0));
}

#[test]
fn drag_inactive_reports_nothing() {
    let mut drag = DragState::default();
    assert!(drag.advance(1.0, 1.0).is_none());
    drag.begin(0.0, 0.0);
    drag.end();
    assert!(!drag.active);
    assert!(drag.advance(1.0, 1.0).is_none());
}

#[test]
fn many_small_moves_accumulate() {
    let mut drag = DragState::default();
    drag.begin(0.0, 0.0);
    let mut sum = glam::DVec2::ZERO;
    for i in 1..=200 {
        let x = f64::from(i);
        let y = -f64::from(i) * 2.0;
        sum += drag.advance(x, y).unwrap();
    }
    assert_eq!(sum, glam::DVec2::new(200.0, -400.0));
}

#[test]
fn wheel_direction_is_sign_only() {
    assert_eq!(wheel_direction(120.0), Some(-1));
    assert_eq!(wheel_direction(1200.0), Some(-1));
    assert_eq!(wheel_direction(0.01), Some(-1));
    assert_eq!(wheel_direction(-120.0), Some(1));
    assert_eq!(wheel_direction(-1200.0), Some(1));
}

#[test]
fn wheel_direction_edge_cases() {
    // a zero delta zooms in, like any non-positive one
    assert_eq!(wheel_direction(0.0), Some(1));
    assert_eq!(wheel_direction(-0.0), Some(1));
    assert_eq!(wheel_direction(f64::NAN), None);
    assert_eq!(wheel_direction(f64::INFINITY), None);
}
