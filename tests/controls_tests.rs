// Host-side tests for control validation and display.

use hextrail_web::constants::*;
use hextrail_web::controls::{display_value, ControlField, ControlState, ControlValue};
use hextrail_web::{Call, ShimError};

#[test]
fn sliders_clamp_into_range() {
    let v = ControlField::Speed.validate(ControlValue::Continuous(10.0));
    assert_eq!(v, Ok(ControlValue::Continuous(SPEED_MAX)));
    let v = ControlField::Speed.validate(ControlValue::Continuous(0.0));
    assert_eq!(v, Ok(ControlValue::Continuous(SPEED_MIN)));
    let v = ControlField::Thickness.validate(ControlValue::Continuous(0.2));
    assert_eq!(v, Ok(ControlValue::Continuous(0.2)));
}

#[test]
fn infinite_slider_values_clamp() {
    let v = ControlField::Thickness.validate(ControlValue::Continuous(f64::INFINITY));
    assert_eq!(v, Ok(ControlValue::Continuous(THICKNESS_MAX)));
}

#[test]
fn wrong_kind_rejected() {
    assert!(matches!(
        ControlField::Spin.validate(ControlValue::Continuous(1.0)),
        Err(ShimError::InvalidRange { field: "spin", .. })
    ));
    assert!(matches!(
        ControlField::Speed.validate(ControlValue::Flag(true)),
        Err(ShimError::InvalidRange { field: "speed", .. })
    ));
    assert!(ControlField::Wander.validate(ControlValue::Flag(false)).is_ok());
}

#[test]
fn calls_for_fields() {
    assert_eq!(
        ControlField::Speed.call(ControlValue::Continuous(2.0)),
        Some(Call::SetSpeed(2.0))
    );
    assert_eq!(
        ControlField::Wander.call(ControlValue::Flag(true)),
        Some(Call::SetWander(true))
    );
    assert_eq!(ControlField::Spin.call(ControlValue::Continuous(1.0)), None);
}

#[test]
fn flags_cross_the_boundary_as_zero_one() {
    assert_eq!(Call::SetSpin(true).args(), vec![1.0]);
    assert_eq!(Call::SetWander(false).args(), vec![0.0]);
    assert_eq!(Call::MouseWheel(-1).args(), vec![-1.0]);
    assert!(Call::Init.args().is_empty());
}

#[test]
fn state_set_reports_change() {
    let mut state = ControlState::default();
    assert!(!state.set(ControlField::Spin, ControlValue::Flag(SPIN_DEFAULT)));
    assert!(state.set(ControlField::Spin, ControlValue::Flag(!SPIN_DEFAULT)));
    assert!(state.set(ControlField::Speed, ControlValue::Continuous(2.0)));
    assert_eq!(state.get(ControlField::Speed), ControlValue::Continuous(2.0));
    // mismatched kinds are not stored
    assert!(!state.set(ControlField::Speed, ControlValue::Flag(true)));
    assert_eq!(state.speed, 2.0);
}

#[test]
fn display_precision() {
    assert_eq!(display_value(ControlField::Speed, 1.0), "1.0");
    assert_eq!(display_value(ControlField::Speed, 2.345), "2.3");
    assert_eq!(display_value(ControlField::Thickness, 0.15), "0.15");
    assert_eq!(display_value(ControlField::Thickness, 0.1), "0.10");
}
