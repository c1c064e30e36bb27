// Host-side sanity checks for constants, the export table and config parsing.

use hextrail_web::constants::*;
use hextrail_web::module::EXPORTS;
use hextrail_web::{Capabilities, DrawMode, Export, ShimConfig};

#[test]
fn slider_defaults_within_ranges() {
    assert!(SPEED_MIN < SPEED_MAX);
    assert!((SPEED_MIN..=SPEED_MAX).contains(&SPEED_DEFAULT));
    assert!(THICKNESS_MIN < THICKNESS_MAX);
    assert!((THICKNESS_MIN..=THICKNESS_MAX).contains(&THICKNESS_DEFAULT));
}

#[test]
fn viewport_constants() {
    assert!((REFERENCE_WIDTH / REFERENCE_HEIGHT - 4.0 / 3.0).abs() < 1e-12);
    assert!(MAX_VIEWPORT_HEIGHT_FRACTION > 0.0 && MAX_VIEWPORT_HEIGHT_FRACTION <= 1.0);
}

#[test]
fn export_table_indexed_by_variant() {
    for (i, d) in EXPORTS.iter().enumerate() {
        assert_eq!(d.export as usize, i, "{} out of order", d.symbol);
        assert!(d.symbol.starts_with('_'));
    }
    assert_eq!(Export::Init.symbol(), "_init_hextrail");
    assert_eq!(Export::MouseWheel.symbol(), "_handle_mouse_wheel");
}

#[test]
fn only_init_is_required() {
    let required: Vec<_> = EXPORTS.iter().filter(|d| d.required).map(|d| d.export).collect();
    assert_eq!(required, vec![Export::Init]);
}

#[test]
fn detect_validates_required_exports() {
    let caps = Capabilities::detect(|s| s == "_init_hextrail" || s == "_set_spin").unwrap();
    assert!(caps.has(Export::Init));
    assert!(caps.has(Export::SetSpin));
    assert!(!caps.has(Export::Draw));
    assert!(caps.missing().any(|s| s == "_draw_hextrail"));

    let err = Capabilities::detect(|s| s != "_init_hextrail").unwrap_err();
    assert!(err.is_fatal());
}

#[test]
fn draw_mode_parse() {
    assert_eq!(DrawMode::parse("polled"), Some(DrawMode::Polled));
    assert_eq!(DrawMode::parse(" POLL "), Some(DrawMode::Polled));
    assert_eq!(DrawMode::parse("self"), Some(DrawMode::SelfScheduled));
    assert_eq!(DrawMode::parse("sometimes"), None);
    assert_eq!(DrawMode::default(), DrawMode::SelfScheduled);
}

#[test]
fn config_overrides() {
    let config = ShimConfig::default().with_overrides(Some("polled"), Some("HexModule"));
    assert_eq!(config.draw_mode, DrawMode::Polled);
    assert_eq!(config.module_global, "HexModule");

    let config = ShimConfig::default().with_overrides(Some("bogus"), Some("  "));
    assert_eq!(config.draw_mode, DrawMode::SelfScheduled);
    assert_eq!(config.module_global, MODULE_GLOBAL);
}
