#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_matches_constants() {
    let cfg = EditorConfig::default();
    assert_eq!(cfg.surface_size, 800.0);
    assert_eq!(cfg.rotate_handle_radius, 24.0);
    assert_eq!(cfg.rotate_handle_draw_radius, 12.0);
    assert_eq!(cfg.scale_handle_size, 32.0);
    assert_eq!(cfg.guide_tolerance, 0.02);
    assert_eq!(cfg.max_text_chars, 50);
}

#[test]
fn from_json_empty_is_default() {
    assert_eq!(EditorConfig::from_json("").unwrap(), EditorConfig::default());
    assert_eq!(EditorConfig::from_json("   ").unwrap(), EditorConfig::default());
}

#[test]
fn from_json_partial_override_keeps_other_defaults() {
    let cfg = EditorConfig::from_json(r#"{ "scale_handle_size": 15, "surface_size": 1024 }"#).unwrap();
    assert_eq!(cfg.scale_handle_size, 15.0);
    assert_eq!(cfg.surface_size, 1024.0);
    assert_eq!(cfg.rotate_handle_radius, 24.0);
    assert_eq!(cfg.max_text_chars, 50);
}

#[test]
fn from_json_rejects_malformed() {
    let err = EditorConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, EditorError::Config(_)));
}

#[test]
fn from_json_rejects_non_positive_sizes() {
    let err = EditorConfig::from_json(r#"{ "surface_size": 0 }"#).unwrap_err();
    assert!(err.to_string().contains("surface_size"));

    let err = EditorConfig::from_json(r#"{ "guide_tolerance": -0.5 }"#).unwrap_err();
    assert!(err.to_string().contains("guide_tolerance"));
}

#[test]
fn from_json_rejects_zero_text_limit() {
    let err = EditorConfig::from_json(r#"{ "max_text_chars": 0 }"#).unwrap_err();
    assert!(matches!(err, EditorError::Config(_)));
}

#[test]
fn from_json_rejects_fractional_surface_size() {
    let err = EditorConfig::from_json(r#"{ "surface_size": 800.5 }"#).unwrap_err();
    assert!(err.to_string().contains("surface_size"));

    let config = EditorConfig::from_json(r#"{ "surface_size": 1024 }"#).unwrap();
    assert_eq!(config.surface_size, 1024.0);
}
