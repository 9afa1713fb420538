//! Content domain: tests for tuning loading and validation.

use std::path::Path;

use bevy::prelude::Vec2;

use super::{load_motion_tuning, parse_motion_tuning, resolve_tuning, validate_tuning};
use crate::movement::MotionTuning;

// -----------------------------------------------------------------------------
// Parsing
// -----------------------------------------------------------------------------

#[test]
fn test_partial_tuning_keeps_defaults() {
    let tuning = parse_motion_tuning("(move_speed: 400.0, max_air_jumps: 2)", "inline").unwrap();

    assert_eq!(tuning.move_speed, 400.0);
    assert_eq!(tuning.max_air_jumps, 2);
    assert_eq!(tuning.coyote_time, MotionTuning::default().coyote_time);
    assert_eq!(tuning.dash_speed, MotionTuning::default().dash_speed);
}

#[test]
fn test_parse_error_names_file() {
    let error = parse_motion_tuning("(move_speed: \"fast\")", "bad.ron").unwrap_err();

    assert_eq!(error.file, "bad.ron");
    assert!(error.message.starts_with("Parse error"));
    assert!(error.to_string().contains("bad.ron"));
}

#[test]
fn test_missing_file_is_io_error() {
    let error = load_motion_tuning(Path::new("does/not/exist.ron")).unwrap_err();
    assert!(error.message.starts_with("IO error"));
}

#[test]
fn test_shipped_tuning_file_matches_defaults() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data/motion_tuning.ron");
    let tuning = load_motion_tuning(&path).unwrap();

    assert_eq!(tuning, MotionTuning::default());
    assert!(validate_tuning(&tuning).is_empty());
}

// -----------------------------------------------------------------------------
// Validation
// -----------------------------------------------------------------------------

#[test]
fn test_defaults_are_valid() {
    assert!(validate_tuning(&MotionTuning::default()).is_empty());
}

#[test]
fn test_out_of_range_values_are_reported() {
    let tuning = MotionTuning {
        coyote_time: 0.5,
        max_air_jumps: 7,
        air_drag_multiplier: 1.5,
        ..Default::default()
    };

    let errors = validate_tuning(&tuning);
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();

    assert_eq!(errors.len(), 3);
    assert!(fields.contains(&"coyote_time"));
    assert!(fields.contains(&"max_air_jumps"));
    assert!(fields.contains(&"air_drag_multiplier"));
}

#[test]
fn test_zero_direction_is_reported() {
    let tuning = MotionTuning {
        wall_jump_direction: Vec2::ZERO,
        ..Default::default()
    };

    let errors = validate_tuning(&tuning);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "wall_jump_direction");
    assert_eq!(errors[0].expected, "a non-zero direction");
}

#[test]
fn test_invalid_tuning_resolves_to_defaults() {
    let tuning = MotionTuning {
        move_speed: 10_000.0,
        ..Default::default()
    };

    assert_eq!(resolve_tuning(Ok(tuning)), MotionTuning::default());
}

#[test]
fn test_valid_tuning_is_kept() {
    let tuning = MotionTuning {
        move_speed: 400.0,
        ..Default::default()
    };

    assert_eq!(resolve_tuning(Ok(tuning.clone())), tuning);
}

#[test]
fn test_normalized_directions() {
    let tuning = MotionTuning::default().normalized();

    assert!((tuning.wall_hop_direction.length() - 1.0).abs() < 1e-5);
    assert!((tuning.wall_jump_direction.length() - 1.0).abs() < 1e-5);
    assert!(tuning.wall_jump_direction.y > tuning.wall_jump_direction.x);
}
