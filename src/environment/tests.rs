//! Environment domain: tests for bounce pad launches and platform reactions.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::f32::consts::FRAC_PI_2;

use super::platform::{punch_offset, shake_offset};
use super::{BouncePad, KillPlane, Platform, PlatformStyle};

// -----------------------------------------------------------------------------
// BouncePad tests
// -----------------------------------------------------------------------------

#[test]
fn test_upright_pad_launches_straight_up() {
    let pad = BouncePad { strength: 500.0 };
    let launch = pad.launch_velocity(&Transform::default());

    assert!(launch.x.abs() < 1e-4);
    assert!((launch.y - 500.0).abs() < 1e-4);
}

#[test]
fn test_rotated_pad_launches_sideways() {
    let pad = BouncePad { strength: 500.0 };
    // Rotated a quarter turn counter-clockwise, local up points left
    let transform = Transform::from_rotation(Quat::from_rotation_z(FRAC_PI_2));
    let launch = pad.launch_velocity(&transform);

    assert!((launch.x + 500.0).abs() < 1e-3);
    assert!(launch.y.abs() < 1e-3);
}

// -----------------------------------------------------------------------------
// KillPlane tests
// -----------------------------------------------------------------------------

#[test]
fn test_kill_plane_triggers_only_below_its_height() {
    let plane = KillPlane::default();

    assert!(!plane.has_fallen_below(0.0));
    assert!(!plane.has_fallen_below(-1000.0));
    assert!(plane.has_fallen_below(-1000.5));
}

// -----------------------------------------------------------------------------
// Platform reaction tests
// -----------------------------------------------------------------------------

#[test]
fn test_platform_styles_have_distinct_durations() {
    let floating = Platform::new(PlatformStyle::Floating);
    let solid = Platform::new(PlatformStyle::Solid);

    assert!(floating.duration > solid.duration);
    assert!(floating.strength > 0.0);
}

#[test]
fn test_punch_starts_and_ends_at_rest() {
    assert!(punch_offset(3.2, 0.0).abs() < 1e-5);
    assert!(punch_offset(3.2, 1.0).abs() < 1e-5);
}

#[test]
fn test_punch_dips_first() {
    assert!(punch_offset(3.2, 0.1) < 0.0);
}

#[test]
fn test_punch_stays_within_strength() {
    for step in 0..=100 {
        let progress = step as f32 / 100.0;
        assert!(punch_offset(3.2, progress).abs() <= 3.2);
    }
}

#[test]
fn test_shake_is_bounded_and_settles() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for step in 0..100 {
        let progress = step as f32 / 100.0;
        let offset = shake_offset(2.0, progress, &mut rng);
        let amplitude = 2.0 * (1.0 - progress);
        assert!(offset.x.abs() <= amplitude + 1e-5);
        assert!(offset.y.abs() <= amplitude + 1e-5);
    }

    assert_eq!(shake_offset(2.0, 1.0, &mut rng), Vec2::ZERO);
}

#[test]
fn test_shake_is_deterministic_for_a_seed() {
    let mut a = ChaCha8Rng::seed_from_u64(42);
    let mut b = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..10 {
        assert_eq!(shake_offset(1.0, 0.3, &mut a), shake_offset(1.0, 0.3, &mut b));
    }
}
