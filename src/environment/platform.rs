//! Environment domain: platforms that react when the player lands on them.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f32::consts::PI;

use crate::movement::{MotionEvent, MotionMessage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformStyle {
    /// Dips and springs back.
    Floating,
    /// Rattles in place.
    Solid,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Platform {
    pub style: PlatformStyle,
    /// Offset in pixels at the peak of the reaction.
    pub strength: f32,
    /// Seconds the reaction lasts.
    pub duration: f32,
}

impl Platform {
    pub fn new(style: PlatformStyle) -> Self {
        match style {
            PlatformStyle::Floating => Self {
                style,
                strength: 3.2,
                duration: 1.0,
            },
            PlatformStyle::Solid => Self {
                style,
                strength: 3.2,
                duration: 0.2,
            },
        }
    }
}

/// Position a platform returns to between reactions.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlatformRest(pub Vec3);

/// An in-progress landing reaction.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PlatformWobble {
    pub elapsed: f32,
}

/// Seeded jitter source for solid platform shakes.
#[derive(Resource, Debug)]
pub struct WobbleRng(pub ChaCha8Rng);

impl Default for WobbleRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(0x5eed))
    }
}

/// Vertical offset of a floating platform `progress` (0..=1) through its dip.
pub fn punch_offset(strength: f32, progress: f32) -> f32 {
    let t = progress.clamp(0.0, 1.0);
    -strength * (1.0 - t) * (t * 3.0 * PI).sin()
}

/// Jitter of a solid platform, shrinking to nothing as `progress` reaches 1.
pub fn shake_offset(strength: f32, progress: f32, rng: &mut impl Rng) -> Vec2 {
    let amplitude = strength * (1.0 - progress.clamp(0.0, 1.0));
    Vec2::new(
        rng.random_range(-1.0_f32..=1.0) * amplitude,
        rng.random_range(-1.0_f32..=1.0) * amplitude,
    )
}

pub(crate) fn record_platform_rest(
    mut commands: Commands,
    platforms: Query<(Entity, &Transform), Added<Platform>>,
) {
    for (entity, transform) in &platforms {
        commands
            .entity(entity)
            .insert(PlatformRest(transform.translation));
    }
}

/// Restarts the reaction of whichever platform the player just landed on.
pub(crate) fn start_platform_wobble(
    mut commands: Commands,
    mut motion_messages: MessageReader<MotionMessage>,
    mut platforms: Query<(&PlatformRest, &mut Transform), With<Platform>>,
) {
    for message in motion_messages.read() {
        let MotionEvent::Landed { surface } = message.event else {
            continue;
        };
        let Ok((rest, mut transform)) = platforms.get_mut(surface) else {
            continue;
        };

        // Cancel any running reaction before starting over
        transform.translation = rest.0;
        commands.entity(surface).insert(PlatformWobble::default());
    }
}

pub(crate) fn animate_platform_wobble(
    mut commands: Commands,
    time: Res<Time>,
    mut rng: ResMut<WobbleRng>,
    mut platforms: Query<(
        Entity,
        &Platform,
        &PlatformRest,
        &mut PlatformWobble,
        &mut Transform,
    )>,
) {
    let dt = time.delta_secs();

    for (entity, platform, rest, mut wobble, mut transform) in &mut platforms {
        wobble.elapsed += dt;
        let progress = if platform.duration > 0.0 {
            wobble.elapsed / platform.duration
        } else {
            1.0
        };

        if progress >= 1.0 {
            transform.translation = rest.0;
            commands.entity(entity).remove::<PlatformWobble>();
            continue;
        }

        let offset = match platform.style {
            PlatformStyle::Floating => Vec2::new(0.0, punch_offset(platform.strength, progress)),
            PlatformStyle::Solid => shake_offset(platform.strength, progress, &mut rng.0),
        };
        transform.translation = rest.0 + offset.extend(0.0);
    }
}
