//! Movement domain: debug-only test room and input lock toggle.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::InputLockRequest;
use crate::environment::{BouncePad, Platform, PlatformStyle};
use crate::movement::{GameLayer, Ground, LockSource, Wall};

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let pad_color = Color::srgb(0.8, 0.3, 0.5);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    // Ground
    commands.spawn((
        Ground,
        Platform::new(PlatformStyle::Solid),
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(800.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -200.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(800.0, 40.0),
        ground_layers,
    ));

    // Left and right walls
    for x in [-420.0, 420.0] {
        commands.spawn((
            Wall,
            Sprite {
                color: wall_color,
                custom_size: Some(Vec2::new(40.0, 500.0)),
                ..default()
            },
            Transform::from_xyz(x, 50.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(40.0, 500.0),
            wall_layers,
        ));
    }

    // Floating platforms
    for (x, y, width) in [(-250.0, -50.0, 150.0), (250.0, 50.0, 150.0), (0.0, 150.0, 120.0)] {
        commands.spawn((
            Ground,
            Platform::new(PlatformStyle::Floating),
            Sprite {
                color: platform_color,
                custom_size: Some(Vec2::new(width, 20.0)),
                ..default()
            },
            Transform::from_xyz(x, y, 0.0),
            RigidBody::Static,
            Collider::rectangle(width, 20.0),
            ground_layers,
        ));
    }

    // Small pillar for wall jumping practice
    commands.spawn((
        Wall,
        Sprite {
            color: wall_color,
            custom_size: Some(Vec2::new(30.0, 200.0)),
            ..default()
        },
        Transform::from_xyz(-100.0, -80.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(30.0, 200.0),
        wall_layers,
    ));

    // Bounce pad on the floor, right of center
    commands.spawn((
        BouncePad::default(),
        Sprite {
            color: pad_color,
            custom_size: Some(Vec2::new(48.0, 12.0)),
            ..default()
        },
        Transform::from_xyz(150.0, -174.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(48.0, 12.0),
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Interactable, [GameLayer::Player]),
    ));
}

/// Tab toggles the edit mode input lock.
pub(crate) fn toggle_edit_mode_lock(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut locked: Local<bool>,
    mut requests: MessageWriter<InputLockRequest>,
) {
    if !keyboard.just_pressed(KeyCode::Tab) {
        return;
    }

    *locked = !*locked;
    requests.write(InputLockRequest {
        source: LockSource::EditMode,
        locked: *locked,
    });
    info!("Edit mode lock toggled: {}", *locked);
}
