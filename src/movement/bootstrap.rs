//! Movement domain: player spawn from the loaded tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::controller::MotionController;
use crate::movement::{GameLayer, MotionTuning, Player, PlayerMotion};

/// Player collider size in pixels.
pub const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MotionTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    info!(
        "Spawning player: move_speed={}, jump_force={}, air_jumps={}, dashes={}",
        tuning.move_speed, tuning.grounded_jump_force, tuning.max_air_jumps, tuning.max_dashes
    );

    commands.spawn((
        // Identity & Movement
        (Player, PlayerMotion(MotionController::new(&tuning))),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 100.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            // Unit mass so impulses map directly onto velocity changes
            Mass(1.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Wall, GameLayer::Interactable],
            ),
        ),
    ));
}
