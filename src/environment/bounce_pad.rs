//! Environment domain: bounce pads that launch the player into a glide.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{
    AvianBody, MotionContext, MotionInput, MotionMessage, Player, PlayerBodyQuery, SpatialProbe,
};

/// Launches the player along the pad's local up axis on contact.
#[derive(Component, Debug, Clone, Copy)]
pub struct BouncePad {
    /// Launch speed in pixels per second.
    pub strength: f32,
}

impl Default for BouncePad {
    fn default() -> Self {
        Self { strength: 640.0 }
    }
}

impl BouncePad {
    /// Launch velocity for a pad oriented by `transform`.
    pub fn launch_velocity(&self, transform: &Transform) -> Vec2 {
        transform.up().truncate() * self.strength
    }
}

pub(crate) fn bounce_players_off_pads(
    time: Res<Time<Virtual>>,
    input: Res<MotionInput>,
    spatial_query: SpatialQuery,
    mut collision_events: MessageReader<CollisionStart>,
    pads: Query<(&BouncePad, &Transform), Without<Player>>,
    mut players: PlayerBodyQuery,
    mut motion_messages: MessageWriter<MotionMessage>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, pad_entity) in pairs {
            let Ok((pad, pad_transform)) = pads.get(pad_entity) else {
                continue;
            };
            let Ok((entity, mut motion, mut transform, mut velocity, mut locked_axes, mut friction, mass, collider)) =
                players.get_mut(player_entity)
            else {
                continue;
            };

            let launch = pad.launch_velocity(pad_transform);
            let probe = SpatialProbe {
                query: &spatial_query,
                exclude: entity,
            };
            let mut body = AvianBody::new(
                &mut transform,
                &mut velocity,
                &mut locked_axes,
                &mut friction,
                mass,
                collider,
            );
            let mut ctx = MotionContext {
                physics: &probe,
                body: &mut body,
                input: &*input,
                clock: &*time,
            };

            motion.0.bounce(&mut ctx, launch);
            debug!("Bounce pad {:?} launched player at {:?}", pad_entity, launch);

            for motion_event in motion.0.drain_events() {
                motion_messages.write(MotionMessage {
                    player: entity,
                    event: motion_event,
                });
            }
        }
    }
}
