//! Movement domain: systems driving the motion controller each tick.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::InputLockRequest;
use crate::movement::events::MotionMessage;
use crate::movement::ports::MotionContext;
use crate::movement::resources::MotionInput;
use crate::movement::systems::bridge::{AvianBody, PlayerBodyQuery, SpatialProbe};

/// Logic tick: contact checks, timers and action input.
pub(crate) fn tick_player_motion(
    time: Res<Time<Virtual>>,
    input: Res<MotionInput>,
    spatial_query: SpatialQuery,
    mut players: PlayerBodyQuery,
    mut motion_messages: MessageWriter<MotionMessage>,
) {
    for (entity, mut motion, mut transform, mut velocity, mut locked_axes, mut friction, mass, collider) in
        &mut players
    {
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

        motion.0.tick(&mut ctx);

        for event in motion.0.drain_events() {
            motion_messages.write(MotionMessage {
                player: entity,
                event,
            });
        }
    }
}

/// Physics tick, scheduled in `FixedUpdate` ahead of the physics step.
/// Reads the virtual clock like the logic tick so timestamps compare on one timeline.
pub(crate) fn fixed_tick_player_motion(
    time: Res<Time<Virtual>>,
    input: Res<MotionInput>,
    spatial_query: SpatialQuery,
    mut players: PlayerBodyQuery,
    mut motion_messages: MessageWriter<MotionMessage>,
) {
    for (entity, mut motion, mut transform, mut velocity, mut locked_axes, mut friction, mass, collider) in
        &mut players
    {
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

        motion.0.fixed_tick(&mut ctx);

        // Gliding can start mid-step
        for event in motion.0.drain_events() {
            motion_messages.write(MotionMessage {
                player: entity,
                event,
            });
        }
    }
}

pub(crate) fn apply_input_lock_requests(
    mut requests: MessageReader<InputLockRequest>,
    mut players: PlayerBodyQuery,
) {
    for request in requests.read() {
        for (_, mut motion, mut transform, mut velocity, mut locked_axes, mut friction, mass, collider) in
            &mut players
        {
            let mut body = AvianBody::new(
                &mut transform,
                &mut velocity,
                &mut locked_axes,
                &mut friction,
                mass,
                collider,
            );

            if request.locked {
                motion.0.lock_input(request.source, &mut body);
            } else {
                motion.0.unlock_input(request.source, &mut body);
            }
        }
    }
}
