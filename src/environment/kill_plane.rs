//! Environment domain: returns the player to solid ground after a fall out of the level.

use bevy::prelude::*;

use crate::movement::{AvianBody, PlayerBodyQuery};

/// Falling below `y` sends the player back to the last ground they stood on.
#[derive(Resource, Debug, Clone, Copy)]
pub struct KillPlane {
    pub y: f32,
}

impl KillPlane {
    /// True once `y` has dropped below the plane.
    pub fn has_fallen_below(&self, y: f32) -> bool {
        y < self.y
    }
}

impl Default for KillPlane {
    fn default() -> Self {
        Self { y: -1000.0 }
    }
}

pub(crate) fn reset_fallen_players(kill_plane: Res<KillPlane>, mut players: PlayerBodyQuery) {
    for (_, mut motion, mut transform, mut velocity, mut locked_axes, mut friction, mass, collider) in
        &mut players
    {
        if !kill_plane.has_fallen_below(transform.translation.y) {
            continue;
        }

        let mut body = AvianBody::new(
            &mut transform,
            &mut velocity,
            &mut locked_axes,
            &mut friction,
            mass,
            collider,
        );
        motion.0.reset_to_last_ground_position(&mut body);
    }
}
