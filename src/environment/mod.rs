//! Environment domain: level pieces that interact with the player's motion.

mod bounce_pad;
mod kill_plane;
mod platform;
#[cfg(test)]
mod tests;

pub use bounce_pad::BouncePad;
pub use kill_plane::KillPlane;
pub use platform::{Platform, PlatformStyle, WobbleRng};

use bevy::prelude::*;

use crate::environment::bounce_pad::bounce_players_off_pads;
use crate::environment::kill_plane::reset_fallen_players;
use crate::environment::platform::{
    animate_platform_wobble, record_platform_rest, start_platform_wobble,
};
use crate::movement::MotionSet;

pub struct EnvironmentPlugin;

impl Plugin for EnvironmentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KillPlane>()
            .init_resource::<WobbleRng>()
            .add_systems(
                Update,
                (
                    (bounce_players_off_pads, reset_fallen_players).before(MotionSet::Tick),
                    (
                        record_platform_rest,
                        start_platform_wobble,
                        animate_platform_wobble,
                    )
                        .chain()
                        .after(MotionSet::Tick),
                ),
            );
    }
}
