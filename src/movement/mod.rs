//! Movement domain: player motion state machine plugin wiring and exports.

mod bootstrap;
mod components;
pub mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod ports;
mod resources;
mod state;
mod systems;

pub use components::{GameLayer, Ground, Player, PlayerMotion, Wall};
pub use events::{MotionEvent, MotionMessage};
pub use ports::MotionContext;
pub use resources::{MotionInput, MotionTuning, PIXELS_PER_UNIT};
pub use state::LockSource;

pub(crate) use systems::{AvianBody, PlayerBodyQuery, SpatialProbe};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_input_lock_requests, fixed_tick_player_motion, read_input, tick_player_motion,
};

/// System sets other plugins order themselves against.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MotionSet {
    /// Logic tick in `Update`; motion messages are written here.
    Tick,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MotionTuning>()
            .init_resource::<MotionInput>()
            .add_message::<MotionMessage>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (read_input, apply_input_lock_requests, tick_player_motion)
                    .chain()
                    .in_set(MotionSet::Tick),
            )
            .add_systems(FixedUpdate, fixed_tick_player_motion);

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room)
            .add_systems(Update, dev::toggle_edit_mode_lock);
    }
}
