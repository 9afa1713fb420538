//! Movement domain: system modules for locomotion updates.

pub(crate) mod bridge;
pub(crate) mod input;
pub(crate) mod motion;

pub(crate) use bridge::{AvianBody, PlayerBodyQuery, SpatialProbe};
pub(crate) use input::read_input;
pub(crate) use motion::{apply_input_lock_requests, fixed_tick_player_motion, tick_player_motion};
