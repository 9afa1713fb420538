//! Core domain: cross-domain requests.

use bevy::ecs::message::Message;

use crate::movement::LockSource;

/// Locks or releases player input on behalf of `source`.
/// Written by whichever system runs a conversation or edit mode.
#[derive(Debug, Clone, Copy)]
pub struct InputLockRequest {
    pub source: LockSource,
    pub locked: bool,
}

impl Message for InputLockRequest {}
