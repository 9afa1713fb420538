//! Movement domain: the per-character motion state carried between ticks.

use std::collections::HashSet;

use bevy::prelude::*;

/// Mutually exclusive contact stance of the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPhase {
    #[default]
    Grounded,
    Airborne,
    /// Hanging on a wall with vertical motion frozen.
    WallStuck,
    /// Descending along a wall while pressing into it.
    WallSliding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// Reasons the player's input can be locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockSource {
    Conversation,
    EditMode,
}

/// An in-progress dash.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashRun {
    pub started_at: f32,
    /// The body is never allowed below this height while dashing.
    pub height: f32,
}

/// Timestamps of the last occurrence of each timed event.
/// `None` means the event has not happened yet.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionTimers {
    pub ground_jump: Option<f32>,
    pub true_ground: Option<f32>,
    pub wall_hit: Option<f32>,
    pub wall_jump: Option<f32>,
    pub dash: Option<f32>,
    pub bounce_pad: Option<f32>,
}

/// Seconds elapsed since `stamp`, infinite if it never happened.
pub fn since(stamp: Option<f32>, now: f32) -> f32 {
    stamp.map_or(f32::INFINITY, |t| now - t)
}

/// Actions requested but not yet legal.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputQueue {
    pub jump: bool,
    pub dash: bool,
    /// Time the wall hop was queued.
    pub wall_hop: Option<f32>,
}

#[derive(Debug, Clone, Default)]
pub struct MotionState {
    pub phase: MotionPhase,
    pub touching_wall: bool,
    pub gliding: bool,
    pub dash: Option<DashRun>,
    pub facing: Facing,
    pub timers: MotionTimers,
    pub remaining_air_jumps: u8,
    pub remaining_dashes: u8,
    pub queue: InputQueue,
    pub bounce_lock: bool,
    pub input_locks: HashSet<LockSource>,
    pub last_ground_position: Vec2,
}

impl MotionState {
    pub fn new(max_air_jumps: u8, max_dashes: u8) -> Self {
        Self {
            remaining_air_jumps: max_air_jumps,
            remaining_dashes: max_dashes,
            ..default()
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.phase == MotionPhase::Grounded
    }

    pub fn is_wall_stuck(&self) -> bool {
        self.phase == MotionPhase::WallStuck
    }

    pub fn is_wall_sliding(&self) -> bool {
        self.phase == MotionPhase::WallSliding
    }

    pub fn is_dashing(&self) -> bool {
        self.dash.is_some()
    }

    pub fn is_locked_input(&self) -> bool {
        !self.input_locks.is_empty()
    }
}
