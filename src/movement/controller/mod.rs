//! Movement domain: the player motion state machine.
//!
//! [`MotionController::tick`] runs once per rendered frame and owns every
//! state transition: grounding, wall contact, dash expiry and action input.
//! [`MotionController::fixed_tick`] runs in lockstep with the physics step
//! and only shapes velocity. Both receive their collaborators through a
//! [`MotionContext`].

mod actions;
mod detection;
mod physics;
mod queue;

use bevy::prelude::*;

use crate::movement::events::{EventBus, MotionEvent};
use crate::movement::ports::{BodyConstraints, MotionContext, RigidBodyHandle};
use crate::movement::resources::MotionTuning;
use crate::movement::state::{Facing, LockSource, MotionPhase, MotionState, since};

/// Velocity given to the body when it lets go of a wall.
const UNSTICK_VELOCITY: Vec2 = Vec2::new(0.0, -3.2);

#[derive(Debug)]
pub struct MotionController {
    tuning: MotionTuning,
    state: MotionState,
    bus: EventBus,
    outbox: Vec<MotionEvent>,
}

impl MotionController {
    pub fn new(tuning: &MotionTuning) -> Self {
        Self {
            state: MotionState::new(tuning.max_air_jumps, tuning.max_dashes),
            tuning: tuning.normalized(),
            bus: EventBus::new(),
            outbox: Vec::new(),
        }
    }

    /// Logic tick: refresh contact state, then resolve action input.
    pub fn tick(&mut self, ctx: &mut MotionContext) {
        let now = ctx.now();
        let axis_x = ctx.input.axis().x;

        self.update_facing(axis_x);
        self.detect_ground(ctx, now);
        self.detect_wall(ctx, now);
        self.check_wall_stuck(ctx, axis_x, now);
        self.check_wall_sliding(ctx.body.velocity().y, axis_x);
        self.check_dash_expiry(now);
        self.check_bounce_end(now);

        self.handle_action_input(ctx, now);
    }

    /// Registry for synchronous event subscribers.
    pub fn events(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    /// Takes every event emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<MotionEvent> {
        std::mem::take(&mut self.outbox)
    }

    pub fn phase(&self) -> MotionPhase {
        self.state.phase
    }

    pub fn is_grounded(&self) -> bool {
        self.state.is_grounded()
    }

    pub fn is_dashing(&self) -> bool {
        self.state.is_dashing()
    }

    pub fn is_touching_wall(&self) -> bool {
        self.state.touching_wall
    }

    pub fn is_wall_stuck(&self) -> bool {
        self.state.is_wall_stuck()
    }

    pub fn is_wall_sliding(&self) -> bool {
        self.state.is_wall_sliding()
    }

    pub fn is_gliding(&self) -> bool {
        self.state.gliding
    }

    pub fn is_locked_input(&self) -> bool {
        self.state.is_locked_input()
    }

    pub fn is_facing_right(&self) -> bool {
        self.state.facing == Facing::Right
    }

    pub fn remaining_air_jumps(&self) -> u8 {
        self.state.remaining_air_jumps
    }

    pub fn remaining_dashes(&self) -> u8 {
        self.state.remaining_dashes
    }

    pub fn jump_queued(&self) -> bool {
        self.state.queue.jump
    }

    pub fn dash_queued(&self) -> bool {
        self.state.queue.dash
    }

    pub fn wall_hop_queued(&self) -> bool {
        self.state.queue.wall_hop.is_some()
    }

    pub fn is_bounce_locked(&self) -> bool {
        self.state.bounce_lock
    }

    pub fn last_ground_position(&self) -> Vec2 {
        self.state.last_ground_position
    }

    // -------------------------------------------------------------------------
    // Gates
    // -------------------------------------------------------------------------

    pub fn can_move(&self) -> bool {
        !self.state.is_dashing() && !self.state.is_locked_input() && !self.state.bounce_lock
    }

    pub fn can_jump(&self, vertical_velocity: f32) -> bool {
        (self.state.is_grounded() || self.state.touching_wall || self.can_air_jump())
            && vertical_velocity < self.tuning.jump_rise_limit
            && !self.state.bounce_lock
    }

    pub fn can_air_jump(&self) -> bool {
        !self.state.is_grounded()
            && !self.state.touching_wall
            && self.state.remaining_air_jumps > 0
            && !self.state.bounce_lock
    }

    pub fn can_dash(&self, now: f32) -> bool {
        !self.state.is_dashing()
            && !self.state.is_wall_stuck()
            && (self.state.remaining_dashes > 0 || self.state.is_grounded())
            && since(self.state.timers.dash, now) > self.tuning.dash_cooldown
            && !self.state.bounce_lock
    }

    fn moving_into_wall(&self, axis_x: f32) -> bool {
        self.state.touching_wall && axis_x * self.state.facing.sign() > 0.0
    }

    fn moving_away_from_wall(&self, axis_x: f32) -> bool {
        self.state.touching_wall && axis_x * self.state.facing.sign() < 0.0
    }

    // -------------------------------------------------------------------------
    // Input lock
    // -------------------------------------------------------------------------

    /// Freezes the body and suspends action input until every source is released.
    pub fn lock_input(&mut self, source: LockSource, body: &mut dyn RigidBodyHandle) {
        if self.state.input_locks.insert(source) {
            info!("Player input locked by {:?}", source);
        }
        self.apply_constraints(body);
    }

    pub fn unlock_input(&mut self, source: LockSource, body: &mut dyn RigidBodyHandle) {
        if self.state.input_locks.remove(&source) {
            info!("Player input lock {:?} released", source);
        }
        self.apply_constraints(body);
    }

    fn apply_constraints(&self, body: &mut dyn RigidBodyHandle) {
        let constraints = if self.state.is_locked_input() {
            BodyConstraints::AllLocked
        } else if self.state.is_wall_stuck() {
            BodyConstraints::RotationAndVerticalLocked
        } else {
            BodyConstraints::RotationLocked
        };
        body.set_constraints(constraints);
    }

    // -------------------------------------------------------------------------
    // Utilities
    // -------------------------------------------------------------------------

    /// Moves the body back to where it last stood on solid ground.
    pub fn reset_to_last_ground_position(&mut self, body: &mut dyn RigidBodyHandle) {
        body.set_position(self.state.last_ground_position);
        body.set_velocity(Vec2::ZERO);
        info!(
            "Player reset to last ground position {:?}",
            self.state.last_ground_position
        );
    }

    fn reset_actions(&mut self) {
        self.state.remaining_air_jumps = self.tuning.max_air_jumps;
        self.state.remaining_dashes = self.tuning.max_dashes;
    }

    fn emit(&mut self, event: MotionEvent) {
        debug!("Motion event: {:?}", event);
        self.bus.publish(&event);
        self.outbox.push(event);
    }
}
