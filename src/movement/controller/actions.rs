//! Jump, wall hop, dash, glide, wall stick and bounce pad actions.

use bevy::prelude::*;

use super::{MotionController, UNSTICK_VELOCITY};
use crate::movement::events::MotionEvent;
use crate::movement::ports::{Action, InputSampler, MotionContext, RigidBodyHandle};
use crate::movement::state::{DashRun, MotionPhase};

impl MotionController {
    /// Ground jump, else wall jump, else air jump. Callers gate on `can_jump`.
    pub fn jump(&mut self, ctx: &mut MotionContext) {
        let now = ctx.now();
        self.state.queue.jump = false;

        if self.state.is_wall_stuck() {
            self.unstick(ctx.body);
        }
        self.stop_gliding();

        let velocity = ctx.body.velocity();

        if self.state.is_grounded() {
            self.state.phase = MotionPhase::Airborne;
            ctx.body
                .set_velocity(Vec2::new(velocity.x, self.tuning.grounded_jump_force));
            self.state.timers.ground_jump = Some(now);

            self.emit(MotionEvent::GroundJump);
        } else if self.state.touching_wall {
            self.state.facing = self.state.facing.flipped();

            let force = self.tuning.wall_jump_force;
            let direction = self.tuning.wall_jump_direction;
            ctx.body.apply_impulse(Vec2::new(
                self.state.facing.sign() * force * direction.x,
                force * direction.y,
            ));
            self.state.timers.wall_jump = Some(now);
            self.state.queue.wall_hop = None;

            self.emit(MotionEvent::WallJump);
        } else if self.state.remaining_air_jumps > 0 {
            self.state.remaining_air_jumps -= 1;
            ctx.body
                .set_velocity(Vec2::new(velocity.x, self.tuning.air_jump_force));

            debug!(
                "Air jump: air_jumps_remaining now {}",
                self.state.remaining_air_jumps
            );
            self.emit(MotionEvent::AirJump);
        } else {
            return;
        }

        self.emit(MotionEvent::Jump);
    }

    /// Lighter push off the wall, fired from the wall hop queue.
    pub fn wall_hop(&mut self, body: &mut dyn RigidBodyHandle) {
        if self.state.is_wall_stuck() {
            self.unstick(body);
        }

        self.state.facing = self.state.facing.flipped();

        let force = self.tuning.wall_hop_force;
        let direction = self.tuning.wall_hop_direction;
        body.apply_impulse(Vec2::new(
            self.state.facing.sign() * force * direction.x,
            force * direction.y,
        ));

        self.emit(MotionEvent::WallHop);
    }

    /// Flat horizontal burst in the facing direction. Callers gate on `can_dash`.
    pub fn dash(&mut self, ctx: &mut MotionContext) {
        let now = ctx.now();
        self.state.queue.dash = false;
        self.stop_gliding();

        self.state.dash = Some(DashRun {
            started_at: now,
            height: ctx.body.position().y,
        });
        self.state.timers.dash = Some(now);

        // Ground dashes are free
        if !self.state.is_grounded() {
            self.state.remaining_dashes = self.state.remaining_dashes.saturating_sub(1);
        }

        let velocity = ctx.body.velocity();
        ctx.body.set_velocity(Vec2::new(
            self.state.facing.sign() * self.tuning.dash_speed,
            velocity.y,
        ));

        self.emit(MotionEvent::Dash);
    }

    /// Holding Drop suppresses gliding.
    pub fn start_gliding(&mut self, input: &dyn InputSampler) {
        if input.held(Action::Drop) || self.state.gliding {
            return;
        }

        self.state.gliding = true;
        self.emit(MotionEvent::Glide);
    }

    pub fn stop_gliding(&mut self) {
        if !self.state.gliding {
            return;
        }

        self.state.gliding = false;
        self.emit(MotionEvent::GlideEnd);
    }

    /// Launch from a bounce pad. A dash already in progress is left running,
    /// so the player can be dashing and gliding at once.
    pub fn bounce(&mut self, ctx: &mut MotionContext, launch_velocity: Vec2) {
        self.state.bounce_lock = true;
        self.state.timers.bounce_pad = Some(ctx.now());
        self.reset_actions();
        self.start_gliding(ctx.input);

        ctx.body.set_velocity(launch_velocity);

        self.emit(MotionEvent::BouncePad);
    }

    pub(super) fn wall_stick(&mut self, body: &mut dyn RigidBodyHandle) {
        self.state.phase = MotionPhase::WallStuck;
        self.state.remaining_air_jumps = self.tuning.max_air_jumps;
        self.apply_constraints(body);
    }

    pub(super) fn unstick(&mut self, body: &mut dyn RigidBodyHandle) {
        self.state.phase = MotionPhase::Airborne;
        self.apply_constraints(body);
        body.set_velocity(UNSTICK_VELOCITY);
    }
}
