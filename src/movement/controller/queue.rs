//! Action input handling and the queue of actions waiting to become legal.

use bevy::prelude::*;

use super::MotionController;
use crate::movement::ports::{Action, MotionContext};
use crate::movement::state::since;

impl MotionController {
    pub(super) fn handle_action_input(&mut self, ctx: &mut MotionContext, now: f32) {
        if self.state.is_locked_input() {
            return;
        }

        self.resolve_queue(ctx, now);

        let input = ctx.input;

        if input.just_pressed(Action::Jump) || self.state.queue.jump {
            if self.can_jump(ctx.body.velocity().y) {
                self.jump(ctx);
            } else {
                self.state.queue.jump = true;
            }
        } else if !self.state.is_grounded()
            && !self.state.touching_wall
            && input.just_released(Action::Jump)
        {
            // Short hop: cut the jump when the button is let go early
            let velocity = ctx.body.velocity();
            ctx.body.set_velocity(Vec2::new(
                velocity.x,
                velocity.y * self.tuning.variable_jump_height_multiplier,
            ));
        }

        if input.just_pressed(Action::Dash) || self.state.queue.dash {
            if self.can_dash(now) {
                self.dash(ctx);
            } else {
                self.state.queue.dash = true;
            }
        }

        if input.held(Action::Drop) {
            self.stop_gliding();
            if self.state.is_wall_stuck() {
                self.unstick(ctx.body);
            }
        }
    }

    /// Drops queued actions whose button was released and fires a pending
    /// wall hop once its debounce window has passed.
    fn resolve_queue(&mut self, ctx: &mut MotionContext, now: f32) {
        if self.state.queue.jump && !ctx.input.held(Action::Jump) {
            self.state.queue.jump = false;
        }

        if self.state.queue.dash && !ctx.input.held(Action::Dash) {
            self.state.queue.dash = false;
        }

        if let Some(queued_at) = self.state.queue.wall_hop {
            if !self.state.touching_wall {
                self.state.queue.wall_hop = None;
            } else if since(Some(queued_at), now) > self.tuning.wall_hop_input_queue_time {
                self.state.queue.wall_hop = None;
                self.wall_hop(ctx.body);
            }
        }
    }
}
