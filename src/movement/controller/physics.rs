//! Fixed-step velocity shaping: friction, dash height hold and air control.

use bevy::prelude::*;

use super::MotionController;
use crate::movement::ports::MotionContext;
use crate::movement::state::since;

impl MotionController {
    /// Physics tick, run in lockstep with the physics step.
    pub fn fixed_tick(&mut self, ctx: &mut MotionContext) {
        let now = ctx.now();
        let axis_x = ctx.input.axis().x;

        self.update_friction(ctx, axis_x);

        if let Some(run) = self.state.dash {
            let position = ctx.body.position();
            if position.y < run.height {
                ctx.body.set_position(Vec2::new(position.x, run.height));
                let velocity = ctx.body.velocity();
                ctx.body.set_velocity(Vec2::new(velocity.x, 0.0));
            }
        }

        if self.can_move() {
            self.apply_movement(ctx, axis_x, now);
        }
    }

    /// Full friction while standing still on the ground so the player does
    /// not drift on slopes, none otherwise.
    fn update_friction(&self, ctx: &mut MotionContext, axis_x: f32) {
        let grounded = self.state.is_grounded();
        let friction = ctx.body.friction();

        if grounded && axis_x == 0.0 && friction == 0.0 {
            ctx.body.set_friction(1.0);
        } else if friction == 1.0 && (!grounded || axis_x != 0.0) {
            ctx.body.set_friction(0.0);
        }
    }

    fn apply_movement(&mut self, ctx: &mut MotionContext, axis_x: f32, now: f32) {
        let mut velocity = ctx.body.velocity();

        if self.state.is_grounded() {
            velocity.x = axis_x * self.tuning.move_speed;
        } else if !self.state.touching_wall {
            if velocity.y < -self.tuning.glide_trigger_fall_speed {
                self.start_gliding(ctx.input);
            }
            velocity.y = velocity.y.max(-self.tuning.maximum_fall_speed);

            velocity = if self.state.gliding {
                self.glide_movement(velocity, axis_x, now)
            } else {
                self.air_movement(velocity, axis_x, now)
            };
        } else if self.state.is_wall_sliding() && velocity.y < -self.tuning.wall_slide_speed {
            velocity.y = -self.tuning.wall_slide_speed;
        }

        ctx.body.set_velocity(velocity);
    }

    fn air_control_enabled(&self, axis_x: f32, now: f32) -> bool {
        axis_x != 0.0
            && since(self.state.timers.wall_jump, now)
                > self.tuning.air_control_delay_after_wall_jump
    }

    fn air_movement(&self, mut velocity: Vec2, axis_x: f32, now: f32) -> Vec2 {
        if self.air_control_enabled(axis_x, now) {
            velocity.x += axis_x * self.tuning.air_move_acceleration;
            if velocity.x.abs() > self.tuning.move_speed {
                velocity.x = self.tuning.move_speed * axis_x;
            }
        } else {
            velocity.x *= self.tuning.air_drag_multiplier;
        }

        velocity
    }

    fn glide_movement(&self, mut velocity: Vec2, axis_x: f32, now: f32) -> Vec2 {
        velocity.y = velocity.y.max(-self.tuning.glide_fall_speed);

        if self.air_control_enabled(axis_x, now) {
            velocity.x += axis_x * self.tuning.glide_air_move_acceleration;
            if velocity.x.abs() > self.tuning.move_speed {
                velocity.x = self.tuning.move_speed * axis_x;
            }
        } else if since(self.state.timers.bounce_pad, now) > self.tuning.bounce_drag_grace {
            // Bounce pad launches keep their horizontal speed for a moment
            velocity.x *= self.tuning.glide_air_drag_multiplier;
        }

        velocity
    }
}
