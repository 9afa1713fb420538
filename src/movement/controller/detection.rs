//! Contact detection and the per-frame state checks.

use bevy::prelude::*;

use super::MotionController;
use crate::movement::events::MotionEvent;
use crate::movement::ports::{MotionContext, ProbeLayer};
use crate::movement::state::{Facing, MotionPhase, since};

impl MotionController {
    /// Facing follows the movement axis unless the player is on a wall.
    pub(super) fn update_facing(&mut self, axis_x: f32) {
        if self.state.is_wall_sliding() || self.state.is_wall_stuck() {
            return;
        }

        if axis_x < 0.0 {
            self.state.facing = Facing::Left;
        } else if axis_x > 0.0 {
            self.state.facing = Facing::Right;
        }
    }

    /// Three short downward probes from the feet, with coyote time on top.
    pub(super) fn detect_ground(&mut self, ctx: &mut MotionContext, now: f32) {
        let position = ctx.body.position();
        let half = ctx.body.half_extents();
        let feet = position - Vec2::new(0.0, half.y);
        let distance = self.tuning.ground_probe_distance;

        let surface = [0.0, half.x, -half.x].into_iter().find_map(|offset| {
            ctx.physics.cast_ray(
                feet + Vec2::new(offset, 0.0),
                Dir2::NEG_Y,
                distance,
                ProbeLayer::Ground,
            )
        });

        let was_grounded = self.state.is_grounded();
        let coyote_time = self.tuning.coyote_time;
        let since_ground_jump = since(self.state.timers.ground_jump, now);

        // A rising body passing through a platform never counts as grounded.
        let grounded = match surface {
            Some(surface) if ctx.body.velocity().y <= 0.0 => {
                if since_ground_jump > coyote_time {
                    self.state.timers.true_ground = Some(now);
                    self.state.last_ground_position = position;

                    if !was_grounded {
                        self.land(ctx, surface);
                    }
                    true
                } else {
                    // Still inside the window of the jump that just left this surface
                    false
                }
            }
            _ => {
                since(self.state.timers.true_ground, now) < coyote_time
                    && since_ground_jump > coyote_time
            }
        };

        if grounded {
            self.state.phase = MotionPhase::Grounded;
        } else if was_grounded {
            self.state.phase = MotionPhase::Airborne;
        }
    }

    fn land(&mut self, ctx: &mut MotionContext, surface: Entity) {
        self.reset_actions();

        let was_sliding = self.state.is_wall_sliding();
        if was_sliding {
            self.state.facing = self.state.facing.flipped();
        }
        if self.state.is_wall_stuck() {
            self.unstick(ctx.body);
        }
        self.stop_gliding();

        self.state.phase = MotionPhase::Grounded;
        debug!(
            "Landed: air_jumps_remaining={}, dashes_remaining={}",
            self.state.remaining_air_jumps, self.state.remaining_dashes
        );
        self.emit(MotionEvent::Landed { surface });

        if was_sliding {
            self.emit(MotionEvent::WallSlideEnd);
        }
    }

    /// Front and back rays from the body center. A fresh airborne contact sticks.
    pub(super) fn detect_wall(&mut self, ctx: &mut MotionContext, now: f32) {
        let origin = ctx.body.position();
        let distance = self.tuning.wall_check_distance;
        let (front, back) = match self.state.facing {
            Facing::Right => (Dir2::X, Dir2::NEG_X),
            Facing::Left => (Dir2::NEG_X, Dir2::X),
        };

        let front_hit = ctx
            .physics
            .cast_ray(origin, front, distance, ProbeLayer::Wall)
            .is_some();
        let back_hit = ctx
            .physics
            .cast_ray(origin, back, distance, ProbeLayer::Wall)
            .is_some();
        let touching = front_hit || back_hit;

        if !self.state.is_grounded() && touching && !self.state.touching_wall {
            self.stop_gliding();

            // Hitting a wall behind means the player turned into it
            if back_hit {
                self.state.facing = self.state.facing.flipped();
            }

            self.state.timers.wall_hit = Some(now);
            self.wall_stick(ctx.body);
            self.emit(MotionEvent::WallHit);
        }

        self.state.touching_wall = touching;

        if !touching && self.state.is_wall_stuck() {
            self.unstick(ctx.body);
        }
    }

    /// Releases the wall once the stick time is up, queuing a hop unless the
    /// player is pressing into the wall. Pressing away queues a hop early.
    pub(super) fn check_wall_stuck(&mut self, ctx: &mut MotionContext, axis_x: f32, now: f32) {
        if !self.state.is_wall_stuck() {
            return;
        }

        if since(self.state.timers.wall_hit, now) > self.tuning.wall_stick_time {
            self.unstick(ctx.body);

            if !self.moving_into_wall(axis_x) && self.state.queue.wall_hop.is_none() {
                self.state.queue.wall_hop = Some(now);
            }
        }

        if self.moving_away_from_wall(axis_x) && self.state.queue.wall_hop.is_none() {
            self.state.queue.wall_hop = Some(now);
        }
    }

    pub(super) fn check_wall_sliding(&mut self, vertical_velocity: f32, axis_x: f32) {
        let was_sliding = self.state.is_wall_sliding();
        let sliding = matches!(
            self.state.phase,
            MotionPhase::Airborne | MotionPhase::WallSliding
        ) && self.state.touching_wall
            && vertical_velocity <= 0.0
            && self.moving_into_wall(axis_x);

        if sliding && !was_sliding {
            self.state.phase = MotionPhase::WallSliding;
            self.emit(MotionEvent::WallSlide);
        } else if !sliding && was_sliding {
            self.state.phase = MotionPhase::Airborne;
            self.emit(MotionEvent::WallSlideEnd);
        }
    }

    /// A dash lasts exactly `dash_duration`; no event marks its end.
    pub(super) fn check_dash_expiry(&mut self, now: f32) {
        let expired = self
            .state
            .dash
            .is_some_and(|run| now - run.started_at >= self.tuning.dash_duration);
        if expired {
            self.state.dash = None;
        }
    }

    pub(super) fn check_bounce_end(&mut self, now: f32) {
        if self.state.bounce_lock
            && (since(self.state.timers.bounce_pad, now) > self.tuning.bounce_lock_time
                || self.state.is_grounded())
            && !self.state.is_locked_input()
        {
            self.state.bounce_lock = false;
        }
    }
}
