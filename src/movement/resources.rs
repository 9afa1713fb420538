//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::ports::{Action, InputSampler};

/// Pixels per world unit used when converting designer values.
pub const PIXELS_PER_UNIT: f32 = 32.0;

/// Every tunable number the motion controller reads.
///
/// Distances and speeds are in pixels, durations in seconds. Valid ranges are
/// enforced by `content::validate_tuning` when the tuning file is loaded.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionTuning {
    // Movement
    /// Ground speed and the cap on horizontal air speed.
    pub move_speed: f32,
    /// Horizontal speed added per physics step while airborne with input.
    pub air_move_acceleration: f32,
    /// Horizontal velocity multiplier per physics step while airborne without input.
    pub air_drag_multiplier: f32,
    pub maximum_fall_speed: f32,
    pub gravity: f32,

    // Jump
    /// Length of the three downward ground probes.
    pub ground_probe_distance: f32,
    pub grounded_jump_force: f32,
    pub air_jump_force: f32,
    /// Vertical velocity multiplier applied when jump is released mid-rise.
    pub variable_jump_height_multiplier: f32,
    pub max_air_jumps: u8,
    pub coyote_time: f32,
    /// Jumps are refused while rising faster than this.
    pub jump_rise_limit: f32,

    // Wall
    pub wall_slide_speed: f32,
    /// Length of the front and back wall rays, measured from the body center.
    pub wall_check_distance: f32,
    pub wall_hop_force: f32,
    pub wall_hop_direction: Vec2,
    /// Debounce between queuing a wall hop and performing it.
    pub wall_hop_input_queue_time: f32,
    pub wall_jump_force: f32,
    pub wall_jump_direction: Vec2,
    /// How long the player hangs on a wall before sliding or hopping.
    pub wall_stick_time: f32,
    pub air_control_delay_after_wall_jump: f32,

    // Dash
    pub dash_speed: f32,
    pub dash_duration: f32,
    pub dash_cooldown: f32,
    pub max_dashes: u8,

    // Glide
    /// Falling faster than this starts a glide.
    pub glide_trigger_fall_speed: f32,
    pub glide_fall_speed: f32,
    pub glide_air_move_acceleration: f32,
    pub glide_air_drag_multiplier: f32,

    // Bounce pad
    /// Upper bound on how long a bounce pad suppresses actions.
    pub bounce_lock_time: f32,
    /// Glide drag is skipped for this long after a bounce.
    pub bounce_drag_grace: f32,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            move_speed: 320.0,
            air_move_acceleration: 25.6,
            air_drag_multiplier: 0.95,
            maximum_fall_speed: 1280.0,
            gravity: 1800.0,
            ground_probe_distance: 3.2,
            grounded_jump_force: 640.0,
            air_jump_force: 448.0,
            variable_jump_height_multiplier: 0.5,
            max_air_jumps: 1,
            coyote_time: 0.1,
            jump_rise_limit: 160.0,
            wall_slide_speed: 64.0,
            wall_check_distance: 16.0,
            wall_hop_force: 320.0,
            wall_hop_direction: Vec2::new(1.0, 0.5),
            wall_hop_input_queue_time: 0.1,
            wall_jump_force: 640.0,
            wall_jump_direction: Vec2::new(1.0, 2.0),
            wall_stick_time: 1.5,
            air_control_delay_after_wall_jump: 0.5,
            dash_speed: 640.0,
            dash_duration: 0.2,
            dash_cooldown: 1.0,
            max_dashes: 1,
            glide_trigger_fall_speed: 320.0,
            glide_fall_speed: 128.0,
            glide_air_move_acceleration: 25.6,
            glide_air_drag_multiplier: 0.95,
            bounce_lock_time: 0.75,
            bounce_drag_grace: 0.5,
        }
    }
}

impl MotionTuning {
    /// Copy with the wall hop and wall jump directions normalized.
    /// Zero directions are left untouched.
    pub fn normalized(&self) -> Self {
        Self {
            wall_hop_direction: self.wall_hop_direction.normalize_or_zero(),
            wall_jump_direction: self.wall_jump_direction.normalize_or_zero(),
            ..self.clone()
        }
    }

    /// Peak height of a ground jump under the configured gravity: h = v² / 2g
    pub fn ground_jump_height(&self) -> f32 {
        if self.gravity <= 0.0 {
            return f32::INFINITY;
        }
        self.grounded_jump_force * self.grounded_jump_force / (2.0 * self.gravity)
    }
}

/// State of one action button for the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonSample {
    pub held: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}

/// Input snapshot written once per frame by `read_input`.
#[derive(Resource, Debug, Default)]
pub struct MotionInput {
    pub axis: Vec2,
    pub jump: ButtonSample,
    pub dash: ButtonSample,
    pub drop: ButtonSample,
}

impl MotionInput {
    fn button(&self, action: Action) -> &ButtonSample {
        match action {
            Action::Jump => &self.jump,
            Action::Dash => &self.dash,
            Action::Drop => &self.drop,
        }
    }
}

impl InputSampler for MotionInput {
    fn axis(&self) -> Vec2 {
        self.axis
    }

    fn held(&self, action: Action) -> bool {
        self.button(action).held
    }

    fn just_pressed(&self, action: Action) -> bool {
        self.button(action).just_pressed
    }

    fn just_released(&self, action: Action) -> bool {
        self.button(action).just_released
    }
}
