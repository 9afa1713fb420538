//! Range checks for designer-supplied motion tuning.

use crate::movement::MotionTuning;

/// A tuning value outside the range the controller is designed for.
#[derive(Debug)]
pub struct TuningRangeError {
    pub field: &'static str,
    pub value: f32,
    pub expected: String,
}

impl std::fmt::Display for TuningRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Motion tuning '{}' is {}, expected {}",
            self.field, self.value, self.expected
        )
    }
}

/// Helper macro for checking a field lies in an inclusive range
macro_rules! check_range {
    ($errors:expr, $tuning:expr, $field:ident, $min:expr, $max:expr) => {
        let value = $tuning.$field as f32;
        if !($min..=$max).contains(&value) {
            $errors.push(TuningRangeError {
                field: stringify!($field),
                value,
                expected: format!("{}..={}", $min, $max),
            });
        }
    };
}

/// Helper macro for checking a direction can be normalized
macro_rules! check_direction {
    ($errors:expr, $tuning:expr, $field:ident) => {
        let length = $tuning.$field.length();
        if !(length.is_finite() && length > 0.0) {
            $errors.push(TuningRangeError {
                field: stringify!($field),
                value: length,
                expected: "a non-zero direction".to_string(),
            });
        }
    };
}

/// Validate every tuning field against its designed range.
/// Returns a list of errors, empty if the tuning is usable.
pub fn validate_tuning(tuning: &MotionTuning) -> Vec<TuningRangeError> {
    let mut errors = Vec::new();

    // Movement
    check_range!(errors, tuning, move_speed, 160.0, 480.0);
    check_range!(errors, tuning, air_move_acceleration, 0.0, 64.0);
    check_range!(errors, tuning, air_drag_multiplier, 0.0, 1.0);
    check_range!(errors, tuning, maximum_fall_speed, 640.0, 2560.0);
    check_range!(errors, tuning, gravity, 0.0, 5000.0);

    // Jump
    check_range!(errors, tuning, ground_probe_distance, 0.01, 32.0);
    check_range!(errors, tuning, grounded_jump_force, 0.0, 960.0);
    check_range!(errors, tuning, air_jump_force, 0.0, 960.0);
    check_range!(errors, tuning, variable_jump_height_multiplier, 0.0, 1.0);
    check_range!(errors, tuning, max_air_jumps, 0.0, 3.0);
    check_range!(errors, tuning, coyote_time, 0.05, 0.3);
    check_range!(errors, tuning, jump_rise_limit, 0.0, 960.0);

    // Wall
    check_range!(errors, tuning, wall_slide_speed, 0.0, 160.0);
    check_range!(errors, tuning, wall_check_distance, 0.0, 64.0);
    check_range!(errors, tuning, wall_hop_force, 0.0, 960.0);
    check_direction!(errors, tuning, wall_hop_direction);
    check_range!(errors, tuning, wall_hop_input_queue_time, 0.0, 0.5);
    check_range!(errors, tuning, wall_jump_force, 0.0, 1920.0);
    check_direction!(errors, tuning, wall_jump_direction);
    check_range!(errors, tuning, wall_stick_time, 0.0, 5.0);
    check_range!(errors, tuning, air_control_delay_after_wall_jump, 0.0, 2.0);

    // Dash
    check_range!(errors, tuning, dash_speed, 0.0, 960.0);
    check_range!(errors, tuning, dash_duration, 0.0, 2.0);
    check_range!(errors, tuning, dash_cooldown, 0.0, 2.0);
    check_range!(errors, tuning, max_dashes, 0.0, 3.0);

    // Glide
    check_range!(errors, tuning, glide_trigger_fall_speed, 0.0, 1280.0);
    check_range!(errors, tuning, glide_fall_speed, 0.0, 640.0);
    check_range!(errors, tuning, glide_air_move_acceleration, 0.0, 64.0);
    check_range!(errors, tuning, glide_air_drag_multiplier, 0.0, 1.0);

    // Bounce pad
    check_range!(errors, tuning, bounce_lock_time, 0.0, 5.0);
    check_range!(errors, tuning, bounce_drag_grace, 0.0, 5.0);

    errors
}
