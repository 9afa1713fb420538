//! Content domain: data-driven motion tuning.

mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use loader::{TuningLoadError, load_motion_tuning, parse_motion_tuning};
pub use validation::{TuningRangeError, validate_tuning};

use avian2d::prelude::*;
use bevy::prelude::*;
use std::path::Path;

use crate::movement::MotionTuning;

/// Tuning file, relative to the working directory.
pub const MOTION_TUNING_PATH: &str = "assets/data/motion_tuning.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        // Runs before Startup so the player spawns with the loaded values
        app.add_systems(PreStartup, load_tuning);
    }
}

fn load_tuning(mut commands: Commands) {
    let tuning = resolve_tuning(load_motion_tuning(Path::new(MOTION_TUNING_PATH)));

    commands.insert_resource(Gravity(Vec2::NEG_Y * tuning.gravity));
    commands.insert_resource(tuning);
}

/// Falls back to defaults when the file is missing, malformed or out of range.
pub fn resolve_tuning(loaded: Result<MotionTuning, TuningLoadError>) -> MotionTuning {
    let tuning = match loaded {
        Ok(tuning) => tuning,
        Err(e) => {
            warn!("{}; using default motion tuning", e);
            return MotionTuning::default();
        }
    };

    let errors = validate_tuning(&tuning);
    if errors.is_empty() {
        info!(
            "Loaded motion tuning: jump height {:.0}px, {} air jumps, {} dashes",
            tuning.ground_jump_height(),
            tuning.max_air_jumps,
            tuning.max_dashes
        );
        return tuning;
    }

    for error in &errors {
        warn!("{}", error);
    }
    warn!(
        "Motion tuning has {} invalid values; using defaults",
        errors.len()
    );
    MotionTuning::default()
}
