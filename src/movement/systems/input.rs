//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::resources::{ButtonSample, MotionInput};

const JUMP_KEYS: [KeyCode; 2] = [KeyCode::Space, KeyCode::KeyK];
const DASH_KEYS: [KeyCode; 2] = [KeyCode::ShiftLeft, KeyCode::KeyJ];
const DROP_KEYS: [KeyCode; 2] = [KeyCode::KeyS, KeyCode::ArrowDown];

fn sample(keyboard: &ButtonInput<KeyCode>, keys: [KeyCode; 2]) -> ButtonSample {
    ButtonSample {
        held: keyboard.any_pressed(keys),
        just_pressed: keyboard.any_just_pressed(keys),
        just_released: keyboard.any_just_released(keys),
    }
}

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MotionInput>) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis
    let mut y = 0.0;
    if keyboard.any_pressed(DROP_KEYS) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y);
    input.jump = sample(&keyboard, JUMP_KEYS);
    input.dash = sample(&keyboard, DASH_KEYS);
    input.drop = sample(&keyboard, DROP_KEYS);
}
