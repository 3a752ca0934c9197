//! Movement domain: input sampling for the player controller.

use bevy::prelude::*;

use crate::movement::{FACING_DEAD_ZONE, MovementState, Player, PlayerInput};

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<PlayerInput>) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    input.axis_x = x;
    input.jump_pressed =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    input.dash_pressed =
        keyboard.just_pressed(KeyCode::ShiftLeft) || keyboard.just_pressed(KeyCode::KeyJ);
    input.dash_held = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::KeyJ);
    input.attack_pressed =
        keyboard.just_pressed(KeyCode::KeyZ) || keyboard.just_pressed(KeyCode::KeyU);
}

/// Remembers the sign of the latest non-negligible horizontal input so a
/// dash pressed on a neutral stick still has a direction.
pub(crate) fn track_last_move_sign(
    input: Res<PlayerInput>,
    mut query: Query<&mut MovementState, With<Player>>,
) {
    if input.axis_x.abs() <= FACING_DEAD_ZONE {
        return;
    }
    for mut state in &mut query {
        state.last_move_sign = input.axis_x.signum();
    }
}
