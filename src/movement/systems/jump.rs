//! Movement domain: jump handling.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{DashState, MovementState, MovementTuning, Player, PlayerInput};

/// Discrete jump-press handler. The body has unit mass, so zeroing vertical
/// velocity and applying the impulse collapses into one assignment.
pub(crate) fn handle_jump(
    input: Res<PlayerInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &DashState, &mut LinearVelocity), With<Player>>,
) {
    if !input.jump_pressed {
        return;
    }

    for (mut state, dash, mut velocity) in &mut query {
        if state.try_jump(tuning.jump_budget(), dash.is_active()) {
            velocity.y = tuning.jump_impulse;
            debug!("Jump: jumps_used={}", state.jumps_used);
        }
    }
}
