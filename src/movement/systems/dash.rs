//! Movement domain: dash activation.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{DashState, MovementState, MovementTuning, Player, PlayerInput};

/// Frame-tick dash handler. Mirrors the hold flag every frame and, on a
/// press edge, runs the start gates (cooldown deadline, not already active,
/// air-dash budget). A started dash stashes and disables gravity and writes
/// its velocity immediately rather than waiting for the next fixed tick.
pub(crate) fn handle_dash_press(
    time: Res<Time>,
    input: Res<PlayerInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &MovementState,
            &mut DashState,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
) {
    for (state, mut dash, mut velocity, mut gravity) in &mut query {
        dash.held = input.dash_held;

        if !input.dash_pressed {
            continue;
        }

        let now = time.elapsed_secs_f64();
        let started = dash.try_start(
            now,
            state.grounded,
            input.axis_x,
            state.last_move_sign,
            tuning.dash_preset(),
            tuning.dash_cooldown,
        );

        if started {
            dash.stashed_gravity = gravity.0;
            gravity.0 = 0.0;
            velocity.x = dash.speed * dash.direction;
            velocity.z = 0.0;
            debug!(
                "Dash start: dir={}, speed={}, max_distance={}, air={}",
                dash.direction, dash.speed, dash.max_distance, !state.grounded
            );
        }
    }
}
