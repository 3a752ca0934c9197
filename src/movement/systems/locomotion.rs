//! Movement domain: the fixed-tick velocity arbiter.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::combat::AttackTimers;
use crate::movement::{DashState, MovementTuning, Player, PlayerInput};

/// One fixed tick of velocity ownership, in strict priority order: an active
/// dash owns the body, then an attack lock pins it in place, then normal
/// locomotion applies the input target. Horizontal and depth velocity are
/// always written here; vertical velocity belongs to gravity and the jump
/// impulse.
pub(crate) fn drive_velocity(
    time: Res<Time>,
    input: Res<PlayerInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &mut DashState,
            &AttackTimers,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (mut dash, attack, mut velocity, mut gravity) in &mut query {
        if dash.is_active() {
            if dash.sustain(dt) {
                // Re-assert every tick so nothing else can overwrite the
                // dash velocity within the same step.
                velocity.x = dash.speed * dash.direction;
                velocity.z = 0.0;
            } else {
                dash.end();
                gravity.0 = dash.stashed_gravity;
                // Resume the locomotion target on this tick, not the next.
                velocity.x = input.axis_x * tuning.move_speed;
                velocity.z = 0.0;
                debug!("Dash end: traveled={:.3}", dash.traveled);
            }
            continue;
        }

        if attack.locked {
            velocity.x = 0.0;
            velocity.z = 0.0;
            continue;
        }

        velocity.x = input.axis_x * tuning.move_speed;
        velocity.z = 0.0;
    }
}
