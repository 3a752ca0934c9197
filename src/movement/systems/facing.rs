//! Movement domain: facing target selection, pivot rotation, anchor mirror.

use bevy::prelude::*;

use crate::movement::{
    AttackAnchor, FacingState, MovementTuning, Player, PlayerInput, VisualPivot,
};

pub(crate) fn update_facing_target(
    input: Res<PlayerInput>,
    mut query: Query<&mut FacingState, With<Player>>,
) {
    for mut facing in &mut query {
        facing.update_target(input.axis_x);
    }
}

/// Rotates the visual pivot toward the facing target pose: instantly when
/// turn speed is 0, otherwise at a bounded angular rate that never
/// overshoots.
pub(crate) fn rotate_to_facing(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    facings: Query<&FacingState, With<Player>>,
    mut pivots: Query<(&ChildOf, &mut Transform), With<VisualPivot>>,
) {
    for (child_of, mut transform) in &mut pivots {
        let Ok(facing) = facings.get(child_of.parent()) else {
            continue;
        };

        if tuning.turn_speed_deg <= 0.0 {
            transform.rotation = facing.target;
            continue;
        }

        let max_angle = tuning.turn_speed_deg.to_radians() * time.delta_secs();
        transform.rotation = transform.rotation.rotate_towards(facing.target, max_angle);
    }
}

/// Keeps the attack anchor on the facing side. Its offset magnitude is
/// fixed; only the sign of the lateral component flips.
pub(crate) fn mirror_attack_anchor(
    facings: Query<&FacingState, With<Player>>,
    mut anchors: Query<(&ChildOf, &AttackAnchor, &mut Transform)>,
) {
    for (child_of, anchor, mut transform) in &mut anchors {
        let Ok(facing) = facings.get(child_of.parent()) else {
            continue;
        };
        transform.translation.x = anchor.offset.x.abs() * facing.side_sign();
    }
}
