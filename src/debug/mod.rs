//! Debug overlay for fast iteration: gizmo spheres for the grounded
//! overlap probe and the attack hit-test radius. Compiled in only with the
//! `dev-tools` feature.

use bevy::math::Isometry3d;
use bevy::prelude::*;

use crate::combat::AttackTuning;
use crate::movement::{AttackAnchor, GroundAnchor, MovementTuning, Player};

fn draw_probe_gizmos(
    mut gizmos: Gizmos,
    movement_tuning: Res<MovementTuning>,
    attack_tuning: Res<AttackTuning>,
    players: Query<Entity, With<Player>>,
    ground_anchors: Query<(&ChildOf, &GlobalTransform), With<GroundAnchor>>,
    attack_anchors: Query<(&ChildOf, &GlobalTransform), With<AttackAnchor>>,
) {
    for player in &players {
        for (child_of, anchor) in &ground_anchors {
            if child_of.parent() == player {
                gizmos.sphere(
                    Isometry3d::from_translation(anchor.translation()),
                    movement_tuning.ground_check_radius,
                    Color::srgb(0.3, 0.9, 0.3),
                );
            }
        }
        for (child_of, anchor) in &attack_anchors {
            if child_of.parent() == player {
                gizmos.sphere(
                    Isometry3d::from_translation(anchor.translation()),
                    attack_tuning.hit_radius,
                    Color::srgb(0.9, 0.3, 0.3),
                );
            }
        }
    }
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_probe_gizmos);
    }
}
