//! Movement domain: player spawn and hierarchy setup.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::anim::AnimationBridge;
use crate::combat::{AttackTimers, Health};
use crate::movement::{
    AttackAnchor, DashState, FacingState, GameLayer, GroundAnchor, MovementState, Player,
    VisualPivot,
};

const PLAYER_HALF_HEIGHT: f32 = 0.9;
const ATTACK_ANCHOR_OFFSET: Vec3 = Vec3::new(0.7, 0.2, 0.0);
const PLAYER_MAX_HEALTH: i32 = 5;

/// Spawns the player: a dynamic body with rotation and depth translation
/// frozen, a ground-check anchor at the feet, a visual pivot that carries
/// the mesh and rotates for facing, and an attack anchor on the facing
/// side. These anchors are the hard preconditions of the controller; every
/// downstream system finds them through the hierarchy.
pub(crate) fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    existing: Query<Entity, With<Player>>,
) {
    if !existing.is_empty() {
        warn!("Player already exists, skipping spawn");
        return;
    }

    // Facing right = the pivot's spawn orientation.
    let pivot_transform = Transform::default();
    let facing = FacingState::new(pivot_transform.rotation);

    commands
        .spawn((
            // Identity & controller state
            (
                Player,
                MovementState::default(),
                DashState::default(),
                facing,
                AttackTimers::default(),
                Health::new(PLAYER_MAX_HEALTH),
                AnimationBridge::default(),
            ),
            Transform::from_xyz(0.0, 2.0, 0.0),
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::capsule(0.35, PLAYER_HALF_HEIGHT * 2.0 - 0.7),
                LockedAxes::ROTATION_LOCKED.lock_translation_z(),
                LinearVelocity::default(),
                GravityScale(1.0),
                Friction::new(0.0),
                CollisionLayers::new(
                    GameLayer::Player,
                    [GameLayer::Ground, GameLayer::Enemy, GameLayer::Sensor],
                ),
            ),
        ))
        .with_children(|parent| {
            parent
                .spawn((VisualPivot, pivot_transform, Visibility::default()))
                .with_children(|pivot| {
                    pivot.spawn((
                        Mesh3d(meshes.add(Capsule3d::new(0.35, PLAYER_HALF_HEIGHT * 2.0 - 0.7))),
                        MeshMaterial3d(materials.add(StandardMaterial {
                            base_color: Color::srgb(0.9, 0.9, 0.9),
                            ..default()
                        })),
                        Transform::default(),
                    ));
                    // A nose marker so the facing flip is visible on a
                    // rotationally symmetric capsule.
                    pivot.spawn((
                        Mesh3d(meshes.add(Cuboid::new(0.3, 0.15, 0.15))),
                        MeshMaterial3d(materials.add(StandardMaterial {
                            base_color: Color::srgb(0.9, 0.4, 0.3),
                            ..default()
                        })),
                        Transform::from_xyz(0.35, 0.5, 0.0),
                    ));
                });
            parent.spawn((
                GroundAnchor,
                Transform::from_xyz(0.0, -PLAYER_HALF_HEIGHT, 0.0),
            ));
            parent.spawn((
                AttackAnchor {
                    offset: ATTACK_ANCHOR_OFFSET,
                },
                Transform::from_translation(ATTACK_ANCHOR_OFFSET),
            ));
        });

    info!(
        "Spawned player: max_health={}, attack anchor at {:?}",
        PLAYER_MAX_HEALTH, ATTACK_ANCHOR_OFFSET
    );
}
