//! Core domain: camera, lighting, and the demo arena.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

const GROUND_SIZE: Vec3 = Vec3::new(40.0, 1.0, 4.0);

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 4.0, 14.0).looking_at(Vec3::new(0.0, 2.0, 0.0), Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 6_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.9, 0.4, 0.0)),
    ));
}

/// A single ground slab on the Ground layer. Scene dressing only; the
/// controller sees it exclusively through the grounded overlap check and
/// collision resolution.
pub(crate) fn setup_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(GROUND_SIZE.x, GROUND_SIZE.y, GROUND_SIZE.z))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.35, 0.4, 0.35),
            ..default()
        })),
        Transform::from_xyz(0.0, -GROUND_SIZE.y * 0.5, 0.0),
        RigidBody::Static,
        Collider::cuboid(GROUND_SIZE.x, GROUND_SIZE.y, GROUND_SIZE.z),
        CollisionLayers::new(GameLayer::Ground, LayerMask::ALL),
    ));
}
