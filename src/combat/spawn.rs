//! Combat domain: demo enemy spawn.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::combat::components::{ContactDamage, Enemy, Health};
use crate::movement::GameLayer;

const ENEMY_HEALTH: i32 = 3;
const ENEMY_CONTACT_DAMAGE: i32 = 1;
const ENEMY_CONTACT_COOLDOWN: f32 = 0.6;

/// One static contact-damage enemy so the attack hit-test and the damage
/// boundary have something to act on.
pub(crate) fn spawn_demo_enemy(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        (
            Enemy,
            Health::new(ENEMY_HEALTH),
            ContactDamage::new(ENEMY_CONTACT_DAMAGE, ENEMY_CONTACT_COOLDOWN),
        ),
        Mesh3d(meshes.add(Cuboid::new(0.9, 1.4, 0.9))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.8, 0.3, 0.3),
            ..default()
        })),
        Transform::from_xyz(5.0, 0.7, 0.0),
        (
            RigidBody::Static,
            Collider::cuboid(0.9, 1.4, 0.9),
            CollisionLayers::new(GameLayer::Enemy, [GameLayer::Player]),
        ),
    ));
}
