//! Combat domain: plugin wiring and public exports.

mod components;
mod events;
mod resources;
mod spawn;
pub(crate) mod systems;


pub use components::{AttackTimers, ContactDamage, Enemy, Health};
pub use events::{AttackTriggered, DamageEvent, DeathEvent};
pub use resources::AttackTuning;

use bevy::prelude::*;

use crate::combat::spawn::spawn_demo_enemy;
use crate::combat::systems::{
    apply_damage, clear_expired_locks, detect_contact_hits, handle_attack_press, process_deaths,
    run_due_hit_tests,
};
use crate::movement::FrameTickSet;
use crate::movement::systems::handle_dash_press;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AttackTuning>()
            .add_message::<DamageEvent>()
            .add_message::<DeathEvent>()
            .add_message::<AttackTriggered>()
            .add_systems(Startup, spawn_demo_enemy)
            .add_systems(
                Update,
                // A press of dash and attack on the same frame resolves in
                // dash's favor: the attack gate must see the dash active.
                handle_attack_press
                    .in_set(FrameTickSet::Act)
                    .after(handle_dash_press),
            )
            .add_systems(
                Update,
                (clear_expired_locks, run_due_hit_tests)
                    .chain()
                    .in_set(FrameTickSet::Resolve),
            )
            .add_systems(
                Update,
                (detect_contact_hits, apply_damage, process_deaths).chain(),
            );
    }
}
