//! Combat domain: attack tuning.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct AttackTuning {
    /// Seconds between accepted attack presses.
    pub cooldown: f32,
    /// When set, an accepted attack opens a movement lock window.
    pub lock_during_attack: bool,
    pub lock_duration: f32,
    /// Delay from the accepted press to the one-shot hit-test.
    pub hit_delay: f32,
    /// Radius of the hit-test sphere at the attack anchor.
    pub hit_radius: f32,
    /// Damage pips forwarded per hit-test candidate.
    pub damage: i32,
}

impl Default for AttackTuning {
    fn default() -> Self {
        Self {
            cooldown: 0.35,
            lock_during_attack: true,
            lock_duration: 0.25,
            hit_delay: 0.12,
            hit_radius: 0.6,
            damage: 1,
        }
    }
}
