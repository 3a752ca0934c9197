//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// A candidate damage application. The receiving entity's `Health` decides
/// clamping and death on its own.
#[derive(Debug)]
pub struct DamageEvent {
    pub source: Entity,
    pub target: Entity,
    pub amount: i32,
}

impl Message for DamageEvent {}

#[derive(Debug)]
pub struct DeathEvent {
    pub entity: Entity,
}

impl Message for DeathEvent {}

/// One-shot animation trigger emitted when an attack press is accepted.
#[derive(Debug)]
pub struct AttackTriggered {
    pub attacker: Entity,
}

impl Message for AttackTriggered {}
