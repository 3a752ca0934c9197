//! Combat domain: attack trigger, deadline sweeps, and damage application.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::components::{AttackTimers, ContactDamage, Enemy, Health};
use crate::combat::events::{AttackTriggered, DamageEvent, DeathEvent};
use crate::combat::resources::AttackTuning;
use crate::movement::{AttackAnchor, DashState, GameLayer, Player, PlayerInput};

/// Discrete attack-press handler. An accepted press arms the cooldown, the
/// optional lock window, and the delayed hit-test, and emits the one-shot
/// animation trigger.
pub(crate) fn handle_attack_press(
    time: Res<Time>,
    input: Res<PlayerInput>,
    tuning: Res<AttackTuning>,
    mut attack_events: MessageWriter<AttackTriggered>,
    mut query: Query<(Entity, &DashState, &mut AttackTimers), With<Player>>,
) {
    if !input.attack_pressed {
        return;
    }

    let now = time.elapsed_secs_f64();
    for (entity, dash, mut timers) in &mut query {
        if timers.try_trigger(now, dash.is_active(), &tuning) {
            attack_events.write(AttackTriggered { attacker: entity });
            debug!(
                "Attack: cooldown until {:.2}, hit-test at {:.2}",
                timers.next_allowed,
                now + tuning.hit_delay as f64
            );
        }
    }
}

/// Frame-tick sweep over the lock deadline. An expired lock is cleared at
/// the first tick at or past `lock_until`.
pub(crate) fn clear_expired_locks(
    time: Res<Time>,
    mut query: Query<&mut AttackTimers, With<Player>>,
) {
    let now = time.elapsed_secs_f64();
    for mut timers in &mut query {
        timers.clear_expired_lock(now);
    }
}

/// Frame-tick sweep over scheduled hit-tests. A due hit-test queries the
/// enemy layer within the configured radius of the attack anchor and
/// forwards each candidate as a damage event. Without an anchor the test
/// silently no-ops; the deadline is consumed either way.
pub(crate) fn run_due_hit_tests(
    time: Res<Time>,
    tuning: Res<AttackTuning>,
    spatial_query: SpatialQuery,
    mut damage_events: MessageWriter<DamageEvent>,
    mut players: Query<(Entity, &mut AttackTimers), With<Player>>,
    anchors: Query<(&ChildOf, &GlobalTransform), With<AttackAnchor>>,
) {
    let now = time.elapsed_secs_f64();
    let enemy_filter = SpatialQueryFilter::from_mask(GameLayer::Enemy);

    for (player, mut timers) in &mut players {
        if !timers.take_due_hit(now) {
            continue;
        }

        let Some((_, anchor)) = anchors.iter().find(|(c, _)| c.parent() == player) else {
            continue;
        };

        let hits = spatial_query.shape_intersections(
            &Collider::sphere(tuning.hit_radius),
            anchor.translation(),
            Quat::IDENTITY,
            &enemy_filter,
        );

        debug!("Hit-test: {} candidate(s) at {:?}", hits.len(), anchor.translation());

        for target in hits {
            damage_events.write(DamageEvent {
                source: player,
                target,
                amount: tuning.damage,
            });
        }
    }
}

/// Enemy touch damage toward the player. Sweeps the persistent contact
/// graph every frame so an uninterrupted touch keeps dealing damage each
/// time the per-enemy re-hit cooldown elapses, not just on contact begin.
pub(crate) fn detect_contact_hits(
    time: Res<Time>,
    collisions: Collisions,
    mut damage_events: MessageWriter<DamageEvent>,
    mut enemies: Query<(Entity, &mut ContactDamage), With<Enemy>>,
    players: Query<Entity, With<Player>>,
) {
    let now = time.elapsed_secs_f64();

    for pair in collisions.iter() {
        if !pair.is_touching() {
            continue;
        }

        let candidates = [
            (pair.collider1, pair.collider2),
            (pair.collider2, pair.collider1),
        ];

        for (enemy_entity, player_entity) in candidates {
            let Ok((enemy, mut contact)) = enemies.get_mut(enemy_entity) else {
                continue;
            };
            let Ok(player) = players.get(player_entity) else {
                continue;
            };

            if contact.try_hit(now) {
                damage_events.write(DamageEvent {
                    source: enemy,
                    target: player,
                    amount: contact.amount,
                });
            }
        }
    }
}

pub(crate) fn apply_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    mut query: Query<&mut Health>,
) {
    for event in damage_events.read() {
        if let Ok(mut health) = query.get_mut(event.target) {
            let lethal = health.take_damage(event.amount);
            debug!(
                "Damage: {:?} -> {:?}, amount={}, remaining={}",
                event.source, event.target, event.amount, health.current
            );
            if lethal {
                death_events.write(DeathEvent {
                    entity: event.target,
                });
            }
        }
    }
}

pub(crate) fn process_deaths(
    mut commands: Commands,
    mut death_events: MessageReader<DeathEvent>,
    enemies: Query<Entity, With<Enemy>>,
) {
    for event in death_events.read() {
        if enemies.get(event.entity).is_ok() {
            commands.entity(event.entity).despawn();
            info!("Enemy {:?} defeated", event.entity);
        } else {
            info!("Player died");
        }
    }
}
