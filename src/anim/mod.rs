//! Animation bridge: the discrete signals the controller emits toward an
//! animator. A level `running` flag updated every frame tick, and a decaying
//! pulse set by the one-shot attack trigger. Entities without the bridge
//! component simply receive no signals.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::{AttackTimers, AttackTriggered};
use crate::movement::{DashState, FrameTickSet, MovementTuning, Player, PlayerInput};

/// How long the attack pulse stays observable for a polling animator.
const ATTACK_PULSE_SECONDS: f32 = 0.1;

#[derive(Component, Debug, Default)]
pub struct AnimationBridge {
    /// Level signal: moving fast enough, not dashing, not attack-locked.
    pub running: bool,
    /// Remaining time on the one-shot attack pulse.
    pub attack_pulse: f32,
}

impl AnimationBridge {
    pub fn attacking(&self) -> bool {
        self.attack_pulse > 0.0
    }
}

pub(crate) fn update_run_signal(
    input: Res<PlayerInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&DashState, &AttackTimers, &mut AnimationBridge), With<Player>>,
) {
    for (dash, attack, mut bridge) in &mut query {
        bridge.running =
            input.axis_x.abs() > tuning.run_threshold && !dash.is_active() && !attack.locked;
    }
}

pub(crate) fn pulse_attack_signal(
    time: Res<Time>,
    mut attack_events: MessageReader<AttackTriggered>,
    mut query: Query<&mut AnimationBridge>,
) {
    let dt = time.delta_secs();
    for mut bridge in &mut query {
        bridge.attack_pulse = (bridge.attack_pulse - dt).max(0.0);
    }

    for event in attack_events.read() {
        if let Ok(mut bridge) = query.get_mut(event.attacker) {
            bridge.attack_pulse = ATTACK_PULSE_SECONDS;
        }
    }
}

pub struct AnimPlugin;

impl Plugin for AnimPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (update_run_signal, pulse_attack_signal)
                .chain()
                .in_set(FrameTickSet::Signal),
        );
    }
}
