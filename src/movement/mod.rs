//! Movement domain: plugin wiring and public exports for the player
//! controller.
//!
//! Two clocks drive the controller. The variable-rate frame tick (`Update`)
//! samples input, tracks the grounded edge, runs the discrete jump/dash/
//! attack handlers, and advances facing and animation signals. The
//! fixed-rate physics tick (`FixedUpdate`) owns velocity: dash sustain
//! first, attack lock second, plain locomotion last. The `FrameTickSet`
//! chain below is that ordering contract.

mod bootstrap;
mod components;
mod resources;
pub(crate) mod systems;

#[cfg(test)]
mod tests;

pub use components::{
    AttackAnchor, DashPhase, DashState, FACING_DEAD_ZONE, FacingState, GameLayer, GroundAnchor,
    MovementState, Player, VisualPivot, reset_budgets_on_ground,
};
pub use resources::{DashPreset, MovementTuning, PlayerInput};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    drive_velocity, handle_dash_press, handle_jump, mirror_attack_anchor, read_input,
    rotate_to_facing, track_last_move_sign, update_facing_target, update_grounded,
};

/// Frame-tick phases, in contract order. Other domains hook their systems
/// into these sets rather than ordering against individual systems.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameTickSet {
    /// Input sampling, grounded edge, budget resets.
    Sample,
    /// Discrete jump/dash/attack press handlers.
    Act,
    /// Deadline sweeps: attack lock expiry, due hit-tests.
    Resolve,
    /// Facing target, pivot rotation, anchor mirroring.
    Orient,
    /// Animation signal emission.
    Signal,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<PlayerInput>()
            .configure_sets(
                Update,
                (
                    FrameTickSet::Sample,
                    FrameTickSet::Act,
                    FrameTickSet::Resolve,
                    FrameTickSet::Orient,
                    FrameTickSet::Signal,
                )
                    .chain(),
            )
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (read_input, track_last_move_sign, update_grounded)
                    .chain()
                    .in_set(FrameTickSet::Sample),
            )
            .add_systems(
                Update,
                (handle_jump, handle_dash_press)
                    .chain()
                    .in_set(FrameTickSet::Act),
            )
            .add_systems(
                Update,
                (update_facing_target, rotate_to_facing, mirror_attack_anchor)
                    .chain()
                    .in_set(FrameTickSet::Orient),
            )
            .add_systems(FixedUpdate, drive_velocity);
    }
}
