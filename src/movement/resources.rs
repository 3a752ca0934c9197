//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::Deserialize;

/// Distance cap and speed for one dash flavor. Snapshotted into `DashState`
/// at activation, so retuning mid-dash never affects a dash in flight.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DashPreset {
    pub max_distance: f32,
    pub speed: f32,
}

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub move_speed: f32,
    pub jump_impulse: f32,
    pub double_jump: bool,
    /// Radius of the grounded overlap sphere at the ground anchor.
    pub ground_check_radius: f32,
    /// When set, dashes use the strong preset instead of the weak one.
    pub strong_dash: bool,
    pub weak_dash: DashPreset,
    pub strong_dash_preset: DashPreset,
    pub dash_cooldown: f32,
    /// Horizontal input magnitude above which the run signal goes high.
    pub run_threshold: f32,
    /// Facing turn rate in degrees per second. 0 = instant flip.
    pub turn_speed_deg: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 7.0,
            jump_impulse: 7.5,
            double_jump: true,
            ground_check_radius: 0.18,
            strong_dash: false,
            weak_dash: DashPreset {
                max_distance: 1.0,
                speed: 12.0,
            },
            strong_dash_preset: DashPreset {
                max_distance: 2.0,
                speed: 18.0,
            },
            dash_cooldown: 0.15,
            run_threshold: 0.05,
            turn_speed_deg: 720.0,
        }
    }
}

impl MovementTuning {
    /// Jumps allowed per airborne period: ground jump plus the optional
    /// double jump.
    pub fn jump_budget(&self) -> u8 {
        if self.double_jump { 2 } else { 1 }
    }

    pub fn dash_preset(&self) -> DashPreset {
        if self.strong_dash {
            self.strong_dash_preset
        } else {
            self.weak_dash
        }
    }
}

/// One frame tick's worth of sampled input. Pressed fields are edges,
/// `dash_held` is a level.
#[derive(Resource, Debug, Default)]
pub struct PlayerInput {
    pub axis_x: f32,
    pub jump_pressed: bool,
    pub dash_pressed: bool,
    pub dash_held: bool,
    pub attack_pressed: bool,
}
