//! Movement domain: components and physics layers for the player controller.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::resources::DashPreset;

/// Input below this magnitude neither flips facing nor steers a dash.
pub const FACING_DEAD_ZONE: f32 = 0.01;

/// Physics layers for collision and spatial query filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
    /// Enemy characters
    Enemy,
    /// Trigger volumes - never block movement, never count as ground
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Child anchor the grounded overlap check is centered on.
#[derive(Component, Debug)]
pub struct GroundAnchor;

/// Child transform that rotates on Y to face left/right. The collider and
/// rigid body stay axis-aligned; only this pivot (and its mesh) turn.
#[derive(Component, Debug)]
pub struct VisualPivot;

/// Child anchor melee hit-tests are centered on. `offset` is the
/// right-facing local offset; only the sign of its X mirrors with facing.
#[derive(Component, Debug)]
pub struct AttackAnchor {
    pub offset: Vec3,
}

/// Grounded edge tracking and the jump budget counter.
#[derive(Component, Debug)]
pub struct MovementState {
    pub grounded: bool,
    pub was_grounded: bool,
    /// Sign of the last non-negligible horizontal input. Persists across
    /// neutral-stick frames so a standstill dash still has a direction.
    pub last_move_sign: f32,
    pub jumps_used: u8,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            grounded: false,
            was_grounded: false,
            last_move_sign: 1.0,
            jumps_used: 0,
        }
    }
}

impl MovementState {
    /// True on the frame the false→true grounded edge happens.
    pub fn landed(&self) -> bool {
        self.grounded && !self.was_grounded
    }

    /// Handles a jump press. Returns true when a velocity impulse should be
    /// applied. Presses while dashing or with no budget left are dropped.
    pub fn try_jump(&mut self, budget: u8, dashing: bool) -> bool {
        if dashing {
            return false;
        }

        if self.grounded {
            self.jumps_used = 1;
            return true;
        }

        if self.jumps_used < budget {
            self.jumps_used += 1;
            return true;
        }

        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashPhase {
    #[default]
    Idle,
    Active,
}

/// Dash state machine: `Idle → Active → Idle`, gated by an absolute cooldown
/// deadline and a one-dash-per-airborne-period budget.
#[derive(Component, Debug)]
pub struct DashState {
    pub phase: DashPhase,
    /// Level flag mirroring the hold input. Releasing it does not end the
    /// dash directly; the next fixed-tick sustain step honors it.
    pub held: bool,
    /// Distance covered by the current dash, in world units.
    pub traveled: f32,
    /// Absolute time (seconds) before which a new dash is denied.
    pub next_allowed: f64,
    pub air_dash_used: bool,
    /// Direction sign snapshotted at activation.
    pub direction: f32,
    /// Preset snapshotted at activation.
    pub max_distance: f32,
    pub speed: f32,
    /// Gravity scale stashed at activation, restored when the dash ends.
    pub stashed_gravity: f32,
}

impl Default for DashState {
    fn default() -> Self {
        Self {
            phase: DashPhase::Idle,
            held: false,
            traveled: 0.0,
            next_allowed: 0.0,
            air_dash_used: false,
            direction: 1.0,
            max_distance: 0.0,
            speed: 0.0,
            stashed_gravity: 1.0,
        }
    }
}

impl DashState {
    pub fn is_active(&self) -> bool {
        self.phase == DashPhase::Active
    }

    /// Gate and state transition for a dash press. Returns true when the
    /// dash starts; denied presses leave all state untouched.
    pub fn try_start(
        &mut self,
        now: f64,
        grounded: bool,
        axis_x: f32,
        last_move_sign: f32,
        preset: DashPreset,
        cooldown: f32,
    ) -> bool {
        if now < self.next_allowed || self.is_active() {
            return false;
        }
        if !grounded && self.air_dash_used {
            return false;
        }

        if !grounded {
            self.air_dash_used = true;
        }

        self.phase = DashPhase::Active;
        self.next_allowed = now + cooldown as f64;
        self.traveled = 0.0;
        self.direction = if axis_x.abs() > FACING_DEAD_ZONE {
            axis_x.signum()
        } else {
            last_move_sign
        };
        self.max_distance = preset.max_distance;
        self.speed = preset.speed;
        true
    }

    /// One fixed-tick sustain step. Returns true while the dash keeps going
    /// (the caller re-asserts the dash velocity), false when it should end.
    /// The distance check runs before accumulation, so a fresh dash always
    /// survives its first sustain evaluation.
    pub fn sustain(&mut self, fixed_dt: f32) -> bool {
        if !self.held || self.traveled >= self.max_distance {
            return false;
        }
        self.traveled += self.speed * fixed_dt;
        true
    }

    pub fn end(&mut self) {
        self.phase = DashPhase::Idle;
    }
}

/// Budget resets tied to ground contact. Landing (a false→true edge) clears
/// the jump counter; any grounded non-dashing frame clears the air-dash
/// budget. A dash carrying through ground contact defers both resets.
pub fn reset_budgets_on_ground(state: &mut MovementState, dash: &mut DashState) {
    if !state.grounded || dash.is_active() {
        return;
    }
    if !state.was_grounded {
        state.jumps_used = 0;
    }
    dash.air_dash_used = false;
}

/// Left/right facing with two fixed target poses. `right` is captured from
/// the visual pivot's spawn orientation; `left` is that pose rotated 180°
/// about the vertical axis.
#[derive(Component, Debug, Clone)]
pub struct FacingState {
    pub facing_right: bool,
    pub right: Quat,
    pub left: Quat,
    pub target: Quat,
}

impl FacingState {
    pub fn new(right: Quat) -> Self {
        Self {
            facing_right: true,
            right,
            left: right * Quat::from_rotation_y(std::f32::consts::PI),
            target: right,
        }
    }

    /// Retargets from the latest axis sample. Input inside the dead zone
    /// leaves facing unchanged, so a released stick never flips the pose.
    pub fn update_target(&mut self, axis_x: f32) {
        if axis_x.abs() < FACING_DEAD_ZONE {
            return;
        }

        let want_right = axis_x > 0.0;
        if want_right != self.facing_right {
            self.facing_right = want_right;
            self.target = if want_right { self.right } else { self.left };
        }
    }

    pub fn side_sign(&self) -> f32 {
        if self.facing_right { 1.0 } else { -1.0 }
    }
}
