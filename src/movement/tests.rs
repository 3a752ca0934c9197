//! Movement domain: tests for jump budgets, dash gating, and facing.

use bevy::math::Quat;

use super::{
    DashPhase, DashPreset, DashState, FacingState, MovementState, MovementTuning,
    reset_budgets_on_ground,
};

const FIXED_DT: f32 = 1.0 / 60.0;

fn weak_preset() -> DashPreset {
    DashPreset {
        max_distance: 1.0,
        speed: 12.0,
    }
}

// -----------------------------------------------------------------------------
// Jump budget tests
// -----------------------------------------------------------------------------

#[test]
fn test_double_jump_scenario() {
    let mut state = MovementState {
        grounded: true,
        ..Default::default()
    };

    assert!(state.try_jump(2, false));
    assert_eq!(state.jumps_used, 1);

    state.grounded = false;
    assert!(state.try_jump(2, false));
    assert_eq!(state.jumps_used, 2);

    assert!(!state.try_jump(2, false));
    assert_eq!(state.jumps_used, 2);
}

#[test]
fn test_airborne_jumps_never_exceed_budget() {
    for budget in [1u8, 2] {
        let mut state = MovementState {
            grounded: true,
            ..Default::default()
        };
        assert!(state.try_jump(budget, false));
        state.grounded = false;

        let mut impulses = 1;
        for _ in 0..20 {
            if state.try_jump(budget, false) {
                impulses += 1;
            }
        }
        assert_eq!(impulses, budget);
    }
}

#[test]
fn test_jump_ignored_while_dashing() {
    let mut state = MovementState {
        grounded: true,
        ..Default::default()
    };
    assert!(!state.try_jump(2, true));
    assert_eq!(state.jumps_used, 0);
}

#[test]
fn test_ground_jump_resets_counter_to_one() {
    // A grounded press always restarts the budget at 1, whatever was left
    // over from a previous airborne period.
    let mut state = MovementState {
        grounded: true,
        jumps_used: 2,
        ..Default::default()
    };
    assert!(state.try_jump(2, false));
    assert_eq!(state.jumps_used, 1);
}

#[test]
fn test_single_jump_budget_denies_air_jump() {
    let mut state = MovementState {
        grounded: false,
        jumps_used: 1,
        ..Default::default()
    };
    assert!(!state.try_jump(1, false));
}

#[test]
fn test_jump_budget_from_tuning() {
    let mut tuning = MovementTuning::default();
    tuning.double_jump = true;
    assert_eq!(tuning.jump_budget(), 2);
    tuning.double_jump = false;
    assert_eq!(tuning.jump_budget(), 1);
}

// -----------------------------------------------------------------------------
// Ground-tied budget reset tests
// -----------------------------------------------------------------------------

#[test]
fn test_landing_edge_resets_both_budgets() {
    let mut state = MovementState {
        grounded: true,
        was_grounded: false,
        jumps_used: 2,
        ..Default::default()
    };
    let mut dash = DashState {
        air_dash_used: true,
        ..Default::default()
    };

    assert!(state.landed());
    reset_budgets_on_ground(&mut state, &mut dash);

    assert_eq!(state.jumps_used, 0);
    assert!(!dash.air_dash_used);
}

#[test]
fn test_grounded_frame_without_edge_keeps_jump_counter() {
    // The steady grounded reset only touches the air-dash budget; the jump
    // counter clears on the landing edge alone.
    let mut state = MovementState {
        grounded: true,
        was_grounded: true,
        jumps_used: 1,
        ..Default::default()
    };
    let mut dash = DashState {
        air_dash_used: true,
        ..Default::default()
    };

    reset_budgets_on_ground(&mut state, &mut dash);

    assert_eq!(state.jumps_used, 1);
    assert!(!dash.air_dash_used);
}

#[test]
fn test_landing_during_dash_defers_resets() {
    let mut state = MovementState {
        grounded: true,
        was_grounded: false,
        jumps_used: 2,
        ..Default::default()
    };
    let mut dash = DashState {
        phase: DashPhase::Active,
        air_dash_used: true,
        ..Default::default()
    };

    reset_budgets_on_ground(&mut state, &mut dash);

    assert_eq!(state.jumps_used, 2);
    assert!(dash.air_dash_used);
}

#[test]
fn test_airborne_frame_resets_nothing() {
    let mut state = MovementState {
        grounded: false,
        was_grounded: false,
        jumps_used: 1,
        ..Default::default()
    };
    let mut dash = DashState {
        air_dash_used: true,
        ..Default::default()
    };

    reset_budgets_on_ground(&mut state, &mut dash);

    assert_eq!(state.jumps_used, 1);
    assert!(dash.air_dash_used);
}

// -----------------------------------------------------------------------------
// Dash gating tests
// -----------------------------------------------------------------------------

#[test]
fn test_dash_starts_when_idle_and_off_cooldown() {
    let mut dash = DashState::default();
    assert!(dash.try_start(0.0, true, 1.0, 1.0, weak_preset(), 0.15));
    assert!(dash.is_active());
    assert_eq!(dash.traveled, 0.0);
    assert_eq!(dash.speed, 12.0);
    assert_eq!(dash.max_distance, 1.0);
}

#[test]
fn test_dash_cooldown_window() {
    let mut dash = DashState::default();
    assert!(dash.try_start(0.0, true, 1.0, 1.0, weak_preset(), 0.15));
    dash.end();

    // Denied strictly before the deadline, permitted at/after it.
    assert!(!dash.try_start(0.10, true, 1.0, 1.0, weak_preset(), 0.15));
    assert!(dash.try_start(0.16, true, 1.0, 1.0, weak_preset(), 0.15));
}

#[test]
fn test_dash_denied_while_active() {
    let mut dash = DashState::default();
    assert!(dash.try_start(0.0, true, 1.0, 1.0, weak_preset(), 0.0));
    assert!(!dash.try_start(1.0, true, 1.0, 1.0, weak_preset(), 0.0));
}

#[test]
fn test_air_dash_budget() {
    let mut dash = DashState::default();

    // First airborne dash consumes the budget immediately.
    assert!(dash.try_start(0.0, false, 1.0, 1.0, weak_preset(), 0.0));
    assert!(dash.air_dash_used);
    dash.end();

    // Second airborne attempt before landing is denied with no state change.
    let traveled_before = dash.traveled;
    assert!(!dash.try_start(1.0, false, 1.0, 1.0, weak_preset(), 0.0));
    assert_eq!(dash.phase, DashPhase::Idle);
    assert_eq!(dash.traveled, traveled_before);

    // Grounded dashes are not limited by the air budget.
    assert!(dash.try_start(2.0, true, 1.0, 1.0, weak_preset(), 0.0));
}

#[test]
fn test_dash_direction_snapshot() {
    let mut dash = DashState::default();
    assert!(dash.try_start(0.0, true, -1.0, 1.0, weak_preset(), 0.0));
    assert_eq!(dash.direction, -1.0);
    dash.end();

    // Neutral stick falls back to the last non-zero sign.
    assert!(dash.try_start(1.0, true, 0.0, -1.0, weak_preset(), 0.0));
    assert_eq!(dash.direction, -1.0);
    dash.end();

    // Input inside the dead zone also falls back.
    assert!(dash.try_start(2.0, true, 0.005, 1.0, weak_preset(), 0.0));
    assert_eq!(dash.direction, 1.0);
}

#[test]
fn test_dash_preset_selection() {
    let mut tuning = MovementTuning::default();
    tuning.strong_dash = false;
    assert_eq!(tuning.dash_preset().speed, tuning.weak_dash.speed);
    tuning.strong_dash = true;
    assert_eq!(tuning.dash_preset().speed, tuning.strong_dash_preset.speed);
}

// -----------------------------------------------------------------------------
// Dash sustain tests
// -----------------------------------------------------------------------------

#[test]
fn test_dash_travel_is_monotonic_and_bounded() {
    let mut dash = DashState::default();
    assert!(dash.try_start(0.0, true, 1.0, 1.0, weak_preset(), 0.15));
    dash.held = true;

    let step = dash.speed * FIXED_DT;
    let mut ticks = 0;
    let mut previous = dash.traveled;

    while dash.sustain(FIXED_DT) {
        assert!(dash.traveled >= previous);
        previous = dash.traveled;
        ticks += 1;
        assert!(ticks < 1000, "dash never terminated");
    }

    // ceil(max_distance / (speed * dt)) accumulating ticks, and the final
    // overshoot is at most one tick's worth of travel.
    let expected_ticks = (dash.max_distance / step).ceil() as i32;
    assert_eq!(ticks, expected_ticks);
    assert!(dash.traveled <= dash.max_distance + step);
}

#[test]
fn test_dash_first_sustain_always_accumulates() {
    let mut dash = DashState::default();
    assert!(dash.try_start(0.0, true, 1.0, 1.0, weak_preset(), 0.0));
    dash.held = true;

    // No distance check can fire before at least one sustain evaluation.
    assert!(dash.sustain(FIXED_DT));
    assert!(dash.traveled > 0.0);
}

#[test]
fn test_dash_release_ends_at_next_sustain() {
    let mut dash = DashState::default();
    assert!(dash.try_start(0.0, true, 1.0, 1.0, weak_preset(), 0.0));
    dash.held = true;
    assert!(dash.sustain(FIXED_DT));

    // Releasing only clears the flag; the next sustain step honors it.
    dash.held = false;
    let traveled = dash.traveled;
    assert!(!dash.sustain(FIXED_DT));
    assert_eq!(dash.traveled, traveled);
}

// -----------------------------------------------------------------------------
// Facing tests
// -----------------------------------------------------------------------------

#[test]
fn test_facing_flips_only_past_dead_zone() {
    let mut facing = FacingState::new(Quat::IDENTITY);
    assert!(facing.facing_right);

    facing.update_target(-0.005);
    assert!(facing.facing_right);

    facing.update_target(-0.5);
    assert!(!facing.facing_right);
    assert_eq!(facing.target, facing.left);
}

#[test]
fn test_facing_neutral_input_keeps_pose() {
    let mut facing = FacingState::new(Quat::IDENTITY);
    facing.update_target(-1.0);
    assert!(!facing.facing_right);

    facing.update_target(0.0);
    assert!(!facing.facing_right);
    assert_eq!(facing.target, facing.left);
}

#[test]
fn test_facing_same_direction_is_stable() {
    let mut facing = FacingState::new(Quat::IDENTITY);
    facing.update_target(1.0);
    assert!(facing.facing_right);
    assert_eq!(facing.target, facing.right);
}

#[test]
fn test_left_pose_is_right_rotated_half_turn() {
    let right = Quat::from_rotation_y(0.3);
    let facing = FacingState::new(right);
    let expected = right * Quat::from_rotation_y(std::f32::consts::PI);
    assert!(facing.left.angle_between(expected) < 1e-5);
}

#[test]
fn test_rotate_towards_never_overshoots() {
    let facing = FacingState::new(Quat::IDENTITY);
    let max_angle = 720.0_f32.to_radians() * FIXED_DT;

    let mut current = facing.right;
    let mut remaining = current.angle_between(facing.left);

    for _ in 0..200 {
        current = current.rotate_towards(facing.left, max_angle);
        let next_remaining = current.angle_between(facing.left);
        assert!(next_remaining <= remaining + 1e-5);
        remaining = next_remaining;
        if remaining < 1e-5 {
            break;
        }
    }

    assert!(remaining < 1e-5, "rotation never converged on the target");
}
