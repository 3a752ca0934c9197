//! Startup configuration: player tuning loaded from RON.
//!
//! `assets/config/player.ron` is read once before the player spawns. A
//! missing or invalid file falls back to the compiled defaults with a
//! warning; gameplay never depends on the file being present.

use bevy::prelude::*;
use ron::Options;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::combat::AttackTuning;
use crate::movement::{DashPreset, MovementTuning};

const PLAYER_CONFIG_PATH: &str = "assets/config/player.ron";

/// Error type for configuration loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

#[derive(Debug, Deserialize)]
pub struct PlayerConfig {
    pub movement: MovementConfig,
    pub attack: AttackConfig,
}

#[derive(Debug, Deserialize)]
pub struct MovementConfig {
    pub move_speed: f32,
    pub jump_impulse: f32,
    pub double_jump: bool,
    pub ground_check_radius: f32,
    pub strong_dash: bool,
    pub weak_dash: DashPreset,
    pub strong_dash_preset: DashPreset,
    pub dash_cooldown: f32,
    pub run_threshold: f32,
    pub turn_speed_deg: f32,
}

#[derive(Debug, Deserialize)]
pub struct AttackConfig {
    pub cooldown: f32,
    pub lock_during_attack: bool,
    pub lock_duration: f32,
    pub hit_delay: f32,
    pub hit_radius: f32,
    pub damage: i32,
}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn load_player_config(path: &Path) -> Result<PlayerConfig, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| ConfigLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}

/// Sanity checks on loaded values. Offenders are reported and the built-in
/// defaults kept, so a bad file can never produce a dash with no distance
/// cap or a negative cooldown.
fn validate_player_config(config: &PlayerConfig) -> Vec<String> {
    let mut errors = Vec::new();

    let positives = [
        ("movement.move_speed", config.movement.move_speed),
        ("movement.jump_impulse", config.movement.jump_impulse),
        (
            "movement.ground_check_radius",
            config.movement.ground_check_radius,
        ),
        ("movement.weak_dash.max_distance", config.movement.weak_dash.max_distance),
        ("movement.weak_dash.speed", config.movement.weak_dash.speed),
        (
            "movement.strong_dash_preset.max_distance",
            config.movement.strong_dash_preset.max_distance,
        ),
        (
            "movement.strong_dash_preset.speed",
            config.movement.strong_dash_preset.speed,
        ),
        ("attack.hit_radius", config.attack.hit_radius),
    ];
    for (name, value) in positives {
        if value <= 0.0 {
            errors.push(format!("{} must be positive, got {}", name, value));
        }
    }

    let non_negatives = [
        ("movement.dash_cooldown", config.movement.dash_cooldown),
        ("movement.run_threshold", config.movement.run_threshold),
        ("movement.turn_speed_deg", config.movement.turn_speed_deg),
        ("attack.cooldown", config.attack.cooldown),
        ("attack.lock_duration", config.attack.lock_duration),
        ("attack.hit_delay", config.attack.hit_delay),
    ];
    for (name, value) in non_negatives {
        if value < 0.0 {
            errors.push(format!("{} must not be negative, got {}", name, value));
        }
    }

    if config.attack.damage <= 0 {
        errors.push(format!(
            "attack.damage must be positive, got {}",
            config.attack.damage
        ));
    }

    errors
}

pub(crate) fn apply_player_config(
    mut movement: ResMut<MovementTuning>,
    mut attack: ResMut<AttackTuning>,
) {
    let config = match load_player_config(Path::new(PLAYER_CONFIG_PATH)) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}; using built-in defaults", e);
            return;
        }
    };

    let errors = validate_player_config(&config);
    if !errors.is_empty() {
        for error in &errors {
            warn!("Config validation: {}", error);
        }
        warn!(
            "{} invalid value(s) in {}; using built-in defaults",
            errors.len(),
            PLAYER_CONFIG_PATH
        );
        return;
    }

    *movement = MovementTuning {
        move_speed: config.movement.move_speed,
        jump_impulse: config.movement.jump_impulse,
        double_jump: config.movement.double_jump,
        ground_check_radius: config.movement.ground_check_radius,
        strong_dash: config.movement.strong_dash,
        weak_dash: config.movement.weak_dash,
        strong_dash_preset: config.movement.strong_dash_preset,
        dash_cooldown: config.movement.dash_cooldown,
        run_threshold: config.movement.run_threshold,
        turn_speed_deg: config.movement.turn_speed_deg,
    };
    *attack = AttackTuning {
        cooldown: config.attack.cooldown,
        lock_during_attack: config.attack.lock_during_attack,
        lock_duration: config.attack.lock_duration,
        hit_delay: config.attack.hit_delay,
        hit_radius: config.attack.hit_radius,
        damage: config.attack.damage,
    };

    info!(
        "Loaded player config: move_speed={}, double_jump={}, strong_dash={}, attack_cooldown={}",
        movement.move_speed, movement.double_jump, movement.strong_dash, attack.cooldown
    );
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        // PreStartup so the tunings are final before the player spawns.
        app.add_systems(PreStartup, apply_player_config);
    }
}
