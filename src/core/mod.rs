//! Core domain: scene bootstrap.

mod setup;

use bevy::prelude::*;

use crate::core::setup::{setup_arena, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_camera, setup_arena));
    }
}
