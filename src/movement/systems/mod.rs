//! Movement domain: system modules for the player controller.

pub(crate) mod dash;
pub(crate) mod facing;
pub(crate) mod grounded;
pub(crate) mod input;
pub(crate) mod jump;
pub(crate) mod locomotion;

pub(crate) use dash::handle_dash_press;
pub(crate) use facing::{mirror_attack_anchor, rotate_to_facing, update_facing_target};
pub(crate) use grounded::update_grounded;
pub(crate) use input::{read_input, track_last_move_sign};
pub(crate) use jump::handle_jump;
pub(crate) use locomotion::drive_velocity;
