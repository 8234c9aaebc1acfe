//! Keyboard input snapshot.
//!
//! Reads the raylib keyboard state into the
//! [`InputState`](crate::resources::input::InputState) resource once per
//! frame, before the schedule runs. Kept outside the schedule because the
//! raylib handle lives on the main loop, not in the world.

use bevy_ecs::prelude::World;
use raylib::prelude::*;

use crate::resources::input::InputState;

/// Snapshot the keys relevant to the dashboard.
pub fn read_input(rl: &RaylibHandle, world: &mut World) {
    let feed_pressed = rl.is_key_pressed(KeyboardKey::KEY_SPACE);
    world.resource_mut::<InputState>().feed_pressed = feed_pressed;
}
