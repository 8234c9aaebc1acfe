//! Animation playback system.
//!
//! Advances each pet's frame timer by the frame delta and steps the frame
//! index when the interval elapses, then syncs the sprite's source offset to
//! the current frame.

use bevy_ecs::prelude::*;

use crate::components::animation::{Animation, FRAME_INTERVAL_MS};
use crate::components::sprite::Sprite;
use crate::resources::worldtime::WorldTime;

/// Advance animation playback and update the sprite frame.
///
/// The frame index wraps from `max_frame` back to 0. At most one frame
/// advance happens per call, however large the delta; after a stall the
/// animation resumes at normal speed instead of fast-forwarding.
pub fn advance_animation(mut query: Query<(&mut Animation, &mut Sprite)>, time: Res<WorldTime>) {
    let delta_ms = time.delta_ms();
    for (mut anim, mut sprite) in query.iter_mut() {
        anim.frame_timer_ms += delta_ms;
        if anim.frame_timer_ms >= FRAME_INTERVAL_MS {
            anim.frame_timer_ms = 0.0;
            anim.frame_index = (anim.frame_index + 1) % (anim.max_frame + 1);
        }
        sprite.offset.x = anim.frame_index as f32 * sprite.width;
    }
}
