use bevy_ecs::prelude::Component;

/// Playback speed shared by all pet animations.
pub const ANIMATION_FPS: f32 = 20.0;
/// Minimum elapsed time between frame advances.
pub const FRAME_INTERVAL_MS: f32 = 1000.0 / ANIMATION_FPS;

/// Per-entity animation playback state.
///
/// `frame_index` cycles through `0..=max_frame`; `frame_timer_ms` accumulates
/// frame deltas until it reaches [`FRAME_INTERVAL_MS`]. `max_frame` comes from
/// the active [`AnimationProfile`](crate::resources::registry::AnimationProfile)
/// and changes when the pet enters a different activity.
#[derive(Component, Debug, Clone)]
pub struct Animation {
    pub frame_index: usize,
    pub frame_timer_ms: f32,
    pub max_frame: usize,
}

impl Animation {
    pub fn new(max_frame: usize) -> Self {
        Self {
            frame_index: 0,
            frame_timer_ms: 0.0,
            max_frame,
        }
    }
}
