use bevy_ecs::prelude::Resource;

/// Per-frame keyboard state of the keys relevant to the dashboard.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct InputState {
    /// The feed key was pressed this frame.
    pub feed_pressed: bool,
}
