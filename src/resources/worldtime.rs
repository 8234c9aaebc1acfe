use bevy_ecs::prelude::Resource;

/// Simulation clock updated once per frame from the window's frame delta.
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    /// Seconds since startup.
    pub elapsed: f32,
    /// Seconds since the previous frame.
    pub delta: f32,
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
        }
    }
}

impl WorldTime {
    /// Frame delta in milliseconds, as the animation timing expects.
    pub fn delta_ms(&self) -> f32 {
        self.delta * 1000.0
    }
}
