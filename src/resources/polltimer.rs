use bevy_ecs::prelude::Resource;

/// Fixed-interval timer driving the periodic status poll.
///
/// Accumulates frame deltas; [`PollTimer::tick`] reports expiry and rearms.
/// One-shot refreshes after a feed action bypass this timer entirely and do
/// not reset it.
#[derive(Resource, Debug, Clone)]
pub struct PollTimer {
    pub interval_secs: f32,
    pub elapsed: f32,
}

impl PollTimer {
    pub fn new(interval_secs: f32) -> Self {
        Self {
            interval_secs,
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` seconds. Returns true once per elapsed interval.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed >= self.interval_secs {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_interval() {
        let mut timer = PollTimer::new(1.0);
        assert!(!timer.tick(0.4));
        assert!(!timer.tick(0.4));
        assert!(timer.tick(0.4));
        // Rearmed after firing.
        assert!(!timer.tick(0.4));
    }

    #[test]
    fn test_large_delta_fires_once() {
        let mut timer = PollTimer::new(1.0);
        assert!(timer.tick(10.0));
        assert!(!timer.tick(0.1));
    }
}
