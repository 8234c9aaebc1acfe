//! Screen-space position component.
//!
//! Stores an entity's position in window pixel coordinates. The pet's
//! position is computed once at spawn from the window and frame dimensions
//! and never recomputed afterwards.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Screen-space position (top-left pivot) for an entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct ScreenPosition {
    /// 2D coordinates in screen pixels.
    pub pos: Vector2,
}

impl Default for ScreenPosition {
    fn default() -> Self {
        Self {
            pos: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

impl ScreenPosition {
    /// Create a ScreenPosition from x and y.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_correct_position() {
        let pos = ScreenPosition::new(10.0, 20.0);
        assert_eq!(pos.pos.x, 10.0);
        assert_eq!(pos.pos.y, 20.0);
    }

    #[test]
    fn test_default_is_zero() {
        let pos = ScreenPosition::default();
        assert_eq!(pos.pos.x, 0.0);
        assert_eq!(pos.pos.y, 0.0);
    }
}
