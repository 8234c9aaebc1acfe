use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Height of one sprite-sheet cell in pixels. The sheets use cells of fixed
/// height; only the frame width varies per activity and breed.
pub const FRAME_HEIGHT: f32 = 64.0;

/// Sprite is identified by a texture key plus the source sub-rectangle to
/// blit from the sheet: `offset` is the top-left corner of the current frame,
/// `width`/`height` its size. The animation system keeps `offset.x` in sync
/// with the current frame index; activity entry sets `offset.y` from the
/// activity's sheet row.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
}

impl Sprite {
    /// Sheet row currently selected by `offset.y`.
    pub fn sheet_row(&self) -> usize {
        (self.offset.y / self.height) as usize
    }
}
