//! Raylib rendering pass.
//!
//! We render inside raylib's drawing scope and query the ECS World for
//! sprites: the source rectangle selects the current frame from the sheet and
//! the destination places it at the entity's fixed screen position. The pass
//! only mutates the drawing surface, never sprite state.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::resources::satiation::Satiation;
use crate::resources::texturestore::TextureStore;

const OVERLAY_COLOR: Color = Color {
    r: 216,
    g: 217,
    b: 247,
    a: 255,
};

/// Draw all sprites and the satiation overlay.
pub fn render_pass(world: &mut World, d: &mut RaylibDrawHandle, textures: &TextureStore) {
    let to_draw: Vec<(Sprite, ScreenPosition)> = {
        let mut q = world.query::<(&Sprite, &ScreenPosition)>();
        q.iter(world).map(|(s, p)| (s.clone(), *p)).collect()
    };

    for (sprite, pos) in to_draw.iter() {
        if let Some(tex) = textures.get(&sprite.tex_key) {
            // Source rect selects a frame from the spritesheet
            let src = Rectangle {
                x: sprite.offset.x,
                y: sprite.offset.y,
                width: sprite.width,
                height: sprite.height,
            };
            let dest = Rectangle {
                x: pos.pos.x,
                y: pos.pos.y,
                width: sprite.width,
                height: sprite.height,
            };
            d.draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
        }
    }

    draw_satiation_overlay(world, d);
}

/// Satiation readout: label plus a bar whose width tracks the value.
fn draw_satiation_overlay(world: &World, d: &mut RaylibDrawHandle) {
    let satiation = world.resource::<Satiation>().0;
    let text = format!("Satiation: {}", satiation);
    d.draw_text(&text, 5, 5, 10, OVERLAY_COLOR);
    d.draw_rectangle(65, 8, satiation, 6, OVERLAY_COLOR);
}
