//! World setup for one dashboard canvas.
//!
//! Builds the ECS world with its data resources and spawns the single pet
//! entity. The raylib handle, thread, and texture store stay on the main
//! loop; the world holds only data, so integration tests can drive it
//! headless.

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::pet::Pet;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::{FRAME_HEIGHT, Sprite};
use crate::events::chart::ChartUpdate;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::polltimer::PollTimer;
use crate::resources::registry::{Activity, BreedRegistry};
use crate::resources::satiation::Satiation;
use crate::resources::worldtime::WorldTime;

/// Create the world and insert every data resource the schedule needs.
///
/// The network bridge is inserted separately by
/// [`setup_net`](crate::resources::net::setup_net).
pub fn build_world(registry: BreedRegistry, config: &GameConfig) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(registry);
    world.insert_resource(Satiation::default());
    world.insert_resource(InputState::default());
    world.insert_resource(PollTimer::new(config.poll_interval_secs as f32));
    world.insert_resource(Messages::<ChartUpdate>::default());
    world.insert_resource(config.clone());
    world
}

/// Spawn the pet entity in its initial Standing state.
///
/// Position is computed once from the window and the Standing frame size —
/// centered horizontally, resting on the bottom edge — and never recomputed,
/// even when a later activity changes the frame width.
pub fn spawn_pet(
    world: &mut World,
    sprite_id: i64,
    variant: &str,
    tex_key: &str,
    window_width: f32,
    window_height: f32,
) -> Entity {
    let profile = {
        let registry = world.resource::<BreedRegistry>();
        registry.profile_for(Activity::Standing, variant)
    };

    let sprite = Sprite {
        tex_key: tex_key.to_string(),
        width: profile.frame_width,
        height: FRAME_HEIGHT,
        offset: raylib::prelude::Vector2 {
            x: 0.0,
            y: profile.sheet_row as f32 * FRAME_HEIGHT,
        },
    };
    let position = ScreenPosition::new(
        (window_width - profile.frame_width) / 2.0,
        window_height - FRAME_HEIGHT,
    );

    world
        .spawn((
            Pet::new(sprite_id, variant),
            sprite,
            Animation::new(profile.max_frame),
            position,
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_pet_initial_state() {
        let config = GameConfig::new();
        let mut world = build_world(BreedRegistry::default(), &config);
        let entity = spawn_pet(&mut world, 7, "husky/one", "pet-sheet", 200.0, 200.0);

        let pet = world.get::<Pet>(entity).unwrap();
        assert_eq!(pet.sprite_id, 7);
        assert_eq!(pet.activity, Activity::Standing);

        let sprite = world.get::<Sprite>(entity).unwrap();
        assert_eq!(sprite.width, 64.0);
        assert_eq!(sprite.sheet_row(), 9);

        let anim = world.get::<Animation>(entity).unwrap();
        assert_eq!(anim.frame_index, 0);
        assert_eq!(anim.max_frame, 4);

        let pos = world.get::<ScreenPosition>(entity).unwrap();
        assert_eq!(pos.pos.x, 68.0);
        assert_eq!(pos.pos.y, 136.0);
    }
}
