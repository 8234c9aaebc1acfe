//! Activity entry.
//!
//! Standing and Running share one entry path parameterized by the registry:
//! entering an activity resolves the (activity, variant) profile and applies
//! it to the sprite and animation components. Entry is pure configuration and
//! idempotent; re-entering the current activity re-applies the same profile.

use crate::components::animation::Animation;
use crate::components::pet::Pet;
use crate::components::sprite::Sprite;
use crate::resources::registry::{Activity, BreedRegistry};

/// Apply an activity's resolved profile to a pet.
///
/// Effects, applied unconditionally on every entry:
/// - sprite frame width from the profile
/// - sprite source offset moved to frame 0 of the activity's sheet row
/// - animation max frame from the profile, frame index reset to 0
///
/// The frame timer is deliberately left running so a state change does not
/// stretch the current frame.
pub fn enter_activity(
    activity: Activity,
    registry: &BreedRegistry,
    sprite: &mut Sprite,
    anim: &mut Animation,
    pet: &mut Pet,
) {
    let profile = registry.profile_for(activity, &pet.variant);
    sprite.width = profile.frame_width;
    sprite.offset.x = 0.0;
    sprite.offset.y = profile.sheet_row as f32 * sprite.height;
    anim.max_frame = profile.max_frame;
    anim.frame_index = 0;
    pet.activity = activity;
}

/// Enter the activity named by the server's `current_state` string.
///
/// An unrecognized name is an error and mutates nothing.
pub fn set_state(
    name: &str,
    registry: &BreedRegistry,
    sprite: &mut Sprite,
    anim: &mut Animation,
    pet: &mut Pet,
) -> Result<(), String> {
    let activity = Activity::from_name(name)?;
    enter_activity(activity, registry, sprite, anim, pet);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sprite::FRAME_HEIGHT;
    use raylib::prelude::Vector2;

    fn husky_pet() -> (Sprite, Animation, Pet) {
        let registry = BreedRegistry::default();
        let profile = registry.profile_for(Activity::Standing, "husky/one");
        let sprite = Sprite {
            tex_key: "pet-sheet".into(),
            width: profile.frame_width,
            height: FRAME_HEIGHT,
            offset: Vector2 {
                x: 0.0,
                y: profile.sheet_row as f32 * FRAME_HEIGHT,
            },
        };
        let anim = Animation::new(profile.max_frame);
        let pet = Pet::new(1, "husky/one");
        (sprite, anim, pet)
    }

    #[test]
    fn test_enter_running_applies_profile() {
        let registry = BreedRegistry::default();
        let (mut sprite, mut anim, mut pet) = husky_pet();

        enter_activity(Activity::Running, &registry, &mut sprite, &mut anim, &mut pet);

        assert_eq!(sprite.width, 74.0);
        assert_eq!(anim.max_frame, 7);
        assert_eq!(anim.frame_index, 0);
        assert_eq!(sprite.sheet_row(), 6);
        assert_eq!(pet.activity, Activity::Running);
    }

    #[test]
    fn test_reentry_restores_standing_profile() {
        let registry = BreedRegistry::default();
        let (mut sprite, mut anim, mut pet) = husky_pet();
        let before = (sprite.width, anim.max_frame, sprite.sheet_row());

        enter_activity(Activity::Running, &registry, &mut sprite, &mut anim, &mut pet);
        anim.frame_index = 3;
        enter_activity(Activity::Standing, &registry, &mut sprite, &mut anim, &mut pet);

        assert_eq!((sprite.width, anim.max_frame, sprite.sheet_row()), before);
        assert_eq!(anim.frame_index, 0);
    }

    #[test]
    fn test_set_state_twice_is_idempotent() {
        let registry = BreedRegistry::default();
        let (mut sprite, mut anim, mut pet) = husky_pet();

        set_state("STANDING", &registry, &mut sprite, &mut anim, &mut pet).unwrap();
        let once = (sprite.clone(), anim.clone());
        set_state("STANDING", &registry, &mut sprite, &mut anim, &mut pet).unwrap();

        assert_eq!(sprite.width, once.0.width);
        assert_eq!(sprite.offset.x, once.0.offset.x);
        assert_eq!(sprite.offset.y, once.0.offset.y);
        assert_eq!(anim.frame_index, once.1.frame_index);
        assert_eq!(anim.max_frame, once.1.max_frame);
    }

    #[test]
    fn test_set_state_unknown_name_mutates_nothing() {
        let registry = BreedRegistry::default();
        let (mut sprite, mut anim, mut pet) = husky_pet();
        anim.frame_index = 2;

        let result = set_state("SLEEPING", &registry, &mut sprite, &mut anim, &mut pet);

        assert!(result.is_err());
        assert_eq!(anim.frame_index, 2);
        assert_eq!(pet.activity, Activity::Standing);
    }

    #[test]
    fn test_entry_keeps_frame_timer() {
        let registry = BreedRegistry::default();
        let (mut sprite, mut anim, mut pet) = husky_pet();
        anim.frame_timer_ms = 33.0;

        enter_activity(Activity::Running, &registry, &mut sprite, &mut anim, &mut pet);

        assert_eq!(anim.frame_timer_ms, 33.0);
    }
}
