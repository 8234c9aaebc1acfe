use bevy_ecs::prelude::Component;

use crate::resources::registry::Activity;

/// Identity and server-authoritative state of one virtual pet.
///
/// `sprite_id` addresses the per-pet status and feed endpoints. `variant` is
/// the immutable `{breed}/{variant}` identifier fixed at spawn; it selects
/// which registry rules apply. `activity` is the last state applied from a
/// status poll.
#[derive(Component, Debug, Clone)]
pub struct Pet {
    pub sprite_id: i64,
    pub variant: String,
    pub activity: Activity,
}

impl Pet {
    pub fn new(sprite_id: i64, variant: impl Into<String>) -> Self {
        Self {
            sprite_id,
            variant: variant.into(),
            activity: Activity::Standing,
        }
    }
}
