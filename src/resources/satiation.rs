use bevy_ecs::prelude::Resource;

/// Last server-reported satiation level, in `0..=100`.
///
/// Mutated only when a status fetch is applied; the overlay and the chart
/// boundary read it.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct Satiation(pub i32);

impl Satiation {
    /// Store a server value, clamped into the displayable range.
    pub fn set_clamped(&mut self, value: i64) {
        self.0 = value.clamp(0, 100) as i32;
    }
}
