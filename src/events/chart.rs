//! Boundary with the satiation-history chart.
//!
//! The chart widget itself is a separate collaborator; the core's only
//! obligation is to hand it every applied status payload. One
//! [`ChartUpdate`] is written per applied poll.

use bevy_ecs::message::Message;

/// Raw status payload forwarded to the chart once per applied poll.
#[derive(Message, Debug, Clone)]
pub struct ChartUpdate {
    pub satiation: i64,
    pub current_state: String,
}
