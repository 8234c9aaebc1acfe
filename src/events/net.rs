//! Commands and messages exchanged with the network thread, plus the wire
//! types of the dashboard endpoints.

use bevy_ecs::message::Message;
use serde::Deserialize;

/// Commands sent *to* the network thread.
#[derive(Debug, Clone)]
pub enum NetCmd {
    /// Fetch the pet's authoritative status from the server.
    FetchStatus,
    /// POST a feed action for the pet.
    Feed,
    Shutdown,
}

/// Messages sent *back* from the network thread.
#[derive(Message, Debug, Clone)]
pub enum NetMessage {
    /// A status fetch completed; carries the raw server payload.
    Status { satiation: i64, current_state: String },
    /// A feed action completed (success or server-side rejection).
    FeedResult {
        success: bool,
        tokens: Option<i64>,
        error: Option<String>,
    },
    /// A request could not be completed; state stays at its last known value.
    RequestFailed { what: &'static str, error: String },
}

/// Body of the status endpoint. The server also reports per-activity time
/// counters; they are ignored here.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusPayload {
    pub satiation: i64,
    pub current_state: String,
}

/// Body of the feed endpoint, for both the success and the rejection case.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedPayload {
    pub success: bool,
    #[serde(default)]
    pub tokens: Option<i64>,
    #[serde(default)]
    pub error: Option<String>,
}
