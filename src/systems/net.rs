//! Network reconciliation backed by a dedicated thread.
//!
//! This module hosts the background network thread and the systems that
//! bridge it with the ECS world:
//! - [`net_thread`] runs on its own OS thread, owns the HTTP agent, and
//!   processes [`NetCmd`](crate::events::net::NetCmd) commands, emitting
//!   [`NetMessage`](crate::events::net::NetMessage) responses.
//! - [`poll_status_timer`] sends a periodic `FetchStatus` on the poll cadence.
//! - [`send_feed_requests`] turns a feed key press into a `Feed` command.
//! - [`poll_net_messages`] non-blockingly drains the thread's responses into
//!   the ECS message queue each frame.
//! - [`apply_net_messages`] is the single fetch-and-apply routine shared by
//!   the periodic poll and the one-shot refresh after a feed.
//!
//! The render loop never waits on the network: commands and responses cross
//! lock-free channels, and a failed request is logged and skipped so the pet
//! keeps animating with its last known state. When a periodic poll and a
//! one-shot refresh are in flight at once, whichever response arrives last
//! wins; the server is the single source of truth and reapplying a payload
//! is idempotent.

use std::time::Duration;

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender};
use log::{error, info, warn};

use crate::components::animation::Animation;
use crate::components::pet::Pet;
use crate::components::sprite::Sprite;
use crate::events::chart::ChartUpdate;
use crate::events::net::{FeedPayload, NetCmd, NetMessage, StatusPayload};
use crate::resources::input::InputState;
use crate::resources::net::{NetBridge, NetConfig};
use crate::resources::polltimer::PollTimer;
use crate::resources::registry::BreedRegistry;
use crate::resources::satiation::Satiation;
use crate::resources::worldtime::WorldTime;
use crate::systems::activity::set_state;

/// Send a `FetchStatus` on every expiry of the poll interval.
pub fn poll_status_timer(
    time: Res<WorldTime>,
    mut timer: ResMut<PollTimer>,
    bridge: Res<NetBridge>,
) {
    if timer.tick(time.delta) {
        let _ = bridge.tx_cmd.send(NetCmd::FetchStatus);
    }
}

/// Turn a feed key press into a feed command for the network thread.
pub fn send_feed_requests(input: Res<InputState>, bridge: Res<NetBridge>) {
    if input.feed_pressed {
        info!("feed requested");
        let _ = bridge.tx_cmd.send(NetCmd::Feed);
    }
}

/// Drain any pending responses from the network thread and enqueue them into
/// the ECS [`Messages<NetMessage>`] mailbox.
pub fn poll_net_messages(bridge: Res<NetBridge>, mut writer: MessageWriter<NetMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`NetMessage`] so messages written this
/// frame are visible to readers in the same frame. Run after
/// [`poll_net_messages`].
pub fn update_bevy_net_messages(mut msgs: ResMut<Messages<NetMessage>>) {
    msgs.update();
}

/// Advance the ECS message queue for [`ChartUpdate`].
pub fn update_bevy_chart_messages(mut msgs: ResMut<Messages<ChartUpdate>>) {
    msgs.update();
}

/// Apply network responses to world state.
///
/// - `Status`: clamp and store satiation, map `current_state` onto the pet's
///   activity, and forward the raw payload to the chart boundary. An unknown
///   activity name is logged and leaves the sprite untouched.
/// - `FeedResult`: success triggers one immediate `FetchStatus` (outside the
///   poll cadence); rejection is a normal outcome and mutates nothing.
/// - `RequestFailed`: logged; state stays at its last known-good value.
pub fn apply_net_messages(
    mut reader: MessageReader<NetMessage>,
    registry: Res<BreedRegistry>,
    mut satiation: ResMut<Satiation>,
    bridge: Res<NetBridge>,
    mut chart: MessageWriter<ChartUpdate>,
    mut pets: Query<(&mut Pet, &mut Sprite, &mut Animation)>,
) {
    for msg in reader.read() {
        match msg {
            NetMessage::Status {
                satiation: value,
                current_state,
            } => {
                satiation.set_clamped(*value);
                for (mut pet, mut sprite, mut anim) in pets.iter_mut() {
                    if let Err(e) =
                        set_state(current_state, &registry, &mut sprite, &mut anim, &mut pet)
                    {
                        error!("status apply: {}", e);
                    }
                }
                chart.write(ChartUpdate {
                    satiation: *value,
                    current_state: current_state.clone(),
                });
            }
            NetMessage::FeedResult {
                success,
                tokens,
                error,
            } => {
                if *success {
                    match tokens {
                        Some(left) => info!("fed pet, {} tokens left", left),
                        None => info!("fed pet"),
                    }
                    // One-shot refresh so the UI picks up the new satiation
                    // without waiting for the next poll tick.
                    let _ = bridge.tx_cmd.send(NetCmd::FetchStatus);
                } else {
                    warn!(
                        "feed rejected: {}",
                        error.as_deref().unwrap_or("unknown error")
                    );
                }
            }
            NetMessage::RequestFailed { what, error } => {
                warn!("{} request failed: {}", what, error);
            }
        }
    }
}

fn status_url(config: &NetConfig) -> String {
    format!(
        "{}/dashboard/sprite/{}/status/",
        config.base_url, config.sprite_id
    )
}

fn feed_url(config: &NetConfig) -> String {
    format!(
        "{}/dashboard/sprite/{}/feed/",
        config.base_url, config.sprite_id
    )
}

fn fetch_status(agent: &ureq::Agent, config: &NetConfig) -> Result<StatusPayload, String> {
    agent
        .get(&status_url(config))
        .call()
        .map_err(|e| e.to_string())?
        .into_json::<StatusPayload>()
        .map_err(|e| format!("bad status body: {}", e))
}

fn post_feed(agent: &ureq::Agent, config: &NetConfig) -> Result<FeedPayload, String> {
    let mut request = agent.post(&feed_url(config));
    if let Some(token) = &config.csrf_token {
        request = request.set("X-CSRFToken", token);
    }
    match request.call() {
        Ok(response) => response
            .into_json::<FeedPayload>()
            .map_err(|e| format!("bad feed body: {}", e)),
        // The server rejects a feed (e.g. not enough tokens) with an error
        // status whose body still carries the JSON error payload.
        Err(ureq::Error::Status(_code, response)) => response
            .into_json::<FeedPayload>()
            .map_err(|e| format!("bad feed body: {}", e)),
        Err(e) => Err(e.to_string()),
    }
}

/// Entry point of the dedicated network thread.
///
/// Owns the HTTP agent and blocks on the command channel; each command maps
/// to one request whose outcome is reported back as a [`NetMessage`]. Exits
/// on [`NetCmd::Shutdown`] or when the command channel closes.
pub fn net_thread(config: NetConfig, rx_cmd: Receiver<NetCmd>, tx_msg: Sender<NetMessage>) {
    let agent = ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build();

    info!(
        "[net] thread starting for sprite {} at {}",
        config.sprite_id, config.base_url
    );

    loop {
        match rx_cmd.recv() {
            Ok(NetCmd::FetchStatus) => match fetch_status(&agent, &config) {
                Ok(payload) => {
                    let _ = tx_msg.send(NetMessage::Status {
                        satiation: payload.satiation,
                        current_state: payload.current_state,
                    });
                }
                Err(e) => {
                    let _ = tx_msg.send(NetMessage::RequestFailed {
                        what: "status",
                        error: e,
                    });
                }
            },
            Ok(NetCmd::Feed) => match post_feed(&agent, &config) {
                Ok(payload) => {
                    let _ = tx_msg.send(NetMessage::FeedResult {
                        success: payload.success,
                        tokens: payload.tokens,
                        error: payload.error,
                    });
                }
                Err(e) => {
                    let _ = tx_msg.send(NetMessage::RequestFailed {
                        what: "feed",
                        error: e,
                    });
                }
            },
            Ok(NetCmd::Shutdown) | Err(_) => break,
        }
    }

    info!("[net] thread exiting");
}
