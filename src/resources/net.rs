//! ECS resources that bridge the main thread with the background network
//! thread.
//!
//! Use [`setup_net`] once during initialization to spawn the network thread
//! and insert the [`NetBridge`] and `Messages<NetMessage>` resources. Call
//! [`shutdown_net`] during teardown to stop the thread; no poll outlives the
//! window.

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::events::net::{NetCmd, NetMessage};
use crate::systems::net::net_thread;

/// Endpoint configuration handed to the network thread at spawn.
#[derive(Debug, Clone)]
pub struct NetConfig {
    /// Server base URL without a trailing slash, e.g. `http://127.0.0.1:8000`.
    pub base_url: String,
    /// Identifier of the pet whose endpoints are addressed.
    pub sprite_id: i64,
    /// CSRF token attached to feed POSTs, when the session requires one.
    pub csrf_token: Option<String>,
    /// Per-request timeout in seconds. A stalled request delays only status
    /// updates, never the render loop.
    pub timeout_secs: u64,
}

/// Shared bridge between the ECS world and the network thread.
///
/// Systems send commands via [`NetBridge::tx_cmd`] and poll for responses via
/// [`NetBridge::rx_msg`].
#[derive(Resource)]
pub struct NetBridge {
    /// Sender for [`NetCmd`] (ECS -> network thread).
    pub tx_cmd: Sender<NetCmd>,
    /// Receiver for [`NetMessage`] (network thread -> ECS).
    pub rx_msg: Receiver<NetMessage>,
    /// Join handle for the background network thread.
    pub handle: std::thread::JoinHandle<()>,
}

/// Spawn the network thread and register bridge resources.
pub fn setup_net(world: &mut World, config: NetConfig) {
    let (tx_cmd, rx_cmd) = unbounded::<NetCmd>();
    let (tx_msg, rx_msg) = unbounded::<NetMessage>();

    let handle = std::thread::spawn(move || net_thread(config, rx_cmd, tx_msg));

    world.insert_resource(NetBridge {
        tx_cmd,
        rx_msg,
        handle,
    });
    world.insert_resource(Messages::<NetMessage>::default());
}

/// Request shutdown of the network thread and join it.
///
/// An in-flight request is allowed to finish; its response is discarded with
/// the channel.
pub fn shutdown_net(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<NetBridge>() {
        let _ = bridge.tx_cmd.send(NetCmd::Shutdown);
        let _ = bridge.handle.join();
    }
}
