//! ECS resources made available to systems.
//!
//! Overview
//! - `gameconfig` – window and server settings loaded from `config.ini`
//! - `input` – per-frame keyboard state relevant to the dashboard
//! - `net` – bridge and channels for the background network thread
//! - `polltimer` – fixed-interval timer for the periodic status poll
//! - `registry` – per-breed sprite-sheet geometry for each activity
//! - `satiation` – last server-reported satiation level
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – simulation time and delta

pub mod gameconfig;
pub mod input;
pub mod net;
pub mod polltimer;
pub mod registry;
pub mod satiation;
pub mod texturestore;
pub mod worldtime;
