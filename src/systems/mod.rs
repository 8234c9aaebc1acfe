//! Dashboard systems.
//!
//! Submodules overview
//! - [`activity`] – apply an activity's registry profile to a pet
//! - [`animation`] – advance frame timers and sync sprite source offsets
//! - [`input`] – snapshot keyboard state into [`crate::resources::input::InputState`]
//! - [`net`] – network thread plus the poll/feed/apply reconciliation systems
//! - [`render`] – draw sprites and the satiation overlay using Raylib
//! - [`time`] – update simulation time and delta

pub mod activity;
pub mod animation;
pub mod input;
pub mod net;
pub mod render;
pub mod time;
