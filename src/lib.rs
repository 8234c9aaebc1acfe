//! Petdash library.
//!
//! Exposes the dashboard's ECS components, resources, systems, and message
//! types for use in integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
