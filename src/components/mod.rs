//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – playback state (frame index and timer) for sprite animations
//! - [`pet`] – identity and server-reported activity of one virtual pet
//! - [`screenposition`] – fixed screen-space position for rendering
//! - [`sprite`] – 2D sprite rendering component (sheet key and source frame)

pub mod animation;
pub mod pet;
pub mod screenposition;
pub mod sprite;
