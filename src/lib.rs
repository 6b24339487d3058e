//! Scene sprite library.
//!
//! Builds scene items for a 2D scene runtime on top of `bevy_ecs`, centred on
//! animated sprites: composing their component set, sizing them from atlas
//! geometry and normalizing their animation state.
//!
//! - [`components`] – ECS components attached to scene items
//! - [`error`] – error types
//! - [`factory`] – entity factories and the kind registry
//! - [`resources`] – atlas store, project configuration, world time
//! - [`systems`] – playback systems

pub mod components;
pub mod error;
pub mod factory;
pub mod resources;
pub mod systems;
