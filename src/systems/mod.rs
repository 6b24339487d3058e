//! ECS systems.
//!
//! Submodules overview
//! - [`spriteanimation`] – advance sprite animation playback and switch frame ranges
pub mod spriteanimation;
