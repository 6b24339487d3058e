//! Sprite animation playback.
//!
//! - [`sprite_animation`] advances every [`SpriteAnimationState`] by the world
//!   delta and shows the resulting frame in the entity's [`TextureRegion`].
//! - [`play_frame_range`] switches an animated sprite to another named frame
//!   range and restarts playback.
//!
//! # Animation Flow
//!
//! 1. Frames are resolved once at creation by
//!    [`SpriteFactory`](crate::factory::sprite::SpriteFactory)
//! 2. The state derives the playing segment from the current
//!    [`FrameRange`](crate::components::spriteanimation::FrameRange)
//! 3. This system turns accumulated time into a frame index per
//!    [`PlayMode`](crate::components::playmode::PlayMode)

use bevy_ecs::prelude::*;
use fastrand::Rng;

use crate::components::spriteanimation::SpriteAnimation;
use crate::components::spriteanimationstate::SpriteAnimationState;
use crate::components::textureregion::TextureRegion;
use crate::error::FactoryError;
use crate::resources::worldtime::WorldTime;

/// Advance animation playback and update the displayed frame.
///
/// Contract
/// - Reads [`WorldTime`] for the scaled delta.
/// - Paused states keep their time but still show their current frame.
/// - [`TextureRegion`] is only written when the frame changes.
pub fn sprite_animation(
    mut query: Query<(&mut SpriteAnimationState, &mut TextureRegion)>,
    time: Res<WorldTime>,
    mut rng: Local<Rng>,
) {
    for (mut state, mut texture) in query.iter_mut() {
        let Some(frame) = state.advance(time.delta, &mut rng) else {
            continue;
        };
        if texture.region.as_ref() != Some(frame) {
            texture.region = Some(frame.clone());
        }
    }
}

/// Make `name` the current frame range of an animated sprite and restart it.
pub fn play_frame_range(world: &mut World, entity: Entity, name: &str) -> Result<(), FactoryError> {
    let mut entity_mut = world
        .get_entity_mut(entity)
        .map_err(|_| FactoryError::NoSuchEntity(entity))?;

    let mut animation = entity_mut
        .get::<SpriteAnimation>()
        .cloned()
        .ok_or(FactoryError::NotComposed {
            entity,
            component: "SpriteAnimation",
        })?;
    if !animation.frame_range_map.contains_key(name) {
        return Err(FactoryError::UnknownFrameRange(name.to_string()));
    }
    animation.current_animation = name.to_string();

    let Some(mut state) = entity_mut.get_mut::<SpriteAnimationState>() else {
        return Err(FactoryError::NotComposed {
            entity,
            component: "SpriteAnimationState",
        });
    };
    state.set(&animation)?;
    let first = state.frames().first().cloned();

    if let Some(mut texture) = entity_mut.get_mut::<TextureRegion>() {
        texture.region = first;
    }
    if let Some(mut current) = entity_mut.get_mut::<SpriteAnimation>() {
        *current = animation;
    }
    Ok(())
}
