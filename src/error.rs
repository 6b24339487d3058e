//! Error types for entity creation and asset/config loading.
//!
//! Every variant of [`FactoryError`] is a fatal precondition violation for
//! the entity being created: it is returned to the caller before any
//! component of that entity is written.

use bevy_ecs::entity::Entity;

use crate::factory::EntityKind;

/// Errors raised while composing or initializing an entity.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FactoryError {
    /// The target entity does not exist in the world.
    #[error("entity {0:?} does not exist")]
    NoSuchEntity(Entity),

    /// One of the sprite components is already attached to the entity.
    #[error("entity {entity:?} already carries component {component}")]
    AlreadyComposed {
        entity: Entity,
        component: &'static str,
    },

    /// A component the operation writes to has not been attached.
    #[error("entity {entity:?} is missing component {component}")]
    NotComposed {
        entity: Entity,
        component: &'static str,
    },

    /// The retriever does not know the animation name.
    #[error("unknown sprite animation '{0}'")]
    UnknownAnimation(String),

    /// The animation resolves to zero frames, nothing can be measured.
    #[error("sprite animation '{0}' has no frames")]
    EmptyAnimation(String),

    /// The measured size of a region is not strictly positive.
    #[error("region '{name}' measures {width}x{height} world units")]
    InvalidDimensions {
        name: String,
        width: f32,
        height: f32,
    },

    /// The retriever does not know the image region name.
    #[error("unknown texture region '{0}'")]
    UnknownRegion(String),

    /// A descriptor frame range does not fit the resolved frame sequence.
    #[error("frame range '{name}' [{start}, {end}] is out of bounds for {len} frames")]
    FrameRangeOutOfBounds {
        name: String,
        start: usize,
        end: usize,
        len: usize,
    },

    /// The requested current frame range is not in the frame-range map.
    #[error("frame range '{0}' is not defined")]
    UnknownFrameRange(String),

    /// No factory has been registered for the entity kind.
    #[error("no factory registered for {0:?}")]
    NoFactory(EntityKind),

    /// The descriptor handed to a factory is for another kind of entity.
    #[error("factory for {expected:?} received a {found:?} descriptor")]
    DescriptorMismatch {
        expected: EntityKind,
        found: EntityKind,
    },
}

/// Errors raised while loading project configuration, atlases or scenes.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse INI: {0}")]
    Ini(String),

    #[error("invalid value for [{section}] {key}: {reason}")]
    InvalidValue {
        section: &'static str,
        key: &'static str,
        reason: String,
    },

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}
