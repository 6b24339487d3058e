//! Animated sprite factory.
//!
//! Creation of an animated sprite runs in a fixed order:
//!
//! 1. the animation is resolved and measured, the descriptor is normalized
//!    and validated (nothing is written yet);
//! 2. the general entity is spawned with its [`Dimensions`];
//! 3. [`SpriteFactory::compose`] attaches the sprite component set in one
//!    insert;
//! 4. the entity is parented to the root;
//! 5. the normalized definition, playback state and display region are
//!    written.
//!
//! Any error is reported in step 1, so a failed creation leaves the world
//! untouched.

use std::sync::Arc;

use bevy_ecs::prelude::*;
use log::{debug, warn};

use super::descriptor::{ItemDescriptor, SpriteAnimationDescriptor};
use super::{
    EntityKind, SpecializedFactory, adjust_node_hierarchy, create_general_entity, ensure_exists,
};
use crate::components::dimensions::Dimensions;
use crate::components::parentnode::ParentNode;
use crate::components::playmode::PlayMode;
use crate::components::spriteanimation::{DEFAULT_FRAME_RANGE, FrameRange, SpriteAnimation};
use crate::components::spriteanimationstate::SpriteAnimationState;
use crate::components::textureregion::TextureRegion;
use crate::error::FactoryError;
use crate::resources::atlasstore::AtlasRegion;
use crate::resources::resourceretriever::ResourceRetriever;

/// Components that turn a general entity into an animated sprite.
#[derive(Bundle, Default)]
pub struct AnimatedSpriteBundle {
    pub parent_node: ParentNode,
    pub texture_region: TextureRegion,
    pub sprite_animation: SpriteAnimation,
    pub sprite_animation_state: SpriteAnimationState,
}

/// Size of `region` in world units.
pub fn frame_dimensions(region: &AtlasRegion, multiplier: f32, pixel_to_world: f32) -> Dimensions {
    Dimensions::new(
        region.width as f32 * multiplier / pixel_to_world,
        region.height as f32 * multiplier / pixel_to_world,
    )
}

/// Measure `region` with the retriever's resolution multiplier and
/// pixel-to-world scale. Zero-sized regions and degenerate scales are errors.
pub fn measure_region(
    retriever: &dyn ResourceRetriever,
    region: &AtlasRegion,
) -> Result<Dimensions, FactoryError> {
    let dims = frame_dimensions(
        region,
        retriever.resolution_multiplier(),
        retriever.project_info().pixel_to_world,
    );
    let valid = |v: f32| v.is_finite() && v > 0.0;
    if !valid(dims.width) || !valid(dims.height) {
        return Err(FactoryError::InvalidDimensions {
            name: region.name.to_string(),
            width: dims.width,
            height: dims.height,
        });
    }
    Ok(dims)
}

/// A descriptor after resolution and normalization, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSprite {
    pub animation: SpriteAnimation,
    pub regions: Vec<AtlasRegion>,
}

pub struct SpriteFactory {
    retriever: Arc<dyn ResourceRetriever>,
}

impl SpriteFactory {
    pub fn new(retriever: Arc<dyn ResourceRetriever>) -> Self {
        Self { retriever }
    }

    /// Ordered frames of `name`; unknown and empty animations are errors.
    fn frames(&self, name: &str) -> Result<&[AtlasRegion], FactoryError> {
        let frames = self
            .retriever
            .sprite_animation(name)
            .ok_or_else(|| FactoryError::UnknownAnimation(name.to_string()))?;
        if frames.is_empty() {
            return Err(FactoryError::EmptyAnimation(name.to_string()));
        }
        Ok(frames)
    }

    /// Display size of the animation: first frame size scaled by the
    /// resolution multiplier and divided by the pixel-to-world scale.
    pub fn resolve_dimensions(&self, animation_name: &str) -> Result<Dimensions, FactoryError> {
        let frames = self.frames(animation_name)?;
        measure_region(self.retriever.as_ref(), &frames[0])
    }

    /// Attach the sprite component set to `entity` in a single insert.
    ///
    /// Fails without inserting anything if the entity is missing or already
    /// carries one of the components.
    pub fn compose(world: &mut World, entity: Entity) -> Result<(), FactoryError> {
        let entity_ref = world
            .get_entity(entity)
            .map_err(|_| FactoryError::NoSuchEntity(entity))?;
        let attached = [
            (entity_ref.contains::<ParentNode>(), "ParentNode"),
            (entity_ref.contains::<TextureRegion>(), "TextureRegion"),
            (entity_ref.contains::<SpriteAnimation>(), "SpriteAnimation"),
            (
                entity_ref.contains::<SpriteAnimationState>(),
                "SpriteAnimationState",
            ),
        ];
        if let Some((_, component)) = attached.iter().find(|(present, _)| *present) {
            return Err(FactoryError::AlreadyComposed {
                entity,
                component: *component,
            });
        }
        world
            .entity_mut(entity)
            .insert(AnimatedSpriteBundle::default());
        Ok(())
    }

    /// Resolve the animation of `descriptor` and normalize it into a
    /// definition whose current range exists and fits the frames.
    pub fn resolve(
        &self,
        descriptor: &SpriteAnimationDescriptor,
    ) -> Result<ResolvedSprite, FactoryError> {
        let mut animation = SpriteAnimation {
            animation_name: descriptor.animation_name.clone(),
            fps: descriptor.fps,
            ..Default::default()
        };

        for range in &descriptor.frame_ranges {
            animation
                .frame_range_map
                .insert(range.name.clone(), range.clone());
        }

        let play_mode = PlayMode::from_legacy_code(descriptor.play_mode);
        if play_mode.is_none() {
            warn!(
                "Unknown play mode code {} for '{}', falling back to Loop",
                descriptor.play_mode, descriptor.animation_name
            );
        }

        let regions = self.frames(&animation.animation_name)?.to_vec();

        for range in animation.frame_range_map.values() {
            if !range.fits(regions.len()) {
                return Err(FactoryError::FrameRangeOutOfBounds {
                    name: range.name.clone(),
                    start: range.start_frame,
                    end: range.end_frame,
                    len: regions.len(),
                });
            }
        }

        if animation.frame_range_map.is_empty() {
            animation.frame_range_map.insert(
                DEFAULT_FRAME_RANGE.to_string(),
                FrameRange::new(DEFAULT_FRAME_RANGE, 0, regions.len() - 1),
            );
        }

        animation.current_animation = match &descriptor.current_animation {
            Some(name) if animation.frame_range_map.contains_key(name) => name.clone(),
            Some(name) => return Err(FactoryError::UnknownFrameRange(name.clone())),
            // Smallest key; the map is non-empty at this point.
            None => animation
                .frame_range_map
                .keys()
                .next()
                .cloned()
                .unwrap_or_else(|| DEFAULT_FRAME_RANGE.to_string()),
        };

        animation.play_mode = play_mode.unwrap_or(PlayMode::Loop);

        Ok(ResolvedSprite { animation, regions })
    }

    /// Write a resolved sprite into the composed components of `entity`.
    fn apply(
        world: &mut World,
        entity: Entity,
        resolved: ResolvedSprite,
    ) -> Result<(), FactoryError> {
        let ResolvedSprite { animation, regions } = resolved;

        let mut state = SpriteAnimationState::default();
        state.set_all_regions(regions);
        state.set(&animation)?;
        let first = state.all_regions().first().cloned();

        let mut entity_mut = world
            .get_entity_mut(entity)
            .map_err(|_| FactoryError::NoSuchEntity(entity))?;
        let missing = [
            (entity_mut.contains::<TextureRegion>(), "TextureRegion"),
            (entity_mut.contains::<SpriteAnimation>(), "SpriteAnimation"),
            (
                entity_mut.contains::<SpriteAnimationState>(),
                "SpriteAnimationState",
            ),
        ];
        if let Some((_, component)) = missing.iter().find(|(present, _)| !*present) {
            return Err(FactoryError::NotComposed {
                entity,
                component: *component,
            });
        }

        if let Some(mut c) = entity_mut.get_mut::<SpriteAnimation>() {
            *c = animation;
        }
        if let Some(mut c) = entity_mut.get_mut::<SpriteAnimationState>() {
            *c = state;
        }
        if let Some(mut c) = entity_mut.get_mut::<TextureRegion>() {
            c.region = first;
        }
        Ok(())
    }

    /// Fill the composed sprite components of `entity` from `descriptor`.
    pub fn initialize(
        &self,
        world: &mut World,
        entity: Entity,
        descriptor: &SpriteAnimationDescriptor,
    ) -> Result<(), FactoryError> {
        let resolved = self.resolve(descriptor)?;
        Self::apply(world, entity, resolved)
    }

    /// Create an animated sprite as a child of `root`.
    pub fn create_animated_sprite(
        &self,
        world: &mut World,
        root: Entity,
        descriptor: &SpriteAnimationDescriptor,
    ) -> Result<Entity, FactoryError> {
        ensure_exists(world, root)?;
        let dimensions = self.resolve_dimensions(&descriptor.animation_name)?;
        let resolved = self.resolve(descriptor)?;
        let current = resolved.animation.current_animation.clone();

        let entity = create_general_entity(
            world,
            &descriptor.item,
            EntityKind::SpriteAnimation,
            dimensions,
        );
        Self::compose(world, entity)?;
        adjust_node_hierarchy(world, root, entity)?;
        Self::apply(world, entity, resolved)?;

        debug!(
            "Created animated sprite {:?} '{}' ({}x{}) playing '{}'",
            entity,
            descriptor.animation_name,
            dimensions.width,
            dimensions.height,
            current
        );
        Ok(entity)
    }
}

impl SpecializedFactory for SpriteFactory {
    fn create_specialized(
        &self,
        world: &mut World,
        root: Entity,
        item: &ItemDescriptor,
    ) -> Result<Entity, FactoryError> {
        match item {
            ItemDescriptor::SpriteAnimation(descriptor) => {
                self.create_animated_sprite(world, root, descriptor)
            }
            other => Err(FactoryError::DescriptorMismatch {
                expected: EntityKind::SpriteAnimation,
                found: other.kind(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::atlasstore::AtlasStore;
    use crate::resources::projectconfig::ProjectConfig;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn factory_with(frames: usize) -> SpriteFactory {
        let mut store = AtlasStore::new(&ProjectConfig::new());
        store.insert_animation(
            "hero",
            (0..frames)
                .map(|i| AtlasRegion::new("hero", i as i32, "hero.png", 100, 50))
                .collect(),
        );
        store.insert_animation("empty", Vec::new());
        SpriteFactory::new(Arc::new(store))
    }

    #[test]
    fn test_frame_dimensions() {
        let region = AtlasRegion::new("a", 0, "p.png", 100, 50);
        let dims = frame_dimensions(&region, 2.0, 100.0);
        assert!(approx_eq(dims.width, 2.0));
        assert!(approx_eq(dims.height, 1.0));
    }

    #[test]
    fn test_zero_sized_frame_is_rejected() {
        let mut store = AtlasStore::new(&ProjectConfig::new());
        store.insert_region(AtlasRegion::new("blank", 0, "p.png", 0, 0));
        let factory = SpriteFactory::new(Arc::new(store));
        assert_eq!(
            factory.resolve_dimensions("blank"),
            Err(FactoryError::InvalidDimensions {
                name: "blank".to_string(),
                width: 0.0,
                height: 0.0,
            })
        );
    }

    #[test]
    fn test_degenerate_scale_is_rejected() {
        let mut config = ProjectConfig::new();
        config.project.pixel_to_world = f32::NAN;
        let mut store = AtlasStore::new(&config);
        store.insert_region(AtlasRegion::new("hero", 0, "p.png", 10, 10));
        let factory = SpriteFactory::new(Arc::new(store));
        assert!(matches!(
            factory.resolve_dimensions("hero"),
            Err(FactoryError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_resolve_dimensions_errors() {
        let factory = factory_with(3);
        assert_eq!(
            factory.resolve_dimensions("nope"),
            Err(FactoryError::UnknownAnimation("nope".to_string()))
        );
        assert_eq!(
            factory.resolve_dimensions("empty"),
            Err(FactoryError::EmptyAnimation("empty".to_string()))
        );
    }

    #[test]
    fn test_resolve_synthesizes_default_range() {
        let factory = factory_with(5);
        let resolved = factory
            .resolve(&SpriteAnimationDescriptor::new("hero"))
            .unwrap();
        assert_eq!(resolved.animation.frame_range_map.len(), 1);
        assert_eq!(
            resolved.animation.frame_range_map[DEFAULT_FRAME_RANGE],
            FrameRange::new(DEFAULT_FRAME_RANGE, 0, 4)
        );
        assert_eq!(resolved.animation.current_animation, DEFAULT_FRAME_RANGE);
    }

    #[test]
    fn test_resolve_picks_smallest_key() {
        let factory = factory_with(5);
        let descriptor = SpriteAnimationDescriptor::new("hero")
            .with_frame_range(FrameRange::new("walk", 0, 2))
            .with_frame_range(FrameRange::new("idle", 3, 4));
        let resolved = factory.resolve(&descriptor).unwrap();
        assert_eq!(resolved.animation.current_animation, "idle");
    }

    #[test]
    fn test_resolve_duplicate_names_last_wins() {
        let factory = factory_with(5);
        let descriptor = SpriteAnimationDescriptor::new("hero")
            .with_frame_range(FrameRange::new("walk", 0, 2))
            .with_frame_range(FrameRange::new("walk", 1, 4));
        let resolved = factory.resolve(&descriptor).unwrap();
        assert_eq!(
            resolved.animation.frame_range_map["walk"],
            FrameRange::new("walk", 1, 4)
        );
    }

    #[test]
    fn test_resolve_unknown_play_mode_defaults_to_loop() {
        let factory = factory_with(2);
        let resolved = factory
            .resolve(&SpriteAnimationDescriptor::new("hero").with_play_mode(42))
            .unwrap();
        assert_eq!(resolved.animation.play_mode, PlayMode::Loop);
    }

    #[test]
    fn test_resolve_rejects_out_of_bounds_range() {
        let factory = factory_with(3);
        let descriptor =
            SpriteAnimationDescriptor::new("hero").with_frame_range(FrameRange::new("run", 0, 3));
        assert!(matches!(
            factory.resolve(&descriptor),
            Err(FactoryError::FrameRangeOutOfBounds { len: 3, .. })
        ));
    }

    #[test]
    fn test_resolve_rejects_unknown_current_range() {
        let factory = factory_with(3);
        let descriptor = SpriteAnimationDescriptor::new("hero")
            .with_frame_range(FrameRange::new("run", 0, 2))
            .with_current("jump");
        assert_eq!(
            factory.resolve(&descriptor),
            Err(FactoryError::UnknownFrameRange("jump".to_string()))
        );
    }

    #[test]
    fn test_compose_twice_fails() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();
        SpriteFactory::compose(&mut world, entity).unwrap();
        assert!(matches!(
            SpriteFactory::compose(&mut world, entity),
            Err(FactoryError::AlreadyComposed { .. })
        ));
    }

    #[test]
    fn test_initialize_requires_composition() {
        let factory = factory_with(3);
        let mut world = World::new();
        let entity = world.spawn_empty().id();
        assert!(matches!(
            factory.initialize(&mut world, entity, &SpriteAnimationDescriptor::new("hero")),
            Err(FactoryError::NotComposed { .. })
        ));
    }
}
