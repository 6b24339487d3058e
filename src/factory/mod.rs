//! Entity factories.
//!
//! Scene items are created in two stages. Every kind first goes through
//! [`create_general_entity`], which spawns the entity with its identity,
//! transform, ordering, tint and precomputed [`Dimensions`]. A
//! [`SpecializedFactory`] registered for the item's [`EntityKind`] then
//! attaches and initializes the kind-specific components.
//!
//! [`EntityFactory`] is the dispatch table from kind to factory. All factories
//! share one [`ResourceRetriever`] injected at construction and operate on the
//! `World` passed to each call; nothing is kept in global state.
//!
//! # Related
//!
//! - [`sprite::SpriteFactory`] – animated sprites
//! - [`image::ImageFactory`] – static images

pub mod descriptor;
pub mod image;
pub mod sprite;

use std::sync::Arc;

use bevy_ecs::prelude::*;
use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::components::dimensions::Dimensions;
use crate::components::mainitem::MainItem;
use crate::components::mapposition::MapPosition;
use crate::components::parentnode::ParentNode;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::tint::Tint;
use crate::components::zindex::ZIndex;
use crate::error::FactoryError;
use crate::resources::resourceretriever::ResourceRetriever;

use descriptor::{ItemDescriptor, MainItemDescriptor};

/// Tag selecting the factory for an item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Image,
    SpriteAnimation,
}

/// Capability shared by all kind-specific factories.
pub trait SpecializedFactory: Send + Sync {
    /// Create the entity for `item` as a child of `root` and return it.
    fn create_specialized(
        &self,
        world: &mut World,
        root: Entity,
        item: &ItemDescriptor,
    ) -> Result<Entity, FactoryError>;
}

/// Spawn the entity with the components every scene item carries.
pub fn create_general_entity(
    world: &mut World,
    item: &MainItemDescriptor,
    kind: EntityKind,
    dimensions: Dimensions,
) -> Entity {
    let entity = world
        .spawn((
            MainItem {
                unique_id: item.unique_id,
                item_identifier: item.item_identifier.clone(),
                item_name: item.item_name.clone(),
                tags: item.tags.clone(),
                kind,
            },
            MapPosition::new(item.x, item.y),
            Rotation::from_degrees(item.rotation),
            Scale::new(item.scale_x, item.scale_y),
            ZIndex(item.z_index),
            Tint::from_normalized(item.tint),
            dimensions,
        ))
        .id();
    debug!("Spawned general entity {:?} ({:?})", entity, kind);
    entity
}

/// Fail unless `entity` exists in `world`.
pub fn ensure_exists(world: &World, entity: Entity) -> Result<(), FactoryError> {
    world
        .get_entity(entity)
        .map(|_| ())
        .map_err(|_| FactoryError::NoSuchEntity(entity))
}

/// Make `entity` a child of `root` and record the parent in its [`ParentNode`].
pub fn adjust_node_hierarchy(
    world: &mut World,
    root: Entity,
    entity: Entity,
) -> Result<(), FactoryError> {
    ensure_exists(world, entity)?;
    world
        .get_entity_mut(root)
        .map_err(|_| FactoryError::NoSuchEntity(root))?
        .add_child(entity);
    if let Some(mut parent_node) = world.get_mut::<ParentNode>(entity) {
        parent_node.parent = Some(root);
    }
    Ok(())
}

/// Registry dispatching creation requests to the factory of each kind.
pub struct EntityFactory {
    retriever: Arc<dyn ResourceRetriever>,
    factories: FxHashMap<EntityKind, Box<dyn SpecializedFactory>>,
}

impl EntityFactory {
    /// Create a registry with no factories.
    pub fn new(retriever: Arc<dyn ResourceRetriever>) -> Self {
        Self {
            retriever,
            factories: FxHashMap::default(),
        }
    }

    /// Create a registry with the built-in image and sprite factories.
    pub fn with_default_factories(retriever: Arc<dyn ResourceRetriever>) -> Self {
        let mut factory = Self::new(retriever);
        let image = image::ImageFactory::new(factory.retriever.clone());
        let sprite = sprite::SpriteFactory::new(factory.retriever.clone());
        factory.register(EntityKind::Image, image);
        factory.register(EntityKind::SpriteAnimation, sprite);
        factory
    }

    /// Register (or replace) the factory for `kind`.
    pub fn register(&mut self, kind: EntityKind, factory: impl SpecializedFactory + 'static) {
        self.factories.insert(kind, Box::new(factory));
    }

    /// The retriever shared by the registered factories.
    pub fn retriever(&self) -> &Arc<dyn ResourceRetriever> {
        &self.retriever
    }

    /// Create one item under `root`.
    pub fn create_entity(
        &self,
        world: &mut World,
        root: Entity,
        item: &ItemDescriptor,
    ) -> Result<Entity, FactoryError> {
        let kind = item.kind();
        let factory = self
            .factories
            .get(&kind)
            .ok_or(FactoryError::NoFactory(kind))?;
        factory.create_specialized(world, root, item)
    }

    /// Create every item under `root`, stopping at the first failure.
    pub fn create_entities<'a>(
        &self,
        world: &mut World,
        root: Entity,
        items: impl IntoIterator<Item = &'a ItemDescriptor>,
    ) -> Result<Vec<Entity>, FactoryError> {
        items
            .into_iter()
            .map(|item| self.create_entity(world, root, item))
            .collect()
    }
}
