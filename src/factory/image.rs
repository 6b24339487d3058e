//! Static image factory.
//!
//! An image is a general entity with a [`ParentNode`] and a fixed
//! [`TextureRegion`]; its dimensions come from the region size the same way
//! an animated sprite's come from its first frame.

use std::sync::Arc;

use bevy_ecs::prelude::*;
use log::debug;

use super::descriptor::{ItemDescriptor, SimpleImageDescriptor};
use super::sprite::measure_region;
use super::{
    EntityKind, SpecializedFactory, adjust_node_hierarchy, create_general_entity, ensure_exists,
};
use crate::components::parentnode::ParentNode;
use crate::components::textureregion::TextureRegion;
use crate::error::FactoryError;
use crate::resources::resourceretriever::ResourceRetriever;

pub struct ImageFactory {
    retriever: Arc<dyn ResourceRetriever>,
}

impl ImageFactory {
    pub fn new(retriever: Arc<dyn ResourceRetriever>) -> Self {
        Self { retriever }
    }

    pub fn create_image(
        &self,
        world: &mut World,
        root: Entity,
        descriptor: &SimpleImageDescriptor,
    ) -> Result<Entity, FactoryError> {
        ensure_exists(world, root)?;
        let region = self
            .retriever
            .texture_region(&descriptor.image_name)
            .ok_or_else(|| FactoryError::UnknownRegion(descriptor.image_name.clone()))?
            .clone();
        let dimensions = measure_region(self.retriever.as_ref(), &region)?;

        let entity = create_general_entity(world, &descriptor.item, EntityKind::Image, dimensions);
        world.entity_mut(entity).insert((
            ParentNode::default(),
            TextureRegion {
                region: Some(region),
            },
        ));
        adjust_node_hierarchy(world, root, entity)?;

        debug!("Created image {:?} '{}'", entity, descriptor.image_name);
        Ok(entity)
    }
}

impl SpecializedFactory for ImageFactory {
    fn create_specialized(
        &self,
        world: &mut World,
        root: Entity,
        item: &ItemDescriptor,
    ) -> Result<Entity, FactoryError> {
        match item {
            ItemDescriptor::Image(descriptor) => self.create_image(world, root, descriptor),
            other => Err(FactoryError::DescriptorMismatch {
                expected: EntityKind::Image,
                found: other.kind(),
            }),
        }
    }
}
