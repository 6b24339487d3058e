//! Scene sprite command line entry point.
//!
//! Loads a project configuration, an atlas manifest and a scene file, creates
//! every scene item under a fresh root entity and optionally runs the sprite
//! playback system for a number of ticks, logging the resulting state.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --project project.ini --atlas atlas.json --scene scene.json --ticks 10
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info};

use scenesprite::components::dimensions::Dimensions;
use scenesprite::components::mainitem::MainItem;
use scenesprite::components::spriteanimation::SpriteAnimation;
use scenesprite::components::textureregion::TextureRegion;
use scenesprite::error::ConfigError;
use scenesprite::factory::EntityFactory;
use scenesprite::factory::descriptor::SceneDescriptor;
use scenesprite::resources::atlasstore::{AtlasManifest, AtlasStore};
use scenesprite::resources::projectconfig::ProjectConfig;
use scenesprite::resources::worldtime::WorldTime;
use scenesprite::systems::spriteanimation::sprite_animation;

/// Build scene items from an atlas and a scene file.
#[derive(Parser)]
#[command(version, about = "Creates animated sprites and images from a scene file.")]
struct Cli {
    /// Project configuration INI file. Defaults are used when omitted.
    #[arg(long, value_name = "PATH")]
    project: Option<PathBuf>,

    /// Atlas manifest JSON file.
    #[arg(long, value_name = "PATH")]
    atlas: PathBuf,

    /// Scene JSON file.
    #[arg(long, value_name = "PATH")]
    scene: PathBuf,

    /// Number of playback ticks to run after creation.
    #[arg(long, default_value_t = 0)]
    ticks: u32,

    /// Seconds per playback tick.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    delta: f32,
}

fn load_scene(path: &Path) -> Result<SceneDescriptor, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = ProjectConfig::new();
    if let Some(path) = &cli.project {
        config = ProjectConfig::with_path(path);
        if let Err(e) = config.load_from_file() {
            error!("Failed to load project config: {}", e);
            return ExitCode::FAILURE;
        }
    }

    let manifest = match AtlasManifest::load_from_file(&cli.atlas.display().to_string()) {
        Ok(m) => m,
        Err(e) => {
            error!("Failed to load atlas: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let scene = match load_scene(&cli.scene) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to load scene: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let store = Arc::new(AtlasStore::from_manifest(&config, &manifest));
    let factory = EntityFactory::with_default_factories(store);

    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    let root = world.spawn_empty().id();

    let entities = match factory.create_entities(&mut world, root, &scene.items) {
        Ok(entities) => entities,
        Err(e) => {
            error!("Failed to create scene: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("Created {} items under root {:?}", entities.len(), root);

    let mut update = Schedule::default();
    update.add_systems(sprite_animation);
    for _ in 0..cli.ticks {
        world.resource_mut::<WorldTime>().advance(cli.delta);
        update.run(&mut world);
    }

    for entity in entities {
        let Some(item) = world.get::<MainItem>(entity) else {
            continue;
        };
        let dims = world.get::<Dimensions>(entity).copied().unwrap_or_default();
        let frame = world
            .get::<TextureRegion>(entity)
            .and_then(|t| t.region.as_ref())
            .map(|r| format!("{}#{}", r.name, r.index))
            .unwrap_or_else(|| "-".to_string());
        match world.get::<SpriteAnimation>(entity) {
            Some(anim) => info!(
                "{:?} {:?} '{}' {}x{} animation '{}' range '{}' {:?} @ {} fps, frame {}",
                entity,
                item.kind,
                item.item_identifier,
                dims.width,
                dims.height,
                anim.animation_name,
                anim.current_animation,
                anim.play_mode,
                anim.fps,
                frame
            ),
            None => info!(
                "{:?} {:?} '{}' {}x{} frame {}",
                entity, item.kind, item.item_identifier, dims.width, dims.height, frame
            ),
        }
    }

    ExitCode::SUCCESS
}
