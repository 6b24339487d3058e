//! Project configuration.
//!
//! Holds the values every factory needs to convert atlas pixels into world
//! units: the pixel-to-world divisor, the resolution the art was authored at,
//! and the resolution currently loaded. Values are loaded from an INI file;
//! missing keys keep their defaults.
//!
//! # Configuration File Format
//!
//! ```ini
//! [project]
//! pixel_to_world = 100
//!
//! [original_resolution]
//! width = 1920
//! height = 1080
//! base = 0
//!
//! [resolution]
//! name = hd
//! width = 1280
//! height = 720
//! base = 0
//! ```

use configparser::ini::Ini;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

const DEFAULT_PIXEL_TO_WORLD: f32 = 1.0;
const DEFAULT_WIDTH: u32 = 1920;
const DEFAULT_HEIGHT: u32 = 1080;
const DEFAULT_RESOLUTION_NAME: &str = "orig";
const DEFAULT_CONFIG_PATH: &str = "./project.ini";

/// A named screen resolution.
///
/// `base` selects the axis used when comparing against another resolution:
/// `0` scales by width, anything else scales by height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionEntry {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub base: i32,
}

impl Default for ResolutionEntry {
    fn default() -> Self {
        Self {
            name: DEFAULT_RESOLUTION_NAME.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            base: 0,
        }
    }
}

impl ResolutionEntry {
    pub fn new(name: impl Into<String>, width: u32, height: u32, base: i32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            base,
        }
    }

    /// Factor that brings regions packed at this resolution back to the
    /// size they had at `original`.
    ///
    /// Atlases for a smaller resolution hold proportionally smaller regions,
    /// so multiplying their pixel size by `original / self` keeps the
    /// measured size the same at every resolution. A zero-sized entry yields
    /// `1.0`.
    pub fn multiplier(&self, original: &ResolutionEntry) -> f32 {
        let (current, reference) = if self.base == 0 {
            (self.width, original.width)
        } else {
            (self.height, original.height)
        };
        if current == 0 {
            return 1.0;
        }
        reference as f32 / current as f32
    }
}

/// Project-wide values shared by all scenes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInfo {
    /// Pixels per world unit.
    pub pixel_to_world: f32,
    /// Resolution the assets were authored at.
    pub original_resolution: ResolutionEntry,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            pixel_to_world: DEFAULT_PIXEL_TO_WORLD,
            original_resolution: ResolutionEntry::default(),
        }
    }
}

/// Project configuration loaded once at startup.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub project: ProjectInfo,
    /// Resolution whose atlases are currently loaded.
    pub loaded_resolution: ResolutionEntry,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectConfig {
    /// Create a configuration where the loaded resolution is the original one.
    pub fn new() -> Self {
        Self {
            project: ProjectInfo::default(),
            loaded_resolution: ResolutionEntry::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Resolution multiplier of the loaded resolution.
    pub fn multiplier(&self) -> f32 {
        self.loaded_resolution
            .multiplier(&self.project.original_resolution)
    }

    /// Load configuration from the INI file at `config_path`.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(&self.config_path).map_err(|source| ConfigError::Io {
                path: self.config_path.display().to_string(),
                source,
            })?;
        self.load_from_str(&content)
    }

    /// Load configuration from INI text. Missing values retain their current values.
    pub fn load_from_str(&mut self, content: &str) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config.read(content.to_string()).map_err(ConfigError::Ini)?;

        // [project] section
        if let Some(ptw) = config
            .getfloat("project", "pixel_to_world")
            .map_err(ConfigError::Ini)?
        {
            if !ptw.is_finite() || ptw <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    section: "project",
                    key: "pixel_to_world",
                    reason: format!("must be a positive number, got {}", ptw),
                });
            }
            self.project.pixel_to_world = ptw as f32;
        }

        read_resolution(
            &config,
            "original_resolution",
            &mut self.project.original_resolution,
        )?;
        read_resolution(&config, "resolution", &mut self.loaded_resolution)?;

        info!(
            "Loaded project config: pixel_to_world={}, original {}x{}, loaded '{}' {}x{} (multiplier {})",
            self.project.pixel_to_world,
            self.project.original_resolution.width,
            self.project.original_resolution.height,
            self.loaded_resolution.name,
            self.loaded_resolution.width,
            self.loaded_resolution.height,
            self.multiplier()
        );

        Ok(())
    }
}

fn read_resolution(
    config: &Ini,
    section: &'static str,
    entry: &mut ResolutionEntry,
) -> Result<(), ConfigError> {
    if let Some(name) = config.get(section, "name") {
        entry.name = name;
    }
    if let Some(width) = config.getuint(section, "width").map_err(ConfigError::Ini)? {
        entry.width = positive_extent(section, "width", width)?;
    }
    if let Some(height) = config.getuint(section, "height").map_err(ConfigError::Ini)? {
        entry.height = positive_extent(section, "height", height)?;
    }
    if let Some(base) = config.getint(section, "base").map_err(ConfigError::Ini)? {
        entry.base = base as i32;
    }
    Ok(())
}

fn positive_extent(
    section: &'static str,
    key: &'static str,
    value: u64,
) -> Result<u32, ConfigError> {
    match u32::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(ConfigError::InvalidValue {
            section,
            key,
            reason: format!("must be between 1 and {}, got {}", u32::MAX, value),
        }),
    }
}
