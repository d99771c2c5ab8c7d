//! Editor configuration.
//!
//! Defaults applied to newly created annotations and the interaction
//! tolerances a host uses for knob picking and drags. Stored as JSON.

use std::path::Path;

use markup_geometry::{Point, delta};
use serde::{Deserialize, Serialize};

use crate::knobs::{self, KNOB_HIT_RADIUS, Knob};
use crate::model::{
    AnnotationId, AnnotationModel, Color, TextContent, TextStyle, next_number_value,
};
use crate::transform::EditIntent;

/// Log level setting for the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Get the display name for this log level.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Editor configuration that can be saved and loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Version of the configuration file format
    #[serde(default = "default_version")]
    pub version: u32,

    /// Defaults for new annotations
    #[serde(default)]
    pub defaults: AnnotationDefaults,

    /// Pointer tolerances
    #[serde(default)]
    pub interaction: InteractionSettings,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

/// Values applied to annotations the user creates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationDefaults {
    /// Stroke color of new shapes
    #[serde(default)]
    pub default_color: Color,
    /// Document-level text style
    #[serde(default)]
    pub text_style: TextStyle,
    /// Label of the first numbered marker
    #[serde(default = "default_first_number")]
    pub first_number: u32,
}

fn default_first_number() -> u32 {
    1
}

impl AnnotationDefaults {
    /// Numbered marker at `position`, labelled after the highest marker in
    /// `annotations`.
    pub fn new_number(&self, annotations: &[AnnotationModel], position: Point) -> AnnotationModel {
        AnnotationModel::number(
            AnnotationId::generate(),
            position,
            next_number_value(annotations, self.first_number),
            self.default_color,
        )
    }

    /// Empty text box in the default text style.
    pub fn new_text(&self, origin: Point, extent: Point) -> AnnotationModel {
        AnnotationModel::text(
            AnnotationId::generate(),
            origin,
            extent,
            TextContent::new("", self.text_style),
            self.default_color,
        )
    }
}

impl Default for AnnotationDefaults {
    fn default() -> Self {
        Self {
            default_color: Color::default(),
            text_style: TextStyle::default(),
            first_number: default_first_number(),
        }
    }
}

/// Pointer tolerances, in image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionSettings {
    /// How far from a knob a press still grabs it
    #[serde(default = "default_knob_hit_radius")]
    pub knob_hit_radius: f32,
    /// Pointer travel below which a press counts as a click
    #[serde(default = "default_min_drag_distance")]
    pub min_drag_distance: f32,
}

fn default_knob_hit_radius() -> f32 {
    KNOB_HIT_RADIUS
}

fn default_min_drag_distance() -> f32 {
    3.0
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            knob_hit_radius: default_knob_hit_radius(),
            min_drag_distance: default_min_drag_distance(),
        }
    }
}

impl InteractionSettings {
    /// Check if pointer travel from `from` to `to` is a drag rather than a click.
    pub fn is_drag(&self, from: Point, to: Point) -> bool {
        from.distance_to(&to) >= self.min_drag_distance
    }

    /// Knob of `annotation` within grabbing distance of `point`.
    pub fn pick_knob(&self, annotation: &AnnotationModel, point: Point) -> Option<Knob> {
        knobs::knob_pair(annotation)?
            .hit_test(point, self.knob_hit_radius)
            .copied()
    }

    /// Edit for a press at `from` released at `to` on a selected annotation.
    ///
    /// `None` for a click. A press on a reshaping knob drags that knob;
    /// anywhere else the whole annotation moves.
    pub fn drag_intent(&self, annotation: &AnnotationModel, from: Point, to: Point) -> Option<EditIntent> {
        if !self.is_drag(from, to) {
            return None;
        }

        match self.pick_knob(annotation, from) {
            Some(knob) if knob.role.reshapes() => Some(EditIntent::Resize {
                knob: knob.role,
                to,
            }),
            _ => Some(EditIntent::Move(delta(from, to))),
        }
    }
}

impl EditorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            defaults: AnnotationDefaults::default(),
            interaction: InteractionSettings::default(),
            log_level: LogLevel::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Get the default config filename.
    pub fn default_filename() -> &'static str {
        "markup-config.json"
    }

    /// Get the default config file path.
    /// Returns None on WASM (no filesystem access).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("markup").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("markup")
                    .join(Self::default_filename())
            })
        }
    }

    /// Read and parse the configuration at `path`.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Write the configuration to `path`, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;

        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Try to load configuration from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;

        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match Self::load_from_path(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("Failed to load config file {:?}: {}", path, e);
                None
            }
        }
    }

    /// Save configuration to the default path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_default_path(&self) -> Result<(), ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        self.save_to_path(&path)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
