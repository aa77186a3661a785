//! Immutable startup configuration.
//!
//! Built once from defaults, an optional JSON override file, and the CLI, then
//! inserted as a resource. Nothing mutates it afterwards.

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use bevy::window::PresentMode;
use serde::{Deserialize, Serialize};

use super::cli::CliArgs;
use super::day_segment::{DaySegment, Rgb, SegmentTable};

/// Default file name for the config override.
const CONFIG_FILE_NAME: &str = "config.json";

/// Default file name for the diagnostic log.
const LOG_FILE_NAME: &str = "daycycle.log";

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayCycleConfig {
    pub window: WindowSettings,
    pub locale: Locale,
    pub palette: SegmentTable<Rgb>,
    /// Where the diagnostic sink appends its lines.
    pub log_path: PathBuf,
    /// Set from `-d`; never read from the config file.
    #[serde(skip)]
    pub debug: bool,
}

impl Default for DayCycleConfig {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            locale: Locale::default(),
            palette: SegmentTable::from_fn(DaySegment::color),
            log_path: std::env::temp_dir().join(LOG_FILE_NAME),
            debug: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "day cycle".to_string(),
            width: 400.0,
            height: 225.0,
        }
    }
}

impl WindowSettings {
    /// Falls back to the default size when either dimension is not a
    /// positive, finite number.
    pub fn validated(self) -> Self {
        let usable = |v: f32| v.is_finite() && v > 0.0;
        if usable(self.width) && usable(self.height) {
            return self;
        }

        let defaults = Self::default();
        warn!(
            "Invalid window size {}x{} in config, using {}x{}",
            self.width, self.height, defaults.width, defaults.height
        );
        Self {
            width: defaults.width,
            height: defaults.height,
            ..self
        }
    }

    /// Fixed-size, vsynced primary window.
    pub fn to_window(&self) -> Window {
        Window {
            title: self.title.clone(),
            resolution: (self.width, self.height).into(),
            resizable: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

/// Static string table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locale {
    pub title: String,
    pub subtitle: String,
    pub segments: SegmentTable<String>,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            title: "Day Cycle".to_string(),
            subtitle: "Press Enter".to_string(),
            segments: SegmentTable::from_fn(|segment| segment.label().to_string()),
        }
    }
}

impl DayCycleConfig {
    /// Builds the startup config: defaults, then the override file if present,
    /// then the CLI flags.
    pub fn load(cli: &CliArgs) -> Self {
        let mut config = match Self::get_config_path() {
            Some(path) => Self::load_from_file(&path),
            None => {
                warn!("Could not determine config directory, using default config");
                Self::default()
            }
        };
        config.debug = cli.debug;
        config
    }

    /// Reads a config override, falling back to defaults when the file is
    /// missing or unusable.
    pub fn load_from_file(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<Self>(&contents) {
                Ok(mut config) => {
                    info!("Loaded config from {:?}", path);
                    config.window = config.window.validated();
                    config
                }
                Err(e) => {
                    warn!("Failed to parse config file {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Returns the platform-specific path for the config override.
    ///
    /// - macOS: ~/Library/Application Support/daycycle/
    /// - Linux: ~/.config/daycycle/
    /// - Windows: %APPDATA%/daycycle/
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("daycycle");
            path.push(CONFIG_FILE_NAME);
            path
        })
    }

    pub fn label_of(&self, segment: DaySegment) -> &str {
        self.locale.segments.get(segment)
    }

    pub fn color_of(&self, segment: DaySegment) -> Rgb {
        *self.palette.get(segment)
    }

    /// Title and subtitle shown before the first transition.
    pub fn banner(&self) -> String {
        format!("{}\n{}", self.locale.title, self.locale.subtitle)
    }
}
