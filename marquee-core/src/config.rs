use crate::constants::{BACKGROUND_CHAR, FONT_MARGIN, FRAME_INTERVAL, INK_CHAR};
use crate::error::ConfigError;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for Marquee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub font: FontConfig,
    pub display: DisplayConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// TrueType/OpenType font file
    pub path: PathBuf,
    /// Rows left unused by the font: pixel height is `rows - margin`
    pub margin: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Button poll per frame in milliseconds; sets the scroll speed
    pub frame_interval_ms: u64,
    /// Character for ink cells
    pub ink: char,
    /// Character for background cells
    pub background: char,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InputConfig {
    /// Language code handed to the text source (None = from the locale)
    pub language: Option<String>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("roboto.ttf"),
            margin: FONT_MARGIN,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: FRAME_INTERVAL.as_millis() as u64,
            ink: INK_CHAR,
            background: BACKGROUND_CHAR,
        }
    }
}

impl Config {
    /// Load configuration
    ///
    /// An explicit path must exist. Without one, the default location is used
    /// if present, otherwise built-in defaults. Nothing is written back.
    pub fn load(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(&path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    info!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// `~/.config/marquee/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("marquee");
            p.push("config.toml");
            p
        })
    }
}

mod dirs {
    use std::path::PathBuf;

    pub fn config_dir() -> Option<PathBuf> {
        std::env::var_os("HOME").map(|home| {
            let mut path = PathBuf::from(home);
            path.push(".config");
            path
        })
    }
}
