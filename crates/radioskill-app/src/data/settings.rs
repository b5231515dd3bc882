//! Skill settings
//!
//! User-tunable knobs persisted as JSON in the config directory.

use crate::config::providers::RADIO_BROWSER_DEFAULT_SERVER;
use crate::config::resolve::{DEFAULT_STATION_ID, MIN_BITRATE_KBPS};
use crate::config::resources::DEFAULT_LOCALE;
use crate::data::storage;
use crate::error::Result;
use radioskill::config::download::DEFAULT_PROGRAM;
use radioskill::stream::Conduit;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings data file name
const SETTINGS_FILE: &str = "settings.json";

/// Settings file format version for migrations
const SETTINGS_VERSION: u32 = 1;

/// Skill settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// File format version
    #[serde(default = "default_version")]
    pub version: u32,

    // === Directory ===
    /// Radio Browser API server
    #[serde(default = "default_server")]
    pub radio_browser_server: String,

    /// Minimum bitrate (kbps) for free-text search
    #[serde(default = "default_min_bitrate")]
    pub min_bitrate: u32,

    /// Station id played for an empty phrase
    #[serde(default = "default_station_id")]
    pub default_station_id: String,

    // === Playback ===
    /// Fetcher binary (must accept curl's `-L -s <url> -o <path>`)
    #[serde(default = "default_download_program")]
    pub download_program: String,

    /// Cache directory override (holds the conduit)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,

    /// Player command used by the terminal host; the conduit path is appended
    #[serde(default = "default_player_command")]
    pub player_command: Vec<String>,

    // === Locale ===
    /// Locale used to pick dialog and regex resources
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_version() -> u32 {
    SETTINGS_VERSION
}

fn default_server() -> String {
    RADIO_BROWSER_DEFAULT_SERVER.to_string()
}

fn default_min_bitrate() -> u32 {
    MIN_BITRATE_KBPS
}

fn default_station_id() -> String {
    DEFAULT_STATION_ID.to_string()
}

fn default_download_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

fn default_player_command() -> Vec<String> {
    vec!["mpg123".to_string(), "-q".to_string()]
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            radio_browser_server: default_server(),
            min_bitrate: default_min_bitrate(),
            default_station_id: default_station_id(),
            download_program: default_download_program(),
            cache_dir: None,
            player_command: default_player_command(),
            locale: default_locale(),
        }
    }
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from default storage location
    pub fn load() -> Result<Self> {
        Ok(storage::load::<Settings>(SETTINGS_FILE)?.unwrap_or_default())
    }

    /// Load settings from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(storage::load_from::<Settings>(path)?.unwrap_or_default())
    }

    /// Save settings to default storage location
    pub fn save(&self) -> Result<()> {
        storage::save(SETTINGS_FILE, self)
    }

    /// Save settings to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        storage::save_to(path, self)
    }

    /// Effective cache directory (override or platform default)
    pub fn resolved_cache_dir(&self) -> Result<PathBuf> {
        match &self.cache_dir {
            Some(dir) => Ok(dir.clone()),
            None => storage::cache_dir(),
        }
    }

    /// The conduit inside the effective cache directory
    pub fn conduit(&self) -> Result<Conduit> {
        let dir = self.resolved_cache_dir()?;
        storage::ensure_dir(&dir)?;
        Ok(Conduit::in_dir(&dir))
    }
}
