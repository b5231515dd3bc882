//! Common data types
//!
//! The station record shared by the directory, the resolver, and the skill.

use serde::{Deserialize, Serialize};

// =============================================================================
// Station - A resolved, playable radio station
// =============================================================================

/// A radio station resolved from the directory
///
/// Stations are produced by directory lookups and never modified afterwards;
/// the builder methods are only used while converting a directory record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Station {
    // === Basic Info ===
    /// Display name
    pub name: String,
    /// Stream URL (untrusted, escaped before it reaches the fetcher)
    pub url: String,
    /// Logo/favicon URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,

    // === Audio ===
    /// Audio codec (e.g., "MP3", "AAC")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codec: Option<String>,
    /// Bitrate in kbps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u32>,

    // === Provider Info ===
    /// Provider name (e.g., "radio-browser")
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Provider-specific station ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
}

fn default_provider() -> String {
    "manual".to_string()
}

impl Station {
    /// Create a new station with minimal info
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            favicon: None,
            codec: None,
            bitrate: None,
            provider: default_provider(),
            provider_id: None,
        }
    }

    /// Set provider info
    pub fn with_provider(mut self, provider: impl Into<String>, provider_id: Option<String>) -> Self {
        self.provider = provider.into();
        self.provider_id = provider_id;
        self
    }

    /// Set favicon URL from an Option
    pub fn with_favicon_opt(mut self, favicon: Option<String>) -> Self {
        self.favicon = favicon;
        self
    }

    /// Set audio info
    pub fn with_audio_info(mut self, codec: Option<String>, bitrate: Option<u32>) -> Self {
        self.codec = codec;
        self.bitrate = bitrate;
        self
    }
}
