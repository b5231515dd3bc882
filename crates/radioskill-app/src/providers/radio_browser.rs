//! Radio Browser API provider
//!
//! Implementation of `StationDirectory` for the Radio Browser directory
//! (<https://www.radio-browser.info/>).

use crate::config::providers::{RADIO_BROWSER_DEFAULT_SERVER, RADIO_BROWSER_ID, SEARCH_LIMIT};
use crate::data::types::Station;
use crate::error::Result;
use crate::network::ApiClient;

use super::traits::StationDirectory;

use serde::Deserialize;
use tracing::debug;

// =============================================================================
// Internal API response types (serde)
// =============================================================================

#[derive(Debug, Deserialize)]
struct RbStation {
    stationuuid: String,
    name: String,
    #[serde(default)]
    url_resolved: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    favicon: String,
    #[serde(default)]
    codec: String,
    #[serde(default)]
    bitrate: u32,
}

// =============================================================================
// RbStation -> Station conversion
// =============================================================================

/// Convert an empty string to None
fn non_empty(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

impl From<RbStation> for Station {
    fn from(rb: RbStation) -> Self {
        // Prefer url_resolved (playlists already unwrapped), fall back to url
        let stream_url = if rb.url_resolved.is_empty() {
            rb.url
        } else {
            rb.url_resolved
        };

        let bitrate = if rb.bitrate == 0 {
            None
        } else {
            Some(rb.bitrate)
        };

        Station::new(rb.name, stream_url)
            .with_provider(RADIO_BROWSER_ID, Some(rb.stationuuid))
            .with_favicon_opt(non_empty(&rb.favicon))
            .with_audio_info(non_empty(&rb.codec), bitrate)
    }
}

// =============================================================================
// RadioBrowserProvider
// =============================================================================

/// Radio Browser API provider
///
/// Queries the [Radio Browser](https://www.radio-browser.info/) directory,
/// a free, open-source community database of internet radio stations.
pub struct RadioBrowserProvider {
    client: ApiClient,
}

impl RadioBrowserProvider {
    /// Create a provider using the default server
    pub fn new() -> Result<Self> {
        Self::with_base_url(RADIO_BROWSER_DEFAULT_SERVER)
    }

    /// Create a provider with a custom base URL (for testing or mirrors)
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: ApiClient::new(base_url)?,
        })
    }

    pub fn server(&self) -> &str {
        self.client.base_url()
    }
}

impl StationDirectory for RadioBrowserProvider {
    fn name(&self) -> &'static str {
        "Radio Browser"
    }

    fn id(&self) -> &'static str {
        RADIO_BROWSER_ID
    }

    fn search(&self, name: &str, min_bitrate: u32) -> Result<Vec<Station>> {
        let bitrate_str = min_bitrate.to_string();
        let limit_str = SEARCH_LIMIT.to_string();
        let rb_stations: Vec<RbStation> = self.client.post_form_json(
            "/json/stations/search",
            &[
                ("name", name),
                ("bitrate_min", &bitrate_str),
                ("limit", &limit_str),
            ],
        )?;
        debug!("Radio Browser search {:?} returned {} stations", name, rb_stations.len());
        Ok(rb_stations.into_iter().map(Station::from).collect())
    }

    fn station_by_uuid(&self, id: &str) -> Result<Option<Station>> {
        let rb_stations: Vec<RbStation> =
            self.client.get_json(&format!("/json/stations/byuuid/{}", id))?;
        Ok(rb_stations.into_iter().next().map(Station::from))
    }
}

// =============================================================================
// Tests
// =============================================================================
