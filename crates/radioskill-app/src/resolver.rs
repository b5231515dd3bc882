//! Station resolution chain
//!
//! An ordered list of strategies, each turning a search phrase into an
//! optional station. The chain stops at the first strategy that produces a
//! station; a strategy that fails is logged and treated as "nothing found".

use tracing::{debug, info, warn};

use crate::config::resolve::{DEFAULT_STATION_ID, MIN_BITRATE_KBPS};
use crate::data::types::Station;
use crate::error::Result;
use crate::presets::PresetCatalog;
use crate::providers::StationDirectory;

/// One way of turning a phrase into a station
pub trait SearchStrategy: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Attempt resolution; `Ok(None)` means this strategy has nothing
    fn attempt(&self, phrase: &str, directory: &dyn StationDirectory) -> Result<Option<Station>>;
}

// =============================================================================
// Strategies
// =============================================================================

/// Plays a fixed station when the phrase names no station at all
pub struct DefaultStation {
    station_id: String,
}

impl DefaultStation {
    pub fn new(station_id: impl Into<String>) -> Self {
        Self {
            station_id: station_id.into(),
        }
    }
}

impl Default for DefaultStation {
    fn default() -> Self {
        Self::new(DEFAULT_STATION_ID)
    }
}

impl SearchStrategy for DefaultStation {
    fn name(&self) -> &'static str {
        "default"
    }

    fn attempt(&self, phrase: &str, directory: &dyn StationDirectory) -> Result<Option<Station>> {
        if !phrase.is_empty() {
            return Ok(None);
        }
        let station = directory.station_by_uuid(&self.station_id)?;
        if station.is_none() {
            warn!("Default station {} not found in {}", self.station_id, directory.name());
        }
        Ok(station)
    }
}

/// Curated pronunciation presets
pub struct Presets {
    catalog: PresetCatalog,
}

impl Presets {
    pub fn new(catalog: PresetCatalog) -> Self {
        Self { catalog }
    }
}

impl SearchStrategy for Presets {
    fn name(&self) -> &'static str {
        "presets"
    }

    fn attempt(&self, phrase: &str, directory: &dyn StationDirectory) -> Result<Option<Station>> {
        if phrase.is_empty() {
            return Ok(None);
        }
        self.catalog.find(phrase, directory)
    }
}

/// Free-text directory search, best-ranked result above a bitrate floor
pub struct DirectorySearch {
    min_bitrate: u32,
}

impl DirectorySearch {
    pub fn new(min_bitrate: u32) -> Self {
        Self { min_bitrate }
    }
}

impl Default for DirectorySearch {
    fn default() -> Self {
        Self::new(MIN_BITRATE_KBPS)
    }
}

impl SearchStrategy for DirectorySearch {
    fn name(&self) -> &'static str {
        "directory"
    }

    fn attempt(&self, phrase: &str, directory: &dyn StationDirectory) -> Result<Option<Station>> {
        if phrase.is_empty() {
            return Ok(None);
        }
        let stations = directory.search(phrase, self.min_bitrate)?;
        Ok(stations.into_iter().next())
    }
}

// =============================================================================
// StationResolver
// =============================================================================

/// Runs strategies in order until one yields a station
pub struct StationResolver {
    strategies: Vec<Box<dyn SearchStrategy>>,
}

impl StationResolver {
    /// Empty chain
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// The standard chain: default station, presets, directory search
    pub fn standard(default_station_id: &str, catalog: PresetCatalog, min_bitrate: u32) -> Self {
        let mut resolver = Self::new();
        resolver.push(Box::new(DefaultStation::new(default_station_id)));
        resolver.push(Box::new(Presets::new(catalog)));
        resolver.push(Box::new(DirectorySearch::new(min_bitrate)));
        resolver
    }

    /// Append a strategy to the end of the chain
    pub fn push(&mut self, strategy: Box<dyn SearchStrategy>) {
        self.strategies.push(strategy);
    }

    /// Strategy names in chain order
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Resolve `phrase` (trigger keyword already stripped)
    ///
    /// Strategy failures never escape; "nothing found" is `Ok(None)`.
    pub fn resolve(&self, phrase: &str, directory: &dyn StationDirectory) -> Result<Option<Station>> {
        for strategy in &self.strategies {
            debug!("Trying strategy {} with {:?}", strategy.name(), phrase);
            match strategy.attempt(phrase, directory) {
                Ok(Some(station)) => {
                    info!("Strategy {} found {}", strategy.name(), station.name);
                    return Ok(Some(station));
                }
                Ok(None) => debug!("Strategy {} found nothing", strategy.name()),
                Err(e) => warn!("Strategy {} failed: {}", strategy.name(), e),
            }
        }
        info!("No station found for {:?}", phrase);
        Ok(None)
    }
}

impl Default for StationResolver {
    fn default() -> Self {
        Self::new()
    }
}
