//! Preset catalog
//!
//! Curated pronunciation patterns that map common (mis)hearings of a station
//! name straight to a directory id, skipping the free-text search.
//!
//! Patterns are regular expressions matched from the start of the phrase
//! (prefix match, not full match). Presets are tried in declaration order and
//! patterns in list order; the first hit wins.

use regex::Regex;
use tracing::{debug, info, warn};

use crate::data::types::Station;
use crate::error::Result;
use crate::providers::StationDirectory;

/// Static description of a preset
#[derive(Debug, Clone, Copy)]
pub struct PresetDef {
    pub name: &'static str,
    pub patterns: &'static [&'static str],
    pub station_id: &'static str,
}

/// Built-in presets, in priority order
pub const BUILTIN_PRESETS: &[PresetDef] = &[
    PresetDef {
        name: "BBC Radio Cymru",
        patterns: &["camry", "cumry", "bbc radio camry", "radio camry"],
        station_id: "84845637-ea22-4d8c-8b2e-dce4b440d9f2",
    },
    PresetDef {
        name: "RTÉ Raidió na Gaeltachta",
        patterns: &["rte irish", "irish", "rte radio irish", "irish radio", "radio irish"],
        station_id: "bf63c901-5797-4450-8d55-5b8db5835991",
    },
    PresetDef {
        name: "RNE Radio Nacional",
        patterns: &["rne radio", "rne radio nacional", "radio rne", "rne"],
        station_id: "527c89ae-6e6d-11e9-af37-52543be04c81",
    },
    PresetDef {
        name: "Cadena SER - Radio Valencia",
        patterns: &["cadena ser valencia"],
        station_id: "bf09733e-0e88-11e9-a80b-52543be04c81",
    },
    PresetDef {
        name: "Cadena SER España",
        patterns: &["cadena ser", "cadena", "cadena ser espana"],
        station_id: "692a3b69-0f68-11ea-a87e-52543be04c81",
    },
    PresetDef {
        name: "À Punt Ràdio",
        patterns: &["a punt", "a punt radio"],
        station_id: "d53ab822-4756-11e9-aa55-52543be04c81",
    },
];

/// A preset with its patterns compiled
#[derive(Debug)]
pub struct Preset {
    pub name: &'static str,
    pub station_id: &'static str,
    patterns: Vec<Regex>,
}

impl Preset {
    fn compile(def: &PresetDef) -> Result<Self> {
        let patterns = def
            .patterns
            .iter()
            .map(|p| Regex::new(&format!("^(?:{p})")))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self {
            name: def.name,
            station_id: def.station_id,
            patterns,
        })
    }

    /// First pattern (in list order) matching the start of `phrase`
    pub fn matching_pattern(&self, phrase: &str) -> Option<&Regex> {
        self.patterns.iter().find(|re| re.is_match(phrase))
    }
}

/// Ordered set of presets
#[derive(Debug)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    /// Catalog with the built-in presets
    pub fn builtin() -> Result<Self> {
        Self::from_defs(BUILTIN_PRESETS)
    }

    /// Catalog from custom definitions (order is preserved)
    pub fn from_defs(defs: &[PresetDef]) -> Result<Self> {
        let presets = defs.iter().map(Preset::compile).collect::<Result<Vec<_>>>()?;
        Ok(Self { presets })
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// First preset matching `phrase`, by catalog order then pattern order
    pub fn match_phrase(&self, phrase: &str) -> Option<&Preset> {
        self.presets
            .iter()
            .find(|preset| preset.matching_pattern(phrase).is_some())
    }

    /// Resolve `phrase` to a station through the first matching preset
    ///
    /// The preset's id is looked up on every call. An empty lookup is logged
    /// and reported as no match; remaining presets are not tried.
    pub fn find(&self, phrase: &str, directory: &dyn StationDirectory) -> Result<Option<Station>> {
        debug!("Preset search for {:?}", phrase);
        let Some(preset) = self.match_phrase(phrase) else {
            debug!("No preset matched {:?}", phrase);
            return Ok(None);
        };

        info!("Preset matched: {}", preset.name);
        match directory.station_by_uuid(preset.station_id)? {
            Some(station) => Ok(Some(station)),
            None => {
                warn!(
                    "Preset {} ({}) not found in {}",
                    preset.name,
                    preset.station_id,
                    directory.name()
                );
                Ok(None)
            }
        }
    }
}
