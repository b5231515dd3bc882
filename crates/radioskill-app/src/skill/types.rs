//! Types exchanged with the host

use serde::{Deserialize, Serialize};

use crate::data::types::Station;

/// How confidently a phrase asked for this skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLevel {
    /// The trigger keyword was present ("play radio ...")
    Exact,
    /// Only a station title matched
    Title,
}

/// Everything `start` needs, handed back by the host after a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayData {
    pub station: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<&Station> for PlayData {
    fn from(station: &Station) -> Self {
        Self {
            station: station.name.clone(),
            url: station.url.clone(),
            image: station.favicon.clone(),
        }
    }
}

/// Result of matching a phrase
#[derive(Debug, Clone, PartialEq)]
pub struct PhraseMatch {
    pub title: String,
    pub level: MatchLevel,
    pub data: PlayData,
}

impl PhraseMatch {
    pub fn new(station: &Station, level: MatchLevel) -> Self {
        Self {
            title: station.name.clone(),
            level,
            data: PlayData::from(station),
        }
    }
}

/// Now-playing metadata pushed to the host
#[derive(Debug, Clone, PartialEq)]
pub struct NowPlaying {
    pub track: String,
    pub image: Option<String>,
}
