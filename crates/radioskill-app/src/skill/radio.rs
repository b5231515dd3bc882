//! Radio skill lifecycle
//!
//! `RadioSkill` owns the playback session. Every start stops the previous
//! session first, so at most one download ever writes the conduit.

use std::error::Error;

use radioskill::config::conduit::MIME_TYPE;
use radioskill::stream::{Downloader, PlaybackSession};
use tracing::{debug, error, info, warn};

use super::host::SkillHost;
use super::resources::ResourceCache;
use super::types::{MatchLevel, NowPlaying, PhraseMatch, PlayData};
use crate::config::dialogs::{COULD_NOT_PLAY, PLAY_RADIO};
use crate::config::resources::TRIGGER_REGEX;
use crate::data::settings::Settings;
use crate::error::Result;
use crate::presets::PresetCatalog;
use crate::providers::{RadioBrowserProvider, StationDirectory};
use crate::resolver::StationResolver;

pub struct RadioSkill<H: SkillHost> {
    host: H,
    directory: Box<dyn StationDirectory>,
    resolver: StationResolver,
    resources: ResourceCache,
    session: PlaybackSession,
    downloader: Downloader,
}

impl<H: SkillHost> RadioSkill<H> {
    pub fn new(
        host: H,
        directory: Box<dyn StationDirectory>,
        resolver: StationResolver,
        session: PlaybackSession,
        downloader: Downloader,
    ) -> Self {
        Self {
            host,
            directory,
            resolver,
            resources: ResourceCache::new(),
            session,
            downloader,
        }
    }

    /// Skill wired to Radio Browser, the built-in presets, and `settings`
    pub fn from_settings(host: H, settings: &Settings) -> Result<Self> {
        let directory = RadioBrowserProvider::with_base_url(&settings.radio_browser_server)?;
        let resolver = StationResolver::standard(
            &settings.default_station_id,
            PresetCatalog::builtin()?,
            settings.min_bitrate,
        );
        Ok(Self::new(
            host,
            Box::new(directory),
            resolver,
            PlaybackSession::new(settings.conduit()?),
            Downloader::with_program(&settings.download_program),
        ))
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    /// Whether a download is currently feeding the conduit
    pub fn is_playing(&self) -> bool {
        self.session.is_active()
    }

    /// Match a user utterance against this skill
    ///
    /// The localized trigger regex decides the match level and is stripped
    /// from the phrase; what remains is run through the resolution chain.
    pub fn match_query_phrase(&mut self, phrase: &str) -> Result<Option<PhraseMatch>> {
        let phrase = phrase.trim().to_lowercase();
        let trigger = self.resources.regex(TRIGGER_REGEX, &self.host)?;

        let level = if trigger.is_match(&phrase) {
            MatchLevel::Exact
        } else {
            MatchLevel::Title
        };
        let search = trigger.replace_all(&phrase, "").trim().to_string();
        debug!("Phrase {:?} -> search {:?} ({:?})", phrase, search, level);

        let Some(station) = self.resolver.resolve(&search, self.directory.as_ref())? else {
            info!("Station not found for {:?}", phrase);
            return Ok(None);
        };

        info!("Matched {} | {} ({:?})", station.name, station.url, level);
        Ok(Some(PhraseMatch::new(&station, level)))
    }

    /// Start playing `data`, reporting failures to the user
    ///
    /// Any setup error is logged, the half-started session is torn down,
    /// and the generic apology dialog is spoken. Returns whether playback
    /// started.
    pub fn start(&mut self, phrase: &str, data: &PlayData) -> bool {
        match self.try_start(phrase, data) {
            Ok(()) => true,
            Err(e) => {
                error!("Could not play {}: {}", data.station, error_chain(&e));
                self.session.terminate();
                if let Err(e) = self.host.speak_dialog(COULD_NOT_PLAY, &[], false) {
                    warn!("Could not speak {}: {}", COULD_NOT_PLAY, e);
                }
                false
            }
        }
    }

    /// Start playing `data`
    ///
    /// Stops the previous session, recreates the conduit, speaks the intro
    /// (blocking), launches the download, and points the host player at the
    /// conduit.
    pub fn try_start(&mut self, phrase: &str, data: &PlayData) -> Result<()> {
        debug!("Starting {:?} for phrase {:?}", data.station, phrase);
        self.stop();

        self.session.prepare()?;

        self.host
            .speak_dialog(PLAY_RADIO, &[("station", data.station.as_str())], true)?;

        self.session.start_download(&self.downloader, &data.url)?;
        info!("Station url: {}", data.url);

        self.host.play(&self.session.conduit().uri(), MIME_TYPE)?;
        self.host.send_status(Some(&NowPlaying {
            track: data.station.clone(),
            image: data.image.clone(),
        }));
        Ok(())
    }

    /// Stop the download if one is running
    ///
    /// Returns `false` when there was nothing to stop.
    pub fn stop(&mut self) -> bool {
        if !self.session.terminate() {
            return false;
        }
        self.host.send_status(None);
        true
    }

    /// Stop and remove the conduit file
    pub fn shutdown(&mut self) {
        self.stop();
        if let Err(e) = self.session.close() {
            warn!("Could not remove conduit: {}", e);
        }
    }
}

/// Error message followed by every source in the chain
fn error_chain(e: &dyn Error) -> String {
    let mut out = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
