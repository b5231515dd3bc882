//! Configuration constants for radioskill app services

/// Application metadata
pub mod app {
    /// Application name (used for config and cache directories)
    pub const NAME: &str = "radioskill";
}

/// Provider-related configuration
pub mod providers {
    /// Default Radio Browser API server
    pub const RADIO_BROWSER_DEFAULT_SERVER: &str = "https://de1.api.radio-browser.info";

    /// Provider id stored on stations from Radio Browser
    pub const RADIO_BROWSER_ID: &str = "radio-browser";

    /// Result page size requested from free-text search
    pub const SEARCH_LIMIT: usize = 10;
}

/// Station resolution
pub mod resolve {
    /// Minimum bitrate (kbps) for free-text directory search
    pub const MIN_BITRATE_KBPS: u32 = 128;

    /// Station played when the phrase carries no station name (BBC Radio Cymru)
    pub const DEFAULT_STATION_ID: &str = "84845637-ea22-4d8c-8b2e-dce4b440d9f2";
}

/// Host dialog keys
pub mod dialogs {
    /// Intro spoken before the stream starts (`{station}` substitution)
    pub const PLAY_RADIO: &str = "play.radio";

    /// Generic apology when playback could not be set up
    pub const COULD_NOT_PLAY: &str = "could.not.play";

    /// Spoken when no strategy found a station
    pub const NO_STATION: &str = "no.station";
}

/// Localized resources
pub mod resources {
    /// Logical name of the trigger-keyword regex (`radio.regex`)
    pub const TRIGGER_REGEX: &str = "radio";

    /// Default locale
    pub const DEFAULT_LOCALE: &str = "en-us";
}
