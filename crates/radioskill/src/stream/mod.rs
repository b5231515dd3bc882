//! Stream plumbing
//!
//! Conduit (named pipe), background fetcher, session lifecycle, and URL
//! probing.

pub mod conduit;
pub mod download;
pub mod probe;
pub mod session;

pub use conduit::Conduit;
pub use download::{escape_url, DownloadHandle, Downloader};
pub use probe::url_exists;
pub use session::PlaybackSession;
