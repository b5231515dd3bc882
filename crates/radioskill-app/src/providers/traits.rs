//! Station directory trait
//!
//! Defines the interface the resolution chain uses to reach a remote
//! station directory.

use crate::data::types::Station;
use crate::error::Result;

/// A remote source of radio station records
pub trait StationDirectory: Send + Sync {
    /// Display name for the directory (e.g., "Radio Browser")
    fn name(&self) -> &'static str;

    /// Machine-readable identifier (e.g., "radio-browser")
    fn id(&self) -> &'static str;

    /// Free-text search by station name, keeping stations at or above
    /// `min_bitrate` kbps. Order is the directory's own ranking.
    fn search(&self, name: &str, min_bitrate: u32) -> Result<Vec<Station>>;

    /// Look up a single station by its directory id
    fn station_by_uuid(&self, id: &str) -> Result<Option<Station>>;
}
