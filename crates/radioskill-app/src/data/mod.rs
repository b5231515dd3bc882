//! Data persistence
//!
//! Station record, settings, and JSON storage.

pub mod settings;
pub mod storage;
pub mod types;

pub use settings::Settings;
pub use storage::{cache_dir, config_dir, load, save};
pub use types::Station;
