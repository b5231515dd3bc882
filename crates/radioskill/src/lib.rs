//! Radioskill: stream plumbing for the radio skill
//!
//! Named-pipe conduits, background downloads, and the playback session
//! that ties them together.
//!
//! ## Quick start
//!
//! ```no_run
//! use radioskill::stream::{Conduit, Downloader, PlaybackSession};
//! ```

pub mod config;
pub mod error;
pub mod stream;
