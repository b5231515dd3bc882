//! The radio skill
//!
//! Glue between the host voice assistant and the resolution chain: phrase
//! matching, playback launch, and session teardown.

pub mod host;
pub mod locale;
pub mod radio;
pub mod resources;
pub mod types;

pub use host::SkillHost;
pub use radio::RadioSkill;
pub use resources::ResourceCache;
pub use types::{MatchLevel, NowPlaying, PhraseMatch, PlayData};

#[cfg(test)]
pub(crate) mod testing;
