//! Host framework interface
//!
//! What the skill needs from the voice assistant it runs in.

use super::types::NowPlaying;
use crate::error::Result;

/// Services provided by the host voice assistant
pub trait SkillHost {
    /// Speak the dialog named `key`, substituting `{name}` placeholders from
    /// `data`. With `wait` the call returns only after speech has finished.
    fn speak_dialog(&self, key: &str, data: &[(&str, &str)], wait: bool) -> Result<()>;

    /// Start playing `uri` as `mime_type`
    fn play(&self, uri: &str, mime_type: &str) -> Result<()>;

    /// Push now-playing metadata; `None` clears it
    fn send_status(&self, status: Option<&NowPlaying>);

    /// Contents of a locale resource file (e.g. `radio.regex`)
    fn load_resource(&self, name: &str) -> Option<String>;
}
