//! Terminal implementation of the skill host
//!
//! Dialogs are printed, playback is delegated to an external player
//! command reading the conduit, and resources come from a locale directory
//! with the built-in resources as fallback.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

use radioskill::config::conduit::URI_SCHEME;
use radioskill_app::config::resources::DEFAULT_LOCALE;
use radioskill_app::error::{AppError, Result};
use radioskill_app::skill::locale::{embedded_resource, render_dialog};
use radioskill_app::skill::{NowPlaying, SkillHost};
use tracing::{debug, info, warn};

pub struct TerminalHost {
    locale: String,
    locale_dir: Option<PathBuf>,
    player_command: Vec<String>,
    player: RefCell<Option<Child>>,
}

impl TerminalHost {
    pub fn new(locale: &str, locale_dir: Option<PathBuf>, player_command: Vec<String>) -> Self {
        Self {
            locale: locale.to_string(),
            locale_dir,
            player_command,
            player: RefCell::new(None),
        }
    }

    /// Whether a started player has exited on its own
    pub fn player_finished(&self) -> bool {
        match self.player.borrow_mut().as_mut() {
            Some(child) => !matches!(child.try_wait(), Ok(None)),
            None => false,
        }
    }

    /// Kill and reap the player, if any
    pub fn stop_player(&self) {
        if let Some(mut child) = self.player.borrow_mut().take() {
            if let Err(e) = child.kill() {
                debug!("Player already gone: {e}");
            }
            if let Err(e) = child.wait() {
                warn!("Could not reap player: {e}");
            }
        }
    }

    fn read_locale_file(&self, locale: &str, name: &str) -> Option<String> {
        let path = self.locale_dir.as_ref()?.join(locale).join(name);
        match fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(e) => {
                debug!("No resource at {:?}: {}", path, e);
                None
            }
        }
    }
}

impl SkillHost for TerminalHost {
    fn speak_dialog(&self, key: &str, data: &[(&str, &str)], _wait: bool) -> Result<()> {
        let file = format!("{key}.dialog");
        let text = match self.load_resource(&file) {
            Some(template) => render_dialog(&template, data),
            None => key.to_string(),
        };
        println!("{text}");
        Ok(())
    }

    fn play(&self, uri: &str, mime_type: &str) -> Result<()> {
        let path = uri.strip_prefix(URI_SCHEME).unwrap_or(uri);
        let Some((program, args)) = self.player_command.split_first() else {
            return Err(AppError::Config("player_command is empty".to_string()));
        };

        self.stop_player();
        debug!("Playing {} ({}) with {}", path, mime_type, program);
        let child = Command::new(program)
            .args(args)
            .arg(path)
            .stdin(Stdio::null())
            .spawn()
            .map_err(|e| AppError::Host(format!("failed to start player {program}: {e}")))?;
        *self.player.borrow_mut() = Some(child);
        Ok(())
    }

    fn send_status(&self, status: Option<&NowPlaying>) {
        match status {
            Some(now) => {
                println!("Now playing: {}", now.track);
                if let Some(image) = &now.image {
                    info!("Station image: {}", image);
                }
            }
            None => debug!("Status cleared"),
        }
    }

    fn load_resource(&self, name: &str) -> Option<String> {
        self.read_locale_file(&self.locale, name)
            .or_else(|| embedded_resource(&self.locale, name).map(str::to_string))
            .or_else(|| embedded_resource(DEFAULT_LOCALE, name).map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(locale_dir: Option<PathBuf>) -> TerminalHost {
        TerminalHost::new("en-us", locale_dir, vec!["true".to_string()])
    }

    #[test]
    fn test_embedded_fallback() {
        let host = host(None);
        assert!(host.load_resource("radio.regex").is_some());
        assert!(host.load_resource("nonexistent.regex").is_none());
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        let host = TerminalHost::new("cy-gb", None, vec![]);
        let text = host.load_resource("play.radio.dialog").unwrap();
        assert!(text.contains("{station}"));
    }

    #[test]
    fn test_locale_dir_overrides_embedded() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("en-us")).unwrap();
        fs::write(dir.path().join("en-us").join("radio.regex"), "^tune in\\s*").unwrap();

        let host = host(Some(dir.path().to_path_buf()));
        assert_eq!(host.load_resource("radio.regex").unwrap(), "^tune in\\s*");
        // Files missing from the directory still come from the embedded set
        assert!(host.load_resource("play.radio.dialog").is_some());
    }

    #[test]
    fn test_play_with_empty_command_is_error() {
        let host = TerminalHost::new("en-us", None, vec![]);
        assert!(host.play("file:///tmp/stream", "audio/mpeg").is_err());
    }

    #[test]
    fn test_play_and_stop_player() {
        let host = host(None);
        host.play("file:///tmp/radioskill-cli-test", "audio/mpeg").unwrap();
        std::thread::sleep(std::time::Duration::from_millis(200));
        assert!(host.player_finished());
        host.stop_player();
        assert!(!host.player_finished());
    }

    #[test]
    fn test_play_missing_player() {
        let host = TerminalHost::new("en-us", None, vec!["/nonexistent/player".to_string()]);
        assert!(matches!(
            host.play("file:///tmp/stream", "audio/mpeg"),
            Err(AppError::Host(_))
        ));
    }
}
