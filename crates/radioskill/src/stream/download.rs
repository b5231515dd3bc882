//! Background stream download
//!
//! Spawns an external fetcher (curl by default) that writes the remote
//! stream into the conduit. The process is only ever stopped by an
//! explicit [`DownloadHandle::terminate`].

use std::path::Path;
use std::process::{Child, Command, Stdio};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::{debug, info, warn};

use crate::config::download::{DEFAULT_PROGRAM, FOLLOW_REDIRECTS_FLAG, OUTPUT_FLAG, SILENT_FLAG};
use crate::error::{RadioError, Result};

/// Characters left untouched when escaping a stream URL: RFC 3986
/// unreserved characters plus `:` and `/`, so scheme and path survive.
const URL_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b':')
    .remove(b'/');

/// Percent-escape an untrusted stream URL before it reaches the fetcher
pub fn escape_url(url: &str) -> String {
    utf8_percent_encode(url, URL_SAFE).to_string()
}

/// Builds and spawns fetcher processes
#[derive(Debug, Clone)]
pub struct Downloader {
    program: String,
}

impl Downloader {
    /// Downloader using the default program (`curl`)
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    /// Downloader using a custom fetcher binary (must accept curl's flags)
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the fetcher: follow redirects, silent, output to `dest`
    pub fn args(&self, url: &str, dest: &Path) -> Vec<String> {
        vec![
            FOLLOW_REDIRECTS_FLAG.to_string(),
            SILENT_FLAG.to_string(),
            escape_url(url),
            OUTPUT_FLAG.to_string(),
            dest.display().to_string(),
        ]
    }

    /// Start fetching `url` into `dest` in the background
    pub fn spawn(&self, url: &str, dest: &Path) -> Result<DownloadHandle> {
        debug!("Running {} {}", self.program, url);
        let child = Command::new(&self.program)
            .args(self.args(url, dest))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .spawn()
            .map_err(|e| RadioError::Download(format!("failed to spawn {}: {}", self.program, e)))?;

        info!("Download started (pid {}) for {}", child.id(), url);
        Ok(DownloadHandle { child })
    }
}

impl Default for Downloader {
    fn default() -> Self {
        Self::new()
    }
}

/// A running fetcher process
#[derive(Debug)]
pub struct DownloadHandle {
    child: Child,
}

impl DownloadHandle {
    /// OS process id
    pub fn id(&self) -> u32 {
        self.child.id()
    }

    /// Whether the process is still running (reaps it if it exited)
    pub fn is_running(&mut self) -> bool {
        matches!(self.child.try_wait(), Ok(None))
    }

    /// Kill the process and reap it. Errors are logged, never returned.
    pub fn terminate(mut self) {
        let pid = self.child.id();
        if let Err(e) = self.child.kill() {
            warn!("Could not kill download process {pid}: {e}");
        }
        match self.child.wait() {
            Ok(status) => debug!("Download process {pid} exited with {status}"),
            Err(e) => warn!("Could not reap download process {pid}: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    /// Write an executable shell script that ignores its arguments
    fn fake_fetcher(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("fake-curl");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn test_escape_keeps_scheme_and_slashes() {
        assert_eq!(
            escape_url("http://stream.example.com/live/radio.mp3"),
            "http://stream.example.com/live/radio.mp3"
        );
    }

    #[test]
    fn test_escape_spaces() {
        assert_eq!(
            escape_url("http://example.com/my stream.mp3"),
            "http://example.com/my%20stream.mp3"
        );
    }

    #[test]
    fn test_escape_reserved_characters() {
        assert_eq!(
            escape_url("http://example.com/a?b=c&d"),
            "http://example.com/a%3Fb%3Dc%26d"
        );
    }

    #[test]
    fn test_escape_keeps_port_and_unreserved() {
        assert_eq!(
            escape_url("https://host-1.example_x.com:8000/~live.aac"),
            "https://host-1.example_x.com:8000/~live.aac"
        );
    }

    #[test]
    fn test_escape_non_ascii() {
        assert_eq!(escape_url("http://x.es/ràdio"), "http://x.es/r%C3%A0dio");
    }

    #[test]
    fn test_args_layout() {
        let downloader = Downloader::new();
        let args = downloader.args("http://r.com/a b", Path::new("/tmp/stream"));
        assert_eq!(args, vec!["-L", "-s", "http://r.com/a%20b", "-o", "/tmp/stream"]);
    }

    #[test]
    fn test_default_program_is_curl() {
        assert_eq!(Downloader::default().program(), "curl");
    }

    #[test]
    fn test_spawn_missing_program_fails() {
        let downloader = Downloader::with_program("/nonexistent/radioskill-fetcher");
        let err = downloader
            .spawn("http://r.com", Path::new("/tmp/stream"))
            .unwrap_err();
        assert!(matches!(err, RadioError::Download(_)));
    }

    #[test]
    fn test_spawn_and_terminate() {
        let dir = tempfile::tempdir().unwrap();
        let program = fake_fetcher(dir.path(), "sleep 30");
        let downloader = Downloader::with_program(program.display().to_string());

        let mut handle = downloader
            .spawn("http://r.com/live", &dir.path().join("stream"))
            .unwrap();
        assert!(handle.is_running());
        handle.terminate();
    }

    #[test]
    fn test_terminate_already_exited_process() {
        let dir = tempfile::tempdir().unwrap();
        let program = fake_fetcher(dir.path(), "exit 0");
        let downloader = Downloader::with_program(program.display().to_string());

        let handle = downloader
            .spawn("http://r.com/live", &dir.path().join("stream"))
            .unwrap();
        std::thread::sleep(std::time::Duration::from_millis(200));
        // Must not panic even though the process is gone
        handle.terminate();
    }
}
