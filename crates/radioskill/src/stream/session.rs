//! Playback session
//!
//! Owns the fixed conduit and at most one running download. A new session
//! always terminates the previous download before the conduit is recreated,
//! so two fetchers never write the same pipe.

use std::path::Path;

use tracing::{debug, info};

use super::conduit::Conduit;
use super::download::{DownloadHandle, Downloader};
use crate::error::Result;

#[derive(Debug)]
pub struct PlaybackSession {
    conduit: Conduit,
    download: Option<DownloadHandle>,
}

impl PlaybackSession {
    pub fn new(conduit: Conduit) -> Self {
        Self {
            conduit,
            download: None,
        }
    }

    pub fn conduit(&self) -> &Conduit {
        &self.conduit
    }

    /// Whether a download is attached to this session
    pub fn is_active(&self) -> bool {
        self.download.is_some()
    }

    /// Process id of the attached download, if any
    pub fn download_id(&self) -> Option<u32> {
        self.download.as_ref().map(DownloadHandle::id)
    }

    /// Terminate any running download, then recreate the conduit
    pub fn prepare(&mut self) -> Result<()> {
        self.terminate();
        self.conduit.recreate()
    }

    /// Start `downloader` on `url`, writing into the conduit
    pub fn start_download(&mut self, downloader: &Downloader, url: &str) -> Result<()> {
        self.terminate();
        let handle = downloader.spawn(url, self.conduit.path())?;
        self.download = Some(handle);
        Ok(())
    }

    /// Kill and reap the download. Returns `false` if nothing was running.
    ///
    /// The handle is cleared before termination so a failed kill never
    /// leaves it dangling.
    pub fn terminate(&mut self) -> bool {
        match self.download.take() {
            Some(handle) => {
                info!("Stopping download process {}", handle.id());
                handle.terminate();
                true
            }
            None => {
                debug!("No download to stop");
                false
            }
        }
    }

    /// Terminate the download and remove the conduit file
    pub fn close(&mut self) -> Result<()> {
        self.terminate();
        self.conduit.remove()
    }

    pub fn conduit_path(&self) -> &Path {
        self.conduit.path()
    }
}
