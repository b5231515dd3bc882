//! Named-pipe conduit
//!
//! The downloader writes into a FIFO while the playback engine reads from
//! it, so audio starts before the download finishes. Writes block until a
//! reader is attached.

use std::ffi::CString;
use std::fs;
use std::io::{self, ErrorKind};
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::FileTypeExt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::conduit::{FILE_NAME, MODE, URI_SCHEME};
use crate::error::{RadioError, Result};

/// A fixed-path named pipe, recreated for every session
#[derive(Debug, Clone)]
pub struct Conduit {
    path: PathBuf,
}

impl Conduit {
    /// Conduit at an explicit path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Conduit named `stream` inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// URI handed to the playback engine (`file://<path>`)
    pub fn uri(&self) -> String {
        format!("{}{}", URI_SCHEME, self.path.display())
    }

    /// Whether a FIFO currently exists at the conduit path
    pub fn exists(&self) -> bool {
        fs::symlink_metadata(&self.path)
            .map(|m| m.file_type().is_fifo())
            .unwrap_or(false)
    }

    /// Remove any stale file at the path and create a fresh FIFO
    pub fn recreate(&self) -> Result<()> {
        self.remove()?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.error(e))?;
            }
        }

        let c_path = CString::new(self.path.as_os_str().as_bytes())
            .map_err(|e| self.error(io::Error::new(ErrorKind::InvalidInput, e)))?;

        // SAFETY: c_path is a valid NUL-terminated string for the duration of the call.
        let rc = unsafe { libc::mkfifo(c_path.as_ptr(), MODE as libc::mode_t) };
        if rc != 0 {
            return Err(self.error(io::Error::last_os_error()));
        }

        debug!("Created conduit at {:?}", self.path);
        Ok(())
    }

    /// Remove the conduit file if present
    pub fn remove(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Removed stale conduit at {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.error(e)),
        }
    }

    fn error(&self, source: io::Error) -> RadioError {
        RadioError::Conduit {
            path: self.path.clone(),
            source,
        }
    }
}
