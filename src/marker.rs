//! One-time execution marker
//!
//! Records that the first-boot password change already happened so the
//! flow never runs twice on the same device.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Marker file used on the stock image.
pub const DEFAULT_MARKER_PATH: &str = "/home/bbuser/.bb_password_done";

#[derive(Error, Debug)]
pub enum MarkerError {
    #[error("Failed to write marker {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Persisted flag telling whether the password change already happened.
pub trait MarkerStore {
    fn exists(&self) -> bool;

    /// Sets the flag durably before returning.
    fn set(&self) -> Result<(), MarkerError>;
}

/// Marker backed by the existence of a file.
#[derive(Debug, Clone)]
pub struct FileMarker {
    path: PathBuf,
}

impl FileMarker {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self) -> std::io::Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        file.sync_all()?;

        // persist the directory entry too
        #[cfg(unix)]
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            File::open(parent)?.sync_all()?;
        }
        Ok(())
    }
}

impl Default for FileMarker {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER_PATH)
    }
}

impl MarkerStore for FileMarker {
    fn exists(&self) -> bool {
        let exists = self.path.exists();

        #[cfg(feature = "tracing")]
        tracing::info!("Marker {:?} present: {}", self.path, exists);

        exists
    }

    fn set(&self) -> Result<(), MarkerError> {
        self.write().map_err(|source| MarkerError::Write {
            path: self.path.clone(),
            source,
        })?;

        #[cfg(feature = "tracing")]
        tracing::info!("Marker written: {:?}", self.path);

        Ok(())
    }
}
