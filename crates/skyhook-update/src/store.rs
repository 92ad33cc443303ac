//! Version marker bookkeeping

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use skyhook_core::{Error, Result};

/// Version assumed when no marker has ever been written
pub const FRESH_INSTALL_VERSION: &str = "0.0.0";

/// Reads and writes the locally persisted version marker.
///
/// The marker is a single plain-text file holding exactly the installed
/// version string. It is written only after a verified-successful install,
/// so the recorded version never points at an uninstalled binary.
pub struct VersionStore {
    marker_path: PathBuf,
}

impl VersionStore {
    pub fn new(marker_path: impl Into<PathBuf>) -> Self {
        Self {
            marker_path: marker_path.into(),
        }
    }

    pub fn marker_path(&self) -> &Path {
        &self.marker_path
    }

    /// Read the persisted version string.
    ///
    /// Returns `"0.0.0"` when no marker exists; absence is the expected
    /// fresh-install state, never an error.
    pub fn read(&self) -> String {
        match fs::read_to_string(&self.marker_path) {
            Ok(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    FRESH_INSTALL_VERSION.to_string()
                } else {
                    trimmed.to_string()
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(
                    "no version marker at {:?}, assuming fresh install",
                    self.marker_path
                );
                FRESH_INSTALL_VERSION.to_string()
            }
            Err(e) => {
                warn!("unreadable version marker {:?}: {}", self.marker_path, e);
                FRESH_INSTALL_VERSION.to_string()
            }
        }
    }

    /// Persist a new version string, overwriting any prior value
    pub fn write(&self, version: &str) -> Result<()> {
        if let Some(parent) = self.marker_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    Error::persistence(format!("failed to create {:?}: {}", parent, e))
                })?;
            }
        }

        fs::write(&self.marker_path, version).map_err(|e| {
            Error::persistence(format!("failed to write {:?}: {}", self.marker_path, e))
        })
    }
}
