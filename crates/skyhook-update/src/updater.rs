//! End-to-end update orchestration
//!
//! Drives the update state machine: read the local marker, resolve the
//! latest release, compare versions, and, when the remote is newer,
//! select the platform asset, install it, and record the new version.
//! Asset selection through install runs under an exclusive file lock so
//! two racing installer processes cannot corrupt the destination.

use std::fs::{self, File, OpenOptions};
use std::path::Path;

use fs4::fs_std::FileExt;
use tracing::{debug, info, warn};

use skyhook_core::{Error, PlatformTarget, Result, UpdateConfig, Version};

use crate::install::{human_readable_size, BinaryInstaller};
use crate::releases::{Release, ReleaseResolver};
use crate::select::select_asset;
use crate::store::VersionStore;

/// Outcome of a completed update run
#[derive(Debug)]
pub enum UpdateOutcome {
    /// Local version already matches (or exceeds) the latest release
    UpToDate {
        /// Version currently recorded
        version: String,
    },

    /// A newer binary was downloaded and installed
    Installed {
        /// Version recorded before the update
        from: String,

        /// Version installed and recorded
        to: String,
    },
}

/// Result of a dry-run check
#[derive(Debug)]
pub struct UpdateCheck {
    /// Version currently recorded
    pub local: String,

    /// Latest version reported by the release index
    pub latest: String,

    /// Whether the latest version is newer than the recorded one
    pub update_available: bool,
}

/// Composes the version store, release resolver, asset selector, and
/// binary installer into the end-to-end update flow
pub struct UpdateOrchestrator {
    config: UpdateConfig,
    store: VersionStore,
    resolver: ReleaseResolver,
    installer: BinaryInstaller,
}

impl UpdateOrchestrator {
    pub fn new(config: UpdateConfig) -> Result<Self> {
        let store = VersionStore::new(config.marker_path());
        let resolver = ReleaseResolver::new(&config)?;
        let installer = BinaryInstaller::new(&config)?;

        Ok(Self {
            config,
            store,
            resolver,
            installer,
        })
    }

    /// Enable or disable download progress display
    pub fn with_progress(mut self, show: bool) -> Self {
        self.installer = self.installer.with_progress(show);
        self
    }

    pub fn config(&self) -> &UpdateConfig {
        &self.config
    }

    /// Dry run: report whether a newer release exists, touching nothing
    pub async fn check(&self) -> Result<UpdateCheck> {
        let local = Version::parse(&self.store.read())?;
        let release = self.fetch_latest().await?;
        let latest = Version::parse(release.version_str())?;

        Ok(UpdateCheck {
            local: local.to_string(),
            latest: latest.to_string(),
            update_available: latest > local,
        })
    }

    /// Run the full update flow
    pub async fn run(&self) -> Result<UpdateOutcome> {
        let local = Version::parse(&self.store.read())?;
        debug!("local version: {}", local);

        let release = self.fetch_latest().await?;
        let latest = Version::parse(release.version_str())?;

        if latest <= local {
            // A local version ahead of the index is treated as up to date
            info!("{} {} is up to date", self.config.app_name, local);
            return Ok(UpdateOutcome::UpToDate {
                version: local.to_string(),
            });
        }

        info!("update available: {} -> {}", local, latest);

        let target = PlatformTarget::detect(&self.config.arch)?;
        let _lock = UpdateLock::acquire(&self.config.lock_path())?;

        let asset = select_asset(&release.assets, &target)?;
        info!(
            "found binary '{}' ({})",
            asset.name,
            human_readable_size(asset.size)
        );

        let destination = self.config.binary_path(&target);
        self.installer.install(asset, &destination).await?;

        // The binary is usable even if the marker write fails, so a
        // persistence failure here is a warning, not a rollback trigger
        if let Err(e) = self.store.write(release.version_str()) {
            warn!("{}", e);
        }

        Ok(UpdateOutcome::Installed {
            from: local.to_string(),
            to: latest.to_string(),
        })
    }

    /// Fetch the latest release, retrying transient failures a bounded
    /// number of times. Asset selection and install stay terminal on
    /// failure; only the metadata fetch is retried.
    async fn fetch_latest(&self) -> Result<Release> {
        let mut attempts_left = self.config.network.fetch_retries;
        loop {
            match self.resolver.fetch_latest().await {
                Ok(release) => return Ok(release),
                Err(e) if attempts_left > 0 && e.is_transient() => {
                    attempts_left -= 1;
                    warn!("release index fetch failed ({}), retrying", e);
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Exclusive cross-process lock held from asset selection until the
/// install (and marker write) completes
struct UpdateLock {
    file: File,
}

impl UpdateLock {
    fn acquire(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    Error::persistence(format!("failed to create {:?}: {}", parent, e))
                })?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)
            .map_err(|e| {
                Error::persistence(format!("failed to open lock file {:?}: {}", path, e))
            })?;

        file.lock_exclusive().map_err(|e| {
            Error::persistence(format!("failed to acquire update lock {:?}: {}", path, e))
        })?;

        debug!("holding update lock at {:?}", path);
        Ok(Self { file })
    }
}

impl Drop for UpdateLock {
    fn drop(&mut self) {
        if let Err(e) = self.file.unlock() {
            debug!("failed to release update lock: {}", e);
        }
    }
}
