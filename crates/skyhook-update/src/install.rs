//! Streaming binary download and atomic install

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use skyhook_core::{Error, Result, UpdateConfig};

use crate::releases::ReleaseAsset;

/// Suffix of the staging file written beside the destination
const STAGING_SUFFIX: &str = "partial";

/// Downloads a selected asset and swaps it into place.
///
/// The response body streams chunk-by-chunk into a staging file in the
/// destination directory, keeping memory O(buffer) for binaries of any
/// size. The destination is never observed half-written: the staging file
/// is renamed over it only after the byte count matches the size declared
/// by the release index. Redirects are followed up to the configured bound.
pub struct BinaryInstaller {
    client: reqwest::Client,
    download_timeout_secs: u64,
    show_progress: bool,
}

impl BinaryInstaller {
    pub fn new(config: &UpdateConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.network.user_agent)
            .timeout(Duration::from_secs(config.network.download_timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(
                config.network.max_redirects,
            ))
            .build()
            .map_err(Error::network)?;

        Ok(Self {
            client,
            download_timeout_secs: config.network.download_timeout_secs,
            show_progress: false,
        })
    }

    /// Enable or disable the download progress bar
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Download `asset` and install it at `destination`
    pub async fn install(&self, asset: &ReleaseAsset, destination: &Path) -> Result<()> {
        info!(
            "downloading {} ({})",
            asset.name,
            human_readable_size(asset.size)
        );

        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    Error::download(format!(
                        "failed to create install directory {:?}: {}",
                        parent, e
                    ))
                })?;
            }
        }

        let staging = staging_path(destination);
        if let Err(e) = self.download_to(asset, &staging).await {
            discard_staging(&staging);
            return Err(e);
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = fs::Permissions::from_mode(0o700);
            if let Err(e) = fs::set_permissions(&staging, perms) {
                discard_staging(&staging);
                return Err(Error::download(format!(
                    "failed to set permissions on {:?}: {}",
                    staging, e
                )));
            }
        }

        // Rename within the destination directory is the atomic swap; a
        // crash before this point leaves the previous binary untouched.
        if let Err(e) = fs::rename(&staging, destination) {
            discard_staging(&staging);
            return Err(Error::download(format!(
                "failed to move binary into place at {:?}: {}",
                destination, e
            )));
        }

        info!("installed {:?}", destination);
        Ok(())
    }

    /// Stream the asset body into the staging file
    async fn download_to(&self, asset: &ReleaseAsset, staging: &Path) -> Result<()> {
        let response = self
            .client
            .get(&asset.browser_download_url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::timeout("asset download", self.download_timeout_secs)
                } else if e.is_redirect() {
                    Error::download("redirect limit exceeded while following download URL")
                } else {
                    Error::download(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::download(format!(
                "download endpoint returned {}",
                status
            )));
        }

        let progress = if self.show_progress {
            Some(download_progress_bar(asset))
        } else {
            None
        };

        let mut file = File::create(staging).map_err(|e| {
            Error::download(format!("failed to create staging file {:?}: {}", staging, e))
        })?;

        let mut written: u64 = 0;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk: bytes::Bytes = chunk.map_err(|e| {
                if e.is_timeout() {
                    Error::timeout("asset download", self.download_timeout_secs)
                } else {
                    Error::download(format!("transfer interrupted: {}", e))
                }
            })?;

            file.write_all(&chunk)
                .map_err(|e| Error::download(format!("failed to write staging file: {}", e)))?;

            written += chunk.len() as u64;
            if let Some(pb) = &progress {
                pb.set_position(written.min(asset.size));
            }
        }

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        // A short byte count is an interrupted transfer, even when the
        // stream ended without an error
        if written != asset.size {
            return Err(Error::download(format!(
                "transfer truncated: expected {} bytes, got {}",
                asset.size, written
            )));
        }

        debug!("staged {} bytes at {:?}", written, staging);
        Ok(())
    }
}

/// Staging path beside the destination, on the same filesystem so the
/// final rename is atomic
fn staging_path(destination: &Path) -> PathBuf {
    let mut name = destination
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(STAGING_SUFFIX);
    destination.with_file_name(name)
}

fn discard_staging(path: &Path) {
    if path.exists() {
        if let Err(e) = fs::remove_file(path) {
            warn!("failed to remove staging file {:?}: {}", path, e);
        }
    }
}

fn download_progress_bar(asset: &ReleaseAsset) -> ProgressBar {
    let pb = ProgressBar::new(asset.size);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
            .expect("Invalid progress bar template")
            .progress_chars("#>-"),
    );
    pb.set_message(asset.name.clone());
    pb
}

/// Convert bytes to a human-readable size
pub fn human_readable_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    format!("{:.2} {}", size, UNITS[unit_index])
}
