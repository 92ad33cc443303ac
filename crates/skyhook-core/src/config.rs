//! Update configuration
//!
//! Every knob lives in an explicit [`UpdateConfig`] handed to the
//! orchestrator at construction; nothing is baked into process-wide
//! constants. The struct deserializes from `skyhook.yaml` with per-field
//! defaults, so a minimal file only names the app and its release index.

use std::fs;
use std::io;
use std::path::PathBuf;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::platform::PlatformTarget;

/// Default configuration file name, resolved against the working directory
pub const DEFAULT_CONFIG_FILE: &str = "skyhook.yaml";

/// Configuration for a single update run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateConfig {
    /// Name of the wrapped application binary (no `.exe` suffix)
    pub app_name: String,

    /// Release index endpoint returning the latest release as JSON
    pub release_index_url: String,

    /// Architecture label used in release asset names
    #[serde(default = "default_arch")]
    pub arch: String,

    /// Directory the binary is installed into
    #[serde(default = "default_install_dir")]
    pub install_dir: Utf8PathBuf,

    /// Path of the version marker file
    #[serde(default = "default_version_marker")]
    pub version_marker: Utf8PathBuf,

    /// Network timeouts and limits
    #[serde(default)]
    pub network: NetworkConfig,
}

/// Network timeouts and limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Release index fetch timeout in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    /// Asset download timeout in seconds
    #[serde(default = "default_download_timeout")]
    pub download_timeout_secs: u64,

    /// Upper bound on redirects followed while downloading an asset
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// Extra attempts for the release index fetch after a transient failure
    #[serde(default = "default_fetch_retries")]
    pub fetch_retries: u32,

    /// HTTP User-Agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: default_fetch_timeout(),
            download_timeout_secs: default_download_timeout(),
            max_redirects: default_max_redirects(),
            fetch_retries: default_fetch_retries(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_arch() -> String {
    "amd64".to_string()
}

fn default_install_dir() -> Utf8PathBuf {
    Utf8PathBuf::from("bin")
}

fn default_version_marker() -> Utf8PathBuf {
    Utf8PathBuf::from(".version")
}

fn default_fetch_timeout() -> u64 {
    30
}

fn default_download_timeout() -> u64 {
    300
}

fn default_max_redirects() -> usize {
    5
}

fn default_fetch_retries() -> u32 {
    1
}

fn default_user_agent() -> String {
    format!("skyhook/{}", env!("CARGO_PKG_VERSION"))
}

impl UpdateConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::config_not_found(path.as_str()),
            _ => Error::invalid_config(format!("failed to read {}: {}", path, e)),
        })?;

        let config: UpdateConfig =
            serde_yaml_ng::from_str(&raw).map_err(Error::invalid_config)?;
        config.validate()?;

        tracing::debug!("loaded configuration from {}", path);
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.app_name.trim().is_empty() {
            return Err(Error::invalid_config("app_name must not be empty"));
        }
        if self.release_index_url.trim().is_empty() {
            return Err(Error::invalid_config("release_index_url must not be empty"));
        }
        Ok(())
    }

    /// Path of the installed binary for a platform target
    pub fn binary_path(&self, target: &PlatformTarget) -> PathBuf {
        self.install_dir
            .as_std_path()
            .join(target.binary_name(&self.app_name))
    }

    /// Path of the version marker file
    pub fn marker_path(&self) -> PathBuf {
        self.version_marker.as_std_path().to_path_buf()
    }

    /// Path of the lock file guarding concurrent installs
    pub fn lock_path(&self) -> PathBuf {
        self.install_dir
            .as_std_path()
            .join(format!(".{}.lock", self.app_name))
    }
}
