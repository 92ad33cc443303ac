//! Release index resolution

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use skyhook_core::{Error, Result, UpdateConfig};

/// Latest release as reported by the release index
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Release tag (e.g., "1.4.0" or "v1.4.0")
    pub tag_name: String,

    /// Downloadable assets, in index order
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

impl Release {
    /// Tag with any leading `v` stripped, ready for version parsing
    pub fn version_str(&self) -> &str {
        self.tag_name.trim_start_matches('v')
    }
}

/// A single downloadable file attached to a release
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    /// Asset file name
    pub name: String,

    /// Asset size in bytes
    pub size: u64,

    /// Download URL
    pub browser_download_url: String,
}

/// Fetches the latest release descriptor from the release index.
///
/// One request per call, no internal retry; the orchestrator decides
/// whether to retry or abort.
pub struct ReleaseResolver {
    client: reqwest::Client,
    index_url: String,
    fetch_timeout_secs: u64,
}

impl ReleaseResolver {
    pub fn new(config: &UpdateConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.network.user_agent)
            .timeout(std::time::Duration::from_secs(
                config.network.fetch_timeout_secs,
            ))
            .build()
            .map_err(Error::network)?;

        Ok(Self {
            client,
            index_url: config.release_index_url.clone(),
            fetch_timeout_secs: config.network.fetch_timeout_secs,
        })
    }

    /// Fetch the latest release descriptor
    pub async fn fetch_latest(&self) -> Result<Release> {
        debug!("fetching latest release from {}", self.index_url);

        let response = self
            .client
            .get(&self.index_url)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NoReleaseFound);
        }
        if !status.is_success() {
            return Err(Error::network(format!("release index returned {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let release: Release = serde_json::from_str(&body).map_err(Error::parse)?;

        if release.tag_name.trim().is_empty() {
            return Err(Error::NoReleaseFound);
        }

        debug!(
            "latest release: {} ({} assets)",
            release.tag_name,
            release.assets.len()
        );
        Ok(release)
    }

    fn map_transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::timeout("release index fetch", self.fetch_timeout_secs)
        } else {
            Error::network(e)
        }
    }
}
