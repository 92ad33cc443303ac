//! Builder patterns for test data construction
//!
//! Fluent APIs for constructing Release and ReleaseAsset values, plus the
//! JSON bodies the mock release index serves for them.

use serde_json::json;
use skyhook_update::releases::{Release, ReleaseAsset};

use super::constants::*;

/// Builder for constructing Release values with sensible test defaults
#[derive(Debug, Clone)]
pub struct ReleaseBuilder {
    tag_name: String,
    assets: Vec<ReleaseAsset>,
}

impl ReleaseBuilder {
    pub fn new() -> Self {
        Self {
            tag_name: TAG_V1_1_0.to_string(),
            assets: Vec::new(),
        }
    }

    /// Set the tag name
    pub fn tag(mut self, tag: &str) -> Self {
        self.tag_name = tag.to_string();
        self
    }

    /// Set the version (automatically adds 'v' prefix for the tag)
    pub fn version(mut self, version: &str) -> Self {
        self.tag_name = format!("v{}", version);
        self
    }

    /// Add a single asset
    pub fn asset(mut self, asset: ReleaseAsset) -> Self {
        self.assets.push(asset);
        self
    }

    /// Add download assets for all three platforms, with URLs on the mock
    /// server under `/dl/<platform>` and sizes matching `content`
    pub fn with_platform_assets(mut self, server_uri: &str, version: &str, content: &[u8]) -> Self {
        for platform in [PLATFORM_DARWIN, PLATFORM_LINUX, PLATFORM_WINDOWS] {
            self.assets.push(
                ReleaseAssetBuilder::new()
                    .name(&asset_name(version, platform))
                    .mock_url(server_uri, &format!("/dl/{}", platform))
                    .size_from_content(content)
                    .build(),
            );
        }
        self
    }

    /// Build the Release value
    pub fn build(self) -> Release {
        serde_json::from_value(self.json()).expect("builder output deserializes as a Release")
    }

    /// JSON body the release index serves for this release
    pub fn json(&self) -> serde_json::Value {
        json!({
            "tag_name": self.tag_name,
            "assets": self
                .assets
                .iter()
                .map(|a| {
                    json!({
                        "name": a.name,
                        "size": a.size,
                        "browser_download_url": a.browser_download_url,
                    })
                })
                .collect::<Vec<_>>(),
        })
    }
}

impl Default for ReleaseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing ReleaseAsset values
#[derive(Debug, Clone)]
pub struct ReleaseAssetBuilder {
    name: String,
    browser_download_url: String,
    size: u64,
}

impl ReleaseAssetBuilder {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            browser_download_url: String::new(),
            size: 1024,
        }
    }

    /// Set the asset name
    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Set the download URL
    pub fn url(mut self, url: &str) -> Self {
        self.browser_download_url = url.to_string();
        self
    }

    /// Set the URL from a mock server base URL and path
    pub fn mock_url(mut self, server_uri: &str, path: &str) -> Self {
        self.browser_download_url = format!("{}{}", server_uri, path);
        self
    }

    /// Set the asset size
    pub fn size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Set the size from content bytes
    pub fn size_from_content(mut self, content: &[u8]) -> Self {
        self.size = content.len() as u64;
        self
    }

    /// Build the ReleaseAsset
    pub fn build(self) -> ReleaseAsset {
        ReleaseAsset {
            name: self.name,
            size: self.size,
            browser_download_url: self.browser_download_url,
        }
    }
}

impl Default for ReleaseAssetBuilder {
    fn default() -> Self {
        Self::new()
    }
}
