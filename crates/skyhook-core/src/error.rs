//! Error types for skyhook-core

use thiserror::Error;

/// Result type alias using skyhook-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Error kinds surfaced by the update protocol
#[derive(Error, Debug)]
pub enum Error {
    /// Version string with a component that is not a non-negative integer
    #[error("Malformed version string: {version}")]
    MalformedVersion { version: String },

    /// Transport-level failure while talking to the release index
    #[error("Network error: {message}")]
    Network { message: String },

    /// Release index response body is not valid release metadata
    #[error("Failed to parse release metadata: {message}")]
    Parse { message: String },

    /// Release index reports no published release
    #[error("Release index reports no releases")]
    NoReleaseFound,

    /// No release asset matches the platform target
    #[error("No release asset matches platform target {target}")]
    AssetNotFound { target: String },

    /// Download or install of the selected asset failed
    #[error("Download failed: {message}")]
    Download { message: String },

    /// Version marker could not be persisted
    #[error("Failed to persist version marker: {message}")]
    Persistence { message: String },

    /// Running on an operating system with no published assets
    #[error("Unsupported platform: {os}")]
    UnsupportedPlatform { os: String },

    /// A network operation exceeded its configured deadline
    #[error("{operation} timed out after {seconds}s")]
    Timeout { operation: String, seconds: u64 },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl Error {
    /// Create a malformed version error
    pub fn malformed_version(version: impl Into<String>) -> Self {
        Self::MalformedVersion {
            version: version.into(),
        }
    }

    /// Create a network error
    pub fn network(message: impl std::fmt::Display) -> Self {
        Self::Network {
            message: message.to_string(),
        }
    }

    /// Create a parse error
    pub fn parse(message: impl std::fmt::Display) -> Self {
        Self::Parse {
            message: message.to_string(),
        }
    }

    /// Create an asset not found error
    pub fn asset_not_found(target: impl Into<String>) -> Self {
        Self::AssetNotFound {
            target: target.into(),
        }
    }

    /// Create a download error
    pub fn download(message: impl std::fmt::Display) -> Self {
        Self::Download {
            message: message.to_string(),
        }
    }

    /// Create a persistence error
    pub fn persistence(message: impl std::fmt::Display) -> Self {
        Self::Persistence {
            message: message.to_string(),
        }
    }

    /// Create an unsupported platform error
    pub fn unsupported_platform(os: impl Into<String>) -> Self {
        Self::UnsupportedPlatform { os: os.into() }
    }

    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, seconds: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            seconds,
        }
    }

    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl std::fmt::Display) -> Self {
        Self::InvalidConfig {
            message: message.to_string(),
        }
    }

    /// Whether a failed release index fetch with this error may be retried
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout { .. })
    }
}
