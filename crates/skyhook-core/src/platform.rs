//! Platform target detection and asset naming

use std::fmt;

use crate::error::{Error, Result};

/// Operating systems with published release assets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Windows,
    Darwin,
    Linux,
}

impl Os {
    /// Detect the operating system of the executing environment
    pub fn current() -> Result<Self> {
        match std::env::consts::OS {
            "windows" => Ok(Self::Windows),
            "macos" => Ok(Self::Darwin),
            "linux" => Ok(Self::Linux),
            other => Err(Error::unsupported_platform(other)),
        }
    }

    /// Name used in release asset file names
    pub fn asset_name(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Darwin => "darwin",
            Self::Linux => "linux",
        }
    }

    pub fn is_windows(&self) -> bool {
        matches!(self, Self::Windows)
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.asset_name())
    }
}

/// The (operating system, architecture) pair a release asset must match.
///
/// Derived once per process and immutable for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformTarget {
    pub os: Os,
    pub arch: String,
}

impl PlatformTarget {
    pub fn new(os: Os, arch: impl Into<String>) -> Self {
        Self {
            os,
            arch: arch.into(),
        }
    }

    /// Detect the current platform, pairing it with the configured
    /// architecture label
    pub fn detect(arch: &str) -> Result<Self> {
        Ok(Self::new(Os::current()?, arch))
    }

    /// Suffix a matching asset name carries, before the optional `.exe`
    pub fn asset_suffix(&self) -> String {
        format!("{}-{}", self.os.asset_name(), self.arch)
    }

    /// File name of the installed binary for this target
    pub fn binary_name(&self, app_name: &str) -> String {
        if self.os.is_windows() {
            format!("{}.exe", app_name)
        } else {
            app_name.to_string()
        }
    }
}

impl fmt::Display for PlatformTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.asset_suffix())
    }
}
