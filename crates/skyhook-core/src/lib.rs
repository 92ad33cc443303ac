//! # skyhook-core
//!
//! Core library for the Skyhook installer providing:
//! - Typed errors for the update protocol
//! - Configuration file parsing (skyhook.yaml)
//! - Dotted-numeric version parsing and ordering
//! - Platform target detection

pub mod config;
pub mod error;
pub mod platform;
pub mod version;

pub use config::{NetworkConfig, UpdateConfig};
pub use error::{Error, Result};
pub use platform::{Os, PlatformTarget};
pub use version::Version;
