//! Common test infrastructure for skyhook-update tests
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Modules
//!
//! - `constants`: Version strings, platform identifiers, test data
//! - `builders`: Fluent builders for Release and ReleaseAsset
//! - `fixtures`: UpdateConfig factory for mock-server-backed tests
//! - `mock_server`: Wiremock setup helpers for index and download endpoints

// Allow unused code in test infrastructure - not every test file uses every helper
#![allow(dead_code)]

pub mod builders;
pub mod constants;
pub mod fixtures;
pub mod mock_server;

pub use builders::*;
pub use constants::*;
pub use fixtures::*;
pub use mock_server::*;
