//! Shared constants for test infrastructure

// The wrapped application under management in tests
pub const APP_NAME: &str = "demo";

// Version constants
pub const VERSION_1_0_0: &str = "1.0.0";
pub const VERSION_1_1_0: &str = "1.1.0";
pub const VERSION_2_0_0: &str = "2.0.0";

// Tag constants (with 'v' prefix)
pub const TAG_V1_1_0: &str = "v1.1.0";

// Platform suffixes as they appear in asset names
pub const PLATFORM_DARWIN: &str = "darwin-amd64";
pub const PLATFORM_LINUX: &str = "linux-amd64";
pub const PLATFORM_WINDOWS: &str = "windows-amd64";

// Release index path served by the mock server
pub const INDEX_PATH: &str = "/releases/latest";

// Binary content for testing
pub const FAKE_BINARY_CONTENT: &[u8] = b"fake binary content for testing";
pub const NEW_BINARY_CONTENT: &[u8] = b"replacement binary content";

/// Platform suffix matching the host the tests run on
pub fn host_platform() -> &'static str {
    match std::env::consts::OS {
        "windows" => PLATFORM_WINDOWS,
        "macos" => PLATFORM_DARWIN,
        _ => PLATFORM_LINUX,
    }
}

/// Asset file name for a version/platform pair, `.exe`-suffixed on Windows
pub fn asset_name(version: &str, platform: &str) -> String {
    let mut name = format!("{}-{}-{}", APP_NAME, version, platform);
    if platform.starts_with("windows") {
        name.push_str(".exe");
    }
    name
}
