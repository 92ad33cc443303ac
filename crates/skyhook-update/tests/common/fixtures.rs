//! UpdateConfig factory for mock-server-backed tests

use std::path::Path;

use camino::Utf8PathBuf;
use skyhook_core::{NetworkConfig, UpdateConfig};

use super::constants::{APP_NAME, INDEX_PATH};

/// Config rooted in a temp directory, pointing at a wiremock server.
///
/// Short timeouts keep failure-path tests fast; retries are off so each
/// test opts in explicitly.
pub fn test_config(server_uri: &str, root: &Path) -> UpdateConfig {
    let root = Utf8PathBuf::from_path_buf(root.to_path_buf()).expect("temp dirs are utf-8");

    UpdateConfig {
        app_name: APP_NAME.to_string(),
        release_index_url: format!("{}{}", server_uri, INDEX_PATH),
        arch: "amd64".to_string(),
        install_dir: root.join("bin"),
        version_marker: root.join(".version"),
        network: NetworkConfig {
            fetch_timeout_secs: 5,
            download_timeout_secs: 5,
            max_redirects: 5,
            fetch_retries: 0,
            user_agent: "skyhook-tests".to_string(),
        },
    }
}
