//! Mock server helpers for release index and download testing
//!
//! Utilities for setting up wiremock servers with the response patterns
//! the resolver and installer see in the wild.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::constants::INDEX_PATH;

/// Serve `body` as the latest release at the index path
pub async fn mock_latest_release(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(INDEX_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Serve a bare status code at the index path
pub async fn mock_index_status(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path(INDEX_PATH))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Serve a non-JSON body at the index path
pub async fn mock_index_garbage(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(INDEX_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(server)
        .await;
}

/// Fail the first `fail_count` index requests with 500, then serve `body`
pub async fn mock_flaky_index(server: &MockServer, fail_count: u64, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(INDEX_PATH))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(fail_count)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(INDEX_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Serve binary content at a download path
pub async fn mock_binary_download(server: &MockServer, dl_path: &str, content: &[u8]) {
    Mock::given(method("GET"))
        .and(path(dl_path))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(content))
        .mount(server)
        .await;
}

/// Serve binary content at `/dl/<platform>` for every platform
pub async fn mock_platform_downloads(server: &MockServer, content: &[u8]) {
    use super::constants::{PLATFORM_DARWIN, PLATFORM_LINUX, PLATFORM_WINDOWS};
    for platform in [PLATFORM_DARWIN, PLATFORM_LINUX, PLATFORM_WINDOWS] {
        mock_binary_download(server, &format!("/dl/{}", platform), content).await;
    }
}

/// Serve a bare status code at a download path
pub async fn mock_download_status(server: &MockServer, dl_path: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(dl_path))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Redirect a download path to another URL
pub async fn mock_redirect(server: &MockServer, from: &str, to: &str) {
    Mock::given(method("GET"))
        .and(path(from))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", to))
        .mount(server)
        .await;
}
