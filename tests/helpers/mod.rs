//! Shared setup for the wiremock-backed suites.
#![allow(dead_code)]

use nextcloud_client::types::{ServerUrl, Username};
use nextcloud_client::NextcloudClient;
use wiremock::MockServer;

pub const USERNAME: &str = "nextcloud";
pub const PASSWORD: &str = "hunter2";

/// `Authorization` header value matching [USERNAME] and [PASSWORD].
pub const BASIC_AUTH: &str = "Basic bmV4dGNsb3VkOmh1bnRlcjI=";

pub fn server_url(server: &MockServer) -> ServerUrl {
    server.uri().parse().unwrap()
}

pub fn client_for(server: &MockServer) -> NextcloudClient {
    NextcloudClient::new(
        server_url(server),
        Username::from(USERNAME),
        PASSWORD.to_string(),
    )
    .unwrap()
}
