use std::num::NonZeroU32;

use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

use crate::Client;

pub fn nz(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap()
}

pub async fn mock_server() -> MockServer {
    MockServer::start().await
}

/// API root under the mock, with a path prefix so that absolute paths in
/// templates would miss every mount.
pub fn api_base(server: &MockServer) -> String {
    format!("{}/api/", server.uri())
}

/// Client against `server` with a quota high enough not to slow tests down.
pub fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .base_url(api_base(server))
        .quota(nz(1000), nz(1000))
        .build()
        .unwrap()
}

/// Serves `body` as JSON for `GET /api/<relative>`.
pub async fn mount_json(server: &MockServer, relative: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/api/{relative}")))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_owned(), "application/json"))
        .mount(server)
        .await;
}
