/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for intranet-adapter tests

use intranet_adapter::{ClientConfig, IntranetClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Build an unauthenticated client pointed at the mock server
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> IntranetClient {
    IntranetClient::with_config(ClientConfig::new(server.uri()).expect("valid config"))
        .expect("client init")
}

/// Build a bearer-authenticated client pointed at the mock server
#[allow(dead_code)]
pub fn test_client_with_api_key(server: &MockServer, api_key: &str) -> IntranetClient {
    let config = ClientConfig::new(server.uri())
        .expect("valid config")
        .with_api_key(api_key);
    IntranetClient::with_config(config).expect("client init")
}
