//! Shared helpers for integration tests against a wiremock server.

#![allow(dead_code)]

use std::collections::HashMap;

use jiffybox::{ClientConfig, JiffyClient};
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";

/// Client pointed at the mock server instead of the public API.
pub fn client_for(server: &MockServer) -> JiffyClient {
    JiffyClient::with_config(config_for(server)).unwrap()
}

pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new(TOKEN)
        .with_protocol("http")
        .with_host(server.address().to_string())
}

/// Full request path for a resource path.
pub fn api_path(resource: &str) -> String {
    format!("/{TOKEN}/v1.0/{resource}")
}

/// Decode the form body of the most recent request.
pub async fn last_form_body(server: &MockServer) -> HashMap<String, String> {
    let requests = server.received_requests().await.unwrap();
    let body = std::str::from_utf8(&requests.last().unwrap().body).unwrap();
    serde_qs::from_str(body).unwrap()
}

/// A response shaped like the provider's envelope.
pub fn envelope(result: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "messages": [], "result": result })
}
