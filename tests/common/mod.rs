#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;

use domain_redirector::application::services::{AuthService, DomainService};
use domain_redirector::infrastructure::persistence::MemoryDomainRepository;
use domain_redirector::routes::app_router;
use domain_redirector::state::AppState;

pub const TEST_PASSWORD: &str = "correct-horse-battery-staple";

/// Builds application state backed by the in-process store.
pub fn create_test_state(session_ttl_seconds: u64) -> AppState {
    let repository = Arc::new(MemoryDomainRepository::new());
    let domain_service = Arc::new(DomainService::new(repository));
    let auth_service = Arc::new(AuthService::new(
        TEST_PASSWORD.to_string(),
        session_ttl_seconds,
    ));

    AppState {
        domain_service,
        auth_service,
    }
}

pub fn make_server() -> TestServer {
    TestServer::new(app_router(create_test_state(3600))).unwrap()
}

pub fn make_server_with_ttl(session_ttl_seconds: u64) -> TestServer {
    TestServer::new(app_router(create_test_state(session_ttl_seconds))).unwrap()
}

/// Logs in and returns the `session_token=...` cookie pair for later requests.
pub async fn login(server: &TestServer) -> String {
    let response = server
        .post("/api/login")
        .json(&json!({ "password": TEST_PASSWORD }))
        .await;

    response.assert_status_ok();

    let set_cookie = response.header("set-cookie");
    set_cookie
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

/// Registers a domain through the API, returning its id.
pub async fn create_domain(server: &TestServer, cookie: &str, url: &str) -> i64 {
    let response = server
        .post("/api/domains")
        .add_header("Cookie", cookie)
        .json(&json!({ "url": url }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    body["domain"]["id"].as_i64().unwrap()
}
