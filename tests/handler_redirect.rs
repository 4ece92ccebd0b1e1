mod common;

use serde_json::json;

// ─── ROOT REDIRECT ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_root_no_domains_is_not_an_error() {
    let server = common::make_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("No redirect target"));
}

#[tokio::test]
async fn test_root_redirects_to_first_enabled() {
    let server = common::make_server();
    let cookie = common::login(&server).await;

    common::create_domain(&server, &cookie, "a.com").await;
    common::create_domain(&server, &cookie, "b.com").await;
    common::create_domain(&server, &cookie, "c.com").await;

    let response = server.get("/").await;

    assert_eq!(response.status_code(), 307);

    let location = response.header("location");
    assert_eq!(location, "https://a.com");
}

#[tokio::test]
async fn test_root_skips_disabled_front_runner() {
    let server = common::make_server();
    let cookie = common::login(&server).await;

    let a = common::create_domain(&server, &cookie, "a.com").await;
    common::create_domain(&server, &cookie, "b.com").await;

    server
        .put(&format!("/api/domains/{a}"))
        .add_header("Cookie", cookie)
        .json(&json!({ "enabled": false }))
        .await
        .assert_status_ok();

    let response = server.get("/").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://b.com");
}

#[tokio::test]
async fn test_root_falls_back_to_no_target_when_all_disabled() {
    let server = common::make_server();
    let cookie = common::login(&server).await;

    let id = common::create_domain(&server, &cookie, "only.com").await;

    server
        .put(&format!("/api/domains/{id}"))
        .add_header("Cookie", cookie)
        .json(&json!({ "enabled": false }))
        .await
        .assert_status_ok();

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("No redirect target"));
}

// ─── FIRST-DOMAIN QUERY ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_first_domain_none_enabled() {
    let server = common::make_server();

    let response = server.get("/api/first-domain").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert!(body["url"].is_null());
    assert!(body.get("message").is_some());
}

#[tokio::test]
async fn test_first_domain_returns_target_url() {
    let server = common::make_server();
    let cookie = common::login(&server).await;

    common::create_domain(&server, &cookie, "a.com").await;
    common::create_domain(&server, &cookie, "b.com").await;

    let response = server.get("/api/first-domain").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["url"], "https://a.com");
}

#[tokio::test]
async fn test_first_domain_follows_enable_toggle() {
    let server = common::make_server();
    let cookie = common::login(&server).await;

    let a = common::create_domain(&server, &cookie, "a.com").await;
    common::create_domain(&server, &cookie, "b.com").await;

    server
        .put(&format!("/api/domains/{a}"))
        .add_header("Cookie", cookie)
        .json(&json!({ "enabled": false }))
        .await
        .assert_status_ok();

    let response = server.get("/api/first-domain").await;
    let body = response.json::<serde_json::Value>();

    assert_eq!(body["url"], "https://b.com");
}
