mod common;

use serde_json::json;

#[tokio::test]
async fn test_batch_all_new_returns_created() {
    let server = common::make_server();
    let cookie = common::login(&server).await;

    let response = server
        .post("/api/domains/batch")
        .add_header("Cookie", cookie)
        .json(&json!({ "urls": ["a.com", "b.com", "c.com"] }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["summary"]["total"], 3);
    assert_eq!(body["summary"]["inserted"], 3);
    assert_eq!(body["summary"]["skipped"], 0);
    assert_eq!(body["domains"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_batch_partial_returns_multi_status() {
    let server = common::make_server();
    let cookie = common::login(&server).await;

    let response = server
        .post("/api/domains/batch")
        .add_header("Cookie", cookie.clone())
        .json(&json!({ "urls": ["x.com", "x.com", "y.com"] }))
        .await;

    response.assert_status(axum::http::StatusCode::MULTI_STATUS);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["summary"]["total"], 3);
    assert_eq!(body["summary"]["inserted"], 2);
    assert_eq!(body["summary"]["skipped"], 1);
    assert_eq!(body["skipped"][0], "https://x.com");

    // Exactly two records made it into the store.
    let list = server.get("/api/domains").add_header("Cookie", cookie).await;
    let list_body = list.json::<serde_json::Value>();
    assert_eq!(list_body["domains"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_batch_newline_delimited_input() {
    let server = common::make_server();
    let cookie = common::login(&server).await;

    let response = server
        .post("/api/domains/batch")
        .add_header("Cookie", cookie)
        .json(&json!({ "urls": "a.com\n\n  b.com  \nhttp://c.com\n" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["summary"]["inserted"], 3);

    let urls: Vec<&str> = body["domains"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["url"].as_str().unwrap())
        .collect();

    assert_eq!(urls, vec!["https://a.com", "https://b.com", "http://c.com"]);
}

#[tokio::test]
async fn test_batch_all_duplicates_rejected() {
    let server = common::make_server();
    let cookie = common::login(&server).await;

    common::create_domain(&server, &cookie, "x.com").await;

    let response = server
        .post("/api/domains/batch")
        .add_header("Cookie", cookie)
        .json(&json!({ "urls": ["x.com", "https://x.com"] }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_batch_empty_input_rejected() {
    let server = common::make_server();
    let cookie = common::login(&server).await;

    let response = server
        .post("/api/domains/batch")
        .add_header("Cookie", cookie.clone())
        .json(&json!({ "urls": [] }))
        .await;

    response.assert_status_bad_request();

    // Blank-only text input is rejected the same way.
    let response = server
        .post("/api/domains/batch")
        .add_header("Cookie", cookie)
        .json(&json!({ "urls": "\n  \n" }))
        .await;

    response.assert_status_bad_request();
}
