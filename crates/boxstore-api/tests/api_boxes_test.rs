//! Router-level tests for the box document endpoints.
//!
//! The app is exercised through `tower::ServiceExt::oneshot` with its
//! GithubStore pointed at a wiremock GitHub contents API, so every test
//! covers the full facade → adapter → remote path.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use boxstore_api::state::AppState;
use boxstore_github::{GithubStore, GithubStoreConfig};

const CONTENTS_PATH: &str = "/repos/acme/boxes/contents/dados.json";

/// Build the app with its store pointed at the mock server.
fn test_app(server: &MockServer) -> axum::Router {
    let config = GithubStoreConfig::for_base(&server.uri(), "acme", "boxes", "test-token").unwrap();
    let store = GithubStore::new(config).unwrap();
    boxstore_api::app(AppState::new(store))
}

/// Build the app against a guaranteed-unreachable remote.
fn unreachable_app() -> axum::Router {
    let config = GithubStoreConfig::for_base("http://127.0.0.1:1", "acme", "boxes", "t").unwrap();
    let store = GithubStore::new(config).unwrap();
    boxstore_api::app(AppState::new(store))
}

/// Read response body as JSON Value.
async fn body_json(response: axum::http::Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST helper with JSON body.
fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// GET helper.
fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Mount a contents GET returning the given document.
async fn mock_contents_get(server: &MockServer, doc: &serde_json::Value, sha: &str) {
    Mock::given(method("GET"))
        .and(path(CONTENTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sha": sha,
            "content": BASE64.encode(serde_json::to_string_pretty(doc).unwrap()),
        })))
        .mount(server)
        .await;
}

// ── GET /api/boxes ───────────────────────────────────────────────────

#[tokio::test]
async fn get_boxes_returns_document() {
    let server = MockServer::start().await;
    let doc = json!([{"id": 1, "label": "garage"}]);
    mock_contents_get(&server, &doc, "s1").await;

    let resp = test_app(&server).oneshot(get("/api/boxes")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, doc);
}

#[tokio::test]
async fn get_boxes_empty_store_returns_empty_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CONTENTS_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let resp = test_app(&server).oneshot(get("/api/boxes")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));
}

#[tokio::test]
async fn get_boxes_unreachable_remote_is_500_with_error() {
    let resp = unreachable_app().oneshot(get("/api/boxes")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert!(body["error"].is_string(), "expected error field, got: {body}");
}

#[tokio::test]
async fn get_boxes_relays_upstream_error_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CONTENTS_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_string("API rate limit exceeded"))
        .mount(&server)
        .await;

    let resp = test_app(&server).oneshot(get("/api/boxes")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("rate limit"), "got: {message}");
}

// ── POST /api/boxes ──────────────────────────────────────────────────

#[tokio::test]
async fn post_boxes_fetches_sha_then_stores() {
    let server = MockServer::start().await;
    mock_contents_get(&server, &json!([{"id": 1}]), "current-sha").await;

    let new_doc = json!([{"id": 1}, {"id": 2, "label": "attic"}]);
    Mock::given(method("PUT"))
        .and(path(CONTENTS_PATH))
        .and(body_partial_json(json!({
            "content": BASE64.encode(serde_json::to_string_pretty(&new_doc).unwrap()),
            "sha": "current-sha",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": {"sha": "next-sha"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = test_app(&server)
        .oneshot(post_json("/api/boxes", new_doc))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({"success": true}));
}

#[tokio::test]
async fn post_boxes_first_write_has_no_sha() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CONTENTS_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(CONTENTS_PATH))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "content": {"sha": "first"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = test_app(&server)
        .oneshot(post_json("/api/boxes", json!(["only box"])))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn post_boxes_accepts_non_array_body_verbatim() {
    // No schema validation: an object (or any JSON value) is stored as-is.
    let server = MockServer::start().await;
    mock_contents_get(&server, &json!([]), "s1").await;

    let odd_doc = json!({"not": "an array", "count": 3});
    Mock::given(method("PUT"))
        .and(path(CONTENTS_PATH))
        .and(body_partial_json(json!({
            "content": BASE64.encode(serde_json::to_string_pretty(&odd_doc).unwrap()),
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": {"sha": "s2"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = test_app(&server)
        .oneshot(post_json("/api/boxes", odd_doc))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({"success": true}));
}

#[tokio::test]
async fn post_boxes_stale_sha_conflict_is_500_with_error() {
    let server = MockServer::start().await;
    mock_contents_get(&server, &json!([]), "stale").await;
    Mock::given(method("PUT"))
        .and(path(CONTENTS_PATH))
        .respond_with(
            ResponseTemplate::new(409).set_body_string(r#"{"message":"is at ... but expected"}"#),
        )
        .expect(1) // surfaced, never retried
        .mount(&server)
        .await;

    let resp = test_app(&server)
        .oneshot(post_json("/api/boxes", json!([1, 2])))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("409"));
}

#[tokio::test]
async fn post_boxes_unreachable_remote_is_500_with_error() {
    let resp = unreachable_app()
        .oneshot(post_json("/api/boxes", json!([])))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert!(body["error"].is_string());
}

// ── Landing page and probes ──────────────────────────────────────────

#[tokio::test]
async fn index_serves_html() {
    let server = MockServer::start().await;
    let resp = test_app(&server).oneshot(get("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&bytes).contains("boxstore"));
}

#[tokio::test]
async fn health_probes_respond() {
    let server = MockServer::start().await;
    let app = test_app(&server);

    let resp = app.clone().oneshot(get("/health/liveness")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.oneshot(get("/health/readiness")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
