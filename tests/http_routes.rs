//! HTTP Route Tests
//!
//! Drives the full router in-process with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use deejay::contact::{FormConfig, FormHandler};
use deejay::http_server::{HttpServer, HttpServerConfig};
use deejay::store::InMemoryMessageStore;
use serde_json::Value;
use tower::ServiceExt;

// =============================================================================
// Helper Functions
// =============================================================================

fn router_with(store: Arc<InMemoryMessageStore>) -> Router {
    let handler = FormHandler::new(FormConfig::default(), store);
    HttpServer::with_config(HttpServerConfig::default(), handler).router()
}

fn post_form(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// =============================================================================
// Pages
// =============================================================================

#[tokio::test]
async fn test_home_page_links_to_contact() {
    let router = router_with(Arc::new(InMemoryMessageStore::new()));

    let response = router.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains(r#"href="/contact""#));
}

#[tokio::test]
async fn test_contact_page_shows_bounds() {
    let router = router_with(Arc::new(InMemoryMessageStore::new()));

    let response = router.oneshot(get("/contact")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("(min 20 characters, max 500 characters)"));
    assert!(html.contains("Mix that Tape"));
}

// =============================================================================
// Submissions
// =============================================================================

#[tokio::test]
async fn test_valid_post_redirects_home() {
    let store = Arc::new(InMemoryMessageStore::new());
    let router = router_with(store.clone());

    let response = router
        .oneshot(post_form(
            "name=Ada&email=ada%40example.com&message=Play+Blue+Monday%2C+please%21",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let rows = store.rows().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].message, "Play Blue Monday, please!");
}

#[tokio::test]
async fn test_invalid_post_rerenders_with_errors_and_values() {
    let store = Arc::new(InMemoryMessageStore::new());
    let router = router_with(store.clone());

    let response = router
        .oneshot(post_form("name=&email=bad&message=hi"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Name cannot be blank"));
    assert!(html.contains("Invalid email"));
    assert!(html.contains("String must contain at least 20 character(s)"));
    assert!(html.contains(r#"value="bad""#));
    assert!(html.contains(">hi</textarea>"));

    assert_eq!(store.provision_calls(), 0);
}

#[tokio::test]
async fn test_missing_fields_are_validation_errors() {
    let router = router_with(Arc::new(InMemoryMessageStore::new()));

    let response = router.oneshot(post_form("")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Name cannot be blank"));
    assert!(html.contains("Email cannot be blank"));
}

#[tokio::test]
async fn test_store_failure_returns_500() {
    let store = Arc::new(InMemoryMessageStore::new());
    store.fail_writes();
    let router = router_with(store);

    let response = router
        .oneshot(post_form(
            "name=Ada&email=ada%40example.com&message=Play+Blue+Monday%2C+please%21",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let html = body_text(response).await;
    assert!(html.contains("Something went wrong"));
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let store = Arc::new(InMemoryMessageStore::new());
    let handler = FormHandler::new(FormConfig::default(), store.clone());
    let config = HttpServerConfig {
        max_body_bytes: 64,
        ..HttpServerConfig::default()
    };
    let router = HttpServer::with_config(config, handler).router();

    let body = format!("name=Ada&email=ada%40example.com&message={}", "x".repeat(200));
    let request = Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(store.rows().unwrap().is_empty());
}

// =============================================================================
// Observability
// =============================================================================

#[tokio::test]
async fn test_health() {
    let router = router_with(Arc::new(InMemoryMessageStore::new()));

    let response = router.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_metrics_count_outcomes() {
    let router = router_with(Arc::new(InMemoryMessageStore::new()));

    let response = router
        .clone()
        .oneshot(post_form("name=&email=bad&message=hi"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .clone()
        .oneshot(post_form(
            "name=Ada&email=ada%40example.com&message=Play+Blue+Monday%2C+please%21",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = router.oneshot(get("/observability/metrics")).await.unwrap();
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["submissions_received"], 2);
    assert_eq!(json["submissions_accepted"], 1);
    assert_eq!(json["submissions_rejected"], 1);
    assert_eq!(json["rows_written"], 1);
}
