//! Integration tests for the origin allow-list and CORS headers.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_bytes, send, ALLOWED_ORIGIN};
use serde_json::json;

fn request_from(origin: &str, method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Origin", origin)
        .body(Body::empty())
        .unwrap()
}

// ---------------------------------------------------------------------------
// Test: requests without an Origin header are served without CORS headers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn request_without_origin_is_allowed() {
    let (app, _) = common::build_test_app();
    let response = common::get(&app, "/movies").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: allowed origin gets Access-Control-Allow-Origin echoed back
// ---------------------------------------------------------------------------

#[tokio::test]
async fn allowed_origin_receives_cors_headers() {
    let (app, _) = common::build_test_app();
    let response = send(&app, request_from(ALLOWED_ORIGIN, Method::GET, "/movies")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, ALLOWED_ORIGIN);
}

// ---------------------------------------------------------------------------
// Test: disallowed origin is rejected before reaching a handler
// ---------------------------------------------------------------------------

#[tokio::test]
async fn disallowed_origin_is_rejected() {
    let (app, _) = common::build_test_app();
    let response = send(
        &app,
        request_from("http://evil.example", Method::GET, "/movies"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
    assert_eq!(body_bytes(response).await, b"Not allowed by CORS");
}

#[tokio::test]
async fn disallowed_origin_cannot_mutate_store() {
    let (app, state) = common::build_test_app();
    let before = state.store.read().await.len();
    let id = state.store.read().await.all()[0].id;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/movies")
        .header("Origin", "http://evil.example")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "title": "Inception",
                "year": 2010,
                "director": "Nolan",
                "duration": 148,
                "poster": "http://x/p.jpg",
                "genre": ["Action"]
            })
            .to_string(),
        ))
        .unwrap();
    assert_eq!(send(&app, request).await.status(), StatusCode::FORBIDDEN);

    let request = request_from("http://evil.example", Method::DELETE, &format!("/movies/{id}"));
    assert_eq!(send(&app, request).await.status(), StatusCode::FORBIDDEN);

    assert_eq!(state.store.read().await.len(), before);
}

// ---------------------------------------------------------------------------
// Test: CORS preflight for an allowed origin advertises the write methods
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_returns_correct_headers() {
    let (app, _) = common::build_test_app();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/movies/some-id")
        .header("Origin", ALLOWED_ORIGIN)
        .header("Access-Control-Request-Method", "PATCH")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, ALLOWED_ORIGIN);

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    for method in ["GET", "POST", "PATCH", "DELETE"] {
        assert!(
            allow_methods.contains(method),
            "Allow-Methods should contain {method}, got: {allow_methods}"
        );
    }
}

#[tokio::test]
async fn cors_preflight_from_disallowed_origin_is_rejected() {
    let (app, _) = common::build_test_app();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/movies")
        .header("Origin", "http://evil.example")
        .header("Access-Control-Request-Method", "DELETE")
        .body(Body::empty())
        .unwrap();

    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
