//! HTTP-level tests for the analyser API.
//!
//! These prove the REST contract end-to-end against the real router: the
//! analyze transform, the health check, extractor-level rejection of
//! malformed bodies, and the CORS policy.

use analyser_core::config::{CorsConfig, ServerConfig};
use analyser_web::create_router;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn test_app() -> axum::Router {
    create_router(&ServerConfig::default()).expect("default config must build a router")
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request must build")
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body must be JSON")
}

#[tokio::test]
async fn analyze_uppercases_and_counts() {
    let response = test_app()
        .oneshot(json_request(
            Method::POST,
            "/analyze",
            serde_json::json!({"text": "hello"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"output": "HELLO", "length": 5})
    );
}

#[tokio::test]
async fn analyze_accepts_empty_string() {
    let response = test_app()
        .oneshot(json_request(
            Method::POST,
            "/analyze",
            serde_json::json!({"text": ""}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"output": "", "length": 0})
    );
}

#[tokio::test]
async fn analyze_passes_caseless_text_through() {
    let response = test_app()
        .oneshot(json_request(
            Method::POST,
            "/analyze",
            serde_json::json!({"text": "123"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"output": "123", "length": 3})
    );
}

#[tokio::test]
async fn analyze_length_counts_input_characters() {
    let response = test_app()
        .oneshot(json_request(
            Method::POST,
            "/analyze",
            serde_json::json!({"text": "straße"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    // The output grows to 7 characters; length reports the 6 that came in.
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"output": "STRASSE", "length": 6})
    );
}

#[tokio::test]
async fn root_reports_running() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"message": "API Speed Analyser is running ✓"})
    );
}

#[tokio::test]
async fn analyze_rejects_missing_text_field() {
    let response = test_app()
        .oneshot(json_request(
            Method::POST,
            "/analyze",
            serde_json::json!({}),
        ))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn analyze_rejects_non_string_text() {
    let response = test_app()
        .oneshot(json_request(
            Method::POST,
            "/analyze",
            serde_json::json!({"text": 42}),
        ))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn preflight_mirrors_any_origin_with_credentials() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/analyze")
                .header(header::ORIGIN, "http://frontend.test")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .expect("allow-origin header must be present"),
        "http://frontend.test"
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .expect("allow-credentials header must be present"),
        "true"
    );
}

#[tokio::test]
async fn tightened_config_only_allows_listed_origin() {
    let mut config = ServerConfig::default();
    config.cors = CorsConfig {
        allow_origins: vec!["https://app.example.com".to_string()],
        allow_credentials: true,
        allow_methods: vec!["GET".to_string(), "POST".to_string()],
        allow_headers: vec!["content-type".to_string()],
    };
    let app = create_router(&config).expect("tightened config must build a router");

    let allowed = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/analyze")
                .header(header::ORIGIN, "https://app.example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        allowed
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .expect("listed origin must be allowed"),
        "https://app.example.com"
    );

    let denied = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/analyze")
                .header(header::ORIGIN, "https://evil.example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(denied
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
