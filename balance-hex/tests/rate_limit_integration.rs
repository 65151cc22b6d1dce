//! Integration tests for rate limiting middleware.
//!
//! These tests verify the HTTP-level behavior of rate limiting,
//! including 429 responses and proper integration with the middleware stack.

use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rust_decimal_macros::dec;
use tower::ServiceExt;

use balance_adapters::{FixedRateProvider, LogAlertSink, MemoryStore};
use balance_hex::{BalanceService, inbound::HttpServer};
use balance_types::{Account, AccountId, AccountNumber};

/// Helper to create a test router with a very low rate limit.
fn test_app(requests_per_minute: u32) -> Router {
    let store = MemoryStore::with_accounts(vec![Account::new(
        AccountId::new(1),
        AccountNumber::new(1),
        "Astrid Lindqvist",
        dec!(1000),
        "2024-03-07T15:30:00Z".parse().unwrap(),
    )]);
    let service = BalanceService::new(store, FixedRateProvider::new(), LogAlertSink::new());
    HttpServer::with_limits(service, requests_per_minute, Duration::from_secs(10)).router()
}

/// Helper to make a health check request.
fn health_request() -> Request<Body> {
    Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap()
}

/// Helper to make a balance request from the given client address.
fn balance_request(client: &str) -> Request<Body> {
    Request::builder()
        .uri("/api/balance/1/SEK")
        .header("x-forwarded-for", client)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_rate_limiting_returns_429_when_exceeded() {
    // Only 3 requests allowed per minute
    let app = test_app(3);

    for i in 1..=3 {
        let response = app
            .clone()
            .oneshot(balance_request("10.0.0.1"))
            .await
            .unwrap();
        assert_ne!(
            response.status(),
            StatusCode::TOO_MANY_REQUESTS,
            "Request {} should not be rate limited (quota not yet exceeded)",
            i
        );
    }

    // 4th request should be rate limited
    let response = app
        .clone()
        .oneshot(balance_request("10.0.0.1"))
        .await
        .unwrap();

    assert_eq!(
        response.status(),
        StatusCode::TOO_MANY_REQUESTS,
        "Request should be rate limited after exceeding quota"
    );

    // Verify the response body contains the expected error
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .contains("Rate limit exceeded")
    );
    assert_eq!(json["retry_after_seconds"], 60);
}

#[tokio::test]
async fn test_rate_limiting_health_endpoint_bypassed() {
    // Only 1 request allowed per minute
    let app = test_app(1);

    // Health endpoint bypasses rate limiting entirely
    for _ in 0..10 {
        let response = app.clone().oneshot(health_request()).await.unwrap();

        assert_eq!(
            response.status(),
            StatusCode::OK,
            "Health endpoint should not be rate limited"
        );
    }
}

#[tokio::test]
async fn test_rate_limiting_per_client_isolation() {
    let app = test_app(1);

    // Client A uses up its quota
    let response = app
        .clone()
        .oneshot(balance_request("10.0.0.1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(balance_request("10.0.0.1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    // Client B still has its own quota
    let response = app
        .clone()
        .oneshot(balance_request("10.0.0.2"))
        .await
        .unwrap();
    assert_eq!(
        response.status(),
        StatusCode::OK,
        "Client B should have its own quota"
    );
}

#[tokio::test]
async fn test_rate_limiting_response_format() {
    let app = test_app(1);

    // Use up the quota, then get rate limited
    let _ = app.clone().oneshot(balance_request("10.0.0.9")).await;
    let response = app
        .clone()
        .oneshot(balance_request("10.0.0.9"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    let content_type = response.headers().get("content-type").unwrap();
    assert!(content_type.to_str().unwrap().contains("application/json"));

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert!(
        json.get("error").is_some(),
        "Response should have 'error' field"
    );
    assert!(
        json.get("retry_after_seconds").is_some(),
        "Response should have 'retry_after_seconds' field"
    );
}
