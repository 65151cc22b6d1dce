//! Integration tests for the balance HTTP API.
//!
//! These tests drive the full Axum router with in-memory adapters and
//! verify status codes, the JSON envelope, and the snapshot field shape.

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
use balance_types::{Account, AccountId, AccountNumber, AccountStore, CustomerId};

fn demo_store() -> MemoryStore {
    MemoryStore::with_accounts(vec![
        Account::new(
            AccountId::new(1001),
            AccountNumber::new(1001),
            "Astrid Lindqvist",
            dec!(90000),
            "2024-03-07T15:30:00Z".parse().unwrap(),
        ),
        Account::new(
            AccountId::new(1002),
            AccountNumber::new(1002),
            "Bo Nilsson",
            dec!(500),
            "2023-11-30T08:00:00Z".parse().unwrap(),
        ),
        Account::new(
            AccountId::new(2001),
            AccountNumber::new(2),
            "Nordic Imports AB",
            dec!(42000),
            "2024-01-15T10:00:00Z".parse().unwrap(),
        )
        .with_business_customer(CustomerId::new(5)),
    ])
}

fn app() -> Router {
    let service = BalanceService::new(demo_store(), FixedRateProvider::new(), LogAlertSink::new());
    HttpServer::new(service).router()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = app().oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_sek_snapshot_field_shape() {
    let response = app().oneshot(get("/api/balance/1001/SEK")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["accountId"], 1001);
    assert_eq!(json["balance"], 90000.0);
    assert_eq!(json["accountHolder"], "Astrid Lindqvist");
    assert_eq!(json["lastTransaction"], "2024-03-07");

    let mut keys: Vec<_> = json.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["accountHolder", "accountId", "balance", "lastTransaction"]);
}

#[tokio::test]
async fn test_business_lookup_serialises_a_null_account_id() {
    let response = app().oneshot(get("/api/balance/BA5-2/SEK")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    // The field must be present and null, not dropped.
    assert!(json.as_object().unwrap().contains_key("accountId"));
    assert!(json["accountId"].is_null());
    assert_eq!(json["balance"], 42000.0);
    assert_eq!(json["accountHolder"], "Nordic Imports AB");
}

#[tokio::test]
async fn test_usd_conversion_through_the_api() {
    let response = app().oneshot(get("/api/balance/1002/USD")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    // 500 SEK at the fixed 0.105 rate.
    assert_eq!(json["balance"], 52.5);
}

#[tokio::test]
async fn test_malformed_identifier_is_a_400() {
    let response = app().oneshot(get("/api/balance/BA42/SEK")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], 400);
    assert!(json["error"].as_str().unwrap().contains("identifier"));
}

#[tokio::test]
async fn test_unknown_currency_is_a_400() {
    let response = app().oneshot(get("/api/balance/1001/DKK")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], 400);
    assert!(json["error"].as_str().unwrap().contains("currency"));
}

#[tokio::test]
async fn test_lowercase_currency_is_a_400() {
    let response = app().oneshot(get("/api/balance/1001/sek")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_account_is_a_404() {
    let response = app().oneshot(get("/api/balance/9999/SEK")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], 404);
}

#[tokio::test]
async fn test_gbp_is_a_501() {
    let response = app().oneshot(get("/api/balance/1001/GBP")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    let json = body_json(response).await;
    assert_eq!(json["code"], 501);
    assert!(json["error"].as_str().unwrap().contains("not implemented"));
}

#[tokio::test]
async fn test_contact_email_is_persisted_through_the_api() {
    let store = demo_store();
    let handle = store.clone();
    let service = BalanceService::new(store, FixedRateProvider::new(), LogAlertSink::new());
    let app = HttpServer::new(service).router();

    let response = app
        .oneshot(get("/api/balance/1001/SEK/astrid@example.se"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let saved = handle
        .find_account_by_id(AccountId::new(1001))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        saved.contact_information.as_deref(),
        Some("astrid@example.se")
    );
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let response = app().oneshot(get("/api-docs/openapi.json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(
        json["paths"]
            .as_object()
            .unwrap()
            .contains_key("/api/balance/{identifier}/{currency}")
    );
}
